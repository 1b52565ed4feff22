//! Implementation of the `pakgen list` command.

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    error::CliResult,
    output::OutputManager,
    registry,
};

pub fn execute(args: ListArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    match args.format {
        ListFormat::Table => {
            output.header("Available generators:")?;
            for generator in registry::GENERATORS {
                output.print(&format!("  {:<12} {}", generator.name, generator.description))?;
            }
        }

        ListFormat::List => {
            for generator in registry::GENERATORS {
                println!("{}", generator.name);
            }
        }

        ListFormat::Json => {
            // JSON goes straight to stdout so it stays parseable in pipes.
            let json = serde_json::to_string_pretty(registry::GENERATORS)
                .unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }
    }

    Ok(())
}
