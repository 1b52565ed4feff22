//! Interactive prompt flow (behind the `interactive` feature).
//!
//! Flags supplied on the command line pre-fill the prompt defaults; the
//! user can still override every answer. The prompt set matches the
//! generator's contract: name (required), kind, subdir, react.

use dialoguer::{Input, Select};

use pakgen_core::domain::{GenerationRequest, PackageKind};

use crate::cli::{GenerateArgs, KindArg};
use crate::error::CliResult;

/// Ask for every answer the generator needs, pre-filled from `args`.
pub fn ask(args: &GenerateArgs) -> CliResult<GenerationRequest> {
    let name = prompt_name(args.name.as_deref())?;
    let kind = prompt_kind(args.kind)?;
    let subdir = prompt_subdir(args.dir.as_deref(), kind)?;
    let react = prompt_react(args.react)?;

    Ok(GenerationRequest::new(name, kind)
        .with_subdir(subdir)
        .with_react(react))
}

fn prompt_name(default: Option<&str>) -> CliResult<String> {
    let mut input = Input::<String>::new()
        .with_prompt("Package name (without @biu/, e.g. my-utils)")
        .validate_with(|value: &String| -> Result<(), &str> {
            if value.trim().is_empty() {
                Err("Package name is required")
            } else {
                Ok(())
            }
        });

    if let Some(default) = default.map(str::trim).filter(|s| !s.is_empty()) {
        input = input.default(default.to_string());
    }

    Ok(input.interact_text()?)
}

fn prompt_kind(default: Option<KindArg>) -> CliResult<PackageKind> {
    let choices = ["lib (TS library)", "config (packages/configs/*)"];
    let default_index = match default {
        Some(KindArg::Config) => 1,
        _ => 0,
    };

    let selection = Select::new()
        .with_prompt("Package kind")
        .items(&choices)
        .default(default_index)
        .interact()?;

    Ok(match selection {
        1 => PackageKind::Config,
        _ => PackageKind::Library,
    })
}

fn prompt_subdir(default: Option<&str>, kind: PackageKind) -> CliResult<String> {
    let placement = match kind {
        PackageKind::Config => "packages/configs/",
        PackageKind::Library => "packages/",
    };

    Ok(Input::<String>::new()
        .with_prompt(format!(
            "Subdirectory under packages/ (leave blank for {placement})"
        ))
        .allow_empty(true)
        .default(default.unwrap_or_default().to_string())
        .show_default(false)
        .interact_text()?)
}

fn prompt_react(default: Option<bool>) -> CliResult<bool> {
    let choices = ["No", "Yes"];
    let default_index = usize::from(default == Some(true));

    let selection = Select::new()
        .with_prompt("Include React peerDependencies?")
        .items(&choices)
        .default(default_index)
        .interact()?;

    Ok(selection == 1)
}
