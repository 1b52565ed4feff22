//! `pakgen config` — read and write configuration values.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::Set { key, value } => {
            // Per-key persistence is out of scope; `pakgen init` writes the
            // whole file instead.
            output.print(&format!(
                "Setting {key} = {value} is not persisted; edit pakgen.toml (see 'pakgen init')"
            ))?;
        }

        ConfigCommands::List => {
            output.header("Current configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "workspace.scope" => Ok(config.workspace.scope.clone()),
        "workspace.packages_root" => Ok(config.workspace.packages_root.clone()),
        "workspace.configs_dir" => Ok(config.workspace.configs_dir.clone()),
        "format.enabled" => Ok(config.format.enabled.to_string()),
        "format.command" => Ok(config.format.command.clone()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
