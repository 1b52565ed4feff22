//! Formatter adapter that shells out to the repository's formatter.

use std::process::Command;

use tracing::{debug, info};

use pakgen_core::{
    application::{ApplicationError, ports::Formatter},
    domain::RelativePath,
    error::PakgenResult,
};

/// Runs the workspace formatter over emitted files.
///
/// Defaults to `pnpm -w exec prettier --write <paths...>`, matching how the
/// monorepo formats everything else; command and leading arguments come
/// from configuration. The child inherits stdio (its output appears in the
/// invoking terminal) and the unmodified process environment. Each path is
/// passed as its own argv element, so no shell quoting is involved.
#[derive(Debug, Clone)]
pub struct PrettierFormatter {
    command: String,
    args: Vec<String>,
}

impl PrettierFormatter {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }
}

impl Default for PrettierFormatter {
    fn default() -> Self {
        Self::new(
            "pnpm",
            ["-w", "exec", "prettier", "--write"]
                .map(String::from)
                .to_vec(),
        )
    }
}

impl Formatter for PrettierFormatter {
    fn format(&self, paths: &[RelativePath]) -> PakgenResult<()> {
        if paths.is_empty() {
            return Ok(());
        }

        debug!(command = %self.command, files = paths.len(), "running formatter");

        // Blocks until the formatter exits; stdio is inherited by default.
        let status = Command::new(&self.command)
            .args(&self.args)
            .args(paths.iter().map(|p| p.as_path()))
            .status()
            .map_err(|e| ApplicationError::FormatterSpawnFailed {
                command: self.command.clone(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(ApplicationError::FormatterFailed {
                command: self.command.clone(),
                status: status.to_string(),
            }
            .into());
        }

        info!(files = paths.len(), "formatter pass complete");
        Ok(())
    }
}
