//! Application layer errors.
//!
//! These represent orchestration failures, not invalid requests. Invalid
//! requests are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while executing a generation run.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Template rendering failed.
    #[error("template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed. Fatal for the run; files written before
    /// the failure remain on disk.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The formatter subprocess could not be spawned.
    #[error("formatter '{command}' could not be started: {reason}")]
    FormatterSpawnFailed { command: String, reason: String },

    /// The formatter ran but exited non-zero. The emitted files remain on
    /// disk; only the cosmetic pass failed.
    #[error("formatter '{command}' exited with {status}")]
    FormatterFailed { command: String, status: String },
}

impl ApplicationError {
    /// User-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RenderingFailed { reason } => vec![
                format!("Rendering failed: {reason}"),
                "This is likely a bug in the built-in templates".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Run from the repository root".into(),
            ],
            Self::FormatterSpawnFailed { command, .. } => vec![
                format!("'{command}' is not installed or not on PATH"),
                "The generated files were written and remain on disk".into(),
                "Re-run the formatter manually, or pass --no-format".into(),
            ],
            Self::FormatterFailed { .. } => vec![
                "The generated files were written and remain on disk".into(),
                "Check the formatter output above for details".into(),
            ],
        }
    }

    /// Error category for display and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RenderingFailed { .. } => ErrorCategory::Internal,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::FormatterSpawnFailed { .. } | Self::FormatterFailed { .. } => {
                ErrorCategory::External
            }
        }
    }

    /// `true` when the scaffold itself succeeded and only the cosmetic
    /// formatting pass failed.
    pub fn is_format_failure(&self) -> bool {
        matches!(
            self,
            Self::FormatterSpawnFailed { .. } | Self::FormatterFailed { .. }
        )
    }
}
