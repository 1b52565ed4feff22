//! Unified error handling for the pakgen core.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for core operations.
#[derive(Debug, Error, Clone)]
pub enum PakgenError {
    /// Invalid request (business-rule violation).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Orchestration failure (filesystem, rendering, formatter).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl PakgenError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// `true` when file emission succeeded and only formatting failed.
    pub fn is_format_failure(&self) -> bool {
        matches!(self, Self::Application(e) if e.is_format_failure())
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    External,
    Internal,
}

/// Convenient result type alias.
pub type PakgenResult<T> = Result<T, PakgenError>;
