use thiserror::Error;

/// Domain-level failures: invalid requests, never I/O.
///
/// All variants are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provide suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("package name is required")]
    EmptyPackageName,

    /// The name degraded to an empty folder segment (e.g. `"@biu/"`).
    #[error("'{raw}' does not contain a usable folder name")]
    EmptyFolderName { raw: String },

    #[error("unknown package kind: {0}")]
    UnknownKind(String),

    #[error("absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyPackageName => vec![
                "Provide a package name, e.g. my-utils or @biu/my-utils".into(),
            ],
            Self::EmptyFolderName { raw } => vec![
                format!("'{raw}' has a scope marker but no name after the '/'"),
                "Use the form @biu/<name> or just <name>".into(),
            ],
            Self::UnknownKind(_) => vec![
                "Supported kinds:".into(),
                "  • lib    - TypeScript library".into(),
                "  • config - shared configuration package".into(),
            ],
            Self::AbsolutePathNotAllowed { .. } => vec![
                "Destinations are always relative to the repo root".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyPackageName | Self::EmptyFolderName { .. } | Self::UnknownKind(_) => {
                ErrorCategory::Validation
            }
            Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
