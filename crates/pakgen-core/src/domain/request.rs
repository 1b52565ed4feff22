//! The generation request: what the user asked for, before resolution.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// The category of package to scaffold.
///
/// The kind controls the default destination subdirectory (`Config` nests
/// under the configs directory) and the flavour of the emitted manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageKind {
    /// A TypeScript library package.
    Library,
    /// A shared-configuration package (eslint/prettier/tsconfig presets).
    Config,
}

impl PackageKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Library => "lib",
            Self::Config => "config",
        }
    }
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lib" | "library" => Ok(Self::Library),
            "config" | "configs" => Ok(Self::Config),
            other => Err(DomainError::UnknownKind(other.to_string())),
        }
    }
}

/// A single scaffolding request, immutable once built.
///
/// Constructed by the CLI from flags and/or interactive prompt answers;
/// everything downstream (identity resolution, template rendering) reads
/// from it and never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The name exactly as the user typed it (may already carry the scope).
    pub raw_name: String,
    pub kind: PackageKind,
    /// Explicit subdirectory under the packages root, overriding the
    /// kind-derived default. Blank is treated as absent.
    pub subdir_hint: Option<String>,
    /// Whether the manifest should declare React peer dependencies.
    pub include_react: bool,
}

impl GenerationRequest {
    pub fn new(raw_name: impl Into<String>, kind: PackageKind) -> Self {
        Self {
            raw_name: raw_name.into(),
            kind,
            subdir_hint: None,
            include_react: false,
        }
    }

    pub fn with_subdir(mut self, subdir: impl Into<String>) -> Self {
        let subdir = subdir.into();
        self.subdir_hint = if subdir.trim().is_empty() {
            None
        } else {
            Some(subdir)
        };
        self
    }

    pub fn with_react(mut self, include_react: bool) -> Self {
        self.include_react = include_react;
        self
    }
}
