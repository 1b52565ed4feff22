//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the generate service needs from the outside
//! world. The `pakgen-adapters` crate provides the implementations.

use std::path::Path;

use crate::domain::{FilePlan, GenerationRequest, RelativePath, ResolvedIdentity};
use crate::error::PakgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `pakgen_adapters::filesystem::LocalFilesystem` (production)
/// - `pakgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// All paths are relative to the invocation directory (the repo root).
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> PakgenResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> PakgenResult<()>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for producing the file plan of a generation run.
///
/// Implemented by:
/// - `pakgen_adapters::templates::BuiltinTemplates` (the fixed four-file set)
pub trait TemplateSet: Send + Sync {
    /// Render the full plan for a resolved request.
    fn plan(
        &self,
        request: &GenerationRequest,
        identity: &ResolvedIdentity,
    ) -> PakgenResult<FilePlan>;
}

/// Port for the post-emission formatting pass.
///
/// Implemented by:
/// - `pakgen_adapters::formatter::PrettierFormatter` (subprocess, production)
/// - `pakgen_adapters::formatter::RecordingFormatter` (testing)
pub trait Formatter: Send + Sync {
    /// Format the given files in place. Blocks until the formatter exits.
    fn format(&self, paths: &[RelativePath]) -> PakgenResult<()>;
}
