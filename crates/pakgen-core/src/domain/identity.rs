//! Identity resolution: from a raw request to canonical name and location.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::naming::{join_segments, to_folder_name, to_scoped_name};
use crate::domain::path::RelativePath;
use crate::domain::request::{GenerationRequest, PackageKind};

/// Where the monorepo keeps its packages.
///
/// Loaded from configuration by the CLI; the defaults match the repository
/// this tool was written for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceLayout {
    /// Organization scope applied to every generated package name.
    pub scope: String,
    /// Directory holding workspace members, relative to the repo root.
    pub packages_root: String,
    /// Subdirectory under the packages root for `Config`-kind packages.
    pub configs_dir: String,
}

impl Default for WorkspaceLayout {
    fn default() -> Self {
        Self {
            scope: "biu".into(),
            packages_root: "packages".into(),
            configs_dir: "configs".into(),
        }
    }
}

/// Canonical package identity, derived once per run.
///
/// This is the single source of truth for every emitted path and every
/// substitution variable. Invariants (enforced by [`ResolvedIdentity::resolve`]):
///
/// - `scoped_name` always begins with `@<scope>/`
/// - `folder_name` is never empty
/// - `package_dir` is a forward-slash relative path with no empty segments
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedIdentity {
    pub scoped_name: String,
    pub folder_name: String,
    pub package_dir: RelativePath,
}

impl ResolvedIdentity {
    /// Resolve a request against the workspace layout.
    ///
    /// Fails with [`DomainError::EmptyPackageName`] for blank input and
    /// [`DomainError::EmptyFolderName`] when the name degrades to nothing
    /// (e.g. `"@biu/"`). Both are raised before any filesystem interaction.
    pub fn resolve(
        request: &GenerationRequest,
        layout: &WorkspaceLayout,
    ) -> Result<Self, DomainError> {
        if request.raw_name.trim().is_empty() {
            return Err(DomainError::EmptyPackageName);
        }

        let scoped_name = to_scoped_name(&request.raw_name, &layout.scope);
        let folder_name = to_folder_name(&scoped_name);
        if folder_name.is_empty() {
            return Err(DomainError::EmptyFolderName {
                raw: request.raw_name.clone(),
            });
        }

        // Explicit subdir wins; otherwise the kind decides. Library packages
        // sit directly under the packages root.
        let default_subdir = match request.kind {
            PackageKind::Config => layout.configs_dir.as_str(),
            PackageKind::Library => "",
        };
        let subdir = request
            .subdir_hint
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(default_subdir);

        let package_dir = join_segments([layout.packages_root.as_str(), subdir, &folder_name]);

        Ok(Self {
            scoped_name,
            folder_name,
            package_dir: RelativePath::new(package_dir),
        })
    }

    /// `"../"` repeated once per directory level between the package and the
    /// repo root. Templates use it to reach root-level config (e.g. the base
    /// tsconfig) from wherever the package landed.
    pub fn relative_root(&self) -> String {
        let depth = self.package_dir.as_path().components().count();
        "../".repeat(depth)
    }
}
