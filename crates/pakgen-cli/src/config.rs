//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate only sees the `WorkspaceLayout`
//! it derives identities from.
//!
//! # Resolution order (highest priority first)
//!
//! 1. `--config <FILE>` (must exist)
//! 2. `pakgen.toml` in the current directory
//! 3. The platform config dir (`directories::ProjectDirs`)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use pakgen_core::domain::WorkspaceLayout;

/// Name of the per-repository config file.
pub const LOCAL_CONFIG_FILE: &str = "pakgen.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Monorepo layout: scope, packages root, configs subdirectory.
    pub workspace: WorkspaceLayout,
    /// Formatting pass settings.
    pub format: FormatConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Whether to run the formatter over emitted files at all.
    pub enabled: bool,
    /// Formatter executable.
    pub command: String,
    /// Arguments placed before the file paths.
    pub args: Vec<String>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: "pnpm".into(),
            args: ["-w", "exec", "prettier", "--write"]
                .map(String::from)
                .to_vec(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration following the resolution order above.
    ///
    /// An explicit `--config` path that does not exist is an error; the
    /// implicit locations fall through silently to defaults.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        if let Some(path) = config_file {
            return Self::read_file(path)
                .with_context(|| format!("failed to read config from '{}'", path.display()));
        }

        let local = Path::new(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Self::read_file(local)
                .with_context(|| format!("failed to read config from '{LOCAL_CONFIG_FILE}'"));
        }

        let global = Self::config_path();
        if global.exists() {
            return Self::read_file(&global)
                .with_context(|| format!("failed to read config from '{}'", global.display()));
        }

        Ok(Self::default())
    }

    fn read_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }

    /// Path to the default (global) configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `pakgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "biu", "pakgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scope_is_biu() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.workspace.scope, "biu");
        assert_eq!(cfg.workspace.packages_root, "packages");
        assert_eq!(cfg.workspace.configs_dir, "configs");
    }

    #[test]
    fn default_formatter_is_prettier_via_pnpm() {
        let cfg = AppConfig::default();
        assert!(cfg.format.enabled);
        assert_eq!(cfg.format.command, "pnpm");
        assert_eq!(cfg.format.args, ["-w", "exec", "prettier", "--write"]);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = PathBuf::from("/definitely/not/here/pakgen.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pakgen.toml");
        std::fs::write(&path, "[workspace]\nscope = \"acme\"\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.workspace.scope, "acme");
        // untouched sections keep their defaults
        assert_eq!(cfg.workspace.packages_root, "packages");
        assert!(cfg.format.enabled);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pakgen.toml");
        std::fs::write(&path, "workspace = 3").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }

    #[test]
    fn roundtrips_through_toml() {
        let cfg = AppConfig::default();
        let serialised = toml::to_string_pretty(&cfg).unwrap();
        let parsed: AppConfig = toml::from_str(&serialised).unwrap();
        assert_eq!(parsed.workspace.scope, cfg.workspace.scope);
        assert_eq!(parsed.format.args, cfg.format.args);
    }
}
