//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use pakgen_core::domain::PackageKind;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "pakgen",
    bin_name = "pakgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Workspace package scaffolding",
    long_about = "pakgen creates new workspace members for the monorepo: \
                  a scoped manifest, tsconfig, entry stub, and readme, \
                  formatted to match the rest of the repository.",
    after_help = "EXAMPLES:\n\
        \x20 pakgen generate --name my-utils --kind lib\n\
        \x20 pakgen generate --name shared-eslint --kind config --yes --no-format\n\
        \x20 pakgen list\n\
        \x20 pakgen completions bash > /usr/share/bash-completion/completions/pakgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a generator from the registry.
    #[command(
        visible_alias = "g",
        about = "Create a new workspace package",
        after_help = "EXAMPLES:\n\
            \x20 pakgen generate                       # fully interactive\n\
            \x20 pakgen generate --name my-utils       # prompts pre-filled\n\
            \x20 pakgen generate --name ui-kit --react --yes\n\
            \x20 pakgen generate --name shared-eslint --kind config --yes"
    )]
    Generate(GenerateArgs),

    /// List available generators.
    #[command(
        visible_alias = "ls",
        about = "List available generators",
        after_help = "EXAMPLES:\n\
            \x20 pakgen list\n\
            \x20 pakgen list --format json"
    )]
    List(ListArgs),

    /// Initialise a pakgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 pakgen init           # global config\n\
            \x20 pakgen init --local   # pakgen.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 pakgen completions bash > ~/.local/share/bash-completion/completions/pakgen\n\
            \x20 pakgen completions zsh  > ~/.zfunc/_pakgen\n\
            \x20 pakgen completions fish > ~/.config/fish/completions/pakgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the pakgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 pakgen config get workspace.scope\n\
            \x20 pakgen config list"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `pakgen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Which generator to run. The registry currently holds `package`.
    #[arg(value_name = "GENERATOR", help = "Generator name (default: package)")]
    pub generator: Option<String>,

    /// Package name; pre-fills the interactive prompt.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        help = "Package name, with or without the scope (e.g. my-utils, @biu/my-utils)"
    )]
    pub name: Option<String>,

    /// Package kind.
    #[arg(
        short = 'k',
        long = "kind",
        value_name = "KIND",
        value_enum,
        help = "Package kind"
    )]
    pub kind: Option<KindArg>,

    /// Subdirectory under the packages root.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "SUBDIR",
        help = "Subdirectory under packages/ (default derived from kind)"
    )]
    pub dir: Option<String>,

    /// Declare React peer dependencies in the manifest.
    ///
    /// A bare `--react` means true; with a value, only a case-insensitive
    /// `true` is truthy, anything else is false.
    #[arg(
        long = "react",
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = parse_reactish,
        help = "Include React peer dependencies (bare flag means true)"
    )]
    pub react: Option<bool>,

    /// Skip all prompts and take flags as-is.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Unattended mode: no prompts, flags taken as-is"
    )]
    pub yes: bool,

    /// Preview the file plan without writing anything.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,

    /// Skip the formatting pass over the emitted files.
    #[arg(long = "no-format", help = "Do not run the formatter afterwards")]
    pub no_format: bool,
}

/// Boolean coercion for `--react`: only a case-insensitive `true` is truthy.
fn parse_reactish(s: &str) -> Result<bool, std::convert::Infallible> {
    Ok(s.eq_ignore_ascii_case("true"))
}

/// Package kinds as exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum KindArg {
    /// Also accepted as `library`.
    #[value(alias = "library")]
    Lib,
    /// Also accepted as `configs`.
    #[value(alias = "configs")]
    Config,
}

impl From<KindArg> for PackageKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Lib => PackageKind::Library,
            KindArg::Config => PackageKind::Config,
        }
    }
}

impl std::fmt::Display for KindArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lib => write!(f, "lib"),
            Self::Config => write!(f, "config"),
        }
    }
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `pakgen list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `pakgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the global config location.
    #[arg(long = "global", help = "Create global configuration")]
    pub global: bool,

    /// Write to `pakgen.toml` in the current directory.
    #[arg(
        long = "local",
        conflicts_with = "global",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `pakgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `pakgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `workspace.scope`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
