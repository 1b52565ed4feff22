//! Implementation of the `pakgen generate` command.
//!
//! Responsibility: turn flags and prompt answers into a `GenerationRequest`,
//! call the core generate service, and display results. No naming or
//! emission logic lives here.

use tracing::{debug, info, instrument};

use pakgen_adapters::{BuiltinTemplates, LocalFilesystem, PrettierFormatter};
use pakgen_core::{
    application::GenerateService,
    domain::{GenerationRequest, PackageKind, WritePolicy},
};

use crate::{
    cli::{GenerateArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    registry,
};

/// Execute the `pakgen generate` command.
///
/// Dispatch sequence:
/// 1. Check the generator name against the registry
/// 2. Resolve the request (prompts, unless unattended)
/// 3. Wire up adapters and the generate service
/// 4. Early-exit if `--dry-run`
/// 5. Emit the files, then run the formatting pass
/// 6. Print results and next steps
#[instrument(skip_all)]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Generator lookup
    let generator = args
        .generator
        .as_deref()
        .unwrap_or(registry::DEFAULT_GENERATOR);
    if registry::find(generator).is_none() {
        return Err(CliError::UnknownGenerator {
            name: generator.into(),
        });
    }

    // 2. Resolve the request
    let request = resolve_request(&args)?;
    debug!(
        name = %request.raw_name,
        kind = %request.kind,
        subdir = request.subdir_hint.as_deref().unwrap_or(""),
        react = request.include_react,
        "request resolved"
    );

    // 3. Wire up the service
    let mut service = GenerateService::new(
        Box::new(BuiltinTemplates::new()),
        Box::new(LocalFilesystem::new()),
    );
    if config.format.enabled && !args.no_format {
        service = service.with_formatter(Box::new(PrettierFormatter::new(
            config.format.command.clone(),
            config.format.args.clone(),
        )));
    }

    // 4. Dry run: describe but do not write.
    if args.dry_run {
        let (identity, plan) = service.plan(&request, &config.workspace)?;
        output.info(&format!(
            "Dry run: would scaffold '{}' at {}",
            identity.scoped_name, identity.package_dir,
        ))?;
        for file in plan.files() {
            let policy = match file.policy {
                WritePolicy::Overwrite => "overwrite",
                WritePolicy::SkipIfExists => "keep if present",
            };
            output.print(&format!("  {} ({policy})", file.path))?;
        }
        return Ok(());
    }

    // 5. Emit
    output.header(&format!("Creating '{}'...", request.raw_name))?;
    info!(name = %request.raw_name, "scaffold started");

    let report = service.generate(&request, &config.workspace)?;

    for path in &report.written {
        output.print(&format!("  wrote {path}"))?;
    }
    for path in &report.skipped {
        output.info(&format!("  kept existing {path}"))?;
    }

    // Formatting is a separate, non-transactional step: on failure the
    // emitted files stay on disk and we report that before propagating.
    if let Err(e) = service.format_outputs(&report) {
        output.warning("Formatting failed; the scaffolded files remain on disk")?;
        return Err(e.into());
    }

    info!(package = %report.scoped_name, "scaffold completed");

    // 6. Results
    if output.format() == OutputFormat::Json {
        // JSON goes straight to stdout so it stays parseable in pipes.
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".into())
        );
        return Ok(());
    }

    output.success(&format!(
        "Package '{}' created at {}",
        report.scoped_name, report.package_dir,
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", report.package_dir))?;
        output.print("  pnpm install")?;
    }

    Ok(())
}

// ── Request resolution ────────────────────────────────────────────────────────

/// Produce the request from prompts or flags.
///
/// Unattended runs (`--yes`, a non-TTY stdin, or a build without the
/// `interactive` feature) take flags as-is; otherwise flags pre-fill the
/// prompts.
fn resolve_request(args: &GenerateArgs) -> CliResult<GenerationRequest> {
    #[cfg(feature = "interactive")]
    {
        use std::io::IsTerminal as _;
        let unattended = args.yes || !std::io::stdin().is_terminal();
        if !unattended {
            return crate::prompts::ask(args);
        }
    }
    request_from_flags(args)
}

/// Build a request from flags alone. The name is the only required field.
fn request_from_flags(args: &GenerateArgs) -> CliResult<GenerationRequest> {
    let name = args
        .name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CliError::InvalidInput {
            message: "package name is required (pass --name or run interactively)".into(),
        })?;

    let kind = args.kind.map(PackageKind::from).unwrap_or(PackageKind::Library);

    Ok(GenerationRequest::new(name, kind)
        .with_subdir(args.dir.clone().unwrap_or_default())
        .with_react(args.react.unwrap_or(false)))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
