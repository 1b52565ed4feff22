//! Generate service - the application orchestrator.
//!
//! Coordinates one scaffolding run:
//! 1. Resolve the package identity (pure, fails before any I/O)
//! 2. Render the file plan via the template set
//! 3. Write the plan in order, honoring per-file write policies
//! 4. Optionally hand the emitted paths to the formatter
//!
//! Emission is non-transactional: a write failure aborts the run and leaves
//! every previously written file on disk. Formatting is a separate step so
//! callers can treat a formatter failure as recoverable — the scaffold
//! itself already succeeded.

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, Formatter, TemplateSet},
    domain::{FilePlan, GenerationRequest, RelativePath, ResolvedIdentity, WorkspaceLayout, WritePolicy},
    error::PakgenResult,
};

/// Outcome of a generation run, in plan order.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateReport {
    pub scoped_name: String,
    pub package_dir: RelativePath,
    /// Every planned destination, whether written or skipped.
    pub planned: Vec<RelativePath>,
    pub written: Vec<RelativePath>,
    pub skipped: Vec<RelativePath>,
}

/// Main scaffolding service.
pub struct GenerateService {
    templates: Box<dyn TemplateSet>,
    filesystem: Box<dyn Filesystem>,
    formatter: Option<Box<dyn Formatter>>,
}

impl GenerateService {
    pub fn new(templates: Box<dyn TemplateSet>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            templates,
            filesystem,
            formatter: None,
        }
    }

    /// Attach a formatter to run over the emitted paths.
    pub fn with_formatter(mut self, formatter: Box<dyn Formatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Resolve and render without touching the filesystem.
    ///
    /// Used directly for dry runs; `generate` goes through it too, so the
    /// empty-folder-name rejection always happens before any I/O.
    pub fn plan(
        &self,
        request: &GenerationRequest,
        layout: &WorkspaceLayout,
    ) -> PakgenResult<(ResolvedIdentity, FilePlan)> {
        let identity = ResolvedIdentity::resolve(request, layout)?;
        let plan = self.templates.plan(request, &identity)?;
        Ok((identity, plan))
    }

    /// Execute a scaffolding run: render the plan and write it.
    #[instrument(skip_all, fields(name = %request.raw_name, kind = %request.kind))]
    pub fn generate(
        &self,
        request: &GenerationRequest,
        layout: &WorkspaceLayout,
    ) -> PakgenResult<GenerateReport> {
        let (identity, plan) = self.plan(request, layout)?;
        info!(
            package = %identity.scoped_name,
            dir = %identity.package_dir,
            files = plan.len(),
            "generating package"
        );

        let mut written = Vec::new();
        let mut skipped = Vec::new();

        for file in plan.files() {
            if file.policy == WritePolicy::SkipIfExists && self.filesystem.exists(file.path.as_path())
            {
                debug!(path = %file.path, "exists, skipping");
                skipped.push(file.path.clone());
                continue;
            }

            if let Some(parent) = file.path.as_path().parent() {
                if !parent.as_os_str().is_empty() {
                    self.filesystem.create_dir_all(parent)?;
                }
            }
            self.filesystem.write_file(file.path.as_path(), &file.content)?;
            debug!(path = %file.path, "written");
            written.push(file.path.clone());
        }

        info!(written = written.len(), skipped = skipped.len(), "emission complete");

        Ok(GenerateReport {
            scoped_name: identity.scoped_name,
            package_dir: identity.package_dir,
            planned: plan.paths(),
            written,
            skipped,
        })
    }

    /// Run the formatting pass over every planned path.
    ///
    /// A no-op when no formatter is attached. Failure here never rolls back
    /// the emitted files.
    #[instrument(skip_all, fields(files = report.planned.len()))]
    pub fn format_outputs(&self, report: &GenerateReport) -> PakgenResult<()> {
        let Some(formatter) = &self.formatter else {
            debug!("no formatter attached, skipping format pass");
            return Ok(());
        };
        formatter.format(&report.planned)
    }
}
