//! pakgen core - hexagonal architecture implementation
//!
//! This crate provides the domain and application layers for the pakgen
//! workspace-package scaffolding tool, following ports-and-adapters
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           pakgen-cli (CLI)              │
//! │    (prompts, flags, presentation)       │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          GenerateService                │
//! │     (plan → write → format)             │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Filesystem, TemplateSet, Formatter)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     pakgen-adapters (Infrastructure)    │
//! │ (LocalFilesystem, BuiltinTemplates, …)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (naming, ResolvedIdentity, FilePlan)    │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pakgen_core::prelude::*;
//!
//! # fn demo(templates: Box<dyn TemplateSet>, filesystem: Box<dyn Filesystem>) -> PakgenResult<()> {
//! let request = GenerationRequest::new("my-utils", PackageKind::Library);
//! let service = GenerateService::new(templates, filesystem);
//! let report = service.generate(&request, &WorkspaceLayout::default())?;
//! service.format_outputs(&report)?;
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateReport, GenerateService,
        ports::{Filesystem, Formatter, TemplateSet},
    };
    pub use crate::domain::{
        FilePlan, GenerationRequest, PackageKind, PlannedFile, RelativePath, RenderContext,
        ResolvedIdentity, WorkspaceLayout, WritePolicy,
    };
    pub use crate::error::{PakgenError, PakgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
