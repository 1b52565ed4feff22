//! Application services.

pub mod generate_service;

pub use generate_service::{GenerateReport, GenerateService};
