//! The generator registry.
//!
//! Generators are looked up by name on `pakgen generate [GENERATOR]` and
//! enumerated by `pakgen list`. There is currently a single generator; the
//! registry exists so the invocation surface stays stable when more are
//! added.

use serde::Serialize;

/// A registered generator.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GeneratorInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// Name of the generator used when none is given.
pub const DEFAULT_GENERATOR: &str = "package";

/// All registered generators.
pub const GENERATORS: &[GeneratorInfo] = &[GeneratorInfo {
    name: "package",
    description: "Create a new workspace package (default @biu/*)",
}];

/// Look up a generator by name.
pub fn find(name: &str) -> Option<&'static GeneratorInfo> {
    GENERATORS.iter().find(|g| g.name == name)
}
