//! File plans: the ordered set of writes a generation run performs.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::identity::ResolvedIdentity;
use crate::domain::path::RelativePath;
use crate::domain::request::GenerationRequest;

/// What to do when a planned file already exists on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WritePolicy {
    /// Always write, replacing any existing file (the manifest).
    Overwrite,
    /// Leave an existing file untouched (hand-edited config, stubs, docs).
    SkipIfExists,
}

/// One file the generator intends to write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedFile {
    /// Destination relative to the repo root (includes the package dir).
    pub path: RelativePath,
    pub content: String,
    pub policy: WritePolicy,
}

/// The ordered write list for one generation run.
///
/// Deliberately a plain ordered list with per-item policies rather than an
/// atomic batch: emission is non-transactional, and a mid-run failure leaves
/// the files written so far on disk.
#[derive(Debug, Clone, Default)]
pub struct FilePlan {
    files: Vec<PlannedFile>,
}

impl FilePlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: RelativePath, content: String, policy: WritePolicy) {
        self.files.push(PlannedFile {
            path,
            content,
            policy,
        });
    }

    pub fn files(&self) -> &[PlannedFile] {
        &self.files
    }

    /// Every planned destination, in write order.
    pub fn paths(&self) -> Vec<RelativePath> {
        self.files.iter().map(|f| f.path.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Variable map substituted into `{{VAR}}` placeholders in template bodies.
///
/// Built once per run from the request and resolved identity. The variable
/// names are the contract between the core and the template set:
///
/// | Variable        | Value                                   |
/// |-----------------|-----------------------------------------|
/// | `NAME`          | scoped package name (`@biu/foo`)        |
/// | `FOLDER`        | folder name (`foo`)                     |
/// | `DIR`           | package directory (`packages/foo`)      |
/// | `KIND`          | package kind (`lib` / `config`)         |
/// | `RELATIVE_ROOT` | `../` per level back to the repo root   |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(request: &GenerationRequest, identity: &ResolvedIdentity) -> Self {
        let mut variables = HashMap::new();
        variables.insert("NAME".into(), identity.scoped_name.clone());
        variables.insert("FOLDER".into(), identity.folder_name.clone());
        variables.insert("DIR".into(), identity.package_dir.to_string());
        variables.insert("KIND".into(), request.kind.to_string());
        variables.insert("RELATIVE_ROOT".into(), identity.relative_root());
        Self { variables }
    }

    /// Substitute every `{{VAR}}` occurrence in `template`.
    ///
    /// Unknown placeholders are left as-is so a typo in a template shows up
    /// verbatim in the output instead of vanishing silently.
    pub fn render(&self, template: &str) -> String {
        let mut out = template.to_string();
        for (key, value) in &self.variables {
            out = out.replace(&format!("{{{{{key}}}}}"), value);
        }
        out
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::identity::WorkspaceLayout;
    use crate::domain::request::PackageKind;

    fn context() -> RenderContext {
        let request = GenerationRequest::new("my-utils", PackageKind::Library);
        let identity =
            ResolvedIdentity::resolve(&request, &WorkspaceLayout::default()).unwrap();
        RenderContext::new(&request, &identity)
    }

    #[test]
    fn render_substitutes_all_variables() {
        let ctx = context();
        let out = ctx.render("{{NAME}} in {{DIR}} ({{KIND}})");
        assert_eq!(out, "@biu/my-utils in packages/my-utils (lib)");
    }

    #[test]
    fn render_leaves_unknown_placeholders() {
        let ctx = context();
        assert_eq!(ctx.render("{{NOPE}}"), "{{NOPE}}");
    }

    #[test]
    fn plan_preserves_order() {
        let mut plan = FilePlan::new();
        plan.push("a.json".into(), "{}".into(), WritePolicy::Overwrite);
        plan.push("b.md".into(), "# b".into(), WritePolicy::SkipIfExists);
        let paths: Vec<String> = plan.paths().iter().map(|p| p.to_string()).collect();
        assert_eq!(paths, ["a.json", "b.md"]);
    }
}
