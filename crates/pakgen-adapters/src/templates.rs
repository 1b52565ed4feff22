//! Built-in template set: the four files every new package starts with.
//!
//! The set is fixed and ordered:
//!
//! | File            | Policy        |
//! |-----------------|---------------|
//! | `package.json`  | Overwrite     |
//! | `tsconfig.json` | SkipIfExists  |
//! | `src/index.ts`  | SkipIfExists  |
//! | `README.md`     | SkipIfExists  |
//!
//! Re-running the generator refreshes the manifest but never clobbers a
//! hand-edited tsconfig, entry module, or readme.
//!
//! Bodies are plain `{{VAR}}` substitution over [`RenderContext`]; the one
//! conditional (React peer dependencies) is decided here in Rust rather
//! than with a template language.

use tracing::debug;

use pakgen_core::{
    application::ports::TemplateSet,
    domain::{FilePlan, GenerationRequest, RenderContext, ResolvedIdentity, WritePolicy},
    error::PakgenResult,
};

const MANIFEST: &str = r#"{
  "name": "{{NAME}}",
  "version": "0.0.0",
  "private": true,
  "main": "./src/index.ts",
  "types": "./src/index.ts",
  "scripts": {
    "lint": "eslint .",
    "typecheck": "tsc --noEmit"
  }{{REACT_PEERS}}
}
"#;

// Spliced into the manifest after the scripts block; leading comma keeps the
// JSON valid for both branches.
const REACT_PEERS: &str = r#",
  "peerDependencies": {
    "react": ">=16.8.0",
    "react-dom": ">=16.8.0"
  }"#;

const TSCONFIG: &str = r#"{
  "extends": "{{RELATIVE_ROOT}}tsconfig.base.json",
  "compilerOptions": {
    "outDir": "./dist",
    "rootDir": "./src"
  },
  "include": ["src"]
}
"#;

const ENTRY: &str = r#"// {{NAME}} entry point.
export {};
"#;

const README: &str = r#"# {{NAME}}

A {{KIND}} package of this workspace, located at `{{DIR}}`.

## Usage

```ts
import {} from "{{NAME}}";
```
"#;

/// The built-in four-file template set.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateSet for BuiltinTemplates {
    fn plan(
        &self,
        request: &GenerationRequest,
        identity: &ResolvedIdentity,
    ) -> PakgenResult<FilePlan> {
        let ctx = RenderContext::new(request, identity);
        let dir = &identity.package_dir;

        let manifest = ctx
            .render(MANIFEST)
            .replace("{{REACT_PEERS}}", if request.include_react { REACT_PEERS } else { "" });

        let mut plan = FilePlan::new();
        plan.push(dir.join("package.json"), manifest, WritePolicy::Overwrite);
        plan.push(
            dir.join("tsconfig.json"),
            ctx.render(TSCONFIG),
            WritePolicy::SkipIfExists,
        );
        plan.push(
            dir.join("src/index.ts"),
            ctx.render(ENTRY),
            WritePolicy::SkipIfExists,
        );
        plan.push(
            dir.join("README.md"),
            ctx.render(README),
            WritePolicy::SkipIfExists,
        );

        debug!(package = %identity.scoped_name, files = plan.len(), "plan rendered");
        Ok(plan)
    }
}
