//! Pure name and path normalization.
//!
//! # Design
//!
//! These functions are deterministic, side-effect-free, and idempotent.
//! They know nothing about prompts, flags, or the filesystem — the CLI and
//! the generate service both funnel through them so every emitted path has
//! exactly one source of truth.
//!
//! The scope marker is `@`, as in npm scoped package names: `@biu/foo-bar`.

/// Convert a user-provided name into a safe folder name.
///
/// - `"@biu/foo-bar"` → `"foo-bar"`
/// - `"foo-bar"` → `"foo-bar"`
/// - `"@biu/"` → `""` (marker with no segment — invalid upstream)
/// - `""` → `""`
///
/// An empty result signals invalid input; callers must reject it before
/// touching the filesystem.
pub fn to_folder_name(raw: &str) -> String {
    let name = raw.trim();
    if name.is_empty() {
        return String::new();
    }
    if name.starts_with('@') {
        return name
            .split('/')
            .nth(1)
            .unwrap_or_default()
            .to_string();
    }
    name.to_string()
}

/// Ensure a name carries the workspace scope.
///
/// - `("foo", "biu")` → `"@biu/foo"`
/// - `("foo", "@biu")` → `"@biu/foo"` (scope marker on the scope is stripped)
/// - `("@biu/foo", _)` → `"@biu/foo"` (already scoped, passes through)
/// - `("", _)` → `""`
///
/// Idempotent: applying it twice yields the same result as applying it once.
pub fn to_scoped_name(raw: &str, scope: &str) -> String {
    let name = raw.trim();
    if name.is_empty() {
        return String::new();
    }
    if name.starts_with('@') {
        return name.to_string();
    }
    let clean_scope = scope.trim().trim_start_matches('@');
    format!("@{clean_scope}/{name}")
}

/// Join path segments with forward slashes, omitting empty segments.
///
/// Output never contains a double slash or a trailing slash. Emitted paths
/// use `/` on every platform: they end up in manifests and reports that the
/// surrounding JavaScript tooling compares textually.
pub fn join_segments<'a, I>(segments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    segments
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}
