//! Integration tests for the generate workflow, adapters wired in.

use pakgen_adapters::{BuiltinTemplates, MemoryFilesystem, RecordingFormatter};
use pakgen_core::{
    application::GenerateService,
    domain::{DomainError, GenerationRequest, PackageKind, WorkspaceLayout},
    error::PakgenError,
};

fn service(fs: &MemoryFilesystem) -> GenerateService {
    GenerateService::new(Box::new(BuiltinTemplates::new()), Box::new(fs.clone()))
}

#[test]
fn lib_package_lands_under_packages_root() {
    let fs = MemoryFilesystem::new();
    let request = GenerationRequest::new("my-utils", PackageKind::Library);

    let report = service(&fs)
        .generate(&request, &WorkspaceLayout::default())
        .unwrap();

    assert_eq!(report.scoped_name, "@biu/my-utils");
    assert_eq!(report.package_dir.to_string(), "packages/my-utils");
    assert_eq!(report.written.len(), 4);
    assert!(report.skipped.is_empty());

    let manifest = fs.read_file("packages/my-utils/package.json").unwrap();
    assert!(manifest.contains(r#""name": "@biu/my-utils""#));
    assert!(!manifest.contains("react"));

    assert!(fs.read_file("packages/my-utils/tsconfig.json").is_some());
    assert!(fs.read_file("packages/my-utils/src/index.ts").is_some());
    assert!(fs.read_file("packages/my-utils/README.md").is_some());
}

#[test]
fn config_package_nests_under_configs_without_double_scope() {
    let fs = MemoryFilesystem::new();
    let request = GenerationRequest::new("@biu/shared-eslint", PackageKind::Config);

    let report = service(&fs)
        .generate(&request, &WorkspaceLayout::default())
        .unwrap();

    assert_eq!(report.scoped_name, "@biu/shared-eslint");
    assert_eq!(
        report.package_dir.to_string(),
        "packages/configs/shared-eslint"
    );

    let manifest = fs
        .read_file("packages/configs/shared-eslint/package.json")
        .unwrap();
    assert!(manifest.contains(r#""@biu/shared-eslint""#));
    assert!(!manifest.contains("@biu/@biu"));
}

#[test]
fn rerun_refreshes_manifest_but_keeps_hand_edits() {
    let fs = MemoryFilesystem::new();
    let request = GenerationRequest::new("my-utils", PackageKind::Library);
    let layout = WorkspaceLayout::default();
    let svc = service(&fs);

    svc.generate(&request, &layout).unwrap();

    // Simulate hand edits and a stale manifest.
    fs.seed_file("packages/my-utils/tsconfig.json", "// hand edited");
    fs.seed_file("packages/my-utils/src/index.ts", "export const x = 1;");
    fs.seed_file("packages/my-utils/README.md", "# custom docs");
    fs.seed_file("packages/my-utils/package.json", "{ \"stale\": true }");

    let report = svc.generate(&request, &layout).unwrap();

    assert_eq!(report.written.len(), 1, "only the manifest rewrites");
    assert_eq!(report.skipped.len(), 3);
    assert_eq!(
        fs.read_file("packages/my-utils/tsconfig.json").as_deref(),
        Some("// hand edited")
    );
    assert_eq!(
        fs.read_file("packages/my-utils/src/index.ts").as_deref(),
        Some("export const x = 1;")
    );
    assert_eq!(
        fs.read_file("packages/my-utils/README.md").as_deref(),
        Some("# custom docs")
    );
    let manifest = fs.read_file("packages/my-utils/package.json").unwrap();
    assert!(!manifest.contains("stale"));
}

#[test]
fn react_flag_adds_peer_dependencies() {
    let fs = MemoryFilesystem::new();
    let request = GenerationRequest::new("ui-kit", PackageKind::Library).with_react(true);

    service(&fs)
        .generate(&request, &WorkspaceLayout::default())
        .unwrap();

    let manifest = fs.read_file("packages/ui-kit/package.json").unwrap();
    assert!(manifest.contains(r#""react": ">=16.8.0""#));
}

#[test]
fn explicit_subdir_is_used_verbatim() {
    let fs = MemoryFilesystem::new();
    let request = GenerationRequest::new("date-utils", PackageKind::Library).with_subdir("shared");

    let report = service(&fs)
        .generate(&request, &WorkspaceLayout::default())
        .unwrap();

    assert_eq!(report.package_dir.to_string(), "packages/shared/date-utils");
}

#[test]
fn degenerate_name_fails_before_any_write() {
    let fs = MemoryFilesystem::new();
    let request = GenerationRequest::new("@biu/", PackageKind::Library);

    let err = service(&fs)
        .generate(&request, &WorkspaceLayout::default())
        .unwrap_err();

    assert!(matches!(
        err,
        PakgenError::Domain(DomainError::EmptyFolderName { .. })
    ));
    assert!(fs.list_files().is_empty(), "nothing may be written");
}

#[test]
fn formatter_receives_all_four_planned_paths() {
    let fs = MemoryFilesystem::new();
    let formatter = RecordingFormatter::new();
    let svc = service(&fs).with_formatter(Box::new(formatter.clone()));
    let request = GenerationRequest::new("my-utils", PackageKind::Library);

    let report = svc.generate(&request, &WorkspaceLayout::default()).unwrap();
    svc.format_outputs(&report).unwrap();

    let calls = formatter.calls();
    assert_eq!(calls.len(), 1);
    let formatted: Vec<String> = calls[0].iter().map(|p| p.to_string()).collect();
    assert_eq!(
        formatted,
        [
            "packages/my-utils/package.json",
            "packages/my-utils/tsconfig.json",
            "packages/my-utils/src/index.ts",
            "packages/my-utils/README.md",
        ]
    );
}

#[test]
fn format_failure_leaves_emitted_files_in_place() {
    let fs = MemoryFilesystem::new();
    let svc = service(&fs).with_formatter(Box::new(RecordingFormatter::failing()));
    let request = GenerationRequest::new("my-utils", PackageKind::Library);
    let layout = WorkspaceLayout::default();

    let report = svc.generate(&request, &layout).unwrap();
    let err = svc.format_outputs(&report).unwrap_err();

    assert!(err.is_format_failure());
    // Emission and formatting are independent steps: the files stay.
    assert!(fs.read_file("packages/my-utils/package.json").is_some());
    assert_eq!(fs.list_files().len(), 4);
}
