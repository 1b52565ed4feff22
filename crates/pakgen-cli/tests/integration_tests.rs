//! Integration tests for pakgen-cli.
//!
//! Every scaffolding invocation runs unattended (non-TTY stdin plus `--yes`)
//! inside a temp dir standing in for the monorepo root, and passes
//! `--no-format` so no package manager is needed on the test machine.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn pakgen() -> Command {
    Command::cargo_bin("pakgen").unwrap()
}

#[test]
fn help_flag() {
    pakgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pakgen"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn version_flag() {
    pakgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn generate_help_lists_flags() {
    pakgen()
        .args(["generate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--name"))
        .stdout(predicate::str::contains("--kind"))
        .stdout(predicate::str::contains("--react"));
}

#[test]
fn generate_lib_package() {
    let temp = TempDir::new().unwrap();

    pakgen()
        .current_dir(temp.path())
        .args([
            "generate",
            "--name",
            "my-utils",
            "--kind",
            "lib",
            "--yes",
            "--no-format",
        ])
        .assert()
        .success();

    let pkg = temp.path().join("packages/my-utils");
    assert!(pkg.join("package.json").exists());
    assert!(pkg.join("tsconfig.json").exists());
    assert!(pkg.join("src/index.ts").exists());
    assert!(pkg.join("README.md").exists());

    let manifest = fs::read_to_string(pkg.join("package.json")).unwrap();
    assert!(manifest.contains("@biu/my-utils"));
    assert!(!manifest.contains("peerDependencies"));
}

#[test]
fn generate_config_package_nests_under_configs() {
    let temp = TempDir::new().unwrap();

    pakgen()
        .current_dir(temp.path())
        .args([
            "generate",
            "--name",
            "@biu/shared-eslint",
            "--kind",
            "config",
            "--yes",
            "--no-format",
        ])
        .assert()
        .success();

    let pkg = temp.path().join("packages/configs/shared-eslint");
    assert!(pkg.join("package.json").exists());
    let manifest = fs::read_to_string(pkg.join("package.json")).unwrap();
    assert!(manifest.contains("\"@biu/shared-eslint\""));
}

#[test]
fn bare_react_flag_adds_peer_dependencies() {
    let temp = TempDir::new().unwrap();

    pakgen()
        .current_dir(temp.path())
        .args([
            "generate", "--name", "ui-kit", "--react", "--yes", "--no-format",
        ])
        .assert()
        .success();

    let manifest =
        fs::read_to_string(temp.path().join("packages/ui-kit/package.json")).unwrap();
    assert!(manifest.contains("peerDependencies"));
    assert!(manifest.contains("react"));
}

#[test]
fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();

    pakgen()
        .current_dir(temp.path())
        .args([
            "generate",
            "--name",
            "my-utils",
            "--yes",
            "--dry-run",
            "--no-format",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!temp.path().join("packages").exists());
}

#[test]
fn rerun_keeps_hand_edits_but_refreshes_manifest() {
    let temp = TempDir::new().unwrap();
    let run = || {
        pakgen()
            .current_dir(temp.path())
            .args([
                "generate", "--name", "my-utils", "--yes", "--no-format",
            ])
            .assert()
            .success();
    };

    run();

    let pkg = temp.path().join("packages/my-utils");
    fs::write(pkg.join("tsconfig.json"), "// hand edited").unwrap();
    fs::write(pkg.join("package.json"), "{ \"stale\": true }").unwrap();

    run();

    assert_eq!(
        fs::read_to_string(pkg.join("tsconfig.json")).unwrap(),
        "// hand edited"
    );
    let manifest = fs::read_to_string(pkg.join("package.json")).unwrap();
    assert!(!manifest.contains("stale"));
    assert!(manifest.contains("@biu/my-utils"));
}

#[test]
fn missing_name_unattended_is_a_user_error() {
    let temp = TempDir::new().unwrap();

    pakgen()
        .current_dir(temp.path())
        .args(["generate", "--yes", "--no-format"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("name is required"));

    assert!(!temp.path().join("packages").exists());
}

#[test]
fn degenerate_scoped_name_is_rejected_before_writing() {
    let temp = TempDir::new().unwrap();

    pakgen()
        .current_dir(temp.path())
        .args(["generate", "--name", "@biu/", "--yes", "--no-format"])
        .assert()
        .failure()
        .code(2);

    assert!(!temp.path().join("packages").exists());
}

#[test]
fn unknown_generator_is_not_found() {
    let temp = TempDir::new().unwrap();

    pakgen()
        .current_dir(temp.path())
        .args(["generate", "component", "--name", "x", "--yes", "--no-format"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("component"));
}

#[test]
fn quiet_generate_produces_no_stdout() {
    let temp = TempDir::new().unwrap();

    pakgen()
        .current_dir(temp.path())
        .args([
            "-q", "generate", "--name", "my-utils", "--yes", "--no-format",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn list_names_the_package_generator() {
    pakgen()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("package"));
}

#[test]
fn list_json_is_parseable() {
    let output = pakgen()
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(parsed.as_array().is_some_and(|a| !a.is_empty()));
}

#[test]
fn custom_config_changes_scope_and_layout() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("pakgen.toml"),
        "[workspace]\nscope = \"acme\"\npackages_root = \"libs\"\n\n[format]\nenabled = false\n",
    )
    .unwrap();

    pakgen()
        .current_dir(temp.path())
        .args(["generate", "--name", "my-utils", "--yes"])
        .assert()
        .success();

    let manifest =
        fs::read_to_string(temp.path().join("libs/my-utils/package.json")).unwrap();
    assert!(manifest.contains("@acme/my-utils"));
}

#[test]
fn shell_completions_emit_script() {
    pakgen()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pakgen"));
}
