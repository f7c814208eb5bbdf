//! End-to-end tests of the `brandon` binary.

use std::{fs, path::PathBuf};

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use predicates::prelude::*;
use tempfile::TempDir;

const SAMPLE_SPEC: &str = r#"
name: Sample App
description: Sample desc
version: 1.0.0
languages:
  - python
authors:
  - name: Author
    email: author@foo.bar
cli:
  group1:
    description: Test group
    commands:
      comm1:
        description: Test command 1
      comm3:
        description: Test command 2
  comm2:
    description: Test command 2
"#;

fn brandon() -> Command {
    let mut cmd = cargo_bin_cmd!("brandon");
    cmd.env_remove("BRANDON_OUTPUT_PATH").env_remove("RUST_LOG");
    cmd
}

/// A temporary directory holding `cli.yml` with the given content.
fn workspace(spec: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let spec_path = temp.path().join("cli.yml");
    fs::write(&spec_path, spec).unwrap();
    (temp, spec_path)
}

#[test]
fn shows_help() {
    brandon()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn prints_summary() {
    let (_temp, spec) = workspace(SAMPLE_SPEC);

    brandon()
        .args(["generate", "summary"])
        .arg(&spec)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Sample App - Sample desc\n"))
        .stdout(predicate::str::contains("sampleapp group1 comm1|comm3     Test group"));
}

#[test]
fn prints_version_of_default_spec_file() {
    let (temp, _spec) = workspace(SAMPLE_SPEC);

    brandon()
        .arg("version")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("1.0.0\n");
}

#[test]
fn generates_project_with_default_language() {
    let (temp, spec) = workspace(SAMPLE_SPEC);

    brandon()
        .args(["generate", "project"])
        .arg(&spec)
        .arg("--output-path")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Project folder for `Sample App` created successfully in",
        ));

    let root = temp.path().join("sampleapp-1.0.0");
    assert!(root.join("sampleapp/main.py").is_file());
    assert!(root.join("sampleapp/cli/group1.py").is_file());
    assert!(root.join("pyproject.toml").is_file());
}

#[test]
fn existing_project_needs_overwrite() {
    let (temp, spec) = workspace(SAMPLE_SPEC);
    let generate = |extra: &[&str]| {
        let mut cmd = brandon();
        cmd.args(["generate", "project"])
            .arg(&spec)
            .arg("-o")
            .arg(temp.path())
            .args(extra);
        cmd.assert()
    };

    generate(&[]).success();
    generate(&[])
        .failure()
        .stderr(predicate::str::contains("already exists"));
    generate(&["--overwrite"]).success();
    generate(&["-f"]).success();
}

#[test]
fn generates_single_script() {
    let (temp, spec) = workspace(SAMPLE_SPEC);

    brandon()
        .args(["generate", "project", "-l", "python-single"])
        .arg(&spec)
        .env("BRANDON_OUTPUT_PATH", temp.path())
        .assert()
        .success();

    let script = fs::read_to_string(temp.path().join("sampleapp.py")).unwrap();
    assert!(script.contains("cli.add_command(group1_group)"));
}

#[test]
fn rejects_unsupported_language() {
    let (temp, spec) = workspace(SAMPLE_SPEC);

    brandon()
        .args(["generate", "project", "--language", "go"])
        .arg(&spec)
        .arg("-o")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported language `go`"));
}

#[test]
fn requires_a_language() {
    let (temp, spec) = workspace(&SAMPLE_SPEC.replace("languages:\n  - python\n", ""));

    brandon()
        .args(["generate", "project"])
        .arg(&spec)
        .arg("-o")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no target language"));
}

#[test]
fn dry_run_writes_nothing() {
    let (temp, spec) = workspace(SAMPLE_SPEC);

    brandon()
        .args(["generate", "project", "--dry-run"])
        .arg(&spec)
        .arg("-o")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("── sampleapp-1.0.0/sampleapp/main.py ──"))
        .stdout(predicate::str::contains("8 files would be generated"));

    assert!(!temp.path().join("sampleapp-1.0.0").exists());
}

#[test]
fn generates_docs() {
    let (temp, spec) = workspace(SAMPLE_SPEC);

    brandon()
        .args(["generate", "docs"])
        .arg(&spec)
        .arg("-o")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Documentation folder for `Sample App` created successfully in",
        ));

    let root = temp.path().join("sampleapp-docs");
    assert!(root.join("mkdocs.yml").is_file());
    assert!(root.join("docs/index.md").is_file());
    assert!(root.join("docs/reference/group1/comm1.md").is_file());
    assert!(root.join("docs/reference/comm2.md").is_file());
    assert!(root.join("docs/reference/enums.md").is_file());
}

#[test]
fn invalid_spec_fails() {
    let (temp, spec) = workspace(&SAMPLE_SPEC.replace("description: Sample desc\n", ""));

    brandon()
        .args(["generate", "project"])
        .arg(&spec)
        .arg("-o")
        .arg(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("description"));
}

#[test]
fn missing_spec_file_fails() {
    let temp = TempDir::new().unwrap();

    brandon()
        .arg("version")
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1);
}

#[test]
fn generates_completions() {
    brandon()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("brandon"));
}
