//! Documentation site generation against a complete spec.

use brandon_codegen::docs::{DocsGenerator, build_site};
use brandon_spec::{Application, parse_str};
use serde_yaml::Value;

const SAMPLE_SPEC: &str = r#"
name: Sample App
url: https://github.com/foo/bar
description: Sample desc
version: 1.0.0
authors:
  - name: Author
    email: author@foo.bar
    url: https://foo.bar/author
schemas:
  enums:
    enum1:
      description: Some enum
      items:
        key1: value1
cli:
  group1:
    description: Test group
    arguments:
      arg1:
        description: Global argument
        type: string
    commands:
      comm1:
        description: Test command 1
        arguments:
          arg2:
            description: Local argument
            type: int
      comm3:
        description: Test command 2
  comm2:
    description: Test command 2
    options:
      opt1:
        description: Option 1
        type: flag
"#;

fn sample() -> Application {
    parse_str(SAMPLE_SPEC, "project.yml").unwrap()
}

/// Parse the serde-generated part of `mkdocs.yml`; the extension block
/// carries Python object tags.
fn load_config(content: &str) -> Value {
    let (config, extensions) = content
        .split_once("markdown_extensions:")
        .expect("markdown_extensions block");
    assert!(extensions.contains("pymdownx.emoji"));
    serde_yaml::from_str(config).unwrap()
}

#[test]
fn test_config_file() {
    let app = sample();
    let dir = tempfile::tempdir().unwrap();

    let root = DocsGenerator::new(&app).generate(dir.path()).unwrap();
    assert_eq!(root, dir.path().join("sampleapp-docs"));

    let content = std::fs::read_to_string(root.join("mkdocs.yml")).unwrap();
    let config = load_config(&content);

    assert_eq!(config["site_name"], Value::from("Sample App"));
    assert_eq!(config["theme"]["name"], Value::from("material"));
    assert_eq!(config["repo_url"], Value::from("https://github.com/foo/bar"));

    let expected: Value = serde_yaml::from_str(
        r#"
- Home: index.md
- Reference:
  - Commands:
    - group1:
      - comm1: reference/group1/comm1.md
      - comm3: reference/group1/comm3.md
    - comm2: reference/comm2.md
  - Schemas:
    - Enums: reference/enums.md
"#,
    )
    .unwrap();
    assert_eq!(config["nav"], expected);
}

#[test]
fn test_page_creation() {
    let app = sample();
    let dir = tempfile::tempdir().unwrap();
    let root = DocsGenerator::new(&app).generate(dir.path()).unwrap();
    let reference = root.join("docs").join("reference");

    let read = |path: std::path::PathBuf| std::fs::read_to_string(path).unwrap();

    assert!(read(root.join("docs").join("index.md")).starts_with("# Sample App"));
    assert!(read(reference.join("group1").join("comm1.md")).starts_with("# comm1"));
    assert!(read(reference.join("group1").join("comm3.md")).starts_with("# comm3"));
    assert!(read(reference.join("comm2.md")).starts_with("# comm2"));
    assert!(read(reference.join("enums.md")).starts_with("# Enums"));
}

#[test]
fn test_group_arguments_in_command_page() {
    let app = sample();
    let files = DocsGenerator::new(&app).preview().unwrap();
    let comm1 = files
        .iter()
        .find(|f| f.path == "docs/reference/group1/comm1.md")
        .unwrap();

    assert!(
        comm1
            .content
            .contains("`$ sampleapp group1 comm1 <arg2> <arg1>`")
    );
    assert!(comm1.content.contains("| `arg1` | string | Global argument |  |"));
}

#[test]
fn test_preview_lists_every_page() {
    let app = sample();
    let mut paths: Vec<String> = DocsGenerator::new(&app)
        .preview()
        .unwrap()
        .into_iter()
        .map(|f| f.path)
        .collect();
    paths.sort();

    assert_eq!(
        paths,
        [
            "docs/index.md",
            "docs/reference/comm2.md",
            "docs/reference/enums.md",
            "docs/reference/group1/comm1.md",
            "docs/reference/group1/comm3.md",
            "mkdocs.yml",
        ]
    );
}

#[test]
fn test_regenerating_overwrites_pages() {
    let app = sample();
    let dir = tempfile::tempdir().unwrap();
    let generator = DocsGenerator::new(&app);

    let root = generator.generate(dir.path()).unwrap();
    std::fs::write(root.join("docs").join("index.md"), "stale").unwrap();
    generator.generate(dir.path()).unwrap();

    let index = std::fs::read_to_string(root.join("docs").join("index.md")).unwrap();
    assert!(index.starts_with("# Sample App"));
}

#[test]
fn test_build_site_in_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = build_site(&dir.path().join("missing")).unwrap_err();

    assert!(err.to_string().starts_with("`mkdocs build` failed"));
}
