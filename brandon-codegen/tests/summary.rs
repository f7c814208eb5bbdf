//! Plaintext summary of a complete spec.

use brandon_codegen::summary::summary;
use brandon_spec::parse_str;

const SAMPLE_SPEC: &str = r#"
name: Sample App
description: Sample desc
version: 1.0.0
authors:
  - name: Author
    email: author@foo.bar
  - name: Contributor
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

#[test]
fn test_summary_creation() {
    let app = parse_str(SAMPLE_SPEC, "project.yml").unwrap();

    insta::assert_snapshot!(summary(&app), @r"
Sample App - Sample desc

Usage:
    sampleapp [command]

Commands:
    sampleapp group1 comm1|comm3     Test group
    sampleapp comm2                  Test command 2

Authors:
    Author <author@foo.bar>
    Contributor
");
}

#[test]
fn test_summary_without_commands() {
    let app = parse_str("name: Empty\nversion: 0.1.0\ndescription: Nothing\n", "cli.yml").unwrap();

    assert_eq!(
        summary(&app),
        "Empty - Nothing\n\nUsage:\n    empty [command]\n\nCommands:\n\nAuthors:"
    );
}
