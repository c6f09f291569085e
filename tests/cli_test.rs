//! Integration tests for the hyperion-lint binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_document(content: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("api.yaml");
    fs::write(&path, content).unwrap();
    (temp, path)
}

fn hyperion() -> Command {
    let mut cmd = Command::new(cargo_bin("hyperion-lint"));
    cmd.env_remove("HYPERION_FORMAT")
        .env_remove("HYPERION_FAIL_ON")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    String::from_utf8(output.stdout).unwrap()
}

const CLEAN_DOCUMENT: &str = r#"
openapi: 3.0.3
info:
  title: Pets
  version: 1.2.0
servers:
  - url: https://api.example.com/v1
paths:
  /pets:
    get:
      operationId: listPets
      responses:
        200:
          description: ok
          content:
            application/json:
              schema:
                type: object
                properties:
                  items:
                    type: array
                    items: {type: string}
"#;

const MESSY_DOCUMENT: &str = r#"
openapi: 3.0.3
info:
  title: Pets
  version: 1.2.0
servers:
  - url: https://api.example.com/v1
paths:
  /some_path:
    get:
      operationId: list_pets
      responses:
        200: {description: ok}
        418: {description: teapot}
  /Foo-Bar:
    get:
      operationId: fooBar
      responses:
        200: {description: ok}
"#;

const LINE_PATTERN: &str = r"^(ERR|WARN) Section: [a-z-]+   Path: \S.*:  .+$";

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    hyperion()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--section"))
        .stdout(predicate::str::contains("--fail-on"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    hyperion()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn clean_document_prints_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_document(CLEAN_DOCUMENT);

    hyperion()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn findings_do_not_change_exit_status_by_default() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_document(MESSY_DOCUMENT);

    hyperion()
        .arg(&path)
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "ERR Section: paths   Path: paths./some_path:  ",
        ))
        .stdout(predicate::str::contains(
            "WARN Section: paths   Path: paths./Foo-Bar:  ",
        ))
        .stdout(predicate::str::contains(
            "ERR Section: status-codes   Path: paths./some_path.get.responses.418:  ",
        ));
    Ok(())
}

#[test]
fn every_report_line_matches_the_line_format() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_document(MESSY_DOCUMENT);
    let stdout = stdout_of(hyperion().arg("--no-color").arg(&path));
    let pattern = predicate::str::is_match(LINE_PATTERN)?;

    assert!(!stdout.is_empty());
    for line in stdout.lines() {
        assert!(pattern.eval(line), "unexpected report line: {line}");
    }
    Ok(())
}

#[test]
fn fail_on_error_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_document(MESSY_DOCUMENT);

    hyperion()
        .args(["--fail-on", "error"])
        .arg(&path)
        .assert()
        .code(1);
    Ok(())
}

#[test]
fn fail_on_reads_environment() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_document(MESSY_DOCUMENT);

    hyperion()
        .env("HYPERION_FAIL_ON", "warning")
        .arg(&path)
        .assert()
        .code(1);
    Ok(())
}

#[test]
fn fail_on_error_ignores_warnings() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_document(
        "openapi: 3.0.3\ninfo: {title: a, version: 1.0.0}\nservers:\n  - url: https://api.example.com/v1\npaths:\n  /Pets: {}\n",
    );

    hyperion()
        .args(["--section", "paths", "--fail-on", "error"])
        .arg(&path)
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("WARN Section: paths"));
    Ok(())
}

#[test]
fn section_order_does_not_change_output() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_document(MESSY_DOCUMENT);

    let forward = stdout_of(
        hyperion()
            .args(["--section", "paths", "--section", "status-codes"])
            .arg(&path),
    );
    let backward = stdout_of(
        hyperion()
            .args(["--section", "status-codes,paths"])
            .arg(&path),
    );

    assert!(!forward.is_empty());
    assert_eq!(forward, backward);
    Ok(())
}

#[test]
fn unknown_section_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_document(CLEAN_DOCUMENT);

    hyperion()
        .args(["--section", "bogus"])
        .arg(&path)
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("bogus"));
    Ok(())
}

#[test]
fn missing_file_is_a_fault() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    hyperion()
        .arg(temp.path().join("missing.yaml"))
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: Document not found"));
    Ok(())
}

#[test]
fn unparseable_file_is_a_fault() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_document("paths: [unclosed\n");

    hyperion()
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse document"));
    Ok(())
}

#[test]
fn json_format_from_environment() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_document(MESSY_DOCUMENT);
    let stdout = stdout_of(hyperion().env("HYPERION_FORMAT", "json").arg(&path));

    let parsed: serde_json::Value = serde_json::from_str(&stdout)?;
    let total = parsed["summary"]["total"].as_u64().unwrap();
    assert_eq!(
        total as usize,
        parsed["findings"].as_array().unwrap().len()
    );
    assert!(total > 0);
    Ok(())
}

#[test]
fn sarif_format_is_valid() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_document(MESSY_DOCUMENT);
    let stdout = stdout_of(hyperion().args(["--format", "sarif"]).arg(&path));

    let parsed: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(parsed["version"], "2.1.0");
    assert_eq!(
        parsed["runs"][0]["tool"]["driver"]["name"],
        "hyperion-lint"
    );
    Ok(())
}

#[test]
fn verbose_prints_suggestions_and_summary() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, path) = write_document(MESSY_DOCUMENT);

    hyperion()
        .args(["--verbose", "--no-color", "--section", "naming"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("= help: Use \"listPets\" instead"))
        .stdout(predicate::str::contains("Found 1 error(s) and 0 warning(s)"));
    Ok(())
}
