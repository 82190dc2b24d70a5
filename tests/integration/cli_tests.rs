//! CLI integration tests
//!
//! These tests verify that the CLI works correctly with various options.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

/// Get the path to the test fixtures directory
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn fixture(name: &str) -> String {
    fixtures_path().join(name).to_string_lossy().into_owned()
}

fn studentxml() -> Command {
    let mut cmd = Command::cargo_bin("studentxml").unwrap();
    // keep stray config files in the working tree out of the tests
    cmd.current_dir(fixtures_path());
    cmd
}

#[test]
fn test_cli_help() {
    studentxml()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--parser"))
        .stdout(predicate::str::contains("--sort"));
}

#[test]
fn test_cli_parse_default_strategy() {
    studentxml()
        .arg(fixture("students.xml"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Name            | Faculty"))
        .stdout(predicate::str::contains("Susanne Berg"));
}

#[test]
fn test_cli_strategy_aliases_agree() {
    let outputs: Vec<Vec<u8>> = ["sax", "dom", "linq"]
        .iter()
        .map(|p| {
            studentxml()
                .args([fixture("students.xml").as_str(), "--parser", p, "--quiet"])
                .output()
                .unwrap()
                .stdout
        })
        .collect();

    assert_eq!(outputs[0], outputs[1]);
    assert_eq!(outputs[1], outputs[2]);
}

#[test]
fn test_cli_sort_by_room() {
    let output = studentxml()
        .args([fixture("students.xml").as_str(), "--sort", "room", "-q"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let rooms: Vec<&str> = stdout
        .lines()
        .skip(2)
        .map(|l| l.split(" | ").nth(4).unwrap().trim())
        .collect();

    assert_eq!(rooms, vec!["101", "210", "7", "B12"]);
}

#[test]
fn test_cli_search_no_records() {
    studentxml()
        .args([fixture("students.xml").as_str(), "--name", "nobody"])
        .assert()
        .success()
        .stdout("No records found.\n");
}

#[test]
fn test_cli_search_filters() {
    studentxml()
        .args([fixture("students.xml").as_str(), "--faculty", "Engineering", "--parser", "dom"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"))
        .stdout(predicate::str::contains("Ann Lee"))
        .stdout(predicate::str::contains("Bob").not());
}

#[test]
fn test_cli_json_format() {
    studentxml()
        .args([fixture("students.xml").as_str(), "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_records\": 4"));
}

#[test]
fn test_cli_faculties() {
    studentxml()
        .args([fixture("students.xml").as_str(), "--faculties"])
        .assert()
        .success()
        .stdout("Arts\nEngineering\nLaw\n");
}

#[test]
fn test_cli_invalid_structure_fails() {
    studentxml()
        .arg(fixture("invalid_structure.xml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not match the expected structure"));
}

#[test]
fn test_cli_no_validate() {
    studentxml()
        .args([fixture("invalid_structure.xml").as_str(), "--no-validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Attribute Only"));
}

#[test]
fn test_cli_malformed_fails() {
    studentxml()
        .arg(fixture("malformed.xml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed XML"));
}

#[test]
fn test_cli_missing_file_fails() {
    studentxml()
        .arg(fixture("does_not_exist.xml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}
