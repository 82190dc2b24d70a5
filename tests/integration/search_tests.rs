//! Integration tests for the search layer and structural validation

use studentxml::{faculties, search, validate_file, Error, StudentFilter, NO_RECORDS};
use std::path::PathBuf;

/// Get the path to the test fixtures directory
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn names(file: &str, filter: &StudentFilter) -> Vec<String> {
    search(&fixtures_path().join(file), filter)
        .unwrap()
        .into_records()
        .into_iter()
        .map(|r| r.name)
        .collect()
}

#[test]
fn test_search_without_filters_returns_all() {
    assert_eq!(
        names("students.xml", &StudentFilter::new()),
        vec!["Susanne Berg", "Alice", "Bob", "Ann Lee"]
    );
}

#[test]
fn test_search_name_substring() {
    let filter = StudentFilter::new().with_name("ann");
    assert_eq!(names("students.xml", &filter), vec!["Susanne Berg", "Ann Lee"]);
}

#[test]
fn test_search_faculty_and_room() {
    let filter = StudentFilter::new().with_faculty("engineering").with_room("21");
    assert_eq!(names("students.xml", &filter), vec!["Ann Lee"]);
}

#[test]
fn test_search_output_matches_table_format() {
    let path = fixtures_path().join("students.xml");
    let table = search(&path, &StudentFilter::new().with_name("Alice")).unwrap();
    let text = table.to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[2],
        "Alice           | Engineering          | CS                   | 3          | 101  "
    );
}

#[test]
fn test_search_no_match_sentinel() {
    let path = fixtures_path().join("students.xml");
    let table = search(&path, &StudentFilter::new().with_name("zzz")).unwrap();
    assert_eq!(table.render_or(NO_RECORDS), "No records found.");

    let empty = search(&fixtures_path().join("empty.xml"), &StudentFilter::new()).unwrap();
    assert_eq!(empty.render_or(NO_RECORDS), "No records found.");
}

#[test]
fn test_faculty_list() {
    let path = fixtures_path().join("students.xml");
    assert_eq!(faculties(&path).unwrap(), vec!["Arts", "Engineering", "Law"]);
}

#[test]
fn test_validate_fixtures() {
    assert!(validate_file(&fixtures_path().join("students.xml")).is_ok());
    assert!(validate_file(&fixtures_path().join("child_names.xml")).is_ok());
    assert!(validate_file(&fixtures_path().join("empty.xml")).is_ok());

    let result = validate_file(&fixtures_path().join("invalid_structure.xml"));
    assert!(matches!(result, Err(Error::Structure { index: 2, .. })));

    let result = validate_file(&fixtures_path().join("malformed.xml"));
    assert!(matches!(result, Err(Error::MalformedXml { .. })));
}
