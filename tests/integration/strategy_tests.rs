//! Integration tests for the parsing strategies
//!
//! These tests run every strategy against the fixtures and compare outputs.

use studentxml::{execute_parse, sort_data, Column, Error, ParserContext, Strategy, Table};
use std::path::PathBuf;

/// Get the path to the test fixtures directory
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn parse_all(file: &str) -> Vec<Table> {
    let path = fixtures_path().join(file);
    Strategy::ALL
        .iter()
        .map(|s| execute_parse(&path, *s).expect("fixture should parse"))
        .collect()
}

#[test]
fn test_strategies_produce_identical_text() {
    let tables = parse_all("students.xml");

    let texts: Vec<String> = tables.iter().map(|t| t.to_string()).collect();
    assert_eq!(texts[0], texts[1], "streaming and full-tree differ");
    assert_eq!(texts[1], texts[2], "full-tree and declarative-query differ");

    let lines: Vec<&str> = texts[0].lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[1], "-".repeat(80));
    assert!(lines[2].starts_with("Susanne Berg"));
    assert!(lines[5].starts_with("Ann Lee"));
}

#[test]
fn test_child_only_names_are_empty_when_streaming() {
    let tables = parse_all("child_names.xml");

    let streamed: Vec<&str> = tables[0].records().iter().map(|r| r.name.as_str()).collect();
    let tree: Vec<&str> = tables[1].records().iter().map(|r| r.name.as_str()).collect();
    let query: Vec<&str> = tables[2].records().iter().map(|r| r.name.as_str()).collect();

    assert_eq!(streamed, vec!["", ""]);
    assert_eq!(tree, vec!["Dana Cho", "Eli Moss"]);
    assert_eq!(tree, query);

    // every other column agrees
    for (a, b) in tables[0].records().iter().zip(tables[1].records()) {
        assert_eq!(a.faculty, b.faculty);
        assert_eq!(a.department, b.department);
        assert_eq!(a.course, b.course);
        assert_eq!(a.room, b.room);
    }
}

#[test]
fn test_missing_optional_fields_are_empty() {
    let path = fixtures_path().join("child_names.xml");
    let table = execute_parse(&path, Strategy::FullTree).unwrap();
    let eli = &table.records()[1];
    assert_eq!(eli.department, "");
    assert_eq!(eli.course, "");
    assert_eq!(eli.room, "3B");
}

#[test]
fn test_empty_document_has_header_only() {
    for table in parse_all("empty.xml") {
        assert!(table.is_empty());
        assert_eq!(table.to_string().lines().count(), 2);
    }
}

#[test]
fn test_malformed_fixtures_fail_everywhere() {
    let fixtures = [
        "malformed.xml",
        "duplicate_attribute.xml",
        "unquoted_attribute.xml",
        "undefined_entity.xml",
        "bare_ampersand.xml",
    ];

    for fixture in fixtures {
        let path = fixtures_path().join(fixture);
        for strategy in Strategy::ALL {
            let result = execute_parse(&path, strategy);
            assert!(
                matches!(result, Err(Error::MalformedXml { .. })),
                "{} should reject {}, got {:?}",
                strategy,
                fixture,
                result
            );
        }
    }
}

#[test]
fn test_context_sort_by_name() {
    let path = fixtures_path().join("students.xml");
    let context = ParserContext::new(Strategy::DeclarativeQuery);
    let table = ParserContext::sort_data(context.execute_parse(&path).unwrap(), Column::Name);

    let names: Vec<&str> = table.records().iter().map(|r| r.name.trim()).collect();
    let mut expected = names.clone();
    expected.sort();
    assert_eq!(names, expected);
    assert_eq!(names, vec!["Alice", "Ann Lee", "Bob", "Susanne Berg"]);
}

#[test]
fn test_sort_by_faculty_keeps_document_order_for_ties() {
    let path = fixtures_path().join("students.xml");
    let table = sort_data(execute_parse(&path, Strategy::Streaming).unwrap(), Column::Faculty);

    let names: Vec<&str> = table.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Bob", "Alice", "Ann Lee", "Susanne Berg"]);
}
