//! Query/filter layer
//!
//! Searches re-read the file on every call and never go through a parsing
//! strategy, so they can be repeated with different filters cheaply.

use crate::error::Result;
use crate::parser::{fields, query};
use crate::report::Table;
use roxmltree::Node;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

/// Filters applied by [`search`]; empty filters match everything
///
/// Values are trimmed on construction. Name and room match as
/// case-insensitive substrings, faculty as a case-insensitive exact value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentFilter {
    name: String,
    faculty: String,
    room: String,
}

impl StudentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl AsRef<str>) -> Self {
        self.name = name.as_ref().trim().to_string();
        self
    }

    pub fn with_faculty(mut self, faculty: impl AsRef<str>) -> Self {
        self.faculty = faculty.as_ref().trim().to_string();
        self
    }

    pub fn with_room(mut self, room: impl AsRef<str>) -> Self {
        self.room = room.as_ref().trim().to_string();
        self
    }

    /// True when no filter is set
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.faculty.is_empty() && self.room.is_empty()
    }

    fn matches(&self, student: &Node) -> bool {
        let name = query::child_text(student, fields::NAME).unwrap_or_default();
        let faculty = student.attribute(fields::FACULTY).unwrap_or_default();
        let room = student.attribute(fields::ROOM).unwrap_or_default();

        (self.name.is_empty() || contains_ignore_case(&name, &self.name))
            && (self.faculty.is_empty() || fold_case(faculty) == fold_case(&self.faculty))
            && (self.room.is_empty() || contains_ignore_case(room, &self.room))
    }
}

/// Per-character uppercase mapping, independent of surrounding characters
fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_uppercase).collect()
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    fold_case(haystack).contains(&fold_case(needle))
}

/// Students of `path` passing every filter, in document order
pub fn search(path: &Path, filter: &StudentFilter) -> Result<Table> {
    let text = query::read_source(path)?;
    let doc = query::parse_document(path, &text)?;

    let table: Table = query::students(&doc)
        .filter(|s| filter.matches(s))
        .map(|s| query::to_record(&s))
        .collect();

    debug!(
        "Search in {} with {:?}: {} matches",
        path.display(),
        filter,
        table.len()
    );

    Ok(table)
}

/// Distinct, non-empty faculties of `path` in ordinal order
pub fn faculties(path: &Path) -> Result<Vec<String>> {
    let text = query::read_source(path)?;
    let doc = query::parse_document(path, &text)?;

    let faculties: BTreeSet<String> = query::students(&doc)
        .filter_map(|s| s.attribute(fields::FACULTY))
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect();

    Ok(faculties.into_iter().collect())
}
