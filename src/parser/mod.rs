//! The three interchangeable parsing strategies
//!
//! All of them return the `<Student>` elements of a document in document
//! order, with the same five fields. They differ in where the name is read:
//! the streaming strategy takes the `Name` attribute of the start tag, while
//! the tree and query strategies take the text of the `<Name>` child element.
//! Output is only identical when both forms carry the same value.
//!
//! Entities declared in an internal DTD subset are expanded by the query
//! strategy only; the streaming and tree strategies reject them as
//! malformed.

mod context;
pub mod query;
pub mod streaming;
pub mod tree;

pub use context::{execute_parse, sort_data, ParserContext};

use crate::error::Result;
use crate::report::Table;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Tag name of a student element
pub const STUDENT: &str = "Student";

/// Attribute and child element names read from a student
pub mod fields {
    pub const NAME: &str = "Name";
    pub const FACULTY: &str = "Faculty";
    pub const DEPARTMENT: &str = "Department";
    pub const COURSE: &str = "Course";
    pub const ROOM: &str = "Room";
}

/// Parsing strategy selector
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Forward-only event stream (quick-xml)
    #[default]
    #[value(alias = "sax")]
    #[serde(alias = "sax")]
    Streaming,

    /// In-memory element tree with tag-name lookup
    #[value(alias = "dom")]
    #[serde(alias = "dom")]
    FullTree,

    /// Iterator query over document descendants (roxmltree)
    #[value(alias = "linq")]
    #[serde(alias = "linq")]
    DeclarativeQuery,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::Streaming,
        Strategy::FullTree,
        Strategy::DeclarativeQuery,
    ];

    /// Parse `path` into a table
    pub fn parse(self, path: &Path) -> Result<Table> {
        match self {
            Strategy::Streaming => streaming::parse(path),
            Strategy::FullTree => tree::parse(path),
            Strategy::DeclarativeQuery => query::parse(path),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Streaming => "streaming",
            Strategy::FullTree => "full-tree",
            Strategy::DeclarativeQuery => "declarative-query",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
