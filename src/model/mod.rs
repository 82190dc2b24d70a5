//! Student records and the five fixed table columns

use serde::{Deserialize, Serialize};
use std::fmt;

/// One `<Student>` entry
///
/// Absent attributes or elements are stored as empty strings. Records carry
/// no identity; duplicates in a document are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub faculty: String,
    pub department: String,
    pub course: String,
    pub room: String,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        faculty: impl Into<String>,
        department: impl Into<String>,
        course: impl Into<String>,
        room: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            faculty: faculty.into(),
            department: department.into(),
            course: course.into(),
            room: room.into(),
        }
    }

    /// Value stored under the given column
    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::Name => &self.name,
            Column::Faculty => &self.faculty,
            Column::Department => &self.department,
            Column::Course => &self.course,
            Column::Room => &self.room,
        }
    }
}

/// Table columns, in display order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Name,
    Faculty,
    Department,
    Course,
    Room,
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::Name,
        Column::Faculty,
        Column::Department,
        Column::Course,
        Column::Room,
    ];

    /// Header label
    pub fn title(self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Faculty => "Faculty",
            Column::Department => "Department",
            Column::Course => "Course",
            Column::Room => "Room",
        }
    }

    /// Display width in characters
    pub fn width(self) -> usize {
        match self {
            Column::Name => 15,
            Column::Faculty => 20,
            Column::Department => 20,
            Column::Course => 10,
            Column::Room => 5,
        }
    }

    /// Parse a column from its header label, ignoring case
    pub fn from_title(title: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.title().eq_ignore_ascii_case(title.trim()))
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
