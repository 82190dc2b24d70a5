use crate::model::{Column, Record};
use std::fmt;

/// Width of the dashed line under the header
pub const SEPARATOR_WIDTH: usize = 80;

/// Shown instead of a table when nothing matched
pub const NO_RECORDS: &str = "No records found.";

/// Format one row in fixed-width columns joined by `" | "`
///
/// Values are left-aligned and padded to their column width. Longer values
/// are kept whole, so the columns of that row shift right.
pub fn format_row(name: &str, faculty: &str, department: &str, course: &str, room: &str) -> String {
    format!(
        "{:<name_w$} | {:<faculty_w$} | {:<department_w$} | {:<course_w$} | {:<room_w$}",
        name,
        faculty,
        department,
        course,
        room,
        name_w = Column::Name.width(),
        faculty_w = Column::Faculty.width(),
        department_w = Column::Department.width(),
        course_w = Column::Course.width(),
        room_w = Column::Room.width(),
    )
}

/// Format a record as a table row
pub fn format_record(record: &Record) -> String {
    format_row(
        &record.name,
        &record.faculty,
        &record.department,
        &record.course,
        &record.room,
    )
}

/// Header row followed by the separator line, both newline-terminated
pub fn table_header() -> String {
    let titles = Column::ALL.map(Column::title);
    let header = format_row(titles[0], titles[1], titles[2], titles[3], titles[4]);
    format!("{}\n{}\n", header, "-".repeat(SEPARATOR_WIDTH))
}

/// Ordered student records rendered as a fixed-width text table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut Vec<Record> {
        &mut self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Formatted data rows, without header
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.records.iter().map(format_record)
    }

    /// Rendered table, or `empty_message` when there are no rows
    pub fn render_or(&self, empty_message: &str) -> String {
        if self.is_empty() {
            empty_message.to_string()
        } else {
            self.to_string()
        }
    }
}

impl From<Vec<Record>> for Table {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl FromIterator<Record> for Table {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&table_header())?;
        for row in self.rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
