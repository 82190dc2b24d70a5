use super::Table;
use crate::model::Record;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

/// JSON reporter for programmatic output
pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, table: &Table) -> Result<String> {
        let report = JsonReport {
            version: env!("CARGO_PKG_VERSION"),
            total_records: table.len(),
            records: table.records(),
        };
        serde_json::to_string_pretty(&report).into_diagnostic()
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    version: &'static str,
    total_records: usize,
    records: &'a [Record],
}
