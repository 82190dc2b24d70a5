mod json;
mod table;

pub use json::JsonReporter;
pub use table::{format_record, format_row, table_header, Table, NO_RECORDS, SEPARATOR_WIDTH};

use miette::{IntoDiagnostic, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
}

/// Writes a table to stdout or to a file
pub struct Reporter {
    format: ReportFormat,
    output_path: Option<PathBuf>,
    empty_message: String,
}

impl Reporter {
    pub fn new(format: ReportFormat, output_path: Option<PathBuf>) -> Self {
        Self {
            format,
            output_path,
            empty_message: NO_RECORDS.to_string(),
        }
    }

    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Render without writing anywhere
    pub fn render(&self, table: &Table) -> Result<String> {
        match self.format {
            ReportFormat::Table => Ok(table.render_or(&self.empty_message)),
            ReportFormat::Json => JsonReporter::new().render(table),
        }
    }

    pub fn report(&self, table: &Table) -> Result<()> {
        let text = self.render(table)?;

        if let Some(path) = &self.output_path {
            std::fs::write(path, &text).into_diagnostic()?;
            eprintln!("Report written to: {}", path.display());
        } else if text.ends_with('\n') {
            print!("{}", text);
        } else {
            println!("{}", text);
        }

        Ok(())
    }
}
