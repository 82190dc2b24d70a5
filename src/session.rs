//! Interactive workflow state
//!
//! A [`Session`] is what a front-end drives: pick a file, pick a parsing
//! strategy, parse, then search as many times as needed. Operations that
//! fail leave the selected file, strategy and parsed flag untouched so the
//! user can retry.

use crate::error::{Error, Result};
use crate::model::Column;
use crate::parser::{sort_data, ParserContext, Strategy};
use crate::report::Table;
use crate::search::{self, StudentFilter};
use crate::validate;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Default)]
pub struct Session {
    file: Option<PathBuf>,
    context: Option<ParserContext>,
    validate: bool,
    parsed: bool,
}

impl Session {
    pub fn new() -> Self {
        Self {
            validate: true,
            ..Self::default()
        }
    }

    /// Skip or run the structural check before each parse
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Select the input file and return its faculties
    ///
    /// A file that cannot be read keeps the previous selection.
    pub fn select_file(&mut self, path: impl AsRef<Path>) -> Result<Vec<String>> {
        let path = path.as_ref();
        let faculties = search::faculties(path)?;

        info!("Selected XML file: {}", path.display());
        self.file = Some(path.to_path_buf());
        self.parsed = false;

        Ok(faculties)
    }

    pub fn select_strategy(&mut self, strategy: Strategy) {
        match &mut self.context {
            Some(context) => context.set_strategy(strategy),
            None => self.context = Some(ParserContext::new(strategy)),
        }
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn strategy(&self) -> Option<Strategy> {
        self.context.map(|c| c.strategy())
    }

    pub fn is_parsed(&self) -> bool {
        self.parsed
    }

    /// Validate, parse with the selected strategy and optionally sort
    pub fn parse(&mut self, sort: Option<Column>) -> Result<Table> {
        let file = self
            .file
            .as_deref()
            .ok_or_else(|| Error::InvalidState("Please, select an XML file first.".into()))?;
        let context = self
            .context
            .ok_or_else(|| Error::InvalidState("Please, select a parsing method first.".into()))?;

        if self.validate {
            validate::validate_file(file)?;
        }

        let mut table = context.execute_parse(file)?;
        if let Some(column) = sort {
            table = sort_data(table, column);
        }

        self.parsed = true;
        Ok(table)
    }

    /// Filter the selected file; only allowed after a successful parse
    pub fn search(&self, filter: &StudentFilter) -> Result<Table> {
        match (&self.file, self.parsed) {
            (Some(file), true) => search::search(file, filter),
            _ => Err(Error::InvalidState(
                "Please, parse the XML file first.".into(),
            )),
        }
    }

    /// Forget the file, strategy and parsed state
    pub fn clear(&mut self) {
        self.file = None;
        self.context = None;
        self.parsed = false;
    }
}
