use super::Strategy;
use crate::error::Result;
use crate::model::Column;
use crate::report::Table;
use std::path::Path;
use tracing::debug;

/// Runs the selected strategy and sorts its output
///
/// A context always holds a strategy, so there is no "not selected" state to
/// check at parse time. The context keeps nothing between parses; every call
/// re-reads the file.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParserContext {
    strategy: Strategy,
}

impl ParserContext {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn execute_parse(&self, path: &Path) -> Result<Table> {
        execute_parse(path, self.strategy)
    }

    /// Stable ordinal sort of the rows by the trimmed value of `column`
    pub fn sort_data(table: Table, column: Column) -> Table {
        sort_data(table, column)
    }
}

/// Parse `path` with an explicit strategy
pub fn execute_parse(path: &Path, strategy: Strategy) -> Result<Table> {
    debug!("Parsing {} with {} strategy", path.display(), strategy);
    strategy.parse(path)
}

/// Stable ordinal sort of the rows by the trimmed value of `column`
pub fn sort_data(mut table: Table, column: Column) -> Table {
    table
        .records_mut()
        .sort_by(|a, b| a.get(column).trim().cmp(b.get(column).trim()));
    table
}
