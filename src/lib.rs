//! studentxml - Parse, filter and sort student XML rosters
//!
//! A roster is any XML document holding `<Student>` elements with a
//! `Faculty` attribute, a `<Name>` child element and optional `Department`,
//! `Course` and `Room` attributes.
//!
//! # Architecture
//!
//! 1. **Validation** - Shallow check that every student has a name and faculty
//! 2. **Parsing** - One of three strategies turns the file into records
//! 3. **Sorting** - Optional stable sort by any column
//! 4. **Search** - Independent re-read of the file with name/faculty/room filters
//! 5. **Reporting** - Fixed-width text table or JSON

pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod report;
pub mod search;
pub mod session;
pub mod validate;

pub use config::Config;
pub use error::{Error, Result};
pub use model::{Column, Record};
pub use parser::{execute_parse, sort_data, ParserContext, Strategy};
pub use report::{format_row, table_header, ReportFormat, Reporter, Table, NO_RECORDS};
pub use search::{faculties, search, StudentFilter};
pub use session::Session;
pub use validate::{is_valid_structure, validate_file};
