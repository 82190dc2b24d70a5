//! Error types shared by every parsing, search and session operation

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to the caller
///
/// Every failure is terminal for the operation that produced it. Missing
/// optional fields (Department, Course, Room, the Name attribute) never
/// produce an error; they default to an empty string instead.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("Failed to read {}: {source}", path.display())]
    #[diagnostic(code(studentxml::io), help("check that the file exists and is readable"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed XML in {}: {message}", path.display())]
    #[diagnostic(code(studentxml::malformed_xml))]
    MalformedXml { path: PathBuf, message: String },

    #[error(
        "The XML file does not match the expected structure: Student #{index} in {} has no {missing}",
        path.display()
    )]
    #[diagnostic(
        code(studentxml::structure),
        help("every <Student> needs a <Name> child element and a Faculty attribute")
    )]
    Structure {
        path: PathBuf,
        /// 1-based position of the offending element in document order
        index: usize,
        missing: &'static str,
    },

    #[error("{0}")]
    #[diagnostic(code(studentxml::invalid_state))]
    InvalidState(String),

    #[error("Invalid config file {}: {message}", path.display())]
    #[diagnostic(code(studentxml::config))]
    Config { path: PathBuf, message: String },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Error::MalformedXml {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
