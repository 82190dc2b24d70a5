//! Shallow structural check run before parsing

use crate::error::{Error, Result};
use crate::parser::{fields, query};
use roxmltree::Document;
use std::path::Path;
use tracing::warn;

/// True when every `<Student>` has a `<Name>` child element and a `Faculty`
/// attribute. A document without students is valid.
pub fn is_valid_structure(doc: &Document) -> bool {
    first_violation(doc).is_none()
}

/// Load `path` and fail with [`Error::Structure`] on the first student
/// missing a required part
pub fn validate_file(path: &Path) -> Result<()> {
    let text = query::read_source(path)?;
    let doc = query::parse_document(path, &text)?;

    match first_violation(&doc) {
        None => Ok(()),
        Some((index, missing)) => {
            warn!("{}: Student #{} has no {}", path.display(), index, missing);
            Err(Error::Structure {
                path: path.to_path_buf(),
                index,
                missing,
            })
        }
    }
}

fn first_violation(doc: &Document) -> Option<(usize, &'static str)> {
    query::students(doc)
        .enumerate()
        .find_map(|(i, student)| {
            if !student.children().any(|c| c.has_tag_name(fields::NAME)) {
                Some((i + 1, "Name element"))
            } else if student.attribute(fields::FACULTY).is_none() {
                Some((i + 1, "Faculty attribute"))
            } else {
                None
            }
        })
}
