//! Declarative query over a roxmltree document
//!
//! The extraction is a single iterator pipeline over the descendants of the
//! document: filter the `<Student>` elements, project each into a record.
//! The search and validation layers share the helpers below.

use super::{fields, STUDENT};
use crate::error::{Error, Result};
use crate::model::Record;
use crate::report::Table;
use roxmltree::{Document, Node, ParsingOptions};
use std::path::Path;
use tracing::debug;

/// Parse `path` with a descendant query
pub fn parse(path: &Path) -> Result<Table> {
    let text = read_source(path)?;
    let doc = parse_document(path, &text)?;

    let table: Table = students(&doc).map(|s| to_record(&s)).collect();

    debug!("Queried {}: {} students", path.display(), table.len());

    Ok(table)
}

/// Read the whole file into memory
pub(crate) fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Parse `text` into a document, allowing a DOCTYPE declaration
pub(crate) fn parse_document<'input>(path: &Path, text: &'input str) -> Result<Document<'input>> {
    let mut options = ParsingOptions::default();
    options.allow_dtd = true;
    Document::parse_with_options(text, options).map_err(|e| Error::malformed(path, e))
}

/// Every `<Student>` element, in document order
pub(crate) fn students<'a, 'input>(
    doc: &'a Document<'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    doc.descendants().filter(|n| n.has_tag_name(STUDENT))
}

/// Text of the first `name` child element, if there is one
pub(crate) fn child_text(node: &Node, name: &str) -> Option<String> {
    node.children()
        .find(|c| c.has_tag_name(name))
        .map(|c| text_content(&c))
}

/// Attribute value, empty when absent
pub(crate) fn attribute(node: &Node, name: &str) -> String {
    node.attribute(name).unwrap_or_default().to_string()
}

pub(crate) fn to_record(node: &Node) -> Record {
    Record {
        name: child_text(node, fields::NAME).unwrap_or_default(),
        faculty: attribute(node, fields::FACULTY),
        department: attribute(node, fields::DEPARTMENT),
        course: attribute(node, fields::COURSE),
        room: attribute(node, fields::ROOM),
    }
}

fn text_content(node: &Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}
