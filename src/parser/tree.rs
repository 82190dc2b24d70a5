//! Full-tree parsing
//!
//! The whole document is loaded into an arena of elements, then every
//! `<Student>` is looked up by tag name anywhere in the tree. The name comes
//! from the text of the `<Name>` child element; the rest from attributes.

use super::{fields, STUDENT};
use crate::error::{Error, Result};
use crate::model::Record;
use crate::report::Table;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::Path;
use tracing::debug;

/// Parse `path` through an in-memory element tree
pub fn parse(path: &Path) -> Result<Table> {
    let document = Document::load(path)?;

    let table: Table = document
        .elements_by_tag_name(STUDENT)
        .map(|student| Record {
            name: student
                .child_element(fields::NAME)
                .map(|n| n.inner_text())
                .unwrap_or_default(),
            faculty: student.attribute_or_empty(fields::FACULTY),
            department: student.attribute_or_empty(fields::DEPARTMENT),
            course: student.attribute_or_empty(fields::COURSE),
            room: student.attribute_or_empty(fields::ROOM),
        })
        .collect();

    debug!("Loaded tree for {}: {} students", path.display(), table.len());

    Ok(table)
}

#[derive(Debug)]
enum Child {
    Element(usize),
    Text(String),
}

#[derive(Debug)]
struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Child>,
}

/// Addressable element tree
///
/// Elements are stored in the order their start tags appear, so iterating
/// the arena walks the document in order.
#[derive(Debug)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    /// Read and build the tree for `path`
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(path, &text)
    }

    /// Build the tree from `text`; `path` is only used in error messages
    pub fn parse(path: &Path, text: &str) -> Result<Self> {
        let mut reader = Reader::from_str(text);
        let malformed = |e: quick_xml::Error, pos| {
            Error::malformed(path, format!("{} at byte {}", e, pos))
        };

        let mut elements: Vec<Element> = Vec::new();
        let mut stack: Vec<usize> = Vec::new();

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => {
                    let id = open_element(path, e, &mut elements, &stack)?;
                    stack.push(id);
                }
                Ok(Event::Empty(ref e)) => {
                    open_element(path, e, &mut elements, &stack)?;
                }
                Ok(Event::End(_)) => {
                    stack.pop();
                }
                Ok(Event::Text(ref t)) => {
                    let text = t
                        .unescape()
                        .map_err(|e| malformed(e, reader.buffer_position()))?;
                    match stack.last() {
                        Some(&parent) => elements[parent]
                            .children
                            .push(Child::Text(text.into_owned())),
                        None if text.trim().is_empty() => {}
                        None => {
                            return Err(Error::malformed(path, "text outside of the root element"));
                        }
                    }
                }
                Ok(Event::CData(t)) => {
                    let text = String::from_utf8_lossy(&t.into_inner()).into_owned();
                    match stack.last() {
                        Some(&parent) => elements[parent].children.push(Child::Text(text)),
                        None => {
                            return Err(Error::malformed(path, "CDATA outside of the root element"));
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(malformed(e, reader.buffer_position())),
                _ => {}
            }
        }

        if elements.is_empty() {
            return Err(Error::malformed(path, "no root element"));
        }
        if !stack.is_empty() {
            return Err(Error::malformed(
                path,
                format!("unexpected end of file, {} element(s) left open", stack.len()),
            ));
        }

        Ok(Self { elements })
    }

    #[cfg(test)]
    fn root(&self) -> ElementRef<'_> {
        ElementRef { doc: self, id: 0 }
    }

    /// Every element with the given tag name, in document order
    pub fn elements_by_tag_name<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.elements
            .iter()
            .enumerate()
            .filter(move |(_, e)| e.name == name)
            .map(move |(id, _)| ElementRef { doc: self, id })
    }
}

fn open_element(
    path: &Path,
    start: &BytesStart,
    elements: &mut Vec<Element>,
    stack: &[usize],
) -> Result<usize> {
    if stack.is_empty() && !elements.is_empty() {
        return Err(Error::malformed(path, "more than one root element"));
    }

    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| Error::malformed(path, e))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| Error::malformed(path, e))?
            .into_owned();
        attributes.push((key, value));
    }

    let id = elements.len();
    elements.push(Element {
        name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
        attributes,
        children: Vec::new(),
    });
    if let Some(&parent) = stack.last() {
        elements[parent].children.push(Child::Element(id));
    }

    Ok(id)
}

/// Borrowed handle to one element of a [`Document`]
#[derive(Debug, Clone, Copy)]
pub struct ElementRef<'a> {
    doc: &'a Document,
    id: usize,
}

impl<'a> ElementRef<'a> {
    fn element(&self) -> &'a Element {
        &self.doc.elements[self.id]
    }

    #[cfg(test)]
    fn name(&self) -> &'a str {
        &self.element().name
    }

    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.element()
            .attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attribute_or_empty(&self, name: &str) -> String {
        self.attribute(name).unwrap_or_default().to_string()
    }

    /// First direct child element with the given name
    pub fn child_element(&self, name: &str) -> Option<ElementRef<'a>> {
        self.element().children.iter().find_map(|child| match child {
            Child::Element(id) if self.doc.elements[*id].name == name => Some(ElementRef {
                doc: self.doc,
                id: *id,
            }),
            _ => None,
        })
    }

    /// Concatenated text of this element and all its descendants
    pub fn inner_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.element().children {
            match child {
                Child::Text(text) => out.push_str(text),
                Child::Element(id) => ElementRef {
                    doc: self.doc,
                    id: *id,
                }
                .collect_text(out),
            }
        }
    }
}
