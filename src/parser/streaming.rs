//! Forward-only event parsing with quick-xml
//!
//! Every field is read from the attributes of the `<Student>` start tag,
//! the name included. Child content is never buffered, so a name stored as
//! a `<Name>` child element comes out empty here.

use super::{fields, STUDENT};
use crate::error::{Error, Result};
use crate::model::Record;
use crate::report::Table;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Parse `path` by streaming its events
pub fn parse(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut reader = Reader::from_reader(BufReader::new(file));

    let mut table = Table::new();
    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut seen_root = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                enter_element(path, e, depth, &mut seen_root, &mut table)?;
                depth += 1;
            }
            Ok(Event::Empty(ref e)) => {
                enter_element(path, e, depth, &mut seen_root, &mut table)?;
            }
            Ok(Event::End(_)) => {
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Text(ref t)) => {
                let text = t.unescape().map_err(|err| {
                    Error::malformed(path, format!("{} at byte {}", err, reader.buffer_position()))
                })?;
                if depth == 0 && !text.trim().is_empty() {
                    return Err(Error::malformed(path, "text outside of the root element"));
                }
            }
            Ok(Event::CData(_)) if depth == 0 => {
                return Err(Error::malformed(path, "CDATA outside of the root element"));
            }
            Ok(Event::Eof) => break,
            Err(quick_xml::Error::Io(e)) => {
                return Err(Error::io(path, std::io::Error::new(e.kind(), e.to_string())));
            }
            Err(e) => {
                return Err(Error::malformed(
                    path,
                    format!("{} at byte {}", e, reader.buffer_position()),
                ));
            }
            _ => {}
        }
        buf.clear();
    }

    if !seen_root {
        return Err(Error::malformed(path, "no root element"));
    }
    if depth != 0 {
        return Err(Error::malformed(
            path,
            format!("unexpected end of file, {} element(s) left open", depth),
        ));
    }

    debug!("Streamed {}: {} students", path.display(), table.len());

    Ok(table)
}

/// Root checks and attribute well-formedness for every element, then the
/// record itself when the element is a student
fn enter_element(
    path: &Path,
    e: &BytesStart,
    depth: usize,
    seen_root: &mut bool,
    table: &mut Table,
) -> Result<()> {
    if depth == 0 {
        if *seen_root {
            return Err(Error::malformed(path, "more than one root element"));
        }
        *seen_root = true;
    }

    for attr in e.attributes() {
        let attr = attr.map_err(|err| Error::malformed(path, err))?;
        attr.unescape_value()
            .map_err(|err| Error::malformed(path, err))?;
    }

    if e.name().as_ref() == STUDENT.as_bytes() {
        table.push(read_student(path, e)?);
    }
    Ok(())
}

fn read_student(path: &Path, e: &BytesStart) -> Result<Record> {
    let attr = |key: &str| -> Result<String> {
        match e.try_get_attribute(key) {
            Ok(Some(a)) => a
                .unescape_value()
                .map(|v| v.into_owned())
                .map_err(|err| Error::malformed(path, err)),
            Ok(None) => Ok(String::new()),
            Err(err) => Err(Error::malformed(path, err)),
        }
    };

    Ok(Record {
        name: attr(fields::NAME)?,
        faculty: attr(fields::FACULTY)?,
        department: attr(fields::DEPARTMENT)?,
        course: attr(fields::COURSE)?,
        room: attr(fields::ROOM)?,
    })
}
