//! Tree construction from SAX events
//!
//! The construction cursor is a local of [`build_document`] and never
//! outlives it, so a finished [`Document`] carries no build state.

use log::trace;

use super::document::Document;
use super::node::{NodeId, ROOT};
use crate::error::{DomError, Result};
use crate::sax::{is_blank, SaxEvent};

/// Build a document from a stream of SAX events.
///
/// The first error, whether reported by the event source or found while
/// applying an event, aborts the build and the partial tree is dropped.
pub fn build_document<'a, I>(events: I) -> Result<Document>
where
    I: IntoIterator<Item = Result<SaxEvent<'a>>>,
{
    let mut doc = Document::new();
    let mut cursor = ROOT;

    for event in events {
        cursor = apply_event(&mut doc, cursor, event?)?;
    }

    if cursor != ROOT {
        let name = doc.node_name(cursor).unwrap_or_default().to_owned();
        return Err(DomError::UnclosedElement(name));
    }
    Ok(doc)
}

/// Apply one event and return the new cursor
fn apply_event(doc: &mut Document, cursor: NodeId, event: SaxEvent<'_>) -> Result<NodeId> {
    match event {
        SaxEvent::StartElement { name, attributes } => {
            if name.is_empty() {
                return Err(DomError::Parse {
                    message: "Element with an empty name".to_string(),
                    position: None,
                });
            }
            let id = doc.append_child(cursor, name.into_owned());
            for (key, value) in &attributes {
                doc.set_attribute(id, key, value);
            }
            trace!("Opened node {} under {}", id, cursor);
            Ok(id)
        }

        SaxEvent::EndElement => doc.parent(cursor).ok_or(DomError::UnbalancedEnd),

        SaxEvent::Text(text) => {
            if is_blank(&text) {
                return Ok(cursor);
            }
            if cursor == ROOT {
                return Err(DomError::TextOutsideElement);
            }
            doc.append_text(cursor, &text);
            Ok(cursor)
        }
    }
}
