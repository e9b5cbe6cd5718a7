//! Tokenizer adapter
//!
//! Drives `quick-xml` over a byte slice and narrows its event stream to
//! [`SaxEvent`]s:
//! - `<a/>` becomes a start followed by an end
//! - CDATA sections become text
//! - `\r\n` and lone `\r` in character data become `\n`
//! - comments, PIs, the XML declaration and DOCTYPE are dropped

use std::borrow::Cow;

use log::trace;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::events::SaxEvent;
use crate::error::{DomError, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Pull reader yielding SAX events from a byte slice
///
/// Stops after the first error; the remaining input is not scanned.
pub struct SaxReader<'a> {
    input: &'a [u8],
    reader: Reader<&'a [u8]>,
    /// End event owed for an empty element
    pending_end: bool,
    done: bool,
}

impl<'a> SaxReader<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        let input = input.strip_prefix(UTF8_BOM).unwrap_or(input);
        let mut reader = Reader::from_reader(input);
        let config = reader.config_mut();
        config.trim_text(false);
        config.check_end_names = true;
        SaxReader {
            input,
            reader,
            pending_end: false,
            done: false,
        }
    }

    /// Get the next SAX event, `None` at end of input or after an error
    pub fn next_event(&mut self) -> Option<Result<SaxEvent<'a>>> {
        if self.done {
            return None;
        }
        if self.pending_end {
            self.pending_end = false;
            return Some(Ok(SaxEvent::EndElement));
        }

        loop {
            let offset = self.reader.buffer_position() as usize;
            let event = match self.reader.read_event() {
                Ok(event) => event,
                Err(err) => {
                    self.done = true;
                    let at = self.reader.error_position() as usize;
                    return Some(Err(DomError::parse_at(err, self.input, at)));
                }
            };

            let converted = match event {
                Event::Start(elem) => self.start_element(&elem, offset),
                Event::Empty(elem) => {
                    self.pending_end = true;
                    self.start_element(&elem, offset)
                }
                Event::End(_) => Ok(SaxEvent::EndElement),
                Event::Text(text) => decode_text(text.into_inner(), true)
                    .map(SaxEvent::Text)
                    .map_err(|msg| DomError::parse_at(msg, self.input, offset)),
                Event::CData(cdata) => decode_text(cdata.into_inner(), false)
                    .map(SaxEvent::Text)
                    .map_err(|msg| DomError::parse_at(msg, self.input, offset)),
                Event::Eof => {
                    self.done = true;
                    return None;
                }
                other => {
                    trace!("Skipping {:?} at byte {}", other, offset);
                    continue;
                }
            };

            if converted.is_err() {
                self.done = true;
                self.pending_end = false;
            }
            return Some(converted);
        }
    }

    fn start_element(&self, elem: &BytesStart<'_>, offset: usize) -> Result<SaxEvent<'a>> {
        let fail = |msg: String| DomError::parse_at(msg, self.input, offset);

        let name = std::str::from_utf8(elem.name().as_ref())
            .map_err(|e| fail(format!("Element name is not valid UTF-8: {}", e)))?
            .to_owned();

        // Repeated attribute names are not an error here; the node keeps the last value.
        let mut attrs = elem.attributes();
        attrs.with_checks(false);

        let mut attributes = Vec::new();
        for attr in attrs {
            let attr = attr.map_err(|e| fail(format!("Malformed attribute in <{}>: {}", name, e)))?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(|e| fail(format!("Attribute name is not valid UTF-8: {}", e)))?
                .to_owned();
            let raw = std::str::from_utf8(&attr.value)
                .map_err(|e| fail(format!("Attribute value is not valid UTF-8: {}", e)))?;
            let value = unescape(raw)
                .map_err(|e| fail(format!("Bad reference in attribute {}: {}", key, e)))?
                .into_owned();
            attributes.push((Cow::Owned(key), Cow::Owned(value)));
        }

        Ok(SaxEvent::StartElement {
            name: Cow::Owned(name),
            attributes,
        })
    }
}

impl<'a> Iterator for SaxReader<'a> {
    type Item = Result<SaxEvent<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_event()
    }
}

/// Decode raw character data, folding line endings to `\n` and expanding
/// entity references unless it came from a CDATA section.
fn decode_text(raw: Cow<'_, [u8]>, expand: bool) -> std::result::Result<Cow<'_, str>, String> {
    let invalid = |e: std::str::Utf8Error| format!("Character data is not valid UTF-8: {}", e);
    let text = match raw {
        Cow::Borrowed(bytes) => Cow::Borrowed(std::str::from_utf8(bytes).map_err(invalid)?),
        Cow::Owned(bytes) => {
            Cow::Owned(String::from_utf8(bytes).map_err(|e| invalid(e.utf8_error()))?)
        }
    };
    let text = normalize_line_endings(text);
    if !expand {
        return Ok(text);
    }
    match text {
        Cow::Borrowed(text) => unescape(text).map_err(|e| e.to_string()),
        Cow::Owned(text) => unescape(&text)
            .map(|expanded| Cow::Owned(expanded.into_owned()))
            .map_err(|e| e.to_string()),
    }
}

/// `\r\n` and lone `\r` become `\n`. Runs before entity expansion, so a
/// `&#13;` reference still yields a carriage return.
fn normalize_line_endings(text: Cow<'_, str>) -> Cow<'_, str> {
    if memchr::memchr(b'\r', text.as_bytes()).is_none() {
        return text;
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}
