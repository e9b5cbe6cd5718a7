//! SAX Event Types
//!
//! The three notifications the tree builder consumes. Everything else a
//! tokenizer may report (comments, processing instructions, declarations)
//! never reaches this type.

use std::borrow::Cow;

/// A SAX parsing event
#[derive(Debug, Clone, PartialEq)]
pub enum SaxEvent<'a> {
    /// Start of an element, attributes in document order
    StartElement {
        name: Cow<'a, str>,
        attributes: Vec<(Cow<'a, str>, Cow<'a, str>)>,
    },

    /// End of the most recently started element
    EndElement,

    /// Character data, entity references already expanded
    Text(Cow<'a, str>),
}

impl<'a> SaxEvent<'a> {
    /// Start event without attributes
    pub fn start(name: impl Into<Cow<'a, str>>) -> Self {
        SaxEvent::StartElement {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// Start event with attributes
    pub fn start_with<N, K, V>(name: N, attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        N: Into<Cow<'a, str>>,
        K: Into<Cow<'a, str>>,
        V: Into<Cow<'a, str>>,
    {
        SaxEvent::StartElement {
            name: name.into(),
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Text event
    pub fn text(content: impl Into<Cow<'a, str>>) -> Self {
        SaxEvent::Text(content.into())
    }

    #[inline]
    pub fn is_start_element(&self) -> bool {
        matches!(self, SaxEvent::StartElement { .. })
    }

    #[inline]
    pub fn is_end_element(&self) -> bool {
        matches!(self, SaxEvent::EndElement)
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, SaxEvent::Text(_))
    }

    /// Element name of a start event
    pub fn element_name(&self) -> Option<&str> {
        match self {
            SaxEvent::StartElement { name, .. } => Some(&**name),
            _ => None,
        }
    }
}

/// True when `text` holds only spaces, tabs and newlines.
///
/// [`SaxReader`](super::SaxReader) folds `\r\n` and lone `\r` into `\n`
/// first, so CRLF whitespace is blank too.
#[inline]
pub fn is_blank(text: &str) -> bool {
    text.bytes().all(|b| matches!(b, b' ' | b'\t' | b'\n'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_with_attributes() {
        let event = SaxEvent::start_with("name", [("xml:lang", "en_GB")]);
        assert!(event.is_start_element());
        assert_eq!(event.element_name(), Some("name"));
        if let SaxEvent::StartElement { attributes, .. } = &event {
            assert_eq!(attributes.len(), 1);
            assert_eq!(attributes[0].0, "xml:lang");
            assert_eq!(attributes[0].1, "en_GB");
        } else {
            panic!("Expected StartElement");
        }
    }

    #[test]
    fn test_event_kinds() {
        assert!(SaxEvent::EndElement.is_end_element());
        assert!(SaxEvent::text("x").is_text());
        assert_eq!(SaxEvent::text("x").element_name(), None);
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\n  "));
        assert!(!is_blank(" \r\n"));
        assert!(!is_blank("  a "));
    }
}
