//! Locale-keyed text
//!
//! Profiles repeat an element once per translation:
//!
//! ```xml
//! <name>Color</name>
//! <name xml:lang="en_GB">Colour</name>
//! ```
//!
//! The first element named `key` without a non-empty `xml:lang` is the
//! unlocalized default, stored under the empty locale. When every element
//! carries a locale the first one supplies the default text. A translation
//! whose text equals the default is left out; a repeated locale keeps its
//! last text.

use std::collections::HashMap;

use crate::dom::{Document, NodeId};

/// Attribute carrying the locale tag
pub const XML_LANG: &str = "xml:lang";

impl Document {
    /// Collect the children of `id` named `key` into a locale -> text map.
    ///
    /// `None` when there is no such child.
    pub fn node_localized(&self, id: NodeId, key: &str) -> Option<HashMap<String, String>> {
        let first = self.child_by_name(id, key)?;
        let localized = |child: NodeId| {
            self.node_attribute(child, XML_LANG)
                .is_some_and(|lang| !lang.is_empty())
        };
        let default = self
            .children(id)
            .find(|&child| self.node_name(child) == Some(key) && !localized(child))
            .unwrap_or(first);
        let unlocalized = self.node_data(default).unwrap_or_default();

        let mut map = HashMap::new();
        for child in self.children(id) {
            if self.node_name(child) != Some(key) {
                continue;
            }
            let lang = self.node_attribute(child, XML_LANG);
            let text = self.node_data(child).unwrap_or_default();
            if localized(child) && text == unlocalized {
                continue;
            }
            map.insert(lang.unwrap_or_default().to_owned(), text.to_owned());
        }
        Some(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parent(xml: &str) -> (Document, NodeId) {
        let doc = Document::parse(xml.as_bytes()).unwrap();
        let id = doc.get_node(None, "p").unwrap();
        (doc, id)
    }

    #[test]
    fn test_localized_distinct() {
        let (doc, id) = parent(
            "<p><name xml:lang=\"en_GB\">colour</name><name>color</name></p>",
        );
        let map = doc.node_localized(id, "name").unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("").map(String::as_str), Some("color"));
        assert_eq!(map.get("en_GB").map(String::as_str), Some("colour"));
    }

    #[test]
    fn test_identical_translation_skipped() {
        let (doc, id) = parent(
            "<p><name>Color</name><name xml:lang=\"en_US\">Color</name><name xml:lang=\"fr\">Couleur</name></p>",
        );
        let map = doc.node_localized(id, "name").unwrap();
        assert_eq!(map.len(), 2);
        assert!(!map.contains_key("en_US"));
        assert_eq!(map.get("fr").map(String::as_str), Some("Couleur"));
    }

    #[test]
    fn test_all_localized_falls_back_to_first_child() {
        // No unlocalized child, so the first one supplies the comparison text
        let (doc, id) = parent(
            "<p><name xml:lang=\"de\">Farbe</name><name xml:lang=\"at\">Farbe</name></p>",
        );
        let map = doc.node_localized(id, "name").unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_default_found_after_translations() {
        let (doc, id) = parent(
            "<p><name xml:lang=\"de\">Farbe</name><name xml:lang=\"fr\">Color</name><name>Color</name></p>",
        );
        let map = doc.node_localized(id, "name").unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("").map(String::as_str), Some("Color"));
        assert_eq!(map.get("de").map(String::as_str), Some("Farbe"));
        assert!(!map.contains_key("fr"));
    }

    #[test]
    fn test_later_locale_overwrites() {
        let (doc, id) = parent(
            "<p><name>A</name><name xml:lang=\"fr\">B</name><name xml:lang=\"fr\">C</name></p>",
        );
        let map = doc.node_localized(id, "name").unwrap();
        assert_eq!(map.get("fr").map(String::as_str), Some("C"));
    }

    #[test]
    fn test_empty_lang_is_default() {
        let (doc, id) = parent("<p><name>A</name><name xml:lang=\"\">A</name></p>");
        let map = doc.node_localized(id, "name").unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("").map(String::as_str), Some("A"));
    }

    #[test]
    fn test_other_children_ignored() {
        let (doc, id) = parent("<p><title>T</title><name>N</name><title>U</title></p>");
        let map = doc.node_localized(id, "name").unwrap();
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_missing_key() {
        let (doc, id) = parent("<p><title>T</title></p>");
        assert!(doc.node_localized(id, "name").is_none());
    }
}
