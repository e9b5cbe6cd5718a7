//! Diagnostic tree dump
//!
//! One line per element in pre-order, `<name> [text]`, indented one space
//! per level counting the root as level one. Meant for logs and debugging,
//! not for reading back. Backslashes and line breaks inside text are
//! escaped, so every element stays on its own line and a literal `\n` in
//! the text is never confused with a real newline.

use std::fmt;

use super::document::Document;

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for id in self.descendants(self.root()) {
            let Some(node) = self.node(id) else { continue };
            let name = node.name.as_deref().unwrap_or_default();
            let indent = node.depth as usize + 1;
            let text = node
                .text
                .replace('\\', "\\\\")
                .replace('\r', "\\r")
                .replace('\n', "\\n");
            writeln!(f, "{:indent$}<{}> [{}]", "", name, text, indent = indent)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dump_format() {
        let doc = Document::parse(b"<a>x<b>y</b><c/></a>").unwrap();
        assert_eq!(doc.to_string(), "  <a> [x]\n   <b> [y]\n   <c> []\n");
    }

    #[test]
    fn test_multiline_text_stays_on_one_line() {
        let doc = Document::parse(b"<a>one\ntwo</a>").unwrap();
        assert_eq!(doc.to_string(), "  <a> [one\\ntwo]\n");
    }

    #[test]
    fn test_backslash_escaped() {
        let doc = Document::parse(br"<a>one\ntwo</a>").unwrap();
        assert_eq!(doc.to_string(), "  <a> [one\\\\ntwo]\n");
    }

    #[test]
    fn test_empty_document_dumps_nothing() {
        assert_eq!(Document::new().to_string(), "");
    }

    #[test]
    fn test_line_count_matches_elements() {
        let doc = Document::parse(b"<r><a/><a/><b><c/></b></r>").unwrap();
        assert_eq!(doc.to_string().lines().count(), doc.element_count());
    }
}
