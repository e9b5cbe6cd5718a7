//! Slash-delimited path lookup
//!
//! `"profile/metadata/name"` walks one level per segment, taking the first
//! child in document order whose name matches. Later siblings with the
//! same name are never reached.

use super::document::Document;
use super::node::NodeId;

impl Document {
    /// First direct child of `parent` named `name`
    pub fn child_by_name(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.children(parent)
            .find(|&id| self.node_name(id) == Some(name))
    }

    /// Resolve `path` starting from `start`, or from the root when `None`.
    ///
    /// Returns `None` as soon as a segment has no match. An empty path
    /// names the start node itself.
    pub fn get_node(&self, start: Option<NodeId>, path: &str) -> Option<NodeId> {
        let mut node = start.unwrap_or_else(|| self.root());
        self.node(node)?;
        if path.is_empty() {
            return Some(node);
        }
        for segment in path.split('/') {
            node = self.child_by_name(node, segment)?;
        }
        Some(node)
    }

    /// Path of `id` relative to the root, the inverse of [`Document::get_node`]
    /// for nodes that are the first of their name among their siblings.
    pub fn node_path(&self, id: NodeId) -> Option<String> {
        let mut segments = Vec::new();
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            segments.push(self.node_name(current)?);
            current = parent;
        }
        if segments.is_empty() {
            return None;
        }
        segments.reverse();
        Some(segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(xml: &str) -> Document {
        Document::parse(xml.as_bytes()).unwrap()
    }

    #[test]
    fn test_path_from_root() {
        let d = doc("<html><body><p>hi</p></body></html>");
        let p = d.get_node(None, "html/body/p").unwrap();
        assert_eq!(d.node_data(p), Some("hi"));
        assert_eq!(d.node_path(p).as_deref(), Some("html/body/p"));
    }

    #[test]
    fn test_path_from_start_node() {
        let d = doc("<a><b><c>1</c></b></a>");
        let b = d.get_node(None, "a/b").unwrap();
        let c = d.get_node(Some(b), "c").unwrap();
        assert_eq!(d.node_data(c), Some("1"));
        assert_eq!(d.get_node(Some(b), "a/b/c"), None);
    }

    #[test]
    fn test_missing_segment() {
        let d = doc("<a><b/></a>");
        assert_eq!(d.get_node(None, "a/x"), None);
        assert_eq!(d.get_node(None, "a/b/c"), None);
        assert_eq!(d.get_node(None, "a/"), None);
        assert_eq!(d.get_node(None, "/a"), None);
    }

    #[test]
    fn test_first_duplicate_wins() {
        let d = doc("<p><a>1</a><a>2</a></p>");
        let p = d.get_node(None, "p").unwrap();
        let a = d.get_node(Some(p), "a").unwrap();
        assert_eq!(d.node_data(a), Some("1"));
    }

    #[test]
    fn test_empty_path_is_start() {
        let d = doc("<a><b/></a>");
        let a = d.get_node(None, "a").unwrap();
        assert_eq!(d.get_node(None, ""), Some(d.root()));
        assert_eq!(d.get_node(Some(a), ""), Some(a));
    }

    #[test]
    fn test_unknown_start() {
        let d = doc("<a/>");
        assert_eq!(d.get_node(Some(99), "a"), None);
    }

    #[test]
    fn test_root_has_no_path() {
        let d = doc("<a/>");
        assert_eq!(d.node_path(d.root()), None);
    }
}
