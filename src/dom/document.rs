//! XML Document - Arena-based DOM representation
//!
//! All nodes live in one `Vec<XmlNode>` and refer to each other by
//! [`NodeId`]. Index 0 is the synthetic root. Parent links are plain ids,
//! so the arena is the only owner and dropping the document frees the
//! whole tree at once.
//!
//! Mutation is crate-private and only the builder calls it; a `Document`
//! handed to a caller is read-only.

use log::debug;

use super::builder::build_document;
use super::node::{NodeId, XmlAttribute, XmlNode, ROOT};
use crate::error::{DomError, Result};
use crate::sax::SaxReader;

/// How much of an input buffer to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputLength {
    /// Exactly this many leading bytes
    Exact(usize),
    /// Everything before the first NUL byte, or the whole buffer if there is none
    NulTerminated,
}

impl InputLength {
    /// Cut `data` down to the bytes that should be parsed
    pub fn apply(self, data: &[u8]) -> Result<&[u8]> {
        match self {
            InputLength::Exact(len) => data.get(..len).ok_or(DomError::LengthOutOfBounds {
                len,
                available: data.len(),
            }),
            InputLength::NulTerminated => {
                Ok(memchr::memchr(0, data).map_or(data, |end| &data[..end]))
            }
        }
    }
}

/// An XML document stored in arena format
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<XmlNode>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Empty document holding only the root
    pub fn new() -> Self {
        let mut nodes = Vec::with_capacity(64);
        nodes.push(XmlNode::root());
        Document { nodes }
    }

    /// Parse a whole buffer into a document
    pub fn parse(data: &[u8]) -> Result<Self> {
        let doc = build_document(SaxReader::new(data))?;
        debug!(
            "Parsed {} bytes into {} elements",
            data.len(),
            doc.element_count()
        );
        Ok(doc)
    }

    /// Parse a buffer whose extent is given by `length`
    pub fn parse_xml_data(data: &[u8], length: InputLength) -> Result<Self> {
        Self::parse(length.apply(data)?)
    }

    /// Append a named element under `parent` and return its id
    pub(crate) fn append_child(&mut self, parent: NodeId, name: impl Into<String>) -> NodeId {
        let node_id = self.nodes.len() as NodeId;
        let depth = self.nodes[parent as usize].depth + 1;
        self.nodes.push(XmlNode::element(name, parent, depth));
        self.link_child(parent, node_id);
        node_id
    }

    /// Set an attribute on a node, last write wins
    pub(crate) fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(node) = self.nodes.get_mut(id as usize) {
            node.set_attribute(name, value);
        }
    }

    /// Append character data to a node's accumulated text
    pub(crate) fn append_text(&mut self, id: NodeId, text: &str) {
        if let Some(node) = self.nodes.get_mut(id as usize) {
            node.text.push_str(text);
        }
    }

    /// Link a child node to its parent
    fn link_child(&mut self, parent_id: NodeId, child_id: NodeId) {
        let last_child_opt = self.nodes[parent_id as usize].last_child;

        if let Some(last_child_id) = last_child_opt {
            self.nodes[child_id as usize].prev_sibling = Some(last_child_id);
            self.nodes[last_child_id as usize].next_sibling = Some(child_id);
        } else {
            self.nodes[parent_id as usize].first_child = Some(child_id);
        }
        self.nodes[parent_id as usize].last_child = Some(child_id);
    }

    /// Id of the synthetic root
    #[inline]
    pub fn root(&self) -> NodeId {
        ROOT
    }

    /// The first element under the root, if any
    pub fn root_element(&self) -> Option<NodeId> {
        self.nodes[ROOT as usize].first_child
    }

    /// Get a node by ID
    pub fn node(&self, id: NodeId) -> Option<&XmlNode> {
        self.nodes.get(id as usize)
    }

    /// Element name, `None` for the root or an unknown id
    pub fn node_name(&self, id: NodeId) -> Option<&str> {
        self.node(id)?.name.as_deref()
    }

    /// Accumulated text, `None` for the root or an unknown id
    pub fn node_data(&self, id: NodeId) -> Option<&str> {
        let node = self.node(id)?;
        if node.is_root() {
            return None;
        }
        Some(node.text.as_str())
    }

    /// Attribute value by name
    pub fn node_attribute(&self, id: NodeId, key: &str) -> Option<&str> {
        self.node(id)?.attribute(key)
    }

    /// All attributes of a node, empty for unknown ids
    pub fn attributes(&self, id: NodeId) -> &[XmlAttribute] {
        self.node(id)
            .map(|n| n.attributes.as_slice())
            .unwrap_or_default()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?.parent
    }

    pub fn depth(&self, id: NodeId) -> Option<u32> {
        self.node(id).map(|n| n.depth)
    }

    /// Iterate over children of a node in document order
    pub fn children(&self, id: NodeId) -> ChildIter<'_> {
        let first = self.node(id).and_then(|n| n.first_child);
        ChildIter { doc: self, next: first }
    }

    /// Iterate over all descendants of a node (pre-order, excluding the node)
    pub fn descendants(&self, id: NodeId) -> DescendantIter<'_> {
        let mut stack = Vec::new();
        if let Some(node) = self.node(id) {
            let mut child_id = node.last_child;
            while let Some(cid) = child_id {
                stack.push(cid);
                child_id = self.node(cid).and_then(|n| n.prev_sibling);
            }
        }
        DescendantIter { doc: self, stack }
    }

    /// Number of nodes including the root
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of elements, i.e. every node but the root
    pub fn element_count(&self) -> usize {
        self.nodes.len() - 1
    }
}

/// Iterator over child nodes
pub struct ChildIter<'d> {
    doc: &'d Document,
    next: Option<NodeId>,
}

impl Iterator for ChildIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.doc.node(current).and_then(|n| n.next_sibling);
        Some(current)
    }
}

/// Iterator over descendant nodes (depth-first)
pub struct DescendantIter<'d> {
    doc: &'d Document,
    stack: Vec<NodeId>,
}

impl Iterator for DescendantIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;

        // Push children in reverse so the first child is visited first
        if let Some(node) = self.doc.node(current) {
            let mut child_id = node.last_child;
            while let Some(id) = child_id {
                self.stack.push(id);
                child_id = self.doc.node(id).and_then(|n| n.prev_sibling);
            }
        }

        Some(current)
    }
}
