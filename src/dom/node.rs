//! XML Node representation
//!
//! Uses NodeId (u32) for compact, cache-friendly node references.

/// Compact node identifier (index into arena)
pub type NodeId = u32;

/// Id of the synthetic root every document starts with
pub const ROOT: NodeId = 0;

/// An element in the arena
///
/// The root is the only node without a name or parent.
#[derive(Debug, Clone, Default)]
pub struct XmlNode {
    /// Element tag, `None` only for the root
    pub name: Option<String>,
    /// Character data accumulated directly under this element
    pub text: String,
    /// Attributes in first-seen order, names unique
    pub attributes: Vec<XmlAttribute>,
    /// Parent node (None for the root)
    pub parent: Option<NodeId>,
    /// First child node
    pub first_child: Option<NodeId>,
    /// Last child node
    pub last_child: Option<NodeId>,
    /// Previous sibling
    pub prev_sibling: Option<NodeId>,
    /// Next sibling
    pub next_sibling: Option<NodeId>,
    /// Depth in document tree, root is 0
    pub depth: u32,
}

impl XmlNode {
    /// Create the synthetic root
    pub fn root() -> Self {
        XmlNode::default()
    }

    /// Create a new element node
    pub fn element(name: impl Into<String>, parent: NodeId, depth: u32) -> Self {
        XmlNode {
            name: Some(name.into()),
            parent: Some(parent),
            depth,
            ..XmlNode::default()
        }
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    #[inline]
    pub fn has_children(&self) -> bool {
        self.first_child.is_some()
    }

    /// Set an attribute, replacing the value if the name is already present
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value,
            None => self.attributes.push(XmlAttribute { name, value }),
        }
    }

    /// Look up an attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }
}

/// Stored attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlAttribute {
    pub name: String,
    pub value: String,
}
