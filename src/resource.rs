//! ResourceArc Wrapper
//!
//! Holds a built document on the BEAM side. The tree is never mutated
//! after construction, so queries share it without a lock.

use rustler::ResourceArc;

use crate::dom::Document;

/// Wrapper for Document that can be stored in a ResourceArc
pub struct DocumentResource {
    pub doc: Document,
}

impl DocumentResource {
    pub fn new(doc: Document) -> Self {
        DocumentResource { doc }
    }
}

#[rustler::resource_impl]
impl rustler::Resource for DocumentResource {}

/// Type alias for the ResourceArc
pub type DocumentRef = ResourceArc<DocumentResource>;
