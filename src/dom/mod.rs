//! DOM Module - Arena-based XML Document
//!
//! - `node`: arena node with parent, child and sibling links
//! - `document`: the arena owner and its read-only accessors
//! - `builder`: turns SAX events into a document
//! - `path`: slash-delimited lookup
//! - `serialize`: diagnostic dump

pub mod builder;
pub mod document;
pub mod node;
pub mod path;
pub mod serialize;

pub use builder::build_document;
pub use document::{ChildIter, DescendantIter, Document, InputLength};
pub use node::{NodeId, XmlAttribute, XmlNode, ROOT};
