//! SAX (Simple API for XML) Module
//!
//! Narrows a streaming tokenizer down to the three events the tree
//! builder needs.
//!
//! ```text
//! &[u8] ---> quick-xml Reader ---> SaxReader ---> SaxEvent
//!                                                    |
//!                                                    v
//!                                              build_document
//! ```
//!
//! ## Event Types
//!
//! - `StartElement` - element name and attributes
//! - `EndElement` - closes the most recent open element
//! - `Text` - character data, including CDATA sections

pub mod events;
pub mod reader;

pub use events::{is_blank, SaxEvent};
pub use reader::SaxReader;
