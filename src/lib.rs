//! colord-dom - a small read-only XML DOM for color profile data
//!
//! Layers:
//! - `sax`: pull events out of a byte buffer (quick-xml underneath)
//! - `dom`: build an arena tree from events, walk it by `/`-separated paths,
//!   and dump it for debugging
//! - `extract`: typed reads of node text (numbers, color triplets,
//!   locale-keyed strings)
//!
//! ```
//! use colord_dom::Document;
//!
//! let doc = Document::parse(b"<profile><white><L>100</L><a>0</a><b>0</b></white></profile>")?;
//! let white = doc.get_node(None, "profile/white").expect("white point");
//! assert_eq!(doc.node_lab(white)?.L, 100.0);
//! # Ok::<(), colord_dom::DomError>(())
//! ```
//!
//! With the `nif` feature the same queries are exported to Erlang/Elixir.

pub mod dom;
pub mod error;
pub mod extract;
pub mod sax;

#[cfg(feature = "nif")]
mod resource;
#[cfg(feature = "nif")]
mod term;

pub use dom::{build_document, Document, InputLength, NodeId, XmlAttribute, XmlNode, ROOT};
pub use error::{ColorFault, DomError, Position, Result};
pub use extract::{ColorLab, ColorRgb, ColorYxy, INVALID_DOUBLE, INVALID_INT, XML_LANG};
pub use sax::{SaxEvent, SaxReader};

// ============================================================================
// Allocator Configuration
// ============================================================================

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

// ============================================================================
// NIFs
// ============================================================================

#[cfg(feature = "nif")]
mod nif {
    use rustler::{Binary, Encoder, Env, NifResult, ResourceArc, Term};

    use crate::dom::{Document, NodeId};
    use crate::resource::{DocumentRef, DocumentResource};
    use crate::term;

    /// Build a document; `{:ok, ref}` or `{:error, reason}`
    #[rustler::nif(schedule = "DirtyCpu")]
    fn parse<'a>(env: Env<'a>, input: Binary<'a>) -> Term<'a> {
        match Document::parse(input.as_slice()) {
            Ok(doc) => term::ok_tuple(env, ResourceArc::new(DocumentResource::new(doc))),
            Err(e) => term::error_tuple(env, &e),
        }
    }

    /// Resolve a path from `start` (nil means the document root)
    #[rustler::nif]
    fn get_node(doc: DocumentRef, start: Option<NodeId>, path: &str) -> Option<NodeId> {
        doc.doc.get_node(start, path)
    }

    #[rustler::nif]
    fn node_name(doc: DocumentRef, id: NodeId) -> Option<String> {
        doc.doc.node_name(id).map(str::to_owned)
    }

    #[rustler::nif]
    fn node_data(doc: DocumentRef, id: NodeId) -> Option<String> {
        doc.doc.node_data(id).map(str::to_owned)
    }

    #[rustler::nif]
    fn node_attribute(doc: DocumentRef, id: NodeId, key: &str) -> Option<String> {
        doc.doc.node_attribute(id, key).map(str::to_owned)
    }

    #[rustler::nif]
    fn node_data_as_double<'a>(env: Env<'a>, doc: DocumentRef, id: NodeId) -> Term<'a> {
        match doc.doc.node_data_as_double(id) {
            Ok(v) => term::ok_tuple(env, v),
            Err(e) => term::error_tuple(env, &e),
        }
    }

    #[rustler::nif]
    fn node_data_as_int<'a>(env: Env<'a>, doc: DocumentRef, id: NodeId) -> Term<'a> {
        match doc.doc.node_data_as_int(id) {
            Ok(v) => term::ok_tuple(env, v),
            Err(e) => term::error_tuple(env, &e),
        }
    }

    #[rustler::nif]
    fn node_lab<'a>(env: Env<'a>, doc: DocumentRef, id: NodeId) -> NifResult<Term<'a>> {
        match doc.doc.node_lab(id) {
            Ok(lab) => Ok(term::ok_tuple(env, term::lab_to_term(env, lab)?)),
            Err(e) => Ok(term::error_tuple(env, &e)),
        }
    }

    #[rustler::nif]
    fn node_rgb<'a>(env: Env<'a>, doc: DocumentRef, id: NodeId) -> NifResult<Term<'a>> {
        match doc.doc.node_rgb(id) {
            Ok(rgb) => Ok(term::ok_tuple(env, term::rgb_to_term(env, rgb)?)),
            Err(e) => Ok(term::error_tuple(env, &e)),
        }
    }

    #[rustler::nif]
    fn node_yxy<'a>(env: Env<'a>, doc: DocumentRef, id: NodeId) -> NifResult<Term<'a>> {
        match doc.doc.node_yxy(id) {
            Ok(yxy) => Ok(term::ok_tuple(env, term::yxy_to_term(env, yxy)?)),
            Err(e) => Ok(term::error_tuple(env, &e)),
        }
    }

    /// Locale map for children of `id` named `key`, or nil
    #[rustler::nif]
    fn node_localized<'a>(
        env: Env<'a>,
        doc: DocumentRef,
        id: NodeId,
        key: &str,
    ) -> NifResult<Term<'a>> {
        match doc.doc.node_localized(id, key) {
            Some(map) => term::localized_to_term(env, &map),
            None => Ok(rustler::types::atom::nil().encode(env)),
        }
    }

    /// Indented debug dump of the whole tree
    #[rustler::nif]
    fn to_string(doc: DocumentRef) -> String {
        doc.doc.to_string()
    }

    rustler::init!("Elixir.ColordDom.Native");
}
