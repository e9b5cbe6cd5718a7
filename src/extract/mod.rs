//! Typed reads over node text
//!
//! Each submodule adds methods to [`Document`](crate::dom::Document):
//! - `scalar`: `node_data_as_double`, `node_data_as_int`
//! - `color`: `node_lab`, `node_rgb`, `node_yxy`
//! - `localized`: `node_localized`

pub mod color;
pub mod localized;
pub mod scalar;

pub use color::{ColorLab, ColorRgb, ColorYxy};
pub use localized::XML_LANG;
pub use scalar::{
    double_or_sentinel, int_or_sentinel, parse_double, parse_int, INVALID_DOUBLE, INVALID_INT,
};
