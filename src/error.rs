//! Error types for document construction and queries
//!
//! One flat enum. Lookups that simply find nothing return `Option`, so
//! there is no "not found" variant for paths or children.

use std::fmt;

use thiserror::Error;

use crate::dom::NodeId;

pub type Result<T> = std::result::Result<T, DomError>;

/// 1-based source location of a tokenizer diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Resolve a byte offset into `input` to a line and column.
    ///
    /// Offsets past the end clamp to the end of input.
    pub fn from_offset(input: &[u8], offset: usize) -> Self {
        let offset = offset.min(input.len());
        let head = &input[..offset];
        let line = memchr::memchr_iter(b'\n', head).count() + 1;
        let line_start = memchr::memrchr(b'\n', head).map_or(0, |nl| nl + 1);
        Position {
            line,
            column: offset - line_start + 1,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Why one component of a color triplet could not be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFault {
    Missing,
    InvalidNumber,
}

impl fmt::Display for ColorFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorFault::Missing => f.write_str("missing"),
            ColorFault::InvalidNumber => f.write_str("not a valid number"),
        }
    }
}

#[derive(Debug, Error)]
pub enum DomError {
    /// Malformed XML reported by the tokenizer
    #[error("{}{message}", .position.as_ref().map(|p| format!("{p}: ")).unwrap_or_default())]
    Parse {
        message: String,
        position: Option<Position>,
    },

    #[error("Character data outside of the root element")]
    TextOutsideElement,

    #[error("End of element received with no element open")]
    UnbalancedEnd,

    #[error("Document ended with <{0}> still open")]
    UnclosedElement(String),

    #[error("Declared length {len} exceeds the {available} bytes supplied")]
    LengthOutOfBounds { len: usize, available: usize },

    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Not a valid number: {text:?}")]
    InvalidNumber { text: String },

    #[error("Incomplete {color} color: {field} is {fault}")]
    IncompleteColor {
        color: &'static str,
        field: &'static str,
        fault: ColorFault,
    },
}

impl DomError {
    /// Build a parse error, locating `offset` within `input`
    pub(crate) fn parse_at(message: impl fmt::Display, input: &[u8], offset: usize) -> Self {
        DomError::Parse {
            message: message.to_string(),
            position: Some(Position::from_offset(input, offset)),
        }
    }

    /// True for errors raised while building a document
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            DomError::Parse { .. }
                | DomError::TextOutsideElement
                | DomError::UnbalancedEnd
                | DomError::UnclosedElement(_)
                | DomError::LengthOutOfBounds { .. }
        )
    }
}
