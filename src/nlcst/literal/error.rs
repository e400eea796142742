//! Errors raised by the literal classifier

use std::fmt;

/// Caller errors, raised before any scanning takes place.
///
/// Not finding a literal is never an error: it is `Ok(false)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralError {
    /// The parent is missing or does not own a children sequence.
    MissingOrInvalidParent,
    /// A node reference was given that is not one of the parent's children.
    UnresolvableNodeReference,
    /// The position is neither a node reference nor an integer.
    InvalidIndex,
}

impl fmt::Display for LiteralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralError::MissingOrInvalidParent => write!(f, "parent must be a node"),
            LiteralError::UnresolvableNodeReference => {
                write!(f, "node must be a child of parent")
            }
            LiteralError::InvalidIndex => write!(f, "index must be a number"),
        }
    }
}

impl std::error::Error for LiteralError {}
