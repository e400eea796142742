//! Addressing a child within its parent

use super::error::LiteralError;
use crate::nlcst::ast::Node;

/// Either the index of a child or a reference to the child itself.
#[derive(Debug, Clone, Copy)]
pub enum Position<'a> {
    Index(usize),
    Child(&'a Node),
}

impl Position<'_> {
    /// Resolve to an index into `siblings`.
    ///
    /// Child references are looked up by identity, not equality: two equal whitespace nodes in
    /// the same sentence are still different children.
    pub fn resolve(&self, siblings: &[Node]) -> Result<usize, LiteralError> {
        match *self {
            Position::Index(index) => Ok(index),
            Position::Child(node) => siblings
                .iter()
                .position(|sibling| std::ptr::eq(sibling, node))
                .ok_or(LiteralError::UnresolvableNodeReference),
        }
    }
}

impl From<usize> for Position<'_> {
    fn from(index: usize) -> Self {
        Position::Index(index)
    }
}

impl<'a> From<&'a Node> for Position<'a> {
    fn from(node: &'a Node) -> Self {
        Position::Child(node)
    }
}
