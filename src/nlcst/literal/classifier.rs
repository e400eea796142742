//! The literal classifier
//!
//! See the [module documentation](super) for the three rules. All scans are bounded by the
//! parent's children; nothing here allocates unless a delimiter candidate is itself a parent
//! and has to be rendered.

use super::delimiters::{self, DelimiterSet};
use super::error::LiteralError;
use super::position::Position;
use crate::nlcst::ast::{Node, NodeKind};
use tracing::{debug, trace};

/// Check whether the child of `parent` at `position` is used as a literal.
///
/// `position` is either an index or a reference to one of `parent`'s children. Fails when
/// `parent` owns no children or the referenced node is not among them. Indices past the end
/// are never literal.
pub fn is_literal<'a>(
    parent: &'a Node,
    position: impl Into<Position<'a>>,
) -> Result<bool, LiteralError> {
    let siblings = parent
        .children()
        .ok_or(LiteralError::MissingOrInvalidParent)?;
    let index = position.into().resolve(siblings)?;

    Ok(classify(siblings, index))
}

/// Apply the rules to an already resolved index.
pub(crate) fn classify(siblings: &[Node], index: usize) -> bool {
    if index >= siblings.len() {
        debug!(index, len = siblings.len(), "index out of range, not a literal");
        return false;
    }

    if !contains_word(&siblings[..index])
        && sibling_delimiter(siblings, index, Direction::Forward, delimiters::single()).is_some()
    {
        trace!(index, rule = "leading", "literal");
        return true;
    }

    if !contains_word(&siblings[index + 1..])
        && sibling_delimiter(siblings, index, Direction::Backward, delimiters::single()).is_some()
    {
        trace!(index, rule = "trailing", "literal");
        return true;
    }

    if is_wrapped(siblings, index) {
        trace!(index, rule = "wrapped", "literal");
        return true;
    }

    false
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Backward,
    Forward,
}

impl Direction {
    fn step(self, index: usize) -> Option<usize> {
        match self {
            Direction::Backward => index.checked_sub(1),
            Direction::Forward => index.checked_add(1),
        }
    }
}

/// An opener before `position` and one of its closers after it.
fn is_wrapped(siblings: &[Node], position: usize) -> bool {
    let Some(previous) =
        sibling_delimiter(siblings, position, Direction::Backward, delimiters::openers())
    else {
        return false;
    };

    match delimiters::closers(&previous.text()) {
        Some(closers) => {
            sibling_delimiter(siblings, position, Direction::Forward, closers).is_some()
        }
        None => false,
    }
}

/// Nearest non-whitespace sibling in `direction`, if it is one of `delimiters`.
///
/// Words and source nodes end the search without a result.
fn sibling_delimiter<'a>(
    siblings: &'a [Node],
    position: usize,
    direction: Direction,
    delimiters: &dyn DelimiterSet,
) -> Option<&'a Node> {
    let mut index = direction.step(position)?;

    while let Some(sibling) = siblings.get(index) {
        match sibling.kind() {
            NodeKind::Word | NodeKind::Source => return None,
            NodeKind::WhiteSpace => {}
            NodeKind::Other => {
                return delimiters
                    .contains_delimiter(&sibling.text())
                    .then_some(sibling);
            }
        }

        index = direction.step(index)?;
    }

    None
}

fn contains_word(siblings: &[Node]) -> bool {
    siblings.iter().any(Node::is_word)
}
