//! Tree traversal
//!
//! Implement [Visitor] to walk a tree. Every child is reported together with its index and its
//! parent, which is exactly the pair the literal classifier needs.
//!
//! ```ignore
//! struct WordCounter(usize);
//!
//! impl Visitor for WordCounter {
//!     fn visit_word(&mut self, _word: &Node, _index: usize, _parent: &Node) {
//!         self.0 += 1;
//!     }
//! }
//! ```

use super::node::Node;

/// Visitor trait for traversing the tree
///
/// Default implementations are empty, so you only need to override the methods you care about.
/// `visit_child` is called for every child; it forwards words to `visit_word`.
pub trait Visitor {
    fn visit_child(&mut self, child: &Node, index: usize, parent: &Node) {
        if child.is_word() {
            self.visit_word(child, index, parent);
        }
    }

    fn visit_word(&mut self, _word: &Node, _index: usize, _parent: &Node) {}
}

/// Depth-first, pre-order walk over every descendant of `node`.
pub fn visit_children(visitor: &mut dyn Visitor, node: &Node) {
    if let Some(children) = node.children() {
        for (index, child) in children.iter().enumerate() {
            visitor.visit_child(child, index, node);
            visit_children(visitor, child);
        }
    }
}
