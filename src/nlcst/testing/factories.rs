//! Short constructors for hand-built trees

use crate::nlcst::ast::Node;

/// A word holding a single text node.
pub fn word(text: &str) -> Node {
    Node::word(vec![Node::text_node(text)])
}

pub fn ws(text: &str) -> Node {
    Node::white_space(text)
}

pub fn punct(text: &str) -> Node {
    Node::punctuation(text)
}

pub fn symbol(text: &str) -> Node {
    Node::symbol(text)
}

pub fn source(text: &str) -> Node {
    Node::source(text)
}

pub fn sentence(children: Vec<Node>) -> Node {
    Node::sentence(children)
}

/// Root > Paragraph > Sentence, the shape nlcst parsers produce for a single sentence.
pub fn document(children: Vec<Node>) -> Node {
    Node::root(vec![Node::paragraph(vec![Node::sentence(children)])])
}
