//! Node types for the natural-language syntax tree

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A node in the tree.
///
/// Nodes (de)serialize as nlcst JSON objects tagged by `type`. Any tag that is not part of the
/// schema (plugin nodes such as `EmoticonNode`) deserializes to [Node::Unknown], which keeps its
/// tag together with whatever `value` and `children` it carried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawNode", into = "RawNode")]
pub enum Node {
    Root(Parent),
    Paragraph(Parent),
    Sentence(Parent),
    Word(Parent),
    Text(Leaf),
    Punctuation(Leaf),
    Symbol(Leaf),
    WhiteSpace(Leaf),
    Source(Leaf),
    Unknown {
        type_name: String,
        value: Option<String>,
        children: Option<Vec<Node>>,
    },
}

/// Payload of nodes that own children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parent {
    pub children: Vec<Node>,
}

/// Payload of nodes that hold text directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Leaf {
    pub value: String,
}

/// Wire shape shared by every nlcst node. Other fields (`position`, `data`) are ignored.
#[derive(Serialize, Deserialize)]
struct RawNode {
    #[serde(rename = "type")]
    type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<Node>>,
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        let parent = |children: Option<Vec<Node>>| Parent {
            children: children.unwrap_or_default(),
        };
        let leaf = |value: Option<String>| Leaf {
            value: value.unwrap_or_default(),
        };

        match raw.type_name.as_str() {
            "RootNode" => Node::Root(parent(raw.children)),
            "ParagraphNode" => Node::Paragraph(parent(raw.children)),
            "SentenceNode" => Node::Sentence(parent(raw.children)),
            "WordNode" => Node::Word(parent(raw.children)),
            "TextNode" => Node::Text(leaf(raw.value)),
            "PunctuationNode" => Node::Punctuation(leaf(raw.value)),
            "SymbolNode" => Node::Symbol(leaf(raw.value)),
            "WhiteSpaceNode" => Node::WhiteSpace(leaf(raw.value)),
            "SourceNode" => Node::Source(leaf(raw.value)),
            _ => Node::Unknown {
                type_name: raw.type_name,
                value: raw.value,
                children: raw.children,
            },
        }
    }
}

impl From<Node> for RawNode {
    fn from(node: Node) -> Self {
        let type_name = node.type_name().to_string();
        match node {
            Node::Root(parent)
            | Node::Paragraph(parent)
            | Node::Sentence(parent)
            | Node::Word(parent) => RawNode {
                type_name,
                value: None,
                children: Some(parent.children),
            },
            Node::Text(leaf)
            | Node::Punctuation(leaf)
            | Node::Symbol(leaf)
            | Node::WhiteSpace(leaf)
            | Node::Source(leaf) => RawNode {
                type_name,
                value: Some(leaf.value),
                children: None,
            },
            Node::Unknown {
                value, children, ..
            } => RawNode {
                type_name,
                value,
                children,
            },
        }
    }
}

/// Coarse node classification used when scanning siblings.
///
/// Everything that is neither a word, whitespace, nor embedded source is `Other`:
/// punctuation, symbols, bare text, nested containers and unknown nodes alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Word,
    WhiteSpace,
    Source,
    Other,
}

impl Node {
    pub fn root(children: Vec<Node>) -> Self {
        Node::Root(Parent { children })
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph(Parent { children })
    }

    pub fn sentence(children: Vec<Node>) -> Self {
        Node::Sentence(Parent { children })
    }

    pub fn word(children: Vec<Node>) -> Self {
        Node::Word(Parent { children })
    }

    pub fn text_node(value: impl Into<String>) -> Self {
        Node::Text(Leaf {
            value: value.into(),
        })
    }

    pub fn punctuation(value: impl Into<String>) -> Self {
        Node::Punctuation(Leaf {
            value: value.into(),
        })
    }

    pub fn symbol(value: impl Into<String>) -> Self {
        Node::Symbol(Leaf {
            value: value.into(),
        })
    }

    pub fn white_space(value: impl Into<String>) -> Self {
        Node::WhiteSpace(Leaf {
            value: value.into(),
        })
    }

    pub fn source(value: impl Into<String>) -> Self {
        Node::Source(Leaf {
            value: value.into(),
        })
    }

    /// The nlcst `type` name of this node.
    pub fn type_name(&self) -> &str {
        match self {
            Node::Root(_) => "RootNode",
            Node::Paragraph(_) => "ParagraphNode",
            Node::Sentence(_) => "SentenceNode",
            Node::Word(_) => "WordNode",
            Node::Text(_) => "TextNode",
            Node::Punctuation(_) => "PunctuationNode",
            Node::Symbol(_) => "SymbolNode",
            Node::WhiteSpace(_) => "WhiteSpaceNode",
            Node::Source(_) => "SourceNode",
            Node::Unknown { type_name, .. } => type_name,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Word(_) => NodeKind::Word,
            Node::WhiteSpace(_) => NodeKind::WhiteSpace,
            Node::Source(_) => NodeKind::Source,
            Node::Root(_)
            | Node::Paragraph(_)
            | Node::Sentence(_)
            | Node::Text(_)
            | Node::Punctuation(_)
            | Node::Symbol(_)
            | Node::Unknown { .. } => NodeKind::Other,
        }
    }

    /// Children of this node, or `None` for leaves.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Root(parent)
            | Node::Paragraph(parent)
            | Node::Sentence(parent)
            | Node::Word(parent) => Some(&parent.children),
            Node::Unknown { children, .. } => children.as_deref(),
            Node::Text(_)
            | Node::Punctuation(_)
            | Node::Symbol(_)
            | Node::WhiteSpace(_)
            | Node::Source(_) => None,
        }
    }

    pub fn is_parent(&self) -> bool {
        self.children().is_some()
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Node::Word(_))
    }

    /// The exact text this node spans.
    ///
    /// Leaves borrow their value; parents concatenate the text of their children depth-first.
    /// An unknown node uses its `value` when it has one and its children otherwise.
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Node::Text(leaf)
            | Node::Punctuation(leaf)
            | Node::Symbol(leaf)
            | Node::WhiteSpace(leaf)
            | Node::Source(leaf) => Cow::Borrowed(leaf.value.as_str()),
            Node::Unknown {
                value: Some(value), ..
            } => Cow::Borrowed(value.as_str()),
            Node::Unknown {
                value: None,
                children,
                ..
            } => concat(children.as_deref().unwrap_or_default()),
            Node::Root(parent)
            | Node::Paragraph(parent)
            | Node::Sentence(parent)
            | Node::Word(parent) => concat(&parent.children),
        }
    }
}

fn concat(children: &[Node]) -> Cow<'_, str> {
    match children {
        [] => Cow::Borrowed(""),
        [only] => only.text(),
        children => Cow::Owned(children.iter().map(Node::text).collect()),
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
