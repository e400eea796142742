//! Natural-language concrete syntax tree
//!
//!     The node model follows the nlcst JSON schema: every node carries a `type` tag, parents
//!     carry `children`, leaves carry a `value`. Trees produced by other nlcst tooling can be
//!     deserialized directly with serde_json.
//!
//!     The literal classifier only relies on two things from this module: a parent's ordered
//!     children ([Node::children]) and the rendered text of a node ([Node::text]).

pub mod node;
pub mod visit;

pub use node::{Leaf, Node, NodeKind, Parent};
pub use visit::{visit_children, Visitor};
