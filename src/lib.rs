//! # nlcst-literal
//!
//! Check whether a node in a natural-language concrete syntax tree (nlcst) is used as a
//! literal, that is, set apart from the surrounding prose by punctuation.
//!
//! `Foo` is literal in each of these:
//!
//!     Foo - is meant as a literal.
//!     Meant as a literal is - foo.
//!     The word “foo” is meant as a literal.
//!
//! File Layout
//!
//! src/nlcst
//!   ├── ast        Node model, text rendering and traversal
//!   ├── lexing     Small tokenizer turning a line of prose into a sentence node
//!   ├── literal    The classifier, its delimiter tables, JSON entry point and reports
//!   └── testing    Node factories for tests
//!
//! The classifier only needs a parent's ordered children and a way to render a node to text.
//! Everything else exists so that the classifier can be driven from real input.

pub mod nlcst;

pub use nlcst::literal::{is_literal, LiteralError, Position};
