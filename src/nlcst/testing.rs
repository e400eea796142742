//! Testing utilities
//!
//!     Trees in tests should be spelled out node by node with the [factories]. Going through the
//!     tokenizer is fine for whole sentences, but a hand-built tree documents exactly which
//!     siblings the classifier sees, which is what most literal tests are about.

pub mod factories;
