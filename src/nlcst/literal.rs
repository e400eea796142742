//! Literal detection
//!
//!     A word is used as a literal when punctuation sets it apart from the running prose instead
//!     of it taking part in the sentence. Grammar and style checks use this to leave mentioned
//!     words alone: `foo` in `The word “foo” is odd.` should not be flagged as a typo.
//!
//! Rules
//!
//!     A child of a parent is literal when any of these holds:
//!
//!         1. Leading delimiter: no word precedes it in the parent, and the next non-whitespace
//!            sibling is a single delimiter (`Foo - is meant as a literal.`).
//!         2. Trailing delimiter: no word follows it in the parent, and the previous
//!            non-whitespace sibling is a single delimiter (`Meant as a literal is - foo.`).
//!         3. Pair wrap: the previous non-whitespace sibling opens a pair and the next one
//!            closes it (`The word “foo” is meant as a literal.`).
//!
//!     Whitespace is transparent to the sibling scans. Words and source nodes stop them: a
//!     delimiter never reaches past another word or an embedded piece of code.
//!
//!     The delimiter tables live in [delimiters]; the rules in [classifier].

pub mod classifier;
pub mod delimiters;
pub mod error;
pub mod json;
pub mod position;
pub mod report;

pub use classifier::is_literal;
pub use error::LiteralError;
pub use json::is_literal_value;
pub use position::Position;
pub use report::{classify_words, render_plain, WordReport};
