//! Token definitions for the prose lexer
//!
//! The classes are disjoint, so no priorities are needed: a single backtick is a symbol, and
//! only a closed backtick span is source.
use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    #[regex(r"[\p{L}\p{N}\p{M}]+")]
    Word,

    #[regex(r"\s+")]
    WhiteSpace,

    // Inline code
    #[regex(r"`[^`]+`")]
    Source,

    #[regex(r"\p{P}")]
    Punctuation,

    // Catch-all for single characters not covered above
    #[regex(r"[^\s\p{L}\p{N}\p{M}\p{P}]")]
    Symbol,
}
