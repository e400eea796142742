//! Lexer
//!
//!     A deliberately small tokenizer that turns one line of prose into a sentence node, so that
//!     fixtures and the command line can be written as plain text. It is not a natural-language
//!     parser: it does not split sentences, merge hyphenated words or recognise abbreviations.
//!
//!     The tokenization is done through the logos lexer library:
//!
//!         - runs of letters, digits and combining marks become a WordNode with one TextNode
//!         - runs of whitespace become a WhiteSpaceNode
//!         - a backtick-delimited span becomes a SourceNode
//!         - each Unicode punctuation character becomes a PunctuationNode
//!         - any other character becomes a SymbolNode
//!
//!     An unclosed backtick makes logos fail over everything it consumed; only the backtick
//!     becomes a SymbolNode and the rest of the line is lexed again.
//!
//!     Dashes are punctuation, so `-foo-` yields `-`, `foo`, `-`.

pub mod tokens;

use crate::nlcst::ast::Node;
use logos::Logos;
pub use tokens::Token;

/// Tokenize `source` into `(Token, span)` pairs.
///
/// When the lexer fails (an unclosed backtick span, for one), only the first character of the
/// failed slice becomes a [Token::Symbol] and lexing resumes right after it, so no text is lost.
pub fn tokenize(source: &str) -> Vec<(Token, logos::Span)> {
    let mut tokens = Vec::new();
    let mut offset = 0;

    while offset < source.len() {
        match lex_until_error(source, offset, &mut tokens) {
            Some(resume) => offset = resume,
            None => break,
        }
    }

    tokens
}

/// Lex `source[offset..]`, appending shifted spans to `tokens`.
///
/// Returns the offset to resume from after a lexer error, or `None` once the input is consumed.
fn lex_until_error(
    source: &str,
    offset: usize,
    tokens: &mut Vec<(Token, logos::Span)>,
) -> Option<usize> {
    let mut lexer = Token::lexer(&source[offset..]);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let start = offset + span.start;
        match result {
            Ok(token) => tokens.push((token, start..offset + span.end)),
            Err(()) => {
                let width = lexer.slice().chars().next()?.len_utf8();
                tokens.push((Token::Symbol, start..start + width));
                return Some(start + width);
            }
        }
    }

    None
}

/// Parse one line of prose into a SentenceNode.
pub fn parse_sentence(source: &str) -> Node {
    let children = tokenize(source)
        .into_iter()
        .map(|(token, span)| {
            let slice = &source[span];
            match token {
                Token::Word => Node::word(vec![Node::text_node(slice)]),
                Token::WhiteSpace => Node::white_space(slice),
                Token::Source => Node::source(slice),
                Token::Punctuation => Node::punctuation(slice),
                Token::Symbol => Node::symbol(slice),
            }
        })
        .collect();

    Node::sentence(children)
}

/// Parse prose into a RootNode holding one ParagraphNode > SentenceNode per non-blank line.
pub fn parse_root(source: &str) -> Node {
    let paragraphs = source
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| Node::paragraph(vec![parse_sentence(line)]))
        .collect();

    Node::root(paragraphs)
}
