//! Per-word literal report
//!
//! Walks a tree and classifies every word in its own parent. This is what a style checker does
//! before deciding which words to leave alone.

use super::classifier::is_literal;
use super::error::LiteralError;
use super::position::Position;
use crate::nlcst::ast::{visit_children, Node, Visitor};
use serde::Serialize;

/// Classification of one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordReport {
    /// Index of the word within its parent.
    pub index: usize,
    pub word: String,
    pub literal: bool,
}

struct WordClassifier {
    reports: Vec<WordReport>,
    error: Option<LiteralError>,
}

impl Visitor for WordClassifier {
    fn visit_word(&mut self, word: &Node, index: usize, parent: &Node) {
        if self.error.is_some() {
            return;
        }
        match is_literal(parent, Position::Index(index)) {
            Ok(literal) => self.reports.push(WordReport {
                index,
                word: word.to_string(),
                literal,
            }),
            Err(err) => self.error = Some(err),
        }
    }
}

/// Classify every word in `tree`, in document order.
pub fn classify_words(tree: &Node) -> Result<Vec<WordReport>, LiteralError> {
    let mut classifier = WordClassifier {
        reports: Vec::new(),
        error: None,
    };
    visit_children(&mut classifier, tree);

    match classifier.error {
        Some(err) => Err(err),
        None => Ok(classifier.reports),
    }
}

/// One `index<TAB>word<TAB>literal` line per word; non-literal words show `-`.
pub fn render_plain(reports: &[WordReport]) -> String {
    reports
        .iter()
        .map(|report| {
            let flag = if report.literal { "literal" } else { "-" };
            format!("{}\t{}\t{}\n", report.index, report.word, flag)
        })
        .collect()
}
