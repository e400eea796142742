//! Delimiter tables
//!
//! Single delimiters mark an adjacent literal on their own. Pair delimiters need a matching
//! closer; several openers accept more than one closer since quotation styles differ between
//! languages (see <https://en.wikipedia.org/wiki/Quotation_mark>).

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Hyphen-minus, en dash, em dash, colon and semicolon.
pub const SINGLE: &[&str] = &["-", "–", "—", ":", ";"];

/// Opening delimiter and the closers it accepts.
pub const PAIRS: &[(&str, &[&str])] = &[
    (",", &[","]),
    ("-", &["-"]),
    ("–", &["–"]),
    ("—", &["—"]),
    ("\"", &["\""]),
    ("'", &["'"]),
    ("‘", &["’"]),
    ("‚", &["’"]),
    ("’", &["’", "‚"]),
    ("“", &["”"]),
    ("”", &["”"]),
    ("„", &["”", "“"]),
    ("«", &["»"]),
    ("»", &["«"]),
    ("‹", &["›"]),
    ("›", &["‹"]),
    ("(", &[")"]),
    ("[", &["]"]),
    ("{", &["}"]),
    ("⟨", &["⟩"]),
    ("「", &["」"]),
];

static SINGLE_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| SINGLE.iter().copied().collect());

static PAIR_MAP: Lazy<HashMap<&'static str, HashSet<&'static str>>> = Lazy::new(|| {
    PAIRS
        .iter()
        .map(|(open, close)| (*open, close.iter().copied().collect()))
        .collect()
});

/// Membership test over a fixed set of delimiter strings.
pub trait DelimiterSet {
    fn contains_delimiter(&self, text: &str) -> bool;
}

impl DelimiterSet for HashSet<&'static str> {
    fn contains_delimiter(&self, text: &str) -> bool {
        self.contains(text)
    }
}

/// Any key of the pair map.
pub struct Openers;

impl DelimiterSet for Openers {
    fn contains_delimiter(&self, text: &str) -> bool {
        PAIR_MAP.contains_key(text)
    }
}

pub fn single() -> &'static HashSet<&'static str> {
    &SINGLE_SET
}

pub fn openers() -> &'static Openers {
    &Openers
}

/// Closers accepted for `open`, if it opens a pair at all.
pub fn closers(open: &str) -> Option<&'static HashSet<&'static str>> {
    PAIR_MAP.get(open)
}
