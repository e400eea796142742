//! Literal classification of whole sentences
//!
//! Each fixture is tokenized into a sentence and every word in it is classified. The fixtures
//! cover every single delimiter and every pair family.

use nlcst_literal::nlcst::ast::Node;
use nlcst_literal::nlcst::lexing::parse_sentence;
use nlcst_literal::{is_literal, Position};
use rstest::rstest;

/// `(index, text)` of every literal word in the sentence.
fn literal_words(sentence: &Node) -> Vec<(usize, String)> {
    sentence
        .children()
        .unwrap()
        .iter()
        .enumerate()
        .filter(|(_, child)| child.is_word())
        .filter(|(index, _)| is_literal(sentence, Position::Index(*index)).unwrap())
        .map(|(index, child)| (index, child.to_string()))
        .collect()
}

#[test]
fn words_without_delimiters_are_not_literal() {
    let sentence = parse_sentence("Well? Ha! Funky");
    assert_eq!(sentence.children().unwrap().len(), 7);
    assert!(literal_words(&sentence).is_empty());
}

#[rstest]
#[case("Foo - is meant as a literal.")]
#[case("Foo – is meant as a literal.")]
#[case("Foo — is meant as a literal.")]
#[case("Foo– is meant as a literal.")]
#[case("Foo— is meant as a literal.")]
#[case("Foo–is meant as a literal.")]
#[case("Foo—is meant as a literal.")]
#[case("Foo: is meant as a literal.")]
#[case("Foo; is meant as a literal.")]
fn initial_word_before_single_delimiter(#[case] fixture: &str) {
    let sentence = parse_sentence(fixture);
    assert_eq!(literal_words(&sentence), vec![(0, "Foo".to_string())]);
}

#[rstest]
#[case("Meant as a literal is - foo.")]
#[case("Meant as a literal is – foo.")]
#[case("Meant as a literal is — foo.")]
#[case("Meant as a literal is –foo.")]
#[case("Meant as a literal is —foo.")]
#[case("Meant as a literal is–foo.")]
#[case("Meant as a literal is—foo.")]
#[case("Meant as a literal is: foo.")]
#[case("Meant as a literal is; foo.")]
fn final_word_after_single_delimiter(#[case] fixture: &str) {
    let sentence = parse_sentence(fixture);
    let second_to_last = sentence.children().unwrap().len() - 2;
    assert_eq!(
        literal_words(&sentence),
        vec![(second_to_last, "foo".to_string())]
    );
}

#[rstest]
#[case("The word, foo, is meant as a literal.", 5)]
#[case("The word -foo- is meant as a literal.", 5)]
#[case("The word –foo– is meant as a literal.", 5)]
#[case("The word —foo— is meant as a literal.", 5)]
#[case("The word - foo - is meant as a literal.", 6)]
#[case("The word – foo – is meant as a literal.", 6)]
#[case("The word — foo — is meant as a literal.", 6)]
#[case("The word \"foo\" is meant as a literal.", 5)]
#[case("The word 'foo' is meant as a literal.", 5)]
#[case("The word ‘foo’ is meant as a literal.", 5)]
#[case("The word ‚foo’ is meant as a literal.", 5)]
#[case("The word ’foo’ is meant as a literal.,", 5)]
#[case("The word ’foo‚ is meant as a literal.", 5)]
#[case("The word “foo” is meant as a literal.", 5)]
#[case("The word ”foo” is meant as a literal.", 5)]
#[case("The word „foo” is meant as a literal.", 5)]
#[case("The word „foo“ is meant as a literal.", 5)]
#[case("The word «foo» is meant as a literal.", 5)]
#[case("The word »foo« is meant as a literal.", 5)]
#[case("The word ‹foo› is meant as a literal.", 5)]
#[case("The word ›foo‹ is meant as a literal.", 5)]
#[case("The word (foo) is meant as a literal.", 5)]
#[case("The word [foo] is meant as a literal.", 5)]
#[case("The word {foo} is meant as a literal.", 5)]
#[case("The word ⟨foo⟩ is meant as a literal.", 5)]
#[case("The word 「foo」 is meant as a literal.", 5)]
fn wrapped_word(#[case] fixture: &str, #[case] index: usize) {
    let sentence = parse_sentence(fixture);
    let words = literal_words(&sentence);

    assert_eq!(words, vec![(index, "foo".to_string())]);
}

#[rstest]
#[case("The word «foo« is meant as a literal.")]
#[case("The word “foo“ is meant as a literal.")]
#[case("The word )foo( is meant as a literal.")]
#[case("The word 」foo「 is meant as a literal.")]
#[case("The word (foo] is meant as a literal.")]
fn mismatched_pairs_are_not_literal(#[case] fixture: &str) {
    let sentence = parse_sentence(fixture);
    assert!(literal_words(&sentence).is_empty());
}

#[test]
fn wrapped_source_is_not_a_literal_word() {
    // The source node sits between the opener and the word.
    let sentence = parse_sentence("Run \"`ls` foo\" now.");
    assert!(literal_words(&sentence).is_empty());
}

#[test]
fn interior_word_after_leading_words_is_not_literal() {
    let sentence = parse_sentence("Some words and then - foo bar");
    assert!(literal_words(&sentence).is_empty());
}

#[test]
fn classification_is_idempotent() {
    let sentence = parse_sentence("The word “foo” is meant as a literal.");
    let first = literal_words(&sentence);
    let second = literal_words(&sentence);
    assert_eq!(first, second);
}

#[test]
fn child_reference_and_index_agree() {
    let sentence = parse_sentence("Foo: is meant as a literal.");
    for (index, child) in sentence.children().unwrap().iter().enumerate() {
        assert_eq!(
            is_literal(&sentence, child).unwrap(),
            is_literal(&sentence, Position::Index(index)).unwrap()
        );
    }
}
