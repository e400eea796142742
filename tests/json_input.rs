//! Literal detection over nlcst JSON, as produced by other nlcst tooling

use nlcst_literal::nlcst::ast::Node;
use nlcst_literal::nlcst::literal::{classify_words, is_literal_value};
use nlcst_literal::LiteralError;
use serde_json::{json, Value};

/// `The word “foo” is odd.` as an nlcst parser emits it, positions included.
fn quoted_foo() -> Value {
    fn at(offset: usize, end: usize) -> Value {
        json!({
            "start": {"line": 1, "column": offset + 1, "offset": offset},
            "end": {"line": 1, "column": end + 1, "offset": end}
        })
    }
    fn word(text: &str, offset: usize) -> Value {
        let end = offset + text.chars().count();
        json!({
            "type": "WordNode",
            "children": [{"type": "TextNode", "value": text, "position": at(offset, end)}],
            "position": at(offset, end)
        })
    }
    fn leaf(kind: &str, text: &str, offset: usize) -> Value {
        json!({"type": kind, "value": text, "position": at(offset, offset + 1)})
    }

    json!({
        "type": "RootNode",
        "children": [{
            "type": "ParagraphNode",
            "children": [{
                "type": "SentenceNode",
                "children": [
                    word("The", 0),
                    leaf("WhiteSpaceNode", " ", 3),
                    word("word", 4),
                    leaf("WhiteSpaceNode", " ", 8),
                    leaf("PunctuationNode", "“", 9),
                    word("foo", 10),
                    leaf("PunctuationNode", "”", 13),
                    leaf("WhiteSpaceNode", " ", 14),
                    word("is", 15),
                    leaf("WhiteSpaceNode", " ", 17),
                    word("odd", 18),
                    leaf("PunctuationNode", ".", 21)
                ]
            }]
        }]
    })
}

fn sentence_of(root: &Value) -> &Value {
    &root["children"][0]["children"][0]
}

#[test]
fn classifies_child_objects() {
    let root = quoted_foo();
    let sentence = sentence_of(&root);
    let children = sentence["children"].as_array().unwrap();

    let literal: Vec<bool> = children
        .iter()
        .map(|child| is_literal_value(Some(sentence), child).unwrap())
        .collect();

    assert!(literal[5]);
    assert_eq!(literal.iter().filter(|&&flag| flag).count(), 1);
}

#[test]
fn classifies_indices() {
    let root = quoted_foo();
    let sentence = sentence_of(&root);

    assert_eq!(is_literal_value(Some(sentence), &json!(5)), Ok(true));
    assert_eq!(is_literal_value(Some(sentence), &json!(2)), Ok(false));
}

#[test]
fn typed_tree_agrees_with_json() {
    let root = quoted_foo();
    let tree: Node = serde_json::from_value(root).unwrap();
    let reports = classify_words(&tree).unwrap();

    let literal: Vec<&str> = reports
        .iter()
        .filter(|report| report.literal)
        .map(|report| report.word.as_str())
        .collect();
    assert_eq!(literal, vec!["foo"]);
    assert_eq!(reports.len(), 5);
}

#[test]
fn rejects_missing_parent() {
    assert_eq!(
        is_literal_value(None, &Value::Null),
        Err(LiteralError::MissingOrInvalidParent)
    );
    assert_eq!(
        is_literal_value(Some(&json!({})), &json!(0)),
        Err(LiteralError::MissingOrInvalidParent)
    );
}

#[test]
fn rejects_non_numeric_index() {
    assert_eq!(
        is_literal_value(Some(&json!({"children": []})), &Value::Null),
        Err(LiteralError::InvalidIndex)
    );
}

#[test]
fn rejects_node_outside_parent() {
    assert_eq!(
        is_literal_value(Some(&json!({"children": []})), &json!({"type": "a"})),
        Err(LiteralError::UnresolvableNodeReference)
    );
}

#[test]
fn accepts_node_inside_parent() {
    let node = json!({"type": "a"});
    let parent = json!({"children": [node.clone()]});
    assert!(is_literal_value(Some(&parent), &node).is_ok());
}
