//! Delta flattening and replacement-edit construction.

use mcp_slab_server::delta::{build_replacement, content_length, flatten, Delta, EditOp};
use serde_json::{json, Value};

fn inserted_text(delta: &Delta) -> &str {
    delta
        .ops
        .iter()
        .find_map(|op| match op {
            EditOp::Insert { insert } => Some(insert.as_str()),
            EditOp::Delete { .. } => None,
        })
        .expect("edit must contain an insert")
}

// ---------------------------------------------------------------------------
// flatten
// ---------------------------------------------------------------------------

#[test]
fn flatten_absent_or_malformed_is_empty() {
    let malformed = [
        Value::Null,
        json!("plain string"),
        json!(42),
        json!(true),
        json!({ "insert": "not a list" }),
        json!({ "ops": "not a list" }),
    ];

    assert_eq!(flatten(None), "");
    for input in &malformed {
        assert_eq!(flatten(Some(input)), "", "input: {input}");
    }
}

#[test]
fn flatten_concatenates_text_inserts_in_order() {
    let delta = json!([
        { "insert": "Hello" },
        { "insert": ", " },
        { "insert": "world\n" }
    ]);
    assert_eq!(flatten(Some(&delta)), "Hello, world\n");
}

#[test]
fn flatten_drops_attributes_and_embeds() {
    let delta = json!([
        { "insert": "Title", "attributes": { "bold": true } },
        { "insert": "\n", "attributes": { "header": 1 } },
        { "insert": { "image": "https://example.com/a.png" } },
        { "insert": "body\n" }
    ]);
    assert_eq!(flatten(Some(&delta)), "Title\nbody\n");
}

#[test]
fn flatten_accepts_ops_wrapper() {
    let delta = json!({ "ops": [{ "insert": "a" }, { "insert": "b" }] });
    assert_eq!(flatten(Some(&delta)), "ab");
}

#[test]
fn flatten_skips_entries_without_insert() {
    let delta = json!([{ "retain": 3 }, "junk", { "insert": "x" }, { "delete": 1 }]);
    assert_eq!(flatten(Some(&delta)), "x");
}

// ---------------------------------------------------------------------------
// content_length
// ---------------------------------------------------------------------------

#[test]
fn length_counts_text_and_embeds() {
    let delta = json!([
        { "insert": "abc" },
        { "insert": { "image": "x.png" } },
        { "insert": "de\n" }
    ]);
    assert_eq!(content_length(Some(&delta)), 3 + 1 + 3);
}

#[test]
fn length_counts_utf16_units() {
    // "é" is one UTF-16 unit; the emoji is a surrogate pair.
    let delta = json!([{ "insert": "é😀" }]);
    assert_eq!(content_length(Some(&delta)), 3);
}

#[test]
fn length_of_absent_or_malformed_is_zero() {
    assert_eq!(content_length(None), 0);
    assert_eq!(content_length(Some(&json!(42))), 0);
    assert_eq!(content_length(Some(&json!([]))), 0);
}

#[test]
fn length_of_plain_string_content_is_its_text_length() {
    assert_eq!(content_length(Some(&json!("old body"))), 8);
    assert_eq!(content_length(Some(&json!(""))), 0);
}

// ---------------------------------------------------------------------------
// build_replacement
// ---------------------------------------------------------------------------

#[test]
fn replacement_of_old_content() {
    let current = json!([{ "insert": "old" }]);
    let edit = build_replacement(Some(&current), "new");

    assert_eq!(
        serde_json::to_value(&edit).unwrap(),
        json!({ "ops": [{ "delete": 3 }, { "insert": "new\n\n" }] })
    );
}

#[test]
fn replacement_always_ends_with_two_newlines() {
    let current = json!([{ "insert": "x" }]);
    for text in ["body", "body\n", "body\n\n", "body\n\n\n"] {
        let edit = build_replacement(Some(&current), text);
        assert_eq!(inserted_text(&edit), "body\n\n", "input: {text:?}");
    }
}

#[test]
fn replacement_of_empty_document_has_no_delete() {
    for current in [None, Some(json!([])), Some(json!([{ "insert": "" }]))] {
        let edit = build_replacement(current.as_ref(), "fresh");
        assert_eq!(
            edit.ops,
            vec![EditOp::Insert {
                insert: "fresh\n\n".to_string()
            }]
        );
    }
}

#[test]
fn replacement_deletes_before_inserting() {
    let current = json!([{ "insert": "ab" }, { "insert": { "divider": true } }]);
    let edit = build_replacement(Some(&current), "z");

    assert_eq!(edit.ops.len(), 2);
    assert_eq!(edit.ops[0], EditOp::Delete { delete: 3 });
    assert!(matches!(edit.ops[1], EditOp::Insert { .. }));
}

#[test]
fn replacement_of_plain_string_content_deletes_it() {
    let record = json!({ "content": "old body" });
    let edit = build_replacement(record.get("content"), "new");

    assert_eq!(
        serde_json::to_value(&edit).unwrap(),
        json!({ "ops": [{ "delete": 8 }, { "insert": "new\n\n" }] })
    );
}

#[test]
fn replacement_reads_back_as_normalized_text() {
    let current = json!([{ "insert": "anything", "attributes": { "italic": true } }]);
    let edit = build_replacement(Some(&current), "X");
    let wire = serde_json::to_value(&edit).unwrap();

    assert_eq!(flatten(Some(&wire)), "X\n\n");
}
