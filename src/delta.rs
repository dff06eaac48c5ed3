//! Conversion between Slab's rich-text delta format and plain text.
//!
//! A delta is an ordered list of operations. Stored content only contains
//! inserts: either a text run (`{"insert": "text", "attributes": {..}}`) or a
//! non-text embed (`{"insert": {"image": ..}}`). Edits may also contain
//! deletes. The service returns content either as a bare array of operations
//! or wrapped as `{"ops": [...]}`; both shapes are accepted.

use serde::Serialize;
use serde_json::Value;

/// Trailing newlines every replacement body ends with.
const TRAILING: &str = "\n\n";

/// An edit sent to `updatePostContent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Delta {
    pub ops: Vec<EditOp>,
}

/// A single edit operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EditOp {
    Delete { delete: usize },
    Insert { insert: String },
}

/// Borrow the operation list out of either accepted delta shape.
fn operations(delta: Option<&Value>) -> Option<&Vec<Value>> {
    match delta? {
        Value::Array(ops) => Some(ops),
        Value::Object(map) => map.get("ops")?.as_array(),
        _ => None,
    }
}

/// Flatten a delta to plain text.
///
/// Absent or malformed input yields the empty string. Formatting attributes
/// and embeds are dropped.
pub fn flatten(delta: Option<&Value>) -> String {
    let Some(ops) = operations(delta) else {
        return String::new();
    };

    ops.iter()
        .filter_map(|op| op.get("insert"))
        .filter_map(Value::as_str)
        .collect()
}

/// Length of the document described by `delta`, in the units the service
/// uses for `delete` counts.
///
/// Text inserts count UTF-16 code units, embeds count as one unit, and
/// anything that is not an insert counts as zero. Content already stored as
/// a plain string counts as a single text run.
pub fn content_length(delta: Option<&Value>) -> usize {
    if let Some(Value::String(text)) = delta {
        return text.encode_utf16().count();
    }

    let Some(ops) = operations(delta) else {
        return 0;
    };

    ops.iter()
        .filter_map(|op| op.get("insert"))
        .map(|insert| match insert {
            Value::String(text) => text.encode_utf16().count(),
            Value::Null => 0,
            _ => 1,
        })
        .sum()
}

/// Normalize `text` so it ends with exactly two newlines.
pub fn normalize_body(text: &str) -> String {
    let mut body = text.trim_end_matches('\n').to_string();
    body.push_str(TRAILING);
    body
}

/// Build the edit that replaces all of `current` with `new_text`.
///
/// The edit deletes the whole existing document and inserts the normalized
/// text. A zero-length delete is never emitted.
pub fn build_replacement(current: Option<&Value>, new_text: &str) -> Delta {
    let length = content_length(current);

    let mut ops = Vec::with_capacity(2);
    if length > 0 {
        ops.push(EditOp::Delete { delete: length });
    }
    ops.push(EditOp::Insert {
        insert: normalize_body(new_text),
    });

    Delta { ops }
}
