//! Plain-text extraction from rich-text fields.
//!
//! Description-like fields arrive either as a plain string or as a block
//! document: a list of nodes, each carrying `text` leaves and/or nested
//! `children`.

use serde_json::Value;

/// Render a rich-text field as plain text.
///
/// Strings are returned unchanged. Block documents (an array of nodes or a
/// single node object) have their leaf text concatenated depth-first, in
/// document order, with no separators added. Any other value yields an empty
/// string.
#[must_use]
pub fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => {
            let mut out = String::new();
            collect(value, &mut out);
            out
        }
        _ => String::new(),
    }
}

fn collect(node: &Value, out: &mut String) {
    match node {
        Value::String(s) => out.push_str(s),
        Value::Array(nodes) => nodes.iter().for_each(|n| collect(n, out)),
        Value::Object(map) => {
            if let Some(Value::String(text)) = map.get("text") {
                out.push_str(text);
            }
            if let Some(children) = map.get("children") {
                collect(children, out);
            }
        }
        _ => {}
    }
}
