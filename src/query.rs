//! Query-string serialization for the GLPI API.
//!
//! GLPI parses array and nested parameters with explicit indices
//! (`criteria[0][field]=23&criteria[0][searchtype]=contains`) rather than
//! repeated bare keys, so the standard form serializers don't fit. This
//! module flattens a `serde_json::Value` into ordered key/value pairs in
//! that convention; percent-encoding is left to reqwest's query builder.
//!
//! Falsy scalars are serialized, not dropped: `is_deleted=false` and
//! `searchText=` are meaningful to the server. Only empty arrays and empty
//! objects produce no pairs.

use serde_json::Value;

/// Flattens a JSON object into indices-style query pairs.
///
/// Non-object top-level values produce no pairs; the request translator only
/// ever passes objects here.
pub(crate) fn to_pairs(query: &Value) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    if let Value::Object(map) = query {
        for (key, value) in map {
            flatten(key.clone(), value, &mut pairs);
        }
    }
    pairs
}

fn flatten(prefix: String, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => pairs.push((prefix, String::new())),
        Value::Bool(b) => pairs.push((prefix, b.to_string())),
        Value::Number(n) => pairs.push((prefix, n.to_string())),
        Value::String(s) => pairs.push((prefix, s.clone())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten(format!("{prefix}[{index}]"), item, pairs);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                flatten(format!("{prefix}[{key}]"), item, pairs);
            }
        }
    }
}
