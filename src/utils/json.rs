//! Lenient accessors over backend payloads.
//!
//! Payload shapes are the backend's business. Every accessor here yields a
//! caller-chosen default for a missing key or a non-object value, so
//! formatters never fault on a surprising body.

use serde_json::Value;

/// Display form of a field: strings unquoted, other JSON compact,
/// `fallback` when absent or `null`.
pub fn text(value: &Value, key: &str, fallback: &str) -> String {
    match value.get(key) {
        None | Some(Value::Null) => fallback.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Like [`text`], but reads `outer.key` first and falls back to `key`
/// nested under `inner`.
pub fn text_or_nested(value: &Value, key: &str, inner: &str, fallback: &str) -> String {
    match value.get(key) {
        Some(v) if !v.is_null() => text(value, key, fallback),
        _ => value
            .get(inner)
            .map_or_else(|| fallback.to_string(), |nested| text(nested, key, fallback)),
    }
}

pub fn u64_field(value: &Value, key: &str) -> u64 {
    value.get(key).and_then(Value::as_u64).unwrap_or(0)
}

pub fn bool_field(value: &Value, key: &str) -> bool {
    match value.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
        None | Some(Value::Null) => false,
    }
}

/// Elements of an array field; empty for anything else.
pub fn items<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Elements of a top-level array payload; empty for anything else.
pub fn as_list(value: &Value) -> &[Value] {
    value.as_array().map(Vec::as_slice).unwrap_or_default()
}

/// Python-style emptiness: `null`, `false`, `0`, `""`, `[]` and `{}`.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Pretty-printed JSON, two-space indented.
pub fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
