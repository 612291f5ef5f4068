//! JSON-schema fragments for tool inputs.

use serde_json::{Map, Value, json};

/// Object schema from `(name, property)` pairs.
pub fn object(properties: &[(&str, Value)], required: &[&str]) -> Value {
    let properties: Map<String, Value> = properties
        .iter()
        .map(|(name, property)| ((*name).to_string(), property.clone()))
        .collect();
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

pub fn org_id() -> Value {
    integer("The organization ID.")
}

pub fn integer(description: &str) -> Value {
    json!({ "type": "integer", "description": description })
}

pub fn integer_default(description: &str, default: i64) -> Value {
    json!({ "type": "integer", "description": description, "default": default })
}

pub fn string(description: &str) -> Value {
    json!({ "type": "string", "description": description })
}

pub fn string_default(description: &str, default: &str) -> Value {
    json!({ "type": "string", "description": description, "default": default })
}

pub fn boolean_default(description: &str, default: bool) -> Value {
    json!({ "type": "boolean", "description": description, "default": default })
}

pub fn string_list(description: &str) -> Value {
    json!({ "type": "array", "items": { "type": "string" }, "description": description })
}

pub fn integer_list(description: &str) -> Value {
    json!({ "type": "array", "items": { "type": "integer" }, "description": description })
}

pub fn free_object(description: &str) -> Value {
    json!({ "type": "object", "description": description })
}

/// Schema with only `org_id`, the most common shape.
pub fn org_only() -> Value {
    object(&[("org_id", org_id())], &["org_id"])
}
