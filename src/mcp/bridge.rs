//! Conversions between the tool layer and rmcp protocol types.

use crate::tools::{ToolResult, ToolSpec};
use rmcp::model::{CallToolResult, Content, JsonObject};
use serde_json::{Value, json};
use std::sync::Arc;

/// Input schema as a JSON object. Anything else is replaced by an empty
/// object schema, which MCP clients require at minimum.
pub fn schema_object(parameters: &Value) -> JsonObject {
    match parameters {
        Value::Object(map) => map.clone(),
        _ => {
            let mut map = JsonObject::new();
            map.insert("type".into(), json!("object"));
            map.insert("properties".into(), json!({}));
            map
        }
    }
}

pub fn to_rmcp_tool(spec: &ToolSpec) -> rmcp::model::Tool {
    rmcp::model::Tool::new(
        spec.name.clone(),
        spec.description.clone(),
        Arc::new(schema_object(&spec.parameters)),
    )
}

pub fn to_rmcp_tools(specs: &[ToolSpec]) -> Vec<rmcp::model::Tool> {
    specs.iter().map(to_rmcp_tool).collect()
}

/// One text block; failed invocations are flagged `is_error`.
pub fn to_call_result(result: &ToolResult) -> CallToolResult {
    let content = vec![Content::text(result.display_text())];
    if result.success {
        CallToolResult::success(content)
    } else {
        CallToolResult::error(content)
    }
}
