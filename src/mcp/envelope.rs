use crate::errors::ToolError;
use serde_json::Value;

fn render(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// One MCP text block holding indented JSON.
pub fn text_envelope(value: &Value) -> Value {
    serde_json::json!({
        "content": [ { "type": "text", "text": render(value) } ]
    })
}

/// Every failure kind collapses to the same `{"error": message}` body.
pub fn error_envelope(error: &ToolError) -> Value {
    text_envelope(&serde_json::json!({ "error": error.message }))
}

pub fn tool_result_envelope(outcome: Result<Value, ToolError>) -> Value {
    match outcome {
        Ok(value) => text_envelope(&value),
        Err(err) => error_envelope(&err),
    }
}
