pub mod args;
pub mod scorecards;
pub mod search;
pub mod stats;
pub mod transcript;

use crate::errors::ToolError;
use serde::Serialize;
use serde_json::Value;

pub(crate) fn to_tool_value<T: Serialize>(result: &T) -> Result<Value, ToolError> {
    serde_json::to_value(result)
        .map_err(|err| ToolError::internal(format!("Failed to encode tool result: {}", err)))
}
