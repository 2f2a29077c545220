use crate::errors::ToolError;

pub fn unknown_tool_error(tool: &str, known_tools: &[String]) -> ToolError {
    let err = ToolError::unknown_tool(tool);
    if known_tools.is_empty() {
        return err;
    }
    err.with_hint(format!("Use one of: {}.", known_tools.join(", ")))
}
