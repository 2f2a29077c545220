pub mod text;
pub mod tool_errors;
