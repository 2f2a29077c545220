use serde::Serialize;
use std::error::Error;
use std::fmt;

use super::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolErrorKind {
    Configuration,
    InvalidParams,
    Api,
    Transport,
    UnknownTool,
    Internal,
}

/// Failure raised anywhere below the MCP boundary.
///
/// The kind stays intact through the executor so callers and tests can match
/// on it; the server flattens it to `{"error": message}` at the very end.
#[derive(Debug, Clone, Serialize)]
pub struct ToolError {
    pub kind: ToolErrorKind,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ToolError {
    pub fn new(kind: ToolErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
            hint: None,
            status: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Configuration, "CONFIGURATION", message)
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::InvalidParams, "INVALID_PARAMS", message)
    }

    pub fn missing_argument(field: &str, tool: &str) -> Self {
        Self::invalid_params(format!("{} is required for {}", field, tool))
    }

    /// Non-2xx answer from Gong. The raw body is kept verbatim in the message.
    pub fn api(status: u16, body: impl AsRef<str>) -> Self {
        let mut err = Self::new(
            ToolErrorKind::Api,
            "API_ERROR",
            format!("Gong API error {}: {}", status, body.as_ref()),
        );
        err.status = Some(status);
        err
    }

    pub fn transport(description: impl fmt::Display) -> Self {
        Self::new(
            ToolErrorKind::Transport,
            "TRANSPORT",
            format!("Request failed: {}", description),
        )
    }

    pub fn unknown_tool(name: &str) -> Self {
        Self::new(
            ToolErrorKind::UnknownTool,
            "UNKNOWN_TOOL",
            format!("Unknown tool: {}", name),
        )
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Internal, "INTERNAL", message)
    }
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ToolError {}

impl From<std::io::Error> for ToolError {
    fn from(err: std::io::Error) -> Self {
        ToolError::internal(err.to_string())
    }
}

impl From<ConfigError> for ToolError {
    fn from(err: ConfigError) -> Self {
        ToolError::configuration(err.to_string())
    }
}
