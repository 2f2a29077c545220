use crate::constants::defaults::{SCORECARD_DAYS_BACK, SEARCH_DAYS_BACK};
use crate::errors::ToolError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Decodes raw tool arguments into the tool's input struct. Unknown keys are
/// ignored; wrong types are reported as invalid params.
pub fn parse_args<T: DeserializeOwned>(tool: &str, args: Value) -> Result<T, ToolError> {
    serde_json::from_value(args).map_err(|err| {
        ToolError::invalid_params(format!("Invalid arguments for {}: {}", tool, err))
    })
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchCallsArgs {
    pub days_back: Option<i64>,
    pub owner_email: Option<String>,
    pub min_duration: Option<i64>,
    /// Accepted for schema compatibility; search never reads it.
    pub keyword: Option<String>,
}

impl SearchCallsArgs {
    pub fn days_back(&self) -> i64 {
        self.days_back.unwrap_or(SEARCH_DAYS_BACK)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScorecardsArgs {
    pub days_back: Option<i64>,
}

impl ScorecardsArgs {
    pub fn days_back(&self) -> i64 {
        self.days_back.unwrap_or(SCORECARD_DAYS_BACK)
    }
}

/// Gong call ids are numeric strings; agents sometimes send them as numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CallId {
    Text(String),
    Number(serde_json::Number),
}

impl CallId {
    pub fn into_string(self) -> String {
        match self {
            CallId::Text(text) => text,
            CallId::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallIdArgs {
    pub call_id: Option<CallId>,
}

impl CallIdArgs {
    pub fn require(self, tool: &str) -> Result<String, ToolError> {
        self.call_id
            .map(CallId::into_string)
            .ok_or_else(|| ToolError::missing_argument("call_id", tool))
    }
}
