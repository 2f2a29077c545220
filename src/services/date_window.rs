use crate::errors::ToolError;
use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};

/// Right-closed lookback window ending at the moment it is computed.
/// A negative day count is passed through and yields `from > to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl DateWindow {
    pub fn last_days(days: i64) -> Result<Self, ToolError> {
        Self::ending_at(Utc::now(), days)
    }

    pub fn ending_at(to: DateTime<Utc>, days: i64) -> Result<Self, ToolError> {
        let from = TimeDelta::try_days(days)
            .and_then(|delta| to.checked_sub_signed(delta))
            .ok_or_else(|| {
                ToolError::invalid_params(format!("days_back is out of range (got {})", days))
            })?;
        Ok(Self { from, to })
    }

    pub fn from_param(&self) -> String {
        self.from.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    pub fn to_param(&self) -> String {
        self.to.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("fromDateTime", self.from_param()),
            ("toDateTime", self.to_param()),
        ]
    }

    pub fn filter(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut filter = serde_json::Map::new();
        filter.insert("fromDateTime".to_string(), self.from_param().into());
        filter.insert("toDateTime".to_string(), self.to_param().into());
        filter
    }
}
