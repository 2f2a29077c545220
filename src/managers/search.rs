use crate::constants::limits::SEARCH_RESULTS;
use crate::constants::paths;
use crate::constants::tools::SEARCH_CALLS;
use crate::errors::ToolError;
use crate::managers::args::{parse_args, SearchCallsArgs};
use crate::managers::to_tool_value;
use crate::models::{decode, CallSummary, CallsPage, RemoteCall, SearchCallsResult};
use crate::services::date_window::DateWindow;
use crate::services::gong_client::GongApi;
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolHandler;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

pub struct SearchCallsManager {
    logger: Logger,
    api: Arc<dyn GongApi>,
}

impl SearchCallsManager {
    pub fn new(logger: Logger, api: Arc<dyn GongApi>) -> Self {
        Self {
            logger: logger.child("search"),
            api,
        }
    }

    pub async fn search(&self, args: &SearchCallsArgs) -> Result<SearchCallsResult, ToolError> {
        let window = DateWindow::last_days(args.days_back())?;

        // Owner and duration filters are assembled but Gong only ever receives
        // the date range as query parameters.
        let filter = build_search_filter(&window, args);
        self.logger.debug("search filter not forwarded", Some(&filter));

        let query = window.query();
        let payload = self
            .api
            .execute(Method::GET, paths::CALLS, Some(query.as_slice()), None)
            .await?;
        project_calls(payload)
    }
}

#[async_trait]
impl ToolHandler for SearchCallsManager {
    async fn handle(&self, args: Value) -> Result<Value, ToolError> {
        let args: SearchCallsArgs = parse_args(SEARCH_CALLS, args)?;
        to_tool_value(&self.search(&args).await?)
    }
}

pub fn build_search_filter(window: &DateWindow, args: &SearchCallsArgs) -> Value {
    let mut filter = window.filter();
    if let Some(email) = args.owner_email.as_deref().filter(|e| !e.is_empty()) {
        filter.insert("ownerEmails".to_string(), serde_json::json!([email]));
    }
    if let Some(min) = args.min_duration.filter(|d| *d != 0) {
        filter.insert("minDuration".to_string(), Value::from(min));
    }
    serde_json::json!({ "filter": filter })
}

/// Keeps the first page entries only; anything past the cap is never decoded.
pub fn project_calls(payload: Value) -> Result<SearchCallsResult, ToolError> {
    let page: CallsPage = decode(payload, "calls")?;
    let calls = page
        .calls
        .unwrap_or_default()
        .into_iter()
        .take(SEARCH_RESULTS)
        .map(|raw| decode::<RemoteCall>(raw, "call").map(CallSummary::from))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SearchCallsResult {
        found: calls.len(),
        calls,
    })
}
