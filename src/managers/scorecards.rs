use crate::constants::paths;
use crate::constants::tools::LIST_SCORECARDS;
use crate::errors::ToolError;
use crate::managers::args::{parse_args, ScorecardsArgs};
use crate::managers::to_tool_value;
use crate::models::{decode, ScorecardListing, ScorecardPage};
use crate::services::date_window::DateWindow;
use crate::services::gong_client::GongApi;
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolHandler;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

pub struct ScorecardsManager {
    logger: Logger,
    api: Arc<dyn GongApi>,
}

impl ScorecardsManager {
    pub fn new(logger: Logger, api: Arc<dyn GongApi>) -> Self {
        Self {
            logger: logger.child("scorecards"),
            api,
        }
    }

    pub async fn list(&self, args: &ScorecardsArgs) -> Result<ScorecardListing, ToolError> {
        let days_back = args.days_back();
        let window = DateWindow::last_days(days_back)?;
        let body = serde_json::json!({ "filter": window.filter() });
        self.logger.debug("scorecard window", Some(&body));

        let payload = self
            .api
            .execute(Method::POST, paths::SCORECARD_STATS, None, Some(&body))
            .await?;
        let page: ScorecardPage = decode(payload, "scorecards")?;
        Ok(ScorecardListing {
            period: format!("Last {} days", days_back),
            scorecards: page.scorecards.unwrap_or_else(|| Value::Array(Vec::new())),
        })
    }
}

#[async_trait]
impl ToolHandler for ScorecardsManager {
    async fn handle(&self, args: Value) -> Result<Value, ToolError> {
        let args: ScorecardsArgs = parse_args(LIST_SCORECARDS, args)?;
        to_tool_value(&self.list(&args).await?)
    }
}
