use crate::constants::paths;
use crate::constants::tools::GET_CALL_STATS;
use crate::errors::ToolError;
use crate::managers::args::{parse_args, CallIdArgs};
use crate::managers::to_tool_value;
use crate::models::{decode, CallDetailPage, CallStats};
use crate::services::gong_client::GongApi;
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolHandler;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

pub struct CallStatsManager {
    logger: Logger,
    api: Arc<dyn GongApi>,
}

impl CallStatsManager {
    pub fn new(logger: Logger, api: Arc<dyn GongApi>) -> Self {
        Self {
            logger: logger.child("stats"),
            api,
        }
    }

    pub async fn stats(&self, call_id: &str) -> Result<CallStats, ToolError> {
        let path: Vec<&str> = paths::CALLS
            .iter()
            .copied()
            .chain(std::iter::once(call_id))
            .collect();
        let payload = self.api.execute(Method::GET, &path, None, None).await?;
        if payload.get("call").is_none() {
            self.logger.debug(
                "call detail without call object",
                Some(&serde_json::json!({ "call_id": call_id })),
            );
        }
        project_stats(call_id, payload)
    }
}

#[async_trait]
impl ToolHandler for CallStatsManager {
    async fn handle(&self, args: Value) -> Result<Value, ToolError> {
        let call_id =
            parse_args::<CallIdArgs>(GET_CALL_STATS, args)?.require(GET_CALL_STATS)?;
        to_tool_value(&self.stats(&call_id).await?)
    }
}

pub fn project_stats(call_id: &str, payload: Value) -> Result<CallStats, ToolError> {
    let page: CallDetailPage = decode(payload, "call detail")?;
    let call = page.call.unwrap_or_default();
    let stats = call.stats.unwrap_or_default();
    Ok(CallStats {
        call_id: call_id.to_string(),
        title: call.title,
        duration_seconds: call.duration,
        talk_ratio: stats.talk_ratio,
        longest_monologue: stats.longest_monologue,
        questions_asked: stats.questions_asked,
        engagement_score: stats.engagement_score,
        sentiment: call.sentiment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{quiet_logger, RecordingApi};
    use serde_json::json;

    #[test]
    fn nested_stats_are_lifted() {
        let stats = project_stats(
            "42",
            json!({
                "call": {
                    "title": "Renewal",
                    "duration": 1830,
                    "sentiment": "positive",
                    "stats": {
                        "talkRatio": 0.42,
                        "longestMonologue": 95,
                        "questionsAsked": 11,
                        "engagementScore": 7.5
                    }
                }
            }),
        )
        .expect("projection");
        assert_eq!(stats.title, Some(json!("Renewal")));
        assert_eq!(stats.duration_seconds, Some(json!(1830)));
        assert_eq!(stats.talk_ratio, Some(json!(0.42)));
        assert_eq!(stats.questions_asked, Some(json!(11)));
        assert_eq!(stats.sentiment, Some(json!("positive")));
    }

    #[test]
    fn absent_fields_surface_as_null() {
        let value =
            serde_json::to_value(project_stats("42", json!({})).expect("projection")).expect("json");
        assert_eq!(
            value,
            json!({
                "call_id": "42",
                "title": null,
                "duration_seconds": null,
                "talk_ratio": null,
                "longest_monologue": null,
                "questions_asked": null,
                "engagement_score": null,
                "sentiment": null
            })
        );
    }

    #[tokio::test]
    async fn call_id_becomes_one_path_segment() {
        let api = RecordingApi::replying(Ok(json!({"call": {"title": "Demo"}})));
        let manager = CallStatsManager::new(quiet_logger(), api.clone());
        let result = manager
            .handle(json!({"call_id": "123"}))
            .await
            .expect("stats");
        assert_eq!(result["title"], "Demo");
        assert_eq!(result["call_id"], "123");

        let requests = api.requests();
        assert_eq!(requests[0].method, Method::GET);
        assert_eq!(requests[0].path, vec!["calls", "123"]);
        assert!(requests[0].body.is_none());
    }

    #[tokio::test]
    async fn api_errors_propagate_untouched() {
        let api = RecordingApi::replying(Err(ToolError::api(404, "call not found")));
        let manager = CallStatsManager::new(quiet_logger(), api);
        let err = manager
            .handle(json!({"call_id": "404"}))
            .await
            .expect_err("not found");
        assert_eq!(err.status, Some(404));
    }
}
