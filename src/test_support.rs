use crate::errors::ToolError;
use crate::services::gong_client::GongApi;
use crate::services::logger::{LogLevel, Logger};
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

/// Scripted stand-in for the Gong client: replays queued replies in order
/// and records every request it receives.
#[derive(Default)]
pub struct RecordingApi {
    replies: Mutex<VecDeque<Result<Value, ToolError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl RecordingApi {
    pub fn replying(reply: Result<Value, ToolError>) -> Arc<Self> {
        let api = Self::default();
        api.replies
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push_back(reply);
        Arc::new(api)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }
}

#[async_trait]
impl GongApi for RecordingApi {
    async fn execute(
        &self,
        method: Method,
        path: &[&str],
        query: Option<&[(&str, String)]>,
        body: Option<&Value>,
    ) -> Result<Value, ToolError> {
        self.requests
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push(RecordedRequest {
                method,
                path: path.iter().map(|s| s.to_string()).collect(),
                query: query
                    .unwrap_or_default()
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect(),
                body: body.cloned(),
            });
        self.replies
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .pop_front()
            .unwrap_or_else(|| Ok(Value::Object(Default::default())))
    }
}

pub fn quiet_logger() -> Logger {
    Logger::with_level("test", LogLevel::Error)
}
