use crate::constants::limits::TRANSCRIPT_SENTENCES;
use crate::constants::paths;
use crate::constants::tools::GET_CALL_TRANSCRIPT;
use crate::errors::ToolError;
use crate::managers::args::{parse_args, CallIdArgs};
use crate::managers::to_tool_value;
use crate::models::{
    decode, CallTranscript, RemoteSentence, TranscriptEntry, TranscriptPage, TranscriptResult,
};
use crate::services::gong_client::GongApi;
use crate::services::logger::Logger;
use crate::services::tool_executor::ToolHandler;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

pub struct TranscriptManager {
    logger: Logger,
    api: Arc<dyn GongApi>,
}

impl TranscriptManager {
    pub fn new(logger: Logger, api: Arc<dyn GongApi>) -> Self {
        Self {
            logger: logger.child("transcript"),
            api,
        }
    }

    pub async fn transcript(&self, call_id: &str) -> Result<TranscriptResult, ToolError> {
        let body = serde_json::json!({ "filter": { "callIds": [call_id] } });
        let payload = self
            .api
            .execute(Method::POST, paths::CALL_TRANSCRIPT, None, Some(&body))
            .await?;
        let result = project_transcript(call_id, payload)?;
        if matches!(result, TranscriptResult::NotFound { .. }) {
            self.logger.info(
                "no transcript for call",
                Some(&serde_json::json!({ "call_id": call_id })),
            );
        }
        Ok(result)
    }
}

#[async_trait]
impl ToolHandler for TranscriptManager {
    async fn handle(&self, args: Value) -> Result<Value, ToolError> {
        let call_id = parse_args::<CallIdArgs>(GET_CALL_TRANSCRIPT, args)?
            .require(GET_CALL_TRANSCRIPT)?;
        to_tool_value(&self.transcript(&call_id).await?)
    }
}

pub fn project_transcript(call_id: &str, payload: Value) -> Result<TranscriptResult, ToolError> {
    let page: TranscriptPage = decode(payload, "transcript")?;
    let sentences = page
        .call_transcripts
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|first| first.sentences)
        .unwrap_or_default();
    if sentences.is_empty() {
        return Ok(TranscriptResult::not_found());
    }

    let total_sentences = sentences.len();
    let conversation = sentences
        .into_iter()
        .take(TRANSCRIPT_SENTENCES)
        .map(|raw| decode::<RemoteSentence>(raw, "sentence").map(TranscriptEntry::from))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TranscriptResult::Found(CallTranscript {
        call_id: call_id.to_string(),
        showing: conversation.len(),
        conversation,
        total_sentences,
    }))
}
