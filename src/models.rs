//! Gong payload shapes as far as this server reads them, and the simplified
//! results handed back to the caller. Remote metrics and timestamps are kept
//! as raw JSON values; nothing here interprets them.

use crate::errors::ToolError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub(crate) fn decode<T: DeserializeOwned>(value: Value, what: &str) -> Result<T, ToolError> {
    serde_json::from_value(value)
        .map_err(|err| ToolError::internal(format!("Unexpected Gong {} payload: {}", what, err)))
}

// Remote side.

#[derive(Debug, Default, Deserialize)]
pub struct CallsPage {
    #[serde(default)]
    pub calls: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteCall {
    pub id: Value,
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub started: Option<Value>,
    #[serde(default)]
    pub duration: Option<Value>,
    #[serde(default)]
    pub owner: Option<RemoteParty>,
    #[serde(default)]
    pub participants: Option<Vec<RemoteParty>>,
    #[serde(default)]
    pub url: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteParty {
    #[serde(default)]
    pub email_address: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptPage {
    #[serde(default)]
    pub call_transcripts: Option<Vec<RemoteTranscript>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RemoteTranscript {
    #[serde(default)]
    pub sentences: Option<Vec<Value>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteSentence {
    #[serde(default)]
    pub speaker_name: Option<Value>,
    #[serde(default)]
    pub text: Option<Value>,
    #[serde(default)]
    pub start: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CallDetailPage {
    #[serde(default)]
    pub call: Option<RemoteCallDetail>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RemoteCallDetail {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub duration: Option<Value>,
    #[serde(default)]
    pub sentiment: Option<Value>,
    #[serde(default)]
    pub stats: Option<RemoteCallStats>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteCallStats {
    #[serde(default)]
    pub talk_ratio: Option<Value>,
    #[serde(default)]
    pub longest_monologue: Option<Value>,
    #[serde(default)]
    pub questions_asked: Option<Value>,
    #[serde(default)]
    pub engagement_score: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScorecardPage {
    #[serde(default)]
    pub scorecards: Option<Value>,
}

// Caller side.

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallSummary {
    pub id: Value,
    pub title: Value,
    pub date: Option<Value>,
    pub duration: Option<Value>,
    pub owner: Option<Value>,
    pub participants: Vec<Value>,
    pub url: Option<Value>,
}

impl From<RemoteCall> for CallSummary {
    fn from(call: RemoteCall) -> Self {
        Self {
            id: call.id,
            title: call
                .title
                .unwrap_or_else(|| Value::from(crate::constants::defaults::UNTITLED_CALL)),
            date: call.started,
            duration: call.duration,
            owner: call.owner.and_then(|owner| owner.email_address),
            participants: call
                .participants
                .unwrap_or_default()
                .into_iter()
                .map(|p| p.email_address.unwrap_or(Value::Null))
                .collect(),
            url: call.url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchCallsResult {
    pub found: usize,
    pub calls: Vec<CallSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptEntry {
    pub speaker: Value,
    pub text: Value,
    pub time: Value,
}

impl From<RemoteSentence> for TranscriptEntry {
    fn from(sentence: RemoteSentence) -> Self {
        Self {
            speaker: sentence
                .speaker_name
                .unwrap_or_else(|| Value::from(crate::constants::defaults::UNKNOWN_SPEAKER)),
            text: sentence.text.unwrap_or_else(|| Value::from("")),
            time: sentence.start.unwrap_or_else(|| Value::from(0)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallTranscript {
    pub call_id: String,
    pub conversation: Vec<TranscriptEntry>,
    pub total_sentences: usize,
    pub showing: usize,
}

/// A missing transcript is an ordinary answer, not a failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TranscriptResult {
    Found(CallTranscript),
    NotFound { error: String },
}

impl TranscriptResult {
    pub fn not_found() -> Self {
        TranscriptResult::NotFound {
            error: crate::constants::defaults::NO_TRANSCRIPT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallStats {
    pub call_id: String,
    pub title: Option<Value>,
    pub duration_seconds: Option<Value>,
    pub talk_ratio: Option<Value>,
    pub longest_monologue: Option<Value>,
    pub questions_asked: Option<Value>,
    pub engagement_score: Option<Value>,
    pub sentiment: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScorecardListing {
    pub period: String,
    pub scorecards: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn call_summary_fills_defaults() {
        let call: RemoteCall = decode(json!({"id": "42"}), "call").expect("call");
        let summary = CallSummary::from(call);
        assert_eq!(summary.title, json!("Untitled"));
        assert!(summary.participants.is_empty());
        assert_eq!(
            serde_json::to_value(&summary).expect("json"),
            json!({
                "id": "42",
                "title": "Untitled",
                "date": null,
                "duration": null,
                "owner": null,
                "participants": [],
                "url": null
            })
        );
    }

    #[test]
    fn explicit_null_title_is_untitled() {
        let call: RemoteCall = decode(json!({"id": "42", "title": null}), "call").expect("call");
        assert_eq!(CallSummary::from(call).title, json!("Untitled"));
    }

    #[test]
    fn call_summary_keeps_participant_gaps() {
        let call: RemoteCall = decode(
            json!({
                "id": "7",
                "owner": {"emailAddress": "rep@acme.io"},
                "participants": [{"emailAddress": "a@b.io"}, {"name": "no email"}]
            }),
            "call",
        )
        .expect("call");
        let summary = CallSummary::from(call);
        assert_eq!(summary.owner, Some(json!("rep@acme.io")));
        assert_eq!(summary.participants, vec![json!("a@b.io"), Value::Null]);
    }

    #[test]
    fn call_without_id_is_unexpected_payload() {
        let err = decode::<RemoteCall>(json!({"title": "x"}), "call").expect_err("id required");
        assert_eq!(err.kind, crate::errors::ToolErrorKind::Internal);
    }

    #[test]
    fn not_found_transcript_serializes_as_error_object() {
        assert_eq!(
            serde_json::to_value(TranscriptResult::not_found()).expect("json"),
            json!({"error": "No transcript found for this call"})
        );
    }

    #[test]
    fn sentence_defaults_match_unknown_speaker() {
        let entry = TranscriptEntry::from(RemoteSentence::default());
        assert_eq!(entry.speaker, json!("Unknown"));
        assert_eq!(entry.text, json!(""));
        assert_eq!(entry.time, json!(0));
    }
}
