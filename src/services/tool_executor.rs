use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use crate::errors::ToolError;
use crate::mcp::catalog::{missing_required_args, tool_by_name};
use crate::services::logger::Logger;
use crate::utils::tool_errors::unknown_tool_error;

use serde_json::Value;

#[async_trait]
pub trait ToolHandler: Send + Sync {
    async fn handle(&self, args: Value) -> Result<Value, ToolError>;
}

/// Name-keyed dispatch over the registered handlers.
#[derive(Clone)]
pub struct ToolExecutor {
    logger: Logger,
    handlers: Arc<HashMap<String, Arc<dyn ToolHandler>>>,
}

impl ToolExecutor {
    pub fn new(logger: Logger, handlers: HashMap<String, Arc<dyn ToolHandler>>) -> Self {
        Self {
            logger: logger.child("executor"),
            handlers: Arc::new(handlers),
        }
    }

    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlers.keys().cloned().collect();
        names.sort();
        names
    }

    fn normalize_args(args: Value) -> Value {
        if args.is_null() {
            Value::Object(Default::default())
        } else {
            args
        }
    }

    fn check_required(&self, tool: &str, args: &Value) -> Result<(), ToolError> {
        if tool_by_name(tool).is_none() {
            return Ok(());
        }
        match missing_required_args(tool, args).first() {
            Some(field) => Err(ToolError::missing_argument(field, tool)),
            None => Ok(()),
        }
    }

    pub async fn execute(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        let trace_id = uuid::Uuid::new_v4().to_string();
        let started = Instant::now();

        let Some(handler) = self.handlers.get(tool).cloned() else {
            let err = unknown_tool_error(tool, &self.tool_names());
            self.logger.warn(
                "unknown tool",
                Some(&serde_json::json!({ "tool": tool, "trace_id": trace_id })),
            );
            return Err(err);
        };

        let args = Self::normalize_args(args);
        let outcome = match self.check_required(tool, &args) {
            Ok(()) => handler.handle(args).await,
            Err(err) => Err(err),
        };

        let duration_ms = started.elapsed().as_millis();
        match &outcome {
            Ok(_) => self.logger.info(
                "tool call",
                Some(&serde_json::json!({
                    "tool": tool,
                    "trace_id": trace_id,
                    "duration_ms": duration_ms,
                    "ok": true,
                })),
            ),
            Err(err) => self.logger.warn(
                "tool call failed",
                Some(&serde_json::json!({
                    "tool": tool,
                    "trace_id": trace_id,
                    "duration_ms": duration_ms,
                    "ok": false,
                    "kind": err.kind,
                    "status": err.status,
                })),
            ),
        }
        outcome
    }
}
