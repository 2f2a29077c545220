use crate::config::GongConfig;
use crate::constants::tools::{GET_CALL_STATS, GET_CALL_TRANSCRIPT, LIST_SCORECARDS, SEARCH_CALLS};
use crate::errors::ToolError;
use crate::managers;
use crate::mcp::catalog::tool_catalog;
use crate::services::gong_client::{GongApi, GongClient};
use crate::services::logger::Logger;
use crate::services::tool_executor::{ToolExecutor, ToolHandler};
use std::collections::HashMap;
use std::sync::Arc;

pub struct App {
    pub logger: Logger,
    pub tool_executor: Arc<ToolExecutor>,
}

impl App {
    fn validate_tool_wiring(
        handlers: &HashMap<String, Arc<dyn ToolHandler>>,
    ) -> Result<(), ToolError> {
        let mut missing: Vec<String> = tool_catalog()
            .iter()
            .filter(|tool| !handlers.contains_key(&tool.name))
            .map(|tool| tool.name.clone())
            .collect();
        let mut unlisted: Vec<String> = handlers
            .keys()
            .filter(|name| !tool_catalog().iter().any(|tool| &tool.name == *name))
            .cloned()
            .collect();
        if missing.is_empty() && unlisted.is_empty() {
            return Ok(());
        }
        missing.sort();
        unlisted.sort();
        Err(ToolError::internal(format!(
            "Tool wiring is incomplete (missing handlers: [{}], unlisted handlers: [{}])",
            missing.join(", "),
            unlisted.join(", ")
        ))
        .with_hint("Every tool in tool_catalog.json must have exactly one handler."))
    }

    /// Loads credentials from the environment and wires the live Gong client.
    pub fn initialize() -> Result<Self, ToolError> {
        let config = GongConfig::from_env()?;
        Self::with_config(&config)
    }

    pub fn with_config(config: &GongConfig) -> Result<Self, ToolError> {
        let logger = Logger::new("gong");
        let client = GongClient::new(logger.clone(), config)?;
        logger.info(
            "gong client ready",
            Some(&serde_json::json!({ "base_url": client.base_url().as_str() })),
        );
        Self::with_api(logger, Arc::new(client))
    }

    pub fn with_api(logger: Logger, api: Arc<dyn GongApi>) -> Result<Self, ToolError> {
        let search = Arc::new(managers::search::SearchCallsManager::new(
            logger.clone(),
            api.clone(),
        ));
        let transcript = Arc::new(managers::transcript::TranscriptManager::new(
            logger.clone(),
            api.clone(),
        ));
        let stats = Arc::new(managers::stats::CallStatsManager::new(
            logger.clone(),
            api.clone(),
        ));
        let scorecards = Arc::new(managers::scorecards::ScorecardsManager::new(
            logger.clone(),
            api,
        ));

        let mut handlers: HashMap<String, Arc<dyn ToolHandler>> = HashMap::new();
        handlers.insert(SEARCH_CALLS.to_string(), search);
        handlers.insert(GET_CALL_TRANSCRIPT.to_string(), transcript);
        handlers.insert(GET_CALL_STATS.to_string(), stats);
        handlers.insert(LIST_SCORECARDS.to_string(), scorecards);

        Self::validate_tool_wiring(&handlers)?;

        let tool_executor = Arc::new(ToolExecutor::new(logger.clone(), handlers));

        Ok(Self {
            logger,
            tool_executor,
        })
    }
}
