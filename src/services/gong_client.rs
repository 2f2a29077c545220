use crate::config::GongConfig;
use crate::constants::limits::LOG_BODY_BYTES;
use crate::errors::ToolError;
use crate::services::logger::Logger;
use crate::utils::text::truncate_utf8_prefix;
use async_trait::async_trait;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde_json::Value;
use std::time::Instant;
use url::Url;

/// Anything able to run one authenticated Gong request and hand back the
/// decoded JSON body.
#[async_trait]
pub trait GongApi: Send + Sync {
    async fn execute(
        &self,
        method: Method,
        path: &[&str],
        query: Option<&[(&str, String)]>,
        body: Option<&Value>,
    ) -> Result<Value, ToolError>;
}

#[derive(Clone)]
pub struct GongClient {
    logger: Logger,
    client: Client,
    base_url: Url,
    headers: HeaderMap,
}

impl GongClient {
    pub fn new(logger: Logger, config: &GongConfig) -> Result<Self, ToolError> {
        let client = Client::builder().build().map_err(|err| {
            ToolError::internal(format!("Failed to build HTTP client: {}", err))
        })?;
        Ok(Self {
            logger: logger.child("client"),
            client,
            base_url: config.base_url().clone(),
            headers: build_headers(config)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn endpoint(&self, path: &[&str]) -> Result<Url, ToolError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ToolError::internal("Gong base URL cannot carry a path"))?;
            segments.pop_if_empty();
            segments.extend(path);
        }
        Ok(url)
    }
}

#[async_trait]
impl GongApi for GongClient {
    async fn execute(
        &self,
        method: Method,
        path: &[&str],
        query: Option<&[(&str, String)]>,
        body: Option<&Value>,
    ) -> Result<Value, ToolError> {
        let url = self.endpoint(path)?;
        let mut req = self
            .client
            .request(method.clone(), url.clone())
            .headers(self.headers.clone());
        if let Some(query) = query {
            req = req.query(query);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let started = Instant::now();
        let response = req.send().await.map_err(ToolError::transport)?;
        let status = response.status();
        let text = response.text().await.map_err(ToolError::transport)?;

        self.logger.debug(
            "gong request",
            Some(&serde_json::json!({
                "method": method.as_str(),
                "path": url.path(),
                "status": status.as_u16(),
                "duration_ms": started.elapsed().as_millis(),
            })),
        );

        if !status.is_success() {
            self.logger.warn(
                "gong request rejected",
                Some(&serde_json::json!({
                    "path": url.path(),
                    "status": status.as_u16(),
                    "body": truncate_utf8_prefix(&text, LOG_BODY_BYTES),
                })),
            );
            return Err(ToolError::api(status.as_u16(), text));
        }

        parse_body(&text)
    }
}

fn build_headers(config: &GongConfig) -> Result<HeaderMap, ToolError> {
    let encoded = base64::engine::general_purpose::STANDARD.encode(format!(
        "{}:{}",
        config.access_key(),
        config.access_key_secret()
    ));
    let mut auth = HeaderValue::from_str(&format!("Basic {}", encoded))
        .map_err(|_| ToolError::configuration("Gong credentials contain invalid header bytes"))?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(AUTHORIZATION, auth);
    Ok(headers)
}

fn parse_body(text: &str) -> Result<Value, ToolError> {
    serde_json::from_str(text)
        .map_err(|err| ToolError::transport(format!("invalid JSON in Gong response: {}", err)))
}
