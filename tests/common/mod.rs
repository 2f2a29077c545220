#![allow(dead_code)]

use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    Router,
};
use gong_mcp::app::App;
use gong_mcp::config::GongConfig;
use gong_mcp::mcp::server::McpServer;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub static ENV_LOCK: Lazy<tokio::sync::Mutex<()>> = Lazy::new(|| tokio::sync::Mutex::new(()));

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

type Replies = Arc<Mutex<HashMap<String, (StatusCode, String)>>>;

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    replies: Replies,
}

/// In-process stand-in for the Gong REST API, mounted under `/v2`.
pub struct MockGong {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    replies: Replies,
    _server_handle: tokio::task::JoinHandle<()>,
}

impl MockGong {
    pub async fn start() -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let replies: Replies = Arc::new(Mutex::new(HashMap::new()));
        let state = MockState {
            requests: requests.clone(),
            replies: replies.clone(),
        };
        let app = Router::new().fallback(record).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind mock");
        let port = listener.local_addr().expect("local addr").port();
        let server_handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock server");
        });

        Self {
            base_url: format!("http://127.0.0.1:{}/v2", port),
            requests,
            replies,
            _server_handle: server_handle,
        }
    }

    /// Sets the reply for `"<METHOD> <path below /v2>"`, e.g. `"GET /calls"`.
    pub fn reply(&self, route: &str, status: u16, body: Value) {
        self.reply_raw(route, status, &body.to_string());
    }

    pub fn reply_raw(&self, route: &str, status: u16, body: &str) {
        let status = StatusCode::from_u16(status).expect("status");
        self.replies
            .lock()
            .unwrap()
            .insert(route.to_string(), (status, body.to_string()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn server(&self) -> McpServer {
        let config = GongConfig::new("test-key", "test-secret", &self.base_url).expect("config");
        McpServer::with_app(App::with_config(&config).expect("app"))
    }
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let path = uri.path().strip_prefix("/v2").unwrap_or(uri.path()).to_string();
    let query = uri
        .query()
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect::<HashMap<String, String>>()
        })
        .unwrap_or_default();
    let header_text = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string())
    };
    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: path.clone(),
        query,
        authorization: header_text(header::AUTHORIZATION),
        content_type: header_text(header::CONTENT_TYPE),
        body: serde_json::from_str(&body).ok(),
    });

    let key = format!("{} {}", method, path);
    let (status, body) = state
        .replies
        .lock()
        .unwrap()
        .get(&key)
        .cloned()
        .unwrap_or((StatusCode::NOT_FOUND, "{\"errors\":[\"no route\"]}".to_string()));
    (status, [(header::CONTENT_TYPE, "application/json")], body)
}

/// Calls a tool through the MCP layer and decodes the single text block.
pub async fn call_tool(server: &McpServer, name: &str, arguments: Value) -> Value {
    let envelope = server
        .handle_tools_call(serde_json::json!({ "name": name, "arguments": arguments }))
        .await
        .expect("tools/call result");
    let content = envelope["content"].as_array().expect("content");
    assert_eq!(content.len(), 1, "exactly one content block");
    assert_eq!(content[0]["type"], "text");
    serde_json::from_str(content[0]["text"].as_str().expect("text")).expect("json text")
}
