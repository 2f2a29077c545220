pub mod gong {
    pub const DEFAULT_BASE_URL: &str = "https://api.gong.io/v2";
    pub const ENV_ACCESS_KEY: &str = "GONG_ACCESS_KEY";
    pub const ENV_ACCESS_KEY_SECRET: &str = "GONG_ACCESS_KEY_SECRET";
    pub const ENV_BASE_URL: &str = "GONG_BASE_URL";
}

pub mod paths {
    pub const CALLS: &[&str] = &["calls"];
    pub const CALL_TRANSCRIPT: &[&str] = &["calls", "transcript"];
    pub const SCORECARD_STATS: &[&str] = &["stats", "scorecards"];
}

pub mod limits {
    pub const SEARCH_RESULTS: usize = 10;
    pub const TRANSCRIPT_SENTENCES: usize = 50;
    pub const LOG_BODY_BYTES: usize = 512;
}

pub mod defaults {
    pub const SEARCH_DAYS_BACK: i64 = 7;
    pub const SCORECARD_DAYS_BACK: i64 = 30;
    pub const UNTITLED_CALL: &str = "Untitled";
    pub const UNKNOWN_SPEAKER: &str = "Unknown";
    pub const NO_TRANSCRIPT: &str = "No transcript found for this call";
}

pub mod server {
    pub const PROTOCOL_VERSION: &str = "2025-06-18";
    pub const NAME: &str = "gong-mcp";
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}

pub mod tools {
    pub const SEARCH_CALLS: &str = "search_calls";
    pub const GET_CALL_TRANSCRIPT: &str = "get_call_transcript";
    pub const GET_CALL_STATS: &str = "get_call_stats";
    pub const LIST_SCORECARDS: &str = "list_scorecards";
}
