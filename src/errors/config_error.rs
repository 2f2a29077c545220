use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Please set GONG_ACCESS_KEY and GONG_ACCESS_KEY_SECRET environment variables ({0} is missing)")]
    MissingVar(&'static str),
    #[error("GONG_BASE_URL is not a valid http(s) URL: {0}")]
    InvalidBaseUrl(String),
}
