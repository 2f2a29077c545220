use crate::constants::gong::{
    DEFAULT_BASE_URL, ENV_ACCESS_KEY, ENV_ACCESS_KEY_SECRET, ENV_BASE_URL,
};
use crate::errors::ConfigError;
use std::fmt;
use url::Url;

/// Static Gong credentials plus the API root they are sent to.
#[derive(Clone)]
pub struct GongConfig {
    access_key: String,
    access_key_secret: String,
    base_url: Url,
}

impl GongConfig {
    pub fn new(
        access_key: impl Into<String>,
        access_key_secret: impl Into<String>,
        base_url: &str,
    ) -> Result<Self, ConfigError> {
        let access_key = non_empty(access_key.into(), ENV_ACCESS_KEY)?;
        let access_key_secret = non_empty(access_key_secret.into(), ENV_ACCESS_KEY_SECRET)?;
        Ok(Self {
            access_key,
            access_key_secret,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Reads credentials from the process environment. `.env` loading is the
    /// caller's business (see `main`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_key = lookup(ENV_ACCESS_KEY).unwrap_or_default();
        let access_key_secret = lookup(ENV_ACCESS_KEY_SECRET).unwrap_or_default();
        let base_url = lookup(ENV_BASE_URL)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(access_key, access_key_secret, &base_url)
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    pub fn access_key_secret(&self) -> &str {
        &self.access_key_secret
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl fmt::Debug for GongConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GongConfig")
            .field("access_key", &"[redacted]")
            .field("access_key_secret", &"[redacted]")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

fn non_empty(value: String, var: &'static str) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::MissingVar(var));
    }
    Ok(trimmed.to_string())
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim_end_matches('/'))
        .map_err(|err| ConfigError::InvalidBaseUrl(format!("{} ({})", raw, err)))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ConfigError::InvalidBaseUrl(raw.to_string()));
    }
    Ok(url)
}
