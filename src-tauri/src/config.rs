//! Backend Configuration
//!
//! Read from environment variables:
//! - `FRUIT_JAR_API_URL` - Base URL of the fruit API (default: `https://www.fruityvice.com/api`)
//! - `FRUIT_JAR_HTTP_TIMEOUT_SECS` - Per-request timeout (default: 10)

use std::time::Duration;

const DEFAULT_API_URL: &str = "https://www.fruityvice.com/api";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

const API_URL_VAR: &str = "FRUIT_JAR_API_URL";
const TIMEOUT_VAR: &str = "FRUIT_JAR_HTTP_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_url: String,
    pub timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; invalid values fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_VAR) {
            let url = url.trim().trim_end_matches('/');
            if url.is_empty() {
                tracing::warn!("{} is empty, using {}", API_URL_VAR, DEFAULT_API_URL);
            } else {
                config.api_url = url.to_string();
            }
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => tracing::warn!(
                    "invalid {}={:?}, using {}s",
                    TIMEOUT_VAR,
                    raw,
                    DEFAULT_TIMEOUT_SECS
                ),
            }
        }

        config
    }
}
