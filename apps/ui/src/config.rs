use anyhow::{Context, Result};

/// Client configuration loaded from environment variables (and `.env` if
/// present). Everything has a sensible default; nothing is required.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the matching backend, without a trailing slash.
    pub api_base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Log file path. The TUI owns the terminal, so logs go to a file.
    pub log_file: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_base_url: env_or("MATCHER_API_URL", "http://127.0.0.1:8000")
                .trim_end_matches('/')
                .to_string(),
            timeout_secs: env_or("MATCHER_TIMEOUT_SECS", "30")
                .parse::<u64>()
                .context("MATCHER_TIMEOUT_SECS must be a number of seconds")?,
            log_file: env_or("MATCHER_LOG_FILE", "matcher-ui.log"),
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
