//! Application configuration loading from environment variables.
//!
//! All configuration is read once at startup through `std::env::var`, after
//! `dotenvy` has loaded an optional `.env` file.
//!
//! # Environment Variables
//!
//! All variables are optional.
//! - `RUST_LOG`: Logging level (default: "info,contributors_api=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 3000)
//! - `CONTRIBUTORS_URL`: Upstream contributors JSON document
//!   (default: the CodingGarden community contributors file on GitHub)
//! - `UPSTREAM_TIMEOUT_SECONDS`: Timeout for the upstream request (default: 10)
//! - `UPSTREAM_USER_AGENT`: User-Agent sent upstream (default: "contributors-api/<version>")
//! - `ALLOWED_ORIGINS`: Comma-separated CORS origins for release builds (default: none)

use std::time::Duration;

pub const DEFAULT_CONTRIBUTORS_URL: &str =
    "https://raw.githubusercontent.com/CodingGardenCommunity/contributors/master/contributors.json";

/// Complete server configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Remote JSON document holding the contributor list
    pub contributors_url: String,

    /// Seconds to wait for the upstream document before giving up
    pub upstream_timeout_seconds: u64,

    /// HTTP User-Agent for upstream requests
    pub upstream_user_agent: String,

    /// Origins allowed by CORS outside debug builds
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed to the
    /// expected type.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env_or("HOST", "0.0.0.0".to_string())?,
            port: env_or("PORT", 3000)?,
            contributors_url: env_or("CONTRIBUTORS_URL", DEFAULT_CONTRIBUTORS_URL.to_string())?,
            upstream_timeout_seconds: env_or("UPSTREAM_TIMEOUT_SECONDS", 10)?,
            upstream_user_agent: env_or("UPSTREAM_USER_AGENT", default_user_agent())?,
            allowed_origins: std::env::var("ALLOWED_ORIGINS")
                .map(|raw| parse_list(&raw))
                .unwrap_or_default(),
        })
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_seconds)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            contributors_url: DEFAULT_CONTRIBUTORS_URL.to_string(),
            upstream_timeout_seconds: 10,
            upstream_user_agent: default_user_agent(),
            allowed_origins: Vec::new(),
        }
    }
}

fn default_user_agent() -> String {
    format!("contributors-api/{}", env!("CARGO_PKG_VERSION"))
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Load an environment variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
