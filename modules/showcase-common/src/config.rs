use std::env;

use portfolio_client::DEFAULT_BASE_URL;

use crate::error::ConfigError;

/// Application configuration loaded from environment variables.
///
/// Resolved once at startup and passed explicitly to whatever needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Content backend
    pub backend_url: String,

    // Web server
    pub web_host: String,
    pub web_port: u16,
}

impl Config {
    /// Load configuration from the process environment (and `.env`, if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset or blank keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let backend_url = get("BACKEND_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let web_host = get("WEB_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let web_port = match get("WEB_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort {
                    key: "WEB_PORT",
                    value: raw.clone(),
                })?,
            None => 3000,
        };

        Ok(Self {
            backend_url,
            web_host,
            web_port,
        })
    }

    pub fn log_summary(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  BACKEND_URL: {}", self.backend_url);
        tracing::info!("  WEB_HOST: {}", self.web_host);
        tracing::info!("  WEB_PORT: {}", self.web_port);
    }
}
