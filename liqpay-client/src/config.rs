//! Configuration loading from environment.

use std::env;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    #[error("Invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Settings for [`HttpTransport`](crate::HttpTransport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Full URL the signed payload is posted to
    pub endpoint: String,
    pub timeout: Duration,
    /// Content type of the signed body
    pub content_type: String,
}

impl TransportConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Loads configuration from environment variables, reading `.env` first if present.
    ///
    /// - `LIQPAY_API_URL` (required)
    /// - `LIQPAY_TIMEOUT_SECS` (default 30, must be positive)
    /// - `LIQPAY_CONTENT_TYPE` (default `application/x-www-form-urlencoded`)
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup("LIQPAY_API_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("LIQPAY_API_URL"))?;

        let mut config = Self::new(endpoint);

        if let Some(raw) = lookup("LIQPAY_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::Invalid {
                    var: "LIQPAY_TIMEOUT_SECS",
                    value: raw.clone(),
                })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(content_type) = lookup("LIQPAY_CONTENT_TYPE") {
            config.content_type = content_type;
        }

        Ok(config)
    }
}
