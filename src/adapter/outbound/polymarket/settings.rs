//! Polymarket market-data configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Gamma API connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolymarketConfig {
    /// Gamma API base URL (market discovery).
    #[serde(default = "default_gamma_api_url")]
    pub gamma_api_url: String,
    /// Markets requested per fetch.
    #[serde(default = "default_market_limit")]
    pub market_limit: usize,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

fn default_gamma_api_url() -> String {
    "https://gamma-api.polymarket.com".into()
}

const fn default_market_limit() -> usize {
    500
}

const fn default_timeout_ms() -> u64 {
    10_000
}

const fn default_connect_timeout_ms() -> u64 {
    5_000
}

impl Default for PolymarketConfig {
    fn default() -> Self {
        Self {
            gamma_api_url: default_gamma_api_url(),
            market_limit: default_market_limit(),
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}

impl PolymarketConfig {
    /// Check the endpoint and fetch size.
    ///
    /// # Errors
    ///
    /// Returns a config error for an empty URL or a zero market limit.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.gamma_api_url.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "gamma_api_url",
            }
            .into());
        }
        if self.market_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "market_limit",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
