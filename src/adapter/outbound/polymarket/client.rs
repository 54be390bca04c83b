//! Polymarket Gamma API client.
//!
//! Market discovery only: one `GET /markets` per fetch, no pagination and
//! no retries. A failed request fails the caller's current cycle.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, info, warn};

use super::response::{decode_markets, GammaMarket};
use super::settings::PolymarketConfig;
use crate::domain::Market;
use crate::error::Result;
use crate::port::MarketFetcher;

/// HTTP client for the Polymarket Gamma API.
pub struct PolymarketClient {
    http: HttpClient,
    gamma_url: String,
}

impl PolymarketClient {
    /// Create a client with default HTTP settings.
    ///
    /// # Arguments
    ///
    /// * `gamma_url` - The Gamma API base URL
    ///   (e.g., `https://gamma-api.polymarket.com`)
    #[must_use]
    pub fn new(gamma_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            gamma_url: gamma_url.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &PolymarketConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            gamma_url: config.gamma_api_url.clone(),
        }
    }

    /// Fetch active, unclosed markets from the Gamma API.
    pub async fn get_gamma_markets(&self, limit: usize) -> Result<Vec<GammaMarket>> {
        let url = format!(
            "{}/markets?active=true&closed=false&limit={}",
            self.gamma_url.trim_end_matches('/'),
            limit
        );

        info!(url = %url, "Fetching active markets (Gamma)");

        let values: Vec<serde_json::Value> = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        let received = values.len();
        let markets = decode_markets(values);
        debug!(received, count = markets.len(), "Fetched markets from Gamma");

        Ok(markets)
    }
}

#[async_trait]
impl MarketFetcher for PolymarketClient {
    async fn get_markets(&self, limit: usize) -> Result<Vec<Market>> {
        let markets = self.get_gamma_markets(limit).await?;
        Ok(markets.into_iter().map(Market::from).collect())
    }

    fn exchange_name(&self) -> &'static str {
        "Polymarket"
    }
}
