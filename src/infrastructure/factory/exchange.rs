//! Market fetcher factory.

use std::sync::Arc;

use crate::adapter::outbound::polymarket::PolymarketClient;
use crate::infrastructure::config::settings::Config;
use crate::port::MarketFetcher;

/// Build the market fetcher for the configured venue.
pub fn build_market_fetcher(config: &Config) -> Arc<dyn MarketFetcher> {
    Arc::new(PolymarketClient::from_config(&config.polymarket))
}
