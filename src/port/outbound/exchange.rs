//! Exchange port for market data.
//!
//! The scanner only reads: a [`MarketFetcher`] returns a snapshot of quoted
//! markets and the application layer does the rest.

use async_trait::async_trait;

use crate::domain::Market;
use crate::error::Error;

/// Fetches active markets from a prediction-market venue.
///
/// Implementations map the venue's wire format into [`Market`] values and
/// leave price decoding to the domain, so malformed quotes reach the
/// detection rules unchanged.
#[async_trait]
pub trait MarketFetcher: Send + Sync {
    /// Fetch active, unclosed markets.
    ///
    /// # Arguments
    ///
    /// * `limit` - Maximum number of markets to fetch
    async fn get_markets(&self, limit: usize) -> Result<Vec<Market>, Error>;

    /// Get the exchange name for logging/debugging.
    fn exchange_name(&self) -> &'static str;
}
