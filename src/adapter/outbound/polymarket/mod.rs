//! Polymarket market-data adapter.
//!
//! Fetches active markets from the Gamma REST API and maps them into
//! domain [`Market`](crate::domain::Market) values.

mod client;
mod response;
mod settings;

pub use client::PolymarketClient;
pub use response::{GammaMarket, RawOutcomes, RawPrices, ScalarValue};
pub use settings::PolymarketConfig;
