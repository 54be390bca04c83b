//! Market-related domain types.
//!
//! - [`Market`] - A quoted prediction market with N outcomes
//! - [`OutcomePrices`] - Outcome prices as delivered by the data provider
//! - [`PriceValue`] - One raw price entry (number or numeric text)
//!
//! Prices are kept in their delivered shape and decoded on demand, so each
//! detection rule can apply its own policy for malformed input: the binary
//! and correlated rules substitute [`NEUTRAL_PRICE`] per entry, while the
//! mutually-exclusive rule requires a fully decodable sequence.

use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::id::MarketId;
use super::money::{Price, Volume, NEUTRAL_PRICE};

/// One raw price entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    /// A JSON number, e.g. `0.65`.
    Number(f64),
    /// Numeric text, e.g. `"0.65"`.
    Text(String),
    /// Anything else (`null`, objects, booleans). Never a valid price.
    Malformed(serde_json::Value),
}

impl PriceValue {
    /// Parse into a price in `[0, 1]`, or `None` if malformed or out of range.
    #[must_use]
    pub fn to_price(&self) -> Option<Price> {
        let value = match self {
            Self::Number(n) => Decimal::from_f64(*n)?,
            Self::Text(s) => Decimal::from_str(s.trim()).ok()?,
            Self::Malformed(_) => return None,
        };
        (Decimal::ZERO..=Decimal::ONE).contains(&value).then_some(value)
    }
}

impl From<&str> for PriceValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<f64> for PriceValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// Outcome prices in the shape the provider delivered them.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum OutcomePrices {
    /// A literal sequence of entries.
    Listed(Vec<PriceValue>),
    /// A text-encoded JSON array, e.g. `"[\"0.65\", \"0.35\"]"`.
    Encoded(String),
    /// No price field at all.
    #[default]
    Missing,
}

impl OutcomePrices {
    /// Build a listed sequence from numeric text entries.
    pub fn from_text<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::Listed(
            entries
                .into_iter()
                .map(|s| PriceValue::from(s.as_ref()))
                .collect(),
        )
    }

    /// Decode into raw entries. `None` when the encoded text is not a JSON array.
    #[must_use]
    pub fn entries(&self) -> Option<Vec<PriceValue>> {
        match self {
            Self::Listed(values) => Some(values.clone()),
            Self::Encoded(text) => serde_json::from_str::<Vec<PriceValue>>(text)
                .map_err(|e| {
                    debug!(error = %e, raw = %text, "Failed to decode outcome prices");
                })
                .ok(),
            Self::Missing => None,
        }
    }
}

/// A quoted prediction market.
///
/// Recomputed every scan from provider data and discarded afterwards.
///
/// The price sequence is expected to be the same length as the outcome
/// labels; a mismatch is tolerated and only affects outcome-count-sensitive
/// rules.
#[derive(Debug, Clone)]
pub struct Market {
    id: MarketId,
    question: String,
    outcomes: Vec<String>,
    prices: OutcomePrices,
    volume: Volume,
}

impl Market {
    /// Create a new market.
    pub fn new(
        id: MarketId,
        question: impl Into<String>,
        outcomes: Vec<String>,
        prices: OutcomePrices,
        volume: Volume,
    ) -> Self {
        Self {
            id,
            question: question.into(),
            outcomes,
            prices,
            volume,
        }
    }

    /// Create a YES/NO market from textual prices.
    pub fn binary(
        id: impl Into<MarketId>,
        question: impl Into<String>,
        yes: &str,
        no: &str,
        volume: Volume,
    ) -> Self {
        Self::new(
            id.into(),
            question,
            vec!["Yes".to_string(), "No".to_string()],
            OutcomePrices::from_text([yes, no]),
            volume,
        )
    }

    /// Get the market ID.
    #[must_use]
    pub const fn id(&self) -> &MarketId {
        &self.id
    }

    /// Get the market question.
    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Get the outcome labels in order.
    #[must_use]
    pub fn outcomes(&self) -> &[String] {
        &self.outcomes
    }

    /// Number of declared outcomes.
    #[must_use]
    pub fn outcome_count(&self) -> usize {
        self.outcomes.len()
    }

    /// Get the raw outcome prices.
    #[must_use]
    pub const fn prices(&self) -> &OutcomePrices {
        &self.prices
    }

    /// Get the trading volume.
    #[must_use]
    pub const fn volume(&self) -> Volume {
        self.volume
    }

    /// Price at `index`, or [`NEUTRAL_PRICE`] when absent or malformed.
    #[must_use]
    pub fn price_or_neutral(&self, index: usize) -> Price {
        self.prices
            .entries()
            .and_then(|entries| entries.get(index).and_then(PriceValue::to_price))
            .unwrap_or(NEUTRAL_PRICE)
    }

    /// First outcome price (YES side of a binary market).
    #[must_use]
    pub fn yes_price(&self) -> Price {
        self.price_or_neutral(0)
    }

    /// Second outcome price (NO side of a binary market).
    #[must_use]
    pub fn no_price(&self) -> Price {
        self.price_or_neutral(1)
    }

    /// Every outcome price, strictly decoded.
    ///
    /// Returns `None` if the prices cannot be decoded, any entry is
    /// malformed, or the count differs from the number of outcome labels.
    #[must_use]
    pub fn outcome_prices(&self) -> Option<Vec<Price>> {
        let entries = self.prices.entries()?;
        if entries.len() != self.outcomes.len() {
            return None;
        }
        entries.iter().map(PriceValue::to_price).collect()
    }
}
