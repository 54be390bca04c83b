//! Gamma API response types.
//!
//! Gamma returns a flat JSON array of markets. `outcomes` and
//! `outcomePrices` arrive as JSON-encoded text (`"[\"0.65\", \"0.35\"]"`);
//! other deployments send literal arrays. Both shapes are accepted here and
//! price decoding is left to the domain.
//!
//! Every field is decoded leniently: an unexpected type degrades that field
//! to its malformed or missing form instead of failing the market, and
//! [`decode_markets`] skips array elements that are not objects at all.

use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{Market, MarketId, OutcomePrices, PriceValue, Volume};

/// Market data from the Gamma API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GammaMarket {
    /// Condition ID (preferred identifier).
    #[serde(default, deserialize_with = "lenient_string")]
    pub condition_id: Option<String>,
    /// Gamma's numeric market ID, sent as a number or text.
    #[serde(default)]
    pub id: Option<ScalarValue>,
    /// Market question.
    #[serde(default, deserialize_with = "lenient_string")]
    pub question: Option<String>,
    /// Whether the market is active.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub active: bool,
    /// Whether the market is closed.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub closed: bool,
    /// Outcome names, encoded or literal.
    #[serde(default)]
    pub outcomes: Option<RawOutcomes>,
    /// Outcome prices, encoded or literal.
    #[serde(default)]
    pub outcome_prices: Option<RawPrices>,
    /// Total all-time volume in USD.
    #[serde(default)]
    pub volume_num: Option<ScalarValue>,
    /// Total volume as sent by older payloads.
    #[serde(default)]
    pub volume: Option<ScalarValue>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    })
}

/// A number or numeric text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Number(f64),
    Text(String),
    Malformed(Value),
}

impl ScalarValue {
    fn to_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Number(n) => Decimal::from_f64(*n),
            Self::Text(s) => Decimal::from_str(s.trim()).ok(),
            Self::Malformed(_) => None,
        }
    }

    fn to_id(&self) -> Option<String> {
        match self {
            Self::Number(n) => Some(n.to_string()),
            Self::Text(s) => Some(s.clone()),
            Self::Malformed(_) => None,
        }
    }
}

/// Outcome names as delivered.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawOutcomes {
    Listed(Vec<String>),
    Encoded(String),
    Malformed(Value),
}

/// Outcome prices as delivered.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawPrices {
    Listed(Vec<PriceValue>),
    Encoded(String),
    Malformed(Value),
}

/// Decode a Gamma `/markets` payload element by element.
///
/// Elements that are not market objects are logged and skipped; the rest of
/// the batch is kept.
pub fn decode_markets(values: Vec<Value>) -> Vec<GammaMarket> {
    let mut markets = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        match GammaMarket::deserialize(value) {
            Ok(market) => markets.push(market),
            Err(e) => warn!(index, error = %e, "Skipping undecodable market"),
        }
    }
    markets
}

impl GammaMarket {
    /// Identifier: condition ID, else Gamma ID, else empty.
    pub fn market_id(&self) -> MarketId {
        self.condition_id
            .clone()
            .or_else(|| self.id.as_ref().and_then(ScalarValue::to_id))
            .map(MarketId::new)
            .unwrap_or_default()
    }

    /// Decoded outcome labels. Empty when missing or undecodable.
    pub fn outcome_names(&self) -> Vec<String> {
        match &self.outcomes {
            Some(RawOutcomes::Listed(names)) => names.clone(),
            Some(RawOutcomes::Encoded(text)) => serde_json::from_str::<Vec<String>>(text)
                .map_err(|e| {
                    debug!(
                        error = %e,
                        raw = %text,
                        market_id = %self.market_id(),
                        "Failed to parse outcomes"
                    );
                })
                .unwrap_or_default(),
            Some(RawOutcomes::Malformed(raw)) => {
                debug!(
                    raw = %raw,
                    market_id = %self.market_id(),
                    "Unexpected outcomes shape"
                );
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    /// Prices in their delivered shape.
    pub fn prices(&self) -> OutcomePrices {
        match &self.outcome_prices {
            Some(RawPrices::Listed(values)) => OutcomePrices::Listed(values.clone()),
            Some(RawPrices::Encoded(text)) => OutcomePrices::Encoded(text.clone()),
            Some(RawPrices::Malformed(raw)) => {
                debug!(
                    raw = %raw,
                    market_id = %self.market_id(),
                    "Unexpected outcome prices shape"
                );
                OutcomePrices::Missing
            }
            None => OutcomePrices::Missing,
        }
    }

    /// Volume: `volumeNum`, else `volume`, else zero.
    pub fn total_volume(&self) -> Volume {
        self.volume_num
            .as_ref()
            .and_then(ScalarValue::to_decimal)
            .or_else(|| self.volume.as_ref().and_then(ScalarValue::to_decimal))
            .unwrap_or(Decimal::ZERO)
    }
}

impl From<GammaMarket> for Market {
    fn from(m: GammaMarket) -> Self {
        let id = m.market_id();
        let outcomes = m.outcome_names();
        let prices = m.prices();
        let volume = m.total_volume();
        Market::new(id, m.question.unwrap_or_default(), outcomes, prices, volume)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn gamma_market_deserializes_from_api_response() {
        let json = r#"{
            "id": "512345",
            "conditionId": "0xabc123",
            "question": "Will X happen?",
            "active": true,
            "closed": false,
            "outcomes": "[\"Yes\", \"No\"]",
            "outcomePrices": "[\"0.65\", \"0.35\"]",
            "volume": "1081783.6",
            "volumeNum": 1081783.60
        }"#;

        let market: Market = serde_json::from_str::<GammaMarket>(json).unwrap().into();

        assert_eq!(market.id().as_str(), "0xabc123");
        assert_eq!(market.question(), "Will X happen?");
        assert_eq!(market.outcomes(), &["Yes".to_string(), "No".to_string()]);
        assert_eq!(market.yes_price(), dec!(0.65));
        assert_eq!(market.no_price(), dec!(0.35));
        assert_eq!(market.volume().round_dp(1), dec!(1081783.6));
    }

    #[test]
    fn gamma_market_accepts_literal_arrays() {
        let json = r#"{
            "conditionId": "0xlit",
            "question": "Who wins?",
            "outcomes": ["A", "B", "C"],
            "outcomePrices": [0.2, "0.3", 0.4]
        }"#;

        let market: Market = serde_json::from_str::<GammaMarket>(json).unwrap().into();

        assert_eq!(market.outcome_count(), 3);
        assert_eq!(
            market.outcome_prices(),
            Some(vec![dec!(0.2), dec!(0.3), dec!(0.4)])
        );
    }

    #[test]
    fn gamma_market_handles_missing_optional_fields() {
        let json = r#"{ "conditionId": "0xdef456" }"#;

        let gamma: GammaMarket = serde_json::from_str(json).unwrap();
        assert_eq!(gamma.prices(), OutcomePrices::Missing);

        let market = Market::from(gamma);
        assert_eq!(market.question(), "");
        assert!(market.outcomes().is_empty());
        assert_eq!(market.volume(), dec!(0));
    }

    #[test]
    fn id_falls_back_to_gamma_id() {
        let json = r#"{ "id": 42, "question": "Q" }"#;
        let gamma: GammaMarket = serde_json::from_str(json).unwrap();
        assert_eq!(gamma.market_id().as_str(), "42");
    }

    #[test]
    fn volume_falls_back_to_text_volume() {
        let json = r#"{ "conditionId": "0x1", "volume": "2500.5" }"#;
        let gamma: GammaMarket = serde_json::from_str(json).unwrap();
        assert_eq!(gamma.total_volume(), dec!(2500.5));
    }

    #[test]
    fn undecodable_outcomes_become_empty() {
        let json = r#"{ "conditionId": "0x1", "outcomes": "[Yes, No" }"#;
        let gamma: GammaMarket = serde_json::from_str(json).unwrap();
        assert!(gamma.outcome_names().is_empty());
    }

    #[test]
    fn encoded_prices_are_not_decoded_eagerly() {
        let json = r#"{ "conditionId": "0x1", "outcomePrices": "not json" }"#;
        let gamma: GammaMarket = serde_json::from_str(json).unwrap();
        assert_eq!(gamma.prices(), OutcomePrices::Encoded("not json".into()));
    }

    #[test]
    fn null_price_entry_is_malformed_not_fatal() {
        let json = r#"{
            "conditionId": "0x1",
            "outcomes": ["Yes", "No"],
            "outcomePrices": [0.4, null]
        }"#;

        let market: Market = serde_json::from_str::<GammaMarket>(json).unwrap().into();

        assert_eq!(market.yes_price(), dec!(0.4));
        assert_eq!(market.no_price(), dec!(0.5));
    }

    #[test]
    fn wrong_field_types_degrade_per_field() {
        let json = r#"{
            "conditionId": "0x1",
            "question": 17,
            "active": null,
            "closed": "false",
            "outcomes": {"a": 1},
            "outcomePrices": true,
            "volumeNum": [1],
            "volume": "300"
        }"#;

        let gamma: GammaMarket = serde_json::from_str(json).unwrap();

        assert!(!gamma.active);
        assert!(!gamma.closed);
        assert!(gamma.question.is_none());
        assert!(gamma.outcome_names().is_empty());
        assert_eq!(gamma.prices(), OutcomePrices::Missing);
        assert_eq!(gamma.total_volume(), dec!(300));
    }

    #[test]
    fn malformed_id_falls_back_to_empty() {
        let json = r#"{ "id": {"nested": true}, "question": "Q" }"#;
        let gamma: GammaMarket = serde_json::from_str(json).unwrap();
        assert_eq!(gamma.market_id().as_str(), "");
    }

    #[test]
    fn decode_markets_keeps_good_neighbours() {
        let values: Vec<Value> = serde_json::from_str(
            r#"[
                {"conditionId": "0xgood", "question": "Good?", "outcomePrices": "[\"0.4\", \"0.5\"]"},
                {"conditionId": "0xbad", "active": null, "outcomePrices": [0.4, null]},
                null,
                42
            ]"#,
        )
        .unwrap();

        let markets = decode_markets(values);

        assert_eq!(markets.len(), 2);
        assert_eq!(markets[0].market_id().as_str(), "0xgood");
        assert_eq!(markets[1].market_id().as_str(), "0xbad");
    }
}
