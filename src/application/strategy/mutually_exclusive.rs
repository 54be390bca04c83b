//! Mutually-exclusive (market rebalancing) arbitrage strategy.
//!
//! Detects when the sum of all outcome prices < $1.00 in a market with three
//! or more outcomes. Exactly one outcome resolves true, so holding every
//! outcome pays exactly $1.00.

use rust_decimal::Decimal;

use super::{ScanContext, Strategy};
use crate::domain::{Market, Opportunity, OpportunityKind, Price};

/// Minimum number of outcomes for a market to be priced as a partition.
pub const MIN_OUTCOMES: usize = 3;

/// Mutually-exclusive arbitrage detector.
#[derive(Debug, Default)]
pub struct MutuallyExclusiveStrategy;

impl MutuallyExclusiveStrategy {
    /// Create a new strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Strategy for MutuallyExclusiveStrategy {
    fn kind(&self) -> OpportunityKind {
        OpportunityKind::MutuallyExclusive
    }

    fn detect(&self, ctx: &ScanContext<'_>) -> Vec<Opportunity> {
        ctx.markets()
            .iter()
            .filter_map(detect_mutually_exclusive_arb)
            .collect()
    }
}

/// Core detection logic for mutually-exclusive arbitrage.
///
/// Prices must decode to exactly one valid price per outcome; anything else
/// (undecodable text, malformed entries, length mismatch) is no signal.
///
/// # Returns
/// `Some(Opportunity)` with edge `1 - sum(prices)` if positive, `None`
/// otherwise.
pub fn detect_mutually_exclusive_arb(market: &Market) -> Option<Opportunity> {
    if market.outcome_count() < MIN_OUTCOMES {
        return None;
    }

    let prices = market.outcome_prices()?;
    let cost: Price = prices.iter().copied().sum();

    if cost >= Decimal::ONE {
        return None;
    }

    let outcomes = prices.len();
    Opportunity::builder()
        .kind(OpportunityKind::MutuallyExclusive)
        .name(market.question())
        .prices(prices)
        .cost(cost)
        .payout(Decimal::ONE)
        .volume(market.volume())
        .strategy(format!("Buy all {outcomes} outcomes"))
        .build()
        .ok()
}
