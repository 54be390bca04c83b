//! Basic (single-condition) arbitrage strategy.
//!
//! Detects when YES + NO < $1.00. One side always resolves true, so holding
//! both pays exactly $1.00. Runs on every market; for multi-outcome markets
//! YES and NO are simply the first two listed prices.

use rust_decimal::Decimal;

use super::{ScanContext, Strategy};
use crate::domain::{Market, Opportunity, OpportunityKind};

/// Basic arbitrage detector.
#[derive(Debug, Default)]
pub struct BasicStrategy;

impl BasicStrategy {
    /// Create a new strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Strategy for BasicStrategy {
    fn kind(&self) -> OpportunityKind {
        OpportunityKind::Basic
    }

    fn detect(&self, ctx: &ScanContext<'_>) -> Vec<Opportunity> {
        ctx.markets()
            .iter()
            .filter_map(detect_basic_arb)
            .collect()
    }
}

/// Core detection logic for basic arbitrage.
///
/// YES is the first outcome price and NO the second; either falls back to
/// the neutral 0.5 when missing or malformed.
///
/// # Returns
/// `Some(Opportunity)` with edge `1 - (yes + no)` if that edge is positive,
/// `None` otherwise.
pub fn detect_basic_arb(market: &Market) -> Option<Opportunity> {
    let yes = market.yes_price();
    let no = market.no_price();
    let cost = yes + no;

    // No arbitrage if cost >= $1
    if cost >= Decimal::ONE {
        return None;
    }

    Opportunity::builder()
        .kind(OpportunityKind::Basic)
        .name(market.question())
        .prices(vec![yes, no])
        .cost(cost)
        .payout(Decimal::ONE)
        .volume(market.volume())
        .strategy(format!("Buy YES @ {yes} + NO @ {no}"))
        .build()
        .ok()
}
