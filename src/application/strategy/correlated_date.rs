//! Correlated-date arbitrage strategy.
//!
//! Markets that ask the same question with different deadlines resolve
//! together: once the event happens, every later deadline resolves YES.
//! Buying NO on every date therefore pays on all dates except, in the worst
//! case, one. The worst-case payout is `n - 1` for a group of `n` markets.
//!
//! The edge reported is `(n - 1 - cost) / n`, a conservative lower bound
//! rather than an exact combinatorial payout model.

use rust_decimal::Decimal;

use super::{ScanContext, Strategy};
use crate::domain::{EventGroup, Opportunity, OpportunityKind, Price};

/// Correlated-date arbitrage detector over event groups.
#[derive(Debug, Default)]
pub struct CorrelatedDateStrategy;

impl CorrelatedDateStrategy {
    /// Create a new strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Strategy for CorrelatedDateStrategy {
    fn kind(&self) -> OpportunityKind {
        OpportunityKind::CorrelatedDate
    }

    fn detect(&self, ctx: &ScanContext<'_>) -> Vec<Opportunity> {
        ctx.groups().iter().filter_map(detect_correlated_arb).collect()
    }
}

/// Core detection logic for correlated-date arbitrage.
///
/// The "lose" price of each member is its NO price (second outcome, neutral
/// 0.5 when missing or malformed).
///
/// # Returns
/// `Some(Opportunity)` keyed on the group's event key if the group has at
/// least two members and the edge is positive, `None` otherwise.
pub fn detect_correlated_arb(group: &EventGroup<'_>) -> Option<Opportunity> {
    let size = group.len();
    if size < 2 {
        return None;
    }

    let prices: Vec<Price> = group.markets().iter().map(|m| m.no_price()).collect();
    let cost: Price = prices.iter().copied().sum();
    let min_payout = Decimal::from(size - 1);

    if OpportunityKind::CorrelatedDate.edge(cost, min_payout, size) <= Decimal::ZERO {
        return None;
    }

    let name = group.markets().first()?.question();

    Opportunity::builder()
        .kind(OpportunityKind::CorrelatedDate)
        .name(name)
        .event_key(group.key().clone())
        .prices(prices)
        .cost(cost)
        .payout(min_payout)
        .market_count(size)
        .volume(group.total_volume())
        .strategy(format!("Buy NO on all {size} dates"))
        .build()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::grouping::{canonical_event_key, group_by_event};
    use crate::domain::Market;
    use rust_decimal_macros::dec;

    fn dated(month: &str, no: &str) -> Market {
        let question = format!("Will the Fed cut rates by {month} 2026?");
        let yes = (Decimal::ONE - no.parse::<Decimal>().unwrap()).to_string();
        Market::binary(month, question, &yes, no, dec!(1000))
    }

    #[test]
    fn test_strategy_name() {
        assert_eq!(CorrelatedDateStrategy::new().name(), "correlated_date");
    }

    #[test]
    fn test_no_signal_when_lose_prices_too_high() {
        let markets = vec![
            dated("March", "0.82"),
            dated("April", "0.75"),
            dated("June", "0.62"),
        ];
        let groups = group_by_event(&markets);
        assert_eq!(groups.len(), 1);

        // cost 2.19, min payout 2 -> edge (2 - 2.19) / 3 < 0
        assert!(detect_correlated_arb(&groups[0]).is_none());
    }

    #[test]
    fn test_signal_when_lose_prices_cheap() {
        let markets = vec![
            dated("March", "0.30"),
            dated("April", "0.30"),
            dated("June", "0.30"),
        ];
        let groups = group_by_event(&markets);

        let opp = detect_correlated_arb(&groups[0]).unwrap();

        assert_eq!(opp.kind(), OpportunityKind::CorrelatedDate);
        assert_eq!(opp.cost(), dec!(0.90));
        assert_eq!(opp.payout(), dec!(2));
        assert_eq!(opp.edge().round_dp(3), dec!(0.367));
        assert_eq!(opp.market_count(), 3);
        assert_eq!(opp.volume(), dec!(3000));
        assert_eq!(opp.prices(), &[dec!(0.30), dec!(0.30), dec!(0.30)]);
        assert_eq!(opp.name(), "Will the Fed cut rates by March 2026?");
        assert_eq!(opp.strategy(), "Buy NO on all 3 dates");
        assert_eq!(
            opp.key(),
            format!(
                "correlated_date:{}",
                canonical_event_key("Will the Fed cut rates by March 2026?")
            )
        );
    }

    #[test]
    fn test_two_market_group() {
        // cost 0.8, payout 1 -> edge 0.1
        let markets = vec![dated("March", "0.40"), dated("April", "0.40")];
        let groups = group_by_event(&markets);

        let opp = detect_correlated_arb(&groups[0]).unwrap();
        assert_eq!(opp.edge(), dec!(0.10));
    }

    #[test]
    fn test_break_even_is_no_signal() {
        let markets = vec![dated("March", "0.50"), dated("April", "0.50")];
        let groups = group_by_event(&markets);
        assert!(detect_correlated_arb(&groups[0]).is_none());
    }

    #[test]
    fn test_single_member_group_is_no_signal() {
        let market = dated("March", "0.10");
        let group = EventGroup::new(canonical_event_key(market.question()), vec![&market]);
        assert!(detect_correlated_arb(&group).is_none());
    }

    #[test]
    fn test_strategy_detects_per_group() {
        let markets = vec![
            dated("March", "0.30"),
            dated("April", "0.30"),
            Market::binary("x", "Unrelated", "0.5", "0.5", dec!(0)),
        ];
        let groups = group_by_event(&markets);
        let ctx = ScanContext::new(&markets, &groups);

        assert_eq!(CorrelatedDateStrategy::new().detect(&ctx).len(), 1);
    }
}
