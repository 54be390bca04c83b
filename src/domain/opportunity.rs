//! Opportunity type with builder pattern.
//!
//! This module provides the `Opportunity` struct representing a detected
//! arbitrage opportunity, along with `OpportunityBuilder` for safe construction.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use super::id::EventKey;
use super::money::{Price, Volume};

/// Which detection rule produced an opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityKind {
    /// YES + NO below the unit payout in one binary market.
    Basic,
    /// NO positions across date-variant markets of one event.
    CorrelatedDate,
    /// Every outcome of a 3+ outcome market below the unit payout.
    MutuallyExclusive,
}

impl OpportunityKind {
    /// Stable identifier used in identity keys, config and output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::CorrelatedDate => "correlated_date",
            Self::MutuallyExclusive => "mutually_exclusive",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::CorrelatedDate => "Correlated Date",
            Self::MutuallyExclusive => "Mutually Exclusive",
        }
    }

    /// Edge implied by a cost and guaranteed payout.
    ///
    /// Basic and mutually-exclusive edges are `payout - cost` per unit bought.
    /// The correlated-date edge is averaged over the markets in the group,
    /// which makes it a conservative lower bound rather than an exact payout
    /// model.
    #[must_use]
    pub fn edge(self, cost: Price, payout: Price, market_count: usize) -> Price {
        match self {
            Self::Basic | Self::MutuallyExclusive => payout - cost,
            Self::CorrelatedDate => {
                if market_count == 0 {
                    return Decimal::ZERO;
                }
                (payout - cost) / Decimal::from(market_count)
            }
        }
    }
}

impl fmt::Display for OpportunityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when building an Opportunity fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpportunityBuildError {
    /// Kind is required but was not provided.
    MissingKind,
    /// Name is required but was not provided.
    MissingName,
    /// Cost is required but was not provided.
    MissingCost,
    /// Payout is required but was not provided.
    MissingPayout,
    /// At least one price is required.
    MissingPrices,
    /// The computed edge is not positive, so there is nothing to report.
    NonPositiveEdge { edge: Decimal },
}

impl fmt::Display for OpportunityBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKind => write!(f, "kind is required"),
            Self::MissingName => write!(f, "name is required"),
            Self::MissingCost => write!(f, "cost is required"),
            Self::MissingPayout => write!(f, "payout is required"),
            Self::MissingPrices => write!(f, "at least one price is required"),
            Self::NonPositiveEdge { edge } => write!(f, "edge must be positive, got {edge}"),
        }
    }
}

impl std::error::Error for OpportunityBuildError {}

/// A detected arbitrage opportunity.
///
/// Use `Opportunity::builder()` to construct instances. The builder computes
/// the edge from cost, payout and kind, and refuses to build when the edge
/// is not strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Opportunity {
    kind: OpportunityKind,
    name: String,
    edge: Price,
    cost: Price,
    payout: Price,
    prices: Vec<Price>,
    market_count: usize,
    volume: Volume,
    strategy: String,
    key: String,
}

impl Opportunity {
    /// Create a new builder for constructing an Opportunity.
    pub fn builder() -> OpportunityBuilder {
        OpportunityBuilder::new()
    }

    /// Which rule produced this opportunity.
    pub const fn kind(&self) -> OpportunityKind {
        self.kind
    }

    /// Human-readable name (market question).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Guaranteed profit as a fraction of the unit payout.
    pub const fn edge(&self) -> Price {
        self.edge
    }

    /// Total cost of every leg.
    pub const fn cost(&self) -> Price {
        self.cost
    }

    /// Guaranteed payout in the worst case.
    pub const fn payout(&self) -> Price {
        self.payout
    }

    /// Prices used, in leg order.
    pub fn prices(&self) -> &[Price] {
        &self.prices
    }

    /// Number of markets involved.
    pub const fn market_count(&self) -> usize {
        self.market_count
    }

    /// Aggregate trading volume of the markets involved.
    pub const fn volume(&self) -> Volume {
        self.volume
    }

    /// Description of the trades that lock in the edge.
    pub fn strategy(&self) -> &str {
        &self.strategy
    }

    /// Identity key used to suppress repeat alerts.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Builder for constructing `Opportunity` instances.
///
/// # Example
///
/// ```ignore
/// let opportunity = Opportunity::builder()
///     .kind(OpportunityKind::Basic)
///     .name("Will X happen?")
///     .prices(vec![yes, no])
///     .cost(yes + no)
///     .payout(Decimal::ONE)
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct OpportunityBuilder {
    kind: Option<OpportunityKind>,
    name: Option<String>,
    event_key: Option<EventKey>,
    cost: Option<Price>,
    payout: Option<Price>,
    prices: Vec<Price>,
    market_count: Option<usize>,
    volume: Volume,
    strategy: Option<String>,
}

impl OpportunityBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the opportunity kind.
    pub fn kind(mut self, kind: OpportunityKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Key the identity on an event rather than the name.
    pub fn event_key(mut self, key: EventKey) -> Self {
        self.event_key = Some(key);
        self
    }

    /// Set the total cost.
    pub fn cost(mut self, cost: Price) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Set the guaranteed payout.
    pub fn payout(mut self, payout: Price) -> Self {
        self.payout = Some(payout);
        self
    }

    /// Set the prices used, in leg order.
    pub fn prices(mut self, prices: Vec<Price>) -> Self {
        self.prices = prices;
        self
    }

    /// Set the number of markets involved (defaults to 1).
    pub fn market_count(mut self, count: usize) -> Self {
        self.market_count = Some(count);
        self
    }

    /// Set the aggregate volume (defaults to 0).
    pub fn volume(mut self, volume: Volume) -> Self {
        self.volume = volume;
        self
    }

    /// Set the strategy description.
    pub fn strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = Some(strategy.into());
        self
    }

    /// Build the Opportunity, calculating the edge and identity key.
    ///
    /// # Errors
    ///
    /// Returns `OpportunityBuildError` if any required field is missing or
    /// the edge is not strictly positive.
    pub fn build(self) -> Result<Opportunity, OpportunityBuildError> {
        let kind = self.kind.ok_or(OpportunityBuildError::MissingKind)?;
        let name = self.name.ok_or(OpportunityBuildError::MissingName)?;
        let cost = self.cost.ok_or(OpportunityBuildError::MissingCost)?;
        let payout = self.payout.ok_or(OpportunityBuildError::MissingPayout)?;
        if self.prices.is_empty() {
            return Err(OpportunityBuildError::MissingPrices);
        }
        let market_count = self.market_count.unwrap_or(1);

        let edge = kind.edge(cost, payout, market_count);
        if edge <= Decimal::ZERO {
            return Err(OpportunityBuildError::NonPositiveEdge { edge });
        }

        let key = match &self.event_key {
            Some(event) => format!("{kind}:{event}"),
            None => format!("{kind}:{name}"),
        };

        Ok(Opportunity {
            kind,
            name,
            edge,
            cost,
            payout,
            prices: self.prices,
            market_count,
            volume: self.volume,
            strategy: self.strategy.unwrap_or_default(),
            key,
        })
    }
}
