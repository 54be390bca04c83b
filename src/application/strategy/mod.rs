//! Strategy abstraction for arbitrage detection.
//!
//! Three independent detection rules, each a pure function wrapped by a
//! [`Strategy`] implementation:
//!
//! - **Basic**: first two outcome prices sum below $1
//! - **MutuallyExclusive**: sum of all outcomes < $1 in a 3+ outcome market
//! - **CorrelatedDate**: NO positions across date-variant markets of one event
//!
//! Detectors only gate on a strictly positive edge. Minimum-edge filtering
//! and ranking are applied by [`crate::application::scanner::Scanner`].
//!
//! # Example
//!
//! ```
//! use edgescan::application::strategy::{BasicStrategy, StrategyRegistry};
//!
//! let mut registry = StrategyRegistry::new();
//! registry.register(Box::new(BasicStrategy::new()));
//! assert_eq!(registry.len(), 1);
//! ```

pub mod basic;
pub mod correlated_date;
pub mod mutually_exclusive;

pub use basic::{detect_basic_arb, BasicStrategy};
pub use correlated_date::{detect_correlated_arb, CorrelatedDateStrategy};
pub use mutually_exclusive::{detect_mutually_exclusive_arb, MutuallyExclusiveStrategy};

use crate::domain::{EventGroup, Market, Opportunity, OpportunityKind};
use crate::error::{ConfigError, Result};

/// Names accepted in the `detection.enabled` config list.
pub const STRATEGY_NAMES: [&str; 3] = [
    OpportunityKind::Basic.as_str(),
    OpportunityKind::MutuallyExclusive.as_str(),
    OpportunityKind::CorrelatedDate.as_str(),
];

/// Everything a strategy can look at during one scan.
#[derive(Debug, Clone, Copy)]
pub struct ScanContext<'a> {
    markets: &'a [Market],
    groups: &'a [EventGroup<'a>],
}

impl<'a> ScanContext<'a> {
    /// Create a context over the current scan's markets and event groups.
    #[must_use]
    pub const fn new(markets: &'a [Market], groups: &'a [EventGroup<'a>]) -> Self {
        Self { markets, groups }
    }

    /// All quoted markets, in provider order.
    #[must_use]
    pub const fn markets(&self) -> &'a [Market] {
        self.markets
    }

    /// Event groups with two or more members.
    #[must_use]
    pub const fn groups(&self) -> &'a [EventGroup<'a>] {
        self.groups
    }
}

/// A detection strategy that finds arbitrage opportunities.
pub trait Strategy: Send + Sync {
    /// Unique identifier for this strategy.
    ///
    /// Used in configuration and logging.
    fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// The kind of opportunity this strategy produces.
    fn kind(&self) -> OpportunityKind;

    /// Detect opportunities given the current scan context.
    ///
    /// Returns all found opportunities (may be empty), in input order.
    fn detect(&self, ctx: &ScanContext<'_>) -> Vec<Opportunity>;
}

/// Registry of enabled strategies.
#[derive(Default)]
pub struct StrategyRegistry {
    strategies: Vec<Box<dyn Strategy>>,
}

impl StrategyRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every rule, in default order.
    #[must_use]
    pub fn with_all() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(BasicStrategy::new()));
        registry.register(Box::new(MutuallyExclusiveStrategy::new()));
        registry.register(Box::new(CorrelatedDateStrategy::new()));
        registry
    }

    /// Registry with the named rules, in default order.
    ///
    /// # Errors
    ///
    /// Returns a config error naming the first unknown strategy.
    #[allow(clippy::result_large_err)]
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        if let Some(unknown) = names
            .iter()
            .map(AsRef::as_ref)
            .find(|name| !STRATEGY_NAMES.contains(name))
        {
            return Err(ConfigError::InvalidValue {
                field: "enabled",
                reason: format!("unknown strategy '{unknown}'"),
            }
            .into());
        }

        let wanted = |name: &str| names.iter().any(|n| n.as_ref() == name);
        let mut registry = Self::new();
        for strategy in Self::with_all().strategies {
            if wanted(strategy.name()) {
                registry.register(strategy);
            }
        }
        Ok(registry)
    }

    /// Register a strategy.
    ///
    /// Strategies are run in registration order.
    pub fn register(&mut self, strategy: Box<dyn Strategy>) {
        self.strategies.push(strategy);
    }

    /// Get all registered strategies.
    pub fn strategies(&self) -> &[Box<dyn Strategy>] {
        &self.strategies
    }

    /// Names of registered strategies, in run order.
    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Number of registered strategies.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Run every registered strategy and collect opportunities.
    pub fn detect_all(&self, ctx: &ScanContext<'_>) -> Vec<Opportunity> {
        self.strategies
            .iter()
            .flat_map(|s| s.detect(ctx))
            .collect()
    }
}
