//! One scan: group → detect → filter → rank.
//!
//! The scanner owns composition policy. Detectors report every positive
//! edge; the scanner drops edges under the configured minimum, optionally
//! drops low-volume opportunities, and sorts the rest by descending edge.
//! The sort is stable, so an unchanged input yields an identical list.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::grouping::group_by_event;
use super::strategy::{ScanContext, StrategyRegistry, STRATEGY_NAMES};
use crate::domain::{Market, Opportunity, Price, Volume};
use crate::error::{ConfigError, Result};

/// Configuration for detection and ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Minimum edge (profit per $1) to report.
    #[serde(default = "default_min_edge")]
    pub min_edge: Decimal,

    /// Minimum aggregate volume for the opt-in liquidity filter.
    #[serde(default)]
    pub min_liquidity: Decimal,

    /// Apply `min_liquidity` after detection. Off by default: the detection
    /// rules themselves never look at volume.
    #[serde(default)]
    pub enforce_min_liquidity: bool,

    /// Enabled strategy names.
    #[serde(default = "default_enabled")]
    pub enabled: Vec<String>,
}

fn default_min_edge() -> Decimal {
    Decimal::new(2, 2) // 0.02
}

fn default_enabled() -> Vec<String> {
    STRATEGY_NAMES.iter().map(|s| (*s).to_string()).collect()
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_edge: default_min_edge(),
            min_liquidity: Decimal::ZERO,
            enforce_min_liquidity: false,
            enabled: default_enabled(),
        }
    }
}

impl DetectionConfig {
    /// Check thresholds and strategy names.
    ///
    /// # Errors
    ///
    /// Returns a config error describing the first invalid value.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.min_edge < Decimal::ZERO || self.min_edge >= Decimal::ONE {
            return Err(ConfigError::InvalidValue {
                field: "min_edge",
                reason: "must be between 0 and 1".to_string(),
            }
            .into());
        }
        if self.min_liquidity < Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "min_liquidity",
                reason: "must be 0 or greater".to_string(),
            }
            .into());
        }
        StrategyRegistry::from_names(&self.enabled).map(|_| ())
    }
}

/// Result of scanning one batch of markets.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Markets examined.
    pub markets: usize,
    /// Event groups with 2+ members.
    pub groups: usize,
    /// Opportunities found before filtering.
    pub detected: usize,
    /// Filtered opportunities, best edge first.
    pub opportunities: Vec<Opportunity>,
}

/// Runs the enabled strategies over a batch of markets.
pub struct Scanner {
    registry: StrategyRegistry,
    config: DetectionConfig,
}

impl Scanner {
    /// Create a scanner from an explicit registry.
    pub fn new(registry: StrategyRegistry, config: DetectionConfig) -> Self {
        Self { registry, config }
    }

    /// Create a scanner with the strategies named in the config.
    ///
    /// # Errors
    ///
    /// Returns a config error if a strategy name is unknown.
    #[allow(clippy::result_large_err)]
    pub fn from_config(config: DetectionConfig) -> Result<Self> {
        let registry = StrategyRegistry::from_names(&config.enabled)?;
        Ok(Self::new(registry, config))
    }

    /// Get the detection configuration.
    pub const fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Get the strategy registry.
    pub const fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    /// Scan a batch of markets.
    pub fn scan(&self, markets: &[Market]) -> ScanReport {
        let groups = group_by_event(markets);
        let ctx = ScanContext::new(markets, &groups);

        let detected = self.registry.detect_all(&ctx);
        let detected_count = detected.len();

        let mut opportunities = filter_by_min_edge(detected, self.config.min_edge);
        if self.config.enforce_min_liquidity {
            opportunities = filter_by_liquidity(opportunities, self.config.min_liquidity);
        }
        rank_by_edge(&mut opportunities);

        debug!(
            markets = markets.len(),
            groups = groups.len(),
            detected = detected_count,
            reported = opportunities.len(),
            "Scan complete"
        );

        ScanReport {
            markets: markets.len(),
            groups: groups.len(),
            detected: detected_count,
            opportunities,
        }
    }
}

/// Keep opportunities whose edge is at least `min_edge`.
pub fn filter_by_min_edge(opportunities: Vec<Opportunity>, min_edge: Price) -> Vec<Opportunity> {
    opportunities
        .into_iter()
        .filter(|o| o.edge() >= min_edge)
        .collect()
}

/// Keep opportunities whose aggregate volume is at least `min_volume`.
pub fn filter_by_liquidity(
    opportunities: Vec<Opportunity>,
    min_volume: Volume,
) -> Vec<Opportunity> {
    opportunities
        .into_iter()
        .filter(|o| o.volume() >= min_volume)
        .collect()
}

/// Sort by descending edge, keeping detection order among ties.
pub fn rank_by_edge(opportunities: &mut [Opportunity]) {
    opportunities.sort_by(|a, b| b.edge().cmp(&a.edge()));
}
