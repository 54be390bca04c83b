//! Continuous watch mode.
//!
//! Each cycle fetches a market snapshot, scans it, alerts on opportunities
//! the tracker has not seen, then enforces the tracker bound. A failed
//! fetch aborts only the current cycle; a failed notification is logged and
//! the opportunity still counts as reported.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::scanner::Scanner;
use super::tracker::{OpportunityTracker, DEFAULT_CAPACITY};
use crate::error::{ConfigError, Result};
use crate::port::{Alert, MarketFetcher, NotifierRegistry};

/// Watch loop configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Delay between cycles in seconds.
    #[serde(default = "default_scan_interval_secs")]
    pub scan_interval_secs: u64,

    /// Tracked keys before the tracker is cleared.
    #[serde(default = "default_tracker_capacity")]
    pub tracker_capacity: usize,
}

fn default_scan_interval_secs() -> u64 {
    60
}

fn default_tracker_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            scan_interval_secs: default_scan_interval_secs(),
            tracker_capacity: default_tracker_capacity(),
        }
    }
}

impl WatchConfig {
    /// Delay between cycles.
    #[must_use]
    pub const fn scan_interval(&self) -> Duration {
        Duration::from_secs(self.scan_interval_secs)
    }

    /// Check interval and capacity.
    ///
    /// # Errors
    ///
    /// Returns a config error if either value is zero.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.scan_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "scan_interval_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.tracker_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tracker_capacity",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Outcome of one watch cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Whether the market fetch failed (nothing else ran).
    pub fetch_failed: bool,
    /// Markets fetched.
    pub markets: usize,
    /// Event groups with 2+ members.
    pub groups: usize,
    /// Opportunities passing the scanner's filters.
    pub opportunities: usize,
    /// Opportunities alerted for the first time.
    pub alerted: usize,
    /// Notifier deliveries that failed.
    pub failed_notifications: usize,
    /// Whether the tracker was cleared at the end of the cycle.
    pub tracker_cleared: bool,
}

/// Owns the state of a continuous watch: fetcher, scanner, tracker and
/// notifiers.
pub struct WatchService {
    fetcher: Arc<dyn MarketFetcher>,
    market_limit: usize,
    scanner: Scanner,
    tracker: OpportunityTracker,
    notifiers: NotifierRegistry,
    interval: Duration,
}

impl WatchService {
    /// Create a watch service.
    pub fn new(
        fetcher: Arc<dyn MarketFetcher>,
        market_limit: usize,
        scanner: Scanner,
        notifiers: NotifierRegistry,
        config: &WatchConfig,
    ) -> Self {
        Self {
            fetcher,
            market_limit,
            scanner,
            tracker: OpportunityTracker::new(config.tracker_capacity),
            notifiers,
            interval: config.scan_interval(),
        }
    }

    /// Reported-opportunity tracker.
    #[must_use]
    pub const fn tracker(&self) -> &OpportunityTracker {
        &self.tracker
    }

    /// Forget every reported opportunity.
    pub fn reset_tracker(&mut self) {
        self.tracker.clear();
    }

    /// Run one fetch → scan → dedup → notify cycle.
    pub async fn run_cycle(&mut self) -> CycleReport {
        let exchange = self.fetcher.exchange_name();
        debug!(exchange, limit = self.market_limit, "Fetching markets");

        let markets = match self.fetcher.get_markets(self.market_limit).await {
            Ok(markets) => markets,
            Err(e) => {
                warn!(exchange, error = %e, "Market fetch failed, skipping cycle");
                return CycleReport {
                    fetch_failed: true,
                    ..Default::default()
                };
            }
        };
        debug!(exchange, count = markets.len(), "Markets fetched");

        let scan = self.scanner.scan(&markets);
        let fresh = self.tracker.filter_new(&scan.opportunities);
        let detected_at = Utc::now();

        let mut failed_notifications = 0;
        for opportunity in &fresh {
            let alert = Alert::new(opportunity, detected_at);
            failed_notifications += self.notifiers.notify_all(&alert).await;
            self.tracker.mark_seen(opportunity);
        }

        let tracker_cleared = self.tracker.enforce_bound();

        info!(
            markets = scan.markets,
            groups = scan.groups,
            opportunities = scan.opportunities.len(),
            new = fresh.len(),
            tracked = self.tracker.len(),
            "Cycle complete"
        );

        CycleReport {
            fetch_failed: false,
            markets: scan.markets,
            groups: scan.groups,
            opportunities: scan.opportunities.len(),
            alerted: fresh.len(),
            failed_notifications,
            tracker_cleared,
        }
    }

    /// Run cycles until the process ends.
    pub async fn run(&mut self) {
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);
        self.run_with_shutdown(shutdown_rx).await;
    }

    /// Run cycles until `shutdown` flips to `true` or its sender is dropped.
    ///
    /// Shutdown is observed between cycles: a cycle that has started always
    /// finishes its fetch, notifications and tracker update before the loop
    /// exits.
    pub async fn run_with_shutdown(&mut self, mut shutdown: watch::Receiver<bool>) {
        info!(
            exchange = self.fetcher.exchange_name(),
            interval_secs = self.interval.as_secs(),
            strategies = ?self.scanner.registry().names(),
            notifiers = ?self.notifiers.names(),
            "Starting watch"
        );

        loop {
            if *shutdown.borrow() {
                break;
            }

            self.run_cycle().await;

            if !sleep_unless_shutdown(self.interval, &mut shutdown).await {
                break;
            }
        }

        info!("Watch stopped");
    }
}

/// Sleep for `interval`. Returns `false` as soon as shutdown is requested.
async fn sleep_unless_shutdown(interval: Duration, shutdown: &mut watch::Receiver<bool>) -> bool {
    let sleep = tokio::time::sleep(interval);
    tokio::pin!(sleep);

    loop {
        if *shutdown.borrow_and_update() {
            return false;
        }
        tokio::select! {
            () = &mut sleep => return true,
            result = shutdown.changed() => {
                if result.is_err() {
                    return false;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::scanner::DetectionConfig;
    use crate::domain::Market;
    use crate::error::Error;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    struct StaticFetcher(Vec<Market>);

    #[async_trait]
    impl MarketFetcher for StaticFetcher {
        async fn get_markets(&self, limit: usize) -> Result<Vec<Market>> {
            Ok(self.0.iter().take(limit).cloned().collect())
        }

        fn exchange_name(&self) -> &'static str {
            "static"
        }
    }

    struct BrokenFetcher;

    #[async_trait]
    impl MarketFetcher for BrokenFetcher {
        async fn get_markets(&self, _limit: usize) -> Result<Vec<Market>> {
            Err(Error::Fetch("connection refused".into()))
        }

        fn exchange_name(&self) -> &'static str {
            "broken"
        }
    }

    fn service(fetcher: Arc<dyn MarketFetcher>, capacity: usize) -> WatchService {
        let config = WatchConfig {
            scan_interval_secs: 1,
            tracker_capacity: capacity,
        };
        let scanner = Scanner::from_config(DetectionConfig::default()).unwrap();
        WatchService::new(fetcher, 500, scanner, NotifierRegistry::new(), &config)
    }

    fn cheap(question: &str) -> Market {
        Market::binary(question, question, "0.40", "0.40", dec!(100))
    }

    #[test]
    fn test_default_watch_config() {
        let config = WatchConfig::default();
        assert_eq!(config.scan_interval(), Duration::from_secs(60));
        assert_eq!(config.tracker_capacity, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_watch_config_rejects_zero_values() {
        let zero_interval = WatchConfig {
            scan_interval_secs: 0,
            ..Default::default()
        };
        let zero_capacity = WatchConfig {
            tracker_capacity: 0,
            ..Default::default()
        };
        assert!(zero_interval.validate().is_err());
        assert!(zero_capacity.validate().is_err());
    }

    #[tokio::test]
    async fn test_repeat_cycle_alerts_once() {
        let fetcher = Arc::new(StaticFetcher(vec![cheap("A"), cheap("B")]));
        let mut service = service(fetcher, 1000);

        let first = service.run_cycle().await;
        let second = service.run_cycle().await;

        assert_eq!(first.alerted, 2);
        assert_eq!(second.opportunities, 2);
        assert_eq!(second.alerted, 0);
        assert_eq!(service.tracker().len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_failure_skips_cycle() {
        let mut service = service(Arc::new(BrokenFetcher), 1000);

        let report = service.run_cycle().await;

        assert!(report.fetch_failed);
        assert_eq!(report.alerted, 0);
        assert!(service.tracker().is_empty());
    }

    #[tokio::test]
    async fn test_tracker_cleared_when_over_capacity() {
        let fetcher = Arc::new(StaticFetcher(vec![cheap("A"), cheap("B"), cheap("C")]));
        let mut service = service(fetcher, 2);

        let first = service.run_cycle().await;
        assert_eq!(first.alerted, 3);
        assert!(first.tracker_cleared);
        assert!(service.tracker().is_empty());

        // Everything still live is reported again after the clear.
        let second = service.run_cycle().await;
        assert_eq!(second.alerted, 3);
    }

    #[tokio::test]
    async fn test_shutdown_stops_loop() {
        let mut service = service(Arc::new(StaticFetcher(vec![])), 1000);
        let (tx, rx) = watch::channel(false);
        tx.send(true).unwrap();

        tokio::time::timeout(Duration::from_secs(5), service.run_with_shutdown(rx))
            .await
            .unwrap();
    }
}
