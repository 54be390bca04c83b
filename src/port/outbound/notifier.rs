//! Notifier port for opportunity alerts.
//!
//! This module defines the alert payload and the trait implemented by
//! alert sinks (log, Telegram, test recorders).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::warn;

use crate::domain::{Opportunity, OpportunityKind, Price, Volume};
use crate::error::Result;

/// Maximum characters of an opportunity name carried in an alert.
pub const MAX_ALERT_NAME_CHARS: usize = 60;

/// A newly detected opportunity, formatted for delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    /// Detection rule that produced the opportunity.
    pub kind: OpportunityKind,
    /// Display name, truncated with `...`.
    pub name: String,
    /// Edge as a percentage (0.05 edge = 5%).
    pub edge_pct: Decimal,
    /// Kind-specific cost breakdown.
    pub breakdown: String,
    /// Total cost of the position.
    pub cost: Price,
    /// Guaranteed (or minimum) payout.
    pub payout: Price,
    /// Aggregate volume of the markets involved.
    pub volume: Volume,
    /// Opportunity identity key.
    pub key: String,
    /// When the opportunity was detected.
    pub detected_at: DateTime<Utc>,
}

impl Alert {
    /// Build an alert for an opportunity detected at `detected_at`.
    #[must_use]
    pub fn new(opportunity: &Opportunity, detected_at: DateTime<Utc>) -> Self {
        Self {
            kind: opportunity.kind(),
            name: truncate(opportunity.name(), MAX_ALERT_NAME_CHARS),
            edge_pct: (opportunity.edge() * Decimal::ONE_HUNDRED).round_dp(2),
            breakdown: breakdown(opportunity),
            cost: opportunity.cost(),
            payout: opportunity.payout(),
            volume: opportunity.volume(),
            key: opportunity.key().to_string(),
            detected_at,
        }
    }
}

impl From<&Opportunity> for Alert {
    fn from(opportunity: &Opportunity) -> Self {
        Self::new(opportunity, Utc::now())
    }
}

fn breakdown(opportunity: &Opportunity) -> String {
    let cost = opportunity.cost();
    match opportunity.kind() {
        OpportunityKind::Basic => match opportunity.prices() {
            [yes, no, ..] => format!("YES @ {yes} + NO @ {no} = {cost}"),
            _ => format!("cost = {cost}"),
        },
        OpportunityKind::CorrelatedDate => format!(
            "NO across {} dates = {cost}, min payout = {}",
            opportunity.market_count(),
            opportunity.payout()
        ),
        OpportunityKind::MutuallyExclusive => {
            format!("{} outcomes = {cost}", opportunity.prices().len())
        }
    }
}

/// Truncate a string with ellipsis (Unicode-safe).
pub fn truncate(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count > max_chars {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        s.to_string()
    }
}

/// Sink for opportunity alerts.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - Delivery failures are returned, never panicked; the caller logs them
///   and carries on with the next notifier
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver an alert.
    async fn notify(&self, alert: &Alert) -> Result<()>;

    /// Short name for logging.
    fn name(&self) -> &'static str;
}

/// Registry of notifiers (composite pattern).
///
/// Broadcasts alerts to all registered notifiers in registration order.
#[derive(Default)]
pub struct NotifierRegistry {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotifierRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a notifier.
    pub fn register(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Deliver an alert to every notifier.
    ///
    /// Failures are logged and do not stop delivery to the remaining
    /// notifiers. Returns the number of notifiers that failed.
    pub async fn notify_all(&self, alert: &Alert) -> usize {
        let mut failed = 0;
        for notifier in &self.notifiers {
            if let Err(e) = notifier.notify(alert).await {
                failed += 1;
                warn!(
                    notifier = notifier.name(),
                    key = %alert.key,
                    error = %e,
                    "Notification failed"
                );
            }
        }
        failed
    }

    /// Names of registered notifiers.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.notifiers.iter().map(|n| n.name()).collect()
    }

    /// Number of registered notifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}
