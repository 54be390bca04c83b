//! Notification adapters.
//!
//! Implements the `port::Notifier` trait for the available alert sinks.

use async_trait::async_trait;
use tracing::info;

use crate::error::Result;
use crate::port::{Alert, Notifier};

pub use crate::port::NotifierRegistry;

#[cfg(feature = "telegram")]
pub mod telegram;

/// A no-op notifier for testing or when notifications are disabled.
pub struct NullNotifier;

#[async_trait]
impl Notifier for NullNotifier {
    async fn notify(&self, _alert: &Alert) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "null"
    }
}

/// A logging notifier that logs alerts via tracing.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, alert: &Alert) -> Result<()> {
        info!(
            kind = alert.kind.as_str(),
            name = %alert.name,
            edge_pct = %alert.edge_pct,
            breakdown = %alert.breakdown,
            volume = %alert.volume,
            "Opportunity detected"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
