//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams adapters plug into:
//!
//! ```text
//!     ┌──────────────┐      ┌─────────────┐      ┌───────────┐
//!     │ MarketFetcher│ ───▶ │ Application │ ───▶ │ Notifier  │
//!     │   Adapter    │      │             │      │  Adapter  │
//!     └──────────────┘      └─────────────┘      └───────────┘
//! ```
//!
//! - [`MarketFetcher`] - Market snapshots (Polymarket Gamma API)
//! - [`Notifier`] - Opportunity alerts (log, Telegram)

pub mod outbound;

pub use outbound::exchange::MarketFetcher;
pub use outbound::notifier::{truncate, Alert, Notifier, NotifierRegistry, MAX_ALERT_NAME_CHARS};
