//! Edgescan - Prediction market arbitrage scanner.
//!
//! Fetches active markets from Polymarket, groups date-variant questions
//! into events, and reports mispricings found by three detection rules:
//!
//! - **Basic** - first two outcome prices sum below $1
//! - **MutuallyExclusive** - sum of all outcomes < $1 in a 3+ outcome market
//! - **CorrelatedDate** - NO positions across date variants of one event
//!
//! The crate is laid out hexagonally:
//!
//! - [`domain`] - Markets, event groups and opportunities
//! - [`application`] - Grouping, detection, scanning, dedup and the watch loop
//! - [`port`] - Traits the application depends on (market source, notifiers)
//! - [`adapter`] - Polymarket Gamma client, notifiers and the CLI
//! - [`infrastructure`] - Configuration and wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use edgescan::application::{DetectionConfig, Scanner};
//! use edgescan::domain::Market;
//! use rust_decimal_macros::dec;
//!
//! let markets = vec![Market::binary("1", "Will it rain?", "0.45", "0.50", dec!(100))];
//! let scanner = Scanner::from_config(DetectionConfig::default()).unwrap();
//! let report = scanner.scan(&markets);
//! assert_eq!(report.opportunities.len(), 1);
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
