//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the scanner's external dependencies: a market
//! data source and alert sinks.

pub mod exchange;
pub mod notifier;
