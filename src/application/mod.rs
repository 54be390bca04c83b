//! Application services (use cases).
//!
//! These services compose the domain types into the scanner's use cases:
//! grouping markets into events, running detection rules, deduplicating
//! reported opportunities and driving the continuous watch loop.

pub mod grouping;
pub mod scanner;
pub mod strategy;
pub mod tracker;
pub mod watch;

pub use grouping::{canonical_event_key, group_by_event};
pub use scanner::{DetectionConfig, ScanReport, Scanner};
pub use strategy::{ScanContext, Strategy, StrategyRegistry};
pub use tracker::OpportunityTracker;
pub use watch::{CycleReport, WatchConfig, WatchService};
