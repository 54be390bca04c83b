//! Factory modules for building infrastructure components.
//!
//! Provides factory functions that construct fully-configured components
//! from application configuration.
//!
//! # Submodules
//!
//! - [`exchange`] - Market fetcher construction
//! - [`notifier`] - Notification registry construction

pub mod exchange;
pub mod notifier;
