//! Event groups: markets believed to reference one event at different dates.

use super::id::EventKey;
use super::market::Market;
use super::money::Volume;

/// A transient view over markets sharing a canonical event key.
///
/// Borrows its members: grouping never owns or mutates markets, and groups
/// are rebuilt from scratch on every scan.
#[derive(Debug, Clone)]
pub struct EventGroup<'a> {
    key: EventKey,
    markets: Vec<&'a Market>,
}

impl<'a> EventGroup<'a> {
    /// Create a group from its key and members (in first-seen order).
    #[must_use]
    pub fn new(key: EventKey, markets: Vec<&'a Market>) -> Self {
        Self { key, markets }
    }

    /// The canonical event key.
    #[must_use]
    pub const fn key(&self) -> &EventKey {
        &self.key
    }

    /// Member markets in first-seen order.
    #[must_use]
    pub fn markets(&self) -> &[&'a Market] {
        &self.markets
    }

    /// Number of member markets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.markets.len()
    }

    /// True if the group has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markets.is_empty()
    }

    /// Sum of member volumes.
    #[must_use]
    pub fn total_volume(&self) -> Volume {
        self.markets.iter().map(|m| m.volume()).sum()
    }
}
