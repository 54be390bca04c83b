//! Cross-cycle deduplication of reported opportunities.
//!
//! The tracker remembers the identity keys of opportunities already
//! notified so a persisting opportunity alerts once. Memory is bounded by a
//! coarse policy: once the set grows past its capacity at the end of a
//! cycle it is cleared entirely, and everything still live is reported
//! again on the next cycle.

use std::collections::HashSet;

use tracing::info;

use crate::domain::Opportunity;

/// Default number of remembered keys before the set is cleared.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Set of opportunity keys already reported.
#[derive(Debug, Clone)]
pub struct OpportunityTracker {
    seen: HashSet<String>,
    capacity: usize,
}

impl Default for OpportunityTracker {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl OpportunityTracker {
    /// Create a tracker that clears once it holds more than `capacity` keys.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            seen: HashSet::new(),
            capacity,
        }
    }

    /// Maximum keys held after a cycle ends.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether an opportunity has not been reported yet.
    #[must_use]
    pub fn is_new(&self, opportunity: &Opportunity) -> bool {
        !self.seen.contains(opportunity.key())
    }

    /// Record an opportunity as reported.
    ///
    /// Returns `true` if the key was not already present.
    pub fn mark_seen(&mut self, opportunity: &Opportunity) -> bool {
        self.seen.insert(opportunity.key().to_string())
    }

    /// Opportunities not yet reported, in input order.
    ///
    /// Duplicates within the batch collapse to their first occurrence.
    #[must_use]
    pub fn filter_new<'a>(&self, opportunities: &'a [Opportunity]) -> Vec<&'a Opportunity> {
        let mut batch: HashSet<&str> = HashSet::new();
        let mut fresh = Vec::new();
        for opportunity in opportunities {
            if self.is_new(opportunity) && batch.insert(opportunity.key()) {
                fresh.push(opportunity);
            }
        }
        fresh
    }

    /// Clear the set if it grew past capacity.
    ///
    /// Call once per cycle, after that cycle's insertions. Returns `true`
    /// when the set was cleared.
    pub fn enforce_bound(&mut self) -> bool {
        if self.seen.len() <= self.capacity {
            return false;
        }
        info!(
            size = self.seen.len(),
            capacity = self.capacity,
            "Opportunity tracker over capacity, clearing"
        );
        self.seen.clear();
        true
    }

    /// Forget every reported key.
    pub fn clear(&mut self) {
        self.seen.clear();
    }

    /// Number of remembered keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Whether no keys are remembered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
