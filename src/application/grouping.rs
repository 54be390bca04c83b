//! Event clustering for correlated-date arbitrage.
//!
//! Markets that restate one event with different deadlines ("X by March
//! 2026", "X by April 2026") are bucketed under a shared canonical key.
//! The key is a lossy text heuristic: unrelated questions whose remaining
//! text coincides after stripping will share a key, and rephrased questions
//! about the same event will not.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{EventGroup, EventKey, Market};

/// Maximum length of a canonical key, in characters.
pub const MAX_KEY_CHARS: usize = 50;

static RE_DATE_QUALIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:by|before|after|in|on)\s+(?:january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sept|sep|oct|nov|dec|\d+)\b",
    )
    .expect("valid date qualifier regex")
});
static RE_ORDINAL_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d{1,2}(?:st|nd|rd|th)\b").expect("valid ordinal regex")
});
static RE_YES_NO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:yes|no)\b").expect("valid yes/no regex"));
static RE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Normalize a market question into its canonical event key.
///
/// Applied in order: lowercase, strip date qualifiers
/// (`by|before|after|in|on` + month or number), strip ordinal day tokens,
/// strip standalone `yes`/`no`, collapse whitespace, trim, truncate to
/// [`MAX_KEY_CHARS`] characters.
#[must_use]
pub fn canonical_event_key(question: &str) -> EventKey {
    let text = question.to_lowercase();
    let text = RE_DATE_QUALIFIER.replace_all(&text, "");
    let text = RE_ORDINAL_DAY.replace_all(&text, "");
    let text = RE_YES_NO.replace_all(&text, "");
    let text = RE_WHITESPACE.replace_all(&text, " ");
    let key: String = text.trim().chars().take(MAX_KEY_CHARS).collect();
    EventKey::new(key)
}

/// Bucket markets by canonical key, keeping only buckets with 2+ members.
///
/// Buckets and their members are returned in first-seen order.
#[must_use]
pub fn group_by_event(markets: &[Market]) -> Vec<EventGroup<'_>> {
    let mut index: HashMap<EventKey, usize> = HashMap::new();
    let mut buckets: Vec<(EventKey, Vec<&Market>)> = Vec::new();

    for market in markets {
        let key = canonical_event_key(market.question());
        match index.get(&key) {
            Some(&slot) => buckets[slot].1.push(market),
            None => {
                index.insert(key.clone(), buckets.len());
                buckets.push((key, vec![market]));
            }
        }
    }

    buckets
        .into_iter()
        .filter(|(_, members)| members.len() >= 2)
        .map(|(key, members)| EventGroup::new(key, members))
        .collect()
}
