//! Event grouping integration tests.

mod support;

use edgescan::application::{canonical_event_key, group_by_event};
use edgescan::domain::Market;
use support::market::{make_binary_market, make_dated_market};

#[test]
fn date_variants_share_one_key() {
    let keys: Vec<_> = ["March", "April", "June"]
        .iter()
        .map(|month| canonical_event_key(&format!("Will BTC hit 100k by {month} 2026?")))
        .collect();

    assert_eq!(keys[0], keys[1]);
    assert_eq!(keys[1], keys[2]);
}

#[test]
fn ordinal_days_and_yes_no_tokens_are_stripped() {
    assert_eq!(
        canonical_event_key("Yes will the bill pass on 3 the 21st?"),
        canonical_event_key("Will the bill pass on 4 the 2nd?")
    );
}

#[test]
fn key_is_truncated_to_fifty_chars() {
    let key = canonical_event_key(&"long question ".repeat(10));
    assert_eq!(key.as_str().chars().count(), 50);
}

#[test]
fn unrelated_markets_that_coincide_are_grouped() {
    // Lossy by construction: only the date qualifier differs.
    let markets = vec![
        make_binary_market("a", "Team wins in 2025", "0.5", "0.5"),
        make_binary_market("b", "Team wins in 2026", "0.5", "0.5"),
    ];
    assert_eq!(group_by_event(&markets).len(), 1);
}

#[test]
fn groups_never_have_fewer_than_two_members() {
    let markets: Vec<Market> = vec![
        make_dated_market("March", "0.5"),
        make_binary_market("solo", "Who wins the cup?", "0.5", "0.5"),
        make_dated_market("April", "0.5"),
        make_binary_market("other", "Will it snow?", "0.5", "0.5"),
        make_dated_market("June", "0.5"),
    ];

    let groups = group_by_event(&markets);

    assert_eq!(groups.len(), 1);
    assert!(groups.iter().all(|g| g.len() >= 2));
    let ids: Vec<_> = groups[0].markets().iter().map(|m| m.id().as_str()).collect();
    assert_eq!(ids, vec!["March", "April", "June"]);
}

#[test]
fn empty_input_yields_no_groups() {
    assert!(group_by_event(&[]).is_empty());
}
