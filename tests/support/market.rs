use rust_decimal::Decimal;

use edgescan::domain::{Market, MarketId, OutcomePrices};

pub fn make_binary_market(id: &str, question: &str, yes: &str, no: &str) -> Market {
    Market::binary(id, question, yes, no, Decimal::from(1000))
}

pub fn make_multi_market(id: &str, question: &str, prices: &[&str]) -> Market {
    let outcomes = (0..prices.len())
        .map(|i| format!("Outcome {i}"))
        .collect();
    Market::new(
        MarketId::from(id),
        question,
        outcomes,
        OutcomePrices::from_text(prices.iter().copied()),
        Decimal::from(1000),
    )
}

/// A date-variant market asking the same question with a different month.
pub fn make_dated_market(month: &str, no: &str) -> Market {
    let question = format!("Will BTC hit 100k by {month} 2026?");
    let yes = (Decimal::ONE - no.parse::<Decimal>().unwrap_or(Decimal::ZERO)).to_string();
    Market::binary(month, question, &yes, no, Decimal::from(1000))
}

/// `count` independent binary markets, each with a 10% basic edge.
pub fn make_cheap_markets(count: usize) -> Vec<Market> {
    (0..count)
        .map(|i| make_binary_market(&format!("m{i}"), &format!("Question {i}?"), "0.45", "0.45"))
        .collect()
}
