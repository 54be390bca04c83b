//! Gamma API client tests against a mock server.

use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use edgescan::adapter::outbound::polymarket::PolymarketClient;
use edgescan::application::{DetectionConfig, Scanner};
use edgescan::port::MarketFetcher;

#[tokio::test]
async fn fetches_active_markets_with_encoded_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/markets"))
        .and(query_param("active", "true"))
        .and(query_param("closed", "false"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "conditionId": "0xabc",
                "question": "Will it rain tomorrow?",
                "active": true,
                "closed": false,
                "outcomes": "[\"Yes\", \"No\"]",
                "outcomePrices": "[\"0.45\", \"0.50\"]",
                "volumeNum": 1500.5
            },
            {
                "id": "42",
                "question": "Who wins the cup?",
                "outcomes": "[\"A\", \"B\", \"C\"]",
                "outcomePrices": "[\"0.30\", \"0.30\", \"0.30\"]",
                "volume": "250"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = PolymarketClient::new(server.uri());
    let markets = client.get_markets(2).await.unwrap();

    assert_eq!(markets.len(), 2);
    assert_eq!(markets[0].id().as_str(), "0xabc");
    assert_eq!(markets[0].yes_price(), dec!(0.45));
    assert_eq!(markets[0].no_price(), dec!(0.50));
    assert_eq!(markets[1].id().as_str(), "42");
    assert_eq!(markets[1].outcome_count(), 3);
    assert_eq!(markets[1].volume(), dec!(250));

    let scanner = Scanner::from_config(DetectionConfig::default()).unwrap();
    let report = scanner.scan(&markets);
    // Cup market: basic on its first two outcomes plus mutually exclusive.
    // Rain market: basic.
    assert_eq!(report.opportunities.len(), 3);
}

#[tokio::test]
async fn accepts_literal_arrays() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/markets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "conditionId": "0xdef",
                "question": "Will it snow?",
                "outcomes": ["Yes", "No"],
                "outcomePrices": ["0.40", "0.55"]
            }
        ])))
        .mount(&server)
        .await;

    let client = PolymarketClient::new(format!("{}/", server.uri()));
    let markets = client.get_markets(10).await.unwrap();

    assert_eq!(markets.len(), 1);
    assert_eq!(markets[0].outcomes(), &["Yes".to_string(), "No".to_string()]);
    assert_eq!(markets[0].no_price(), dec!(0.55));
    assert_eq!(markets[0].volume(), dec!(0));
}

#[tokio::test]
async fn malformed_prices_fall_back_to_neutral() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/markets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "conditionId": "0x1",
                "question": "Broken prices?",
                "outcomes": "[\"Yes\", \"No\"]",
                "outcomePrices": "[\"oops\""
            }
        ])))
        .mount(&server)
        .await;

    let client = PolymarketClient::new(server.uri());
    let markets = client.get_markets(10).await.unwrap();

    assert_eq!(markets[0].yes_price(), dec!(0.5));
    assert_eq!(markets[0].no_price(), dec!(0.5));
}

#[tokio::test]
async fn bad_markets_do_not_drop_the_batch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/markets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "conditionId": "0xbroken",
                "question": "Nulls everywhere?",
                "active": null,
                "closed": "no",
                "outcomes": ["Yes", "No"],
                "outcomePrices": [0.4, null],
                "volumeNum": {"usd": 10}
            },
            null,
            42,
            {
                "conditionId": "0xgood",
                "question": "Will it rain?",
                "outcomes": "[\"Yes\", \"No\"]",
                "outcomePrices": "[\"0.45\", \"0.50\"]"
            }
        ])))
        .mount(&server)
        .await;

    let client = PolymarketClient::new(server.uri());
    let markets = client.get_markets(10).await.unwrap();

    assert_eq!(markets.len(), 2);
    assert_eq!(markets[0].id().as_str(), "0xbroken");
    assert_eq!(markets[0].yes_price(), dec!(0.4));
    assert_eq!(markets[0].no_price(), dec!(0.5));
    assert_eq!(markets[0].volume(), dec!(0));
    assert_eq!(markets[1].id().as_str(), "0xgood");
    assert_eq!(markets[1].yes_price(), dec!(0.45));
    assert_eq!(markets[1].no_price(), dec!(0.50));
}

#[tokio::test]
async fn server_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/markets"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = PolymarketClient::new(server.uri());
    assert!(client.get_markets(10).await.is_err());
}

#[tokio::test]
async fn non_array_body_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/markets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "error": "nope" })))
        .mount(&server)
        .await;

    let client = PolymarketClient::new(server.uri());
    assert!(client.get_markets(10).await.is_err());
}
