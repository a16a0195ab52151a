#![cfg(test)]
use std::time::Duration;

use chrono::NaiveDate;
use serde_json::json;
use sift_core::source::{
    self, HISTORY_LIMIT, HISTORY_ROWS, LATEST_ROWS, Relay, RelayChain, fallback_record,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LIMIT: Duration = Duration::from_secs(5);

fn now() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 12, 10)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .expect("valid timestamp")
}

fn history_body() -> serde_json::Value {
    let rows: Vec<_> = (1..=40)
        .map(|day| {
            json!({
                "expect": format!("2025{:03}", 100 + day),
                "opencode": "01 02 03 04 05 06 07",
                "opentime": format!("2025-{:02}-{:02} 21:30:00", 10 + day / 29, day % 28 + 1),
            })
        })
        .chain(std::iter::once(json!({
            "expect": "2026001",
            "opencode": "01,02,03,04,05,06,07",
            "opentime": "2026-01-01 21:30:00",
        })))
        .collect();
    json!({ "data": rows })
}

/// The latest draw comes straight from the endpoint when it answers.
#[tokio::test]
async fn latest_from_direct_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("row", LATEST_ROWS.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"list": [
            {"issue": "2025130", "openCode": "10+20+30+40+41+42+43", "openTime": "2025-12-09 21:30:00"}
        ]})))
        .mount(&server)
        .await;

    let chain = RelayChain::with_relays(format!("{}/api/?xg", server.uri()), vec![Relay::Direct]);
    let latest = source::latest_or_fallback(&chain, LIMIT).await;

    assert_eq!(latest[0].issue, "2025130");
    assert_eq!(latest[0].open_code, "10,20,30,40,41,42,43");
    assert_eq!(latest[0].special(), Some(43));
}

/// A dead endpoint and dead relays still yield the last known draw.
#[tokio::test]
async fn latest_falls_back_when_everything_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let relays = vec![Relay::Direct, Relay::Raw(format!("{}/fetch/", server.uri()))];
    let chain = RelayChain::with_relays(format!("{}/api/?xg", server.uri()), relays);
    let latest = source::latest_or_fallback(&chain, LIMIT).await;

    assert_eq!(latest, vec![fallback_record()]);
}

#[tokio::test]
async fn latest_times_out_to_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(history_body())
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;

    let chain = RelayChain::with_relays(format!("{}/api/?xg", server.uri()), vec![Relay::Direct]);
    let latest = source::latest_or_fallback(&chain, Duration::from_millis(200)).await;

    assert_eq!(latest, vec![fallback_record()]);
}

/// History is sorted, trimmed to the cap and hides the far-future entry.
#[tokio::test]
async fn history_through_relay() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/raw"))
        .respond_with(ResponseTemplate::new(200).set_body_json(history_body()))
        .expect(1)
        .mount(&server)
        .await;

    let relays = vec![Relay::Direct, Relay::Encoded(format!("{}/raw?url=", server.uri()))];
    let chain = RelayChain::with_relays(format!("{}/api/?xg", server.uri()), relays);
    let history = source::recent_history(&chain, LIMIT, now()).await;

    assert_eq!(history.len(), HISTORY_LIMIT);
    assert!(history.iter().all(|draw| draw.issue != "2026001"));
    let times: Vec<_> = history.iter().filter_map(|draw| draw.opened_at()).collect();
    assert!(times.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[tokio::test]
async fn history_requests_fifty_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("row", HISTORY_ROWS.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let chain = RelayChain::with_relays(format!("{}/api/?xg", server.uri()), vec![Relay::Direct]);
    assert!(source::recent_history(&chain, LIMIT, now()).await.is_empty());
}

#[tokio::test]
async fn history_is_empty_on_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let chain = RelayChain::with_relays(format!("{}/api/?xg", server.uri()), vec![Relay::Direct]);
    assert!(source::recent_history(&chain, LIMIT, now()).await.is_empty());
}
