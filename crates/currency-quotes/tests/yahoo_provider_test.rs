//! Integration tests for YahooQuoteProvider against a mockito chart API.

use std::sync::Arc;
use std::time::{Duration, Instant};

use currency_quotes::{
    QuoteError, QuoteFormatter, QuoteProvider, YahooQuoteProvider, QUOTES_UNAVAILABLE_MESSAGE,
};
use mockito::{Matcher, Server, ServerGuard};
use tokio::net::TcpListener;

fn chart_body(closes: &str, market_price: f64) -> String {
    format!(
        r#"{{"chart":{{"result":[{{"meta":{{"currency":"MYR","symbol":"SGDMYR=X","regularMarketPrice":{}}},
        "timestamp":[1706529600,1706533200,1706536800],
        "indicators":{{"quote":[{{"open":[3.49,3.50,3.51],"close":{}}}]}}}}],"error":null}}}}"#,
        market_price, closes
    )
}

fn chart_query(period: &str) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("range".into(), period.into()),
        Matcher::UrlEncoded("interval".into(), "1d".into()),
    ])
}

fn provider_for(server: &ServerGuard) -> YahooQuoteProvider {
    YahooQuoteProvider::new(server.url(), Duration::from_secs(5)).unwrap()
}

/// **Test: Latest close is the last non-null close in the series**
///
/// **Setup:** Chart payload whose close series ends with null.
///
/// **Expected:** The rate is the last non-null close, not the market price.
#[tokio::test]
async fn test_latest_closes_parses_recorded_payload() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v8/finance/chart/SGDMYR=X")
        .match_query(chart_query("1d"))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(chart_body("[3.4912,3.5021,null]", 3.51))
        .create_async()
        .await;

    let provider = provider_for(&server);
    let closes = provider
        .latest_closes(&["SGDMYR=X".to_string()], "1d")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(closes.len(), 1);
    assert_eq!(closes["SGDMYR=X"], 3.5021);
}

/// **Test: Every ticker is requested and keyed by ticker**
#[tokio::test]
async fn test_latest_closes_fetches_each_ticker() {
    let mut server = Server::new_async().await;
    let usd = server
        .mock("GET", "/v8/finance/chart/SGDUSD=X")
        .match_query(chart_query("5d"))
        .with_status(200)
        .with_body(chart_body("[0.7401,0.7412]", 0.74))
        .create_async()
        .await;
    let jpy = server
        .mock("GET", "/v8/finance/chart/SGDJPY=X")
        .match_query(chart_query("5d"))
        .with_status(200)
        .with_body(chart_body("[110.2,110.31]", 110.0))
        .create_async()
        .await;

    let provider = provider_for(&server);
    let closes = provider
        .latest_closes(&["SGDUSD=X".to_string(), "SGDJPY=X".to_string()], "5d")
        .await
        .unwrap();

    usd.assert_async().await;
    jpy.assert_async().await;
    assert_eq!(closes["SGDUSD=X"], 0.7412);
    assert_eq!(closes["SGDJPY=X"], 110.31);
}

/// **Test: chart.error in the body surfaces as QuoteError::Api**
#[tokio::test]
async fn test_latest_closes_surfaces_chart_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v8/finance/chart/SGDXXX=X")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#,
        )
        .create_async()
        .await;

    let provider = provider_for(&server);
    let err = provider
        .latest_closes(&["SGDXXX=X".to_string()], "1d")
        .await
        .unwrap_err();

    match err {
        QuoteError::Api {
            ticker,
            description,
        } => {
            assert_eq!(ticker, "SGDXXX=X");
            assert!(description.contains("delisted"));
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

/// **Test: Non-2xx status surfaces as QuoteError::Status**
#[tokio::test]
async fn test_latest_closes_surfaces_bad_status() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v8/finance/chart/SGDHKD=X")
        .match_query(Matcher::Any)
        .with_status(429)
        .with_body("Too Many Requests")
        .create_async()
        .await;

    let provider = provider_for(&server);
    let err = provider
        .latest_closes(&["SGDHKD=X".to_string()], "1d")
        .await
        .unwrap_err();

    assert!(matches!(err, QuoteError::Status { status: 429, .. }));
    assert_eq!(err.kind(), "status");
}

/// **Test: Malformed JSON surfaces as QuoteError::Parse**
#[tokio::test]
async fn test_latest_closes_surfaces_malformed_json() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v8/finance/chart/SGDAUD=X")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("{\"chart\": ")
        .create_async()
        .await;

    let provider = provider_for(&server);
    let err = provider
        .latest_closes(&["SGDAUD=X".to_string()], "1d")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "parse");
}

/// **Test: One failing ticker fails the whole lookup**
#[tokio::test]
async fn test_latest_closes_fails_when_any_ticker_fails() {
    let mut server = Server::new_async().await;
    let _ok = server
        .mock("GET", "/v8/finance/chart/SGDMYR=X")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(chart_body("[3.5]", 3.5))
        .create_async()
        .await;
    let _bad = server
        .mock("GET", "/v8/finance/chart/SGDUSD=X")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let provider = provider_for(&server);
    let result = provider
        .latest_closes(&["SGDMYR=X".to_string(), "SGDUSD=X".to_string()], "1d")
        .await;

    assert!(matches!(
        result,
        Err(QuoteError::Status { status: 500, .. })
    ));
}

/// Accepts connections and never answers; returns the base URL.
async fn silent_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    format!("http://{}", addr)
}

/// **Test: A server that never answers fails with QuoteError::Timeout after the configured timeout**
///
/// **Setup:** TCP listener that accepts and stays silent; provider timeout 300ms.
///
/// **Expected:** Timeout error well before the test deadline; the formatter falls back to the
/// unavailable message.
#[tokio::test]
async fn test_latest_closes_times_out_on_silent_server() {
    let base_url = silent_server().await;
    let provider = YahooQuoteProvider::new(base_url, Duration::from_millis(300)).unwrap();

    let started = Instant::now();
    let err = tokio::time::timeout(
        Duration::from_secs(5),
        provider.latest_closes(&["SGDMYR=X".to_string()], "1d"),
    )
    .await
    .expect("lookup must be bounded by the client timeout")
    .unwrap_err();

    assert!(matches!(err, QuoteError::Timeout), "got {:?}", err);
    assert_eq!(err.kind(), "timeout");
    assert!(started.elapsed() >= Duration::from_millis(250));

    let formatter = QuoteFormatter::new(Arc::new(provider), "1d");
    let reply = tokio::time::timeout(Duration::from_secs(5), formatter.reply())
        .await
        .unwrap();
    assert_eq!(reply, QUOTES_UNAVAILABLE_MESSAGE);
}
