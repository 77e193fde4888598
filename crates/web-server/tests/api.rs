//! End-to-end behaviour of the HTTP surface, driven in-process through the router.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use simulator::{FixedClock, MockMarket, SequenceRandom};
use std::sync::Arc;
use tower::ServiceExt;
use web_server::{build_router, AppState};

const NOW: i64 = 1_700_000_000_000;

fn live_app() -> Router {
    build_router(Arc::new(AppState { market: MockMarket::live() }))
}

fn fixed_app(unit: f64) -> Router {
    let market = MockMarket::new(
        Arc::new(SequenceRandom::constant(unit)),
        Arc::new(FixedClock(NOW)),
    );
    build_router(Arc::new(AppState { market }))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn prices(body: &Value) -> Vec<f64> {
    body["prices"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["price"].as_f64().unwrap())
        .collect()
}

fn timestamps(body: &Value) -> Vec<i64> {
    body["prices"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["timestamp"].as_i64().unwrap())
        .collect()
}

// =============================================================================
// Price series
// =============================================================================

#[tokio::test]
async fn aapl_five_minutes_returns_six_prices_near_base() {
    let (status, body) = get(live_app(), "/api/stocks/AAPL/prices?m=5").await;

    assert_eq!(status, StatusCode::OK);
    let prices = prices(&body);
    assert_eq!(prices.len(), 6);
    assert!(prices.iter().all(|p| (145.0..=155.0).contains(p)), "{prices:?}");
}

#[tokio::test]
async fn timestamps_are_a_minute_apart_and_end_now() {
    let (status, body) = get(fixed_app(0.5), "/api/stocks/MSFT/prices?m=3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        timestamps(&body),
        vec![NOW - 180_000, NOW - 120_000, NOW - 60_000, NOW]
    );
    assert_eq!(prices(&body), vec![300.0; 4]);
    assert_eq!(body["average"], json!(300.0));
}

#[tokio::test]
async fn average_is_mean_of_returned_prices() {
    let (_, body) = get(live_app(), "/api/stocks/GOOGL/prices?m=60").await;

    let prices = prices(&body);
    assert_eq!(prices.len(), 61);
    let mean = prices.iter().sum::<f64>() / prices.len() as f64;
    assert!((body["average"].as_f64().unwrap() - mean).abs() < 1e-9);
}

#[tokio::test]
async fn missing_or_garbled_minutes_default_to_thirty() {
    for uri in [
        "/api/stocks/AAPL/prices",
        "/api/stocks/AAPL/prices?m=",
        "/api/stocks/AAPL/prices?m=abc",
    ] {
        let (status, body) = get(live_app(), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(prices(&body).len(), 31, "{uri}");
    }
}

#[tokio::test]
async fn window_bounds_are_inclusive() {
    let (status, body) = get(live_app(), "/api/stocks/MSFT/prices?m=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(prices(&body).len(), 2);

    let (status, body) = get(live_app(), "/api/stocks/MSFT/prices?m=60").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(prices(&body).len(), 61);
}

#[tokio::test]
async fn unknown_symbol_is_rejected() {
    for uri in ["/api/stocks/TSLA/prices?m=5", "/api/stocks/aapl/prices"] {
        let (status, body) = get(live_app(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(
            body,
            json!({ "error": "Invalid stock symbol. Use AAPL, GOOGL, or MSFT." })
        );
    }
}

#[tokio::test]
async fn symbol_is_checked_before_minutes() {
    let (status, body) = get(live_app(), "/api/stocks/TSLA/prices?m=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!("Invalid stock symbol. Use AAPL, GOOGL, or MSFT.")
    );
}

#[tokio::test]
async fn out_of_range_minutes_are_rejected() {
    for m in ["0", "61", "-5", "1000"] {
        let uri = format!("/api/stocks/GOOGL/prices?m={m}");
        let (status, body) = get(live_app(), &uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "m={m}");
        assert_eq!(body, json!({ "error": "Minutes must be between 1 and 60." }));
    }
}

#[tokio::test]
async fn repeated_minutes_use_the_first_value() {
    let (status, body) = get(live_app(), "/api/stocks/AAPL/prices?m=1&m=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(prices(&body).len(), 2);

    let (status, body) = get(live_app(), "/api/stocks/AAPL/prices?m=0&m=5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Minutes must be between 1 and 60." }));
}

#[tokio::test]
async fn other_query_parameters_are_ignored() {
    let (status, body) = get(live_app(), "/api/stocks/MSFT/prices?x=9&m=4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(prices(&body).len(), 5);
}

#[tokio::test]
async fn undecodable_symbol_reports_invalid_symbol() {
    let (status, body) = get(live_app(), "/api/stocks/%FF/prices?m=5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "Invalid stock symbol. Use AAPL, GOOGL, or MSFT." })
    );
}

#[tokio::test]
async fn trailing_slash_is_served() {
    let (status, body) = get(live_app(), "/api/stocks/AAPL/prices/?m=5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(prices(&body).len(), 6);

    let (status, body) = get(live_app(), "/api/stocks/TSLA/prices/").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!("Invalid stock symbol. Use AAPL, GOOGL, or MSFT.")
    );

    let (status, body) = get(live_app(), "/api/correlation/?m=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stocks"].as_array().unwrap().len(), 3);
}

// =============================================================================
// Correlation
// =============================================================================

#[tokio::test]
async fn correlation_lists_symbols_in_order() {
    let (status, body) = get(live_app(), "/api/correlation?m=10").await;

    assert_eq!(status, StatusCode::OK);
    let symbols: Vec<&str> = body["stocks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["symbol"].as_str().unwrap())
        .collect();
    assert_eq!(symbols, vec!["AAPL", "GOOGL", "MSFT"]);
}

#[tokio::test]
async fn correlation_matrix_is_constant() {
    let expected = json!([[1.0, 0.8, 0.3], [0.8, 1.0, -0.2], [0.3, -0.2, 1.0]]);
    for uri in ["/api/correlation", "/api/correlation?m=1", "/api/correlation?m=60"] {
        let (status, body) = get(live_app(), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body["correlations"], expected, "{uri}");
    }
}

#[tokio::test]
async fn correlation_stats_use_camel_case_fields() {
    let (_, body) = get(fixed_app(0.5), "/api/correlation").await;

    assert_eq!(
        body["stocks"],
        json!([
            { "symbol": "AAPL", "avgPrice": 152.5, "stdDev": 1.0 },
            { "symbol": "GOOGL", "avgPrice": 2725.0, "stdDev": 5.0 },
            { "symbol": "MSFT", "avgPrice": 305.0, "stdDev": 2.5 },
        ])
    );
}

#[tokio::test]
async fn correlation_repeated_minutes_use_the_first_value() {
    let (status, body) = get(live_app(), "/api/correlation?m=5&m=61").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stocks"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn correlation_validates_minutes() {
    for m in ["0", "61"] {
        let (status, body) = get(live_app(), &format!("/api/correlation?m={m}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Minutes must be between 1 and 60." }));
    }
}

// =============================================================================
// Plumbing
// =============================================================================

#[tokio::test]
async fn cross_origin_requests_are_allowed() {
    let response = live_app()
        .oneshot(
            Request::builder()
                .uri("/api/correlation")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn health_check_responds_ok() {
    let response = live_app()
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn unknown_routes_are_not_found() {
    let response = live_app()
        .oneshot(Request::builder().uri("/api/stocks").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
