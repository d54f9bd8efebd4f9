use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::RawQuery,
    http::{HeaderMap, StatusCode, header::USER_AGENT},
    routing::get,
};
use serde_json::{Value, json};

use crate::test_support::init_crypto;

use super::{HttpUpstream, Upstream, UpstreamError};

async fn echo(RawQuery(query): RawQuery, headers: HeaderMap) -> Json<Value> {
    let agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    Json(json!({ "query": query, "agent": agent }))
}

async fn slow() -> &'static str {
    tokio::time::sleep(Duration::from_secs(5)).await;
    "{}"
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded")
}

async fn serve() -> SocketAddr {
    let app = Router::new()
        .route("/", get(echo))
        .route("/slow", get(slow))
        .route("/broken", get(broken));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client(addr: SocketAddr, timeout: Duration) -> HttpUpstream {
    init_crypto();
    let base_url = format!("http://{addr}/");
    HttpUpstream::new(base_url, timeout).unwrap()
}

#[tokio::test]
async fn test_get_appends_endpoint_to_base_url() {
    let upstream = client(serve().await, Duration::from_secs(5));

    let response = upstream.get("?q=games;year=2024;round=5").await.unwrap();

    assert_eq!(response.status, 200);
    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["query"], "q=games;year=2024;round=5");
    let agent = body["agent"].as_str().unwrap();
    assert!(agent.starts_with("afl-mcp/"));
}

#[tokio::test]
async fn test_error_status_is_a_response() {
    let upstream = client(serve().await, Duration::from_secs(5));

    let response = upstream.get("broken").await.unwrap();

    assert_eq!(response.status, 500);
    assert!(!response.is_success());
    assert_eq!(response.body, "upstream exploded");
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let upstream = client(serve().await, Duration::from_millis(100));

    let err = upstream.get("slow").await.unwrap_err();

    assert!(matches!(err, UpstreamError::Timeout { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_unreachable_upstream_is_network_error() {
    init_crypto();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let upstream = client(addr, Duration::from_secs(5));
    let err = upstream.get("?q=sources").await.unwrap_err();

    assert!(matches!(err, UpstreamError::Network { .. }), "got {err:?}");
}

#[test]
fn test_base_url_is_kept() {
    init_crypto();
    let timeout = Duration::from_secs(30);
    let upstream = HttpUpstream::new("https://api.squiggle.com.au/", timeout).unwrap();
    assert_eq!(upstream.base_url(), "https://api.squiggle.com.au/");
}
