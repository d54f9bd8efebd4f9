//! Tests for MCP Streamable HTTP service integration

use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::ACCEPT, header::AUTHORIZATION, header::CONTENT_TYPE},
    response::Response,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;

use crate::test_support::{context, serving, untouched};
use crate::upstream::MockUpstream;

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(message: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("host", "localhost")
        .header(CONTENT_TYPE, "application/json")
        .header(ACCEPT, "application/json, text/event-stream")
        .header(AUTHORIZATION, "Bearer token")
        .body(Body::from(message.to_string()))
        .unwrap()
}

fn app_with(upstream: MockUpstream) -> Router {
    let service = super::create_mcp_service(context(upstream), CancellationToken::new());
    Router::new().nest_service("/mcp", service)
}

fn app() -> Router {
    app_with(untouched())
}

/// Reads the (possibly streamed) body until `needle` shows up or 5s pass.
async fn read_until(response: Response, needle: &str) -> Option<String> {
    let mut body = response.into_body();
    let mut received = String::new();
    let read = tokio::time::timeout(Duration::from_secs(5), async {
        while let Some(Ok(frame)) = body.frame().await {
            if let Some(data) = frame.data_ref() {
                received.push_str(&String::from_utf8_lossy(data));
            }
            if received.contains(needle) {
                break;
            }
        }
    })
    .await;

    read.ok().map(|_| received)
}

#[tokio::test]
async fn test_mcp_service_with_router() {
    let response = app().oneshot(get("/")).await.unwrap();

    // Only /mcp is mounted
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_initialize_over_http() {
    let initialize = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {
            "protocolVersion": "2025-03-26",
            "capabilities": {},
            "clientInfo": { "name": "test-client", "version": "0.0.1" }
        }
    });

    let response = app().oneshot(post(&initialize)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let received = read_until(response, "serverInfo").await;
    let received = received.expect("timed out waiting for initialize reply");
    assert!(received.contains("\"afl-mcp\""), "got: {received}");
}

#[tokio::test]
async fn test_tool_call_is_dispatched_over_http() {
    let upstream = serving(
        "?q=sources",
        200,
        r#"{"sources":[{"id":1,"name":"Squiggle"}]}"#,
    );
    let call = json!({
        "jsonrpc": "2.0",
        "id": 2,
        "method": "tools/call",
        "params": { "name": "GetSources", "arguments": {} }
    });

    let response = app_with(upstream).oneshot(post(&call)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let received = read_until(response, "Squiggle").await;
    let received = received.expect("timed out waiting for tool result");
    assert!(received.contains("Squiggle"), "got: {received}");
}
