//! API route configuration.

use axum::Router;
use axum::routing::get;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};

use super::handlers;
use crate::mcp::create_mcp_service;
use crate::tools::ToolContext;

/// Create the router: MCP at `/mcp`, liveness probe at `/api/healthz`.
pub fn create_router(ctx: ToolContext, cancellation_token: CancellationToken) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/healthz", get(handlers::healthz))
        .nest_service("/mcp", create_mcp_service(ctx, cancellation_token))
        .layer(cors)
}
