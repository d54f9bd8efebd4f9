//! MCP Streamable HTTP service creation

use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;

use crate::tools::ToolContext;

use super::server::AflServer;

/// Create the MCP Streamable HTTP service.
///
/// The service runs stateless: every request gets a fresh [`AflServer`]
/// sharing the same upstream client and identity provider.
///
/// # Arguments
/// * `ctx` - Tool context cloned into each server instance
/// * `cancellation_token` - Cancelled on shutdown to close open streams
///
/// # Returns
/// A tower service ready to be nested under `/mcp`
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use axum::Router;
/// use tokio_util::sync::CancellationToken;
/// # use afl_mcp::auth::AnonymousProvider;
/// # use afl_mcp::mcp::create_mcp_service;
/// # use afl_mcp::tools::ToolContext;
/// # use afl_mcp::upstream::{HttpUpstream, DEFAULT_UPSTREAM_URL};
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let timeout = std::time::Duration::from_secs(30);
/// let upstream = HttpUpstream::new(DEFAULT_UPSTREAM_URL, timeout)?;
/// let ctx = ToolContext::new(Arc::new(upstream), Arc::new(AnonymousProvider));
///
/// let app: Router = Router::new()
///     .nest_service("/mcp", create_mcp_service(ctx, CancellationToken::new()));
/// # Ok(())
/// # }
/// ```
pub fn create_mcp_service(
    ctx: ToolContext,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<AflServer, LocalSessionManager> {
    // Returns io::Error to match rmcp's expected factory signature
    let service_factory =
        move || -> Result<AflServer, std::io::Error> { Ok(AflServer::new(ctx.clone())) };

    let mut config = StreamableHttpServerConfig::default();
    config.stateful_mode = false;
    config.cancellation_token = cancellation_token;

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}
