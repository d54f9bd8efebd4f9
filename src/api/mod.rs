//! HTTP host for the MCP server.

mod config;
mod error;
mod handlers;
mod routes;

#[cfg(test)]
mod mod_test;
#[cfg(test)]
mod routes_test;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::auth::{AnonymousProvider, IdentityProvider, UserInfoProvider};
use crate::tools::ToolContext;
use crate::upstream::HttpUpstream;

pub use config::{
    AUTH_DISABLED_ENV, Config, HOST_ENV, PORT_ENV, TIMEOUT_ENV, UPSTREAM_URL_ENV, USERINFO_URL_ENV,
};
pub use error::ApiError;
pub use routes::create_router;

/// Initialize tracing subscriber with env filter
///
/// Does nothing if a global subscriber is already installed.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "afl_mcp=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Build the shared tool context from configuration.
pub fn build_context(config: &Config) -> Result<ToolContext, ApiError> {
    let upstream = HttpUpstream::new(config.upstream_url.clone(), config.timeout)?;

    let identity: Arc<dyn IdentityProvider> = if config.auth_disabled {
        warn!("Authentication disabled: all callers resolve to the anonymous user");
        Arc::new(AnonymousProvider)
    } else {
        Arc::new(UserInfoProvider::new(
            config.userinfo_url.clone(),
            config.timeout,
        )?)
    };

    Ok(ToolContext::new(Arc::new(upstream), identity))
}

/// Run the API server with the given configuration
pub async fn run(config: Config) -> Result<(), ApiError> {
    init_tracing();

    let ctx = build_context(&config)?;
    let ct = CancellationToken::new();
    let app = create_router(ctx, ct.clone()).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ApiError::Bind { addr, source })?;
    info!(upstream = %config.upstream_url, "AFL MCP server listening on http://{}", addr);
    info!("MCP endpoint: http://{}/mcp", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(ct))
        .await
        .map_err(ApiError::Serve)?;

    Ok(())
}

/// Resolves on Ctrl+C after cancelling open MCP streams.
async fn shutdown_signal(ct: CancellationToken) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down AFL MCP server..."),
        Err(e) => {
            error!("failed to listen for ctrl_c: {:?}", e);
            std::future::pending::<()>().await;
        }
    }
    ct.cancel();
}
