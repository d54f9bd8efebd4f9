use std::net::SocketAddr;

use miette::Diagnostic;
use thiserror::Error;

use crate::auth::AuthError;
use crate::upstream::UpstreamError;

#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Failed to create upstream client: {0}")]
    #[diagnostic(code(afl_mcp::api::upstream))]
    Upstream(#[from] UpstreamError),

    #[error("Failed to create identity provider: {0}")]
    #[diagnostic(code(afl_mcp::api::identity))]
    Identity(#[from] AuthError),

    #[error("Failed to bind {addr}: {source}")]
    #[diagnostic(
        code(afl_mcp::api::bind),
        help("Is another process already listening on this port?")
    )]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(afl_mcp::api::serve))]
    Serve(#[source] std::io::Error),
}
