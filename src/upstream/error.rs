//! Upstream transport errors.
//!
//! These never reach a tool caller: the pipeline logs them and returns an
//! empty result instead.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum UpstreamError {
    #[error("Request timed out: {message}")]
    #[diagnostic(code(afl_mcp::upstream::timeout))]
    Timeout { message: String },

    #[error("Network error: {message}")]
    #[diagnostic(code(afl_mcp::upstream::network))]
    Network { message: String },

    #[error("Failed to build HTTP client: {message}")]
    #[diagnostic(
        code(afl_mcp::upstream::client),
        help("Check the upstream URL and TLS configuration.")
    )]
    Client { message: String },
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            UpstreamError::Timeout {
                message: e.to_string(),
            }
        } else if e.is_builder() {
            UpstreamError::Client {
                message: e.to_string(),
            }
        } else {
            UpstreamError::Network {
                message: e.to_string(),
            }
        }
    }
}
