//! HTTP transport for the Squiggle API.
//!
//! The [`Upstream`] trait is the seam tests replace with `MockUpstream`;
//! [`HttpUpstream`] is the reqwest-backed implementation used in production.

use std::time::Duration;

use futures_util::future::BoxFuture;
use reqwest::Client;

#[cfg(test)]
use mockall::automock;

use super::error::UpstreamError;

pub const DEFAULT_UPSTREAM_URL: &str = "https://api.squiggle.com.au/";

/// Raw upstream reply: status code and undecoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

impl UpstreamResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Read-only access to the upstream API. Can be mocked in tests.
#[cfg_attr(test, automock)]
pub trait Upstream: Send + Sync {
    /// GET `base_url + endpoint`. Only transport failures are errors; any
    /// HTTP status is returned as a response.
    fn get(&self, endpoint: &str) -> BoxFuture<'static, Result<UpstreamResponse, UpstreamError>>;
}

/// reqwest implementation of [`Upstream`].
///
/// Holds one connection pool; cloning shares it.
#[derive(Clone)]
pub struct HttpUpstream {
    base_url: String,
    client: Client,
}

impl HttpUpstream {
    /// Create a client for the Squiggle API
    ///
    /// # Arguments
    /// * `base_url` - Prefix every endpoint is appended to
    /// * `timeout` - Limit for each request, connect included
    ///
    /// # Returns
    /// The client, or [`UpstreamError::Client`] if reqwest cannot be built
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("afl-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

impl Upstream for HttpUpstream {
    fn get(&self, endpoint: &str) -> BoxFuture<'static, Result<UpstreamResponse, UpstreamError>> {
        let request = self.client.get(self.url(endpoint));

        Box::pin(async move {
            let response = request.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(UpstreamResponse { status, body })
        })
    }
}
