//! Squiggle API access.
//!
//! - `client`: the [`Upstream`] transport seam and its reqwest implementation
//! - `endpoint`: builder for the semicolon-separated `?q=` query dialect
//! - `pipeline`: the shared fetch → unwrap → decode routine used by every tool

mod client;
#[cfg(test)]
mod client_test;
mod endpoint;
mod error;
mod pipeline;

#[cfg(test)]
pub use client::MockUpstream;
pub use client::{DEFAULT_UPSTREAM_URL, HttpUpstream, Upstream, UpstreamResponse};
pub use endpoint::{Endpoint, Query};
pub use error::UpstreamError;
pub use pipeline::Pipeline;
