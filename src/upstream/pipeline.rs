//! Shared call pipeline for every tool.
//!
//! A fetch is GET → status check → envelope unwrap → decode → optional
//! post-check. Every failure along the way is logged and collapses into an
//! empty list, so callers never see upstream errors.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{error, info, warn};

use super::client::Upstream;
use super::endpoint::Endpoint;
use super::error::UpstreamError;

/// Result of looking up the envelope property in a response body.
#[derive(Debug, PartialEq)]
pub(crate) enum Envelope<T> {
    /// Property absent from the top-level object.
    Missing,
    /// Property present but JSON `null`.
    Null,
    Rows(Vec<T>),
}

/// Parse `body` and decode `body[property]` as a list of `T`.
///
/// Errors cover malformed JSON and rows that do not match `T`.
pub(crate) fn unwrap_envelope<T: DeserializeOwned>(
    body: &str,
    property: &str,
) -> Result<Envelope<T>, serde_json::Error> {
    let mut document: Value = serde_json::from_str(body)?;

    let Some(value) = document.get_mut(property).map(Value::take) else {
        return Ok(Envelope::Missing);
    };

    if value.is_null() {
        return Ok(Envelope::Null);
    }

    serde_json::from_value(value).map(Envelope::Rows)
}

#[derive(Clone)]
pub struct Pipeline {
    upstream: Arc<dyn Upstream>,
}

impl Pipeline {
    pub fn new(upstream: Arc<dyn Upstream>) -> Self {
        Self { upstream }
    }

    /// Fetch `endpoint` and return the rows under `property`.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        operation: &str,
        property: &str,
    ) -> Vec<T> {
        self.execute(endpoint, operation, property, None::<fn(&[T]) -> bool>)
            .await
    }

    /// Like [`fetch`](Self::fetch), but `check` must accept the decoded rows
    /// or the result is discarded.
    pub async fn fetch_checked<T, F>(
        &self,
        endpoint: &Endpoint,
        operation: &str,
        property: &str,
        check: F,
    ) -> Vec<T>
    where
        T: DeserializeOwned,
        F: FnOnce(&[T]) -> bool,
    {
        self.execute(endpoint, operation, property, Some(check))
            .await
    }

    async fn execute<T, F>(
        &self,
        endpoint: &Endpoint,
        operation: &str,
        property: &str,
        check: Option<F>,
    ) -> Vec<T>
    where
        T: DeserializeOwned,
        F: FnOnce(&[T]) -> bool,
    {
        info!(endpoint = %endpoint, "Fetching data for {}", operation);

        let response = match self.upstream.get(endpoint.as_str()).await {
            Ok(response) => response,
            Err(e @ UpstreamError::Timeout { .. }) => {
                error!(endpoint = %endpoint, error = %e, "Timeout for {}", operation);
                return Vec::new();
            }
            Err(e) => {
                error!(endpoint = %endpoint, error = %e, "Network error for {}", operation);
                return Vec::new();
            }
        };

        if !response.is_success() {
            error!(
                endpoint = %endpoint,
                status = response.status,
                "API request failed with status {}",
                response.status
            );
            return Vec::new();
        }

        let rows = match unwrap_envelope::<T>(&response.body, property) {
            Ok(Envelope::Rows(rows)) => rows,
            Ok(Envelope::Missing) => {
                warn!(
                    "No '{}' property found in API response for {}",
                    property, operation
                );
                return Vec::new();
            }
            Ok(Envelope::Null) => {
                warn!("Failed to deserialize response for {}", operation);
                return Vec::new();
            }
            Err(e) => {
                error!(endpoint = %endpoint, error = %e, "JSON parsing error for {}", operation);
                return Vec::new();
            }
        };

        if rows.is_empty() {
            info!("No data found for {}", operation);
        } else {
            info!(
                "Successfully retrieved {} items for {}",
                rows.len(),
                operation
            );
        }

        let accepted = check.is_none_or(|check| check(&rows));
        if !accepted {
            warn!("Additional validation failed for {}", operation);
            return Vec::new();
        }

        rows
    }
}
