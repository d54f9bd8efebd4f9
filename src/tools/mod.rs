//! Tool operations, grouped by upstream domain.
//!
//! Each operation resolves the caller, validates its parameters, builds the
//! endpoint and hands off to the shared [`Pipeline`]. Invalid parameters give
//! an empty list without touching the network; only identity failures are
//! returned as errors.

mod games;
mod ladder;
#[cfg(test)]
mod ladder_test;
#[cfg(test)]
mod mod_test;
mod power_rankings;
mod sources;
mod standings;
mod teams;
mod tips;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::auth::{AuthError, Credentials, Identity, IdentityProvider};
use crate::upstream::{Endpoint, Pipeline, Upstream};

pub use games::GameTools;
pub use ladder::LadderTools;
pub use power_rankings::PowerRankingsTools;
pub use sources::SourcesTools;
pub use standings::StandingsTools;
pub use teams::TeamTools;
pub use tips::TipsTools;

/// Capabilities shared by every tool family.
#[derive(Clone)]
pub struct ToolContext {
    pipeline: Pipeline,
    identity: Arc<dyn IdentityProvider>,
}

impl ToolContext {
    /// Create the context shared by every tool family
    ///
    /// # Arguments
    /// * `upstream` - Client used for every Squiggle request
    /// * `identity` - Provider that resolves the caller of each tool
    ///
    /// # Returns
    /// A context whose pipeline wraps `upstream`
    pub fn new(upstream: Arc<dyn Upstream>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            pipeline: Pipeline::new(upstream),
            identity,
        }
    }

    /// Resolve the caller. Failure ends the tool call.
    pub async fn authorize(
        &self,
        credentials: &Credentials,
        operation: &str,
    ) -> Result<Identity, AuthError> {
        match self.identity.current_user(credentials).await {
            Ok(identity) => {
                info!(operation, user = %identity, "User {} invoked {}", identity, operation);
                Ok(identity)
            }
            Err(e) => {
                warn!(operation, error = %e, "Authorization failed for {}", operation);
                Err(e)
            }
        }
    }

    pub async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        operation: &str,
        property: &str,
    ) -> Vec<T> {
        self.pipeline.fetch(endpoint, operation, property).await
    }
}
