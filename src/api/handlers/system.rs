//! System health handlers.

use tracing::instrument;

/// Liveness probe
#[instrument]
pub async fn healthz() -> &'static str {
    "Healthy"
}
