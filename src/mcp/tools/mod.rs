//! MCP tool surface.
//!
//! Each module declares the parameter types for one tool family and an
//! `#[tool_router]` block on [`AflServer`](super::AflServer). The blocks are
//! combined into a single router when the server is built.

mod games;
mod ladder;
mod power_rankings;
mod sources;
mod standings;
mod teams;
mod tips;

use rmcp::{ErrorData as McpError, model::*};
use serde::Serialize;

use crate::auth::AuthError;

pub use games::{GetGameResultParams, GetRoundResultsByYearParams};
pub use ladder::{GetProjectedLadderBySourceParams, GetProjectedLadderParams};
pub use power_rankings::{
    GetPowerRankingBySourceParams, GetPowerRankingParams, GetTeamPowerRankingParams,
};
pub use sources::GetSourceByIdParams;
pub use standings::GetStandingsByRoundAndYearParams;
pub use teams::{GetTeamInfoParams, GetTeamsBySeasonParams};
pub use tips::{GetTipsByGameParams, GetTipsByRoundAndYearParams};

/// Render a tool outcome as pretty JSON text content.
pub(crate) fn render<T: Serialize>(
    outcome: Result<Vec<T>, AuthError>,
) -> Result<CallToolResult, McpError> {
    let rows = outcome.map_err(map_auth_error)?;

    let content = serde_json::to_string_pretty(&rows).map_err(|e| {
        McpError::internal_error(
            "serialization_error",
            Some(serde_json::json!({"error": e.to_string()})),
        )
    })?;

    Ok(CallToolResult::success(vec![Content::text(content)]))
}

/// Map AuthError to McpError.
pub(crate) fn map_auth_error(err: AuthError) -> McpError {
    McpError::invalid_request(
        "unauthorized",
        Some(serde_json::json!({
            "error": err.to_string(),
        })),
    )
}
