//! Projected ladder tools

use axum::http::request::Parts;
use rmcp::{
    ErrorData as McpError,
    handler::server::{tool::Extension, wrapper::Parameters},
    model::*,
    schemars,
    schemars::JsonSchema,
    tool, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::auth::Credentials;
use crate::mcp::server::AflServer;

use super::render;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetProjectedLadderParams {
    #[schemars(description = "The round that has been played")]
    pub round_number: i32,
    #[schemars(description = "The year of the ladder")]
    pub year: i32,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetProjectedLadderBySourceParams {
    #[schemars(description = "The round that has been played")]
    pub round_number: i32,
    #[schemars(description = "The year of the ladder")]
    pub year: i32,
    #[schemars(description = "The source of the ladder")]
    pub source: String,
}

#[tool_router(router = ladder_router, vis = "pub(crate)")]
impl AflServer {
    #[tool(
        name = "GetProjectedLadderByRoundAndYear",
        description = "Get the projected ladder for a particular round and year"
    )]
    pub async fn get_projected_ladder(
        &self,
        Extension(parts): Extension<Parts>,
        params: Parameters<GetProjectedLadderParams>,
    ) -> Result<CallToolResult, McpError> {
        let credentials = Credentials::from_parts(&parts);
        let GetProjectedLadderParams { round_number, year } = params.0;
        render(
            self.ladder
                .get_projected_ladder(&credentials, round_number, year)
                .await,
        )
    }

    #[tool(
        name = "GetProjectedLadderByRoundAndYearBySource",
        description = "Get the projected ladder for a particular round and year by source"
    )]
    pub async fn get_projected_ladder_by_source(
        &self,
        Extension(parts): Extension<Parts>,
        params: Parameters<GetProjectedLadderBySourceParams>,
    ) -> Result<CallToolResult, McpError> {
        let credentials = Credentials::from_parts(&parts);
        let GetProjectedLadderBySourceParams {
            round_number,
            year,
            source,
        } = params.0;
        render(
            self.ladder
                .get_projected_ladder_by_source(&credentials, round_number, year, &source)
                .await,
        )
    }
}
