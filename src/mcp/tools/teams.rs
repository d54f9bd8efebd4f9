//! Team tools

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
pub struct GetTeamInfoParams {
    #[schemars(description = "The ID of the team")]
    pub team_id: i64,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTeamsBySeasonParams {
    #[schemars(description = "The year to get teams for")]
    pub year: i32,
}

#[tool_router(router = teams_router, vis = "pub(crate)")]
impl AflServer {
    #[tool(name = "GetTeamInfo", description = "Gets information for a AFL team")]
    pub async fn get_team_info(
        &self,
        Extension(parts): Extension<Parts>,
        params: Parameters<GetTeamInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        let credentials = Credentials::from_parts(&parts);
        render(
            self.teams
                .get_team_info(&credentials, params.0.team_id)
                .await,
        )
    }

    #[tool(
        name = "GetTeamsBySeason",
        description = "Gets a list of teams who played in a particular season"
    )]
    pub async fn get_teams_by_season(
        &self,
        Extension(parts): Extension<Parts>,
        params: Parameters<GetTeamsBySeasonParams>,
    ) -> Result<CallToolResult, McpError> {
        let credentials = Credentials::from_parts(&parts);
        render(
            self.teams
                .get_teams_by_season(&credentials, params.0.year)
                .await,
        )
    }
}
