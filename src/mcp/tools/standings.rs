//! Standings tools

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
pub struct GetStandingsByRoundAndYearParams {
    #[schemars(description = "The round that has been played")]
    pub round_number: i32,
    #[schemars(description = "The year of the standings")]
    pub year: i32,
}

#[tool_router(router = standings_router, vis = "pub(crate)")]
impl AflServer {
    #[tool(name = "GetCurrentStandings", description = "Gets the current standing")]
    pub async fn get_current_standings(
        &self,
        Extension(parts): Extension<Parts>,
    ) -> Result<CallToolResult, McpError> {
        let credentials = Credentials::from_parts(&parts);
        render(self.standings.get_current_standings(&credentials).await)
    }

    #[tool(
        name = "GetStandingsByRoundAndYear",
        description = "Get the standings for a particular round and year"
    )]
    pub async fn get_standings_by_round_and_year(
        &self,
        Extension(parts): Extension<Parts>,
        params: Parameters<GetStandingsByRoundAndYearParams>,
    ) -> Result<CallToolResult, McpError> {
        let credentials = Credentials::from_parts(&parts);
        let GetStandingsByRoundAndYearParams { round_number, year } = params.0;
        render(
            self.standings
                .get_standings_by_round_and_year(&credentials, round_number, year)
                .await,
        )
    }
}
