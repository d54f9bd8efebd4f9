//! Game result tools

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
pub struct GetGameResultParams {
    #[schemars(description = "The ID of the game")]
    pub game_id: i64,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetRoundResultsByYearParams {
    #[schemars(description = "The year of the round")]
    pub year: i32,
    #[schemars(description = "The round number")]
    pub round: i32,
}

#[tool_router(router = game_router, vis = "pub(crate)")]
impl AflServer {
    #[tool(name = "GetGameResult", description = "Gets result from a played game")]
    pub async fn get_game_result(
        &self,
        Extension(parts): Extension<Parts>,
        params: Parameters<GetGameResultParams>,
    ) -> Result<CallToolResult, McpError> {
        let credentials = Credentials::from_parts(&parts);
        render(
            self.games
                .get_game_result(&credentials, params.0.game_id)
                .await,
        )
    }

    #[tool(
        name = "GetRoundResultsByYear",
        description = "Get the results from a round of a particular year"
    )]
    pub async fn get_round_results_by_year(
        &self,
        Extension(parts): Extension<Parts>,
        params: Parameters<GetRoundResultsByYearParams>,
    ) -> Result<CallToolResult, McpError> {
        let credentials = Credentials::from_parts(&parts);
        let GetRoundResultsByYearParams { year, round } = params.0;
        render(
            self.games
                .get_round_results_by_year(&credentials, year, round)
                .await,
        )
    }
}
