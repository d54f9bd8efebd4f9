//! Tipping tools

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
pub struct GetTipsByRoundAndYearParams {
    #[schemars(description = "The round that has been played")]
    pub round_number: i32,
    #[schemars(description = "The year of the tips")]
    pub year: i32,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTipsByGameParams {
    #[schemars(description = "The ID of the game")]
    pub game_id: i64,
}

#[tool_router(router = tips_router, vis = "pub(crate)")]
impl AflServer {
    #[tool(
        name = "GetTipsByRoundAndYear",
        description = "Get the tips for a particular round and year"
    )]
    pub async fn get_tips_by_round_and_year(
        &self,
        Extension(parts): Extension<Parts>,
        params: Parameters<GetTipsByRoundAndYearParams>,
    ) -> Result<CallToolResult, McpError> {
        let credentials = Credentials::from_parts(&parts);
        let GetTipsByRoundAndYearParams { round_number, year } = params.0;
        render(
            self.tips
                .get_tips_by_round_and_year(&credentials, round_number, year)
                .await,
        )
    }

    #[tool(name = "GetTipsByGame", description = "Get the tips of a particular game")]
    pub async fn get_tips_by_game(
        &self,
        Extension(parts): Extension<Parts>,
        params: Parameters<GetTipsByGameParams>,
    ) -> Result<CallToolResult, McpError> {
        let credentials = Credentials::from_parts(&parts);
        render(
            self.tips
                .get_tips_by_game(&credentials, params.0.game_id)
                .await,
        )
    }

    #[tool(
        name = "GetFutureTips",
        description = "Get the tips for current and future games"
    )]
    pub async fn get_future_tips(
        &self,
        Extension(parts): Extension<Parts>,
    ) -> Result<CallToolResult, McpError> {
        let credentials = Credentials::from_parts(&parts);
        render(self.tips.get_future_tips(&credentials).await)
    }
}
