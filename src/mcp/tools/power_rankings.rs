//! Power ranking tools

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
pub struct GetPowerRankingParams {
    #[schemars(description = "The round that has been played")]
    pub round_number: i32,
    #[schemars(description = "The year of the rankings (2022 or later)")]
    pub year: i32,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetPowerRankingBySourceParams {
    #[schemars(description = "The round that has been played")]
    pub round_number: i32,
    #[schemars(description = "The year of the rankings (2022 or later)")]
    pub year: i32,
    #[schemars(description = "The source ID of the model")]
    pub source_id: i64,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTeamPowerRankingParams {
    #[schemars(description = "The round that has been played")]
    pub round_number: i32,
    #[schemars(description = "The year of the rankings (2022 or later)")]
    pub year: i32,
    #[schemars(description = "The Team Id")]
    pub team_id: i64,
}

#[tool_router(router = power_rankings_router, vis = "pub(crate)")]
impl AflServer {
    #[tool(
        name = "GetPowerRankingByRoundAndYear",
        description = "Get Power Ranking by Round and Year"
    )]
    pub async fn get_power_ranking(
        &self,
        Extension(parts): Extension<Parts>,
        params: Parameters<GetPowerRankingParams>,
    ) -> Result<CallToolResult, McpError> {
        let credentials = Credentials::from_parts(&parts);
        let GetPowerRankingParams { round_number, year } = params.0;
        render(
            self.power_rankings
                .get_power_ranking(&credentials, round_number, year)
                .await,
        )
    }

    #[tool(
        name = "GetPowerRankingByRoundYearAndSource",
        description = "Get Power Ranking by Round, Year, and Model Source"
    )]
    pub async fn get_power_ranking_by_source(
        &self,
        Extension(parts): Extension<Parts>,
        params: Parameters<GetPowerRankingBySourceParams>,
    ) -> Result<CallToolResult, McpError> {
        let credentials = Credentials::from_parts(&parts);
        let GetPowerRankingBySourceParams {
            round_number,
            year,
            source_id,
        } = params.0;
        render(
            self.power_rankings
                .get_power_ranking_by_source(&credentials, round_number, year, source_id)
                .await,
        )
    }

    #[tool(
        name = "GetTeamPowerRankingByRoundAndYear",
        description = "Get Power Ranking for Team by Round and Year"
    )]
    pub async fn get_team_power_ranking(
        &self,
        Extension(parts): Extension<Parts>,
        params: Parameters<GetTeamPowerRankingParams>,
    ) -> Result<CallToolResult, McpError> {
        let credentials = Credentials::from_parts(&parts);
        let GetTeamPowerRankingParams {
            round_number,
            year,
            team_id,
        } = params.0;
        render(
            self.power_rankings
                .get_team_power_ranking(&credentials, round_number, year, team_id)
                .await,
        )
    }
}
