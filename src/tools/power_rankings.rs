use crate::auth::{AuthError, Credentials};
use crate::models::PowerRankingsRecord;
use crate::upstream::{Endpoint, Query};
use crate::validation::{
    POWER_RANKING_YEAR_MESSAGE, ParamCheck, ROUND_MESSAGE, SOURCE_ID_MESSAGE, TEAM_ID_MESSAGE,
    is_valid_id, is_valid_power_ranking_year, is_valid_round,
};

use super::ToolContext;

const PROPERTY: &str = "power";

/// Power rankings. The series only exists from 2022.
#[derive(Clone)]
pub struct PowerRankingsTools {
    ctx: ToolContext,
}

fn power_query(year: i32, round_number: i32) -> Query {
    Query::new("power")
        .param("year", year)
        .param("round", round_number)
}

impl PowerRankingsTools {
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }

    pub async fn get_power_ranking(
        &self,
        credentials: &Credentials,
        round_number: i32,
        year: i32,
    ) -> Result<Vec<PowerRankingsRecord>, AuthError> {
        const OPERATION: &str = "GetPowerRankingByRoundAndYear";
        self.ctx.authorize(credentials, OPERATION).await?;

        let valid = ParamCheck::new(OPERATION)
            .check(
                "year",
                year,
                is_valid_power_ranking_year,
                POWER_RANKING_YEAR_MESSAGE,
            )
            .check("roundNumber", round_number, is_valid_round, ROUND_MESSAGE)
            .finish();
        if valid.is_err() {
            return Ok(Vec::new());
        }

        let endpoint = power_query(year, round_number).build();
        self.fetch(endpoint, OPERATION).await
    }

    pub async fn get_power_ranking_by_source(
        &self,
        credentials: &Credentials,
        round_number: i32,
        year: i32,
        source_id: i64,
    ) -> Result<Vec<PowerRankingsRecord>, AuthError> {
        const OPERATION: &str = "GetPowerRankingByRoundYearAndSource";
        self.ctx.authorize(credentials, OPERATION).await?;

        let valid = ParamCheck::new(OPERATION)
            .check(
                "year",
                year,
                is_valid_power_ranking_year,
                POWER_RANKING_YEAR_MESSAGE,
            )
            .check("roundNumber", round_number, is_valid_round, ROUND_MESSAGE)
            .check("sourceId", source_id, is_valid_id, SOURCE_ID_MESSAGE)
            .finish();
        if valid.is_err() {
            return Ok(Vec::new());
        }

        let endpoint = power_query(year, round_number)
            .param("source", source_id)
            .build();
        self.fetch(endpoint, OPERATION).await
    }

    pub async fn get_team_power_ranking(
        &self,
        credentials: &Credentials,
        round_number: i32,
        year: i32,
        team_id: i64,
    ) -> Result<Vec<PowerRankingsRecord>, AuthError> {
        const OPERATION: &str = "GetTeamPowerRankingByRoundAndYear";
        self.ctx.authorize(credentials, OPERATION).await?;

        let valid = ParamCheck::new(OPERATION)
            .check(
                "year",
                year,
                is_valid_power_ranking_year,
                POWER_RANKING_YEAR_MESSAGE,
            )
            .check("roundNumber", round_number, is_valid_round, ROUND_MESSAGE)
            .check("teamId", team_id, is_valid_id, TEAM_ID_MESSAGE)
            .finish();
        if valid.is_err() {
            return Ok(Vec::new());
        }

        let endpoint = power_query(year, round_number)
            .param("team", team_id)
            .build();
        self.fetch(endpoint, OPERATION).await
    }

    async fn fetch(
        &self,
        endpoint: Endpoint,
        operation: &str,
    ) -> Result<Vec<PowerRankingsRecord>, AuthError> {
        Ok(self.ctx.fetch(&endpoint, operation, PROPERTY).await)
    }
}
