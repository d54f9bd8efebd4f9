use crate::auth::{AuthError, Credentials};
use crate::models::StandingsRecord;
use crate::upstream::Query;
use crate::validation::{ParamCheck, ROUND_MESSAGE, YEAR_MESSAGE, is_valid_round, is_valid_year};

use super::ToolContext;

const PROPERTY: &str = "standings";

/// Actual competition standings.
#[derive(Clone)]
pub struct StandingsTools {
    ctx: ToolContext,
}

impl StandingsTools {
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }

    pub async fn get_current_standings(
        &self,
        credentials: &Credentials,
    ) -> Result<Vec<StandingsRecord>, AuthError> {
        const OPERATION: &str = "GetCurrentStandings";
        self.ctx.authorize(credentials, OPERATION).await?;

        let endpoint = Query::new("standings").build();
        Ok(self.ctx.fetch(&endpoint, OPERATION, PROPERTY).await)
    }

    pub async fn get_standings_by_round_and_year(
        &self,
        credentials: &Credentials,
        round_number: i32,
        year: i32,
    ) -> Result<Vec<StandingsRecord>, AuthError> {
        const OPERATION: &str = "GetStandingsByRoundAndYear";
        self.ctx.authorize(credentials, OPERATION).await?;

        let valid = ParamCheck::new(OPERATION)
            .check("year", year, is_valid_year, YEAR_MESSAGE)
            .check("roundNumber", round_number, is_valid_round, ROUND_MESSAGE)
            .finish();
        if valid.is_err() {
            return Ok(Vec::new());
        }

        let endpoint = Query::new("standings")
            .param("year", year)
            .param("round", round_number)
            .build();
        Ok(self.ctx.fetch(&endpoint, OPERATION, PROPERTY).await)
    }
}
