use crate::auth::{AuthError, Credentials};
use crate::models::LadderRecord;
use crate::upstream::Query;
use crate::validation::{
    ParamCheck, ROUND_MESSAGE, SOURCE_MESSAGE, YEAR_MESSAGE, is_valid_round, is_valid_string,
    is_valid_year,
};

use super::ToolContext;

const PROPERTY: &str = "ladder";

/// Projected ladders, aggregated or per model.
#[derive(Clone)]
pub struct LadderTools {
    ctx: ToolContext,
}

impl LadderTools {
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }

    pub async fn get_projected_ladder(
        &self,
        credentials: &Credentials,
        round_number: i32,
        year: i32,
    ) -> Result<Vec<LadderRecord>, AuthError> {
        const OPERATION: &str = "GetProjectedLadderByRoundAndYear";
        self.ctx.authorize(credentials, OPERATION).await?;

        let valid = ParamCheck::new(OPERATION)
            .check("year", year, is_valid_year, YEAR_MESSAGE)
            .check("roundNumber", round_number, is_valid_round, ROUND_MESSAGE)
            .finish();
        if valid.is_err() {
            return Ok(Vec::new());
        }

        let endpoint = Query::new("ladder")
            .param("year", year)
            .param("round", round_number)
            .build();
        Ok(self.ctx.fetch(&endpoint, OPERATION, PROPERTY).await)
    }

    /// `source` is free text and is percent-encoded into the query.
    pub async fn get_projected_ladder_by_source(
        &self,
        credentials: &Credentials,
        round_number: i32,
        year: i32,
        source: &str,
    ) -> Result<Vec<LadderRecord>, AuthError> {
        const OPERATION: &str = "GetProjectedLadderByRoundAndYearBySource";
        self.ctx.authorize(credentials, OPERATION).await?;

        let valid = ParamCheck::new(OPERATION)
            .check("year", year, is_valid_year, YEAR_MESSAGE)
            .check("roundNumber", round_number, is_valid_round, ROUND_MESSAGE)
            .check("source", source, is_valid_string, SOURCE_MESSAGE)
            .finish();
        if valid.is_err() {
            return Ok(Vec::new());
        }

        let endpoint = Query::new("ladder")
            .param("year", year)
            .param("round", round_number)
            .param_encoded("source", source)
            .build();
        Ok(self.ctx.fetch(&endpoint, OPERATION, PROPERTY).await)
    }
}
