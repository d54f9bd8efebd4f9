use crate::auth::{AuthError, Credentials};
use crate::models::TipsRecord;
use crate::upstream::Query;
use crate::validation::{
    GAME_ID_MESSAGE, ParamCheck, ROUND_MESSAGE, YEAR_MESSAGE, is_valid_id, is_valid_round,
    is_valid_year,
};

use super::ToolContext;

const PROPERTY: &str = "tips";

/// Model tips for past and upcoming games.
#[derive(Clone)]
pub struct TipsTools {
    ctx: ToolContext,
}

impl TipsTools {
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }

    pub async fn get_tips_by_round_and_year(
        &self,
        credentials: &Credentials,
        round_number: i32,
        year: i32,
    ) -> Result<Vec<TipsRecord>, AuthError> {
        const OPERATION: &str = "GetTipsByRoundAndYear";
        self.ctx.authorize(credentials, OPERATION).await?;

        let valid = ParamCheck::new(OPERATION)
            .check("year", year, is_valid_year, YEAR_MESSAGE)
            .check("roundNumber", round_number, is_valid_round, ROUND_MESSAGE)
            .finish();
        if valid.is_err() {
            return Ok(Vec::new());
        }

        let endpoint = Query::new("tips")
            .param("year", year)
            .param("round", round_number)
            .build();
        Ok(self.ctx.fetch(&endpoint, OPERATION, PROPERTY).await)
    }

    pub async fn get_tips_by_game(
        &self,
        credentials: &Credentials,
        game_id: i64,
    ) -> Result<Vec<TipsRecord>, AuthError> {
        const OPERATION: &str = "GetTipsByGame";
        self.ctx.authorize(credentials, OPERATION).await?;

        let valid = ParamCheck::new(OPERATION)
            .check("gameId", game_id, is_valid_id, GAME_ID_MESSAGE)
            .finish();
        if valid.is_err() {
            return Ok(Vec::new());
        }

        let endpoint = Query::new("tips").param("game", game_id).build();
        Ok(self.ctx.fetch(&endpoint, OPERATION, PROPERTY).await)
    }

    /// Tips for every game not yet completed.
    pub async fn get_future_tips(
        &self,
        credentials: &Credentials,
    ) -> Result<Vec<TipsRecord>, AuthError> {
        const OPERATION: &str = "GetFutureTips";
        self.ctx.authorize(credentials, OPERATION).await?;

        let endpoint = Query::new("tips").param("complete", "!100").build();
        Ok(self.ctx.fetch(&endpoint, OPERATION, PROPERTY).await)
    }
}
