use crate::auth::{AuthError, Credentials};
use crate::models::GameRecord;
use crate::upstream::Query;
use crate::validation::{
    GAME_ID_MESSAGE, ParamCheck, ROUND_MESSAGE, YEAR_MESSAGE, is_valid_id, is_valid_round,
    is_valid_year,
};

use super::ToolContext;

const PROPERTY: &str = "games";

/// Played-game results.
#[derive(Clone)]
pub struct GameTools {
    ctx: ToolContext,
}

impl GameTools {
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }

    pub async fn get_game_result(
        &self,
        credentials: &Credentials,
        game_id: i64,
    ) -> Result<Vec<GameRecord>, AuthError> {
        const OPERATION: &str = "GetGameResult";
        self.ctx.authorize(credentials, OPERATION).await?;

        let valid = ParamCheck::new(OPERATION)
            .check("gameId", game_id, is_valid_id, GAME_ID_MESSAGE)
            .finish();
        if valid.is_err() {
            return Ok(Vec::new());
        }

        let endpoint = Query::new("games").param("game", game_id).build();
        Ok(self.ctx.fetch(&endpoint, OPERATION, PROPERTY).await)
    }

    pub async fn get_round_results_by_year(
        &self,
        credentials: &Credentials,
        year: i32,
        round: i32,
    ) -> Result<Vec<GameRecord>, AuthError> {
        const OPERATION: &str = "GetRoundResultsByYear";
        self.ctx.authorize(credentials, OPERATION).await?;

        let valid = ParamCheck::new(OPERATION)
            .check("year", year, is_valid_year, YEAR_MESSAGE)
            .check("round", round, is_valid_round, ROUND_MESSAGE)
            .finish();
        if valid.is_err() {
            return Ok(Vec::new());
        }

        let endpoint = Query::new("games")
            .param("year", year)
            .param("round", round)
            .build();
        Ok(self.ctx.fetch(&endpoint, OPERATION, PROPERTY).await)
    }
}
