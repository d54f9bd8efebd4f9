use crate::auth::{AuthError, Credentials};
use crate::models::TeamRecord;
use crate::upstream::Query;
use crate::validation::{ParamCheck, TEAM_ID_MESSAGE, YEAR_MESSAGE, is_valid_id, is_valid_year};

use super::ToolContext;

const PROPERTY: &str = "teams";

#[derive(Clone)]
pub struct TeamTools {
    ctx: ToolContext,
}

impl TeamTools {
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }

    pub async fn get_team_info(
        &self,
        credentials: &Credentials,
        team_id: i64,
    ) -> Result<Vec<TeamRecord>, AuthError> {
        const OPERATION: &str = "GetTeamInfo";
        self.ctx.authorize(credentials, OPERATION).await?;

        let valid = ParamCheck::new(OPERATION)
            .check("teamId", team_id, is_valid_id, TEAM_ID_MESSAGE)
            .finish();
        if valid.is_err() {
            return Ok(Vec::new());
        }

        let endpoint = Query::new("teams").param("team", team_id).build();
        Ok(self.ctx.fetch(&endpoint, OPERATION, PROPERTY).await)
    }

    pub async fn get_teams_by_season(
        &self,
        credentials: &Credentials,
        year: i32,
    ) -> Result<Vec<TeamRecord>, AuthError> {
        const OPERATION: &str = "GetTeamsBySeason";
        self.ctx.authorize(credentials, OPERATION).await?;

        let valid = ParamCheck::new(OPERATION)
            .check("year", year, is_valid_year, YEAR_MESSAGE)
            .finish();
        if valid.is_err() {
            return Ok(Vec::new());
        }

        let endpoint = Query::new("teams").param("year", year).build();
        Ok(self.ctx.fetch(&endpoint, OPERATION, PROPERTY).await)
    }
}
