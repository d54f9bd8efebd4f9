use crate::auth::{AuthError, Credentials};
use crate::models::SourceRecord;
use crate::upstream::Query;
use crate::validation::{ParamCheck, SOURCE_ID_STRING_MESSAGE, is_valid_string};

use super::ToolContext;

const PROPERTY: &str = "sources";

/// Prediction models (tipsters) known to the upstream.
#[derive(Clone)]
pub struct SourcesTools {
    ctx: ToolContext,
}

impl SourcesTools {
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }

    pub async fn get_sources(
        &self,
        credentials: &Credentials,
    ) -> Result<Vec<SourceRecord>, AuthError> {
        const OPERATION: &str = "GetSources";
        self.ctx.authorize(credentials, OPERATION).await?;

        let endpoint = Query::new("sources").build();
        Ok(self.ctx.fetch(&endpoint, OPERATION, PROPERTY).await)
    }

    pub async fn get_source_by_id(
        &self,
        credentials: &Credentials,
        source_id: &str,
    ) -> Result<Vec<SourceRecord>, AuthError> {
        const OPERATION: &str = "GetSourceById";
        self.ctx.authorize(credentials, OPERATION).await?;

        let valid = ParamCheck::new(OPERATION)
            .check(
                "sourceId",
                source_id,
                is_valid_string,
                SOURCE_ID_STRING_MESSAGE,
            )
            .finish();
        if valid.is_err() {
            return Ok(Vec::new());
        }

        let endpoint = Query::new("sources")
            .param_encoded("source", source_id)
            .build();
        Ok(self.ctx.fetch(&endpoint, OPERATION, PROPERTY).await)
    }
}
