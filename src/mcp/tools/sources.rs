//! Model source tools

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
pub struct GetSourceByIdParams {
    #[schemars(description = "The ID of the source")]
    pub source_id: String,
}

#[tool_router(router = sources_router, vis = "pub(crate)")]
impl AflServer {
    #[tool(name = "GetSources", description = "Gets a list of sources")]
    pub async fn get_sources(
        &self,
        Extension(parts): Extension<Parts>,
    ) -> Result<CallToolResult, McpError> {
        let credentials = Credentials::from_parts(&parts);
        render(self.sources.get_sources(&credentials).await)
    }

    #[tool(name = "GetSourceById", description = "Gets a source by ID")]
    pub async fn get_source_by_id(
        &self,
        Extension(parts): Extension<Parts>,
        params: Parameters<GetSourceByIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let credentials = Credentials::from_parts(&parts);
        render(
            self.sources
                .get_source_by_id(&credentials, &params.0.source_id)
                .await,
        )
    }
}
