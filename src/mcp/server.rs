//! MCP server handler
//!
//! [`AflServer`] owns one instance of every tool family and a router built
//! from the per-family `#[tool_router]` blocks in [`super::tools`].

use rmcp::{
    ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::{ServerCapabilities, ServerInfo, Tool},
    tool_handler,
};

use crate::tools::{
    GameTools, LadderTools, PowerRankingsTools, SourcesTools, StandingsTools, TeamTools, TipsTools,
    ToolContext,
};

const INSTRUCTIONS: &str = "AFL MCP Server - Australian Football League data from the \
Squiggle API: game results, projected ladders, standings, power rankings, model tips, \
sources and teams. Years run from 1897 to next season (power rankings from 2022); \
rounds from 1 to 30. Queries with invalid parameters or no upstream data return an \
empty list.";

#[derive(Clone)]
pub struct AflServer {
    pub(super) games: GameTools,
    pub(super) ladder: LadderTools,
    pub(super) power_rankings: PowerRankingsTools,
    pub(super) sources: SourcesTools,
    pub(super) standings: StandingsTools,
    pub(super) teams: TeamTools,
    pub(super) tips: TipsTools,
    tool_router: ToolRouter<Self>,
}

impl AflServer {
    /// Create a new MCP server over the given tool context
    ///
    /// # Arguments
    /// * `ctx` - Upstream pipeline and identity provider shared by every tool
    ///
    /// # Returns
    /// A new AflServer with every tool family routed
    pub fn new(ctx: ToolContext) -> Self {
        Self {
            games: GameTools::new(ctx.clone()),
            ladder: LadderTools::new(ctx.clone()),
            power_rankings: PowerRankingsTools::new(ctx.clone()),
            sources: SourcesTools::new(ctx.clone()),
            standings: StandingsTools::new(ctx.clone()),
            teams: TeamTools::new(ctx.clone()),
            tips: TipsTools::new(ctx),
            tool_router: Self::game_router()
                + Self::ladder_router()
                + Self::power_rankings_router()
                + Self::sources_router()
                + Self::standings_router()
                + Self::teams_router()
                + Self::tips_router(),
        }
    }

    /// Every registered tool, as advertised by `tools/list`.
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for AflServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder()
            .enable_tools()
            .build();
        info.server_info.name = env!("CARGO_PKG_NAME").to_string();
        info.server_info.version = env!("CARGO_PKG_VERSION").to_string();
        info.instructions = Some(INSTRUCTIONS.to_string());
        info
    }
}
