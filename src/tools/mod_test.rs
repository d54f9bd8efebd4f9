use std::sync::Arc;

use crate::auth::{AuthError, Credentials};
use crate::test_support::{capture_logs, signed_out, untouched};

use super::*;

const OPERATIONS: [&str; 16] = [
    "GetGameResult",
    "GetRoundResultsByYear",
    "GetProjectedLadderByRoundAndYear",
    "GetProjectedLadderByRoundAndYearBySource",
    "GetPowerRankingByRoundAndYear",
    "GetPowerRankingByRoundYearAndSource",
    "GetTeamPowerRankingByRoundAndYear",
    "GetSources",
    "GetSourceById",
    "GetCurrentStandings",
    "GetStandingsByRoundAndYear",
    "GetTeamInfo",
    "GetTeamsBySeason",
    "GetTipsByRoundAndYear",
    "GetTipsByGame",
    "GetFutureTips",
];

fn count<T>(outcome: Result<Vec<T>, AuthError>) -> Result<usize, AuthError> {
    outcome.map(|rows| rows.len())
}

/// Calls every operation once with valid parameters, in `OPERATIONS` order.
async fn call_all(ctx: ToolContext, caller: &Credentials) -> Vec<Result<usize, AuthError>> {
    let games = GameTools::new(ctx.clone());
    let ladder = LadderTools::new(ctx.clone());
    let power = PowerRankingsTools::new(ctx.clone());
    let sources = SourcesTools::new(ctx.clone());
    let standings = StandingsTools::new(ctx.clone());
    let teams = TeamTools::new(ctx.clone());
    let tips = TipsTools::new(ctx);

    vec![
        count(games.get_game_result(caller, 1).await),
        count(games.get_round_results_by_year(caller, 2024, 1).await),
        count(ladder.get_projected_ladder(caller, 1, 2024).await),
        count(
            ladder
                .get_projected_ladder_by_source(caller, 1, 2024, "Squiggle")
                .await,
        ),
        count(power.get_power_ranking(caller, 1, 2024).await),
        count(power.get_power_ranking_by_source(caller, 1, 2024, 1).await),
        count(power.get_team_power_ranking(caller, 1, 2024, 1).await),
        count(sources.get_sources(caller).await),
        count(sources.get_source_by_id(caller, "1").await),
        count(standings.get_current_standings(caller).await),
        count(
            standings
                .get_standings_by_round_and_year(caller, 1, 2024)
                .await,
        ),
        count(teams.get_team_info(caller, 1).await),
        count(teams.get_teams_by_season(caller, 2024).await),
        count(tips.get_tips_by_round_and_year(caller, 1, 2024).await),
        count(tips.get_tips_by_game(caller, 1).await),
        count(tips.get_future_tips(caller).await),
    ]
}

#[tokio::test]
async fn test_every_operation_propagates_authorization_failure() {
    let logs = capture_logs();
    let ctx = ToolContext::new(Arc::new(untouched()), Arc::new(signed_out()));

    let outcomes = call_all(ctx, &Credentials::anonymous()).await;

    assert_eq!(outcomes.len(), OPERATIONS.len());
    for (operation, outcome) in OPERATIONS.iter().zip(outcomes) {
        assert_eq!(
            outcome,
            Err(AuthError::MissingCredentials),
            "{operation} should fail authorization"
        );
        let expected = format!("Authorization failed for {operation}");
        assert!(logs.has("WARN", &expected), "missing log for {operation}");
    }
}
