use crate::auth::Credentials;
use crate::test_support::{capture_logs, context, serving, untouched};

use super::LadderTools;

fn caller() -> Credentials {
    Credentials::bearer("token")
}

#[tokio::test]
async fn test_get_projected_ladder() {
    let upstream = serving(
        "?q=ladder;year=2024;round=10",
        200,
        r#"{"ladder": [
            {
                "team": "Sydney", "teamid": 16, "rank": 1, "wins": "17.3", "mean_rank": "1.2",
                "source": "Aggregate", "sourceid": 0
            }
        ]}"#,
    );
    let tools = LadderTools::new(context(upstream));

    let ladder = tools
        .get_projected_ladder(&caller(), 10, 2024)
        .await
        .unwrap();

    assert_eq!(ladder.len(), 1);
    assert_eq!(ladder[0].team.as_deref(), Some("Sydney"));
    assert_eq!(ladder[0].rank, Some(1));
    assert_eq!(ladder[0].wins.as_deref(), Some("17.3"));
}

#[tokio::test]
async fn test_source_is_percent_encoded() {
    let upstream = serving(
        "?q=ladder;year=2024;round=10;source=The%20Arc",
        200,
        r#"{"ladder":[{"team":"Sydney","source":"The Arc"}]}"#,
    );
    let tools = LadderTools::new(context(upstream));

    let ladder = tools
        .get_projected_ladder_by_source(&caller(), 10, 2024, "The Arc")
        .await
        .unwrap();

    assert_eq!(ladder[0].source.as_deref(), Some("The Arc"));
}

#[tokio::test]
async fn test_blank_source_is_rejected() {
    let logs = capture_logs();
    let tools = LadderTools::new(context(untouched()));

    let ladder = tools
        .get_projected_ladder_by_source(&caller(), 10, 2024, "  ")
        .await
        .unwrap();

    assert!(ladder.is_empty());
    assert!(logs.has("WARN", "Source cannot be null or empty"));
}

#[tokio::test]
async fn test_invalid_round_is_rejected() {
    let logs = capture_logs();
    let tools = LadderTools::new(context(untouched()));

    let ladder = tools
        .get_projected_ladder(&caller(), 31, 2024)
        .await
        .unwrap();

    assert!(ladder.is_empty());
    assert!(logs.has("WARN", "Invalid roundNumber parameter: 31"));
}
