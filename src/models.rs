//! Upstream response records.
//!
//! Each record mirrors one JSON object returned by the Squiggle API. Every
//! field is optional because upstream omits or nulls fields freely, and the
//! serde names are the upstream names so a record re-serializes into the
//! same shape it was decoded from.

use serde::{Deserialize, Serialize};

// =============================================================================
// Games
// =============================================================================

/// A fixture or result from `?q=games`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<i64>,
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<i64>,
    #[serde(rename = "hteam", default, skip_serializing_if = "Option::is_none")]
    pub home_team: Option<String>,
    #[serde(rename = "ateam", default, skip_serializing_if = "Option::is_none")]
    pub away_team: Option<String>,
    #[serde(
        rename = "hteamid",
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub home_team_id: Option<i64>,
    #[serde(
        rename = "ateamid",
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub away_team_id: Option<i64>,
    #[serde(
        rename = "hscore",
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub home_team_score: Option<i64>,
    #[serde(
        rename = "hgoals",
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub home_team_goals: Option<i64>,
    #[serde(
        rename = "hbehinds",
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub home_team_behinds: Option<i64>,
    #[serde(
        rename = "ascore",
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub away_team_score: Option<i64>,
    #[serde(
        rename = "agoals",
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub away_team_goals: Option<i64>,
    #[serde(
        rename = "abehinds",
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub away_team_behinds: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub round: Option<i64>,
    #[serde(rename = "roundname", default, skip_serializing_if = "Option::is_none")]
    pub round_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
    #[serde(
        rename = "winnerteamid",
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub winner_team_id: Option<i64>,
    /// Percentage of the game completed (100 once the final siren has gone).
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub complete: Option<i64>,
    /// Non-zero for finals; the value identifies the kind of final.
    #[serde(
        rename = "is_final",
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub final_game_type: Option<i64>,
    #[serde(
        rename = "is_grand_final",
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_grand_final: Option<i64>,
}

// =============================================================================
// Projected ladder
// =============================================================================

/// A projected ladder position from `?q=ladder`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LadderRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(
        rename = "teamid",
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub team_id: Option<i64>,
    /// Projected wins, kept as upstream formats it.
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub wins: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub rank: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(
        rename = "sourceid",
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(
        rename = "mean_rank",
        default,
        deserialize_with = "crate::serde_utils::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub mean_rank: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub dummy: Option<i64>,
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<i64>,
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub round: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swarms: Option<Vec<String>>,
}

// =============================================================================
// Standings
// =============================================================================

/// An actual ladder position from `?q=standings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandingsRecord {
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub rank: Option<i64>,
    /// Team id.
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<i64>,
    #[serde(rename = "name", default, skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub played: Option<i64>,
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub wins: Option<i64>,
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub draws: Option<i64>,
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub losses: Option<i64>,
    #[serde(
        rename = "pts",
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub points: Option<i64>,
    #[serde(
        rename = "for",
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub points_for: Option<i64>,
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub against: Option<i64>,
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub goals_for: Option<i64>,
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub behinds_for: Option<i64>,
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub goals_against: Option<i64>,
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub behinds_against: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
}

// =============================================================================
// Tips
// =============================================================================

/// A model's tip for one game from `?q=tips`.
///
/// Margins, confidences, bits and error are kept as strings: upstream emits
/// them as formatted decimals and they are passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TipsRecord {
    #[serde(
        rename = "gameid",
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub game_id: Option<i64>,
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<i64>,
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub round: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(rename = "hteam", default, skip_serializing_if = "Option::is_none")]
    pub home_team: Option<String>,
    #[serde(rename = "ateam", default, skip_serializing_if = "Option::is_none")]
    pub away_team: Option<String>,
    #[serde(
        rename = "hteamid",
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub home_team_id: Option<i64>,
    #[serde(
        rename = "ateamid",
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub away_team_id: Option<i64>,
    /// Name of the tipped team.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    #[serde(
        rename = "tipteamid",
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub tip_team_id: Option<i64>,
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub margin: Option<String>,
    #[serde(
        rename = "hmargin",
        default,
        deserialize_with = "crate::serde_utils::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub home_margin: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub confidence: Option<String>,
    #[serde(
        rename = "hconfidence",
        default,
        deserialize_with = "crate::serde_utils::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub home_confidence: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub bits: Option<String>,
    #[serde(
        rename = "err",
        default,
        deserialize_with = "crate::serde_utils::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<String>,
    /// 1 when the tip was right, 0 when wrong, absent until the game is played.
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub correct: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(
        rename = "sourceid",
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

// =============================================================================
// Power rankings
// =============================================================================

/// A team's power rating from one model, from `?q=power`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PowerRankingsRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(
        rename = "teamid",
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub team_id: Option<i64>,
    /// Rating as upstream formats it.
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub power: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub rank: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(
        rename = "sourceid",
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_id: Option<i64>,
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub dummy: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<i64>,
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub round: Option<i64>,
}

// =============================================================================
// Sources
// =============================================================================

/// A data provider (computer model) from `?q=sources`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceRecord {
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

// =============================================================================
// Teams
// =============================================================================

/// A club from `?q=teams`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "abbrev", default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub debut: Option<i64>,
    /// Final season, 0 while the club is still active.
    #[serde(
        default,
        deserialize_with = "crate::serde_utils::lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub retirement: Option<i64>,
}
