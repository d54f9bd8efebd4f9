//! Input validation for tool parameters.
//!
//! Predicates are pure. [`ParamCheck`] runs them in declaration order and
//! stops at the first failure, so the warning always names the earliest bad
//! parameter.

use std::fmt::Display;

use chrono::Datelike;
use miette::Diagnostic;
use thiserror::Error;
use tracing::warn;

/// First season of the VFL/AFL competition.
pub const FIRST_SEASON: i32 = 1897;

/// First season the power rankings series covers.
pub const FIRST_POWER_RANKING_SEASON: i32 = 2022;

/// Highest round number accepted, finals included.
pub const MAX_ROUND: i32 = 30;

pub const YEAR_MESSAGE: &str = "Year must be between 1897 and current year + 1";
pub const ROUND_MESSAGE: &str = "Round must be between 1 and 30";
pub const POWER_RANKING_YEAR_MESSAGE: &str =
    "Year must be 2022 or later (power rankings not available before 2022)";
pub const GAME_ID_MESSAGE: &str = "Game ID must be a positive integer";
pub const TEAM_ID_MESSAGE: &str = "Team ID must be a positive integer";
pub const SOURCE_ID_MESSAGE: &str = "Source ID must be a positive integer";
pub const SOURCE_MESSAGE: &str = "Source cannot be null or empty";
pub const SOURCE_ID_STRING_MESSAGE: &str = "Source ID cannot be null or empty";

fn current_year() -> i32 {
    chrono::Local::now().year()
}

pub fn is_valid_year(year: i32) -> bool {
    (FIRST_SEASON..=current_year() + 1).contains(&year)
}

pub fn is_valid_round(round: i32) -> bool {
    (1..=MAX_ROUND).contains(&round)
}

pub fn is_valid_id(id: i64) -> bool {
    id > 0
}

pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn is_valid_power_ranking_year(year: i32) -> bool {
    (FIRST_POWER_RANKING_SEASON..=current_year() + 1).contains(&year)
}

/// The first parameter that failed validation.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {name} parameter: {value}. {message}")]
#[diagnostic(code(afl_mcp::validation::invalid_parameter))]
pub struct InvalidParameter {
    pub name: &'static str,
    pub value: String,
    pub message: &'static str,
}

/// Ordered, short-circuiting parameter validator.
///
/// ```
/// use afl_mcp::validation::{ParamCheck, is_valid_round, is_valid_year};
///
/// let outcome = ParamCheck::new("GetRoundResultsByYear")
///     .check("year", 2024, is_valid_year, "bad year")
///     .check("round", 99, is_valid_round, "bad round")
///     .finish();
/// assert_eq!(outcome.unwrap_err().name, "round");
/// ```
#[derive(Debug)]
#[must_use]
pub struct ParamCheck<'a> {
    operation: &'a str,
    failure: Option<InvalidParameter>,
}

impl<'a> ParamCheck<'a> {
    pub fn new(operation: &'a str) -> Self {
        Self {
            operation,
            failure: None,
        }
    }

    /// Queue one check. Once a check has failed, later predicates are not run.
    pub fn check<V, P>(
        mut self,
        name: &'static str,
        value: V,
        predicate: P,
        message: &'static str,
    ) -> Self
    where
        V: Display + Copy,
        P: FnOnce(V) -> bool,
    {
        if self.failure.is_none() && !predicate(value) {
            self.failure = Some(InvalidParameter {
                name,
                value: value.to_string(),
                message,
            });
        }
        self
    }

    /// Log and return the first failure, if any.
    pub fn finish(self) -> Result<(), InvalidParameter> {
        match self.failure {
            None => Ok(()),
            Some(failure) => {
                warn!(
                    operation = self.operation,
                    parameter = failure.name,
                    value = %failure.value,
                    "Invalid {} parameter: {}. {}",
                    failure.name,
                    failure.value,
                    failure.message
                );
                Err(failure)
            }
        }
    }
}
