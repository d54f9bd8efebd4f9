//! Query strings for the Squiggle API.
//!
//! Squiggle separates parameters with `;` rather than `&`:
//! `?q=games;year=2024;round=5`.

use std::fmt::{self, Display};

/// A fully formed relative endpoint, appended to the upstream base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint(String);

impl Endpoint {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Builder for an [`Endpoint`]. Parameters keep insertion order.
#[derive(Debug, Clone)]
#[must_use]
pub struct Query {
    query: String,
}

impl Query {
    pub fn new(kind: &str) -> Self {
        Self {
            query: format!("?q={kind}"),
        }
    }

    /// Append `;name=value` verbatim. Use for numbers and fixed tokens.
    pub fn param(mut self, name: &str, value: impl Display) -> Self {
        self.query.push_str(&format!(";{name}={value}"));
        self
    }

    /// Append `;name=value` with `value` percent-encoded.
    pub fn param_encoded(self, name: &str, value: &str) -> Self {
        let encoded = urlencoding::encode(value);
        self.param(name, encoded)
    }

    pub fn build(self) -> Endpoint {
        Endpoint(self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_without_params() {
        assert_eq!(Query::new("sources").build().as_str(), "?q=sources");
    }

    #[test]
    fn test_params_keep_order() {
        let endpoint = Query::new("games")
            .param("year", 2024)
            .param("round", 5)
            .build();
        assert_eq!(endpoint.as_str(), "?q=games;year=2024;round=5");
    }

    #[test]
    fn test_encoded_param() {
        let endpoint = Query::new("ladder")
            .param("year", 2024)
            .param("round", 5)
            .param_encoded("source", "a b/c")
            .build();
        assert_eq!(
            endpoint.to_string(),
            "?q=ladder;year=2024;round=5;source=a%20b%2Fc"
        );
    }

    #[test]
    fn test_fixed_token_is_not_encoded() {
        let endpoint = Query::new("tips").param("complete", "!100").build();
        assert_eq!(endpoint.as_str(), "?q=tips;complete=!100");
    }
}
