use axum::http::{HeaderMap, header::AUTHORIZATION, request::Parts};

use super::error::AuthError;

const BEARER_PREFIX: &str = "bearer ";

/// What the caller presented on the HTTP request carrying the tool call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    authorization: Option<String>,
}

impl Credentials {
    pub fn new(authorization: Option<String>) -> Self {
        Self { authorization }
    }

    /// Credentials carrying `Authorization: Bearer <token>`.
    pub fn bearer(token: &str) -> Self {
        Self::new(Some(format!("Bearer {token}")))
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn from_headers(headers: &HeaderMap) -> Self {
        let authorization = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        Self { authorization }
    }

    pub fn from_parts(parts: &Parts) -> Self {
        Self::from_headers(&parts.headers)
    }

    /// True when an `Authorization: Bearer …` header is present.
    pub fn has_bearer(&self) -> bool {
        self.authorization
            .as_deref()
            .is_some_and(|header| strip_bearer(header).is_some())
    }

    /// The token to forward to the identity provider.
    ///
    /// The `Bearer` scheme is optional; anything else is taken as the raw token.
    pub fn token(&self) -> Result<&str, AuthError> {
        let header = self
            .authorization
            .as_deref()
            .ok_or(AuthError::MissingCredentials)?;

        let token = strip_bearer(header).unwrap_or(header).trim();
        if token.is_empty() {
            return Err(AuthError::InvalidToken);
        }
        Ok(token)
    }
}

fn strip_bearer(header: &str) -> Option<&str> {
    let header = header.trim_start();
    let prefix = header.get(..BEARER_PREFIX.len())?;
    if prefix.eq_ignore_ascii_case(BEARER_PREFIX) {
        Some(&header[BEARER_PREFIX.len()..])
    } else {
        None
    }
}
