use miette::Diagnostic;
use thiserror::Error;

/// Identity resolution failure. Fatal to the tool call that triggered it.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("No Authorization header present")]
    #[diagnostic(
        code(afl_mcp::auth::missing_credentials),
        help("Send an 'Authorization: Bearer <token>' header with the MCP request.")
    )]
    MissingCredentials,

    #[error("Authorization header does not carry a token")]
    #[diagnostic(code(afl_mcp::auth::invalid_token))]
    InvalidToken,

    #[error("Identity provider rejected the token with status {status}")]
    #[diagnostic(code(afl_mcp::auth::rejected))]
    Rejected { status: u16 },

    #[error("Identity provider error: {message}")]
    #[diagnostic(code(afl_mcp::auth::provider))]
    Provider { message: String },
}

impl From<reqwest::Error> for AuthError {
    fn from(e: reqwest::Error) -> Self {
        AuthError::Provider {
            message: e.to_string(),
        }
    }
}
