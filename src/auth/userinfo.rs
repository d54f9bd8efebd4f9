use std::time::Duration;

use futures_util::future::BoxFuture;
use reqwest::Client;

use super::credentials::Credentials;
use super::error::AuthError;
use super::provider::{Identity, IdentityProvider};

pub const DEFAULT_USERINFO_URL: &str = "https://graph.microsoft.com/v1.0/me";

/// Resolves callers by forwarding their bearer token to a userinfo endpoint.
#[derive(Clone)]
pub struct UserInfoProvider {
    url: String,
    client: Client,
}

impl UserInfoProvider {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, AuthError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("afl-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl IdentityProvider for UserInfoProvider {
    fn current_user(
        &self,
        credentials: &Credentials,
    ) -> BoxFuture<'static, Result<Identity, AuthError>> {
        let request = credentials
            .token()
            .map(|token| self.client.get(&self.url).bearer_auth(token));

        Box::pin(async move {
            let response = request?.send().await?;

            let status = response.status();
            if !status.is_success() {
                return Err(AuthError::Rejected {
                    status: status.as_u16(),
                });
            }

            Ok(response.json::<Identity>().await?)
        })
    }

    fn is_authenticated(&self, credentials: &Credentials) -> bool {
        credentials.has_bearer()
    }
}
