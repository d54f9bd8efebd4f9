use std::fmt::{self, Display};

use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};

#[cfg(test)]
use mockall::automock;

use super::credentials::Credentials;
use super::error::AuthError;

/// The calling user, as reported by the identity provider.
///
/// Field aliases accept both Microsoft Graph `/me` and OIDC userinfo replies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    #[serde(alias = "sub")]
    pub id: String,
    #[serde(default, alias = "name", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, alias = "preferred_username", skip_serializing_if = "Option::is_none")]
    pub user_principal_name: Option<String>,
    #[serde(default, alias = "email", skip_serializing_if = "Option::is_none")]
    pub mail: Option<String>,
}

impl Identity {
    pub fn anonymous() -> Self {
        Self {
            id: "anonymous".to_string(),
            ..Default::default()
        }
    }
}

impl Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self
            .user_principal_name
            .as_deref()
            .or(self.mail.as_deref())
            .or(self.display_name.as_deref())
            .unwrap_or(&self.id);
        f.write_str(label)
    }
}

/// Resolves the caller behind a set of credentials. Can be mocked in tests.
#[cfg_attr(test, automock)]
pub trait IdentityProvider: Send + Sync {
    fn current_user(
        &self,
        credentials: &Credentials,
    ) -> BoxFuture<'static, Result<Identity, AuthError>>;

    fn is_authenticated(&self, credentials: &Credentials) -> bool;
}

/// Provider used when authentication is switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousProvider;

impl IdentityProvider for AnonymousProvider {
    fn current_user(
        &self,
        _credentials: &Credentials,
    ) -> BoxFuture<'static, Result<Identity, AuthError>> {
        Box::pin(async { Ok(Identity::anonymous()) })
    }

    fn is_authenticated(&self, _credentials: &Credentials) -> bool {
        true
    }
}
