//! Caller identity.
//!
//! Every tool call resolves the caller before it touches the upstream API.
//! [`UserInfoProvider`] asks a userinfo endpoint who owns the bearer token;
//! [`AnonymousProvider`] stands in when authentication is disabled.

mod credentials;
mod error;
mod provider;
mod userinfo;

pub use credentials::Credentials;
pub use error::AuthError;
#[cfg(test)]
pub use provider::MockIdentityProvider;
pub use provider::{AnonymousProvider, Identity, IdentityProvider};
pub use userinfo::{DEFAULT_USERINFO_URL, UserInfoProvider};
