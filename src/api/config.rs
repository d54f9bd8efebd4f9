//! Server configuration.
//!
//! Precedence: builder overrides (CLI flags) > environment variables > defaults.

use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use crate::auth::DEFAULT_USERINFO_URL;
use crate::upstream::DEFAULT_UPSTREAM_URL;

pub const HOST_ENV: &str = "AFL_MCP_HOST";
pub const PORT_ENV: &str = "AFL_MCP_PORT";
pub const UPSTREAM_URL_ENV: &str = "AFL_MCP_UPSTREAM_URL";
pub const TIMEOUT_ENV: &str = "AFL_MCP_TIMEOUT_SECS";
pub const USERINFO_URL_ENV: &str = "AFL_MCP_USERINFO_URL";
pub const AUTH_DISABLED_ENV: &str = "AFL_MCP_AUTH_DISABLED";

/// API server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Squiggle API base URL; endpoints are appended verbatim
    pub upstream_url: String,
    /// Timeout for every outbound request
    pub timeout: Duration,
    /// Userinfo endpoint bearer tokens are checked against
    pub userinfo_url: String,
    /// Resolve every caller as anonymous instead of checking tokens
    pub auth_disabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            timeout: Duration::from_secs(30),
            userinfo_url: DEFAULT_USERINFO_URL.to_string(),
            auth_disabled: false,
        }
    }
}

impl Config {
    /// Defaults overlaid with any `AFL_MCP_*` environment variables.
    ///
    /// Values that fail to parse are logged and ignored.
    pub fn new() -> Self {
        let mut config = Self::default();

        if let Some(host) = parse_env(HOST_ENV) {
            config.host = host;
        }
        if let Some(port) = parse_env(PORT_ENV) {
            config.port = port;
        }
        if let Ok(url) = env::var(UPSTREAM_URL_ENV) {
            config.upstream_url = url;
        }
        if let Some(secs) = parse_env::<u64>(TIMEOUT_ENV) {
            config.timeout = Duration::from_secs(secs);
        }
        if let Ok(url) = env::var(USERINFO_URL_ENV) {
            config.userinfo_url = url;
        }
        if let Some(disabled) = parse_flag(AUTH_DISABLED_ENV) {
            config.auth_disabled = disabled;
        }

        config
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_upstream_url(mut self, url: impl Into<String>) -> Self {
        self.upstream_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_userinfo_url(mut self, url: impl Into<String>) -> Self {
        self.userinfo_url = url.into();
        self
    }

    pub fn with_auth_disabled(mut self, disabled: bool) -> Self {
        self.auth_disabled = disabled;
        self
    }
}

fn parse_env<T: FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(variable = name, value = %raw, "Ignoring invalid value for {}", name);
            None
        }
    }
}

fn parse_flag(name: &str) -> Option<bool> {
    let raw = env::var(name).ok()?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => {
            warn!(variable = name, value = %raw, "Ignoring invalid value for {}", name);
            None
        }
    }
}
