//! AFL MCP server binary.

use std::net::IpAddr;
use std::time::Duration;

use afl_mcp::api::{self, Config};
use clap::Parser;

#[derive(Parser)]
#[command(name = "afl-mcp")]
#[command(
    author,
    version,
    about = "MCP server for AFL data from the Squiggle API",
    long_about = None
)]
struct Cli {
    /// Host address to bind to [env: AFL_MCP_HOST] [default: 0.0.0.0]
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on [env: AFL_MCP_PORT] [default: 8080]
    #[arg(short, long)]
    port: Option<u16>,

    /// Squiggle API base URL [env: AFL_MCP_UPSTREAM_URL]
    #[arg(long)]
    upstream_url: Option<String>,

    /// Upstream request timeout in seconds [env: AFL_MCP_TIMEOUT_SECS] [default: 30]
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Userinfo endpoint used to resolve bearer tokens [env: AFL_MCP_USERINFO_URL]
    #[arg(long)]
    userinfo_url: Option<String>,

    /// Skip token checks and treat every caller as anonymous [env: AFL_MCP_AUTH_DISABLED]
    #[arg(long, overrides_with = "auth")]
    no_auth: bool,

    /// Check bearer tokens even when AFL_MCP_AUTH_DISABLED is set
    #[arg(long, overrides_with = "no_auth")]
    auth: bool,
}

impl Cli {
    fn into_config(self) -> Config {
        let auth_disabled = self.auth_disabled();
        let mut config = Config::new();
        if let Some(host) = self.host {
            config = config.with_host(host);
        }
        if let Some(port) = self.port {
            config = config.with_port(port);
        }
        if let Some(url) = self.upstream_url {
            config = config.with_upstream_url(url);
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if let Some(url) = self.userinfo_url {
            config = config.with_userinfo_url(url);
        }
        if let Some(disabled) = auth_disabled {
            config = config.with_auth_disabled(disabled);
        }
        config
    }

    /// `None` leaves the environment setting in place.
    fn auth_disabled(&self) -> Option<bool> {
        match (self.no_auth, self.auth) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let _ = rustls::crypto::ring::default_provider().install_default();
    api::init_tracing();

    let config = Cli::parse().into_config();
    api::run(config).await?;

    Ok(())
}
