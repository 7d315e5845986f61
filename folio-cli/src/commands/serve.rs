//! HTTP server command
//!
//! Runs the article renderer in front of the upstream article API.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use folio_server::{run_server, ApiClient, ServerConfig, UpstreamConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "FOLIO_BIND", default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// Base URL of the upstream article API
    #[arg(long, env = "API_BASE_URL")]
    pub api_base_url: Option<String>,

    /// Key sent to the article API as X-Renderer-Key
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Directory served under /assets
    #[arg(long, env = "FOLIO_ASSETS_DIR", default_value = "assets")]
    pub assets_dir: PathBuf,

    /// Upstream request timeout in seconds
    #[arg(long, env = "FOLIO_UPSTREAM_TIMEOUT", default_value = "10")]
    pub timeout: u64,
}

impl ServeArgs {
    fn upstream_config(&self) -> Result<UpstreamConfig> {
        let config = UpstreamConfig::new(
            self.api_base_url.clone().unwrap_or_default(),
            self.api_key.clone().unwrap_or_default(),
            Duration::from_secs(self.timeout),
        )?;
        Ok(config)
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let upstream = args
        .upstream_config()
        .context("Set API_BASE_URL and API_KEY via flags, environment or ./.env")?;

    tracing::info!(
        bind = %args.bind,
        upstream = %upstream.base_url,
        timeout_secs = args.timeout,
        "Starting folio server"
    );

    let client = ApiClient::new(upstream).context("Failed to build upstream client")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        assets_dir: args.assets_dir,
    };

    // Run server (blocks until shutdown)
    run_server(Arc::new(client), config)
        .await
        .context("Server error")?;

    Ok(())
}
