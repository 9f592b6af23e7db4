//! vmcd gateway binary.
//!
//! - Raw TCP listener (default 0.0.0.0:4040)
//! - One task per terminal connection, one request/response per connection
//! - Config path: first argument, or `vmcd.yaml`

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use vmcd_core::Result;
use vmcd_gateway::{app_state, config, transport};

const DEFAULT_CONFIG_PATH: &str = "vmcd.yaml";

#[tokio::main]
async fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "vmcd-gateway stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::load_from_file(&path)?;
    let listen = cfg.gateway.listen_addr()?;

    let state = app_state::AppState::new(cfg)?;

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| vmcd_core::VmcError::Config(format!("bind {listen} failed: {e}")))?;
    tracing::info!(%listen, "vmcd-gateway listening");

    transport::tcp::serve(listener, state).await
}
