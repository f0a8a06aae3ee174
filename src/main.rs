//! SWAPI proxy server.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌───────────────────────────────────────────────┐
//!                      │                  SWAPI PROXY                   │
//!                      │                                                │
//!   Client Request     │  ┌─────────┐   ┌──────────┐   ┌────────────┐  │
//!   ───────────────────┼─▶│  http   │──▶│ handlers │──▶│   swapi    │──┼──▶ swapi.dev
//!                      │  │ server  │   │ validate │   │  client    │  │
//!                      │  └─────────┘   └──────────┘   └─────┬──────┘  │
//!                      │                                     │         │
//!   Client Response    │  ┌──────────┐                        │         │
//!   ◀──────────────────┼──│ response │◀──── model / ApiError ─┘         │
//!                      │  └──────────┘                                  │
//!                      │                                                │
//!                      │  config · observability · lifecycle            │
//!                      └───────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use swapi_proxy::config::{load_config, AppConfig};
use swapi_proxy::lifecycle::startup;
use swapi_proxy::observability::logging;

#[derive(Parser)]
#[command(name = "swapi-proxy")]
#[command(about = "HTTP façade over the Star Wars API", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    logging::init(&config.observability)?;

    tracing::info!("swapi-proxy v{} starting", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &cli.config {
        tracing::info!(path = %path.display(), "Configuration file loaded");
    }

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
