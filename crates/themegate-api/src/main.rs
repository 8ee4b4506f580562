//! Themegate API - theme switch server entry point

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use themegate_api::ApiServer;
use themegate_config::{ConfigManager, ConfigManagerTrait};
use tracing_subscriber::EnvFilter;

/// Serve the theme switch endpoint
#[derive(Debug, Parser)]
#[command(name = "themegate-api", version, about)]
struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(short, long, env = "THEMEGATE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the interface to bind
    #[arg(long)]
    host: Option<String>,

    /// Override the port to listen on
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut manager = match cli.config {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new(),
    };
    let mut config = manager
        .load_config()
        .with_context(|| format!("Failed to load {}", manager.config_path().display()))?;
    config.server.apply_overrides(cli.host, cli.port);
    manager
        .validate_config(&config)
        .context("Invalid configuration")?;

    tracing::info!("Starting Themegate API...");

    ApiServer::new(config)
        .run()
        .await
        .context("Server error")?;

    Ok(())
}
