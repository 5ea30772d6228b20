//! Codealign - repository/requirement alignment service
//!
//! Scores how well a GitHub repository satisfies a project requirement and
//! generates review questions for it.

use std::path::PathBuf;

use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use codealign_core::{Config, Secrets};
use codealign_server::AppState;

/// Codealign: repository/requirement alignment analysis over HTTP
#[derive(Parser, Debug)]
#[command(name = "codealign")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Address to bind (overrides config and env)
    #[arg(long)]
    listen: Option<String>,

    /// Path to a config file (defaults to ~/.config/codealign/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Load configuration with overrides
    let config = Config::load_with_overrides(cli.config.as_ref(), cli.listen.clone())?;

    if cli.verbose {
        info!(
            listen_addr = %config.server.listen_addr,
            llm_model = %config.llm.model,
            "Configuration loaded"
        );
    }

    // Credentials are required before the server starts accepting requests
    let secrets = Secrets::load()?;
    let state = AppState::new(&config, &secrets)?;

    codealign_server::run_with_shutdown(&config.server.listen_addr, state, shutdown_signal())
        .await?;

    info!("Server stopped");

    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down");
        }
    }
}
