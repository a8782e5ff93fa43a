//! Vulnerable App - a deliberately insecure web service for scanner testing.
//!
//! Usage:
//!   vulnapp                        # serve on 0.0.0.0:5000
//!   vulnapp --verbose              # log every request
//!   vulnapp --config vulnapp.toml  # override host, port, shell, startup fetch

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use vulnerable_app::{api, config::AppConfig, startup, VulnAppError};

/// Vulnerable App - intentionally insecure, DO NOT DEPLOY
#[derive(Parser, Debug)]
#[command(name = "vulnapp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Optional configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Vulnerable App {} starting...", vulnerable_app::VERSION);

    let config = AppConfig::load(cli.config.as_deref())?;
    let shell = config.shell();

    // Fire and forget; the listener does not wait on it
    let _ = startup::spawn_startup_fetch(shell.clone(), config.startup_fetch.clone());

    let state = Arc::new(api::AppState::new(shell));

    if let Err(e) = run(&config, state).await {
        if e.is_fatal() {
            error!("Fatal: {}", e);
        }
        return Err(e.into());
    }

    Ok(())
}

async fn run(config: &AppConfig, state: Arc<api::AppState>) -> Result<(), VulnAppError> {
    let listener = api::bind(&config.host, config.port).await?;
    api::serve(listener, state).await
}
