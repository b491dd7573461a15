use anyhow::{Context, Result};
use clap::Parser;
use resume_coach::cli::{handle_command, Cli};
use resume_coach::core::LoggingConfig;
use std::fs::OpenOptions;
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging(logging: &LoggingConfig) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true) // Clear file on startup
        .open(&logging.log_file)
        .with_context(|| format!("Failed to open log file: {}", logging.log_file.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .context("Invalid log directive")?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    init_logging(&config.logging)?;

    info!("Environment: {}", config.environment);
    info!("Analysis service: {}", config.service.base_url);

    let ok = handle_command(&cli, &config).await?;
    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
