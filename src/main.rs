use std::{fs::OpenOptions, sync::Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use stock_recommender_tui::{
    api::YahooApi,
    app::App,
    config::{Cli, Config},
    services::StockLookupService,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from(Cli::parse());
    init_logging(&config)?;

    info!(symbol = %config.symbol(), period = %config.period(), "Starting dashboard");

    let api = YahooApi::new(&config).context("Failed to build HTTP client")?;
    let service = StockLookupService::new(api, StdRng::from_entropy());

    let mut app = App::new(service, config.symbol(), *config.period());
    app.run().await?;

    Ok(())
}

/// The terminal belongs to the UI, so logs go to a file.
fn init_logging(config: &Config) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_file())
        .with_context(|| format!("Failed to open log file {}", config.log_file().display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}
