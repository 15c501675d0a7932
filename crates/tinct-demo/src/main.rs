//! Tinct Demo — run a filter chain over an image file.
//!
//! Loads INPUT, threads it through the configured pipeline and writes OUTPUT.
//! Without `--filters` or `--pipeline` the stock chain is used:
//! saturate, darken, high contrast.

mod config;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{AppConfig, Cli};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tinct_demo=info,tinct_core=info,tinct_io=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = AppConfig::from_cli(Cli::parse())?;
    run(&config)
}

fn run(config: &AppConfig) -> anyhow::Result<()> {
    tracing::info!("pipeline: {}", config.pipeline);

    let source = tinct_io::load(&config.input)?;
    let processed = config.pipeline.process(source)?;
    tinct_io::save(&processed, &config.output)?;

    tracing::info!(
        "done: {} filter(s) applied to {}x{} image",
        config.pipeline.len(),
        processed.width(),
        processed.height()
    );
    Ok(())
}
