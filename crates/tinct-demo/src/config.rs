//! Runtime configuration for the demo.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tinct_core::Pipeline;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "tinct-demo")]
#[command(about = "Apply a chain of RGBA filters to an image file")]
pub struct Cli {
    /// Image to read (PNG, JPEG, BMP, ...)
    pub input: PathBuf,

    /// Where to write the result; the format follows the extension
    pub output: PathBuf,

    /// Comma-separated filter chain. Available filters: greyscale,
    /// double_brightness, darken, high_contrast, saturate
    #[arg(short, long, env = "TINCT_FILTERS")]
    pub filters: Option<String>,

    /// JSON file holding an array of filter names; overrides --filters
    #[arg(short, long, env = "TINCT_PIPELINE_FILE")]
    pub pipeline: Option<PathBuf>,
}

/// Resolved configuration for a single run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub pipeline: Pipeline,
}

impl AppConfig {
    /// Resolve the filter chain: pipeline file, then filter list, then the
    /// stock playground chain.
    pub fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        let pipeline = match (&cli.pipeline, &cli.filters) {
            (Some(path), _) => read_pipeline_file(path)?,
            (None, Some(list)) => list
                .parse::<Pipeline>()
                .with_context(|| format!("invalid filter list {list:?}"))?,
            (None, None) => Pipeline::playground(),
        };

        Ok(Self {
            input: cli.input,
            output: cli.output,
            pipeline,
        })
    }
}

fn read_pipeline_file(path: &Path) -> anyhow::Result<Pipeline> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read pipeline file {}", path.display()))?;
    Pipeline::from_json(&json)
        .with_context(|| format!("invalid pipeline file {}", path.display()))
}
