//! Command-line surface and pipeline dispatch

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::error::Result;
use crate::fetcher::ArtifactFetcher;

/// Download build artifacts from CircleCI
///
/// Fetches the latest successful build on a branch, filters its artifacts
/// by a regular expression, and downloads the matches.
#[derive(Debug, Clone, Parser)]
#[command(name = "circle-dl", version, about, long_about = None)]
pub struct Cli {
    /// GitHub organisation name or user name
    #[arg(long)]
    pub user: String,

    /// GitHub project name
    #[arg(long)]
    pub project: String,

    /// Branch from where to get artifacts
    #[arg(long, default_value = "master")]
    pub branch: String,

    /// Get only files whose path matches this pattern (anchored at the
    /// start of the path)
    #[arg(long, default_value = ".*")]
    pub filter: String,

    /// Directory to put downloaded artifacts to
    #[arg(long, default_value = "out")]
    pub out: PathBuf,

    /// Env var name to read the CircleCI API token from
    #[arg(long, default_value = "TOKEN", value_name = "ENV_VAR")]
    pub token: String,

    /// Print debug info
    #[arg(long)]
    pub debug: bool,
}

/// Resolve configuration and run the retrieval pipeline
///
/// # Errors
///
/// Propagates any pipeline error; the caller is expected to log it and
/// exit non-zero.
pub async fn run(cli: &Cli) -> Result<Vec<PathBuf>> {
    let config = Config::from_cli(cli)?;
    let fetcher = ArtifactFetcher::new(config)?;
    fetcher.run().await
}
