//! CLI entry point - the composition root.
//!
//! Builds the logger from the parsed arguments, resolves configuration,
//! and runs the retrieval pipeline. All failures land here, get logged,
//! and exit the process with a non-zero status.

use clap::Parser;
use tracing::error;

use circle_dl::Cli;

/// Construct the process logger from the `--debug` flag
///
/// Verbosity is decided here, once, from configuration; no other component
/// touches global logging state.
fn init_tracing(debug: bool) {
    let max_level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if let Err(err) = circle_dl::cli::run(&cli).await {
        error!("{err}");
        std::process::exit(1);
    }
}
