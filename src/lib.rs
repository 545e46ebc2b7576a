//! # circle-dl
//!
//! CLI tool for downloading build artifacts from CircleCI.
//!
//! The pipeline is three sequential API calls: resolve the latest
//! successful build number for a branch, list that build's artifacts
//! filtered by a regular expression, and download the matches into a
//! local directory. The whole thing is exposed as a library API with the
//! binary as a thin composition root, so every stage can be exercised
//! against a mock HTTP server.
//!
//! ## Quick Start
//!
//! ```no_run
//! use circle_dl::{ArtifactFetcher, ArtifactFilter, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config {
//!         user: "acme".to_string(),
//!         project: "widgets".to_string(),
//!         branch: "main".to_string(),
//!         filter: ArtifactFilter::new(r"dist/.*\.tar\.gz")?,
//!         out_dir: "out".into(),
//!         token: "secret-token".to_string(),
//!         api_base: circle_dl::config::DEFAULT_API_BASE.to_string(),
//!     };
//!
//!     let written = ArtifactFetcher::new(config)?.run().await?;
//!     for path in written {
//!         println!("downloaded {}", path.display());
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Command-line surface and dispatch
pub mod cli;
/// Authenticated HTTP executor
pub mod client;
/// Configuration resolution
pub mod config;
/// Error types
pub mod error;
/// The three-stage retrieval pipeline
pub mod fetcher;
/// Artifact path filtering
pub mod filter;
/// API response types
pub mod types;
/// Path manipulation helpers
pub mod utils;

pub use cli::Cli;
pub use client::ApiClient;
pub use config::Config;
pub use error::{Error, Result};
pub use fetcher::ArtifactFetcher;
pub use filter::ArtifactFilter;
pub use types::{Artifact, Build};
