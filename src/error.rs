//! Error types for circle-dl
//!
//! This module provides error handling for the whole pipeline, including:
//! - A small closed set of error variants, one per failure class
//! - Structured context on each variant (status code, path, env var key)
//! - A crate-wide [`Result`] alias

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for circle-dl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for circle-dl
///
/// Every error is fatal: nothing is retried or recovered locally, each
/// variant propagates to the entry point, is logged, and terminates the
/// process with a non-zero status.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "token")
        key: Option<String>,
    },

    /// The API answered with a status other than 200
    #[error("request to {url} returned status {status}: {body}")]
    Request {
        /// The URL the request was sent to
        url: String,
        /// HTTP status code of the response
        status: u16,
        /// Response body, kept for diagnosis
        body: String,
    },

    /// Network error (connection failure, timeout)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The branch has no successful builds
    ///
    /// Distinct from [`Error::Request`]: the HTTP call itself succeeded,
    /// the returned build list was empty.
    #[error("no successful build found for branch '{branch}'")]
    NotFound {
        /// The branch that was queried
        branch: String,
    },

    /// Output directory or file could not be written
    #[error("filesystem error at {path}: {source}")]
    Filesystem {
        /// The path the operation failed on
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Malformed JSON in an API response body
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Build a configuration error from a message and the offending key
    pub fn config(message: impl Into<String>, key: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            key: Some(key.into()),
        }
    }
}
