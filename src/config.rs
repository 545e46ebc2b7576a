//! Configuration types for circle-dl
//!
//! The [`Config`] record is resolved once per invocation and is immutable
//! afterwards. It is the only place environment state is read: the API
//! token comes from a named environment variable here, and is threaded
//! explicitly into every component that needs it.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::{Error, Result};
use crate::filter::ArtifactFilter;

/// Base URL of the CircleCI v1.1 API for GitHub-hosted projects
pub const DEFAULT_API_BASE: &str = "https://circleci.com/api/v1.1/project/github";

/// Resolved configuration for one invocation
#[derive(Debug, Clone)]
pub struct Config {
    /// GitHub organisation or user name owning the project
    pub user: String,

    /// Project name
    pub project: String,

    /// Branch to query for the latest successful build
    pub branch: String,

    /// Compiled artifact path filter
    pub filter: ArtifactFilter,

    /// Directory downloaded artifacts are written to
    pub out_dir: PathBuf,

    /// CircleCI API token
    pub token: String,

    /// API base URL; [`DEFAULT_API_BASE`] outside of tests
    pub api_base: String,
}

impl Config {
    /// Resolve a [`Config`] from parsed CLI arguments
    ///
    /// Compiles the filter pattern and reads the API token from the
    /// environment variable named by `--token`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the filter pattern is invalid or the
    /// token environment variable is unset. Both are reported before any
    /// network call is made.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let filter = ArtifactFilter::new(&cli.filter)?;
        let token = read_token(&cli.token)?;
        Ok(Self {
            user: cli.user.clone(),
            project: cli.project.clone(),
            branch: cli.branch.clone(),
            filter,
            out_dir: cli.out.clone(),
            token,
            api_base: DEFAULT_API_BASE.to_string(),
        })
    }
}

/// Read the API token from the named environment variable
fn read_token(var_name: &str) -> Result<String> {
    std::env::var(var_name).map_err(|_| {
        Error::config(
            format!("cannot read API token from environment variable {var_name}"),
            "token",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serial_test::serial;

    fn parse_cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("circle-dl").chain(args.iter().copied()))
    }

    #[test]
    #[serial]
    fn from_cli_reads_token_from_named_env_var() {
        // SAFETY: env mutation is confined to #[serial] tests
        unsafe { std::env::set_var("CIRCLE_DL_TEST_TOKEN", "s3cret") };

        let cli = parse_cli(&[
            "--user",
            "acme",
            "--project",
            "widgets",
            "--token",
            "CIRCLE_DL_TEST_TOKEN",
        ]);
        let config = Config::from_cli(&cli).unwrap();

        assert_eq!(config.token, "s3cret");
        assert_eq!(config.user, "acme");
        assert_eq!(config.project, "widgets");
        assert_eq!(config.branch, "master");
        assert_eq!(config.out_dir, PathBuf::from("out"));
        assert_eq!(config.filter.as_str(), ".*");
        assert_eq!(config.api_base, DEFAULT_API_BASE);

        unsafe { std::env::remove_var("CIRCLE_DL_TEST_TOKEN") };
    }

    #[test]
    #[serial]
    fn from_cli_fails_when_token_env_var_is_unset() {
        unsafe { std::env::remove_var("CIRCLE_DL_TEST_TOKEN_UNSET") };

        let cli = parse_cli(&[
            "--user",
            "acme",
            "--project",
            "widgets",
            "--token",
            "CIRCLE_DL_TEST_TOKEN_UNSET",
        ]);
        let err = Config::from_cli(&cli).unwrap_err();

        match err {
            Error::Config { message, key } => {
                assert!(message.contains("CIRCLE_DL_TEST_TOKEN_UNSET"));
                assert_eq!(key.as_deref(), Some("token"));
            }
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    #[serial]
    fn from_cli_rejects_invalid_filter_before_reading_token() {
        unsafe { std::env::remove_var("CIRCLE_DL_TEST_TOKEN_UNSET") };

        let cli = parse_cli(&[
            "--user",
            "acme",
            "--project",
            "widgets",
            "--filter",
            "(unclosed",
            "--token",
            "CIRCLE_DL_TEST_TOKEN_UNSET",
        ]);
        let err = Config::from_cli(&cli).unwrap_err();

        match err {
            Error::Config { key, .. } => assert_eq!(key.as_deref(), Some("filter")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }
}
