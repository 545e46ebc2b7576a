//! API response types for the CircleCI v1.1 REST API
//!
//! Only the fields this tool consumes are modelled; CircleCI returns many
//! more per object and serde ignores the rest.

use serde::Deserialize;

/// One build as returned by the "builds for branch" endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Build {
    /// Build number, unique within a project
    pub build_num: u64,
}

/// One entry from a build's artifact manifest
#[derive(Debug, Clone, Deserialize)]
pub struct Artifact {
    /// Relative path as stored by CircleCI (e.g. `dist/app.tar.gz`)
    pub path: String,
    /// Fully-qualified download URL
    pub url: String,
}
