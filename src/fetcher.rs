//! The three-stage artifact retrieval pipeline
//!
//! [`ArtifactFetcher`] resolves the latest successful build number for a
//! branch, lists that build's artifacts filtered by the configured pattern,
//! and downloads the matches into the output directory. The stages run
//! strictly in that order, one request at a time; the build number fed to
//! the artifact listing is always the one resolved in the same invocation.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::client::ApiClient;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::{Artifact, Build};
use crate::utils::file_name_from_url;

/// Pipeline driver owning the resolved configuration and HTTP client
#[derive(Debug, Clone)]
pub struct ArtifactFetcher {
    config: Config,
    client: ApiClient,
}

impl ArtifactFetcher {
    /// Create a fetcher from a resolved configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] if the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let client = ApiClient::new(&config.token)?;
        Ok(Self { config, client })
    }

    /// Run the full pipeline: resolve build, list artifacts, download
    ///
    /// Returns the paths of the files written. Zero matches is a success
    /// with an empty result.
    pub async fn run(&self) -> Result<Vec<PathBuf>> {
        let build_num = self.latest_successful_build().await?;
        info!(
            "Latest successful build on {} is #{}",
            self.config.branch, build_num
        );

        let artifacts = self.list_artifacts(build_num).await?;
        debug!(
            "Got the following URLs: {:?}",
            artifacts.iter().map(|a| a.url.as_str()).collect::<Vec<_>>()
        );

        self.download_artifacts(&artifacts).await
    }

    /// Resolve the most recent successful build number on the branch
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the branch has no successful builds,
    /// or [`Error::Request`]/[`Error::Network`] if the call fails.
    pub async fn latest_successful_build(&self) -> Result<u64> {
        info!(
            "Getting latest successful build on {}",
            self.config.branch
        );
        let url = format!("{}/tree/{}", self.project_url(), self.config.branch);
        let response = self
            .client
            .get(&url, &[("limit", "1"), ("filter", "successful")])
            .await?;

        let body = response.text().await?;
        let builds: Vec<Build> = serde_json::from_str(&body)?;
        match builds.first() {
            Some(build) => Ok(build.build_num),
            None => Err(Error::NotFound {
                branch: self.config.branch.clone(),
            }),
        }
    }

    /// List the build's artifacts, filtered by the configured pattern
    ///
    /// Order follows the API response. An empty result is not an error.
    pub async fn list_artifacts(&self, build_num: u64) -> Result<Vec<Artifact>> {
        info!("Looking up artifact URLs for build #{build_num} ...");
        let url = format!("{}/{}/artifacts", self.project_url(), build_num);
        let response = self.client.get(&url, &[]).await?;

        let body = response.text().await?;
        let artifacts: Vec<Artifact> = serde_json::from_str(&body)?;
        Ok(artifacts
            .into_iter()
            .filter(|artifact| self.config.filter.matches(&artifact.path))
            .collect())
    }

    /// Download each artifact into the output directory, in order
    ///
    /// Creates the output directory recursively if missing ("already
    /// exists" is benign, including when another process wins the creation
    /// race). Each file is named by the final path segment of its URL and
    /// overwrites any existing file of that name. The first failure aborts
    /// the remaining downloads; files already written stay in place.
    pub async fn download_artifacts(&self, artifacts: &[Artifact]) -> Result<Vec<PathBuf>> {
        let out_dir = &self.config.out_dir;
        info!("Downloading files to {} ...", out_dir.display());
        tokio::fs::create_dir_all(out_dir)
            .await
            .map_err(|source| Error::Filesystem {
                path: out_dir.clone(),
                source,
            })?;

        let mut written = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            let response = self.client.get(&artifact.url, &[]).await?;
            let body = response.bytes().await?;

            let path = out_dir.join(file_name_from_url(&artifact.url));
            tokio::fs::write(&path, &body)
                .await
                .map_err(|source| Error::Filesystem {
                    path: path.clone(),
                    source,
                })?;
            info!("Wrote {}", path.display());
            written.push(path);
        }
        Ok(written)
    }

    fn project_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.config.api_base, self.config.user, self.config.project
        )
    }
}
