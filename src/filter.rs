//! Artifact path filtering
//!
//! A filter is a user-supplied regular expression tested against artifact
//! paths. Matching is anchored at the start of the path but not at the end:
//! `dist/` selects everything under `dist/`, while `app` does not select
//! `dist/app.tar.gz`. Full-match semantics would silently change which
//! artifacts existing patterns select, so the anchored-at-start behavior is
//! load-bearing.

use regex::Regex;

use crate::error::{Error, Result};

/// Compiled DFA size limit for user-supplied patterns (guards against ReDoS)
const REGEX_SIZE_LIMIT: usize = 1024 * 1024;

/// A compiled artifact path filter
#[derive(Debug, Clone)]
pub struct ArtifactFilter {
    pattern: String,
    regex: Regex,
}

impl ArtifactFilter {
    /// Compile a filter from a user-supplied pattern
    ///
    /// The pattern is wrapped as `^(?:pattern)` so it must match starting
    /// at position 0 of the artifact path, without requiring it to consume
    /// the whole path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the pattern is not a valid regular
    /// expression or its compiled form exceeds the size limit.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = regex::RegexBuilder::new(&format!("^(?:{pattern})"))
            .size_limit(REGEX_SIZE_LIMIT)
            .build()
            .map_err(|e| {
                Error::config(format!("invalid artifact filter '{pattern}': {e}"), "filter")
            })?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// Test an artifact path against the filter
    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// The original pattern as supplied by the user
    pub fn as_str(&self) -> &str {
        &self.pattern
    }
}

impl std::fmt::Display for ArtifactFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.pattern)
    }
}
