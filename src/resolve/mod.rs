//! Resolution of `latest` declarations
//!
//! This module provides:
//! - ReleaseResolver: picks the first stable tag of a release feed
//! - FailurePolicy: decides what a failed resolution turns into

mod policy;

pub use policy::FailurePolicy;

use crate::domain::Release;
use crate::error::ResolutionError;
use crate::registry::ReleaseSource;
use tracing::debug;

/// Resolves the newest stable tag of a repository
pub struct ReleaseResolver<'a> {
    source: &'a dyn ReleaseSource,
}

impl<'a> ReleaseResolver<'a> {
    /// Create a resolver backed by a release feed
    pub fn new(source: &'a dyn ReleaseSource) -> Self {
        Self { source }
    }

    /// Returns the tag of the first stable release in feed order
    pub async fn resolve_latest(&self, repository: &str) -> Result<String, ResolutionError> {
        let releases = self.source.list_releases(repository).await?;
        debug!(
            repository,
            count = releases.len(),
            "fetched releases from {}",
            self.source.source_name()
        );

        let tag = first_stable(&releases)
            .ok_or_else(|| ResolutionError::no_stable_release(repository))?;
        debug!(repository, tag, "selected stable release");

        Ok(tag.to_string())
    }
}

/// Returns the tag of the first release that is not a prerelease
pub fn first_stable(releases: &[Release]) -> Option<&str> {
    releases
        .iter()
        .find(|r| r.is_stable())
        .map(|r| r.tag.as_str())
}
