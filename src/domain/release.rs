//! Release feed records

use serde::{Deserialize, Serialize};

/// A single entry of a repository's release feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Git tag the release points at
    pub tag: String,
    /// Whether the feed flags this release as a prerelease
    pub prerelease: bool,
}

impl Release {
    /// Creates a new release record
    pub fn new(tag: impl Into<String>, prerelease: bool) -> Self {
        Self {
            tag: tag.into(),
            prerelease,
        }
    }

    /// Creates a stable (non-prerelease) release
    pub fn stable(tag: impl Into<String>) -> Self {
        Self::new(tag, false)
    }

    /// Creates a prerelease
    pub fn prerelease(tag: impl Into<String>) -> Self {
        Self::new(tag, true)
    }

    /// Returns true if this release is not a prerelease
    pub fn is_stable(&self) -> bool {
        !self.prerelease
    }
}
