//! Release feed adapters
//!
//! This module provides:
//! - HTTP client shared foundation
//! - GitHub Releases API adapter
//!
//! The orchestrator only sees the `ReleaseSource` trait, so tests can swap in
//! an in-memory feed.

mod client;
mod github;

pub use client::HttpClient;
pub use github::{GitHubReleases, DEFAULT_GITHUB_API_URL};

use crate::domain::Release;
use crate::error::RegistryError;
use async_trait::async_trait;

/// Trait for release-listing collaborators
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Get the feed name used in diagnostics
    fn source_name(&self) -> &'static str;

    /// Fetch the releases of `repository` in feed order, newest first
    async fn list_releases(&self, repository: &str) -> Result<Vec<Release>, RegistryError>;
}
