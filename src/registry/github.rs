//! GitHub Releases API adapter
//!
//! Fetches the release list of a repository.
//! API endpoint: https://api.github.com/repos/{owner}/{name}/releases
//!
//! The API returns releases newest first. The list is passed through in that
//! order without sorting.

use crate::domain::Release;
use crate::error::RegistryError;
use crate::registry::{HttpClient, ReleaseSource};
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;

/// GitHub REST API base URL
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Page size requested from the releases endpoint
const PER_PAGE: u32 = 100;

/// GitHub Releases adapter
pub struct GitHubReleases {
    client: HttpClient,
    api_url: String,
}

/// Release entry of the GitHub releases response
#[derive(Debug, Deserialize)]
struct GitHubRelease {
    /// Tag name of the release
    tag_name: String,
    /// Whether the release is marked as a prerelease
    #[serde(default)]
    prerelease: bool,
}

impl GitHubReleases {
    /// Create a new adapter against the public GitHub API
    pub fn new(client: HttpClient) -> Self {
        Self::with_api_url(client, DEFAULT_GITHUB_API_URL)
    }

    /// Create a new adapter against a custom API base (GitHub Enterprise, tests)
    pub fn with_api_url(client: HttpClient, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { client, api_url }
    }

    /// Build the releases URL for a repository
    ///
    /// Each side of `owner/name` is appended as its own percent-encoded path
    /// segment, so `?`, `#` and spaces never leak into the query or fragment.
    fn build_url(&self, repository: &str) -> Result<String, RegistryError> {
        let invalid = |message: String| {
            RegistryError::network_error(repository, self.source_name(), message)
        };

        let mut url = Url::parse(&self.api_url)
            .map_err(|e| invalid(format!("invalid API URL '{}': {}", self.api_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| invalid(format!("API URL '{}' cannot be a base", self.api_url)))?
            .pop_if_empty()
            .push("repos")
            .extend(repository.split('/'))
            .push("releases");
        url.set_query(Some(&format!("per_page={}", PER_PAGE)));

        Ok(url.to_string())
    }
}

#[async_trait]
impl ReleaseSource for GitHubReleases {
    fn source_name(&self) -> &'static str {
        "GitHub"
    }

    async fn list_releases(&self, repository: &str) -> Result<Vec<Release>, RegistryError> {
        let url = self.build_url(repository)?;
        let response: Vec<GitHubRelease> = self
            .client
            .get_json(&url, repository, self.source_name())
            .await?;

        Ok(response
            .into_iter()
            .map(|r| Release::new(r.tag_name, r.prerelease))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter() -> GitHubReleases {
        GitHubReleases::new(HttpClient::new().unwrap())
    }

    #[test]
    fn test_github_source_name() {
        assert_eq!(adapter().source_name(), "GitHub");
    }

    #[test]
    fn test_build_url() {
        assert_eq!(
            adapter().build_url("glfw/glfw").unwrap(),
            "https://api.github.com/repos/glfw/glfw/releases?per_page=100"
        );
    }

    #[test]
    fn test_build_url_custom_base_trailing_slash() {
        let adapter =
            GitHubReleases::with_api_url(HttpClient::new().unwrap(), "https://ghe.example.com/api/v3/");
        assert_eq!(
            adapter.build_url("foo/bar").unwrap(),
            "https://ghe.example.com/api/v3/repos/foo/bar/releases?per_page=100"
        );
    }

    #[test]
    fn test_build_url_encodes_repository_segments() {
        assert_eq!(
            adapter().build_url("foo/bar?x").unwrap(),
            "https://api.github.com/repos/foo/bar%3Fx/releases?per_page=100"
        );
        assert_eq!(
            adapter().build_url("foo/b#r").unwrap(),
            "https://api.github.com/repos/foo/b%23r/releases?per_page=100"
        );
        assert_eq!(
            adapter().build_url("my org/bar").unwrap(),
            "https://api.github.com/repos/my%20org/bar/releases?per_page=100"
        );
    }

    #[test]
    fn test_build_url_rejects_invalid_base() {
        let adapter = GitHubReleases::with_api_url(HttpClient::new().unwrap(), "not a url");
        let err = adapter.build_url("foo/bar").unwrap_err();
        assert!(matches!(err, RegistryError::NetworkError { .. }));
        assert!(err.to_string().contains("invalid API URL"));
    }

    #[test]
    fn test_deserialize_release_response() {
        let body = r#"[
            {"tag_name": "v2.0.0-rc1", "prerelease": true, "draft": false, "name": "RC"},
            {"tag_name": "v1.9.0", "prerelease": false}
        ]"#;
        let releases: Vec<GitHubRelease> = serde_json::from_str(body).unwrap();
        assert_eq!(releases.len(), 2);
        assert_eq!(releases[0].tag_name, "v2.0.0-rc1");
        assert!(releases[0].prerelease);
        assert!(!releases[1].prerelease);
    }

    #[test]
    fn test_deserialize_missing_prerelease_defaults_to_stable() {
        let releases: Vec<GitHubRelease> =
            serde_json::from_str(r#"[{"tag_name": "1.0"}]"#).unwrap();
        assert!(!releases[0].prerelease);
    }
}
