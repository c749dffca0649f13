//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Configurable timeout and User-Agent
//! - Default headers (Accept, optional bearer token)
//! - Status code to RegistryError mapping
//!
//! Requests are not retried; a failed lookup is reported once.

use crate::error::RegistryError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Default timeout for HTTP requests (30 seconds)
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("gwbuilder/", env!("CARGO_PKG_VERSION"));

/// Media type requested from the GitHub REST API
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// HTTP client wrapper
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, None)
    }

    /// Create a new HTTP client authenticating with a bearer token
    pub fn with_token(token: Option<&str>) -> Result<Self, RegistryError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, token)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(
        timeout: Duration,
        user_agent: &str,
        token: Option<&str>,
    ) -> Result<Self, RegistryError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));

        if let Some(token) = token.filter(|t| !t.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
                RegistryError::ClientError {
                    message: format!("invalid token: {}", e),
                }
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .default_headers(headers)
            .build()
            .map_err(|e| RegistryError::ClientError {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }

    /// Perform a GET request with error context
    pub async fn get_with_context(
        &self,
        url: &str,
        repository: &str,
        registry: &str,
    ) -> Result<reqwest::Response, RegistryError> {
        debug!(%url, "GET");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                RegistryError::timeout(repository, registry)
            } else {
                RegistryError::network_error(repository, registry, e.to_string())
            }
        })?;

        check_status(response.status(), repository, registry)?;
        Ok(response)
    }

    /// Perform a GET request and parse the JSON response
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        repository: &str,
        registry: &str,
    ) -> Result<T, RegistryError> {
        let response = self.get_with_context(url, repository, registry).await?;

        response.json::<T>().await.map_err(|e| {
            RegistryError::invalid_response(
                repository,
                registry,
                format!("failed to parse JSON: {}", e),
            )
        })
    }
}

/// Maps a response status to a RegistryError
fn check_status(status: StatusCode, repository: &str, registry: &str) -> Result<(), RegistryError> {
    if status.is_success() {
        return Ok(());
    }

    match status {
        StatusCode::NOT_FOUND => Err(RegistryError::repository_not_found(repository, registry)),
        // GitHub answers 403 when the unauthenticated quota is exhausted
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
            Err(RegistryError::rate_limit_exceeded(registry))
        }
        _ => Err(RegistryError::network_error(
            repository,
            registry,
            format!("HTTP {}", status),
        )),
    }
}
