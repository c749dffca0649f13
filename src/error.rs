//! Application error types using thiserror
//!
//! Error hierarchy:
//! - FileAccessError: versions.cmake could not be found, read or written (fatal)
//! - DeclarationError: a candidate comment line failed to parse (recovered)
//! - RegistryError: release feed communication failures
//! - ResolutionError: a `latest` declaration could not be resolved

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration file access errors
    #[error(transparent)]
    File(#[from] FileAccessError),

    /// Release feed errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Resolution errors that the failure policy turned fatal
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
}

/// Errors related to the configuration file itself
#[derive(Error, Debug)]
pub enum FileAccessError {
    /// Configuration file not found
    #[error("configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read configuration file
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write configuration file
    #[error("failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to a single declaration line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeclarationError {
    /// Candidate line that does not split into `owner/name` and a version
    #[error("invalid dependency line {line_number} '{line}': {reason}")]
    Malformed {
        line_number: usize,
        line: String,
        reason: String,
    },
}

/// Errors related to release feed communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Repository not found
    #[error("repository '{repository}' not found on {registry}")]
    RepositoryNotFound {
        repository: String,
        registry: String,
    },

    /// Network request failed or returned a non-success status
    #[error("failed to fetch releases of '{repository}' from {registry}: {message}")]
    NetworkError {
        repository: String,
        registry: String,
        message: String,
    },

    /// Rate limit exceeded
    #[error("rate limit exceeded for {registry}")]
    RateLimitExceeded { registry: String },

    /// Invalid response body
    #[error("invalid response from {registry} for '{repository}': {message}")]
    InvalidResponse {
        repository: String,
        registry: String,
        message: String,
    },

    /// Timeout
    #[error("timeout while fetching releases of '{repository}' from {registry}")]
    Timeout {
        repository: String,
        registry: String,
    },

    /// HTTP client could not be built
    #[error("failed to create HTTP client: {message}")]
    ClientError { message: String },
}

/// Errors resolving a `latest` declaration
#[derive(Error, Debug)]
pub enum ResolutionError {
    /// The feed holds no release that is not a prerelease
    #[error("no stable release found for '{repository}'")]
    NoStableRelease { repository: String },

    /// The feed could not be queried
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl FileAccessError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        FileAccessError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FileAccessError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FileAccessError::WriteError {
            path: path.into(),
            source,
        }
    }
}

impl DeclarationError {
    /// Creates a new Malformed error
    pub fn malformed(
        line_number: usize,
        line: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DeclarationError::Malformed {
            line_number,
            line: line.into(),
            reason: reason.into(),
        }
    }

    /// Returns the 1-based line number of the offending line
    pub fn line_number(&self) -> usize {
        match self {
            DeclarationError::Malformed { line_number, .. } => *line_number,
        }
    }
}

impl RegistryError {
    /// Creates a new RepositoryNotFound error
    pub fn repository_not_found(repository: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::RepositoryNotFound {
            repository: repository.into(),
            registry: registry.into(),
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(
        repository: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::NetworkError {
            repository: repository.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new RateLimitExceeded error
    pub fn rate_limit_exceeded(registry: impl Into<String>) -> Self {
        RegistryError::RateLimitExceeded {
            registry: registry.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        repository: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::InvalidResponse {
            repository: repository.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(repository: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::Timeout {
            repository: repository.into(),
            registry: registry.into(),
        }
    }
}

impl ResolutionError {
    /// Creates a new NoStableRelease error
    pub fn no_stable_release(repository: impl Into<String>) -> Self {
        ResolutionError::NoStableRelease {
            repository: repository.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_error_not_found() {
        let err = FileAccessError::not_found("/work/versions.cmake");
        let msg = format!("{}", err);
        assert!(msg.contains("configuration file not found"));
        assert!(msg.contains("versions.cmake"));
    }

    #[test]
    fn test_file_error_write() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = FileAccessError::write_error("/work/versions.cmake", io);
        let msg = format!("{}", err);
        assert!(msg.contains("failed to write"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_declaration_error_malformed() {
        let err = DeclarationError::malformed(4, "#@1.0", "empty repository");
        let msg = format!("{}", err);
        assert!(msg.contains("invalid dependency line 4"));
        assert!(msg.contains("#@1.0"));
        assert!(msg.contains("empty repository"));
        assert_eq!(err.line_number(), 4);
    }

    #[test]
    fn test_registry_error_not_found() {
        let err = RegistryError::repository_not_found("foo/bar", "GitHub");
        let msg = format!("{}", err);
        assert!(msg.contains("repository 'foo/bar' not found"));
        assert!(msg.contains("GitHub"));
    }

    #[test]
    fn test_registry_error_network() {
        let err = RegistryError::network_error("foo/bar", "GitHub", "HTTP 500");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to fetch releases"));
        assert!(msg.contains("HTTP 500"));
    }

    #[test]
    fn test_registry_error_rate_limit() {
        let err = RegistryError::rate_limit_exceeded("GitHub");
        assert!(err.to_string().contains("rate limit exceeded"));
    }

    #[test]
    fn test_registry_error_timeout() {
        let err = RegistryError::timeout("foo/bar", "GitHub");
        let msg = format!("{}", err);
        assert!(msg.contains("timeout"));
        assert!(msg.contains("foo/bar"));
    }

    #[test]
    fn test_resolution_error_no_stable() {
        let err = ResolutionError::no_stable_release("foo/bar");
        assert_eq!(err.to_string(), "no stable release found for 'foo/bar'");
    }

    #[test]
    fn test_resolution_error_from_registry_is_transparent() {
        let err: ResolutionError = RegistryError::rate_limit_exceeded("GitHub").into();
        assert_eq!(err.to_string(), "rate limit exceeded for GitHub");
    }

    #[test]
    fn test_app_error_from_file_error() {
        let app_err: AppError = FileAccessError::not_found("/path").into();
        assert!(app_err.to_string().contains("configuration file not found"));
    }

    #[test]
    fn test_app_error_from_registry_error() {
        let app_err: AppError = RegistryError::ClientError {
            message: "invalid token".to_string(),
        }
        .into();
        assert!(matches!(app_err, AppError::Registry(_)));
        assert_eq!(
            app_err.to_string(),
            "failed to create HTTP client: invalid token"
        );
    }

    #[test]
    fn test_app_error_from_resolution_error() {
        let app_err: AppError = ResolutionError::no_stable_release("a/b").into();
        assert!(app_err.to_string().contains("no stable release"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = FileAccessError::not_found("/test");
        let debug = format!("{:?}", err);
        assert!(debug.contains("NotFound"));
    }
}
