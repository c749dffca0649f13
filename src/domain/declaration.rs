//! Dependency declarations encoded in `versions.cmake` comments

use super::derive_variable_name;
use std::fmt;

/// Version token that asks for the newest stable release
pub const LATEST_SENTINEL: &str = "latest";

/// Version requested by a declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionRequest {
    /// Resolve the newest stable release from the release feed
    Latest,
    /// Use this tag as-is
    Pinned(String),
}

impl VersionRequest {
    /// Interprets the right-hand side of a declaration
    pub fn parse(version: &str) -> Self {
        if version == LATEST_SENTINEL {
            VersionRequest::Latest
        } else {
            VersionRequest::Pinned(version.to_string())
        }
    }

    /// Returns true for the `latest` sentinel
    pub fn is_latest(&self) -> bool {
        matches!(self, VersionRequest::Latest)
    }

    /// Returns the request as written in the declaration
    pub fn as_str(&self) -> &str {
        match self {
            VersionRequest::Latest => LATEST_SENTINEL,
            VersionRequest::Pinned(version) => version,
        }
    }
}

impl fmt::Display for VersionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `#owner/repo@version` line found in the configuration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Repository identifier in `owner/name` form
    pub repository: String,
    /// Requested version or the `latest` sentinel
    pub requested: VersionRequest,
    /// The trimmed comment line, reproduced verbatim on regeneration
    pub source_line: String,
    /// 1-based line number in the input file
    pub line_number: usize,
}

impl Declaration {
    /// Creates a new declaration
    pub fn new(
        repository: impl Into<String>,
        requested: VersionRequest,
        source_line: impl Into<String>,
        line_number: usize,
    ) -> Self {
        Self {
            repository: repository.into(),
            requested,
            source_line: source_line.into(),
            line_number,
        }
    }

    /// Returns true if this declaration needs a release lookup
    pub fn is_latest(&self) -> bool {
        self.requested.is_latest()
    }

    /// Returns the CMake variable name generated for this declaration
    pub fn variable_name(&self) -> String {
        derive_variable_name(&self.repository)
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.repository, self.requested)
    }
}
