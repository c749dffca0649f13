//! Configuration file discovery, parsing and regeneration
//!
//! This module provides functionality to:
//! - Locate `versions.cmake` in a directory
//! - Parse comment-encoded dependency declarations
//! - Rebuild and write the file from resolved declarations

mod parser;
mod writer;

pub use parser::{is_candidate, parse_declarations, ParsedManifest};
pub use writer::{
    dedup_definitions, read_manifest, render, write_manifest, ManifestWriter, WriteResult,
    HEADER_LINES,
};

use crate::error::FileAccessError;
use std::path::{Path, PathBuf};

/// Name of the configuration file
pub const VERSIONS_FILENAME: &str = "versions.cmake";

/// Locates the configuration file inside `dir`
pub fn locate_versions_file(dir: &Path) -> Result<PathBuf, FileAccessError> {
    let path = dir.join(VERSIONS_FILENAME);
    if path.is_file() {
        Ok(path)
    } else {
        Err(FileAccessError::not_found(path))
    }
}
