//! Regeneration and writing of `versions.cmake`
//!
//! This module provides:
//! - render: rebuilds the whole file from resolved declarations
//! - ManifestWriter for persisting the result, with dry-run support
//! - read/write helpers that map IO failures to FileAccessError

use crate::domain::{ResolvedDeclaration, VariableDefinition};
use crate::error::FileAccessError;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed header written at the top of every regenerated file
pub const HEADER_LINES: [&str; 2] = [
    "#Variable definitions are generated through GlimmerWorksBuilder. Please do not edit them.",
    "#The dependencies of the repository can be defined through comments.",
];

/// Renders the complete file content
///
/// The layout is fixed: header, every declaration comment in input order,
/// then one `set(...)` line per derived variable name.
pub fn render(resolved: &[ResolvedDeclaration]) -> String {
    let mut out = String::new();

    for header in HEADER_LINES {
        out.push_str(header);
        out.push('\n');
    }

    for entry in resolved {
        out.push_str(&entry.declaration.source_line);
        out.push('\n');
    }

    for definition in dedup_definitions(resolved) {
        out.push_str(&definition.to_string());
        out.push('\n');
    }

    out
}

/// Collapses definitions that share a variable name
///
/// The last occurrence of a name wins, both for its value and its position.
pub fn dedup_definitions(resolved: &[ResolvedDeclaration]) -> Vec<VariableDefinition> {
    let definitions: Vec<VariableDefinition> =
        resolved.iter().map(ResolvedDeclaration::definition).collect();

    let mut last_index: HashMap<&str, usize> = HashMap::new();
    for (index, definition) in definitions.iter().enumerate() {
        last_index.insert(definition.name.as_str(), index);
    }

    let keep: Vec<bool> = definitions
        .iter()
        .enumerate()
        .map(|(index, definition)| last_index.get(definition.name.as_str()) == Some(&index))
        .collect();

    definitions
        .into_iter()
        .zip(keep)
        .filter_map(|(definition, keep)| keep.then_some(definition))
        .collect()
}

/// Writer for the configuration file
pub struct ManifestWriter {
    /// Whether to run in dry-run mode (no file modifications)
    dry_run: bool,
}

/// Result of writing the regenerated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteResult {
    /// Path to the configuration file
    pub path: PathBuf,
    /// Whether the file was actually written
    pub file_modified: bool,
    /// Whether the regenerated content differs from what was read
    pub content_changed: bool,
}

impl ManifestWriter {
    /// Create a new ManifestWriter
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Overwrites `path` with `rendered` in a single write
    pub fn apply(
        &self,
        path: &Path,
        original: &str,
        rendered: &str,
    ) -> Result<WriteResult, FileAccessError> {
        let content_changed = original != rendered;

        if !self.dry_run {
            write_manifest(path, rendered)?;
        }

        Ok(WriteResult {
            path: path.to_path_buf(),
            file_modified: !self.dry_run,
            content_changed,
        })
    }
}

/// Read the configuration file content
pub fn read_manifest(path: &Path) -> Result<String, FileAccessError> {
    fs::read_to_string(path).map_err(|e| FileAccessError::read_error(path, e))
}

/// Write content to the configuration file
pub fn write_manifest(path: &Path, content: &str) -> Result<(), FileAccessError> {
    fs::write(path, content).map_err(|e| FileAccessError::write_error(path, e))
}
