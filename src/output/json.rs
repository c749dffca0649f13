//! JSON output formatter for machine processing
//!
//! This module provides:
//! - JSON serialization of the sync report
//! - Diagnostics and fatal errors as structured fields

use crate::domain::{ResolvedDeclaration, ValueOrigin};
use crate::error::AppError;
use crate::orchestrator::{Diagnostic, SyncReport};
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full report
#[derive(Serialize)]
struct JsonOutput {
    /// Path to the configuration file
    path: String,
    /// Whether this was a dry-run
    dry_run: bool,
    /// Whether the file was written
    written: bool,
    /// Whether the regenerated content differs from the input
    changed: bool,
    /// One entry per declaration
    dependencies: Vec<JsonDependency>,
    /// Recoverable problems
    #[serde(skip_serializing_if = "Vec::is_empty")]
    diagnostics: Vec<String>,
    /// Regenerated content (dry-run or verbose only)
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

/// JSON representation of a declaration and its value
#[derive(Serialize)]
struct JsonDependency {
    /// Repository identifier
    repository: String,
    /// Requested version or `latest`
    requested: String,
    /// Generated variable name
    variable: String,
    /// Value written into the file
    value: String,
    /// How the value was obtained
    origin: ValueOrigin,
}

/// JSON representation of a fatal error
#[derive(Serialize)]
struct JsonError {
    error: String,
}

impl JsonFormatter {
    /// Convert a resolved declaration to its JSON representation
    fn dependency_to_json(entry: &ResolvedDeclaration) -> JsonDependency {
        JsonDependency {
            repository: entry.declaration.repository.clone(),
            requested: entry.declaration.requested.to_string(),
            variable: entry.declaration.variable_name(),
            value: entry.value.clone(),
            origin: entry.origin,
        }
    }

    /// Build the JSON document for a report
    fn report_to_json(&self, report: &SyncReport) -> JsonOutput {
        let show_content = report.dry_run || self.verbosity == Verbosity::Verbose;

        JsonOutput {
            path: report.write_result.path.display().to_string(),
            dry_run: report.dry_run,
            written: report.write_result.file_modified,
            changed: report.write_result.content_changed,
            dependencies: report
                .entries()
                .iter()
                .map(Self::dependency_to_json)
                .collect(),
            diagnostics: report.diagnostics().iter().map(|d| d.to_string()).collect(),
            content: show_content.then(|| report.regenerated.content.clone()),
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &SyncReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = self.report_to_json(report);
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }

    fn format_diagnostics(
        &self,
        _diagnostics: &[Diagnostic],
        _writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        // Diagnostics are part of the JSON document
        Ok(())
    }

    fn format_error(&self, error: &AppError, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonError {
            error: error.to_string(),
        };
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
