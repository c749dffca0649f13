//! Text output formatter for human-readable display
//!
//! This module provides:
//! - One line per generated variable with its origin
//! - Colored warnings for recoverable diagnostics
//! - The regenerated file content in dry-run mode

use crate::domain::{ResolvedDeclaration, ValueOrigin};
use crate::error::AppError;
use crate::manifest::VERSIONS_FILENAME;
use crate::orchestrator::{Diagnostic, SyncReport};
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    /// Describe where a value came from
    fn origin_label(&self, entry: &ResolvedDeclaration) -> String {
        let label = match entry.origin {
            ValueOrigin::Pinned => "pinned".to_string(),
            ValueOrigin::Resolved => "latest".to_string(),
            ValueOrigin::Fallback => "lookup failed".to_string(),
        };

        if !self.color {
            return label;
        }
        match entry.origin {
            ValueOrigin::Pinned => label.dimmed().to_string(),
            ValueOrigin::Resolved => label.green().to_string(),
            ValueOrigin::Fallback => label.yellow().to_string(),
        }
    }

    /// Format one generated variable
    fn format_entry(
        &self,
        entry: &ResolvedDeclaration,
        max_name_len: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let name = entry.declaration.variable_name();
        let value = format!("\"{}\"", entry.value);
        let origin = self.origin_label(entry);

        if self.color {
            let name_display = format!("{:width$}", name, width = max_name_len);
            writeln!(
                writer,
                "  {} {} ({})",
                name_display,
                value.bright_white().bold(),
                origin
            )
        } else {
            writeln!(
                writer,
                "  {:width$} {} ({})",
                name,
                value,
                origin,
                width = max_name_len
            )
        }
    }

    /// Format the closing status line
    fn format_status(&self, report: &SyncReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let message = if report.dry_run {
            if report.write_result.content_changed {
                format!("(dry-run) {} would be updated", VERSIONS_FILENAME)
            } else {
                format!("(dry-run) {} is up to date", VERSIONS_FILENAME)
            }
        } else {
            format!("{} updated successfully", VERSIONS_FILENAME)
        };

        if self.color {
            writeln!(writer, "{}", message.green())
        } else {
            writeln!(writer, "{}", message)
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &SyncReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            return Ok(());
        }

        let entries = report.entries();
        if self.verbosity == Verbosity::Verbose {
            writeln!(writer, "{}", report.write_result.path.display())?;
        }

        let max_name_len = entries
            .iter()
            .map(|e| e.declaration.variable_name().len())
            .max()
            .unwrap_or(0);
        for entry in entries {
            self.format_entry(entry, max_name_len, writer)?;
        }

        if report.dry_run {
            writeln!(writer)?;
            write!(writer, "{}", report.regenerated.content)?;
            writeln!(writer)?;
        }

        self.format_status(report, writer)
    }

    fn format_diagnostics(
        &self,
        diagnostics: &[Diagnostic],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        for diagnostic in diagnostics {
            if self.color {
                writeln!(writer, "{} {}", "warning:".yellow().bold(), diagnostic)?;
            } else {
                writeln!(writer, "warning: {}", diagnostic)?;
            }
        }
        Ok(())
    }

    fn format_error(&self, error: &AppError, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.color {
            writeln!(writer, "{} {}", "Error:".red().bold(), error)
        } else {
            writeln!(writer, "Error: {}", error)
        }
    }
}
