//! Sync orchestrator for coordinating the whole `updeps` workflow
//!
//! This module provides:
//! - Workflow coordination: locate → read → parse → resolve → render → write
//! - Sequential release lookups, one per `latest` declaration
//! - Dry-run mode support
//! - Diagnostics for recoverable problems, fatal errors for file access

use crate::cli::UpdepsArgs;
use crate::domain::{ResolvedDeclaration, ValueOrigin, VersionRequest};
use crate::error::{AppError, DeclarationError};
use crate::manifest::{
    locate_versions_file, parse_declarations, read_manifest, render, ManifestWriter, WriteResult,
};
use crate::progress::Progress;
use crate::registry::ReleaseSource;
use crate::resolve::{FailurePolicy, ReleaseResolver};
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

/// Configuration for a sync run
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Directory holding versions.cmake
    pub dir: PathBuf,
    /// Resolve and render without writing
    pub dry_run: bool,
    /// Handling of failed `latest` lookups
    pub policy: FailurePolicy,
    /// Whether to show a spinner during lookups
    pub show_progress: bool,
}

impl SyncConfig {
    /// Create a configuration for `dir` with default options
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            dry_run: false,
            policy: FailurePolicy::default(),
            show_progress: false,
        }
    }

    /// Build the configuration from `updeps` arguments
    pub fn from_args(args: &UpdepsArgs, quiet: bool) -> Self {
        Self {
            dir: args.path.clone(),
            dry_run: args.dry_run,
            policy: FailurePolicy::from_strict(args.strict),
            show_progress: !quiet && !args.json,
        }
    }

    /// Enable or disable dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Set the failure policy
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Recoverable problems reported to the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Candidate line skipped because it failed to parse
    Malformed(DeclarationError),
    /// `latest` lookup failed and the value was left empty
    ResolutionFailed {
        repository: String,
        line_number: usize,
        message: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Malformed(e) => write!(f, "{}", e),
            Diagnostic::ResolutionFailed {
                repository,
                line_number,
                message,
            } => write!(
                f,
                "could not resolve latest release of {} (line {}): {}; writing empty version",
                repository, line_number, message
            ),
        }
    }
}

/// Regenerated content before it is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regenerated {
    /// Declarations with their values, in input order
    pub entries: Vec<ResolvedDeclaration>,
    /// Recoverable problems found while parsing and resolving
    pub diagnostics: Vec<Diagnostic>,
    /// Complete new file content
    pub content: String,
}

/// Result of running the orchestrator
#[derive(Debug)]
pub struct SyncReport {
    /// Regenerated content with entries and diagnostics
    pub regenerated: Regenerated,
    /// Outcome of the write step
    pub write_result: WriteResult,
    /// Whether this was a dry run
    pub dry_run: bool,
}

impl SyncReport {
    /// Returns the declarations with their values
    pub fn entries(&self) -> &[ResolvedDeclaration] {
        &self.regenerated.entries
    }

    /// Returns the recoverable problems of the run
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.regenerated.diagnostics
    }

    /// Returns true if recoverable problems occurred
    pub fn has_diagnostics(&self) -> bool {
        !self.regenerated.diagnostics.is_empty()
    }
}

/// Orchestrator for the `updeps` workflow
pub struct Orchestrator {
    /// Run configuration
    config: SyncConfig,
    /// Release-listing collaborator
    source: Box<dyn ReleaseSource>,
}

impl Orchestrator {
    /// Create a new orchestrator with an injected release feed
    pub fn new(config: SyncConfig, source: Box<dyn ReleaseSource>) -> Self {
        Self { config, source }
    }

    /// Run the full workflow against the configured directory
    pub async fn run(&self) -> Result<SyncReport, AppError> {
        let path = locate_versions_file(&self.config.dir)?;
        info!(path = %path.display(), "syncing dependency versions");

        let original = read_manifest(&path)?;
        let regenerated = self.regenerate(&original).await?;

        let writer = ManifestWriter::new(self.config.dry_run);
        let write_result = writer.apply(&path, &original, &regenerated.content)?;

        Ok(SyncReport {
            regenerated,
            write_result,
            dry_run: self.config.dry_run,
        })
    }

    /// Parse, resolve and render `content` without touching the file system
    pub async fn regenerate(&self, content: &str) -> Result<Regenerated, AppError> {
        let parsed = parse_declarations(content);
        if parsed.is_empty() {
            info!("no dependency declarations found");
        } else {
            let lookups = parsed.declarations.iter().filter(|d| d.is_latest()).count();
            debug!(declarations = parsed.declarations.len(), lookups, "parsed declarations");
        }

        let mut diagnostics: Vec<Diagnostic> = parsed
            .malformed
            .into_iter()
            .map(Diagnostic::Malformed)
            .collect();

        let resolver = ReleaseResolver::new(self.source.as_ref());
        let mut progress = Progress::new(self.config.show_progress);
        let mut entries = Vec::with_capacity(parsed.declarations.len());

        for declaration in parsed.declarations {
            let (value, origin) = match &declaration.requested {
                VersionRequest::Pinned(version) => (version.clone(), ValueOrigin::Pinned),
                VersionRequest::Latest => {
                    progress.spinner(&format!("Resolving {}...", declaration.repository));
                    let outcome = resolver.resolve_latest(&declaration.repository).await;
                    progress.finish_and_clear();

                    match outcome {
                        Ok(tag) => (tag, ValueOrigin::Resolved),
                        Err(e) => {
                            let message = e.to_string();
                            let value = self.config.policy.recover(e)?;
                            diagnostics.push(Diagnostic::ResolutionFailed {
                                repository: declaration.repository.clone(),
                                line_number: declaration.line_number,
                                message,
                            });
                            (value, ValueOrigin::Fallback)
                        }
                    }
                }
            };

            debug!(variable = %declaration.variable_name(), %value, "resolved");
            entries.push(ResolvedDeclaration::new(declaration, value, origin));
        }

        let content = render(&entries);

        Ok(Regenerated {
            entries,
            diagnostics,
            content,
        })
    }
}
