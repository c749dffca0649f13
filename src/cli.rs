//! CLI argument parsing module for gwbuilder

use crate::registry::DEFAULT_GITHUB_API_URL;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Build tool for GlimmerWorks
#[derive(Parser, Debug, Clone)]
#[command(name = "gwbuilder", version, about = "A build tool developed for GlimmerWorks")]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Update dependencies in versions.cmake to latest stable tags
    ///
    /// Scans versions.cmake for comment lines of the form `#owner/repo@version`.
    /// A version of `latest` is replaced by the newest stable GitHub release tag
    /// (prereleases are ignored). The file is then regenerated with one
    /// `set(OWNER_REPO_VERSION "x.y.z")` statement per dependency.
    Updeps(UpdepsArgs),
}

/// Options of the `updeps` subcommand
#[derive(Args, Debug, Clone)]
pub struct UpdepsArgs {
    /// Directory containing versions.cmake (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Dry run mode - show the regenerated file without writing it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Abort instead of writing an empty version when a lookup fails
    #[arg(long)]
    pub strict: bool,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_GITHUB_API_URL)]
    pub api_url: String,

    /// Token sent as a bearer credential to raise the API rate limit
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,
}
