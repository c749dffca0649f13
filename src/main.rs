//! gwbuilder - GlimmerWorks build tool
//!
//! `gwbuilder updeps` regenerates versions.cmake from its dependency
//! declarations, resolving `latest` against GitHub releases.

use clap::Parser;
use gwbuilder::cli::{Cli, Commands, UpdepsArgs};
use gwbuilder::error::AppError;
use gwbuilder::logging;
use gwbuilder::orchestrator::{Orchestrator, SyncConfig};
use gwbuilder::output::{create_formatter, OutputConfig, OutputFormatter, Verbosity};
use gwbuilder::registry::{GitHubReleases, HttpClient};
use std::io::{self, Write};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(Verbosity::from_flags(cli.verbose, cli.quiet));

    match cli.command {
        Commands::Updeps(ref args) => match run_updeps(&cli, args).await {
            Ok(exit_code) => exit_code,
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

/// Compose the collaborators and run the `updeps` workflow
async fn run_updeps(cli: &Cli, args: &UpdepsArgs) -> anyhow::Result<ExitCode> {
    let output_config = OutputConfig::from_cli(args.json, cli.verbose, cli.quiet, cli.no_color);
    let formatter = create_formatter(output_config);

    let outcome = match HttpClient::with_token(args.github_token.as_deref()) {
        Ok(client) => {
            let source = GitHubReleases::with_api_url(client, args.api_url.clone());
            let config = SyncConfig::from_args(args, cli.quiet);
            Orchestrator::new(config, Box::new(source)).run().await
        }
        Err(e) => Err(AppError::Registry(e)),
    };

    match outcome {
        Ok(report) => {
            let mut stderr = io::stderr().lock();
            formatter.format_diagnostics(report.diagnostics(), &mut stderr)?;
            stderr.flush()?;

            let mut stdout = io::stdout().lock();
            formatter.format(&report, &mut stdout)?;
            stdout.flush()?;

            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            report_error(formatter.as_ref(), args.json, &e)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Write a fatal error to stdout (JSON) or stderr (text)
fn report_error(
    formatter: &dyn OutputFormatter,
    json: bool,
    error: &AppError,
) -> io::Result<()> {
    if json {
        let mut stdout = io::stdout().lock();
        formatter.format_error(error, &mut stdout)?;
        stdout.flush()
    } else {
        let mut stderr = io::stderr().lock();
        formatter.format_error(error, &mut stderr)?;
        stderr.flush()
    }
}
