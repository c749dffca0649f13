//! Diagnostic logging setup
//!
//! Installs a `tracing-subscriber` formatter on stderr. `RUST_LOG` takes
//! precedence; otherwise the level follows the CLI verbosity.

use crate::output::Verbosity;
use tracing_subscriber::EnvFilter;

/// Build the log filter for a verbosity level
pub fn filter_for(verbosity: Verbosity) -> EnvFilter {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        return EnvFilter::from_default_env();
    }

    let directive = match verbosity {
        Verbosity::Quiet => "error",
        Verbosity::Normal => "warn",
        Verbosity::Verbose => "gwbuilder=debug,warn",
    };
    EnvFilter::new(directive)
}

/// Install the global subscriber
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init(Verbosity::Normal);
        init(Verbosity::Verbose);
    }

    #[test]
    fn test_filter_for_verbose_mentions_crate() {
        if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
            return;
        }
        let filter = filter_for(Verbosity::Verbose).to_string();
        assert!(filter.contains("gwbuilder=debug"));
    }
}
