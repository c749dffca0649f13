//! Handling of failed `latest` resolutions

use crate::error::ResolutionError;

/// What to do when a `latest` declaration cannot be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Write an empty value (`set(NAME "")`) and keep going
    #[default]
    Empty,
    /// Abort the run before anything is written
    Abort,
}

impl FailurePolicy {
    /// Select the policy from the `--strict` flag
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            FailurePolicy::Abort
        } else {
            FailurePolicy::Empty
        }
    }

    /// Turns a resolution error into a substitute value, or passes it on
    pub fn recover(&self, error: ResolutionError) -> Result<String, ResolutionError> {
        match self {
            FailurePolicy::Empty => Ok(String::new()),
            FailurePolicy::Abort => Err(error),
        }
    }
}
