//! gwbuilder - GlimmerWorks build tool library
//!
//! This library keeps `versions.cmake` in sync with GitHub releases:
//! - Parses `#owner/repo@version` comment declarations
//! - Resolves `latest` to the newest stable release tag
//! - Regenerates the file with CMake `set(OWNER_REPO_VERSION "...")` lines

pub mod cli;
pub mod domain;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod registry;
pub mod resolve;
