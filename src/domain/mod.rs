//! Core domain models for gwbuilder
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency declarations parsed from `versions.cmake` comments
//! - Generated variable definitions and the name derivation rule
//! - Release records returned by a release feed
//! - Resolved declarations that feed the regenerated file and the report

mod declaration;
mod release;
mod resolved;
mod variable;

pub use declaration::{Declaration, VersionRequest, LATEST_SENTINEL};
pub use release::Release;
pub use resolved::{ResolvedDeclaration, ValueOrigin};
pub use variable::{derive_variable_name, VariableDefinition};
