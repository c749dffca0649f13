//! Declarations paired with the value written for them

use super::{Declaration, VariableDefinition};
use serde::{Deserialize, Serialize};

/// Where a generated value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueOrigin {
    /// Copied from a pinned declaration
    Pinned,
    /// First stable tag of the release feed
    Resolved,
    /// Resolution failed and the failure policy substituted an empty value
    Fallback,
}

/// A declaration together with its resolved value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDeclaration {
    /// The parsed declaration
    pub declaration: Declaration,
    /// The value written into `set(...)`
    pub value: String,
    /// How the value was obtained
    pub origin: ValueOrigin,
}

impl ResolvedDeclaration {
    /// Creates a new resolved declaration
    pub fn new(declaration: Declaration, value: impl Into<String>, origin: ValueOrigin) -> Self {
        Self {
            declaration,
            value: value.into(),
            origin,
        }
    }

    /// Returns the variable definition generated for this declaration
    pub fn definition(&self) -> VariableDefinition {
        VariableDefinition::for_repository(&self.declaration.repository, self.value.clone())
    }

    /// Returns true if the value is a policy fallback
    pub fn is_fallback(&self) -> bool {
        self.origin == ValueOrigin::Fallback
    }
}
