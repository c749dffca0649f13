//! Generated CMake variable definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Suffix appended to every derived variable name
const VERSION_SUFFIX: &str = "_VERSION";

/// Derives the CMake variable name for a repository
///
/// `owner/name` becomes `OWNER_NAME_VERSION`.
pub fn derive_variable_name(repository: &str) -> String {
    let mut name = repository.replace('/', "_").to_uppercase();
    name.push_str(VERSION_SUFFIX);
    name
}

/// A `set(NAME "VALUE")` statement in the regenerated file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableDefinition {
    /// Derived variable name
    pub name: String,
    /// Resolved version string, possibly empty
    pub value: String,
}

impl VariableDefinition {
    /// Creates a new variable definition
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates a definition for a repository, deriving the name
    pub fn for_repository(repository: &str, value: impl Into<String>) -> Self {
        Self::new(derive_variable_name(repository), value)
    }
}

/// Escapes a value for a quoted CMake argument
///
/// Backslash, double quote and `$` would otherwise end the string or start a
/// variable reference. Newlines are written as `\n`.
fn escape_quoted_argument(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' | '"' | '$' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl fmt::Display for VariableDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "set({} \"{}\")",
            self.name,
            escape_quoted_argument(&self.value)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_variable_name() {
        assert_eq!(derive_variable_name("foo/bar"), "FOO_BAR_VERSION");
        assert_eq!(derive_variable_name("libsdl-org/SDL"), "LIBSDL-ORG_SDL_VERSION");
    }

    #[test]
    fn test_derive_variable_name_collides_across_case() {
        assert_eq!(derive_variable_name("a/b"), derive_variable_name("A/B"));
    }

    #[test]
    fn test_derive_variable_name_keeps_dots() {
        assert_eq!(
            derive_variable_name("g-truc/glm.x"),
            "G-TRUC_GLM.X_VERSION"
        );
    }

    #[test]
    fn test_variable_definition_display() {
        let def = VariableDefinition::for_repository("foo/bar", "v1.9.0");
        assert_eq!(def.to_string(), "set(FOO_BAR_VERSION \"v1.9.0\")");
    }

    #[test]
    fn test_variable_definition_escapes_quote() {
        let def = VariableDefinition::for_repository("a/b", "v1\"x");
        assert_eq!(def.to_string(), r#"set(A_B_VERSION "v1\"x")"#);
        // The stored value stays raw
        assert_eq!(def.value, "v1\"x");
    }

    #[test]
    fn test_variable_definition_keeps_spaces() {
        let def = VariableDefinition::for_repository("e/f", "1.0 beta");
        assert_eq!(def.to_string(), "set(E_F_VERSION \"1.0 beta\")");
    }

    #[test]
    fn test_escape_quoted_argument() {
        assert_eq!(escape_quoted_argument("v1.0"), "v1.0");
        assert_eq!(escape_quoted_argument(r"a\b"), r"a\\b");
        assert_eq!(escape_quoted_argument("${X}"), r"\${X}");
        assert_eq!(escape_quoted_argument("a\nb"), r"a\nb");
    }

    #[test]
    fn test_variable_definition_empty_value() {
        let def = VariableDefinition::for_repository("foo/bar", "");
        assert_eq!(def.to_string(), "set(FOO_BAR_VERSION \"\")");
    }
}
