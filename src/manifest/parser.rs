//! Declaration parser for `versions.cmake`
//!
//! A line is a candidate declaration when, after trimming, it starts with `#`
//! and contains `@`. Candidates look like:
//!
//! ```text
//! #owner/repo@v1.2.3
//! #owner/repo@latest
//! ```
//!
//! Every other line is ignored and dropped on regeneration.

use crate::domain::{Declaration, VersionRequest};
use crate::error::DeclarationError;
use tracing::debug;

/// Comment marker that opens a declaration
const COMMENT_MARKER: char = '#';

/// Separator between repository and version
const VERSION_SEPARATOR: char = '@';

/// Result of scanning a configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedManifest {
    /// Well-formed declarations in input order
    pub declarations: Vec<Declaration>,
    /// Candidate lines that failed to parse, in input order
    pub malformed: Vec<DeclarationError>,
}

impl ParsedManifest {
    /// Returns true if no declarations were found
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

/// Scans file content and extracts dependency declarations
pub fn parse_declarations(content: &str) -> ParsedManifest {
    let mut parsed = ParsedManifest::default();

    for (index, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if !is_candidate(line) {
            continue;
        }

        match parse_candidate(line, index + 1) {
            Ok(declaration) => {
                debug!(line = index + 1, "found declaration {}", declaration);
                parsed.declarations.push(declaration);
            }
            Err(e) => parsed.malformed.push(e),
        }
    }

    parsed
}

/// Returns true if a trimmed line should be parsed as a declaration
pub fn is_candidate(line: &str) -> bool {
    line.starts_with(COMMENT_MARKER) && line.contains(VERSION_SEPARATOR)
}

/// Parses a trimmed candidate line into a declaration
fn parse_candidate(line: &str, line_number: usize) -> Result<Declaration, DeclarationError> {
    let body = line
        .strip_prefix(COMMENT_MARKER)
        .unwrap_or(line)
        .trim();

    let Some((repository, version)) = body.split_once(VERSION_SEPARATOR) else {
        return Err(DeclarationError::malformed(
            line_number,
            line,
            "missing '@' separator",
        ));
    };

    let repository = repository.trim();
    let version = version.trim();

    validate_repository(repository)
        .map_err(|reason| DeclarationError::malformed(line_number, line, reason))?;
    validate_version(version)
        .map_err(|reason| DeclarationError::malformed(line_number, line, reason))?;

    Ok(Declaration::new(
        repository,
        VersionRequest::parse(version),
        line,
        line_number,
    ))
}

/// Checks the `owner/name` shape of a repository identifier
fn validate_repository(repository: &str) -> Result<(), &'static str> {
    if repository.is_empty() {
        return Err("empty repository");
    }

    match repository.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok(())
        }
        _ => Err("repository must be in 'owner/name' form"),
    }
}

/// Checks that a version is present
///
/// Any other content is kept as written. Quoting for CMake happens when the
/// `set` line is rendered.
fn validate_version(version: &str) -> Result<(), &'static str> {
    if version.is_empty() {
        return Err("empty version");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> ParsedManifest {
        parse_declarations(content)
    }

    #[test]
    fn test_parse_pinned() {
        let parsed = parse("#foo/bar@1.2.3\n");
        assert_eq!(parsed.declarations.len(), 1);
        let decl = &parsed.declarations[0];
        assert_eq!(decl.repository, "foo/bar");
        assert_eq!(decl.requested, VersionRequest::Pinned("1.2.3".to_string()));
        assert_eq!(decl.source_line, "#foo/bar@1.2.3");
        assert_eq!(decl.line_number, 1);
        assert!(parsed.malformed.is_empty());
    }

    #[test]
    fn test_parse_latest() {
        let parsed = parse("#foo/bar@latest");
        assert_eq!(parsed.declarations[0].requested, VersionRequest::Latest);
        assert!(parsed.declarations[0].is_latest());
    }

    #[test]
    fn test_parse_surrounding_whitespace() {
        let parsed = parse("   #  foo/bar@v2.0  \r\n");
        let decl = &parsed.declarations[0];
        assert_eq!(decl.repository, "foo/bar");
        assert_eq!(decl.requested.as_str(), "v2.0");
        // Outer whitespace is trimmed, the marker and inner spacing are kept
        assert_eq!(decl.source_line, "#  foo/bar@v2.0");
    }

    #[test]
    fn test_parse_keeps_input_order() {
        let content = "#b/b@2\n#a/a@1\n#c/c@latest\n";
        let parsed = parse(content);
        let repos: Vec<_> = parsed
            .declarations
            .iter()
            .map(|d| d.repository.as_str())
            .collect();
        assert_eq!(repos, vec!["b/b", "a/a", "c/c"]);
        let lines: Vec<_> = parsed.declarations.iter().map(|d| d.line_number).collect();
        assert_eq!(lines, vec![1, 2, 3]);
    }

    #[test]
    fn test_non_candidates_are_ignored() {
        let content = "\
set(FOO_BAR_VERSION \"1.0\")
# plain comment
foo/bar@1.0
#Variable definitions are generated through GlimmerWorksBuilder. Please do not edit them.
";
        let parsed = parse(content);
        assert!(parsed.is_empty());
        assert!(parsed.malformed.is_empty());
    }

    #[test]
    fn test_empty_repository_is_malformed() {
        let parsed = parse("#@1.0");
        assert!(parsed.is_empty());
        assert_eq!(parsed.malformed.len(), 1);
        assert!(parsed.malformed[0].to_string().contains("empty repository"));
    }

    #[test]
    fn test_empty_version_is_malformed() {
        let parsed = parse("#foo/bar@");
        assert!(parsed.is_empty());
        assert!(parsed.malformed[0].to_string().contains("empty version"));
    }

    #[test]
    fn test_repository_without_owner_is_malformed() {
        for line in ["#ownerOnly@1.0", "#/bar@1.0", "#foo/@1.0", "#a/b/c@1.0"] {
            let parsed = parse(line);
            assert!(parsed.is_empty(), "{} should not parse", line);
            assert_eq!(parsed.malformed.len(), 1, "{} should be reported", line);
        }
    }

    #[test]
    fn test_version_with_inner_space_is_kept() {
        let parsed = parse("#e/f@1.0 beta");
        assert!(parsed.malformed.is_empty());
        assert_eq!(parsed.declarations[0].repository, "e/f");
        assert_eq!(parsed.declarations[0].requested.as_str(), "1.0 beta");
    }

    #[test]
    fn test_version_with_quote_is_kept() {
        let parsed = parse("#a/b@v1\"x");
        assert!(parsed.malformed.is_empty());
        assert_eq!(parsed.declarations[0].requested.as_str(), "v1\"x");
    }

    #[test]
    fn test_prose_comment_with_one_slash_is_a_declaration() {
        let parsed = parse("# contact me at foo/bar@some host");
        assert!(parsed.malformed.is_empty());
        let decl = &parsed.declarations[0];
        assert_eq!(decl.repository, "contact me at foo/bar");
        assert_eq!(decl.requested.as_str(), "some host");
    }

    #[test]
    fn test_repository_with_url_characters_is_kept_verbatim() {
        let parsed = parse("#foo/bar?x@latest");
        assert_eq!(parsed.declarations[0].repository, "foo/bar?x");
        assert_eq!(parsed.declarations[0].source_line, "#foo/bar?x@latest");
    }

    #[test]
    fn test_split_on_first_separator() {
        let parsed = parse("#foo/bar@1.0@beta");
        assert_eq!(parsed.declarations[0].requested.as_str(), "1.0@beta");
    }

    #[test]
    fn test_malformed_does_not_stop_parsing() {
        let content = "#@1.0\n#foo/bar@1.0\n#baz@2.0\n#qux/quux@latest\n";
        let parsed = parse(content);
        assert_eq!(parsed.declarations.len(), 2);
        let numbers: Vec<_> = parsed.malformed.iter().map(|e| e.line_number()).collect();
        assert_eq!(numbers, vec![1, 3]);
    }

    #[test]
    fn test_is_candidate() {
        assert!(is_candidate("#a/b@1"));
        assert!(is_candidate("#@"));
        assert!(!is_candidate("#a/b"));
        assert!(!is_candidate("a/b@1"));
        assert!(!is_candidate(""));
    }

    #[test]
    fn test_parse_empty_content() {
        let parsed = parse("");
        assert!(parsed.is_empty());
        assert!(parsed.malformed.is_empty());
    }
}
