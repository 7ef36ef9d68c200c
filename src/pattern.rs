//! @dose
//! purpose: Match criteria for line rewriting: an optional regex plus optional
//!     literal substrings, OR-combined.
//!
//! when-editing:
//!     - !The regex is compiled exactly as supplied, metacharacters included
//!     - Literals are plain substring containment tests and cannot misfire on
//!       metacharacters
//!
//! invariants:
//!     - Matching is case-sensitive with no normalization
//!     - A spec with no regex and no literals never matches
//!
//! gotchas:
//!     - Empty strings are dropped from the literal set, so a bare "" argument
//!       cannot make every line match

use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("invalid pattern: {0}")]
    Invalid(#[from] regex::Error),
}

/// A compiled match criterion. A line matches when the regex finds a partial
/// match or any literal occurs as a substring; matching is case-sensitive.
#[derive(Debug)]
pub struct MatchSpec {
    regex: Option<Regex>,
    literals: Vec<String>,
}

impl MatchSpec {
    /// Compile the user-supplied regex fragment and literal strings. An
    /// empty or absent fragment yields a spec with no regex; empty literals
    /// are dropped. A spec with neither never matches anything.
    pub fn compile(pattern: Option<&str>, literals: &[String]) -> Result<Self, PatternError> {
        let regex = match pattern {
            Some(p) if !p.is_empty() => Some(Regex::new(p)?),
            _ => None,
        };
        let literals = literals
            .iter()
            .filter(|s| !s.is_empty())
            .cloned()
            .collect();
        Ok(Self { regex, literals })
    }

    pub fn matches(&self, text: &str) -> bool {
        if let Some(regex) = &self.regex {
            if regex.is_match(text) {
                return true;
            }
        }
        self.literals.iter().any(|lit| text.contains(lit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lits(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_regex_partial_match() {
        let spec = MatchSpec::compile(Some("console\\.log"), &[]).unwrap();
        assert!(spec.matches("  console.log('hi');"));
        assert!(!spec.matches("consoleXlog"));
    }

    #[test]
    fn test_regex_is_case_sensitive() {
        let spec = MatchSpec::compile(Some("TODO"), &[]).unwrap();
        assert!(spec.matches("// TODO fix"));
        assert!(!spec.matches("// todo fix"));
    }

    #[test]
    fn test_literal_substring() {
        let spec = MatchSpec::compile(None, &lits(&["DEBUG"])).unwrap();
        assert!(spec.matches("if DEBUG:"));
        assert!(!spec.matches("if debug:"));
    }

    #[test]
    fn test_literal_metacharacters_match_literally() {
        let spec = MatchSpec::compile(None, &lits(&["a.b(*)"])).unwrap();
        assert!(spec.matches("call a.b(*) here"));
        assert!(!spec.matches("axb()"));
    }

    #[test]
    fn test_or_semantics_literal_rescues_failed_regex() {
        let spec = MatchSpec::compile(Some("^never$"), &lits(&["DEBUG", "error", "warning"])).unwrap();
        assert!(spec.matches("log.error('x')"));
        assert!(spec.matches("DEBUG = True"));
        assert!(spec.matches("show warning banner"));
        assert!(!spec.matches("plain line"));
    }

    #[test]
    fn test_empty_spec_never_matches() {
        let spec = MatchSpec::compile(None, &[]).unwrap();
        assert!(!spec.matches("anything"));
        assert!(!spec.matches(""));

        let spec = MatchSpec::compile(Some(""), &lits(&["", ""])).unwrap();
        assert!(!spec.matches("anything"));
    }

    #[test]
    fn test_invalid_regex_is_an_error() {
        let err = MatchSpec::compile(Some("(unclosed"), &[]).unwrap_err();
        assert!(matches!(err, PatternError::Invalid(_)));
    }
}
