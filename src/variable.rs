//! Configurable recognition of variable names.
//!
//! The grammar is fixed, but which identifiers count as variables is not:
//! callers can swap the pattern to reuse the parser for another naming
//! convention (`db.table.column`, `custom_field`, ...).

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Pattern accepted when the caller does not provide one.
pub const DEFAULT_VARIABLE_PATTERN: &str =
    r"(binaryblob|boolean|datetime|double|integer|longinteger|string)(array)?_value";

static DEFAULT_MATCHER: LazyLock<VariableMatcher> = LazyLock::new(|| {
    VariableMatcher::new(DEFAULT_VARIABLE_PATTERN).expect("valid default variable regex")
});

/// Error returned when a variable pattern is not a valid regular expression.
#[derive(Debug, Clone)]
pub struct PatternError {
    pub pattern: String,
    pub source: regex::Error,
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid variable pattern '{}': {}", self.pattern, self.source)
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Recognises variable tokens at the lexer's scan position.
///
/// The pattern is anchored at the scan position: a match further along the
/// input never counts. Immutable once built, so one matcher can be shared
/// across threads and parse calls.
#[derive(Debug, Clone)]
pub struct VariableMatcher {
    pattern: String,
    regex: Regex,
}

impl VariableMatcher {
    /// Builds a matcher from a regular expression in `regex` crate syntax.
    ///
    /// # Examples
    ///
    /// ```
    /// use cond_expr::VariableMatcher;
    ///
    /// let matcher = VariableMatcher::new("custom_[a-z]+").unwrap();
    /// assert_eq!(matcher.match_len("custom_test == 10"), Some(11));
    /// assert_eq!(matcher.match_len(" custom_test"), None);
    /// ```
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let anchored = format!("^(?:{})", pattern);
        let regex = Regex::new(&anchored).map_err(|source| PatternError {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(VariableMatcher {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// Shared instance using [`DEFAULT_VARIABLE_PATTERN`].
    pub fn default_ref() -> &'static VariableMatcher {
        &DEFAULT_MATCHER
    }

    /// The pattern as supplied by the caller, without anchoring.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Length in bytes of the variable name at the start of `rest`.
    ///
    /// Empty matches are rejected: a token always consumes input.
    pub fn match_len(&self, rest: &str) -> Option<usize> {
        self.regex
            .find(rest)
            .map(|m| m.end())
            .filter(|&len| len > 0)
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.match_len(name) == Some(name.len())
    }
}

impl Default for VariableMatcher {
    fn default() -> Self {
        DEFAULT_MATCHER.clone()
    }
}
