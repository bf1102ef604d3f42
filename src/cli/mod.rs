//! CLI support for cond-expr
//!
//! Provides programmatic access to the `condexpr` commands so other tools can
//! embed the same validation output.

mod check;

pub use check::{CheckOptions, CheckResult, execute_check, execute_tokens};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// The `--pattern` argument is not a valid regex
    Pattern(crate::PatternError),
    /// The expression could not be tokenized (token listing only)
    Lex(crate::LexError),
    /// IO error
    Io(io::Error),
    /// No expression provided
    NoInput,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Pattern(e) => write!(f, "{}", e),
            CliError::Lex(e) => write!(f, "Lex error: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoInput => write!(
                f,
                "No expression provided. Pass it as an argument or pipe it to stdin."
            ),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Pattern(e) => Some(e),
            CliError::Lex(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::NoInput => None,
        }
    }
}

impl From<crate::PatternError> for CliError {
    fn from(e: crate::PatternError) -> Self {
        CliError::Pattern(e)
    }
}

impl From<crate::LexError> for CliError {
    fn from(e: crate::LexError) -> Self {
        CliError::Lex(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
