//! Validate expressions and list their tokens

use super::CliError;
use crate::{
    ExpressionParser, Validation, VariableMatcher,
    output::{render, tokens_to_value, validation_to_value},
    parser::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_OPERATORS},
};

/// Options shared by the `check` and `tokens` commands
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// The expression to validate
    pub expression: Option<String>,
    /// Custom variable pattern; the default pattern when `None`
    pub pattern: Option<String>,
    /// Pretty-print the output
    pub pretty: bool,
    /// Parenthesis nesting limit
    pub max_depth: usize,
    /// Binary operator limit
    pub max_operators: usize,
}

impl Default for CheckOptions {
    fn default() -> Self {
        CheckOptions {
            expression: None,
            pattern: None,
            pretty: false,
            max_depth: DEFAULT_MAX_DEPTH,
            max_operators: DEFAULT_MAX_OPERATORS,
        }
    }
}

/// Result of a check operation
#[derive(Debug)]
pub struct CheckResult {
    pub validation: Validation,
    /// Rendered `{valid, ast | error}` JSON
    pub output: String,
}

impl CheckResult {
    pub fn is_valid(&self) -> bool {
        self.validation.is_valid()
    }
}

fn build_parser(options: &CheckOptions) -> Result<ExpressionParser, CliError> {
    let matcher = match &options.pattern {
        Some(pattern) => VariableMatcher::new(pattern)?,
        None => VariableMatcher::default(),
    };
    Ok(ExpressionParser::new(matcher)
        .with_max_depth(options.max_depth)
        .with_max_operators(options.max_operators))
}

/// Validate the expression and render the outcome as JSON.
///
/// An invalid expression is not an error here: it is reported through the
/// returned [`CheckResult`].
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let expression = options.expression.as_deref().ok_or(CliError::NoInput)?;
    let parser = build_parser(options)?;

    let validation = parser.parse(expression);
    let output = render(&validation_to_value(&validation), options.pretty);

    Ok(CheckResult { validation, output })
}

/// Tokenize the expression and render the token stream as JSON.
pub fn execute_tokens(options: &CheckOptions) -> Result<String, CliError> {
    let expression = options.expression.as_deref().ok_or(CliError::NoInput)?;
    let parser = build_parser(options)?;

    let tokens = parser.tokenize(expression)?;
    Ok(render(&tokens_to_value(&tokens), options.pretty))
}
