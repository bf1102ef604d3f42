//! Total entry points: text in, [`Validation`] out.
//!
//! Unlike [`tokenize`](crate::lexer::tokenize), nothing here returns an error
//! outward. Every failure, lexical or syntactic, ends up in
//! [`Validation::Invalid`] with a message suitable for a validation UI.

use crate::{
    ast::{Expr, Token},
    lexer::{LexError, Lexer},
    parser::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_OPERATORS, ParseError, Parser},
    variable::VariableMatcher,
};

/// Outcome of validating one expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    Valid(Expr),
    Invalid(ParseError),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }

    pub fn ast(&self) -> Option<&Expr> {
        match self {
            Validation::Valid(expr) => Some(expr),
            Validation::Invalid(_) => None,
        }
    }

    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            Validation::Valid(_) => None,
            Validation::Invalid(e) => Some(e),
        }
    }

    /// Human-readable error message, `None` when valid.
    pub fn error(&self) -> Option<String> {
        self.parse_error().map(ToString::to_string)
    }

    pub fn into_result(self) -> Result<Expr, ParseError> {
        match self {
            Validation::Valid(expr) => Ok(expr),
            Validation::Invalid(e) => Err(e),
        }
    }
}

impl From<Result<Expr, ParseError>> for Validation {
    fn from(result: Result<Expr, ParseError>) -> Self {
        match result {
            Ok(expr) => Validation::Valid(expr),
            Err(e) => Validation::Invalid(e),
        }
    }
}

/// Parses an already tokenized expression.
pub fn parse(tokens: &[Token]) -> Validation {
    Parser::new(tokens).parse().into()
}

/// Validates `input` using the default variable pattern.
///
/// # Examples
///
/// ```
/// use cond_expr::{parse_expression, BinOp};
///
/// let result = parse_expression("integer_value > 5 and boolean_value == true");
/// assert!(result.is_valid());
/// assert_eq!(result.ast().unwrap().operator(), Some(BinOp::And));
///
/// let result = parse_expression("   ");
/// assert_eq!(result.error().as_deref(), Some("Input vuoto"));
/// ```
pub fn parse_expression(input: &str) -> Validation {
    parse_expression_with(input, VariableMatcher::default_ref())
}

/// Validates `input`, recognising variables with `matcher`.
pub fn parse_expression_with(input: &str, matcher: &VariableMatcher) -> Validation {
    run(input, matcher, Limits::default())
}

/// Binds a matcher once and returns a reusable validation function.
///
/// # Examples
///
/// ```
/// use cond_expr::{create_parser, VariableMatcher};
///
/// let parse = create_parser(VariableMatcher::new("custom_[a-z]+").unwrap());
/// assert!(parse("custom_test == 10").is_valid());
/// assert!(!parse("string_value == \"test\"").is_valid());
/// ```
pub fn create_parser(matcher: VariableMatcher) -> impl Fn(&str) -> Validation + Send + Sync {
    move |input| parse_expression_with(input, &matcher)
}

/// Parser configuration bound to a variable pattern, a nesting limit and an
/// operator limit.
#[derive(Debug, Clone)]
pub struct ExpressionParser {
    matcher: VariableMatcher,
    limits: Limits,
}

#[derive(Debug, Clone, Copy)]
struct Limits {
    max_depth: usize,
    max_operators: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_depth: DEFAULT_MAX_DEPTH,
            max_operators: DEFAULT_MAX_OPERATORS,
        }
    }
}

impl ExpressionParser {
    pub fn new(matcher: VariableMatcher) -> Self {
        ExpressionParser {
            matcher,
            limits: Limits::default(),
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.limits.max_depth = max_depth;
        self
    }

    /// Rejects expressions with more than `max_operators` binary operators.
    pub fn with_max_operators(mut self, max_operators: usize) -> Self {
        self.limits.max_operators = max_operators;
        self
    }

    pub fn matcher(&self) -> &VariableMatcher {
        &self.matcher
    }

    pub fn max_depth(&self) -> usize {
        self.limits.max_depth
    }

    pub fn max_operators(&self) -> usize {
        self.limits.max_operators
    }

    /// Tokenizes the trimmed `input`.
    pub fn tokenize(&self, input: &str) -> Result<Vec<Token>, LexError> {
        Lexer::with_matcher(input.trim(), &self.matcher).tokenize()
    }

    pub fn parse(&self, input: &str) -> Validation {
        run(input, &self.matcher, self.limits)
    }
}

impl Default for ExpressionParser {
    fn default() -> Self {
        Self::new(VariableMatcher::default())
    }
}

fn run(input: &str, matcher: &VariableMatcher, limits: Limits) -> Validation {
    let validation: Validation = parse_trimmed(input.trim(), matcher, limits).into();

    if let Validation::Invalid(e) = &validation {
        log::debug!("rejected expression {:?}: {}", input, e);
    }
    validation
}

fn parse_trimmed(
    input: &str,
    matcher: &VariableMatcher,
    limits: Limits,
) -> Result<Expr, ParseError> {
    let tokens = Lexer::with_matcher(input, matcher).tokenize()?;
    log::trace!("tokenized {} tokens from {:?}", tokens.len(), input);

    Parser::new(&tokens)
        .with_max_depth(limits.max_depth)
        .with_max_operators(limits.max_operators)
        .parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ast::BinOp, parser::SyntaxError};

    #[test]
    fn test_validation_accessors() {
        let valid = parse_expression("integer_value > 5");
        assert!(valid.is_valid());
        assert!(valid.error().is_none());
        assert_eq!(valid.ast().and_then(Expr::operator), Some(BinOp::Gt));

        let invalid = parse_expression("integer_value >");
        assert!(!invalid.is_valid());
        assert!(invalid.ast().is_none());
        assert_eq!(invalid.error().as_deref(), Some("unexpected end of input"));
    }

    #[test]
    fn test_lex_errors_are_captured() {
        let result = parse_expression("integer_value = 5");
        assert!(matches!(
            result.parse_error(),
            Some(ParseError::Lex(LexError { position: 14, .. }))
        ));
    }

    #[test]
    fn test_expression_parser_depth() {
        let parser = ExpressionParser::default().with_max_depth(1);
        assert!(parser.parse("(integer_value > 1)").is_valid());
        assert!(!parser.parse("((integer_value > 1))").is_valid());
    }

    #[test]
    fn test_expression_parser_operators() {
        let parser = ExpressionParser::default().with_max_operators(3);
        assert_eq!(parser.max_operators(), 3);
        assert_eq!(parser.max_depth(), DEFAULT_MAX_DEPTH);
        assert!(parser.parse("integer_value > 1 and double_value < 2").is_valid());

        let rejected = parser.parse("integer_value > 1 and double_value < 2 and boolean_value");
        assert!(matches!(
            rejected.parse_error(),
            Some(ParseError::Syntax(SyntaxError::TooManyOperators {
                limit: 3,
                offset: 39
            }))
        ));
    }

    #[test]
    fn test_expression_parser_tokenize_trims() {
        let tokens = ExpressionParser::default().tokenize("  integer_value ").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].offset, 0);
    }
}
