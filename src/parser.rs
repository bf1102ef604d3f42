use crate::{
    ast::{BinOp, Expr, Token, TokenKind},
    lexer::LexError,
};
use std::fmt;

/// Default limit on parenthesis nesting.
///
/// Each level costs a handful of stack frames; the limit keeps adversarial
/// input from exhausting the stack.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Default limit on binary operators in one expression.
///
/// Bounds the height of the resulting tree, which is walked recursively when
/// it is rendered, compared or cloned.
pub const DEFAULT_MAX_OPERATORS: usize = 1024;

/// A grammar rule found a missing or misplaced token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// A token that cannot start a primary expression
    UnexpectedToken { kind: TokenKind, offset: usize },

    /// Input ended while a primary expression was expected
    UnexpectedEnd,

    /// `(` without its `)`; carries what was found instead, if anything
    MissingClosingParen { found: Option<(TokenKind, usize)> },

    /// A complete expression was followed by more tokens
    TrailingToken { kind: TokenKind, offset: usize },

    /// Number token that does not parse as floating point
    InvalidNumber { text: String, offset: usize },

    /// Parentheses nested deeper than the configured limit
    NestingTooDeep { limit: usize },

    /// More binary operators than the configured limit
    TooManyOperators { limit: usize, offset: usize },
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::UnexpectedToken { kind, offset } => {
                write!(f, "unexpected token {} at position {}", kind, offset)
            }
            SyntaxError::UnexpectedEnd => write!(f, "unexpected end of input"),
            SyntaxError::MissingClosingParen { found: None } => {
                write!(f, "expected closing parenthesis, found end of input")
            }
            SyntaxError::MissingClosingParen {
                found: Some((kind, offset)),
            } => write!(
                f,
                "expected closing parenthesis, found {} at position {}",
                kind, offset
            ),
            SyntaxError::TrailingToken { kind, offset } => write!(
                f,
                "unexpected token {} after end of expression at position {}",
                kind, offset
            ),
            SyntaxError::InvalidNumber { text, offset } => {
                write!(f, "invalid number '{}' at position {}", text, offset)
            }
            SyntaxError::NestingTooDeep { limit } => {
                write!(f, "parentheses nested deeper than {} levels", limit)
            }
            SyntaxError::TooManyOperators { limit, offset } => write!(
                f,
                "more than {} operators in expression, at position {}",
                limit, offset
            ),
        }
    }
}

impl std::error::Error for SyntaxError {}

/// Any reason an expression was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The text could not be tokenized
    Lex(LexError),
    /// Nothing left to parse after trimming
    EmptyInput,
    /// The tokens do not form an expression
    Syntax(SyntaxError),
}

impl ParseError {
    /// Stable identifier of the error class.
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::Lex(_) => "lex_error",
            ParseError::EmptyInput => "empty_input",
            ParseError::Syntax(_) => "syntax_error",
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lex(e) => write!(f, "could not tokenize input: {}", e),
            ParseError::EmptyInput => write!(f, "Input vuoto"),
            ParseError::Syntax(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Lex(e) => Some(e),
            ParseError::Syntax(e) => Some(e),
            ParseError::EmptyInput => None,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        ParseError::Lex(e)
    }
}

impl From<SyntaxError> for ParseError {
    fn from(e: SyntaxError) -> Self {
        ParseError::Syntax(e)
    }
}

/// Recursive-descent parser over a token slice.
///
/// One method per precedence level, loosest first:
///
/// ```text
/// Expression   := Conjunction
/// Conjunction  := Equality ( "and" Equality )*
/// Equality     := Relational ( ("=="|"!=") Relational )*
/// Relational   := Primary ( ("<"|"<="|">"|">=") Primary )*
/// Primary      := "(" Expression ")" | NUMBER | STRING | BOOLEAN | VARIABLE
/// ```
pub struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
    depth: usize,
    max_depth: usize,
    operators: usize,
    max_operators: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            tokens,
            position: 0,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
            operators: 0,
            max_operators: DEFAULT_MAX_OPERATORS,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_operators(mut self, max_operators: usize) -> Self {
        self.max_operators = max_operators;
        self
    }

    fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|t| t.kind)
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    /// Consumes the operator token, counting it against the limit.
    fn consume_operator(&mut self) -> Result<(), SyntaxError> {
        if self.operators >= self.max_operators {
            return Err(SyntaxError::TooManyOperators {
                limit: self.max_operators,
                offset: self.current().map_or(0, |t| t.offset),
            });
        }
        self.operators += 1;
        self.advance();
        Ok(())
    }

    /// Parse primary expressions: literals, variables and parenthesised
    /// sub-expressions.
    fn parse_primary(&mut self) -> Result<Expr, SyntaxError> {
        let token = self.current().ok_or(SyntaxError::UnexpectedEnd)?;

        let expr = match token.kind {
            TokenKind::LParen => {
                self.advance();
                return self.parse_group();
            }
            TokenKind::Number => {
                let n = token
                    .text
                    .parse::<f64>()
                    .map_err(|_| SyntaxError::InvalidNumber {
                        text: token.text.clone(),
                        offset: token.offset,
                    })?;
                Expr::number(n)
            }
            TokenKind::String => Expr::string(token.text.as_str()),
            TokenKind::Boolean => Expr::boolean(token.text == "true"),
            TokenKind::Variable => Expr::variable(token.text.as_str()),
            kind => {
                return Err(SyntaxError::UnexpectedToken {
                    kind,
                    offset: token.offset,
                });
            }
        };

        self.advance();
        Ok(expr)
    }

    /// Body of a parenthesised expression, after the opening `(`.
    fn parse_group(&mut self) -> Result<Expr, SyntaxError> {
        if self.depth >= self.max_depth {
            return Err(SyntaxError::NestingTooDeep {
                limit: self.max_depth,
            });
        }

        self.depth += 1;
        let expr = self.parse_expression()?;
        self.depth -= 1;

        match self.current() {
            Some(token) if token.kind == TokenKind::RParen => {
                self.advance();
                Ok(expr)
            }
            found => Err(SyntaxError::MissingClosingParen {
                found: found.map(|t| (t.kind, t.offset)),
            }),
        }
    }

    /// Left fold of `operand (op operand)*` for the operators accepted by
    /// `accepts`.
    fn parse_left_assoc(
        &mut self,
        operand: fn(&mut Self) -> Result<Expr, SyntaxError>,
        accepts: fn(&BinOp) -> bool,
    ) -> Result<Expr, SyntaxError> {
        let mut left = operand(self)?;

        while let Some(op) = self
            .current_kind()
            .and_then(BinOp::from_token_kind)
            .filter(accepts)
        {
            self.consume_operator()?;
            let right = operand(self)?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_relational(&mut self) -> Result<Expr, SyntaxError> {
        self.parse_left_assoc(Self::parse_primary, BinOp::is_relational)
    }

    fn parse_equality(&mut self) -> Result<Expr, SyntaxError> {
        self.parse_left_assoc(Self::parse_relational, BinOp::is_equality)
    }

    fn parse_and(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_equality()?;

        while self.check(TokenKind::And) {
            self.consume_operator()?;
            let right = self.parse_equality()?;
            left = Expr::binary(BinOp::And, left, right);
        }
        Ok(left)
    }

    pub fn parse_expression(&mut self) -> Result<Expr, SyntaxError> {
        self.parse_and()
    }

    /// Parses the whole token slice as a single expression.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        if self.tokens.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let expr = self.parse_expression()?;

        if let Some(token) = self.current() {
            return Err(SyntaxError::TrailingToken {
                kind: token.kind,
                offset: token.offset,
            }
            .into());
        }
        Ok(expr)
    }
}
