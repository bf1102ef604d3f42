use crate::ast::{Token, TokenKind};
use crate::variable::VariableMatcher;
use std::fmt;

/// Maximum number of characters of unconsumed input carried by a [`LexError`].
const EXCERPT_LEN: usize = 20;

/// Raised when no token class matches at a scan position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// Byte offset of the first unrecognised character.
    pub position: usize,
    /// Short excerpt of the input starting at `position`.
    pub remaining: String,
}

impl LexError {
    fn at(input: &str, position: usize) -> Self {
        LexError {
            position,
            remaining: input[position..].chars().take(EXCERPT_LEN).collect(),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unrecognized input at position {}: '{}'",
            self.position, self.remaining
        )
    }
}

impl std::error::Error for LexError {}

/// Returns the byte length of the token at the start of `rest`, if any.
type Rule = fn(&str, &VariableMatcher) -> Option<usize>;

/// Token classes in the order they are tried. The first rule that matches
/// at the scan position wins.
const RULES: [(TokenKind, Rule); 14] = [
    (TokenKind::Whitespace, whitespace),
    (TokenKind::Lte, less_equal),
    (TokenKind::Gte, greater_equal),
    (TokenKind::Eq, equal),
    (TokenKind::Neq, not_equal),
    (TokenKind::Lt, less),
    (TokenKind::Gt, greater),
    (TokenKind::And, and_keyword),
    (TokenKind::Boolean, boolean),
    (TokenKind::Variable, variable),
    (TokenKind::Number, number),
    (TokenKind::String, string),
    (TokenKind::LParen, left_paren),
    (TokenKind::RParen, right_paren),
];

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn symbol(rest: &str, sym: &str) -> Option<usize> {
    rest.starts_with(sym).then_some(sym.len())
}

/// Matches one of `words` when it is not directly followed by an identifier
/// character, so `trueish` is never split into `true` + `ish`.
fn keyword(rest: &str, words: &[&str]) -> Option<usize> {
    words.iter().find_map(|word| {
        let tail = rest.strip_prefix(word)?;
        match tail.chars().next() {
            Some(c) if is_ident_char(c) => None,
            _ => Some(word.len()),
        }
    })
}

fn whitespace(rest: &str, _: &VariableMatcher) -> Option<usize> {
    let len = rest
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map_or(rest.len(), |(i, _)| i);
    (len > 0).then_some(len)
}

fn less_equal(rest: &str, _: &VariableMatcher) -> Option<usize> {
    symbol(rest, "<=")
}

fn greater_equal(rest: &str, _: &VariableMatcher) -> Option<usize> {
    symbol(rest, ">=")
}

fn equal(rest: &str, _: &VariableMatcher) -> Option<usize> {
    symbol(rest, "==")
}

fn not_equal(rest: &str, _: &VariableMatcher) -> Option<usize> {
    symbol(rest, "!=")
}

fn less(rest: &str, _: &VariableMatcher) -> Option<usize> {
    symbol(rest, "<")
}

fn greater(rest: &str, _: &VariableMatcher) -> Option<usize> {
    symbol(rest, ">")
}

fn and_keyword(rest: &str, _: &VariableMatcher) -> Option<usize> {
    keyword(rest, &["and", "AND"])
}

fn boolean(rest: &str, _: &VariableMatcher) -> Option<usize> {
    keyword(rest, &["true", "false"])
}

fn variable(rest: &str, matcher: &VariableMatcher) -> Option<usize> {
    matcher.match_len(rest)
}

/// `[0-9]+(\.[0-9]+)?`
fn number(rest: &str, _: &VariableMatcher) -> Option<usize> {
    let bytes = rest.as_bytes();
    let digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let integral = digits(0);
    if integral == 0 {
        return None;
    }

    if bytes.get(integral) == Some(&b'.') {
        let fraction = digits(integral + 1);
        if fraction > 0 {
            return Some(integral + 1 + fraction);
        }
    }
    Some(integral)
}

/// Double-quoted string without escape processing: the first `"` after the
/// opening quote closes it.
fn string(rest: &str, _: &VariableMatcher) -> Option<usize> {
    let body = rest.strip_prefix('"')?;
    body.find('"').map(|end| end + 2)
}

fn left_paren(rest: &str, _: &VariableMatcher) -> Option<usize> {
    symbol(rest, "(")
}

fn right_paren(rest: &str, _: &VariableMatcher) -> Option<usize> {
    symbol(rest, ")")
}

/// Pull-based tokenizer over a borrowed input.
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    matcher: &'a VariableMatcher,
}

impl<'a> Lexer<'a> {
    /// Lexer using the default variable pattern.
    pub fn new(input: &'a str) -> Self {
        Self::with_matcher(input, VariableMatcher::default_ref())
    }

    pub fn with_matcher(input: &'a str, matcher: &'a VariableMatcher) -> Self {
        Lexer {
            input,
            position: 0,
            matcher,
        }
    }

    /// Byte offset of the next character to scan.
    pub fn position(&self) -> usize {
        self.position
    }

    fn scan(&self) -> Option<(TokenKind, usize)> {
        let rest = &self.input[self.position..];
        RULES
            .iter()
            .find_map(|(kind, rule)| rule(rest, self.matcher).map(|len| (*kind, len)))
    }

    /// Returns the next significant token, `Ok(None)` at end of input.
    ///
    /// Whitespace is consumed silently.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        while self.position < self.input.len() {
            let start = self.position;
            let (kind, len) = self
                .scan()
                .ok_or_else(|| LexError::at(self.input, start))?;
            self.position += len;

            let lexeme = &self.input[start..self.position];
            match kind {
                TokenKind::Whitespace => continue,
                TokenKind::String => {
                    return Ok(Some(Token::new(kind, &lexeme[1..len - 1], start)));
                }
                _ => return Ok(Some(Token::new(kind, lexeme, start))),
            }
        }
        Ok(None)
    }

    /// Consumes the remaining input. Either every token is produced or the
    /// first error is returned.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }
}

/// Tokenizes `input` with the default variable pattern.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).tokenize()
}

/// Tokenizes `input`, recognising variables with `matcher`.
pub fn tokenize_with(input: &str, matcher: &VariableMatcher) -> Result<Vec<Token>, LexError> {
    Lexer::with_matcher(input, matcher).tokenize()
}
