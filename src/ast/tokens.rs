use std::fmt;

/// The closed set of token classes recognised by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Runs of whitespace. Recognised by the lexer but never emitted.
    Whitespace,

    // Literals
    /// Unsigned decimal number with an optional fractional part
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 3.14159
    /// 007
    /// ```
    Number,

    /// Double-quoted string. The token text is the content without quotes.
    ///
    /// # Examples
    /// ```text
    /// "hello world"
    /// ""
    /// ```
    String,

    /// `true` or `false`
    Boolean,

    /// Variable name matched by the active
    /// [`VariableMatcher`](crate::variable::VariableMatcher)
    ///
    /// # Examples
    /// ```text
    /// integer_value
    /// datetimearray_value
    /// ```
    Variable,

    // Logical
    /// Logical AND (word, `and` or `AND`)
    And,

    // Comparison
    /// Equality (`==`)
    Eq,
    /// Inequality (`!=`)
    Neq,
    /// Less than (`<`)
    Lt,
    /// Less than or equal (`<=`)
    Lte,
    /// Greater than (`>`)
    Gt,
    /// Greater than or equal (`>=`)
    Gte,

    // Delimiters
    /// Left parenthesis
    LParen,
    /// Right parenthesis
    RParen,
}

impl TokenKind {
    /// Order in which the lexer tries each token class at a scan position.
    ///
    /// Two-character operators come before their one-character prefixes,
    /// and keywords come before variables.
    pub const ALL_IN_PRIORITY: [TokenKind; 14] = [
        TokenKind::Whitespace,
        TokenKind::Lte,
        TokenKind::Gte,
        TokenKind::Eq,
        TokenKind::Neq,
        TokenKind::Lt,
        TokenKind::Gt,
        TokenKind::And,
        TokenKind::Boolean,
        TokenKind::Variable,
        TokenKind::Number,
        TokenKind::String,
        TokenKind::LParen,
        TokenKind::RParen,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Whitespace => "Whitespace",
            TokenKind::Number => "Number",
            TokenKind::String => "String",
            TokenKind::Boolean => "Boolean",
            TokenKind::Variable => "Variable",
            TokenKind::And => "And",
            TokenKind::Eq => "Eq",
            TokenKind::Neq => "Neq",
            TokenKind::Lt => "Lt",
            TokenKind::Lte => "Lte",
            TokenKind::Gt => "Gt",
            TokenKind::Gte => "Gte",
            TokenKind::LParen => "LParen",
            TokenKind::RParen => "RParen",
        }
    }

    /// True for the kinds that can start a primary expression.
    pub fn is_operand(&self) -> bool {
        matches!(
            self,
            TokenKind::Number
                | TokenKind::String
                | TokenKind::Boolean
                | TokenKind::Variable
                | TokenKind::LParen
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Matched text. For [`TokenKind::String`] this is the unquoted content.
    pub text: String,
    /// Byte offset of the lexeme in the tokenized input.
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, offset: usize) -> Self {
        Token {
            kind,
            text: text.into(),
            offset,
        }
    }

    /// Source form of the token: the text as it has to be written for the
    /// lexer to produce this token again.
    pub fn lexeme(&self) -> String {
        match self.kind {
            TokenKind::String => format!("\"{}\"", self.text),
            _ => self.text.clone(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.lexeme())
    }
}
