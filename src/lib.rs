pub mod ast;
pub mod cli;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod validate;
pub mod variable;

pub use ast::{BinOp, Expr, Literal, Token, TokenKind};
pub use lexer::{LexError, Lexer, tokenize, tokenize_with};
pub use output::{to_json, to_json_pretty};
pub use parser::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_OPERATORS, ParseError, Parser, SyntaxError};
pub use validate::{
    ExpressionParser, Validation, create_parser, parse, parse_expression, parse_expression_with,
};
pub use variable::{DEFAULT_VARIABLE_PATTERN, PatternError, VariableMatcher};
