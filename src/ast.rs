//! # Condition Expressions - Abstract Syntax Tree
//!
//! This module defines the data model shared by the lexer and the parser of
//! the condition-expression language: restricted filter expressions made of
//! comparisons over typed variables, combined with `and`.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[operators]** - Binary operators (comparison and conjunction)
//! - **[expressions]** - Expression nodes (literals and binary expressions)
//!
//! ## Quick Start
//!
//! ```text
//! integer_value > 5 and string_value == "active"
//! ```
//!
//! parses into
//!
//! ```text
//! And
//! ├── Gt(integer_value, 5)
//! └── Eq(string_value, "active")
//! ```
//!
//! ## Precedence
//!
//! From loosest to tightest:
//!
//! 1. `and`
//! 2. `==`, `!=`
//! 3. `<`, `<=`, `>`, `>=`
//!
//! Every level is left-associative. Parentheses override grouping.
//!
//! ## Variables
//!
//! Variables are recognised by a configurable pattern (see
//! [`VariableMatcher`](crate::variable::VariableMatcher)). The default pattern
//! accepts names such as:
//!
//! ```text
//! integer_value
//! stringarray_value
//! longinteger_value
//! ```
pub mod expressions;
pub mod operators;
pub mod tokens;

pub use expressions::{Expr, Literal};
pub use operators::BinOp;
pub use tokens::{Token, TokenKind};
