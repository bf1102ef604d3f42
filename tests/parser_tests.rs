// tests/parser_tests.rs

use cond_expr::ast::{BinOp, Expr, Literal, Token, TokenKind};
use cond_expr::lexer::tokenize;
use cond_expr::parser::{ParseError, Parser, SyntaxError};
use cond_expr::validate::{Validation, parse};

fn parse_str(input: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(input).unwrap();
    let mut parser = Parser::new(&tokens);
    parser.parse()
}

fn var(name: &str) -> Expr {
    Expr::variable(name)
}

fn num(n: f64) -> Expr {
    Expr::number(n)
}

// ============================================================================
// Literals and Primitives
// ============================================================================

#[test]
fn test_parse_number() {
    let expr = parse_str("42").unwrap();
    assert!(matches!(&expr, Expr::Literal(Literal::Number(n)) if *n == 42.0));
}

#[test]
fn test_parse_float() {
    let expr = parse_str("3.15").unwrap();
    assert!(matches!(&expr, Expr::Literal(Literal::Number(n)) if (n - 3.15).abs() < 0.001));
}

#[test]
fn test_as_literal() {
    let expr = parse_str("boolean_value").unwrap();
    assert_eq!(
        expr.as_literal(),
        Some(&Literal::Variable("boolean_value".to_string()))
    );
    assert_eq!(expr.as_literal().map(Literal::kind), Some(TokenKind::Variable));

    let expr = parse_str("boolean_value == true").unwrap();
    assert_eq!(expr.as_literal(), None);
}

#[test]
fn test_parse_leading_zeros() {
    assert_eq!(parse_str("007").unwrap(), num(7.0));
}

#[test]
fn test_parse_string() {
    let expr = parse_str(r#""hello world""#).unwrap();
    assert!(matches!(&expr, Expr::Literal(Literal::String(s)) if s == "hello world"));
}

#[test]
fn test_parse_boolean_true() {
    assert_eq!(parse_str("true").unwrap(), Expr::boolean(true));
}

#[test]
fn test_parse_boolean_false() {
    assert_eq!(parse_str("false").unwrap(), Expr::boolean(false));
}

#[test]
fn test_parse_variable() {
    assert_eq!(parse_str("datetime_value").unwrap(), var("datetime_value"));
}

#[test]
fn test_literal_kinds() {
    assert_eq!(Literal::Number(1.0).kind(), TokenKind::Number);
    assert_eq!(Literal::String("a".into()).kind(), TokenKind::String);
    assert_eq!(Literal::Boolean(true).kind(), TokenKind::Boolean);
    assert_eq!(Literal::Variable("x".into()).kind(), TokenKind::Variable);
}

// ============================================================================
// Operators
// ============================================================================

#[test]
fn test_comparison_operators() {
    let test_cases = vec![
        ("integer_value == 1", BinOp::Eq),
        ("integer_value != 1", BinOp::Neq),
        ("integer_value < 1", BinOp::Lt),
        ("integer_value <= 1", BinOp::Lte),
        ("integer_value > 1", BinOp::Gt),
        ("integer_value >= 1", BinOp::Gte),
    ];

    for (input, expected) in test_cases {
        let expr = parse_str(input).unwrap();
        assert_eq!(
            expr,
            Expr::binary(expected, var("integer_value"), num(1.0)),
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_operator_token_kinds() {
    for kind in TokenKind::ALL_IN_PRIORITY {
        match BinOp::from_token_kind(kind) {
            Some(op) => assert_eq!(op.token_kind(), kind),
            None => assert!(kind.is_operand() || kind == TokenKind::Whitespace || kind == TokenKind::RParen),
        }
    }
}

#[test]
fn test_uppercase_and() {
    let expr = parse_str("boolean_value AND true").unwrap();
    assert_eq!(expr.operator(), Some(BinOp::And));
}

// ============================================================================
// Precedence and associativity
// ============================================================================

#[test]
fn test_and_is_left_associative() {
    let expr = parse_str("integer_value > 1 and double_value < 2 and boolean_value == true").unwrap();

    match &expr {
        Expr::Binary {
            op: BinOp::And,
            left,
            right,
        } => {
            match left.as_ref() {
                Expr::Binary { op: BinOp::And, left: ll, right: lr } => {
                    assert_eq!(**ll, Expr::binary(BinOp::Gt, var("integer_value"), num(1.0)));
                    assert_eq!(**lr, Expr::binary(BinOp::Lt, var("double_value"), num(2.0)));
                }
                other => panic!("Expected And on the left, got {:?}", other),
            }
            assert_eq!(
                **right,
                Expr::binary(BinOp::Eq, var("boolean_value"), Expr::boolean(true))
            );
        }
        other => panic!("Expected And, got {:?}", other),
    }
}

#[test]
fn test_and_binds_loosest() {
    let expr = parse_str("integer_value == 1 and double_value > 2").unwrap();
    assert_eq!(
        expr,
        Expr::binary(
            BinOp::And,
            Expr::binary(BinOp::Eq, var("integer_value"), num(1.0)),
            Expr::binary(BinOp::Gt, var("double_value"), num(2.0)),
        )
    );
}

#[test]
fn test_equality_chain_is_left_associative() {
    let expr = parse_str("boolean_value == true != false").unwrap();
    assert_eq!(
        expr,
        Expr::binary(
            BinOp::Neq,
            Expr::binary(BinOp::Eq, var("boolean_value"), Expr::boolean(true)),
            Expr::boolean(false),
        )
    );
}

#[test]
fn test_relational_binds_tighter_than_equality() {
    let expr = parse_str("integer_value == double_value < 3").unwrap();
    assert_eq!(
        expr,
        Expr::binary(
            BinOp::Eq,
            var("integer_value"),
            Expr::binary(BinOp::Lt, var("double_value"), num(3.0)),
        )
    );
}

#[test]
fn test_parentheses_override_grouping() {
    let grouped = parse_str("integer_value == 1 and (double_value > 2 and string_value < 3)").unwrap();
    let flat = parse_str("integer_value == 1 and double_value > 2 and string_value < 3").unwrap();
    assert_ne!(grouped, flat);

    match &grouped {
        Expr::Binary {
            op: BinOp::And,
            left,
            right,
        } => {
            assert_eq!(left.operator(), Some(BinOp::Eq));
            assert_eq!(right.operator(), Some(BinOp::And));
        }
        other => panic!("Expected And, got {:?}", other),
    }
}

#[test]
fn test_parenthesised_and_under_equality() {
    let expr = parse_str("(boolean_value and true) == false").unwrap();
    assert_eq!(
        expr,
        Expr::binary(
            BinOp::Eq,
            Expr::binary(BinOp::And, var("boolean_value"), Expr::boolean(true)),
            Expr::boolean(false),
        )
    );
}

#[test]
fn test_redundant_parentheses() {
    assert_eq!(parse_str("((((integer_value))))").unwrap(), var("integer_value"));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_empty_tokens() {
    let tokens: Vec<Token> = Vec::new();
    assert_eq!(Parser::new(&tokens).parse(), Err(ParseError::EmptyInput));
}

#[test]
fn test_missing_closing_paren() {
    let err = parse_str("(integer_value > 5").unwrap_err();
    assert_eq!(
        err,
        ParseError::Syntax(SyntaxError::MissingClosingParen { found: None })
    );
    assert!(err.to_string().contains("expected closing parenthesis"));
}

#[test]
fn test_missing_closing_paren_before_other_token() {
    let err = parse_str("(integer_value > 5 5").unwrap_err();
    assert_eq!(
        err,
        ParseError::Syntax(SyntaxError::MissingClosingParen {
            found: Some((TokenKind::Number, 19)),
        })
    );
}

#[test]
fn test_unbalanced_closing_paren() {
    let err = parse_str("integer_value > 5)").unwrap_err();
    assert_eq!(
        err,
        ParseError::Syntax(SyntaxError::TrailingToken {
            kind: TokenKind::RParen,
            offset: 17,
        })
    );
    assert!(err.to_string().contains("unexpected token RParen"));
}

#[test]
fn test_trailing_tokens() {
    let err = parse_str("integer_value > 5 integer_value").unwrap_err();
    assert!(matches!(
        err,
        ParseError::Syntax(SyntaxError::TrailingToken {
            kind: TokenKind::Variable,
            ..
        })
    ));
}

#[test]
fn test_empty_parentheses() {
    let err = parse_str("()").unwrap_err();
    assert_eq!(
        err,
        ParseError::Syntax(SyntaxError::UnexpectedToken {
            kind: TokenKind::RParen,
            offset: 1,
        })
    );
}

#[test]
fn test_dangling_and() {
    assert_eq!(
        parse_str("boolean_value and").unwrap_err(),
        ParseError::Syntax(SyntaxError::UnexpectedEnd)
    );
    assert!(matches!(
        parse_str("and boolean_value").unwrap_err(),
        ParseError::Syntax(SyntaxError::UnexpectedToken {
            kind: TokenKind::And,
            offset: 0,
        })
    ));
}

#[test]
fn test_adjacent_operators() {
    let err = parse_str("integer_value > < 5").unwrap_err();
    assert!(err.to_string().starts_with("unexpected token Lt"));
}

// ============================================================================
// Token-level entry point
// ============================================================================

#[test]
fn test_parse_entry_never_fails_outward() {
    let tokens = tokenize("(integer_value").unwrap();
    let result = parse(&tokens);
    assert!(matches!(result, Validation::Invalid(ParseError::Syntax(_))));

    let tokens = tokenize("integer_value >= 10").unwrap();
    assert!(parse(&tokens).is_valid());
}

#[test]
fn test_parse_handcrafted_tokens() {
    let tokens = vec![
        Token::new(TokenKind::Variable, "anything.at.all", 0),
        Token::new(TokenKind::Lte, "<=", 16),
        Token::new(TokenKind::Number, "2.5", 19),
    ];
    assert_eq!(
        parse(&tokens).into_result().unwrap(),
        Expr::binary(BinOp::Lte, var("anything.at.all"), num(2.5))
    );
}

#[test]
fn test_invalid_number_token() {
    let tokens = vec![Token::new(TokenKind::Number, "1.2.3", 0)];
    assert_eq!(
        parse(&tokens).into_result().unwrap_err(),
        ParseError::Syntax(SyntaxError::InvalidNumber {
            text: "1.2.3".into(),
            offset: 0,
        })
    );
}
