//! JSON rendering of expression trees, token streams and validation results.
//!
//! Nodes use the tagged shape hosts expect from a validation endpoint:
//!
//! ```text
//! {"type": "Literal", "kind": "Number", "value": 5.0}
//! {"type": "BinaryExpression", "operator": "Gt", "left": {...}, "right": {...}}
//! ```
//!
//! A validation result renders as `{"valid": true, "ast": ...}` or
//! `{"valid": false, "error": "..."}`.
//!
//! # Examples
//!
//! ```
//! use cond_expr::parse_expression;
//! use cond_expr::output::to_json;
//!
//! let ast = parse_expression("double_value > 2.5").into_result().unwrap();
//! assert_eq!(
//!     to_json(&ast),
//!     r#"{"left":{"kind":"Variable","type":"Literal","value":"double_value"},"operator":"Gt","right":{"kind":"Number","type":"Literal","value":2.5},"type":"BinaryExpression"}"#
//! );
//! ```

use crate::{
    ast::{Expr, Literal, Token},
    validate::Validation,
};
use serde_json::{Value, json};

fn literal_value(lit: &Literal) -> Value {
    match lit {
        // Non-finite numbers have no JSON form
        Literal::Number(n) => serde_json::Number::from_f64(*n)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Literal::String(s) => Value::String(s.clone()),
        Literal::Boolean(b) => Value::Bool(*b),
        Literal::Variable(name) => Value::String(name.clone()),
    }
}

/// Converts an expression tree to a JSON value.
pub fn expr_to_value(expr: &Expr) -> Value {
    match expr {
        Expr::Literal(lit) => json!({
            "type": "Literal",
            "kind": lit.kind().name(),
            "value": literal_value(lit),
        }),
        Expr::Binary { op, left, right } => json!({
            "type": "BinaryExpression",
            "operator": op.token_kind().name(),
            "left": expr_to_value(left),
            "right": expr_to_value(right),
        }),
    }
}

pub fn tokens_to_value(tokens: &[Token]) -> Value {
    Value::Array(
        tokens
            .iter()
            .map(|t| {
                json!({
                    "kind": t.kind.name(),
                    "text": t.text,
                    "offset": t.offset,
                })
            })
            .collect(),
    )
}

pub fn validation_to_value(validation: &Validation) -> Value {
    match validation {
        Validation::Valid(expr) => json!({
            "valid": true,
            "ast": expr_to_value(expr),
        }),
        Validation::Invalid(e) => json!({
            "valid": false,
            "error": e.to_string(),
            "code": e.code(),
        }),
    }
}

/// Compact JSON for an expression tree.
pub fn to_json(expr: &Expr) -> String {
    expr_to_value(expr).to_string()
}

/// Pretty-printed JSON (2-space indentation) for an expression tree.
pub fn to_json_pretty(expr: &Expr) -> String {
    render(&expr_to_value(expr), true)
}

/// Renders a JSON value compactly or with indentation.
pub fn render(value: &Value, pretty: bool) -> String {
    if pretty {
        format!("{:#}", value)
    } else {
        value.to_string()
    }
}
