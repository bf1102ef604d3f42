use crate::ast::TokenKind;
use std::fmt;

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    // Logical
    /// Logical AND (`and`)
    And,

    // Equality
    /// Equal (`==`)
    Eq,
    /// Not equal (`!=`)
    Neq,

    // Relational
    /// Less than (`<`)
    Lt,
    /// Less than or equal (`<=`)
    Lte,
    /// Greater than (`>`)
    Gt,
    /// Greater than or equal (`>=`)
    Gte,
}

impl BinOp {
    /// Maps an operator token to its operator, `None` for non-operator kinds.
    pub fn from_token_kind(kind: TokenKind) -> Option<BinOp> {
        match kind {
            TokenKind::And => Some(BinOp::And),
            TokenKind::Eq => Some(BinOp::Eq),
            TokenKind::Neq => Some(BinOp::Neq),
            TokenKind::Lt => Some(BinOp::Lt),
            TokenKind::Lte => Some(BinOp::Lte),
            TokenKind::Gt => Some(BinOp::Gt),
            TokenKind::Gte => Some(BinOp::Gte),
            _ => None,
        }
    }

    pub fn token_kind(&self) -> TokenKind {
        match self {
            BinOp::And => TokenKind::And,
            BinOp::Eq => TokenKind::Eq,
            BinOp::Neq => TokenKind::Neq,
            BinOp::Lt => TokenKind::Lt,
            BinOp::Lte => TokenKind::Lte,
            BinOp::Gt => TokenKind::Gt,
            BinOp::Gte => TokenKind::Gte,
        }
    }

    /// Source spelling of the operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            BinOp::And => "and",
            BinOp::Eq => "==",
            BinOp::Neq => "!=",
            BinOp::Lt => "<",
            BinOp::Lte => "<=",
            BinOp::Gt => ">",
            BinOp::Gte => ">=",
        }
    }

    pub fn is_equality(&self) -> bool {
        matches!(self, BinOp::Eq | BinOp::Neq)
    }

    pub fn is_relational(&self) -> bool {
        matches!(self, BinOp::Lt | BinOp::Lte | BinOp::Gt | BinOp::Gte)
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
