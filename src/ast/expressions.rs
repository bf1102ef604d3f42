use crate::ast::{BinOp, TokenKind};
use std::fmt;

/// Leaf value of an expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Numeric literal, always parsed as floating point
    ///
    /// # Example
    /// ```text
    /// 3.14159
    /// ```
    Number(f64),

    /// String literal, quotes stripped
    ///
    /// # Example
    /// ```text
    /// "hello world"
    /// ```
    String(String),

    /// Boolean literal
    Boolean(bool),

    /// Variable reference, carrying the name exactly as written
    ///
    /// # Example
    /// ```text
    /// integer_value
    /// ```
    Variable(String),
}

impl Literal {
    /// Token kind this literal was produced from.
    pub fn kind(&self) -> TokenKind {
        match self {
            Literal::Number(_) => TokenKind::Number,
            Literal::String(_) => TokenKind::String,
            Literal::Boolean(_) => TokenKind::Boolean,
            Literal::Variable(_) => TokenKind::Variable,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{}", n),
            Literal::String(s) => write!(f, "\"{}\"", s),
            Literal::Boolean(b) => write!(f, "{}", b),
            Literal::Variable(name) => f.write_str(name),
        }
    }
}

/// Abstract Syntax Tree node representing a parsed condition.
///
/// A tree produced by the parser is strictly binary: leaves are
/// [`Expr::Literal`] and internal nodes are [`Expr::Binary`].
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Constant or variable reference
    Literal(Literal),

    /// Binary operation (comparison or conjunction)
    ///
    /// # Examples
    /// ```text
    /// integer_value > 5
    /// boolean_value == true and double_value <= 2.5
    /// ```
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn number(n: f64) -> Self {
        Expr::Literal(Literal::Number(n))
    }

    pub fn string(s: impl Into<String>) -> Self {
        Expr::Literal(Literal::String(s.into()))
    }

    pub fn boolean(b: bool) -> Self {
        Expr::Literal(Literal::Boolean(b))
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Literal(Literal::Variable(name.into()))
    }

    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Expr::Literal(lit) => Some(lit),
            Expr::Binary { .. } => None,
        }
    }

    /// Operator at the root, `None` for a bare literal.
    pub fn operator(&self) -> Option<BinOp> {
        match self {
            Expr::Binary { op, .. } => Some(*op),
            Expr::Literal(_) => None,
        }
    }

    /// Height of the tree; a literal has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];

        while let Some((expr, level)) = stack.pop() {
            deepest = deepest.max(level);
            if let Expr::Binary { left, right, .. } = expr {
                stack.push((&**left, level + 1));
                stack.push((&**right, level + 1));
            }
        }
        deepest
    }

    /// Variable names in left-to-right order, duplicates included.
    pub fn variables(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut stack = vec![self];

        while let Some(expr) = stack.pop() {
            match expr {
                Expr::Literal(Literal::Variable(name)) => names.push(name.as_str()),
                Expr::Literal(_) => {}
                Expr::Binary { left, right, .. } => {
                    stack.push(&**right);
                    stack.push(&**left);
                }
            }
        }
        names
    }
}

/// Frees the tree with an explicit stack so that deep trees built by hand
/// do not overflow the call stack.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        take_children(self, &mut stack);

        while let Some(mut node) = stack.pop() {
            take_children(&mut node, &mut stack);
        }
    }
}

/// Moves binary children out of `expr`, leaving literal placeholders behind.
fn take_children(expr: &mut Expr, stack: &mut Vec<Expr>) {
    if let Expr::Binary { left, right, .. } = expr {
        for child in [left, right] {
            if matches!(**child, Expr::Binary { .. }) {
                stack.push(std::mem::replace(&mut **child, Expr::boolean(false)));
            }
        }
    }
}

/// Renders the expression fully parenthesised, in a form the parser accepts.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(lit) => write!(f, "{}", lit),
            Expr::Binary { op, left, right } => write!(f, "({} {} {})", left, op, right),
        }
    }
}
