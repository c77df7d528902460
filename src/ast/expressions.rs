use std::fmt::Display;

use crate::lexer::tokens::{Token, TokenKind};

use super::ast::Node;

// LITERALS

/// Value of a literal expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Integer(i64),
    Float(f64),
    String(String),
}

impl Literal {
    /// The token kind the literal was scanned as.
    pub fn kind(&self) -> TokenKind {
        match self {
            Literal::Integer(_) => TokenKind::IntLiteral,
            Literal::Float(_) => TokenKind::FloatLiteral,
            Literal::String(_) => TokenKind::StrLiteral,
        }
    }
}

/// Literal Expression
/// Represents an integer, float or string literal.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: Literal,
    pub token: Token,
}

/// Var Expression
/// Represents a reference to a named variable or function.
#[derive(Debug, Clone, PartialEq)]
pub struct VarExpr {
    pub name: String,
    pub token: Token,
}

// OPERATORS

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixity {
    Prefix,
    Postfix,
}

/// Unary Expression
/// `-x`, `!x`, `~x`, `++x`, `--x`, `x++` and `x--`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: TokenKind,
    pub fixity: Fixity,
    pub operand: Box<Expr>,
    pub token: Token,
}

/// Binary Expression
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: TokenKind,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub token: Token,
}

/// Ternary Expression
/// `condition ? then_expr : else_expr`
#[derive(Debug, Clone, PartialEq)]
pub struct TernaryExpr {
    pub condition: Box<Expr>,
    pub then_expr: Box<Expr>,
    pub else_expr: Box<Expr>,
    pub token: Token,
}

/// Assignment Expression
/// Plain `=` as well as every compound assignment operator.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignExpr {
    pub operator: TokenKind,
    pub target: VarExpr,
    pub value: Box<Expr>,
    pub token: Token,
}

/// Call Expression
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralExpr),
    Var(VarExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Ternary(TernaryExpr),
    Assign(AssignExpr),
    Call(CallExpr),
}

impl Node for Expr {
    fn token(&self) -> &Token {
        match self {
            Expr::Literal(expr) => &expr.token,
            Expr::Var(expr) => &expr.token,
            Expr::Unary(expr) => &expr.token,
            Expr::Binary(expr) => &expr.token,
            Expr::Ternary(expr) => &expr.token,
            Expr::Assign(expr) => &expr.token,
            Expr::Call(expr) => &expr.token,
        }
    }
}

impl Node for VarExpr {
    fn token(&self) -> &Token {
        &self.token
    }
}

impl Node for CallExpr {
    fn token(&self) -> &Token {
        &self.token
    }
}

/// Renders the expression fully parenthesised, operator first.
///
/// `a + b * c` displays as `(+ a (* b c))`.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Literal(expr) => match &expr.value {
                Literal::Integer(value) => write!(f, "{}", value),
                Literal::Float(value) => write!(f, "{:?}", value),
                Literal::String(value) => write!(f, "{:?}", value),
            },
            Expr::Var(expr) => write!(f, "{}", expr.name),
            Expr::Unary(expr) => match expr.fixity {
                Fixity::Prefix => write!(f, "({} {})", expr.token.text(), expr.operand),
                Fixity::Postfix => write!(f, "({} {})", expr.operand, expr.token.text()),
            },
            Expr::Binary(expr) => {
                write!(f, "({} {} {})", expr.token.text(), expr.left, expr.right)
            }
            Expr::Ternary(expr) => write!(
                f,
                "(? {} {} {})",
                expr.condition, expr.then_expr, expr.else_expr
            ),
            Expr::Assign(expr) => {
                write!(f, "({} {} {})", expr.token.text(), expr.target.name, expr.value)
            }
            Expr::Call(expr) => {
                write!(f, "(call {}", expr.callee)?;
                for argument in &expr.arguments {
                    write!(f, " {}", argument)?;
                }
                write!(f, ")")
            }
        }
    }
}
