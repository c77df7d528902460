use std::slice::Iter;

use crate::lexer::tokens::Token;

use super::{
    ast::Node,
    expressions::{CallExpr, Expr, VarExpr},
    types::{Trait, Typename},
};

/// An ordered run of statements sharing one indentation depth.
///
/// An inline body (`if x: y = 1`) is a one-statement block at the depth of
/// its header.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Stmt>,
    pub indent: usize,
}

impl Block {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// A bare expression or assignment on a line of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
}

/// `f(a, b)` or `f(a, b) in target`.
#[derive(Debug, Clone, PartialEq)]
pub struct CallStmt {
    pub call: CallExpr,
    pub target: Option<Expr>,
}

/// `enforce name as Typename = value`
#[derive(Debug, Clone, PartialEq)]
pub struct EnforceStmt {
    pub name: String,
    pub value: Expr,
    pub typename: Typename,
    pub token: Token,
}

/// `raise value`
#[derive(Debug, Clone, PartialEq)]
pub struct RaiseStmt {
    pub value: Expr,
    pub token: Token,
}

/// One `if` or `elif` arm.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalBranch {
    pub condition: Expr,
    pub body: Block,
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub branches: Vec<ConditionalBranch>,
    pub else_body: Option<Block>,
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Block,
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoWhileStmt {
    pub body: Block,
    pub condition: Expr,
    pub token: Token,
}

/// `for(init; condition; step)`, every part optional.
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub init: Option<Expr>,
    pub condition: Option<Expr>,
    pub step: Option<Expr>,
    pub body: Block,
    pub token: Token,
}

/// `for variable in iterable`
#[derive(Debug, Clone, PartialEq)]
pub struct ForInStmt {
    pub variable: VarExpr,
    pub iterable: Expr,
    pub body: Block,
    pub token: Token,
}

/// A parameter or captured name, with the traits it is required to provide.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub binding: VarExpr,
    pub traits: Vec<Trait>,
}

/// `function [ReturnType] name(params)`, shared by declarations and trait
/// method requirements.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncSignature {
    pub name: String,
    pub return_type: Option<Typename>,
    pub params: Vec<Param>,
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub signature: FuncSignature,
    pub captures: Vec<Param>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub name: String,
    pub traits: Vec<Trait>,
    pub body: Block,
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TraitDecl {
    pub name: String,
    pub traits: Vec<Trait>,
    pub methods: Vec<FuncSignature>,
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression(ExpressionStmt),
    Call(CallStmt),
    Enforce(EnforceStmt),
    Raise(RaiseStmt),
    If(IfStmt),
    While(WhileStmt),
    DoWhile(DoWhileStmt),
    For(ForStmt),
    ForIn(ForInStmt),
    FuncDecl(FuncDecl),
    ClassDecl(ClassDecl),
    TraitDecl(TraitDecl),
    Break(Token),
    Continue(Token),
    /// `pass`
    NoOp(Token),
}

impl Stmt {
    /// The body closing the statement, when the statement ends in one.
    ///
    /// `do ... while(cond)` ends in its condition line, so it has none.
    pub fn trailing_block(&self) -> Option<&Block> {
        match self {
            Stmt::If(stmt) => stmt
                .else_body
                .as_ref()
                .or_else(|| stmt.branches.last().map(|branch| &branch.body)),
            Stmt::While(stmt) => Some(&stmt.body),
            Stmt::For(stmt) => Some(&stmt.body),
            Stmt::ForIn(stmt) => Some(&stmt.body),
            Stmt::FuncDecl(stmt) => Some(&stmt.body),
            Stmt::ClassDecl(stmt) => Some(&stmt.body),
            _ => None,
        }
    }
}

impl Node for Stmt {
    fn token(&self) -> &Token {
        match self {
            Stmt::Expression(stmt) => stmt.expression.token(),
            Stmt::Call(stmt) => &stmt.call.token,
            Stmt::Enforce(stmt) => &stmt.token,
            Stmt::Raise(stmt) => &stmt.token,
            Stmt::If(stmt) => &stmt.token,
            Stmt::While(stmt) => &stmt.token,
            Stmt::DoWhile(stmt) => &stmt.token,
            Stmt::For(stmt) => &stmt.token,
            Stmt::ForIn(stmt) => &stmt.token,
            Stmt::FuncDecl(stmt) => &stmt.signature.token,
            Stmt::ClassDecl(stmt) => &stmt.token,
            Stmt::TraitDecl(stmt) => &stmt.token,
            Stmt::Break(token) | Stmt::Continue(token) | Stmt::NoOp(token) => token,
        }
    }
}
