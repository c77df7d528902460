use std::collections::HashMap;

use crate::{
    ast::{expressions::Expr, statements::Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator strength, weakest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Assignment,
    Ternary,
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    Relational,
    Shift,
    Additive,
    Multiplicative,
    Exponent,
    Unary,
    Postfix,
    Call,
    Primary,
}

impl BindingPower {
    /// The next weaker binding power.
    ///
    /// Right-associative operators parse their right operand at this level so
    /// that an operator of the same strength nests to the right.
    pub fn weaker(self) -> BindingPower {
        match self {
            BindingPower::Default | BindingPower::Assignment => BindingPower::Default,
            BindingPower::Ternary => BindingPower::Assignment,
            BindingPower::LogicalOr => BindingPower::Ternary,
            BindingPower::LogicalAnd => BindingPower::LogicalOr,
            BindingPower::BitwiseOr => BindingPower::LogicalAnd,
            BindingPower::BitwiseXor => BindingPower::BitwiseOr,
            BindingPower::BitwiseAnd => BindingPower::BitwiseXor,
            BindingPower::Equality => BindingPower::BitwiseAnd,
            BindingPower::Relational => BindingPower::Equality,
            BindingPower::Shift => BindingPower::Relational,
            BindingPower::Additive => BindingPower::Shift,
            BindingPower::Multiplicative => BindingPower::Additive,
            BindingPower::Exponent => BindingPower::Multiplicative,
            BindingPower::Unary => BindingPower::Exponent,
            BindingPower::Postfix => BindingPower::Unary,
            BindingPower::Call => BindingPower::Postfix,
            BindingPower::Primary => BindingPower::Call,
        }
    }
}

pub type StmtHandler = fn(&mut Parser, usize) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Assignment
    parser.led(TokenKind::Assignment, BindingPower::Assignment, parse_assignment_expr);
    parser.led(TokenKind::PlusEquals, BindingPower::Assignment, parse_assignment_expr);
    parser.led(TokenKind::MinusEquals, BindingPower::Assignment, parse_assignment_expr);
    parser.led(TokenKind::StarEquals, BindingPower::Assignment, parse_assignment_expr);
    parser.led(TokenKind::SlashEquals, BindingPower::Assignment, parse_assignment_expr);
    parser.led(TokenKind::PercentEquals, BindingPower::Assignment, parse_assignment_expr);
    parser.led(TokenKind::CaretEquals, BindingPower::Assignment, parse_assignment_expr);
    parser.led(TokenKind::AmpersandEquals, BindingPower::Assignment, parse_assignment_expr);
    parser.led(TokenKind::PipeEquals, BindingPower::Assignment, parse_assignment_expr);

    parser.led(TokenKind::Question, BindingPower::Ternary, parse_ternary_expr);

    // Logical
    parser.led(TokenKind::Or, BindingPower::LogicalOr, parse_binary_expr);
    parser.led(TokenKind::And, BindingPower::LogicalAnd, parse_binary_expr);

    // Bitwise
    parser.led(TokenKind::Pipe, BindingPower::BitwiseOr, parse_binary_expr);
    parser.led(TokenKind::Xor, BindingPower::BitwiseXor, parse_binary_expr);
    parser.led(TokenKind::Ampersand, BindingPower::BitwiseAnd, parse_binary_expr);

    // Equality and relational
    parser.led(TokenKind::Equals, BindingPower::Equality, parse_binary_expr);
    parser.led(TokenKind::NotEquals, BindingPower::Equality, parse_binary_expr);
    parser.led(TokenKind::Less, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::LessEquals, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::Greater, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::GreaterEquals, BindingPower::Relational, parse_binary_expr);

    parser.led(TokenKind::ShiftLeft, BindingPower::Shift, parse_binary_expr);
    parser.led(TokenKind::ShiftRight, BindingPower::Shift, parse_binary_expr);

    // Additive, multiplicative and exponent
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Dash, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Star, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Percent, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Caret, BindingPower::Exponent, parse_exponent_expr);

    parser.led(TokenKind::PlusPlus, BindingPower::Postfix, parse_postfix_expr);
    parser.led(TokenKind::MinusMinus, BindingPower::Postfix, parse_postfix_expr);

    parser.led(TokenKind::OpenParen, BindingPower::Call, parse_call_expr);

    // Literals and symbols
    parser.nud(TokenKind::IntLiteral, parse_primary_expr);
    parser.nud(TokenKind::FloatLiteral, parse_primary_expr);
    parser.nud(TokenKind::StrLiteral, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_primary_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);

    // Prefix
    parser.nud(TokenKind::Dash, parse_prefix_expr);
    parser.nud(TokenKind::Not, parse_prefix_expr);
    parser.nud(TokenKind::Tilde, parse_prefix_expr);
    parser.nud(TokenKind::PlusPlus, parse_prefix_expr);
    parser.nud(TokenKind::MinusMinus, parse_prefix_expr);

    // Statements
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::For, parse_for_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
    parser.stmt(TokenKind::Do, parse_do_while_stmt);
    parser.stmt(TokenKind::Enforce, parse_enforce_stmt);
    parser.stmt(TokenKind::Raise, parse_raise_stmt);
    parser.stmt(TokenKind::Class, parse_class_decl_stmt);
    parser.stmt(TokenKind::Trait, parse_trait_decl_stmt);
    parser.stmt(TokenKind::Function, parse_fn_decl_stmt);
    parser.stmt(TokenKind::Break, parse_jump_stmt);
    parser.stmt(TokenKind::Continue, parse_jump_stmt);
    parser.stmt(TokenKind::Pass, parse_jump_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
