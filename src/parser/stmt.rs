use crate::{
    ast::{
        expressions::{Expr, VarExpr},
        statements::{
            CallStmt, ClassDecl, ConditionalBranch, DoWhileStmt, EnforceStmt, ExpressionStmt,
            ForInStmt, ForStmt, FuncDecl, FuncSignature, IfStmt, RaiseStmt, Stmt, TraitDecl,
            WhileStmt,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    parser::{
        expr::{parse_call, parse_expr, parse_led_chain},
        lookups::BindingPower,
    },
};

use super::{
    block::{at_clause, eat_clause, parse_body, parse_indented, skip_trivia},
    parser::Parser,
    types::{parse_param_list, parse_trait_list, parse_typename},
};

/// Parses one statement whose line is indented by `indent`.
pub fn parse_stmt(parser: &mut Parser, indent: usize) -> Result<Stmt, Error> {
    let token_kind = parser.current_token_kind();

    if token_kind == TokenKind::Identifier && parser.peek_token_kind() == TokenKind::OpenParen {
        return parse_call_stmt(parser, indent);
    }

    if let Some(stmt_fn) = parser.get_stmt_lookup().get(&token_kind).copied() {
        return stmt_fn(parser, indent);
    }

    let expression = parse_expr(parser, BindingPower::Default)?;
    expect_terminator(parser)?;

    Ok(Stmt::Expression(ExpressionStmt { expression }))
}

/// Consumes the line break ending a simple statement.
pub fn expect_terminator(parser: &mut Parser) -> Result<(), Error> {
    match parser.current_token_kind() {
        TokenKind::EndStatement => {
            parser.advance()?;
            Ok(())
        }
        TokenKind::EOF => Ok(()),
        _ => Err(parser.error_here(ErrorImpl::UnexpectedToken {
            token: parser.current_token().describe(),
            expected: String::from("end of statement"),
        })),
    }
}

/// `f(args)` or `f(args) in target`.
///
/// A call followed by an operator is an ordinary expression statement.
pub fn parse_call_stmt(parser: &mut Parser, _indent: usize) -> Result<Stmt, Error> {
    let name_token = parser.advance()?;
    let callee = Expr::Var(VarExpr {
        name: name_token.text().to_string(),
        token: name_token,
    });
    let call = parse_call(parser, callee)?;

    match parser.current_token_kind() {
        TokenKind::In => {
            parser.advance()?;
            let target = parse_expr(parser, BindingPower::Assignment)?;
            expect_terminator(parser)?;

            Ok(Stmt::Call(CallStmt {
                call,
                target: Some(target),
            }))
        }
        TokenKind::EndStatement | TokenKind::EOF => {
            expect_terminator(parser)?;
            Ok(Stmt::Call(CallStmt { call, target: None }))
        }
        _ => {
            let expression = parse_led_chain(parser, Expr::Call(call), BindingPower::Default)?;
            expect_terminator(parser)?;
            Ok(Stmt::Expression(ExpressionStmt { expression }))
        }
    }
}

pub fn parse_if_stmt(parser: &mut Parser, indent: usize) -> Result<Stmt, Error> {
    let if_token = parser.advance()?;
    let condition = parse_expr(parser, BindingPower::Assignment)?;
    let body = parse_body(parser, indent)?;

    let mut branches = vec![ConditionalBranch {
        condition,
        body,
        token: if_token.clone(),
    }];
    let mut else_body = None;

    loop {
        skip_trivia(parser)?;

        if at_clause(parser, indent, TokenKind::Elif) {
            let token = eat_clause(parser, TokenKind::Elif)?;
            let condition = parse_expr(parser, BindingPower::Assignment)?;
            let body = parse_body(parser, indent)?;
            branches.push(ConditionalBranch {
                condition,
                body,
                token,
            });
        } else if at_clause(parser, indent, TokenKind::Else) {
            eat_clause(parser, TokenKind::Else)?;
            else_body = Some(parse_body(parser, indent)?);
            break;
        } else {
            break;
        }
    }

    Ok(Stmt::If(IfStmt {
        branches,
        else_body,
        token: if_token,
    }))
}

pub fn parse_while_stmt(parser: &mut Parser, indent: usize) -> Result<Stmt, Error> {
    let token = parser.advance()?;
    let condition = parse_expr(parser, BindingPower::Assignment)?;
    let body = parse_body(parser, indent)?;

    Ok(Stmt::While(WhileStmt {
        condition,
        body,
        token,
    }))
}

/// `do:` body, then `while(condition)` on its own line at the same depth.
pub fn parse_do_while_stmt(parser: &mut Parser, indent: usize) -> Result<Stmt, Error> {
    let token = parser.advance()?;
    let body = parse_body(parser, indent)?;

    skip_trivia(parser)?;
    if !at_clause(parser, indent, TokenKind::While) {
        return Err(parser.error_here(ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().describe(),
            message: String::from("expected `while(condition)` closing the do loop"),
        }));
    }
    eat_clause(parser, TokenKind::While)?;

    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser, BindingPower::Assignment)?;
    parser.expect(TokenKind::CloseParen)?;
    expect_terminator(parser)?;

    Ok(Stmt::DoWhile(DoWhileStmt {
        body,
        condition,
        token,
    }))
}

fn parse_optional_expr(
    parser: &mut Parser,
    terminator: TokenKind,
    bp: BindingPower,
) -> Result<Option<Expr>, Error> {
    let expr = if parser.current_token_kind() == terminator {
        None
    } else {
        Some(parse_expr(parser, bp)?)
    };

    parser.expect(terminator)?;
    Ok(expr)
}

/// `for(init; condition; step):` or `for name in iterable:`.
pub fn parse_for_stmt(parser: &mut Parser, indent: usize) -> Result<Stmt, Error> {
    let token = parser.advance()?;

    if parser.current_token_kind() == TokenKind::OpenParen {
        parser.advance()?;
        let init = parse_optional_expr(parser, TokenKind::Semicolon, BindingPower::Default)?;
        let condition =
            parse_optional_expr(parser, TokenKind::Semicolon, BindingPower::Assignment)?;
        let step = parse_optional_expr(parser, TokenKind::CloseParen, BindingPower::Default)?;
        let body = parse_body(parser, indent)?;

        return Ok(Stmt::For(ForStmt {
            init,
            condition,
            step,
            body,
            token,
        }));
    }

    let error = parser.error_here(ErrorImpl::UnexpectedTokenDetailed {
        token: parser.current_token().describe(),
        message: String::from("expected `(` or a loop variable after for"),
    });
    let name_token = parser.expect_error(TokenKind::Identifier, Some(error))?;
    let variable = VarExpr {
        name: name_token.text().to_string(),
        token: name_token,
    };

    parser.expect(TokenKind::In)?;
    let iterable = parse_expr(parser, BindingPower::Assignment)?;
    let body = parse_body(parser, indent)?;

    Ok(Stmt::ForIn(ForInStmt {
        variable,
        iterable,
        body,
        token,
    }))
}

/// `enforce name as Typename = value`
pub fn parse_enforce_stmt(parser: &mut Parser, _indent: usize) -> Result<Stmt, Error> {
    let token = parser.advance()?;

    let name = parser.expect(TokenKind::Identifier)?.text().to_string();
    parser.expect(TokenKind::As)?;
    let typename = parse_typename(parser)?;
    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser, BindingPower::Assignment)?;
    expect_terminator(parser)?;

    Ok(Stmt::Enforce(EnforceStmt {
        name,
        value,
        typename,
        token,
    }))
}

pub fn parse_raise_stmt(parser: &mut Parser, _indent: usize) -> Result<Stmt, Error> {
    let token = parser.advance()?;
    let value = parse_expr(parser, BindingPower::Assignment)?;
    expect_terminator(parser)?;

    Ok(Stmt::Raise(RaiseStmt { value, token }))
}

/// `break`, `continue` and `pass`.
pub fn parse_jump_stmt(parser: &mut Parser, _indent: usize) -> Result<Stmt, Error> {
    let token = parser.advance()?;
    expect_terminator(parser)?;

    Ok(match token.kind {
        TokenKind::Break => Stmt::Break(token),
        TokenKind::Continue => Stmt::Continue(token),
        _ => Stmt::NoOp(token),
    })
}

/// `class Name [implement A, B]:` followed by the class body.
pub fn parse_class_decl_stmt(parser: &mut Parser, indent: usize) -> Result<Stmt, Error> {
    let token = parser.advance()?;
    let name = parser.expect(TokenKind::Identifier)?.text().to_string();

    let traits = if parser.current_token_kind() == TokenKind::Implement {
        parser.advance()?;
        parse_trait_list(parser)?
    } else {
        vec![]
    };

    let body = parse_body(parser, indent)?;

    Ok(Stmt::ClassDecl(ClassDecl {
        name,
        traits,
        body,
        token,
    }))
}

/// `trait Name [take A, B]:` followed by one method signature per line.
pub fn parse_trait_decl_stmt(parser: &mut Parser, indent: usize) -> Result<Stmt, Error> {
    let token = parser.advance()?;
    let name = parser.expect(TokenKind::Identifier)?.text().to_string();

    let traits = if parser.current_token_kind() == TokenKind::Take {
        parser.advance()?;
        parse_trait_list(parser)?
    } else {
        vec![]
    };

    parser.expect(TokenKind::Colon)?;

    let methods = match parser.current_token_kind() {
        TokenKind::EndStatement | TokenKind::EOF => {
            if parser.current_token_kind() == TokenKind::EndStatement {
                parser.advance()?;
            }
            parse_indented(parser, indent + 1, parse_signature_line)?.0
        }
        _ => vec![parse_signature_line(parser, indent)?],
    };

    Ok(Stmt::TraitDecl(TraitDecl {
        name,
        traits,
        methods,
        token,
    }))
}

fn parse_signature_line(parser: &mut Parser, _indent: usize) -> Result<FuncSignature, Error> {
    let function_token = parser.expect(TokenKind::Function)?;
    let signature = parse_signature(parser, function_token)?;
    expect_terminator(parser)?;

    Ok(signature)
}

/// `[ReturnType] name(params)`, after the `function` keyword.
///
/// The return type is present when the first name is not directly followed
/// by the parameter list.
fn parse_signature(parser: &mut Parser, token: Token) -> Result<FuncSignature, Error> {
    let return_type = if parser.peek_token_kind() == TokenKind::OpenParen {
        None
    } else {
        Some(parse_typename(parser)?)
    };

    let name = parser.expect(TokenKind::Identifier)?.text().to_string();

    parser.expect(TokenKind::OpenParen)?;
    let params = parse_param_list(parser, TokenKind::CloseParen)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(FuncSignature {
        name,
        return_type,
        params,
        token,
    })
}

/// `function [ReturnType] name(params) [capture a, b]:` followed by the body.
pub fn parse_fn_decl_stmt(parser: &mut Parser, indent: usize) -> Result<Stmt, Error> {
    let token = parser.advance()?;
    let signature = parse_signature(parser, token)?;

    let captures = if parser.current_token_kind() == TokenKind::Capture {
        parser.advance()?;
        parse_param_list(parser, TokenKind::Colon)?
    } else {
        vec![]
    };

    let body = parse_body(parser, indent)?;

    Ok(Stmt::FuncDecl(FuncDecl {
        signature,
        captures,
        body,
    }))
}
