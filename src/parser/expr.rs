use crate::{
    ast::expressions::{
        AssignExpr, BinaryExpr, CallExpr, Expr, Fixity, Literal, LiteralExpr, TernaryExpr,
        UnaryExpr, VarExpr,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{TokenKind, TokenValue},
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(parser.error_here(ErrorImpl::ExpectedExpression {
            token: parser.current_token().describe(),
        }));
    };

    let left = nud_fn(parser)?;
    parse_led_chain(parser, left, bp)
}

/// Keeps extending `left` while the current token binds tighter than `bp`.
pub fn parse_led_chain(parser: &mut Parser, mut left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    loop {
        let token_kind = parser.current_token_kind();
        let Some(token_bp) = parser.get_bp_lookup().get(&token_kind).copied() else {
            return Ok(left);
        };

        if token_bp <= bp {
            return Ok(left);
        }

        let Some(led_fn) = parser.get_led_lookup().get(&token_kind).copied() else {
            return Ok(left);
        };

        left = led_fn(parser, left, token_bp)?;
    }
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance()?;

    if token.kind == TokenKind::Identifier {
        return Ok(Expr::Var(VarExpr {
            name: token.text().to_string(),
            token,
        }));
    }

    let value = match (token.kind, &token.value) {
        (TokenKind::IntLiteral, TokenValue::Integer(value)) => Literal::Integer(*value),
        (TokenKind::FloatLiteral, TokenValue::Float(value)) => Literal::Float(*value),
        (TokenKind::StrLiteral, TokenValue::Text(value)) => Literal::String(value.clone()),
        _ => {
            return Err(Error::new(
                ErrorImpl::ExpectedExpression {
                    token: token.describe(),
                },
                token.span.start.clone(),
            ));
        }
    };

    Ok(Expr::Literal(LiteralExpr { value, token }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance()?;
    let operand = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Unary(UnaryExpr {
        operator: operator_token.kind,
        fixity: Fixity::Prefix,
        operand: Box::new(operand),
        token: operator_token,
    }))
}

pub fn parse_postfix_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance()?;

    Ok(Expr::Unary(UnaryExpr {
        operator: operator_token.kind,
        fixity: Fixity::Postfix,
        operand: Box::new(left),
        token: operator_token,
    }))
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance()?;
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        operator: operator_token.kind,
        left: Box::new(left),
        right: Box::new(right),
        token: operator_token,
    }))
}

/// `^` groups to the right: `a ^ b ^ c` is `a ^ (b ^ c)`.
pub fn parse_exponent_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance()?;
    let right = parse_expr(parser, bp.weaker())?;

    Ok(Expr::Binary(BinaryExpr {
        operator: operator_token.kind,
        left: Box::new(left),
        right: Box::new(right),
        token: operator_token,
    }))
}

pub fn parse_assignment_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance()?;

    let Expr::Var(target) = left else {
        return Err(Error::new(
            ErrorImpl::InvalidAssignmentTarget,
            operator_token.span.start.clone(),
        ));
    };

    let value = parse_expr(parser, bp.weaker())?;

    Ok(Expr::Assign(AssignExpr {
        operator: operator_token.kind,
        target,
        value: Box::new(value),
        token: operator_token,
    }))
}

pub fn parse_ternary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let question_token = parser.advance()?;
    let then_expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Colon)?;
    let else_expr = parse_expr(parser, bp.weaker())?;

    Ok(Expr::Ternary(TernaryExpr {
        condition: Box::new(left),
        then_expr: Box::new(then_expr),
        else_expr: Box::new(else_expr),
        token: question_token,
    }))
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    Ok(Expr::Call(parse_call(parser, left)?))
}

/// Parses the parenthesised argument list applied to `callee`.
pub fn parse_call(parser: &mut Parser, callee: Expr) -> Result<CallExpr, Error> {
    let open_token = parser.expect(TokenKind::OpenParen)?;
    let mut arguments = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            arguments.push(parse_expr(parser, BindingPower::Assignment)?);

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance()?;
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(CallExpr {
        callee: Box::new(callee),
        arguments,
        token: open_token,
    })
}
