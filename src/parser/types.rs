//! Type, trait and parameter parsing.
//!
//! Declarations name types and traits but never build them, so each of these
//! is a plain identifier wrapped with its token.

use crate::{
    ast::{
        expressions::VarExpr,
        statements::Param,
        types::{Trait, Typename},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::parser::Parser;

fn expect_name(parser: &mut Parser, what: &str) -> Result<Token, Error> {
    let error = parser.error_here(ErrorImpl::UnexpectedTokenDetailed {
        token: parser.current_token().describe(),
        message: format!("expected {}", what),
    });
    parser.expect_error(TokenKind::Identifier, Some(error))
}

pub fn parse_typename(parser: &mut Parser) -> Result<Typename, Error> {
    let token = expect_name(parser, "type name")?;
    Ok(Typename {
        name: token.text().to_string(),
        token,
    })
}

pub fn parse_trait(parser: &mut Parser) -> Result<Trait, Error> {
    let token = expect_name(parser, "trait name")?;
    Ok(Trait {
        name: token.text().to_string(),
        token,
    })
}

/// `A, B, C` after `implement` or `take`.
pub fn parse_trait_list(parser: &mut Parser) -> Result<Vec<Trait>, Error> {
    let mut traits = vec![parse_trait(parser)?];

    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance()?;
        traits.push(parse_trait(parser)?);
    }

    Ok(traits)
}

/// `name` or `name as A & B`.
pub fn parse_param(parser: &mut Parser) -> Result<Param, Error> {
    let token = expect_name(parser, "parameter name")?;
    let binding = VarExpr {
        name: token.text().to_string(),
        token,
    };

    let mut traits = vec![];
    if parser.current_token_kind() == TokenKind::As {
        parser.advance()?;
        traits.push(parse_trait(parser)?);

        while parser.current_token_kind() == TokenKind::Ampersand {
            parser.advance()?;
            traits.push(parse_trait(parser)?);
        }
    }

    Ok(Param { binding, traits })
}

/// Comma separated parameters, stopping before `terminator`.
pub fn parse_param_list(parser: &mut Parser, terminator: TokenKind) -> Result<Vec<Param>, Error> {
    let mut params = vec![];

    if parser.current_token_kind() == terminator {
        return Ok(params);
    }

    loop {
        params.push(parse_param(parser)?);

        if parser.current_token_kind() != TokenKind::Comma {
            return Ok(params);
        }
        parser.advance()?;
    }
}
