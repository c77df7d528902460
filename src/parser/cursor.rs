//! One-token-lookahead stream over the scanner.
//!
//! The parser reads tokens only through [`TokenCursor`]. Tokens are pulled
//! from the scanner lazily, one ahead of the current token.

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Scanner,
        tokens::{Token, TokenKind},
    },
};

pub struct TokenCursor {
    scanner: Scanner,
    current: Token,
    next: Token,
    last_kind: Option<TokenKind>,
}

impl TokenCursor {
    pub fn new(mut scanner: Scanner) -> Result<TokenCursor, Error> {
        let mut last_kind = None;
        let current = pull(&mut scanner, &mut last_kind)?;
        let next = pull(&mut scanner, &mut last_kind)?;

        Ok(TokenCursor {
            scanner,
            current,
            next,
            last_kind,
        })
    }

    pub fn current(&self) -> &Token {
        &self.current
    }

    pub fn peek(&self) -> &Token {
        &self.next
    }

    /// Moves one token forward and returns the token that was current.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let incoming = pull(&mut self.scanner, &mut self.last_kind)?;
        let next = std::mem::replace(&mut self.next, incoming);
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consumes the current token if it has the expected kind.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: self.current.describe(),
                    expected: expected_kind.to_string(),
                },
                self.current.span.start.clone(),
            ));
        }

        self.advance()
    }
}

/// Pulls the next token the grammar can see.
///
/// A comment is kept only when it opens a physical line; one that trails
/// code on the same line is dropped here. A block comment that opens a line
/// may be followed by an `Indent` carrying the depth of the code after it.
fn pull(scanner: &mut Scanner, last_kind: &mut Option<TokenKind>) -> Result<Token, Error> {
    loop {
        let token = scanner.next_token()?;
        let at_line_start = matches!(last_kind, None | Some(TokenKind::EndStatement));

        if token.kind.is_comment() && !at_line_start {
            continue;
        }

        *last_kind = Some(token.kind);
        return Ok(token);
    }
}
