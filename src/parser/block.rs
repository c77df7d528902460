//! Indentation driven block structure.
//!
//! A block is a run of lines that share the indentation of its first line.
//! Lines indented less than that end the block, lines indented more are an
//! error unless a nested body consumed them.

use crate::{
    ast::statements::{Block, FuncSignature, Stmt},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{parser::Parser, stmt::parse_stmt};

/// Anything that can be laid out one per line in an indented block.
pub trait BlockItem {
    /// Indentation of the nested body the item ends with, if any.
    fn nested_indent(&self) -> Option<usize> {
        None
    }
}

impl BlockItem for Stmt {
    fn nested_indent(&self) -> Option<usize> {
        self.trailing_block().map(|block| block.indent)
    }
}

impl BlockItem for FuncSignature {}

/// Skips everything that cannot start a statement line.
///
/// That is comments on a line of their own, bare line breaks, and the
/// indentation of blank lines.
pub fn skip_trivia(parser: &mut Parser) -> Result<(), Error> {
    loop {
        let skip = match parser.current_token_kind() {
            TokenKind::Comment | TokenKind::BlockComment | TokenKind::EndStatement => true,
            TokenKind::Indent => matches!(
                parser.peek_token_kind(),
                TokenKind::EndStatement | TokenKind::EOF
            ),
            _ => false,
        };

        if !skip {
            return Ok(());
        }

        parser.advance()?;
    }
}

/// Parses lines of `item` at one indentation level of at least `minimum_indent`.
///
/// Returns the items and the level they were found at. Stops, without
/// consuming anything, at the first line indented less than that level.
pub fn parse_indented<T: BlockItem>(
    parser: &mut Parser,
    minimum_indent: usize,
    item: fn(&mut Parser, usize) -> Result<T, Error>,
) -> Result<(Vec<T>, usize), Error> {
    skip_trivia(parser)?;

    let reference = parser.line_indent();
    if reference < minimum_indent {
        return Err(parser.error_here(ErrorImpl::BlockUnderIndented {
            minimum: minimum_indent,
            found: reference,
        }));
    }

    let mut items: Vec<T> = vec![];

    while parser.current_token_kind() != TokenKind::EOF {
        let level = parser.line_indent();

        if level < reference {
            break;
        }

        if level > reference {
            let closed_deeper = items
                .last()
                .and_then(|last| last.nested_indent())
                .is_some_and(|nested| nested > reference);

            return Err(parser.error_here(if closed_deeper {
                ErrorImpl::InconsistentDedent {
                    expected: reference,
                    found: level,
                }
            } else {
                ErrorImpl::UnexpectedIndent {
                    expected: reference,
                    found: level,
                }
            }));
        }

        if parser.current_token_kind() == TokenKind::Indent {
            parser.advance()?;
        }

        items.push(item(parser, reference)?);
        skip_trivia(parser)?;
    }

    Ok((items, reference))
}

/// Parses a block of statements indented by at least `minimum_indent`.
pub fn parse_block(parser: &mut Parser, minimum_indent: usize) -> Result<Block, Error> {
    let (statements, indent) = parse_indented(parser, minimum_indent, parse_stmt)?;
    Ok(Block { statements, indent })
}

/// Parses the body following a compound statement header at `indent`.
///
/// `header: statement` keeps the body on the header line. Otherwise the
/// header line ends and the body is the block indented below it.
pub fn parse_body(parser: &mut Parser, indent: usize) -> Result<Block, Error> {
    parser.expect(TokenKind::Colon)?;

    match parser.current_token_kind() {
        TokenKind::EndStatement | TokenKind::EOF => {
            if parser.current_token_kind() == TokenKind::EndStatement {
                parser.advance()?;
            }
            parse_block(parser, indent + 1)
        }
        _ => Ok(Block {
            statements: vec![parse_stmt(parser, indent)?],
            indent,
        }),
    }
}

/// Whether the next line continues the statement at `indent` with `keyword`.
///
/// Used for `elif`, `else` and the `while` closing a `do` loop. Call after
/// [`skip_trivia`].
pub fn at_clause(parser: &Parser, indent: usize, keyword: TokenKind) -> bool {
    match parser.current_token().indent() {
        Some(level) => level == indent && parser.peek_token_kind() == keyword,
        None => indent == 0 && parser.current_token_kind() == keyword,
    }
}

/// Consumes the indentation and keyword of a clause found by [`at_clause`].
pub fn eat_clause(parser: &mut Parser, keyword: TokenKind) -> Result<Token, Error> {
    if parser.current_token_kind() == TokenKind::Indent {
        parser.advance()?;
    }

    parser.expect(keyword)
}
