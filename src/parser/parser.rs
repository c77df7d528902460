//! Parser state and the parsing entry point.
//!
//! The parser pulls tokens on demand from a [`TokenCursor`] and dispatches
//! through lookup tables for:
//! - Statement handlers, keyed by the keyword opening the statement
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix and postfix expressions
//! - Binding powers for operator precedence

use std::collections::HashMap;

use crate::{
    ast::statements::Block,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Scanner,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    block::parse_block,
    cursor::TokenCursor,
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Token source with one token of lookahead
    cursor: TokenCursor,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a parser with empty lookup tables.
    ///
    /// Primes the cursor, so a lexical error on the first two tokens is
    /// reported here.
    pub fn new(scanner: Scanner) -> Result<Self, Error> {
        Ok(Parser {
            cursor: TokenCursor::new(scanner)?,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        })
    }

    /// Creates a parser over `source` with every grammar rule registered.
    pub fn from_source(source: &str, file: Option<String>) -> Result<Self, Error> {
        let mut parser = Parser::new(Scanner::new(source, file))?;
        create_token_lookups(&mut parser);
        Ok(parser)
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.cursor.current()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.cursor.current().kind
    }

    /// Returns the token after the current one.
    pub fn peek_token(&self) -> &Token {
        self.cursor.peek()
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.cursor.peek().kind
    }

    /// Indentation of the line the current token opens.
    ///
    /// A line starting in column zero has no `Indent` token, so any other
    /// token counts as level 0.
    pub fn line_indent(&self) -> usize {
        self.current_token().indent().unwrap_or(0)
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Result<Token, Error> {
        self.cursor.advance()
    }

    /// Expects a token of the specified kind, with optional custom error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        match error {
            Some(error) if self.current_token_kind() != expected_kind => Err(error),
            _ => self.cursor.expect(expected_kind),
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Builds an error located at the current token.
    pub fn error_here(&self, error: ErrorImpl) -> Error {
        Error::new(error, self.get_position())
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// Leaves the binding power alone, since `-` and `++` also have an infix
    /// or postfix meaning.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }
}

/// Parses a whole program.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes all lookup tables and parses the root block, which must run
/// to the end of the input.
pub fn parse(source: &str, file: Option<String>) -> Result<Block, Error> {
    let mut parser = Parser::from_source(source, file)?;
    let block = parse_block(&mut parser, 0)?;

    if parser.current_token_kind() != TokenKind::EOF {
        return Err(parser.error_here(ErrorImpl::InconsistentDedent {
            expected: block.indent,
            found: parser.line_indent(),
        }));
    }

    Ok(block)
}
