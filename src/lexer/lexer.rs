use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_SPAN, MK_TOKEN,
};

use super::{
    escapes::decode_escapes,
    tokens::{Token, TokenKind, TokenValue, OPERATOR_LOOKUP, RESERVED_LOOKUP},
};

/// On-demand scanner over a single source buffer.
///
/// Each call to [`Scanner::next_token`] produces exactly one token. The only
/// state kept between calls is the cursor position and whether the cursor
/// sits at the start of a physical line, which decides if a whitespace run is
/// reported as an `Indent` or silently skipped.
#[derive(Clone)]
pub struct Scanner {
    source: Vec<char>,
    pos: usize,
    start: usize,
    file: Rc<String>,
    at_line_start: bool,
}

impl Scanner {
    pub fn new(source: &str, file: Option<String>) -> Scanner {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Scanner {
            source: source.chars().collect(),
            pos: 0,
            start: 0,
            file: file_name,
            at_line_start: true,
        }
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Scans the next token.
    ///
    /// Once the source is exhausted every further call returns `EOF`.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        loop {
            self.start = self.pos;

            let Some(current) = self.at() else {
                return Ok(self.make(TokenKind::EOF, TokenValue::None));
            };

            let line_start = std::mem::take(&mut self.at_line_start);
            if line_start && is_blank(current) {
                return Ok(self.indentation());
            }

            return match current {
                '\n' => {
                    self.advance();
                    self.at_line_start = true;
                    Ok(self.make(TokenKind::EndStatement, TokenValue::None))
                }
                c if is_blank(c) => {
                    self.skip_blanks();
                    continue;
                }
                '\\' => {
                    self.continuation();
                    continue;
                }
                c if c.is_alphabetic() || c == '_' => Ok(self.symbol()),
                c if c.is_ascii_digit() => self.number(),
                '\'' | '"' => self.string(current),
                '/' if self.peek() == Some('/') => Ok(self.comment()),
                '/' if self.peek() == Some('*') => {
                    let token = self.block_comment()?;
                    // Blanks after a comment that opens a line are still its indentation
                    self.at_line_start = line_start;
                    Ok(token)
                }
                ',' => Ok(self.single(TokenKind::Comma, ",")),
                ':' => Ok(self.single(TokenKind::Colon, ":")),
                ';' => Ok(self.single(TokenKind::Semicolon, ";")),
                '(' => Ok(self.single(TokenKind::OpenParen, "(")),
                ')' => Ok(self.single(TokenKind::CloseParen, ")")),
                '[' => Ok(self.single(TokenKind::OpenBracket, "[")),
                ']' => Ok(self.single(TokenKind::CloseBracket, "]")),
                '{' => Ok(self.single(TokenKind::OpenCurly, "{")),
                '}' => Ok(self.single(TokenKind::CloseCurly, "}")),
                _ => self.operator(current),
            };
        }
    }

    fn at(&self) -> Option<char> {
        self.source.get(self.pos).copied()
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.pos + 1).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn make(&self, kind: TokenKind, value: TokenValue) -> Token {
        MK_TOKEN!(kind, value, MK_SPAN!(self.start, self.pos, self.file))
    }

    fn error(&self, error: ErrorImpl, offset: usize) -> Error {
        Error::new(error, Position(offset as u32, Rc::clone(&self.file)))
    }

    fn skip_blanks(&mut self) -> usize {
        let mut count = 0;
        while self.at().is_some_and(is_blank) {
            self.advance();
            count += 1;
        }
        count
    }

    fn indentation(&mut self) -> Token {
        let count = self.skip_blanks();
        self.make(TokenKind::Indent, TokenValue::Count(count))
    }

    /// Glues the current line to the next one.
    ///
    /// A backslash followed by a line break swallows the break and the next
    /// line's indentation. Anywhere else it is a no-op.
    fn continuation(&mut self) {
        self.advance();
        self.skip_blanks();

        if self.at() == Some('\n') {
            self.advance();
            self.skip_blanks();
        }
    }

    fn single(&mut self, kind: TokenKind, spelling: &'static str) -> Token {
        self.advance();
        self.make(kind, TokenValue::Spelling(spelling))
    }

    fn symbol(&mut self) -> Token {
        let mut word = String::new();
        while let Some(c) = self.at().filter(|c| c.is_alphanumeric() || *c == '_') {
            word.push(c);
            self.advance();
        }

        if let Some((spelling, kind)) = RESERVED_LOOKUP.get_key_value(word.as_str()) {
            self.make(*kind, TokenValue::Spelling(*spelling))
        } else {
            self.make(TokenKind::Identifier, TokenValue::Text(word))
        }
    }

    fn number(&mut self) -> Result<Token, Error> {
        let mut digits = self.digits();

        if self.at() == Some('.') && self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            digits.push('.');
            digits.push_str(&self.digits());

            return match digits.parse::<f64>() {
                Ok(value) => Ok(self.make(TokenKind::FloatLiteral, TokenValue::Float(value))),
                Err(_) => Err(self.error(ErrorImpl::NumberParseError { token: digits }, self.start)),
            };
        }

        match digits.parse::<i64>() {
            Ok(value) => Ok(self.make(TokenKind::IntLiteral, TokenValue::Integer(value))),
            Err(_) => Err(self.error(ErrorImpl::NumberParseError { token: digits }, self.start)),
        }
    }

    fn digits(&mut self) -> String {
        let mut digits = String::new();
        while let Some(c) = self.at().filter(|c| c.is_ascii_digit()) {
            digits.push(c);
            self.advance();
        }
        digits
    }

    fn string(&mut self, quote: char) -> Result<Token, Error> {
        self.advance();

        // Backslash pairs stay raw until the escape pass below
        let mut raw = String::new();
        loop {
            match self.at() {
                None | Some('\n') => {
                    return Err(self.error(ErrorImpl::UnterminatedString, self.pos));
                }
                Some(c) if c == quote => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    raw.push('\\');
                    self.advance();
                    match self.at() {
                        None | Some('\n') => {
                            return Err(self.error(ErrorImpl::DanglingEscape, self.pos));
                        }
                        Some(c) => {
                            raw.push(c);
                            self.advance();
                        }
                    }
                }
                Some(c) => {
                    raw.push(c);
                    self.advance();
                }
            }
        }

        let value = decode_escapes(&raw).map_err(|error| self.error(error, self.start))?;
        Ok(self.make(TokenKind::StrLiteral, TokenValue::Text(value)))
    }

    fn comment(&mut self) -> Token {
        self.pos += 2;

        let mut body = String::new();
        while let Some(c) = self.at().filter(|c| *c != '\n') {
            body.push(c);
            self.advance();
        }

        self.make(TokenKind::Comment, TokenValue::Text(body))
    }

    fn block_comment(&mut self) -> Result<Token, Error> {
        self.pos += 2;

        let mut body = String::new();
        loop {
            match self.at() {
                None => return Err(self.error(ErrorImpl::UnterminatedComment, self.start)),
                Some('*') if self.peek() == Some('/') => {
                    self.pos += 2;
                    break;
                }
                Some(c) => {
                    body.push(c);
                    self.advance();
                }
            }
        }

        Ok(self.make(TokenKind::BlockComment, TokenValue::Text(body)))
    }

    fn operator(&mut self, current: char) -> Result<Token, Error> {
        if let Some(next) = self.peek() {
            let pair: String = [current, next].iter().collect();
            if let Some((spelling, kind)) = OPERATOR_LOOKUP.get_key_value(pair.as_str()) {
                self.pos += 2;
                return Ok(self.make(*kind, TokenValue::Spelling(*spelling)));
            }
        }

        let single = current.to_string();
        if let Some((spelling, kind)) = OPERATOR_LOOKUP.get_key_value(single.as_str()) {
            self.advance();
            return Ok(self.make(*kind, TokenValue::Spelling(*spelling)));
        }

        Err(self.error(
            ErrorImpl::UnrecognisedCharacter { character: current },
            self.pos,
        ))
    }
}

fn is_blank(c: char) -> bool {
    c.is_whitespace() && c != '\n'
}

/// Scans `source` to completion.
///
/// The returned stream always ends with exactly one `EOF` token.
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut scanner = Scanner::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = scanner.next_token()?;
        let finished = token.kind == TokenKind::EOF;
        tokens.push(token);

        if finished {
            return Ok(tokens);
        }
    }
}
