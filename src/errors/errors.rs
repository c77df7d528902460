use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// The three failure classes of the front end.
///
/// Every error aborts the parse of the current unit, so the kind only tells
/// the caller which stage rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Indentation,
    Syntax,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "LexicalError"),
            ErrorKind::Indentation => write!(f, "IndentationError"),
            ErrorKind::Syntax => write!(f, "SyntaxError"),
        }
    }
}

#[derive(Error, Debug, Clone)]
#[error("{}: {internal_error} at {position}", .internal_error.kind())]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> ErrorKind {
        self.internal_error.kind()
    }

    pub fn get_internal(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::DanglingEscape => "DanglingEscape",
            ErrorImpl::InvalidEscape { .. } => "InvalidEscape",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::BlockUnderIndented { .. } => "BlockUnderIndented",
            ErrorImpl::UnexpectedIndent { .. } => "UnexpectedIndent",
            ErrorImpl::InconsistentDedent { .. } => "InconsistentDedent",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::ExpectedExpression { .. } => "ExpectedExpression",
            ErrorImpl::InvalidAssignmentTarget => "InvalidAssignmentTarget",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "String literals must be closed on the line they start",
            )),
            ErrorImpl::DanglingEscape => ErrorTip::Suggestion(String::from(
                "A backslash inside a string must be followed by a character",
            )),
            ErrorImpl::InvalidEscape { sequence } => {
                ErrorTip::Suggestion(format!("Invalid escape sequence `{}`", sequence))
            }
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("Missing `*/` to close the block comment"))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::BlockUnderIndented { minimum, found } => ErrorTip::Suggestion(format!(
                "Expected a block indented at least {} columns, found {}",
                minimum, found
            )),
            ErrorImpl::UnexpectedIndent { expected, found } => ErrorTip::Suggestion(format!(
                "Expected indentation of {} columns, found {}",
                expected, found
            )),
            ErrorImpl::InconsistentDedent { expected, found } => ErrorTip::Suggestion(format!(
                "Dedent to {} columns does not match the enclosing block at {}",
                found, expected
            )),
            ErrorImpl::UnexpectedToken { token, expected } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected {}",
                token, expected
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::ExpectedExpression { token } => {
                ErrorTip::Suggestion(format!("Expected an expression, found `{}`", token))
            }
            ErrorImpl::InvalidAssignmentTarget => {
                ErrorTip::Suggestion(String::from("Only variables can be assigned to"))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Lexical
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("backslash at end of line or input")]
    DanglingEscape,
    #[error("invalid escape sequence: {sequence:?}")]
    InvalidEscape { sequence: String },
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },

    // Indentation
    #[error("expected an indented block (minimum {minimum:?}, found {found:?})")]
    BlockUnderIndented { minimum: usize, found: usize },
    #[error("unexpected indent: expected {expected:?}, found {found:?}")]
    UnexpectedIndent { expected: usize, found: usize },
    #[error("dedent does not match any outer level: expected {expected:?}, found {found:?}")]
    InconsistentDedent { expected: usize, found: usize },

    // Syntax
    #[error("unexpected token {token:?}, expected {expected}")]
    UnexpectedToken { token: String, expected: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("expected expression, found {token:?}")]
    ExpectedExpression { token: String },
    #[error("invalid assignment target")]
    InvalidAssignmentTarget,
}

impl ErrorImpl {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorImpl::UnrecognisedCharacter { .. }
            | ErrorImpl::UnterminatedString
            | ErrorImpl::DanglingEscape
            | ErrorImpl::InvalidEscape { .. }
            | ErrorImpl::UnterminatedComment
            | ErrorImpl::NumberParseError { .. } => ErrorKind::Lexical,
            ErrorImpl::BlockUnderIndented { .. }
            | ErrorImpl::UnexpectedIndent { .. }
            | ErrorImpl::InconsistentDedent { .. } => ErrorKind::Indentation,
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnexpectedTokenDetailed { .. }
            | ErrorImpl::ExpectedExpression { .. }
            | ErrorImpl::InvalidAssignmentTarget => ErrorKind::Syntax,
        }
    }
}
