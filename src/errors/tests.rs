//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn at(offset: u32) -> Position {
    Position(offset, Rc::new("test.tc".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::UnrecognisedCharacter { character: '@' }, at(10));

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert_eq!(error.get_kind(), ErrorKind::Lexical);
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "x".to_string(),
            expected: "Colon".to_string(),
        },
        at(42),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_lexical_kinds() {
    for internal in [
        ErrorImpl::UnterminatedString,
        ErrorImpl::DanglingEscape,
        ErrorImpl::UnterminatedComment,
        ErrorImpl::InvalidEscape {
            sequence: "\\xZZ".to_string(),
        },
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
    ] {
        assert_eq!(Error::new(internal, at(0)).get_kind(), ErrorKind::Lexical);
    }
}

#[test]
fn test_indentation_kinds() {
    let under = Error::new(ErrorImpl::BlockUnderIndented { minimum: 4, found: 2 }, at(0));
    let unexpected = Error::new(ErrorImpl::UnexpectedIndent { expected: 2, found: 4 }, at(0));
    let dedent = Error::new(ErrorImpl::InconsistentDedent { expected: 0, found: 2 }, at(0));

    assert_eq!(under.get_kind(), ErrorKind::Indentation);
    assert_eq!(unexpected.get_kind(), ErrorKind::Indentation);
    assert_eq!(dedent.get_kind(), ErrorKind::Indentation);
    assert_eq!(dedent.get_error_name(), "InconsistentDedent");
}

#[test]
fn test_syntax_kinds() {
    let error = Error::new(
        ErrorImpl::ExpectedExpression {
            token: "else".to_string(),
        },
        at(0),
    );
    assert_eq!(error.get_kind(), ErrorKind::Syntax);

    let error = Error::new(ErrorImpl::InvalidAssignmentTarget, at(0));
    assert_eq!(error.get_kind(), ErrorKind::Syntax);
    assert_eq!(error.get_error_name(), "InvalidAssignmentTarget");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::UnrecognisedCharacter { character: '@' }, at(0));

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(ErrorImpl::UnexpectedIndent { expected: 2, found: 6 }, at(0));

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Expected indentation of 2 columns, found 6"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display() {
    let error = Error::new(ErrorImpl::UnterminatedComment, at(7));

    assert_eq!(
        error.to_string(),
        "LexicalError: unterminated block comment at test.tc:7"
    );
}
