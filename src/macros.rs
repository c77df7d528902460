//! Utility macros for the front end.
//!
//! This module defines helper macros used throughout the scanner and parser:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a Span between two character offsets of one file
//!
//! These macros reduce boilerplate in the scanner implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's TokenValue
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntLiteral, TokenValue::Integer(42), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a Span covering `$start..$end` in `$file`.
///
/// # Example
///
/// ```ignore
/// let span = MK_SPAN!(scanner.start, scanner.pos, scanner.file);
/// ```
#[macro_export]
macro_rules! MK_SPAN {
    ($start:expr, $end:expr, $file:expr) => {
        Span {
            start: Position($start as u32, Rc::clone(&$file)),
            end: Position($end as u32, Rc::clone(&$file)),
        }
    };
}
