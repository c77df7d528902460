//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals (integers and floats)
//! - String literals with escape sequences
//! - Operators and punctuation, longest match first
//! - Indentation, newlines and continuations
//! - Comments
//! - Error cases

use super::{
    lexer::{tokenize, Scanner},
    tokens::{TokenKind, TokenValue},
};
use crate::errors::errors::{ErrorImpl, ErrorKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source, Some("test.tc".to_string()))
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "if elif else for while do enforce class trait implement take as args capture raise catch ref operator continue break pass in function";
    let tokens = tokenize(source, Some("test.tc".to_string())).unwrap();

    let expected = [
        TokenKind::If,
        TokenKind::Elif,
        TokenKind::Else,
        TokenKind::For,
        TokenKind::While,
        TokenKind::Do,
        TokenKind::Enforce,
        TokenKind::Class,
        TokenKind::Trait,
        TokenKind::Implement,
        TokenKind::Take,
        TokenKind::As,
        TokenKind::Args,
        TokenKind::Capture,
        TokenKind::Raise,
        TokenKind::Catch,
        TokenKind::Ref,
        TokenKind::Operator,
        TokenKind::Continue,
        TokenKind::Break,
        TokenKind::Pass,
        TokenKind::In,
        TokenKind::Function,
        TokenKind::EOF,
    ];
    assert_eq!(tokens.len(), expected.len());
    for (token, kind) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, kind);
    }
    assert_eq!(tokens[0].value, TokenValue::Spelling("if"));
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 _underscore CamelCase iffy", None).unwrap();

    for (index, name) in ["foo", "bar", "baz_123", "_underscore", "CamelCase", "iffy"]
        .iter()
        .enumerate()
    {
        assert_eq!(tokens[index].kind, TokenKind::Identifier);
        assert_eq!(tokens[index].value, TokenValue::Text(name.to_string()));
    }
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 2.75 0 100.5", None).unwrap();

    assert_eq!(tokens[0].value, TokenValue::Integer(42));
    assert_eq!(tokens[1].kind, TokenKind::FloatLiteral);
    assert_eq!(tokens[1].value, TokenValue::Float(2.75));
    assert_eq!(tokens[2].value, TokenValue::Integer(0));
    assert_eq!(tokens[3].value, TokenValue::Float(100.5));
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_number_too_large() {
    let error = tokenize("99999999999999999999", None).unwrap_err();

    assert_eq!(error.get_kind(), ErrorKind::Lexical);
    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" 'world' "multiple words""#, None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::StrLiteral);
    assert_eq!(tokens[0].value, TokenValue::Text("hello".to_string()));
    assert_eq!(tokens[1].value, TokenValue::Text("world".to_string()));
    assert_eq!(tokens[2].value, TokenValue::Text("multiple words".to_string()));
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_string_escapes() {
    let tokens = tokenize(r#""a\tb" "hello\nworld" "backslash\\" "hex\x41""#, None).unwrap();

    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[0].value, TokenValue::Text("a\tb".to_string()));
    assert_eq!(tokens[1].value, TokenValue::Text("hello\nworld".to_string()));
    assert_eq!(tokens[2].value, TokenValue::Text("backslash\\".to_string()));
    assert_eq!(tokens[3].value, TokenValue::Text("hexA".to_string()));
}

#[test]
fn test_tokenize_escaped_quotes() {
    let tokens = tokenize(r#""quote\"test" 'it\'s' "it's" 'say "hi"'"#, None).unwrap();

    assert_eq!(tokens[0].value, TokenValue::Text("quote\"test".to_string()));
    assert_eq!(tokens[1].value, TokenValue::Text("it's".to_string()));
    assert_eq!(tokens[2].value, TokenValue::Text("it's".to_string()));
    assert_eq!(tokens[3].value, TokenValue::Text("say \"hi\"".to_string()));
}

#[test]
fn test_tokenize_empty_string() {
    let tokens = tokenize(r#""""#, None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::StrLiteral);
    assert_eq!(tokens[0].value, TokenValue::Text(String::new()));
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_unterminated_string() {
    let error = tokenize("'abc", None).unwrap_err();
    assert_eq!(error.get_kind(), ErrorKind::Lexical);
    assert_eq!(*error.get_internal(), ErrorImpl::UnterminatedString);

    let error = tokenize("\"abc\n\"", None).unwrap_err();
    assert_eq!(*error.get_internal(), ErrorImpl::UnterminatedString);
}

#[test]
fn test_tokenize_dangling_escape() {
    let error = tokenize("'abc\\", None).unwrap_err();
    assert_eq!(*error.get_internal(), ErrorImpl::DanglingEscape);

    let error = tokenize("'abc\\\n'", None).unwrap_err();
    assert_eq!(*error.get_internal(), ErrorImpl::DanglingEscape);
}

#[test]
fn test_tokenize_invalid_escape() {
    let error = tokenize(r#""\xZZ""#, None).unwrap_err();

    assert_eq!(error.get_kind(), ErrorKind::Lexical);
    assert_eq!(error.get_error_name(), "InvalidEscape");
}

#[test]
fn test_tokenize_single_operators() {
    let source = "/ * % ^ ? + - < > & | ! = ~";
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Slash,
            TokenKind::Star,
            TokenKind::Percent,
            TokenKind::Caret,
            TokenKind::Question,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Ampersand,
            TokenKind::Pipe,
            TokenKind::Not,
            TokenKind::Assignment,
            TokenKind::Tilde,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_compound_operators() {
    let source = "== != <= >= && || << >> ++ -- += -= *= /= %= ^^ ^= &= |=";
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::ShiftLeft,
            TokenKind::ShiftRight,
            TokenKind::PlusPlus,
            TokenKind::MinusMinus,
            TokenKind::PlusEquals,
            TokenKind::MinusEquals,
            TokenKind::StarEquals,
            TokenKind::SlashEquals,
            TokenKind::PercentEquals,
            TokenKind::Xor,
            TokenKind::CaretEquals,
            TokenKind::AmpersandEquals,
            TokenKind::PipeEquals,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_xor_is_not_two_exponents() {
    let tokens = tokenize("a^^b", None).unwrap();

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0].value, TokenValue::Text("a".to_string()));
    assert_eq!(tokens[1].kind, TokenKind::Xor);
    assert_eq!(tokens[1].value, TokenValue::Spelling("^^"));
    assert_eq!(tokens[2].value, TokenValue::Text("b".to_string()));
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_longest_match_without_spaces() {
    assert_eq!(
        kinds("x+++y"),
        vec![
            TokenKind::Identifier,
            TokenKind::PlusPlus,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
    assert_eq!(
        kinds("a<<=b"),
        vec![
            TokenKind::Identifier,
            TokenKind::ShiftLeft,
            TokenKind::Assignment,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) { } [ ] , ; :"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let tokens = tokenize("x = 5 // this is a comment\n/* block\ncomment */", None).unwrap();

    assert_eq!(tokens[3].kind, TokenKind::Comment);
    assert_eq!(tokens[3].value, TokenValue::Text(" this is a comment".to_string()));
    assert_eq!(tokens[4].kind, TokenKind::EndStatement);
    assert_eq!(tokens[5].kind, TokenKind::BlockComment);
    assert_eq!(tokens[5].value, TokenValue::Text(" block\ncomment ".to_string()));
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_indent_after_line_opening_block_comment() {
    let tokens = tokenize("x\n/* c */    y", None).unwrap();

    assert_eq!(tokens[2].kind, TokenKind::BlockComment);
    assert_eq!(tokens[3].kind, TokenKind::Indent);
    assert_eq!(tokens[3].indent(), Some(4));
    assert_eq!(tokens[4].kind, TokenKind::Identifier);

    // Mid-line block comments leave the following blanks alone
    assert_eq!(
        kinds("x /* c */  y"),
        vec![
            TokenKind::Identifier,
            TokenKind::BlockComment,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_unterminated_block_comment() {
    let error = tokenize("/* abc", None).unwrap_err();

    assert_eq!(error.get_kind(), ErrorKind::Lexical);
    assert_eq!(*error.get_internal(), ErrorImpl::UnterminatedComment);
}

#[test]
fn test_tokenize_indentation() {
    let tokens = tokenize("if x:\n    y = 1\n  \tz\n", None).unwrap();

    assert_eq!(tokens[2].kind, TokenKind::Colon);
    assert_eq!(tokens[3].kind, TokenKind::EndStatement);
    assert_eq!(tokens[4].kind, TokenKind::Indent);
    assert_eq!(tokens[4].value, TokenValue::Count(4));
    assert_eq!(tokens[4].indent(), Some(4));
    assert_eq!(tokens[8].kind, TokenKind::EndStatement);
    assert_eq!(tokens[9].indent(), Some(3));
    assert_eq!(tokens[10].kind, TokenKind::Identifier);
    assert_eq!(tokens[11].kind, TokenKind::EndStatement);
    assert_eq!(tokens[12].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_inline_whitespace_is_skipped() {
    assert_eq!(
        kinds("x   =\t 42   "),
        vec![
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::IntLiteral,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_leading_whitespace_on_first_line() {
    let tokens = tokenize("  x", None).unwrap();

    assert_eq!(tokens[0].indent(), Some(2));
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
}

#[test]
fn test_tokenize_line_continuation() {
    assert_eq!(
        kinds("x = 1 + \\\n      2\ny"),
        vec![
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::IntLiteral,
            TokenKind::Plus,
            TokenKind::IntLiteral,
            TokenKind::EndStatement,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_unrecognized_character() {
    let error = tokenize("x = @", None).unwrap_err();

    assert_eq!(error.get_kind(), ErrorKind::Lexical);
    assert_eq!(
        *error.get_internal(),
        ErrorImpl::UnrecognisedCharacter { character: '@' }
    );
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_scanner_keeps_returning_eof() {
    let mut scanner = Scanner::new("x", None);

    assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Identifier);
    for _ in 0..5 {
        assert_eq!(scanner.next_token().unwrap().kind, TokenKind::EOF);
    }
    assert!(scanner.at_eof());
}

#[test]
fn test_token_display() {
    let tokens = tokenize("x 5 'a' +\n  ", None).unwrap();

    assert_eq!(tokens[0].to_string(), "Token(Identifier, \"x\")");
    assert_eq!(tokens[1].to_string(), "Token(IntLiteral, 5)");
    assert_eq!(tokens[2].to_string(), "Token(StrLiteral, \"a\")");
    assert_eq!(tokens[3].to_string(), "Token(Plus, \"+\")");
    assert_eq!(tokens[4].to_string(), "Token(EndStatement, None)");
    assert_eq!(tokens[5].to_string(), "Token(Indent, 2)");
    assert_eq!(tokens[6].to_string(), "Token(EOF, None)");
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("ab == 'c'", Some("span.tc".to_string())).unwrap();

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 2);
    assert_eq!(tokens[1].span.start.0, 3);
    assert_eq!(tokens[1].span.end.0, 5);
    assert_eq!(tokens[2].span.start.0, 6);
    assert_eq!(tokens[2].span.end.0, 9);
    assert_eq!(*tokens[2].span.start.1, "span.tc");
}
