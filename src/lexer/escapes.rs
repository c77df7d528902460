//! Escape sequence decoding for string literals.
//!
//! The scanner keeps every backslash pair of a literal verbatim and hands the
//! raw text to [`decode_escapes`], which rewrites the recognised sequences:
//!
//! - `\UXXXXXXXX`, `\uXXXX` and `\xXX` hexadecimal code points
//! - `\o`, `\oo`, `\ooo` octal code points
//! - `\N{NAME}` named characters
//! - `\\ \' \" \a \b \f \n \r \t \v`
//!
//! Backslash pairs outside this set are left untouched.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::errors::ErrorImpl;

lazy_static! {
    static ref ESCAPE_SEQUENCE: Regex = Regex::new(
        r#"\\U.{8}|\\u.{4}|\\x.{2}|\\[0-7]{1,3}|\\N\{[^}]+\}|\\[\\'"abfnrtv]"#
    )
    .unwrap();

    static ref NAMED_CHARACTERS: HashMap<&'static str, char> = {
        let mut map = HashMap::new();
        map.insert("NULL", '\u{0}');
        map.insert("NUL", '\u{0}');
        map.insert("BELL", '\u{7}');
        map.insert("BACKSPACE", '\u{8}');
        map.insert("CHARACTER TABULATION", '\t');
        map.insert("TAB", '\t');
        map.insert("LINE FEED", '\n');
        map.insert("LF", '\n');
        map.insert("LINE TABULATION", '\u{b}');
        map.insert("FORM FEED", '\u{c}');
        map.insert("CARRIAGE RETURN", '\r');
        map.insert("CR", '\r');
        map.insert("ESCAPE", '\u{1b}');
        map.insert("SPACE", ' ');
        map.insert("EXCLAMATION MARK", '!');
        map.insert("QUOTATION MARK", '"');
        map.insert("NUMBER SIGN", '#');
        map.insert("DOLLAR SIGN", '$');
        map.insert("PERCENT SIGN", '%');
        map.insert("AMPERSAND", '&');
        map.insert("APOSTROPHE", '\'');
        map.insert("ASTERISK", '*');
        map.insert("PLUS SIGN", '+');
        map.insert("COMMA", ',');
        map.insert("HYPHEN-MINUS", '-');
        map.insert("FULL STOP", '.');
        map.insert("SOLIDUS", '/');
        map.insert("COLON", ':');
        map.insert("SEMICOLON", ';');
        map.insert("LESS-THAN SIGN", '<');
        map.insert("EQUALS SIGN", '=');
        map.insert("GREATER-THAN SIGN", '>');
        map.insert("QUESTION MARK", '?');
        map.insert("COMMERCIAL AT", '@');
        map.insert("REVERSE SOLIDUS", '\\');
        map.insert("LOW LINE", '_');
        map.insert("TILDE", '~');
        map.insert("DELETE", '\u{7f}');
        map.insert("NO-BREAK SPACE", '\u{a0}');
        map.insert("SECTION SIGN", '§');
        map.insert("COPYRIGHT SIGN", '©');
        map.insert("REGISTERED SIGN", '®');
        map.insert("DEGREE SIGN", '°');
        map.insert("PILCROW SIGN", '¶');
        map.insert("MIDDLE DOT", '·');
        map.insert("POUND SIGN", '£');
        map.insert("YEN SIGN", '¥');
        map.insert("EURO SIGN", '€');
        map.insert("EN DASH", '–');
        map.insert("EM DASH", '—');
        map.insert("BULLET", '•');
        map.insert("HORIZONTAL ELLIPSIS", '…');
        map.insert("GREEK SMALL LETTER ALPHA", 'α');
        map.insert("GREEK SMALL LETTER BETA", 'β');
        map.insert("GREEK SMALL LETTER PI", 'π');
        map.insert("GREEK CAPITAL LETTER OMEGA", 'Ω');
        map.insert("RIGHTWARDS ARROW", '→');
        map.insert("LEFTWARDS ARROW", '←');
        map.insert("INFINITY", '∞');
        map.insert("SNOWMAN", '☃');
        map.insert("BLACK STAR", '★');
        map.insert("REPLACEMENT CHARACTER", '\u{fffd}');
        map
    };
}

/// Decodes every recognised escape sequence in `raw`.
pub fn decode_escapes(raw: &str) -> Result<String, ErrorImpl> {
    let mut result = String::with_capacity(raw.len());
    let mut last = 0;

    for found in ESCAPE_SEQUENCE.find_iter(raw) {
        result.push_str(&raw[last..found.start()]);
        result.push(decode_sequence(found.as_str())?);
        last = found.end();
    }

    result.push_str(&raw[last..]);
    Ok(result)
}

fn decode_sequence(sequence: &str) -> Result<char, ErrorImpl> {
    let invalid = || ErrorImpl::InvalidEscape {
        sequence: sequence.to_string(),
    };
    let body = &sequence[1..];

    match body.chars().next() {
        Some('U') | Some('u') | Some('x') => {
            let digits = &body[1..];
            if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let code = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
            char::from_u32(code).ok_or_else(invalid)
        }
        Some('0'..='7') => {
            let code = u32::from_str_radix(body, 8).map_err(|_| invalid())?;
            char::from_u32(code).ok_or_else(invalid)
        }
        Some('N') => lookup_name(&body[2..body.len() - 1]).ok_or_else(invalid),
        Some('\\') => Ok('\\'),
        Some('\'') => Ok('\''),
        Some('"') => Ok('"'),
        Some('a') => Ok('\u{7}'),
        Some('b') => Ok('\u{8}'),
        Some('f') => Ok('\u{c}'),
        Some('n') => Ok('\n'),
        Some('r') => Ok('\r'),
        Some('t') => Ok('\t'),
        Some('v') => Ok('\u{b}'),
        _ => Err(invalid()),
    }
}

fn lookup_name(name: &str) -> Option<char> {
    let name = name.trim().to_ascii_uppercase();

    if let Some(ch) = NAMED_CHARACTERS.get(name.as_str()) {
        return Some(*ch);
    }

    // U+XXXX code point notation
    if let Some(hex) = name.strip_prefix("U+") {
        if !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return u32::from_str_radix(hex, 16).ok().and_then(char::from_u32);
        }
        return None;
    }

    let single = |rest: &str| {
        let mut chars = rest.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Some(ch),
            _ => None,
        }
    };

    if let Some(letter) = name.strip_prefix("LATIN CAPITAL LETTER ").and_then(single) {
        return letter.is_ascii_uppercase().then_some(letter);
    }
    if let Some(letter) = name.strip_prefix("LATIN SMALL LETTER ").and_then(single) {
        return letter
            .is_ascii_uppercase()
            .then(|| letter.to_ascii_lowercase());
    }
    if let Some(digit) = name.strip_prefix("DIGIT ") {
        let digits = [
            "ZERO", "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE",
        ];
        return digits
            .iter()
            .position(|word| *word == digit)
            .and_then(|index| char::from_digit(index as u32, 10));
    }

    None
}
