#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

pub use lexer::lexer::{tokenize, Scanner};
pub use parser::parser::parse;

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.1, self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing a character offset.
///
/// Returns the 1-based line number, the text of that line and the offset of
/// `position` within it, or `None` when the offset is past the end of `source`.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;
    let mut start = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.chars().count();

        if (start..end).contains(&pos) {
            return Some((index + 1, line.to_string(), pos - start));
        }

        start = end;
    }

    // Errors raised at end of input point one past the last character
    if pos == start {
        let last = source.split_inclusive('\n').last().unwrap_or("");
        let line_number = source.split_inclusive('\n').count().max(1);
        return Some((line_number, last.to_string(), last.chars().count()));
    }

    None
}


pub fn display_error(error: &Error, source: &str) {
    /*
        Error: SyntaxError: UnexpectedToken (...)
        -> main.tc
           |
        20 | y = = 1
           | ----^
    */

    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}: {}", error.get_kind(), error.get_error_name());
    } else {
        println!(
            "Error: {}: {} ({})",
            error.get_kind(),
            error.get_error_name(),
            error.get_tip()
        );
    }
    println!("-> {}", position.1);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
