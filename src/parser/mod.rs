//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module turns the token stream of one source into a tree of
//! statements. It uses a Pratt parser for expressions with proper operator
//! precedence and handles:
//!
//! - Indentation based blocks, including inline bodies after a `:`
//! - Control flow (`if`/`elif`/`else`, both `for` forms, `while`, `do`)
//! - Declarations of functions, classes and traits
//! - Expressions (assignment, ternary, binary, unary, calls, literals)
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod block;
pub mod cursor;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
