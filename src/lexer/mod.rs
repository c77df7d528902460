//! Lexical analysis module for the front end.
//!
//! This module contains the scanner that converts source text into a stream
//! of tokens for parsing. It handles:
//!
//! - On-demand tokenization, one token per call
//! - Recognition of keywords, identifiers, literals, and operators
//! - Indentation measurement at the start of each physical line
//! - String escape decoding, comments and line continuations

pub mod escapes;
pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
