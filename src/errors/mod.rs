//! Error types and error handling for the front end.
//!
//! This module defines the error types used by the scanner and the parsers.
//! It includes:
//!
//! - Error structures with source position information
//! - The three error kinds: lexical, indentation and syntax
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
