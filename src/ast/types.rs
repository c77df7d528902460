//! Type and trait references.
//!
//! The front end only records these names. Checking that a value actually
//! has a type, or that a class provides a trait, happens in later stages.

use crate::lexer::tokens::Token;

use super::ast::Node;

/// A type name, as used by `enforce` and function return types.
#[derive(Debug, Clone, PartialEq)]
pub struct Typename {
    pub name: String,
    pub token: Token,
}

impl Node for Typename {
    fn token(&self) -> &Token {
        &self.token
    }
}

/// A trait name, as listed by class, trait and parameter declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct Trait {
    pub name: String,
    pub token: Token,
}

impl Node for Trait {
    fn token(&self) -> &Token {
        &self.token
    }
}
