use std::fmt::Debug;

use crate::{lexer::tokens::Token, Span};

/// Node Trait
///
/// Every node of the tree keeps the token it was built from so later stages
/// can report positions. Nodes are never modified after construction.
pub trait Node: Debug {
    /// Returns the originating token of the node.
    fn token(&self) -> &Token;
    /// Returns the span of the originating token.
    fn get_span(&self) -> &Span {
        &self.token().span
    }
}
