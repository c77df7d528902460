/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the syntax tree
///
/// Submodules:
/// - ast: The `Node` trait shared by every tree node
/// - expressions: Definitions for the expression variants
/// - statements: Definitions for statements, blocks and declarations
/// - types: Type and trait references used by declarations
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
