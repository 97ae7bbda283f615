/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - expressions: Definitions for expression nodes
/// - statements: Definitions for statement nodes and the program root
pub mod expressions;
pub mod statements;
