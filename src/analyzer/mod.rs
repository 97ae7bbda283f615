//! Semantic analysis module.
//!
//! This module validates identifier references over the parsed AST. It
//! performs one depth-first traversal while maintaining a tree of lexical
//! scope frames, checking that:
//!
//! - Imported names are PascalCase and not already declared
//! - Variables and functions are declared at most once per scope
//! - Referenced names resolve in the current scope or an ancestor
//! - Call arguments that are names resolve, recursively through nested calls
//!
//! The AST is never mutated; all state lives in the analyzer instance built
//! fresh for each call.

pub mod analyzer;
