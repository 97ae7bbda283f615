//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms the token stream into an
//! AST by recursive descent. Every nonterminal with alternative productions
//! picks one by matching on the kind of a single lookahead token; there is
//! no backtracking. It handles:
//!
//! - Statement parsing (imports, variable and function declarations, calls)
//! - Scoped statement parsing inside blocks (if/else if, return)
//! - Expression value parsing (literals, identifiers, calls, arrays, objects)
//! - Strict list parsing with dedicated dangling-comma errors

pub mod expr;
pub mod parser;
pub mod stmt;
