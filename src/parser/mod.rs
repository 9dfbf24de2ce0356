//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains a predictive (LL(1)) recursive-descent parser: one
//! procedure per grammar nonterminal, each selecting exactly one production
//! from the current lookahead token. It handles:
//!
//! - Declaration parsing (functions, parameters, local declarations)
//! - Statement parsing (assignment, print/return, if/else, while, blocks)
//! - Expression parsing (left-to-right operator chains, array allocation,
//!   indexing, calls, the `.size` accessor)
//!
//! There is no backtracking and no error recovery: the first token outside
//! every anticipated selector set aborts the parse.

pub mod decl;
pub mod expr;
pub mod parser;
pub mod stmt;
pub mod types;

#[cfg(test)]
mod tests;
