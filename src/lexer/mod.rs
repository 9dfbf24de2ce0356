//! Lexical analysis module.
//!
//! This module contains the tokenizer that feeds the parser. It handles:
//!
//! - On-demand tokenization using regex patterns (one token per pull)
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token line/column tracking for error reporting
//! - Comments and whitespace handling
//!
//! The `TokenSource` trait in `tokens` is the contract the parser consumes;
//! `Lexer` is the implementation this crate ships.

pub mod lexer;
pub mod tokens;
