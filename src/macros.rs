//! Utility macros for the lexer.
//!
//! This module defines the macros that build the lexer's pattern table:
//!
//! - `MK_PATTERN!` - a fixed token with no attribute (punctuation, keywords)
//! - `MK_OP_PATTERN!` - a token that carries its matched lexeme (operator
//!   classes, where the parser needs to know which concrete operator it got)
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a `RegexPattern` producing a token with no attribute.
///
/// # Example
///
/// ```ignore
/// MK_PATTERN!(";", TokenKind::Semi)
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($regex:literal, $kind:expr) => {
        RegexPattern {
            regex: Regex::new($regex).unwrap(),
            handler: |_matched: &str| Some(($kind, None)),
        }
    };
}

/// Creates a `RegexPattern` producing a token whose attribute is the
/// matched lexeme.
///
/// # Example
///
/// ```ignore
/// MK_OP_PATTERN!("<=", TokenKind::RelOp)
/// ```
#[macro_export]
macro_rules! MK_OP_PATTERN {
    ($regex:literal, $kind:expr) => {
        RegexPattern {
            regex: Regex::new($regex).unwrap(),
            handler: |matched: &str| Some(($kind, Some(Attribute::Lexeme(String::from(matched))))),
        }
    };
}
