use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A syntax error: what went wrong plus where the lookahead token was when
/// it was detected. This is the only error type the parser produces; it
/// propagates unmodified from the point of detection to the `parse` caller.
#[derive(Debug, Clone)]
pub struct SyntaxError {
    kind: SyntaxErrorKind,
    position: Position,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, position: Position) -> Self {
        SyntaxError { kind, position }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn kind(&self) -> &SyntaxErrorKind {
        &self.kind
    }

    pub fn error_name(&self) -> &str {
        match &self.kind {
            SyntaxErrorKind::TokenMismatch { .. } => "TokenMismatch",
            SyntaxErrorKind::NoMatchingProduction { .. } => "NoMatchingProduction",
            SyntaxErrorKind::MalformedLiteral { .. } => "MalformedLiteral",
        }
    }

    pub fn tip(&self) -> ErrorTip {
        match &self.kind {
            SyntaxErrorKind::TokenMismatch { expected, found } => ErrorTip::Suggestion(format!(
                "Expected `{}` here, found `{}`",
                expected, found
            )),
            SyntaxErrorKind::NoMatchingProduction { .. } => ErrorTip::None,
            SyntaxErrorKind::MalformedLiteral { token } => ErrorTip::Suggestion(format!(
                "Literal `{}` did not carry a usable value",
                token
            )),
        }
    }
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}.", self.kind, self.position)
    }
}

impl std::error::Error for SyntaxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum SyntaxErrorKind {
    /// The lookahead was not the token a grammar procedure required.
    /// `found` is the offending token's lexeme if it has one, else its
    /// kind name.
    #[error("\"{expected}\" is expected instead of \"{found}\"")]
    TokenMismatch { expected: String, found: String },
    /// The lookahead belongs to no alternative's selector set for the
    /// nonterminal being parsed.
    #[error("no matching production in {nonterminal}")]
    NoMatchingProduction { nonterminal: String },
    /// A literal token arrived without the matching payload variant. Cannot
    /// happen with this crate's lexer, only with a foreign token source.
    #[error("malformed literal: {token:?}")]
    MalformedLiteral { token: String },
}
