//! Parser engine and entry point.
//!
//! This module contains the `Parser` struct: the single-token lookahead
//! buffer, the raw-code mapping from the token source, and `expect`, the
//! one place where tokens are consumed, validated, and diagnosed. The
//! grammar procedures in `decl`, `stmt`, `expr`, and `types` are built
//! entirely from `expect` calls and calls to each other.

use crate::{
    ast::statements::Program,
    errors::errors::{SyntaxError, SyntaxErrorKind},
    lexer::tokens::{Token, TokenKind, TokenSource},
    Position,
};

use super::decl::parse_program;

/// Predictive parser state: the token source, exactly one buffered
/// lookahead token, and the lookahead's source position.
pub struct Parser<S: TokenSource> {
    source: S,
    lookahead: Token,
    position: Position,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a parser and primes the lookahead with the first token.
    pub fn new(source: S) -> Self {
        let mut parser = Parser {
            source,
            lookahead: Token {
                kind: TokenKind::EndOfInput,
                attr: None,
            },
            position: Position::new(1, 1),
        };
        parser.advance();
        parser
    }

    /// Returns the kind of the buffered lookahead without consuming it.
    pub fn current_kind(&self) -> TokenKind {
        self.lookahead.kind
    }

    /// Returns the buffered lookahead without consuming it.
    pub fn current_token(&self) -> &Token {
        &self.lookahead
    }

    /// Source position of the buffered lookahead.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Pulls the next token from the source into the lookahead buffer.
    ///
    /// Raw code `0` becomes `EndOfInput` (payload discarded), `-1` becomes
    /// `LexError` with whatever payload the source attached, and any code
    /// with no `TokenKind` mapping degrades to `LexError` as well — such a
    /// token can never match, so it diagnoses naturally downstream.
    pub fn advance(&mut self) {
        let code = self.source.next_code();
        let attr = self.source.take_attribute();
        self.position = Position::new(self.source.line(), self.source.column());
        self.lookahead = match TokenKind::from_code(code) {
            Some(TokenKind::EndOfInput) => Token {
                kind: TokenKind::EndOfInput,
                attr: None,
            },
            Some(kind) => Token { kind, attr },
            None => Token {
                kind: TokenKind::LexError,
                attr,
            },
        };
    }

    /// Consumes the lookahead if it has the expected kind and returns it,
    /// advancing to the next token (except after `EndOfInput`, where there
    /// is nothing left to pull). On mismatch, fails with a `TokenMismatch`
    /// naming the expected token, describing what was found, and carrying
    /// the lookahead's line/column.
    pub fn expect(&mut self, expected: TokenKind) -> Result<Token, SyntaxError> {
        if self.lookahead.kind != expected {
            return Err(SyntaxError::new(
                SyntaxErrorKind::TokenMismatch {
                    expected: expected.name().to_string(),
                    found: self.lookahead.describe(),
                },
                self.position,
            ));
        }

        let token = std::mem::replace(
            &mut self.lookahead,
            Token {
                kind: TokenKind::EndOfInput,
                attr: None,
            },
        );
        if expected != TokenKind::EndOfInput {
            self.advance();
        }
        Ok(token)
    }

    /// Builds the error for a lookahead outside every selector set of the
    /// named nonterminal.
    pub fn no_match(&self, nonterminal: &str) -> SyntaxError {
        SyntaxError::new(
            SyntaxErrorKind::NoMatchingProduction {
                nonterminal: nonterminal.to_string(),
            },
            self.position,
        )
    }
}

/// Parses a complete program from a token source.
///
/// This is the single recovery point: any error raised anywhere in the
/// recursive descent propagates here unmodified. On failure no partial tree
/// is exposed.
pub fn parse<S: TokenSource>(source: S) -> Result<Program, SyntaxError> {
    let mut parser = Parser::new(source);
    parse_program(&mut parser)
}
