//! Type grammar procedures.
//!
//!  type_spec  -> prim_type type_spec'
//!  type_spec' -> LBRACKET RBRACKET | eps
//!  prim_type  -> NUM | BOOL

use crate::{
    ast::types::{PrimType, TypeSpec},
    errors::errors::SyntaxError,
    lexer::tokens::{TokenKind, TokenSource},
};

use super::parser::Parser;

pub fn parse_type_spec<S: TokenSource>(parser: &mut Parser<S>) -> Result<TypeSpec, SyntaxError> {
    let prim = parse_prim_type(parser)?;
    let is_array = parse_array_marker(parser)?;
    Ok(TypeSpec { prim, is_array })
}

/// `type_spec'`: a single optional `[]` suffix. The scalar alternative is
/// selected on the FOLLOW set of `type_spec`.
fn parse_array_marker<S: TokenSource>(parser: &mut Parser<S>) -> Result<bool, SyntaxError> {
    match parser.current_kind() {
        TokenKind::LBracket => {
            parser.expect(TokenKind::LBracket)?;
            parser.expect(TokenKind::RBracket)?;
            Ok(true)
        }
        TokenKind::Ident
        | TokenKind::LParen
        | TokenKind::Begin
        | TokenKind::End
        | TokenKind::EndOfInput => Ok(false),
        _ => Err(parser.no_match("type_spec'")),
    }
}

pub fn parse_prim_type<S: TokenSource>(parser: &mut Parser<S>) -> Result<PrimType, SyntaxError> {
    match parser.current_kind() {
        TokenKind::Bool => {
            parser.expect(TokenKind::Bool)?;
            Ok(PrimType::Bool)
        }
        TokenKind::Num => {
            parser.expect(TokenKind::Num)?;
            Ok(PrimType::Num)
        }
        _ => Err(parser.no_match("prim_type")),
    }
}
