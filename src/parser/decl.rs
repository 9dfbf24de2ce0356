//! Declaration-level grammar procedures.
//!
//! ```text
//!      program -> decl_list ENDMARKER
//!    decl_list -> decl_list'
//!   decl_list' -> fun_decl decl_list' | eps
//!     fun_decl -> type_spec IDENT LPAREN params RPAREN BEGIN local_decls stmt_list END
//!       params -> param_list | eps
//!   param_list -> param param_list'
//!  param_list' -> COMMA param param_list' | eps
//!        param -> type_spec IDENT
//!  local_decls -> local_decls'
//! local_decls' -> local_decl local_decls' | eps
//!   local_decl -> type_spec IDENT SEMI
//! ```

use crate::{
    ast::statements::{FuncDecl, LocalDecl, Param, Program},
    errors::errors::SyntaxError,
    lexer::tokens::{TokenKind, TokenSource},
};

use super::{parser::Parser, stmt::parse_stmt_list, types::parse_type_spec};

pub fn parse_program<S: TokenSource>(parser: &mut Parser<S>) -> Result<Program, SyntaxError> {
    let funcs = parse_decl_list(parser)?;
    parser.expect(TokenKind::EndOfInput)?;
    Ok(Program { funcs })
}

/// The right-recursive `decl_list'` runs as a loop; appending in scan order
/// is the same left-to-right order that front-insertion during recursion
/// would rebuild.
fn parse_decl_list<S: TokenSource>(parser: &mut Parser<S>) -> Result<Vec<FuncDecl>, SyntaxError> {
    let mut funcs = Vec::new();
    loop {
        match parser.current_kind() {
            TokenKind::Num | TokenKind::Bool => funcs.push(parse_fun_decl(parser)?),
            TokenKind::EndOfInput => return Ok(funcs),
            _ => return Err(parser.no_match("decl_list'")),
        }
    }
}

fn parse_fun_decl<S: TokenSource>(parser: &mut Parser<S>) -> Result<FuncDecl, SyntaxError> {
    let return_type = parse_type_spec(parser)?;
    let name = parser.expect(TokenKind::Ident)?.lexeme();
    parser.expect(TokenKind::LParen)?;
    let params = parse_params(parser)?;
    parser.expect(TokenKind::RParen)?;
    parser.expect(TokenKind::Begin)?;
    let locals = parse_local_decls(parser)?;
    let body = parse_stmt_list(parser)?;
    parser.expect(TokenKind::End)?;

    Ok(FuncDecl {
        name,
        return_type,
        params,
        locals,
        body,
    })
}

fn parse_params<S: TokenSource>(parser: &mut Parser<S>) -> Result<Vec<Param>, SyntaxError> {
    match parser.current_kind() {
        TokenKind::Num | TokenKind::Bool => parse_param_list(parser),
        TokenKind::RParen => Ok(Vec::new()),
        _ => Err(parser.no_match("params")),
    }
}

fn parse_param_list<S: TokenSource>(parser: &mut Parser<S>) -> Result<Vec<Param>, SyntaxError> {
    let mut params = vec![parse_param(parser)?];
    loop {
        match parser.current_kind() {
            TokenKind::Comma => {
                parser.expect(TokenKind::Comma)?;
                params.push(parse_param(parser)?);
            }
            TokenKind::RParen => return Ok(params),
            _ => return Err(parser.no_match("param_list'")),
        }
    }
}

fn parse_param<S: TokenSource>(parser: &mut Parser<S>) -> Result<Param, SyntaxError> {
    let type_spec = parse_type_spec(parser)?;
    let name = parser.expect(TokenKind::Ident)?.lexeme();
    Ok(Param { name, type_spec })
}

pub fn parse_local_decls<S: TokenSource>(
    parser: &mut Parser<S>,
) -> Result<Vec<LocalDecl>, SyntaxError> {
    let mut locals = Vec::new();
    loop {
        match parser.current_kind() {
            TokenKind::Num | TokenKind::Bool => locals.push(parse_local_decl(parser)?),
            TokenKind::Begin
            | TokenKind::End
            | TokenKind::Return
            | TokenKind::Print
            | TokenKind::If
            | TokenKind::While
            | TokenKind::Ident => return Ok(locals),
            _ => return Err(parser.no_match("local_decls'")),
        }
    }
}

fn parse_local_decl<S: TokenSource>(parser: &mut Parser<S>) -> Result<LocalDecl, SyntaxError> {
    let type_spec = parse_type_spec(parser)?;
    let name = parser.expect(TokenKind::Ident)?.lexeme();
    parser.expect(TokenKind::Semi)?;
    Ok(LocalDecl { name, type_spec })
}
