//! Statement grammar procedures.
//!
//! ```text
//!     stmt_list -> stmt_list'
//!    stmt_list' -> stmt stmt_list' | eps
//!          stmt -> assign_stmt | print_stmt | return_stmt | if_stmt | while_stmt | compound_stmt
//!   assign_stmt -> IDENT ASSIGN expr SEMI
//!    print_stmt -> PRINT expr SEMI
//!   return_stmt -> RETURN expr SEMI
//!       if_stmt -> IF LPAREN expr RPAREN stmt ELSE stmt
//!    while_stmt -> WHILE LPAREN expr RPAREN stmt
//! compound_stmt -> BEGIN local_decls stmt_list END
//! ```

use crate::{
    ast::statements::Stmt,
    errors::errors::SyntaxError,
    lexer::tokens::{TokenKind, TokenSource},
};

use super::{decl::parse_local_decls, expr::parse_expr, parser::Parser};

pub fn parse_stmt_list<S: TokenSource>(parser: &mut Parser<S>) -> Result<Vec<Stmt>, SyntaxError> {
    let mut stmts = Vec::new();
    loop {
        match parser.current_kind() {
            TokenKind::Begin
            | TokenKind::Return
            | TokenKind::Print
            | TokenKind::If
            | TokenKind::While
            | TokenKind::Ident => stmts.push(parse_stmt(parser)?),
            // An unclosed block takes the empty alternative here, so the
            // enclosing block-close match reports the missing `}`.
            TokenKind::End | TokenKind::EndOfInput => return Ok(stmts),
            _ => return Err(parser.no_match("stmt_list'")),
        }
    }
}

pub fn parse_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<Stmt, SyntaxError> {
    match parser.current_kind() {
        TokenKind::Ident => parse_assign_stmt(parser),
        TokenKind::Begin => parse_compound_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        TokenKind::Print => parse_print_stmt(parser),
        TokenKind::If => parse_if_stmt(parser),
        TokenKind::While => parse_while_stmt(parser),
        _ => Err(parser.no_match("stmt")),
    }
}

fn parse_assign_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<Stmt, SyntaxError> {
    let target = parser.expect(TokenKind::Ident)?.lexeme();
    parser.expect(TokenKind::Assign)?;
    let value = parse_expr(parser)?;
    parser.expect(TokenKind::Semi)?;
    Ok(Stmt::Assign { target, value })
}

fn parse_print_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<Stmt, SyntaxError> {
    parser.expect(TokenKind::Print)?;
    let value = parse_expr(parser)?;
    parser.expect(TokenKind::Semi)?;
    Ok(Stmt::Print(value))
}

fn parse_return_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<Stmt, SyntaxError> {
    parser.expect(TokenKind::Return)?;
    let value = parse_expr(parser)?;
    parser.expect(TokenKind::Semi)?;
    Ok(Stmt::Return(value))
}

/// The else branch is mandatory in this grammar, so there is no dangling
/// else to disambiguate.
fn parse_if_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<Stmt, SyntaxError> {
    parser.expect(TokenKind::If)?;
    parser.expect(TokenKind::LParen)?;
    let cond = parse_expr(parser)?;
    parser.expect(TokenKind::RParen)?;
    let then_body = parse_stmt(parser)?;
    parser.expect(TokenKind::Else)?;
    let else_body = parse_stmt(parser)?;

    Ok(Stmt::If {
        cond,
        then_body: Box::new(then_body),
        else_body: Box::new(else_body),
    })
}

fn parse_while_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<Stmt, SyntaxError> {
    parser.expect(TokenKind::While)?;
    parser.expect(TokenKind::LParen)?;
    let cond = parse_expr(parser)?;
    parser.expect(TokenKind::RParen)?;
    let body = parse_stmt(parser)?;

    Ok(Stmt::While {
        cond,
        body: Box::new(body),
    })
}

fn parse_compound_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Result<Stmt, SyntaxError> {
    parser.expect(TokenKind::Begin)?;
    let locals = parse_local_decls(parser)?;
    let stmts = parse_stmt_list(parser)?;
    parser.expect(TokenKind::End)?;
    Ok(Stmt::Compound { locals, stmts })
}
