//! Expression grammar procedures.
//!
//! ```text
//!      expr -> term expr'
//!     expr' -> EXPROP term expr' | RELOP term expr' | eps
//!      term -> factor term'
//!     term' -> TERMOP factor term' | eps
//!    factor -> IDENT factor'
//!            | LPAREN expr RPAREN
//!            | NUM_LIT
//!            | BOOL_LIT
//!            | NEW prim_type LBRACKET expr RBRACKET
//!   factor' -> LPAREN args RPAREN
//!            | LBRACKET expr RBRACKET
//!            | DOT SIZE
//!            | eps
//!      args -> arg_list | eps
//!  arg_list -> expr arg_list'
//! arg_list' -> COMMA expr arg_list' | eps
//! ```
//!
//! The primed procedures run as loops over their FIRST sets, breaking on
//! their FOLLOW sets; operands are appended in scan order, which keeps the
//! operator chains in source left-to-right order.

use crate::{
    ast::expressions::{Arg, Expr, Factor, FactorExt, Term},
    errors::errors::{SyntaxError, SyntaxErrorKind},
    lexer::tokens::{Attribute, TokenKind, TokenSource},
};

use super::{parser::Parser, types::parse_prim_type};

pub fn parse_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, SyntaxError> {
    let head = parse_term(parser)?;
    let mut tail = Vec::new();
    loop {
        match parser.current_kind() {
            kind @ (TokenKind::ExprOp | TokenKind::RelOp) => {
                let op = parser.expect(kind)?.lexeme();
                tail.push((op, parse_term(parser)?));
            }
            TokenKind::RParen | TokenKind::RBracket | TokenKind::Semi | TokenKind::Comma => {
                return Ok(Expr { head, tail })
            }
            _ => return Err(parser.no_match("expr'")),
        }
    }
}

fn parse_term<S: TokenSource>(parser: &mut Parser<S>) -> Result<Term, SyntaxError> {
    let head = parse_factor(parser)?;
    let mut tail = Vec::new();
    loop {
        match parser.current_kind() {
            TokenKind::TermOp => {
                let op = parser.expect(TokenKind::TermOp)?.lexeme();
                tail.push((op, parse_factor(parser)?));
            }
            TokenKind::RParen
            | TokenKind::RBracket
            | TokenKind::RelOp
            | TokenKind::ExprOp
            | TokenKind::Semi
            | TokenKind::Comma
            | TokenKind::End => return Ok(Term { head, tail }),
            _ => return Err(parser.no_match("term'")),
        }
    }
}

fn parse_factor<S: TokenSource>(parser: &mut Parser<S>) -> Result<Factor, SyntaxError> {
    match parser.current_kind() {
        TokenKind::LParen => {
            parser.expect(TokenKind::LParen)?;
            let inner = parse_expr(parser)?;
            parser.expect(TokenKind::RParen)?;
            Ok(Factor::Paren(Box::new(inner)))
        }
        TokenKind::NumLit => {
            let position = parser.position();
            let token = parser.expect(TokenKind::NumLit)?;
            match token.attr {
                Some(Attribute::Number(value)) => Ok(Factor::NumLit(value)),
                _ => Err(SyntaxError::new(
                    SyntaxErrorKind::MalformedLiteral {
                        token: token.lexeme(),
                    },
                    position,
                )),
            }
        }
        TokenKind::BoolLit => {
            let position = parser.position();
            let token = parser.expect(TokenKind::BoolLit)?;
            match token.attr {
                Some(Attribute::Boolean(value)) => Ok(Factor::BoolLit(value)),
                _ => Err(SyntaxError::new(
                    SyntaxErrorKind::MalformedLiteral {
                        token: token.lexeme(),
                    },
                    position,
                )),
            }
        }
        TokenKind::Ident => {
            let name = parser.expect(TokenKind::Ident)?.lexeme();
            let ext = parse_factor_ext(parser)?;
            Ok(Factor::Ident { name, ext })
        }
        TokenKind::New => {
            parser.expect(TokenKind::New)?;
            let elem = parse_prim_type(parser)?;
            parser.expect(TokenKind::LBracket)?;
            let size = parse_expr(parser)?;
            parser.expect(TokenKind::RBracket)?;
            Ok(Factor::New {
                elem,
                size: Box::new(size),
            })
        }
        _ => Err(parser.no_match("factor")),
    }
}

/// `factor'`: at most one extension, never chained. After one extension is
/// consumed this procedure has returned, so a second `(`, `[`, or `.` falls
/// to the enclosing `term'`/`expr'` and is rejected there.
fn parse_factor_ext<S: TokenSource>(parser: &mut Parser<S>) -> Result<FactorExt, SyntaxError> {
    match parser.current_kind() {
        TokenKind::LParen => {
            parser.expect(TokenKind::LParen)?;
            let args = parse_args(parser)?;
            parser.expect(TokenKind::RParen)?;
            Ok(FactorExt::Call(args))
        }
        TokenKind::LBracket => {
            parser.expect(TokenKind::LBracket)?;
            let index = parse_expr(parser)?;
            parser.expect(TokenKind::RBracket)?;
            Ok(FactorExt::Index(Box::new(index)))
        }
        TokenKind::Dot => {
            parser.expect(TokenKind::Dot)?;
            parser.expect(TokenKind::Size)?;
            Ok(FactorExt::DotSize)
        }
        TokenKind::RParen
        | TokenKind::RBracket
        | TokenKind::RelOp
        | TokenKind::ExprOp
        | TokenKind::TermOp
        | TokenKind::Semi
        | TokenKind::Comma => Ok(FactorExt::None),
        _ => Err(parser.no_match("factor'")),
    }
}

fn parse_args<S: TokenSource>(parser: &mut Parser<S>) -> Result<Vec<Arg>, SyntaxError> {
    match parser.current_kind() {
        TokenKind::LParen
        | TokenKind::New
        | TokenKind::BoolLit
        | TokenKind::NumLit
        | TokenKind::Ident => parse_arg_list(parser),
        TokenKind::RParen => Ok(Vec::new()),
        _ => Err(parser.no_match("args")),
    }
}

fn parse_arg_list<S: TokenSource>(parser: &mut Parser<S>) -> Result<Vec<Arg>, SyntaxError> {
    let mut args = vec![Arg(parse_expr(parser)?)];
    loop {
        match parser.current_kind() {
            TokenKind::Comma => {
                parser.expect(TokenKind::Comma)?;
                args.push(Arg(parse_expr(parser)?));
            }
            TokenKind::RParen => return Ok(args),
            _ => return Err(parser.no_match("arg_list'")),
        }
    }
}
