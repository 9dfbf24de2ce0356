//! Unit tests for the parser module.
//!
//! This module contains tests for parsing various language constructs
//! including:
//! - Function declarations, parameters, and local declarations
//! - Statements and control flow
//! - Expressions, operator-chain ordering, and identifier extensions
//! - Syntax-error diagnostics

use super::parser::parse;
use crate::ast::expressions::{Arg, Expr, Factor, FactorExt, Term};
use crate::ast::statements::{Program, Stmt};
use crate::ast::types::{PrimType, TypeSpec};
use crate::errors::errors::SyntaxError;
use crate::lexer::lexer::Lexer;
use crate::Position;

fn parse_source(source: &str) -> Result<Program, SyntaxError> {
    parse(Lexer::new(source.to_string()))
}

fn num_lit(value: f64) -> Term {
    Term {
        head: Factor::NumLit(value),
        tail: vec![],
    }
}

#[test]
fn test_parse_minimal_function() {
    let program = parse_source("num main() { return 0; }").unwrap();

    assert_eq!(program.funcs.len(), 1);
    let func = &program.funcs[0];
    assert_eq!(func.name, "main");
    assert_eq!(func.return_type, TypeSpec::scalar(PrimType::Num));
    assert!(func.params.is_empty());
    assert!(func.locals.is_empty());
    assert_eq!(
        func.body,
        vec![Stmt::Return(Expr {
            head: num_lit(0.0),
            tail: vec![],
        })]
    );
}

#[test]
fn test_parse_single_parameter() {
    let program = parse_source("bool f(num x) { return x; }").unwrap();

    let func = &program.funcs[0];
    assert_eq!(func.name, "f");
    assert_eq!(func.return_type, TypeSpec::scalar(PrimType::Bool));
    assert_eq!(func.params.len(), 1);
    assert_eq!(func.params[0].name, "x");
    assert_eq!(func.params[0].type_spec, TypeSpec::scalar(PrimType::Num));

    assert_eq!(
        func.body,
        vec![Stmt::Return(Expr {
            head: Term {
                head: Factor::Ident {
                    name: "x".to_string(),
                    ext: FactorExt::None,
                },
                tail: vec![],
            },
            tail: vec![],
        })]
    );
}

#[test]
fn test_missing_close_brace() {
    let error = parse_source("num f() { return 0;").unwrap_err();

    assert_eq!(error.error_name(), "TokenMismatch");
    assert_eq!(
        error.to_string(),
        "\"}\" is expected instead of \"end of file\" at 1:20."
    );
}

#[test]
fn test_array_local_declaration() {
    let program = parse_source("num f() { num[] a; return 0; }").unwrap();

    let func = &program.funcs[0];
    assert_eq!(func.locals.len(), 1);
    assert_eq!(func.locals[0].name, "a");
    assert_eq!(func.locals[0].type_spec, TypeSpec::array(PrimType::Num));
}

#[test]
fn test_new_array_factor() {
    let program = parse_source("num f() { num[] a; a <- new num[10]; return 0; }").unwrap();

    let func = &program.funcs[0];
    match &func.body[0] {
        Stmt::Assign { target, value } => {
            assert_eq!(target, "a");
            assert_eq!(
                value.head.head,
                Factor::New {
                    elem: PrimType::Num,
                    size: Box::new(Expr {
                        head: num_lit(10.0),
                        tail: vec![],
                    }),
                }
            );
        }
        other => panic!("expected assignment, got {:?}", other),
    }
}

#[test]
fn test_operator_chain_preserves_order() {
    let program = parse_source("num f() { return 1 + 2 - 3; }").unwrap();

    match &program.funcs[0].body[0] {
        Stmt::Return(expr) => {
            assert_eq!(expr.head, num_lit(1.0));
            assert_eq!(
                expr.tail,
                vec![
                    ("+".to_string(), num_lit(2.0)),
                    ("-".to_string(), num_lit(3.0)),
                ]
            );
        }
        other => panic!("expected return, got {:?}", other),
    }
}

#[test]
fn test_term_operator_chain() {
    let program = parse_source("num f() { return 8 / 2 * 2; }").unwrap();

    match &program.funcs[0].body[0] {
        Stmt::Return(expr) => {
            assert_eq!(expr.head.head, Factor::NumLit(8.0));
            assert_eq!(
                expr.head.tail,
                vec![
                    ("/".to_string(), Factor::NumLit(2.0)),
                    ("*".to_string(), Factor::NumLit(2.0)),
                ]
            );
            assert!(expr.tail.is_empty());
        }
        other => panic!("expected return, got {:?}", other),
    }
}

#[test]
fn test_omitted_lists_are_empty() {
    let program = parse_source("num f() { }").unwrap();

    let func = &program.funcs[0];
    assert!(func.params.is_empty());
    assert!(func.locals.is_empty());
    assert!(func.body.is_empty());
}

#[test]
fn test_scalar_and_array_type_specs() {
    let program = parse_source("num f(num[] xs, bool b) { return 0; }").unwrap();

    let func = &program.funcs[0];
    assert_eq!(func.params[0].type_spec, TypeSpec::array(PrimType::Num));
    assert_eq!(func.params[1].type_spec, TypeSpec::scalar(PrimType::Bool));
}

#[test]
fn extension_cannot_chain() {
    // `a[0].size` is not expressible: once the index extension is consumed,
    // the `.` falls to `term'`, which has no production for it.
    let error = parse_source("num f() { return a[0].size; }").unwrap_err();

    assert_eq!(error.error_name(), "NoMatchingProduction");
    assert!(error.to_string().contains("no matching production in term'"));
}

#[test]
fn test_call_extension() {
    let program = parse_source("num f() { return g(1, x); }").unwrap();

    match &program.funcs[0].body[0] {
        Stmt::Return(expr) => {
            assert_eq!(
                expr.head.head,
                Factor::Ident {
                    name: "g".to_string(),
                    ext: FactorExt::Call(vec![
                        Arg(Expr {
                            head: num_lit(1.0),
                            tail: vec![],
                        }),
                        Arg(Expr {
                            head: Term {
                                head: Factor::Ident {
                                    name: "x".to_string(),
                                    ext: FactorExt::None,
                                },
                                tail: vec![],
                            },
                            tail: vec![],
                        }),
                    ]),
                }
            );
        }
        other => panic!("expected return, got {:?}", other),
    }
}

#[test]
fn test_call_with_no_arguments() {
    let program = parse_source("num f() { return g(); }").unwrap();

    match &program.funcs[0].body[0] {
        Stmt::Return(expr) => match &expr.head.head {
            Factor::Ident { name, ext } => {
                assert_eq!(name, "g");
                assert_eq!(ext, &FactorExt::Call(vec![]));
            }
            other => panic!("expected call factor, got {:?}", other),
        },
        other => panic!("expected return, got {:?}", other),
    }
}

#[test]
fn test_index_extension() {
    let program = parse_source("num f() { return a[2]; }").unwrap();

    match &program.funcs[0].body[0] {
        Stmt::Return(expr) => {
            assert_eq!(
                expr.head.head,
                Factor::Ident {
                    name: "a".to_string(),
                    ext: FactorExt::Index(Box::new(Expr {
                        head: num_lit(2.0),
                        tail: vec![],
                    })),
                }
            );
        }
        other => panic!("expected return, got {:?}", other),
    }
}

#[test]
fn test_dot_size_extension() {
    let program = parse_source("num f() { return a.size; }").unwrap();

    match &program.funcs[0].body[0] {
        Stmt::Return(expr) => {
            assert_eq!(
                expr.head.head,
                Factor::Ident {
                    name: "a".to_string(),
                    ext: FactorExt::DotSize,
                }
            );
        }
        other => panic!("expected return, got {:?}", other),
    }
}

#[test]
fn test_if_else_statement() {
    let program = parse_source("num f() { if (x < 10) x <- 1; else x <- 2; return x; }").unwrap();

    let func = &program.funcs[0];
    assert_eq!(func.body.len(), 2);
    match &func.body[0] {
        Stmt::If {
            cond,
            then_body,
            else_body,
        } => {
            assert_eq!(cond.tail.len(), 1);
            assert_eq!(cond.tail[0].0, "<");
            assert!(matches!(**then_body, Stmt::Assign { .. }));
            assert!(matches!(**else_body, Stmt::Assign { .. }));
        }
        other => panic!("expected if, got {:?}", other),
    }
}

#[test]
fn test_while_with_compound_body() {
    let program = parse_source("num f() { while (b) { num i; i <- 0; } return 0; }").unwrap();

    match &program.funcs[0].body[0] {
        Stmt::While { body, .. } => match body.as_ref() {
            Stmt::Compound { locals, stmts } => {
                assert_eq!(locals.len(), 1);
                assert_eq!(locals[0].name, "i");
                assert_eq!(stmts.len(), 1);
                assert!(matches!(stmts[0], Stmt::Assign { .. }));
            }
            other => panic!("expected compound body, got {:?}", other),
        },
        other => panic!("expected while, got {:?}", other),
    }
}

#[test]
fn test_print_statement() {
    let program = parse_source("num f() { print 42; return 0; }").unwrap();

    match &program.funcs[0].body[0] {
        Stmt::Print(expr) => assert_eq!(expr.head.head, Factor::NumLit(42.0)),
        other => panic!("expected print, got {:?}", other),
    }
}

#[test]
fn test_parenthesized_factor() {
    let program = parse_source("num f() { return (1 + 2) * 3; }").unwrap();

    match &program.funcs[0].body[0] {
        Stmt::Return(expr) => {
            match &expr.head.head {
                Factor::Paren(inner) => assert_eq!(inner.tail[0].0, "+"),
                other => panic!("expected parenthesized factor, got {:?}", other),
            }
            assert_eq!(expr.head.tail, vec![("*".to_string(), Factor::NumLit(3.0))]);
        }
        other => panic!("expected return, got {:?}", other),
    }
}

#[test]
fn test_word_operators() {
    let program = parse_source("bool f() { return true and false or true; }").unwrap();

    match &program.funcs[0].body[0] {
        Stmt::Return(expr) => {
            // `and` binds at the term level, `or` at the expression level
            assert_eq!(expr.head.head, Factor::BoolLit(true));
            assert_eq!(
                expr.head.tail,
                vec![("and".to_string(), Factor::BoolLit(false))]
            );
            assert_eq!(expr.tail.len(), 1);
            assert_eq!(expr.tail[0].0, "or");
        }
        other => panic!("expected return, got {:?}", other),
    }
}

#[test]
fn test_multiple_functions_in_order() {
    let program = parse_source(
        "num first() { return 1; }\nbool second() { return true; }\nnum third() { return 3; }",
    )
    .unwrap();

    let names: Vec<&str> = program.funcs.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn test_empty_program() {
    let program = parse_source("").unwrap();
    assert!(program.funcs.is_empty());
}

#[test]
fn test_missing_lparen_mismatch() {
    let error = parse_source("num f) { return 0; }").unwrap_err();

    assert_eq!(error.error_name(), "TokenMismatch");
    assert_eq!(
        error.to_string(),
        "\"(\" is expected instead of \")\" at 1:6."
    );
}

#[test]
fn test_missing_assign_reports_found_lexeme() {
    let error = parse_source("num f() { x 1; }").unwrap_err();

    assert_eq!(error.error_name(), "TokenMismatch");
    assert_eq!(
        error.to_string(),
        "\"<-\" is expected instead of \"1\" at 1:13."
    );
}

#[test]
fn test_missing_else_mismatch() {
    let error = parse_source("num f() { if (x) x <- 1; return 0; }").unwrap_err();

    assert_eq!(error.error_name(), "TokenMismatch");
    assert!(error
        .to_string()
        .starts_with("\"else\" is expected instead of \"return\""));
}

#[test]
fn test_missing_semicolon_is_rejected() {
    // `}` is not in the follow set of `expr'`, so the missing `;` surfaces
    // as a production error there rather than a token mismatch.
    let error = parse_source("num main() {\n  return 0\n}").unwrap_err();

    assert_eq!(error.error_name(), "NoMatchingProduction");
    assert_eq!(error.to_string(), "no matching production in expr' at 3:1.");
    assert_eq!(error.position(), Position::new(3, 1));
}

#[test]
fn test_lex_error_token_is_rejected() {
    let error = parse_source("num f() { return @; }").unwrap_err();

    assert_eq!(error.error_name(), "NoMatchingProduction");
    assert_eq!(
        error.to_string(),
        "no matching production in factor at 1:18."
    );
}

#[test]
fn test_stray_token_at_top_level() {
    let error = parse_source("num f() { return 0; } ;").unwrap_err();

    assert_eq!(error.error_name(), "NoMatchingProduction");
    assert!(error
        .to_string()
        .contains("no matching production in decl_list'"));
}

#[test]
fn test_nested_compound_statements() {
    let program = parse_source("num f() { { { return 0; } } }").unwrap();

    match &program.funcs[0].body[0] {
        Stmt::Compound { locals, stmts } => {
            assert!(locals.is_empty());
            assert!(matches!(stmts[0], Stmt::Compound { .. }));
        }
        other => panic!("expected compound, got {:?}", other),
    }
}
