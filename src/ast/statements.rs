use super::expressions::Expr;
use super::types::TypeSpec;

/// A whole source file: function declarations in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub funcs: Vec<FuncDecl>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub name: String,
    pub return_type: TypeSpec,
    pub params: Vec<Param>,
    pub locals: Vec<LocalDecl>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub type_spec: TypeSpec,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocalDecl {
    pub name: String,
    pub type_spec: TypeSpec,
}

/// Statement variants. `If` and `While` bodies are single statements;
/// blocks are expressed through `Compound`.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Assign {
        target: String,
        value: Expr,
    },
    Print(Expr),
    Return(Expr),
    If {
        cond: Expr,
        then_body: Box<Stmt>,
        else_body: Box<Stmt>,
    },
    While {
        cond: Expr,
        body: Box<Stmt>,
    },
    Compound {
        locals: Vec<LocalDecl>,
        stmts: Vec<Stmt>,
    },
}
