use super::types::PrimType;

/// An expression: a head term followed by its operator chain, in source
/// order. Evaluation is strictly left-to-right; the chain is never reordered
/// or folded here.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub head: Term,
    /// `(operator lexeme, operand)` pairs, left to right. Operators are the
    /// ExprOp and RelOp classes (`+`, `-`, `or`, `<`, `<=`, ...).
    pub tail: Vec<(String, Term)>,
}

/// A term: a head factor followed by its TermOp chain (`*`, `/`, `and`),
/// same left-to-right contract as `Expr`.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub head: Factor,
    pub tail: Vec<(String, Factor)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Factor {
    Paren(Box<Expr>),
    NumLit(f64),
    BoolLit(bool),
    /// An identifier with at most one trailing extension. The grammar does
    /// not chain extensions: `a(1)[0]` and `a[0].size` are not expressible.
    Ident { name: String, ext: FactorExt },
    /// `new <prim>[<size>]` array allocation.
    New { elem: PrimType, size: Box<Expr> },
}

/// The optional extension behind an identifier factor.
#[derive(Debug, Clone, PartialEq)]
pub enum FactorExt {
    Call(Vec<Arg>),
    Index(Box<Expr>),
    DotSize,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Arg(pub Expr);
