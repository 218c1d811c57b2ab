use crate::{lexer::tokens::Token, Span};

use super::Ident;

/// Expression nodes.
///
/// Assignment is not a separate node: `=` is an ordinary right-associative
/// infix operator whose left operand may be any expression. `1 = 2` parses;
/// rejecting invalid assignment targets belongs to a later semantic pass.
#[derive(Debug, Clone)]
pub enum Expr {
    Call(CallExpr),
    Field(FieldExpr),
    Infix(InfixExpr),
    Prefix(PrefixExpr),
    Bool(BoolLit),
    Nil(NilLit),
    This(ThisExpr),
    Number(NumberLit),
    Str(StringLit),
    Var(VarRef),
    Grouping(GroupingExpr),
    Super(SuperRef),
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Call(expr) => expr.span,
            Expr::Field(expr) => expr.span,
            Expr::Infix(expr) => expr.span,
            Expr::Prefix(expr) => expr.span,
            Expr::Bool(expr) => expr.span,
            Expr::Nil(expr) => expr.span,
            Expr::This(expr) => expr.span,
            Expr::Number(expr) => expr.span,
            Expr::Str(expr) => expr.span,
            Expr::Var(expr) => expr.span,
            Expr::Grouping(expr) => expr.span,
            Expr::Super(expr) => expr.span,
        }
    }
}

/// callee `(` arguments? `)`
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub args: Vec<Expr>,
    pub span: Span,
}

/// object `.` IDENTIFIER
#[derive(Debug, Clone)]
pub struct FieldExpr {
    pub object: Box<Expr>,
    pub field: Ident,
    pub span: Span,
}

/// left op right, for every binary operator including `=`.
#[derive(Debug, Clone)]
pub struct InfixExpr {
    pub op: Token,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}

/// `-` or `!` applied to a unary operand.
#[derive(Debug, Clone)]
pub struct PrefixExpr {
    pub op: Token,
    pub operand: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct BoolLit {
    pub value: bool,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct NilLit {
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ThisExpr {
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct NumberLit {
    pub value: f64,
    pub span: Span,
}

/// A string literal carrying its raw quoted text.
///
/// No escape processing is applied; the value includes the surrounding
/// quotes exactly as written.
#[derive(Debug, Clone)]
pub struct StringLit {
    pub value: String,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct VarRef {
    pub name: Ident,
    pub span: Span,
}

/// `(` expression `)` — also the required wrapper for `if`/`while`
/// conditions.
#[derive(Debug, Clone)]
pub struct GroupingExpr {
    pub inner: Box<Expr>,
    pub span: Span,
}

/// `super` `.` IDENTIFIER
#[derive(Debug, Clone)]
pub struct SuperRef {
    pub field: Ident,
    pub span: Span,
}
