use crate::Span;

use super::{
    statements::{BlockStmt, Stmt},
    expressions::Expr,
    Ident,
};

/// The root of a parsed source file.
///
/// Declarations appear in source order; order is significant because it is
/// program execution order.
#[derive(Debug, Clone)]
pub struct Program {
    pub decls: Vec<Decl>,
    pub span: Span,
}

/// A top-level or block-level declaration.
///
/// `Error` is the placeholder emitted at a recovery point: it covers the
/// tokens that were discarded while resynchronising after a syntax error,
/// so the caller always receives a tree for the whole file.
#[derive(Debug, Clone)]
pub enum Decl {
    Class(ClassDecl),
    Fun(FunDecl),
    Var(VarDecl),
    Stmt(Stmt),
    Error(ErrorDecl),
}

impl Decl {
    pub fn span(&self) -> Span {
        match self {
            Decl::Class(decl) => decl.span,
            Decl::Fun(decl) => decl.span,
            Decl::Var(decl) => decl.span,
            Decl::Stmt(stmt) => stmt.span(),
            Decl::Error(decl) => decl.span,
        }
    }
}

/// `class` IDENTIFIER ( `extends` IDENTIFIER )? `{` function* `}`
#[derive(Debug, Clone)]
pub struct ClassDecl {
    pub name: Ident,
    pub base: Option<Ident>,
    pub methods: Vec<Function>,
    pub span: Span,
}

/// `fun` function
#[derive(Debug, Clone)]
pub struct FunDecl {
    pub function: Function,
    pub span: Span,
}

/// `var` IDENTIFIER ( `=` expression )? `;`
#[derive(Debug, Clone)]
pub struct VarDecl {
    pub name: Ident,
    pub init: Option<Expr>,
    pub span: Span,
}

/// Placeholder for a region skipped during error recovery.
#[derive(Debug, Clone)]
pub struct ErrorDecl {
    pub span: Span,
}

/// A function definition: name, parameter list and a mandatory block body.
///
/// Shared by `fun` declarations and class methods. Duplicate parameter
/// names are not rejected here; that is a later semantic pass.
#[derive(Debug, Clone)]
pub struct Function {
    pub name: Ident,
    pub params: Vec<Ident>,
    pub body: BlockStmt,
    pub span: Span,
}
