//! AST (Abstract Syntax Tree) module
//!
//! Contains all definitions related to the syntax tree structure.
//!
//! Submodules:
//! - declarations: Program root, declarations and function definitions
//! - statements: Statement nodes
//! - expressions: Expression nodes
//! - printer: Field-labeled tree dump and canonical source printer

pub mod declarations;
pub mod expressions;
pub mod printer;
pub mod statements;

use crate::Span;

/// An identifier with its source span.
///
/// Identifiers are value types: the text is copied out of the source
/// buffer, so the tree never borrows from the input.
#[derive(Debug, Clone)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}
