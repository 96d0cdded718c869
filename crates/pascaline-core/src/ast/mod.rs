//! Abstract syntax tree for the source language.
//!
//! This module provides:
//! - Node definitions for expressions, comparisons, and statements
//! - Source-shaped pretty-printing (`Display` on every node)
//! - The tree-walking interpreter (`evaluate` on every node)
//!
//! Nodes borrow from an arena allocator and stay valid for the arena's
//! lifetime. The parser that produces them lives outside this workspace;
//! tests and embedders build trees directly:
//!
//! ```
//! use bumpalo::Bump;
//! use pascaline_core::ast::{Expr, NumberExpr, Program, Stmt, WriteStmt};
//! use pascaline_core::{Environment, Span};
//!
//! let arena = Bump::new();
//! let nine = arena.alloc(Expr::Number(NumberExpr { value: 9, span: Span::default() }));
//! let stmts = arena.alloc_slice_copy(&[Stmt::Write(WriteStmt {
//!     value: nine,
//!     span: Span::default(),
//! })]);
//! let program = Program::new(stmts, Span::default());
//!
//! let mut env = Environment::new();
//! program.evaluate(&mut env).unwrap();
//! assert_eq!(env.output(), &[9]);
//! ```

pub mod expr;
pub mod stmt;

mod display;
mod eval;

pub use expr::*;
pub use stmt::*;

use crate::Span;

/// A complete source program: an ordered top-level statement sequence.
///
/// Borrows from the same arena as its statements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Program<'ast> {
    stmts: &'ast [Stmt<'ast>],
    span: Span,
}

impl<'ast> Program<'ast> {
    /// Create a program from its top-level statements.
    pub fn new(stmts: &'ast [Stmt<'ast>], span: Span) -> Self {
        Self { stmts, span }
    }

    /// The top-level statements, in execution order.
    pub fn stmts(&self) -> &[Stmt<'ast>] {
        self.stmts
    }

    /// Get the source location span of this program.
    pub fn span(&self) -> Span {
        self.span
    }
}
