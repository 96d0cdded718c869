//! Expression AST nodes.
//!
//! Expressions are value-producing: number literals, variable reads, and
//! binary arithmetic. Comparisons are deliberately *not* expressions:
//! [`Comparison`] is a separate node consumed only by control-flow
//! conditions, so "a comparison nested inside arithmetic" is not a
//! representable shape. Compiled comparisons produce only the machine's
//! condition flag, never a value register, and the type split keeps that
//! contract out of runtime checks entirely.

use crate::Span;
use crate::ops::{ArithOp, CompareOp};

/// A value-producing expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expr<'ast> {
    /// Integer literal
    Number(NumberExpr),
    /// Variable read
    Variable(VarExpr<'ast>),
    /// Binary arithmetic
    Binary(&'ast BinaryExpr<'ast>),
}

impl Expr<'_> {
    /// Get the span of this expression.
    pub fn span(&self) -> Span {
        match self {
            Self::Number(e) => e.span,
            Self::Variable(e) => e.span,
            Self::Binary(e) => e.span,
        }
    }
}

/// An integer literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberExpr {
    /// The literal value
    pub value: i64,
    /// Source location
    pub span: Span,
}

/// A variable reference.
///
/// The name borrows from the AST arena. In compiled code a variable owns one
/// register for the whole compilation pass; in interpreted code it is a key
/// into the environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VarExpr<'ast> {
    /// The variable name
    pub name: &'ast str,
    /// Source location
    pub span: Span,
}

/// A binary arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryExpr<'ast> {
    /// Operator
    pub op: ArithOp,
    /// Left operand
    pub left: &'ast Expr<'ast>,
    /// Right operand
    pub right: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// A comparison between two expressions.
///
/// Only valid as an `IF`/`WHILE` condition. Yields a boolean when
/// interpreted; compiles to a `COMP` instruction that sets the condition
/// flag for the jump that follows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison<'ast> {
    /// Operator
    pub op: CompareOp,
    /// Left operand
    pub left: &'ast Expr<'ast>,
    /// Right operand
    pub right: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}
