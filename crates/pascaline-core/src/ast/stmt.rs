//! Statement AST nodes.
//!
//! Statements are effectful: assignment, the two-armed and one-armed `IF`,
//! `WHILE`, and `WRITELN`. Statement bodies are ordered slices; order is
//! semantically significant and empty bodies are legal.

use crate::Span;
use crate::ast::expr::{Comparison, Expr, VarExpr};

/// A statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stmt<'ast> {
    /// Assignment (`x := expr;`)
    Assign(AssignStmt<'ast>),
    /// Conditional, with or without an else arm
    If(&'ast IfStmt<'ast>),
    /// While loop
    While(&'ast WhileStmt<'ast>),
    /// Output statement (`WRITELN expr;`)
    Write(WriteStmt<'ast>),
}

impl Stmt<'_> {
    /// Get the span of this statement.
    pub fn span(&self) -> Span {
        match self {
            Self::Assign(s) => s.span,
            Self::If(s) => s.span,
            Self::While(s) => s.span,
            Self::Write(s) => s.span,
        }
    }
}

/// An assignment statement.
///
/// The target is always a plain variable; anything else is a parser-side
/// contract violation and not representable here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssignStmt<'ast> {
    /// The variable being assigned
    pub target: VarExpr<'ast>,
    /// The value expression
    pub value: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// An ordered block of statements. May be empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block<'ast> {
    /// Statements in the block
    pub stmts: &'ast [Stmt<'ast>],
    /// Source location
    pub span: Span,
}

impl<'ast> Block<'ast> {
    /// An empty block at a position.
    pub fn empty(span: Span) -> Self {
        Self { stmts: &[], span }
    }

    /// Whether the block contains no statements.
    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}

/// An `IF` statement.
///
/// Examples:
/// - `IF x > 0 THEN { … }`
/// - `IF x > 0 THEN { … } ELSE { … }`
///
/// Exactly one arm's effects are observable per execution; a missing else
/// arm means the false path falls straight through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IfStmt<'ast> {
    /// Condition
    pub condition: Comparison<'ast>,
    /// Then arm
    pub then_body: Block<'ast>,
    /// Optional else arm
    pub else_body: Option<Block<'ast>>,
    /// Source location
    pub span: Span,
}

/// A `WHILE` loop.
///
/// Example: `WHILE i > 0 DO { … }`
///
/// The condition is re-evaluated before every iteration; there is no
/// iteration bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhileStmt<'ast> {
    /// Condition
    pub condition: Comparison<'ast>,
    /// Loop body
    pub body: Block<'ast>,
    /// Source location
    pub span: Span,
}

/// A `WRITELN` statement: evaluate an expression and emit the result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WriteStmt<'ast> {
    /// The value expression
    pub value: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}
