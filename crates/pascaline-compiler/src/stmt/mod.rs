//! Statement lowering and jump backpatching.
//!
//! The [`StmtCompiler`] lowers statements in source order. Straight-line
//! statements append their instructions and are done; control-flow
//! statements interleave lowering with jump reservations, reserving each
//! jump's line before the guarded block is lowered and patching in the
//! target once the block's extent is known. Reserved slots occupy their
//! lines immediately, so an empty block needs no special anchoring: the
//! patch target is simply the next line at resolution time.

mod assign;
mod if_stmt;
mod while_stmt;
mod write;

use pascaline_core::CompileError;
use pascaline_core::ast::{Block, Stmt};

use crate::context::CompilationContext;
use crate::expr::ExprCompiler;

type Result<T> = std::result::Result<T, CompileError>;

/// Compiles statements to instructions.
pub struct StmtCompiler<'c, 'ast> {
    /// The pass state: registers, code, bindings.
    ctx: &'c mut CompilationContext<'ast>,
}

impl<'c, 'ast> StmtCompiler<'c, 'ast> {
    /// Create a statement compiler over the pass context.
    pub fn new(ctx: &'c mut CompilationContext<'ast>) -> Self {
        Self { ctx }
    }

    /// Lower a single statement.
    pub fn compile(&mut self, stmt: &Stmt<'ast>) -> Result<()> {
        match stmt {
            Stmt::Assign(assign) => assign::compile_assign(self, assign),
            Stmt::If(if_stmt) => if_stmt::compile_if(self, if_stmt),
            Stmt::While(while_stmt) => while_stmt::compile_while(self, while_stmt),
            Stmt::Write(write) => write::compile_write(self, write),
        }
    }

    /// Lower a block's statements in order.
    pub fn compile_block(&mut self, block: &Block<'ast>) -> Result<()> {
        for stmt in block.stmts {
            self.compile(stmt)?;
        }
        Ok(())
    }

    /// Get the compilation context.
    pub fn ctx(&self) -> &CompilationContext<'ast> {
        self.ctx
    }

    /// Get the compilation context mutably.
    pub fn ctx_mut(&mut self) -> &mut CompilationContext<'ast> {
        self.ctx
    }

    /// An expression compiler over the same pass state.
    fn exprs(&mut self) -> ExprCompiler<'_, 'ast> {
        ExprCompiler::new(self.ctx)
    }
}

#[cfg(test)]
mod tests {
    use bumpalo::Bump;
    use pascaline_core::ast::{Comparison, Expr, IfStmt, NumberExpr, WriteStmt};
    use pascaline_core::{CompareOp, Span};

    use super::*;

    fn num<'ast>(arena: &'ast Bump, value: i64) -> &'ast Expr<'ast> {
        arena.alloc(Expr::Number(NumberExpr {
            value,
            span: Span::default(),
        }))
    }

    #[test]
    fn dispatch_covers_every_statement_kind() {
        let arena = Bump::new();
        let body: &[Stmt] = arena.alloc_slice_copy(&[Stmt::Write(WriteStmt {
            value: num(&arena, 1),
            span: Span::default(),
        })]);
        let if_stmt = arena.alloc(IfStmt {
            condition: Comparison {
                op: CompareOp::Gt,
                left: num(&arena, 1),
                right: num(&arena, 0),
                span: Span::default(),
            },
            then_body: Block {
                stmts: body,
                span: Span::default(),
            },
            else_body: None,
            span: Span::default(),
        });
        let stmt = Stmt::If(if_stmt);
        let mut ctx = CompilationContext::new();
        StmtCompiler::new(&mut ctx).compile(&stmt).unwrap();
        // Condition (3) + JMPC + body (2): six lines, all resolved.
        assert_eq!(ctx.finish().unwrap().len(), 6);
    }

    #[test]
    fn empty_block_lowers_to_nothing() {
        let mut ctx = CompilationContext::new();
        StmtCompiler::new(&mut ctx)
            .compile_block(&Block::empty(Span::default()))
            .unwrap();
        assert_eq!(ctx.finish().unwrap(), Vec::new());
    }
}
