//! `IF` statement lowering.

use pascaline_core::ast::{Block, IfStmt};

use crate::code::JumpKind;

use super::{Result, StmtCompiler};

/// Compile an `IF` statement, with or without an `ELSE` arm.
pub fn compile_if<'ast>(
    compiler: &mut StmtCompiler<'_, 'ast>,
    if_stmt: &IfStmt<'ast>,
) -> Result<()> {
    match &if_stmt.else_body {
        Some(else_body) => compile_if_else(compiler, if_stmt, else_body),
        None => compile_if_only(compiler, if_stmt),
    }
}

/// Compile `IF (cond) THEN { then }`.
///
/// Bytecode layout:
/// ```text
/// <condition>          sets the flag
/// (JMPC, end)          taken when the flag is false
/// <then body>
/// end:
/// ```
///
/// The `JMPC` is reserved before the body is lowered and patched to the
/// first line after it. With an empty body that is the line right after the
/// reservation itself.
fn compile_if_only<'ast>(
    compiler: &mut StmtCompiler<'_, 'ast>,
    if_stmt: &IfStmt<'ast>,
) -> Result<()> {
    compiler.exprs().compile_condition(&if_stmt.condition)?;
    let end_jump = compiler.ctx_mut().code.reserve_jump(JumpKind::JumpCond);

    compiler.compile_block(&if_stmt.then_body)?;

    let end = compiler.ctx_mut().code.next_line();
    compiler.ctx_mut().code.patch(end_jump, end);
    Ok(())
}

/// Compile `IF (cond) THEN { then } ELSE { else }`.
///
/// Bytecode layout:
/// ```text
/// <condition>          sets the flag
/// (JMPC, else)         taken when the flag is false
/// <then body>
/// (JMP, end)
/// else:
/// <else body>
/// end:
/// ```
///
/// Exactly one arm runs: a true condition falls through the `JMPC` into the
/// then body and the `JMP` skips the else body; a false condition jumps
/// straight to the else body.
fn compile_if_else<'ast>(
    compiler: &mut StmtCompiler<'_, 'ast>,
    if_stmt: &IfStmt<'ast>,
    else_body: &Block<'ast>,
) -> Result<()> {
    compiler.exprs().compile_condition(&if_stmt.condition)?;
    let else_jump = compiler.ctx_mut().code.reserve_jump(JumpKind::JumpCond);

    compiler.compile_block(&if_stmt.then_body)?;
    let end_jump = compiler.ctx_mut().code.reserve_jump(JumpKind::Jump);

    let else_start = compiler.ctx_mut().code.next_line();
    compiler.ctx_mut().code.patch(else_jump, else_start);
    compiler.compile_block(else_body)?;

    let end = compiler.ctx_mut().code.next_line();
    compiler.ctx_mut().code.patch(end_jump, end);
    Ok(())
}

#[cfg(test)]
mod tests {
    use bumpalo::Bump;
    use pascaline_core::ast::{Comparison, Expr, NumberExpr, Stmt, WriteStmt};
    use pascaline_core::{CompareOp, Instruction, MemAddr, MemMode, Reg, Span};

    use crate::context::CompilationContext;

    use super::*;

    fn num<'ast>(arena: &'ast Bump, value: i64) -> &'ast Expr<'ast> {
        arena.alloc(Expr::Number(NumberExpr {
            value,
            span: Span::default(),
        }))
    }

    fn write_stmt<'ast>(arena: &'ast Bump, value: i64) -> Stmt<'ast> {
        Stmt::Write(WriteStmt {
            value: num(arena, value),
            span: Span::default(),
        })
    }

    fn condition<'ast>(arena: &'ast Bump, left: i64, op: CompareOp, right: i64) -> Comparison<'ast> {
        Comparison {
            op,
            left: num(arena, left),
            right: num(arena, right),
            span: Span::default(),
        }
    }

    fn block<'ast>(arena: &'ast Bump, stmts: &[Stmt<'ast>]) -> Block<'ast> {
        Block {
            stmts: arena.alloc_slice_copy(stmts),
            span: Span::default(),
        }
    }

    #[test]
    fn if_skips_past_the_then_body() {
        let arena = Bump::new();
        let if_stmt = IfStmt {
            condition: condition(&arena, 1, CompareOp::Gt, 0),
            then_body: block(&arena, &[write_stmt(&arena, 9)]),
            else_body: None,
            span: Span::default(),
        };
        let mut ctx = CompilationContext::new();
        compile_if(&mut StmtCompiler::new(&mut ctx), &if_stmt).unwrap();
        assert_eq!(
            ctx.finish().unwrap(),
            vec![
                Instruction::LoadImm {
                    dst: Reg::new(0),
                    value: 1
                },
                Instruction::LoadImm {
                    dst: Reg::new(1),
                    value: 0
                },
                Instruction::Compare {
                    left: Reg::new(0),
                    right: Reg::new(1),
                    op: CompareOp::Gt,
                },
                Instruction::JumpCond { target: 6 },
                Instruction::LoadImm {
                    dst: Reg::new(0),
                    value: 9
                },
                Instruction::Mem {
                    addr: MemAddr::IoOut,
                    src: Reg::new(0),
                    mode: MemMode::Stor,
                },
            ]
        );
    }

    #[test]
    fn empty_then_body_jumps_to_the_next_line() {
        let arena = Bump::new();
        let if_stmt = IfStmt {
            condition: condition(&arena, 2, CompareOp::Lt, 1),
            then_body: Block::empty(Span::default()),
            else_body: None,
            span: Span::default(),
        };
        let mut ctx = CompilationContext::new();
        compile_if(&mut StmtCompiler::new(&mut ctx), &if_stmt).unwrap();
        let instructions = ctx.finish().unwrap();
        // Condition (2 lines), COMP, then the JMPC pointing right past itself.
        assert_eq!(instructions.len(), 4);
        assert_eq!(instructions[3], Instruction::JumpCond { target: 4 });
    }

    #[test]
    fn if_else_arms_share_one_exit() {
        let arena = Bump::new();
        let if_stmt = IfStmt {
            condition: condition(&arena, 1, CompareOp::Gte, 2),
            then_body: block(&arena, &[write_stmt(&arena, 10)]),
            else_body: Some(block(&arena, &[write_stmt(&arena, 20)])),
            span: Span::default(),
        };
        let mut ctx = CompilationContext::new();
        compile_if(&mut StmtCompiler::new(&mut ctx), &if_stmt).unwrap();
        let instructions = ctx.finish().unwrap();
        // 0-1 condition operands, 2 COMP, 3 JMPC -> else, 4-5 then body,
        // 6 JMP -> end, 7-8 else body.
        assert_eq!(instructions.len(), 9);
        assert_eq!(instructions[3], Instruction::JumpCond { target: 7 });
        assert_eq!(instructions[6], Instruction::Jump { target: Some(9) });
        assert_eq!(
            instructions[8],
            Instruction::Mem {
                addr: MemAddr::IoOut,
                src: Reg::new(0),
                mode: MemMode::Stor,
            }
        );
    }

    #[test]
    fn if_else_with_empty_arms_still_resolves() {
        let arena = Bump::new();
        let if_stmt = IfStmt {
            condition: condition(&arena, 5, CompareOp::Lte, 5),
            then_body: Block::empty(Span::default()),
            else_body: Some(Block::empty(Span::default())),
            span: Span::default(),
        };
        let mut ctx = CompilationContext::new();
        compile_if(&mut StmtCompiler::new(&mut ctx), &if_stmt).unwrap();
        let instructions = ctx.finish().unwrap();
        // 3 JMPC -> 5 (the line after the then-side JMP), 4 JMP -> 5.
        assert_eq!(instructions.len(), 5);
        assert_eq!(instructions[3], Instruction::JumpCond { target: 5 });
        assert_eq!(instructions[4], Instruction::Jump { target: Some(5) });
    }

    #[test]
    fn condition_temporaries_do_not_leak_out_of_the_statement() {
        let arena = Bump::new();
        let if_stmt = IfStmt {
            condition: condition(&arena, 3, CompareOp::Gt, 1),
            then_body: block(&arena, &[write_stmt(&arena, 1)]),
            else_body: Some(block(&arena, &[write_stmt(&arena, 2)])),
            span: Span::default(),
        };
        let mut ctx = CompilationContext::new();
        compile_if(&mut StmtCompiler::new(&mut ctx), &if_stmt).unwrap();
        assert_eq!(ctx.registers.in_use(), 0);
    }
}
