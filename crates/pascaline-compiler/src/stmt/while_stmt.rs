//! `WHILE` statement lowering.

use pascaline_core::Instruction;
use pascaline_core::ast::WhileStmt;

use crate::code::JumpKind;

use super::{Result, StmtCompiler};

/// Compile `WHILE (cond) DO { body }`.
///
/// Bytecode layout:
/// ```text
/// entry:
/// <condition>          re-evaluated every iteration
/// (JMPC, end)          taken when the flag is false
/// <body>
/// (JMP, entry)
/// end:
/// ```
///
/// The entry line is captured before the condition is lowered, so the
/// backward `JMP` needs no patching; only the forward exit does.
pub fn compile_while<'ast>(
    compiler: &mut StmtCompiler<'_, 'ast>,
    while_stmt: &WhileStmt<'ast>,
) -> Result<()> {
    let entry = compiler.ctx_mut().code.next_line();
    compiler.exprs().compile_condition(&while_stmt.condition)?;
    let exit_jump = compiler.ctx_mut().code.reserve_jump(JumpKind::JumpCond);

    compiler.compile_block(&while_stmt.body)?;
    compiler.ctx_mut().code.emit(Instruction::Jump {
        target: Some(entry),
    });

    let end = compiler.ctx_mut().code.next_line();
    compiler.ctx_mut().code.patch(exit_jump, end);
    Ok(())
}
