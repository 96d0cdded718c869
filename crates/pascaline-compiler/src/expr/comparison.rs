//! Comparison compilation.

use pascaline_core::Instruction;
use pascaline_core::ast::Comparison;

use super::{ExprCompiler, Result};

/// Compile a comparison into the condition flag.
///
/// Bytecode layout:
/// ```text
/// <left instructions>          value in l
/// <right instructions>         value in r
/// (COMP, l, r, OP)             sets the flag, writes no register
/// ```
///
/// Unlike arithmetic, no destination register is allocated: the outcome
/// exists only as the machine's condition flag, consumed by the jump the
/// enclosing statement emits immediately after. Both operand registers are
/// released here since no parent expression ever consumes a comparison.
pub fn compile_comparison<'ast>(
    compiler: &mut ExprCompiler<'_, 'ast>,
    comparison: &Comparison<'ast>,
) -> Result<()> {
    let left = compiler.compile(comparison.left)?;
    let right = compiler.compile(comparison.right)?;
    compiler.ctx_mut().code.emit(Instruction::Compare {
        left: left.reg(),
        right: right.reg(),
        op: comparison.op,
    });
    right.release(compiler.ctx_mut(), comparison.span)?;
    left.release(compiler.ctx_mut(), comparison.span)?;
    Ok(())
}
