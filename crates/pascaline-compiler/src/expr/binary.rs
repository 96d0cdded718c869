//! Binary arithmetic compilation.

use pascaline_core::Instruction;
use pascaline_core::ast::BinaryExpr;

use super::{ExprCompiler, Operand, Result};

/// Compile a binary arithmetic expression.
///
/// Bytecode layout:
/// ```text
/// <left instructions>          value in l
/// <right instructions>         value in r
/// (MATH, d, l, r, OP)          d freshly allocated
/// ```
///
/// Both operand registers are released only after the `MATH` that reads
/// them, right first, so the left operand's register surfaces at the top of
/// the pool for the next allocation.
pub fn compile_binary<'ast>(
    compiler: &mut ExprCompiler<'_, 'ast>,
    bin: &BinaryExpr<'ast>,
) -> Result<Operand> {
    let left = compiler.compile(bin.left)?;
    let right = compiler.compile(bin.right)?;
    let dst = compiler.ctx_mut().registers.allocate(bin.span)?;
    compiler.ctx_mut().code.emit(Instruction::Math {
        dst,
        left: left.reg(),
        right: right.reg(),
        op: bin.op,
    });
    right.release(compiler.ctx_mut(), bin.span)?;
    left.release(compiler.ctx_mut(), bin.span)?;
    Ok(Operand::Temp(dst))
}
