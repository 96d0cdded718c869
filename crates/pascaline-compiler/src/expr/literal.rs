//! Number literal compilation.

use pascaline_core::Instruction;
use pascaline_core::ast::NumberExpr;

use super::{ExprCompiler, Operand, Result};

/// Compile an integer literal.
///
/// Bytecode layout:
/// ```text
/// (LIMM, r, value)    r freshly allocated
/// ```
pub fn compile_number(compiler: &mut ExprCompiler<'_, '_>, num: &NumberExpr) -> Result<Operand> {
    let dst = compiler.ctx_mut().registers.allocate(num.span)?;
    compiler.ctx_mut().code.emit(Instruction::LoadImm {
        dst,
        value: num.value,
    });
    Ok(Operand::Temp(dst))
}
