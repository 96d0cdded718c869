//! Assignment lowering.

use pascaline_core::Instruction;
use pascaline_core::ast::AssignStmt;

use super::{Result, StmtCompiler};

/// Compile `target := value`.
///
/// Bytecode layout:
/// ```text
/// <value instructions>     value in v
/// (MOV, t, v)              t = target's permanent register
/// ```
///
/// The target binds its register at this statement if it has not appeared
/// before. The value's temporaries are already back in the pool by then, so
/// a new variable takes the most recently freed register. The value operand
/// is released after the `MOV`; when the value is a bare variable read that
/// release is a no-op.
pub fn compile_assign<'ast>(
    compiler: &mut StmtCompiler<'_, 'ast>,
    assign: &AssignStmt<'ast>,
) -> Result<()> {
    let value = compiler.exprs().compile(assign.value)?;
    let target = compiler
        .ctx_mut()
        .variable_reg(assign.target.name, assign.target.span)?;
    compiler.ctx_mut().code.emit(Instruction::Move {
        dst: target,
        src: value.reg(),
    });
    value.release(compiler.ctx_mut(), assign.span)
}
