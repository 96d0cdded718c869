//! Variable reference compilation.

use pascaline_core::ast::VarExpr;

use super::{ExprCompiler, Operand, Result};

/// Compile a variable read.
///
/// Emits nothing: the variable's value already lives in its permanently
/// bound register, which binds here if this is the name's first appearance
/// in the pass.
pub fn compile_variable<'ast>(
    compiler: &mut ExprCompiler<'_, 'ast>,
    var: &VarExpr<'ast>,
) -> Result<Operand> {
    let reg = compiler.ctx_mut().variable_reg(var.name, var.span)?;
    Ok(Operand::Var(reg))
}

#[cfg(test)]
mod tests {
    use pascaline_core::{Reg, Span};

    use crate::context::CompilationContext;

    use super::*;

    #[test]
    fn variable_read_emits_no_instructions() {
        let mut ctx = CompilationContext::new();
        let var = VarExpr {
            name: "total",
            span: Span::default(),
        };
        let operand = compile_variable(&mut ExprCompiler::new(&mut ctx), &var).unwrap();
        assert_eq!(operand, Operand::Var(Reg::new(0)));
        assert_eq!(ctx.finish().unwrap(), Vec::new());
    }

    #[test]
    fn repeated_reads_share_one_register() {
        let mut ctx = CompilationContext::new();
        let var = VarExpr {
            name: "i",
            span: Span::default(),
        };
        let first = compile_variable(&mut ExprCompiler::new(&mut ctx), &var).unwrap();
        let second = compile_variable(&mut ExprCompiler::new(&mut ctx), &var).unwrap();
        assert_eq!(first.reg(), second.reg());
        assert_eq!(ctx.registers.in_use(), 1);
    }
}
