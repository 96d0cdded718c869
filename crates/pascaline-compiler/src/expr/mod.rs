//! Expression lowering.
//!
//! The [`ExprCompiler`] lowers expression trees bottom-up. Compiling an
//! expression leaves its value in a register and returns that register as an
//! [`Operand`], which records whether the register is a transient temporary
//! or a variable's permanent home. The consuming parent releases its
//! operands once it has read them; releasing a variable operand is a no-op.
//!
//! Conditions are a separate entry point: [`compile_condition`] ends in a
//! `COMP` that sets only the machine's condition flag, so there is no
//! operand to hand back and nothing a surrounding arithmetic expression
//! could consume.
//!
//! [`compile_condition`]: ExprCompiler::compile_condition

mod binary;
mod comparison;
mod literal;
mod variable;

use pascaline_core::ast::{Comparison, Expr};
use pascaline_core::{CompileError, Reg, Span};

use crate::context::CompilationContext;

type Result<T> = std::result::Result<T, CompileError>;

/// A compiled expression's result register.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "operand registers must be released by the consuming parent"]
pub enum Operand {
    /// A transient register holding an intermediate value. Returned to the
    /// pool exactly once, by the parent that consumes it.
    Temp(Reg),
    /// A variable's permanently bound register. Never returned to the pool.
    Var(Reg),
}

impl Operand {
    /// The register holding the value.
    pub fn reg(&self) -> Reg {
        match self {
            Operand::Temp(reg) | Operand::Var(reg) => *reg,
        }
    }

    /// Release the operand once the parent has read it.
    ///
    /// Frees a temporary back to the pool. A variable's register stays
    /// bound for the rest of the pass, so releasing it does nothing.
    pub fn release(self, ctx: &mut CompilationContext<'_>, span: Span) -> Result<()> {
        match self {
            Operand::Temp(reg) => ctx.registers.free(reg, span),
            Operand::Var(_) => Ok(()),
        }
    }
}

/// Compiles expressions to instructions.
pub struct ExprCompiler<'c, 'ast> {
    /// The pass state: registers, code, bindings.
    ctx: &'c mut CompilationContext<'ast>,
}

impl<'c, 'ast> ExprCompiler<'c, 'ast> {
    /// Create an expression compiler over the pass context.
    pub fn new(ctx: &'c mut CompilationContext<'ast>) -> Self {
        Self { ctx }
    }

    /// Lower an expression.
    ///
    /// The returned operand names the register the value was left in; the
    /// caller owns it and must release it after consuming it.
    pub fn compile(&mut self, expr: &Expr<'ast>) -> Result<Operand> {
        match expr {
            Expr::Number(num) => literal::compile_number(self, num),
            Expr::Variable(var) => variable::compile_variable(self, var),
            Expr::Binary(bin) => binary::compile_binary(self, bin),
        }
    }

    /// Lower a condition.
    ///
    /// Emits both operands and the closing `COMP`. The outcome lives only
    /// in the condition flag, read by the jump the surrounding statement
    /// emits next; no register is allocated for it.
    pub fn compile_condition(&mut self, condition: &Comparison<'ast>) -> Result<()> {
        comparison::compile_comparison(self, condition)
    }

    /// Get the compilation context.
    pub fn ctx(&self) -> &CompilationContext<'ast> {
        self.ctx
    }

    /// Get the compilation context mutably.
    pub fn ctx_mut(&mut self) -> &mut CompilationContext<'ast> {
        self.ctx
    }
}

#[cfg(test)]
mod tests {
    use pascaline_core::Instruction;
    use pascaline_core::ast::{NumberExpr, VarExpr};

    use super::*;

    #[test]
    fn releasing_a_temp_returns_its_register() {
        let mut ctx = CompilationContext::new();
        let span = Span::default();
        let expr = Expr::Number(NumberExpr { value: 7, span });
        let operand = ExprCompiler::new(&mut ctx).compile(&expr).unwrap();
        assert_eq!(ctx.registers.in_use(), 1);
        operand.release(&mut ctx, span).unwrap();
        assert_eq!(ctx.registers.in_use(), 0);
    }

    #[test]
    fn releasing_a_variable_operand_is_a_no_op() {
        let mut ctx = CompilationContext::new();
        let span = Span::default();
        let expr = Expr::Variable(VarExpr { name: "x", span });
        let operand = ExprCompiler::new(&mut ctx).compile(&expr).unwrap();
        let reg = operand.reg();
        operand.release(&mut ctx, span).unwrap();
        assert_eq!(ctx.registers.in_use(), 1);
        assert_eq!(ctx.binding("x"), Some(reg));
        // Releasing again through a fresh read still changes nothing.
        let again = ExprCompiler::new(&mut ctx)
            .compile(&Expr::Variable(VarExpr { name: "x", span }))
            .unwrap();
        again.release(&mut ctx, span).unwrap();
        assert_eq!(ctx.registers.in_use(), 1);
    }

    #[test]
    fn net_pool_growth_is_one_register_per_expression() {
        let mut ctx = CompilationContext::new();
        let span = Span::default();
        let before = ctx.registers.in_use();
        let expr = Expr::Number(NumberExpr { value: 1, span });
        let operand = ExprCompiler::new(&mut ctx).compile(&expr).unwrap();
        assert_eq!(ctx.registers.in_use(), before + 1);
        assert!(matches!(operand, Operand::Temp(_)));
        operand.release(&mut ctx, span).unwrap();
        let instructions = ctx.finish().unwrap();
        assert_eq!(
            instructions,
            vec![Instruction::LoadImm {
                dst: Reg::new(0),
                value: 1
            }]
        );
    }
}
