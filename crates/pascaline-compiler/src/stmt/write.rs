//! `WRITELN` statement lowering.

use pascaline_core::ast::WriteStmt;
use pascaline_core::{Instruction, MemAddr, MemMode};

use super::{Result, StmtCompiler};

/// Compile `WRITELN expr`.
///
/// Bytecode layout:
/// ```text
/// <value instructions>        value in v
/// (MEM, IO_OUT, v, STOR)      store to the output channel
/// ```
pub fn compile_write<'ast>(
    compiler: &mut StmtCompiler<'_, 'ast>,
    write: &WriteStmt<'ast>,
) -> Result<()> {
    let value = compiler.exprs().compile(write.value)?;
    compiler.ctx_mut().code.emit(Instruction::Mem {
        addr: MemAddr::IoOut,
        src: value.reg(),
        mode: MemMode::Stor,
    });
    value.release(compiler.ctx_mut(), write.span)
}

#[cfg(test)]
mod tests {
    use bumpalo::Bump;
    use pascaline_core::ast::{Expr, NumberExpr, VarExpr};
    use pascaline_core::{Reg, Span};

    use crate::context::CompilationContext;

    use super::*;

    #[test]
    fn write_stores_to_the_output_channel() {
        let arena = Bump::new();
        let stmt = WriteStmt {
            value: arena.alloc(Expr::Number(NumberExpr {
                value: 7,
                span: Span::default(),
            })),
            span: Span::default(),
        };
        let mut ctx = CompilationContext::new();
        compile_write(&mut StmtCompiler::new(&mut ctx), &stmt).unwrap();
        assert_eq!(ctx.registers.in_use(), 0);
        assert_eq!(
            ctx.finish().unwrap(),
            vec![
                Instruction::LoadImm {
                    dst: Reg::new(0),
                    value: 7
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
    fn writing_a_variable_emits_only_the_store() {
        let arena = Bump::new();
        let stmt = WriteStmt {
            value: arena.alloc(Expr::Variable(VarExpr {
                name: "x",
                span: Span::default(),
            })),
            span: Span::default(),
        };
        let mut ctx = CompilationContext::new();
        compile_write(&mut StmtCompiler::new(&mut ctx), &stmt).unwrap();
        // x's binding is the only instruction-free side effect.
        assert_eq!(ctx.binding("x"), Some(Reg::new(0)));
        assert_eq!(
            ctx.finish().unwrap(),
            vec![Instruction::Mem {
                addr: MemAddr::IoOut,
                src: Reg::new(0),
                mode: MemMode::Stor,
            }]
        );
    }
}
