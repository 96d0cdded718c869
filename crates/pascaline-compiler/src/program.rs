//! Whole-program compilation.

use pascaline_core::ast::Program;
use pascaline_core::{CompileError, Instruction, isa};

use crate::context::CompilationContext;
use crate::stmt::StmtCompiler;

/// The single-pass code generator.
///
/// One call lowers a whole program front to back: statements in order,
/// then the `(JMP, None)` terminator. All pass state lives in a fresh
/// [`CompilationContext`] that dies with the call, so separate
/// compilations are fully independent.
pub struct Compiler;

impl Compiler {
    /// Compile a program to its instruction stream.
    pub fn compile(program: &Program<'_>) -> Result<CompiledProgram, CompileError> {
        let mut ctx = CompilationContext::new();
        let mut stmts = StmtCompiler::new(&mut ctx);
        for stmt in program.stmts() {
            stmts.compile(stmt)?;
        }
        ctx.code.emit(Instruction::Jump { target: None });
        Ok(CompiledProgram {
            instructions: ctx.finish()?,
        })
    }
}

/// A compiled program: the linear instruction stream, terminator included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledProgram {
    instructions: Vec<Instruction>,
}

impl CompiledProgram {
    /// The instructions in final order. Jump operands index into this
    /// sequence.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of instructions, terminator included.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the stream is empty. Compiler output never is; the
    /// terminator is always present.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Render to the external text form, one instruction per line.
    pub fn render(&self) -> String {
        isa::render_program(&self.instructions)
    }
}
