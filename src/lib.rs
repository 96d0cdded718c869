//! Pascaline
//!
//! A compiler and executor for Pascaline, a small imperative language of
//! integer arithmetic, `IF`/`WHILE` control flow and an output statement.
//! The pipeline is split over three crates:
//!
//! - `pascaline-core`: the syntax tree with its tree-walking interpreter,
//!   and the instruction set with its text form
//! - `pascaline-compiler`: single-pass lowering from the tree to a linear
//!   instruction stream, allocating registers and patching jumps as it goes
//! - `pascaline-vm`: the register machine the stream runs on
//!
//! The interpreter and the machine are held to the same observable output,
//! so either end of the pipeline checks the other. This package re-exports
//! the pieces and adds the two whole-pipeline helpers [`compile_to_text`]
//! and [`execute`].
//!
//! ## Example
//!
//! ```
//! use bumpalo::Bump;
//! use pascaline::prelude::*;
//!
//! // x := 3 + 4;
//! // WRITELN x;
//! let arena = Bump::new();
//! let three = arena.alloc(Expr::Number(NumberExpr {
//!     value: 3,
//!     span: Span::default(),
//! }));
//! let four = arena.alloc(Expr::Number(NumberExpr {
//!     value: 4,
//!     span: Span::default(),
//! }));
//! let sum = arena.alloc(Expr::Binary(arena.alloc(BinaryExpr {
//!     op: ArithOp::Add,
//!     left: three,
//!     right: four,
//!     span: Span::default(),
//! })));
//! let x = arena.alloc(Expr::Variable(VarExpr {
//!     name: "x",
//!     span: Span::default(),
//! }));
//! let stmts = arena.alloc_slice_copy(&[
//!     Stmt::Assign(AssignStmt {
//!         target: VarExpr {
//!             name: "x",
//!             span: Span::default(),
//!         },
//!         value: sum,
//!         span: Span::default(),
//!     }),
//!     Stmt::Write(WriteStmt {
//!         value: x,
//!         span: Span::default(),
//!     }),
//! ]);
//! let program = Program::new(stmts, Span::default());
//!
//! assert_eq!(
//!     pascaline::compile_to_text(&program).unwrap(),
//!     "(LIMM, R_0, 3)\n\
//!      (LIMM, R_1, 4)\n\
//!      (MATH, R_2, R_0, R_1, ADD)\n\
//!      (MOV, R_0, R_2)\n\
//!      (MEM, IO_OUT, R_0, STOR)\n\
//!      (JMP, None)\n"
//! );
//! assert_eq!(pascaline::execute(&program).unwrap(), vec![7]);
//! ```

pub use pascaline_compiler::{CompiledProgram, Compiler};
pub use pascaline_core::{
    ArithOp, CompareOp, Environment, GENERAL_REGISTERS, Instruction, MemAddr, MemMode,
    PascalineError, Reg, Span,
};
pub use pascaline_core::{ast, env, error, isa, ops, span};
pub use pascaline_vm::Machine;

use pascaline_core::ast::Program;

// Re-export main types
pub mod prelude {
    pub use pascaline_compiler::{CompiledProgram, Compiler};
    pub use pascaline_core::ast::*;
    pub use pascaline_core::{
        ArithOp, CompareOp, Environment, Instruction, MemAddr, MemMode, PascalineError, Reg,
        Span,
    };
    pub use pascaline_vm::Machine;
}

/// Compile `program` and render the instruction stream as text, one
/// `(OPCODE, operand, ...)` tuple per line.
pub fn compile_to_text(program: &Program<'_>) -> Result<String, PascalineError> {
    let compiled = Compiler::compile(program)?;
    Ok(compiled.render())
}

/// Compile `program`, run it on a fresh [`Machine`], and return the values
/// it wrote to the output channel.
pub fn execute(program: &Program<'_>) -> Result<Vec<i64>, PascalineError> {
    let compiled = Compiler::compile(program)?;
    let mut machine = Machine::new();
    machine.run(compiled.instructions())?;
    Ok(machine.take_output())
}
