//! Pascaline Code Generator
//!
//! A single-pass compiler from the Pascaline AST to the register machine's
//! instruction set. One traversal performs register allocation and jump
//! backpatching together: expressions leave their values in pool-allocated
//! registers, control flow reserves jump lines before their targets exist
//! and patches them once the guarded code has been emitted.
//!
//! ## Modules
//!
//! - [`code`]: Append-only instruction buffer with reserve/patch jump slots
//! - [`context`]: Per-pass state: registers, buffer, variable bindings
//! - [`expr`]: Expression lowering to operand registers
//! - [`program`]: Whole-program assembly and rendering
//! - [`registers`]: The LIFO register pool
//! - [`stmt`]: Statement lowering and the backpatch choreography
//!
//! ## Example
//!
//! ```
//! use bumpalo::Bump;
//! use pascaline_core::Span;
//! use pascaline_core::ast::{Expr, NumberExpr, Program, Stmt, WriteStmt};
//! use pascaline_compiler::Compiler;
//!
//! let arena = Bump::new();
//! let value = arena.alloc(Expr::Number(NumberExpr {
//!     value: 7,
//!     span: Span::default(),
//! }));
//! let stmts = arena.alloc_slice_copy(&[Stmt::Write(WriteStmt {
//!     value,
//!     span: Span::default(),
//! })]);
//! let program = Program::new(stmts, Span::default());
//!
//! let compiled = Compiler::compile(&program).unwrap();
//! assert_eq!(
//!     compiled.render(),
//!     "(LIMM, R_0, 7)\n(MEM, IO_OUT, R_0, STOR)\n(JMP, None)\n"
//! );
//! ```

pub mod code;
pub mod context;
pub mod expr;
pub mod program;
pub mod registers;
pub mod stmt;

pub use code::{CodeBuffer, JumpKind, PatchSlot};
pub use context::CompilationContext;
pub use expr::{ExprCompiler, Operand};
pub use program::{CompiledProgram, Compiler};
pub use registers::RegisterPool;
pub use stmt::StmtCompiler;

// Re-export the error type from core for convenience
pub use pascaline_core::CompileError;
