//! Shared base types for the Pascaline workspace.
//!
//! This crate holds everything the compiler and the machine agree on:
//!
//! - [`ast`]: arena-allocated source tree with pretty-printing and the
//!   tree-walking interpreter
//! - [`isa`]: the target instruction set, its textual form, and parse-back
//! - [`ops`]: operator enums shared between AST nodes and instructions
//! - [`error`]: one error enum per failure domain plus the unified
//!   [`PascalineError`]
//! - [`Environment`]: the interpreter's variable store and output channel
//! - [`Span`]: source positions carried on every node and span-bearing error
//!
//! The code generator lives in `pascaline-compiler` and the executor in
//! `pascaline-vm`; both depend only on this crate.

pub mod ast;
pub mod env;
pub mod error;
pub mod isa;
pub mod ops;
pub mod span;

pub use env::Environment;
pub use error::{CompileError, EvalError, InstructionParseError, PascalineError, VmError};
pub use isa::{GENERAL_REGISTERS, Instruction, MemAddr, MemMode, Reg};
pub use ops::{ArithOp, CompareOp};
pub use span::Span;
