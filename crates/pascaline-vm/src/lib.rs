//! Pascaline Virtual Machine
//!
//! An executor for the instruction streams the compiler emits. The machine
//! is the other half of the contract the code generator compiles against:
//! fourteen general registers, a single condition flag, register-addressed
//! data memory, and an output channel. Anything the compiler produces runs
//! here, and the end-to-end tests hold its observable output equal to the
//! tree-walking interpreter's.
//!
//! ## Example
//!
//! ```
//! use pascaline_core::isa;
//! use pascaline_vm::Machine;
//!
//! let program = isa::parse_program(
//!     "(LIMM, R_0, 7)\n(MEM, IO_OUT, R_0, STOR)\n(JMP, None)\n",
//! )
//! .unwrap();
//!
//! let mut machine = Machine::new();
//! machine.run(&program).unwrap();
//! assert_eq!(machine.output(), &[7]);
//! ```

pub mod machine;

pub use machine::Machine;

// Re-export the error type from core for convenience
pub use pascaline_core::VmError;
