//! Per-pass compilation state.

use pascaline_core::{CompileError, Instruction, Reg, Span};
use rustc_hash::FxHashMap;

use crate::code::CodeBuffer;
use crate::registers::RegisterPool;

/// State threaded by `&mut` through one compilation pass.
///
/// Owns the register pool, the instruction buffer, and the permanent
/// variable-to-register bindings. A context is created fresh for each
/// program and discarded afterwards, so independent compilations share
/// nothing.
#[derive(Debug)]
pub struct CompilationContext<'ast> {
    /// The register pool.
    pub registers: RegisterPool,
    /// The instruction buffer.
    pub code: CodeBuffer,
    /// Variable bindings, keyed by the arena-borrowed name.
    bindings: FxHashMap<&'ast str, Reg>,
}

impl<'ast> CompilationContext<'ast> {
    /// Create a fresh context: full pool, empty buffer, no bindings.
    pub fn new() -> Self {
        CompilationContext {
            registers: RegisterPool::new(),
            code: CodeBuffer::new(),
            bindings: FxHashMap::default(),
        }
    }

    /// The register a variable lives in, binding one at first encounter.
    ///
    /// A variable's register is held until the end of the pass and never
    /// returns to the pool, so the binding is stable across every later
    /// reference to the same name.
    pub fn variable_reg(&mut self, name: &'ast str, span: Span) -> Result<Reg, CompileError> {
        if let Some(&reg) = self.bindings.get(name) {
            return Ok(reg);
        }
        let reg = self.registers.allocate(span)?;
        self.bindings.insert(name, reg);
        Ok(reg)
    }

    /// The register bound to a variable, if it has been encountered.
    pub fn binding(&self, name: &str) -> Option<Reg> {
        self.bindings.get(name).copied()
    }

    /// Finalize the pass, resolving the buffer into the instruction list.
    pub fn finish(self) -> Result<Vec<Instruction>, CompileError> {
        self.code.finish()
    }
}

impl Default for CompilationContext<'_> {
    fn default() -> Self {
        Self::new()
    }
}
