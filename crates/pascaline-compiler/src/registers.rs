//! Register allocation.

use pascaline_core::{CompileError, GENERAL_REGISTERS, Reg, Span};

/// The pool of general-purpose registers available to one compilation pass.
///
/// Reuse is LIFO: the most recently freed register is the next one handed
/// out. A fresh pool allocates `R_0, R_1, ...` in order. Registers bound to
/// variables simply never come back; the pool does not distinguish them from
/// temporaries still in flight.
#[derive(Debug)]
pub struct RegisterPool {
    /// Free registers, next allocation from the end.
    free: Vec<Reg>,
    /// Held registers, indexed by register index.
    live: [bool; GENERAL_REGISTERS],
}

impl RegisterPool {
    /// Create a pool with all general registers free.
    pub fn new() -> Self {
        let free = (0..GENERAL_REGISTERS as u8).rev().map(Reg::new).collect();
        RegisterPool {
            free,
            live: [false; GENERAL_REGISTERS],
        }
    }

    /// Take a register out of the pool.
    ///
    /// Fails with [`CompileError::RegisterExhaustion`] when none are left;
    /// spilling is out of scope, so the caller aborts the pass.
    pub fn allocate(&mut self, span: Span) -> Result<Reg, CompileError> {
        let reg = self
            .free
            .pop()
            .ok_or(CompileError::RegisterExhaustion { span })?;
        self.live[reg.index() as usize] = true;
        Ok(reg)
    }

    /// Return a register to the pool.
    ///
    /// Fails with [`CompileError::DoubleFree`] if the register is already
    /// free. That is always a bookkeeping bug in the lowering code, so it is
    /// rejected rather than ignored.
    pub fn free(&mut self, reg: Reg, span: Span) -> Result<(), CompileError> {
        let index = reg.index() as usize;
        if !self.live[index] {
            return Err(CompileError::DoubleFree { reg, span });
        }
        self.live[index] = false;
        self.free.push(reg);
        Ok(())
    }

    /// How many registers are currently held.
    pub fn in_use(&self) -> usize {
        GENERAL_REGISTERS - self.free.len()
    }
}

impl Default for RegisterPool {
    fn default() -> Self {
        Self::new()
    }
}
