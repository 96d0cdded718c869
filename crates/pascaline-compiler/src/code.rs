//! The instruction buffer and jump backpatching.
//!
//! Every emitted instruction takes the next absolute line and keeps it for
//! the rest of the pass. A jump whose target is not yet known is *reserved*:
//! the reservation occupies its line immediately, so code emitted after it
//! can never shift it, and the final target is filled in by [`patch`] once
//! the jumped-over block has been lowered. Line numbers handed out by
//! [`next_line`] therefore stay valid no matter what is emitted later.
//!
//! [`patch`]: CodeBuffer::patch
//! [`next_line`]: CodeBuffer::next_line

use pascaline_core::{CompileError, Instruction};

/// Which jump opcode a reserved slot becomes when patched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    /// Unconditional `JMP`.
    Jump,
    /// `JMPC`, taken when the condition flag is false.
    JumpCond,
}

/// A buffer slot: a committed instruction, or a reserved jump still waiting
/// for its target.
#[derive(Debug)]
enum Slot {
    Ready(Instruction),
    Pending(JumpKind),
}

/// Handle to a reserved jump slot.
///
/// Not `Clone`, and consumed by [`CodeBuffer::patch`], so each reservation
/// is patched at most once.
#[derive(Debug)]
#[must_use = "a reserved jump must be patched with its target"]
pub struct PatchSlot {
    line: usize,
}

impl PatchSlot {
    /// The line the reserved jump occupies.
    pub fn line(&self) -> usize {
        self.line
    }
}

/// Append-only instruction buffer with absolute 0-based line numbering.
#[derive(Debug)]
pub struct CodeBuffer {
    slots: Vec<Slot>,
}

impl CodeBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        CodeBuffer { slots: Vec::new() }
    }

    /// The line the next emitted or reserved instruction will occupy.
    pub fn next_line(&self) -> usize {
        self.slots.len()
    }

    /// Append an instruction; returns the line it landed on.
    pub fn emit(&mut self, instruction: Instruction) -> usize {
        let line = self.slots.len();
        self.slots.push(Slot::Ready(instruction));
        line
    }

    /// Reserve the next line for a jump whose target is not yet known.
    ///
    /// The reservation owns its line from this point on; patch it once the
    /// target line exists.
    pub fn reserve_jump(&mut self, kind: JumpKind) -> PatchSlot {
        let line = self.slots.len();
        self.slots.push(Slot::Pending(kind));
        PatchSlot { line }
    }

    /// Resolve a reserved jump to its target line.
    ///
    /// # Panics
    ///
    /// Panics if the slot came from a different buffer. Within one buffer
    /// the slot handle guarantees a pending entry at its line.
    pub fn patch(&mut self, slot: PatchSlot, target: usize) {
        let instruction = match &self.slots[slot.line] {
            Slot::Pending(JumpKind::Jump) => Instruction::Jump {
                target: Some(target),
            },
            Slot::Pending(JumpKind::JumpCond) => Instruction::JumpCond { target },
            Slot::Ready(_) => panic!("patch slot for line {} belongs to another buffer", slot.line),
        };
        self.slots[slot.line] = Slot::Ready(instruction);
    }

    /// Finalize the buffer into the instruction list.
    ///
    /// Fails with [`CompileError::UnresolvedJump`] if any reservation was
    /// never patched; complete statement lowering always patches every slot
    /// it reserves.
    pub fn finish(self) -> Result<Vec<Instruction>, CompileError> {
        self.slots
            .into_iter()
            .enumerate()
            .map(|(line, slot)| match slot {
                Slot::Ready(instruction) => Ok(instruction),
                Slot::Pending(_) => Err(CompileError::UnresolvedJump { line }),
            })
            .collect()
    }
}

impl Default for CodeBuffer {
    fn default() -> Self {
        Self::new()
    }
}
