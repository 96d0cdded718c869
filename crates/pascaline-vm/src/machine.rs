//! The fetch-execute loop.

use pascaline_core::isa::{Instruction, MemAddr, MemMode, Reg};
use pascaline_core::{GENERAL_REGISTERS, VmError};
use rustc_hash::FxHashMap;

type Result<T> = std::result::Result<T, VmError>;

/// Outcome of executing one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Execution continues at the updated program counter.
    Continue,
    /// The program halted.
    Halted,
}

/// The register machine.
///
/// A machine holds the state of one execution: fourteen general registers,
/// a program counter, the condition flag written by `COMP`, data memory,
/// and the values emitted through the output channel. A fresh machine
/// starts at line zero with everything cleared; state survives a run, so
/// each program gets its own machine.
///
/// The program itself stays outside the machine. [`Machine::run`] borrows
/// the instruction slice for the duration of the run and treats jump
/// operands as absolute indices into it.
#[derive(Debug)]
pub struct Machine {
    regs: [i64; GENERAL_REGISTERS],
    pc: usize,
    cond: bool,
    mem: FxHashMap<i64, i64>,
    output: Vec<i64>,
}

impl Machine {
    /// Create a machine with cleared state.
    pub fn new() -> Self {
        Machine {
            regs: [0; GENERAL_REGISTERS],
            pc: 0,
            cond: false,
            mem: FxHashMap::default(),
            output: Vec::new(),
        }
    }

    /// Execute `program` until it halts.
    ///
    /// Execution halts on `(JMP, None)` or by running past the last line;
    /// compiled streams always end with the former, so the latter only
    /// comes up for hand-written fragments. There is no step bound, so a
    /// program that loops forever hangs the caller; tests that execute
    /// loops use [`Machine::run_bounded`] instead.
    ///
    /// Fails with [`VmError::DivisionByZero`] or [`VmError::InvalidTarget`],
    /// each carrying the line of the offending instruction.
    pub fn run(&mut self, program: &[Instruction]) -> Result<()> {
        while self.step(program)? == Step::Continue {}
        Ok(())
    }

    /// Execute `program` until it halts or `max_steps` instructions have
    /// run, whichever comes first.
    ///
    /// Fails with [`VmError::StepLimit`] when the budget runs out before
    /// the program halts.
    pub fn run_bounded(&mut self, program: &[Instruction], max_steps: usize) -> Result<()> {
        for _ in 0..max_steps {
            if self.step(program)? == Step::Halted {
                return Ok(());
            }
        }
        Err(VmError::StepLimit { limit: max_steps })
    }

    /// Fetch the instruction at `pc` and execute it.
    fn step(&mut self, program: &[Instruction]) -> Result<Step> {
        let Some(&instruction) = program.get(self.pc) else {
            return Ok(Step::Halted);
        };
        let line = self.pc;
        self.pc += 1;

        match instruction {
            Instruction::LoadImm { dst, value } => self.set(dst, value),
            Instruction::Math {
                dst,
                left,
                right,
                op,
            } => {
                let value = op
                    .apply(self.reg(left), self.reg(right))
                    .ok_or(VmError::DivisionByZero { line })?;
                self.set(dst, value);
            }
            Instruction::Compare { left, right, op } => {
                self.cond = op.apply(self.reg(left), self.reg(right));
            }
            Instruction::Move { dst, src } => self.set(dst, self.reg(src)),
            Instruction::Jump { target: None } => return Ok(Step::Halted),
            Instruction::Jump {
                target: Some(target),
            } => self.jump(target, line, program.len())?,
            Instruction::JumpCond { target } => {
                // The skip edge: taken when the comparison did not hold.
                if !self.cond {
                    self.jump(target, line, program.len())?;
                }
            }
            Instruction::Mem { addr, src, mode } => match (addr, mode) {
                (MemAddr::IoOut, MemMode::Stor) => self.output.push(self.reg(src)),
                // The output channel is write-only; a load observes nothing.
                (MemAddr::IoOut, MemMode::Load) => self.set(src, 0),
                (MemAddr::Reg(addr), MemMode::Stor) => {
                    self.mem.insert(self.reg(addr), self.reg(src));
                }
                (MemAddr::Reg(addr), MemMode::Load) => {
                    let value = self.mem.get(&self.reg(addr)).copied().unwrap_or(0);
                    self.set(src, value);
                }
            },
        }
        Ok(Step::Continue)
    }

    /// Redirect the program counter.
    ///
    /// `len` itself is a valid target: it is the address one past the last
    /// line, and landing there halts on the next fetch. Anything beyond is
    /// [`VmError::InvalidTarget`].
    fn jump(&mut self, target: usize, line: usize, len: usize) -> Result<()> {
        if target > len {
            return Err(VmError::InvalidTarget { target, line });
        }
        self.pc = target;
        Ok(())
    }

    fn set(&mut self, reg: Reg, value: i64) {
        self.regs[reg.index() as usize] = value;
    }

    /// The current value of a register.
    pub fn reg(&self, reg: Reg) -> i64 {
        self.regs[reg.index() as usize]
    }

    /// Everything written to the output channel so far, in order.
    pub fn output(&self) -> &[i64] {
        &self.output
    }

    /// Drain the output channel.
    pub fn take_output(&mut self) -> Vec<i64> {
        std::mem::take(&mut self.output)
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}
