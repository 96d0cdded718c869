//! The target instruction set.
//!
//! Shared by the code generator (which emits it) and the machine (which
//! executes it). Instructions have an external textual form, one tuple per
//! line, which downstream consumers load directly as an indexable program:
//!
//! ```text
//! (LIMM, R_0, 3)
//! (LIMM, R_1, 4)
//! (MATH, R_2, R_0, R_1, ADD)
//! (MOV, R_3, R_2)
//! (MEM, IO_OUT, R_3, STOR)
//! (JMP, None)
//! ```
//!
//! Jump operands are absolute 0-based line indices into that sequence, and
//! `(JMP, None)` is the fixed program terminator. Rendering and parsing are
//! exact inverses for this instruction set.

use std::fmt;
use std::str::FromStr;

use crate::error::InstructionParseError;
use crate::ops::{ArithOp, CompareOp};

/// Number of general-purpose registers available to compiled code.
pub const GENERAL_REGISTERS: usize = 14;

// ============================================================================
// Registers
// ============================================================================

/// A machine register, written `R_0` through `R_13` in instruction text.
///
/// Registers are opaque tokens: only the allocator and the text parser mint
/// them, so a `Reg` in circulation is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reg(u8);

impl Reg {
    /// Create a register token from its index.
    ///
    /// The index must be below [`GENERAL_REGISTERS`].
    #[inline]
    pub fn new(index: u8) -> Self {
        debug_assert!((index as usize) < GENERAL_REGISTERS);
        Reg(index)
    }

    /// The register's index.
    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R_{}", self.0)
    }
}

impl FromStr for Reg {
    type Err = InstructionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("R_")
            .and_then(|digits| digits.parse::<u8>().ok())
            .filter(|&index| (index as usize) < GENERAL_REGISTERS)
            .map(Reg)
            .ok_or_else(|| InstructionParseError::InvalidRegister(s.to_string()))
    }
}

// ============================================================================
// Memory operands
// ============================================================================

/// Where a `MEM` instruction reads from or writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemAddr {
    /// The output channel. Storing here emits the value from the program.
    IoOut,
    /// Data memory, addressed by the value held in a register.
    Reg(Reg),
}

impl fmt::Display for MemAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemAddr::IoOut => write!(f, "IO_OUT"),
            MemAddr::Reg(reg) => write!(f, "{reg}"),
        }
    }
}

/// Direction of a `MEM` access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemMode {
    /// Read from memory into the register operand.
    Load,
    /// Write the register operand into memory.
    Stor,
}

impl MemMode {
    /// The instruction-set mnemonic for this mode.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            MemMode::Load => "LOAD",
            MemMode::Stor => "STOR",
        }
    }
}

// ============================================================================
// Instructions
// ============================================================================

/// A single machine instruction.
///
/// One variant per opcode. Jump targets are absolute 0-based line indices
/// into the final instruction sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Load an immediate value. Text: `(LIMM, dst, value)`.
    LoadImm {
        /// Destination register.
        dst: Reg,
        /// The immediate value.
        value: i64,
    },

    /// Arithmetic on two registers. Text: `(MATH, dst, left, right, OP)`.
    Math {
        /// Destination register.
        dst: Reg,
        /// Left operand register.
        left: Reg,
        /// Right operand register.
        right: Reg,
        /// Which arithmetic operation to perform.
        op: ArithOp,
    },

    /// Compare two registers into the condition flag.
    /// Text: `(COMP, left, right, OP)`. Writes no register.
    Compare {
        /// Left operand register.
        left: Reg,
        /// Right operand register.
        right: Reg,
        /// Which comparison to perform.
        op: CompareOp,
    },

    /// Copy a register. Text: `(MOV, dst, src)`.
    Move {
        /// Destination register.
        dst: Reg,
        /// Source register.
        src: Reg,
    },

    /// Unconditional jump. Text: `(JMP, target)`.
    ///
    /// `(JMP, None)` is the program terminator: execution halts on it.
    Jump {
        /// Target line, or `None` to halt.
        target: Option<usize>,
    },

    /// Jump taken when the condition flag is *false*; falls through when the
    /// preceding comparison held. Text: `(JMPC, target)`.
    JumpCond {
        /// Target line.
        target: usize,
    },

    /// Memory access. Text: `(MEM, addr, src, MODE)`.
    ///
    /// The compiler only emits `(MEM, IO_OUT, src, STOR)`; the
    /// register-addressed form is part of the machine's surface.
    Mem {
        /// Memory address operand.
        addr: MemAddr,
        /// Register holding the value to store, or receiving the load.
        src: Reg,
        /// Access direction.
        mode: MemMode,
    },
}

impl Instruction {
    /// The opcode mnemonic for this instruction.
    pub fn opcode(&self) -> &'static str {
        match self {
            Instruction::LoadImm { .. } => "LIMM",
            Instruction::Math { .. } => "MATH",
            Instruction::Compare { .. } => "COMP",
            Instruction::Move { .. } => "MOV",
            Instruction::Jump { .. } => "JMP",
            Instruction::JumpCond { .. } => "JMPC",
            Instruction::Mem { .. } => "MEM",
        }
    }

    /// Whether this is the `(JMP, None)` program terminator.
    pub fn is_terminator(&self) -> bool {
        matches!(self, Instruction::Jump { target: None })
    }

    /// The jump target, for the two jump opcodes.
    pub fn jump_target(&self) -> Option<usize> {
        match self {
            Instruction::Jump { target } => *target,
            Instruction::JumpCond { target } => Some(*target),
            _ => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::LoadImm { dst, value } => write!(f, "(LIMM, {dst}, {value})"),
            Instruction::Math {
                dst,
                left,
                right,
                op,
            } => write!(f, "(MATH, {dst}, {left}, {right}, {})", op.mnemonic()),
            Instruction::Compare { left, right, op } => {
                write!(f, "(COMP, {left}, {right}, {})", op.mnemonic())
            }
            Instruction::Move { dst, src } => write!(f, "(MOV, {dst}, {src})"),
            Instruction::Jump { target: Some(t) } => write!(f, "(JMP, {t})"),
            Instruction::Jump { target: None } => write!(f, "(JMP, None)"),
            Instruction::JumpCond { target } => write!(f, "(JMPC, {target})"),
            Instruction::Mem { addr, src, mode } => {
                write!(f, "(MEM, {addr}, {src}, {})", mode.mnemonic())
            }
        }
    }
}

// ============================================================================
// Text parsing
// ============================================================================

impl FromStr for Instruction {
    type Err = InstructionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| InstructionParseError::NotATuple(trimmed.to_string()))?;

        let mut parts = inner.split(',').map(str::trim);
        let opcode = parts.next().unwrap_or("");
        let operands: Vec<&str> = parts.collect();

        match opcode {
            "LIMM" => {
                expect_operands(opcode, &operands, 2)?;
                Ok(Instruction::LoadImm {
                    dst: operands[0].parse()?,
                    value: parse_int(operands[1])?,
                })
            }
            "MATH" => {
                expect_operands(opcode, &operands, 4)?;
                Ok(Instruction::Math {
                    dst: operands[0].parse()?,
                    left: operands[1].parse()?,
                    right: operands[2].parse()?,
                    op: ArithOp::from_mnemonic(operands[3])
                        .ok_or_else(|| InstructionParseError::InvalidOperand(operands[3].into()))?,
                })
            }
            "COMP" => {
                expect_operands(opcode, &operands, 3)?;
                Ok(Instruction::Compare {
                    left: operands[0].parse()?,
                    right: operands[1].parse()?,
                    op: CompareOp::from_mnemonic(operands[2])
                        .ok_or_else(|| InstructionParseError::InvalidOperand(operands[2].into()))?,
                })
            }
            "MOV" => {
                expect_operands(opcode, &operands, 2)?;
                Ok(Instruction::Move {
                    dst: operands[0].parse()?,
                    src: operands[1].parse()?,
                })
            }
            "JMP" => {
                expect_operands(opcode, &operands, 1)?;
                let target = if operands[0] == "None" {
                    None
                } else {
                    Some(parse_target(operands[0])?)
                };
                Ok(Instruction::Jump { target })
            }
            "JMPC" => {
                expect_operands(opcode, &operands, 1)?;
                Ok(Instruction::JumpCond {
                    target: parse_target(operands[0])?,
                })
            }
            "MEM" => {
                expect_operands(opcode, &operands, 3)?;
                let addr = if operands[0] == "IO_OUT" {
                    MemAddr::IoOut
                } else {
                    MemAddr::Reg(operands[0].parse()?)
                };
                let mode = match operands[2] {
                    "LOAD" => MemMode::Load,
                    "STOR" => MemMode::Stor,
                    other => return Err(InstructionParseError::InvalidOperand(other.into())),
                };
                Ok(Instruction::Mem {
                    addr,
                    src: operands[1].parse()?,
                    mode,
                })
            }
            other => Err(InstructionParseError::UnknownOpcode(other.to_string())),
        }
    }
}

fn expect_operands(
    opcode: &str,
    operands: &[&str],
    expected: usize,
) -> Result<(), InstructionParseError> {
    if operands.len() == expected {
        Ok(())
    } else {
        Err(InstructionParseError::OperandCount {
            opcode: opcode.to_string(),
            expected,
            got: operands.len(),
        })
    }
}

fn parse_int(text: &str) -> Result<i64, InstructionParseError> {
    text.parse::<i64>()
        .map_err(|_| InstructionParseError::InvalidOperand(text.to_string()))
}

fn parse_target(text: &str) -> Result<usize, InstructionParseError> {
    text.parse::<usize>()
        .map_err(|_| InstructionParseError::InvalidOperand(text.to_string()))
}

/// Render a program, one instruction per line with a trailing newline.
///
/// The line order here is what jump operands index into.
pub fn render_program(instructions: &[Instruction]) -> String {
    let mut out = String::new();
    for instruction in instructions {
        out.push_str(&instruction.to_string());
        out.push('\n');
    }
    out
}

/// Parse a rendered program back into its instruction list.
///
/// Blank lines are skipped; errors carry the 0-based source line they
/// occurred on.
pub fn parse_program(text: &str) -> Result<Vec<Instruction>, InstructionParseError> {
    let mut program = Vec::new();
    for (line, raw) in text.lines().enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        let instruction = trimmed
            .parse::<Instruction>()
            .map_err(|err| err.at_line(line))?;
        program.push(instruction);
    }
    Ok(program)
}
