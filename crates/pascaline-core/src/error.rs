//! Unified error types for Pascaline.
//!
//! One enum per failure domain, plus a top-level wrapper for callers that
//! drive the whole pipeline:
//!
//! ```text
//! PascalineError (top-level wrapper)
//! ├── CompileError           - register allocation / backpatch failures
//! ├── EvalError              - tree-walking interpreter failures
//! ├── InstructionParseError  - reading instruction text back in
//! └── VmError                - execution of an instruction stream
//! ```
//!
//! Each domain error can be handled directly, or converted into
//! [`PascalineError`] with `?` for unified handling.

use thiserror::Error;

use crate::Span;
use crate::isa::Reg;

// ============================================================================
// Compilation Errors
// ============================================================================

/// Errors raised while lowering an AST into instructions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    /// The register pool ran dry. Spilling is out of scope, so this is fatal.
    #[error("at {span}: register pool exhausted")]
    RegisterExhaustion {
        /// The expression that needed one more register.
        span: Span,
    },

    /// A register was returned to the pool while already free.
    ///
    /// Always an allocator-bookkeeping bug in the lowering code, never a
    /// property of the input program.
    #[error("at {span}: register {reg} freed while already free")]
    DoubleFree {
        /// The register that was freed twice.
        reg: Reg,
        /// The construct being lowered when it happened.
        span: Span,
    },

    /// A reserved jump slot was never patched with a target.
    ///
    /// Indicates a lowering path that reserved a slot and forgot to resolve
    /// it; well-formed statement lowering can never produce this.
    #[error("jump slot at line {line} was never patched")]
    UnresolvedJump {
        /// The line the unpatched slot occupies.
        line: usize,
    },
}

impl CompileError {
    /// Get the span where this error occurred.
    pub fn span(&self) -> Span {
        match self {
            CompileError::RegisterExhaustion { span } => *span,
            CompileError::DoubleFree { span, .. } => *span,
            CompileError::UnresolvedJump { .. } => Span::default(),
        }
    }
}

// ============================================================================
// Interpreter Errors
// ============================================================================

/// Errors raised by the tree-walking interpreter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Division by zero.
    #[error("at {span}: division by zero")]
    DivisionByZero {
        /// The division expression.
        span: Span,
    },

    /// A variable was read before anything was assigned to it.
    #[error("at {span}: undefined variable '{name}'")]
    UndefinedVariable {
        /// The variable name.
        name: String,
        /// Where the variable was referenced.
        span: Span,
    },
}

impl EvalError {
    /// Get the span where this error occurred.
    pub fn span(&self) -> Span {
        match self {
            EvalError::DivisionByZero { span } => *span,
            EvalError::UndefinedVariable { span, .. } => *span,
        }
    }
}

// ============================================================================
// Instruction Text Errors
// ============================================================================

/// Errors raised while parsing rendered instruction text back into
/// structured instructions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InstructionParseError {
    /// The line is not a parenthesized instruction tuple.
    #[error("not an instruction tuple: '{0}'")]
    NotATuple(String),

    /// The tuple's first element is not a known opcode.
    #[error("unknown opcode '{0}'")]
    UnknownOpcode(String),

    /// The tuple has the wrong number of operands for its opcode.
    #[error("{opcode} expects {expected} operand(s), got {got}")]
    OperandCount {
        /// The opcode mnemonic.
        opcode: String,
        /// How many operands the opcode takes.
        expected: usize,
        /// How many the tuple carried.
        got: usize,
    },

    /// An operand that must be a register is not a valid register name.
    #[error("invalid register '{0}'")]
    InvalidRegister(String),

    /// An operand that must be an integer, sub-tag, or target is malformed.
    #[error("invalid operand '{0}'")]
    InvalidOperand(String),

    /// A parse error annotated with the program line it occurred on.
    #[error("line {line}: {source}")]
    AtLine {
        /// 0-based line index into the program text.
        line: usize,
        /// The underlying error.
        #[source]
        source: Box<InstructionParseError>,
    },
}

impl InstructionParseError {
    /// Wrap this error with the program line it occurred on.
    pub fn at_line(self, line: usize) -> Self {
        InstructionParseError::AtLine {
            line,
            source: Box::new(self),
        }
    }
}

// ============================================================================
// VM Errors
// ============================================================================

/// Errors raised while executing an instruction stream.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VmError {
    /// A `MATH … DIV` instruction divided by zero.
    #[error("line {line}: division by zero")]
    DivisionByZero {
        /// The line of the offending instruction.
        line: usize,
    },

    /// A jump targeted a line outside the loaded program.
    #[error("line {line}: jump to invalid line {target}")]
    InvalidTarget {
        /// The out-of-range target.
        target: usize,
        /// The line of the jump instruction.
        line: usize,
    },

    /// A bounded run exceeded its step budget before halting.
    #[error("execution exceeded {limit} steps without halting")]
    StepLimit {
        /// The step budget that was exceeded.
        limit: usize,
    },
}

// ============================================================================
// Unified Error Type
// ============================================================================

/// The unified error type for the compile / interpret / execute pipeline.
///
/// Each variant uses `#[from]`, so `?` converts domain errors automatically:
///
/// ```ignore
/// fn run(program: &Program) -> Result<Vec<i64>, PascalineError> {
///     let compiled = Compiler::compile(program)?; // CompileError -> PascalineError
///     let mut machine = Machine::new();
///     machine.run(compiled.instructions())?;      // VmError -> PascalineError
///     Ok(machine.take_output())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PascalineError {
    /// A compilation error.
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// An interpreter error.
    #[error(transparent)]
    Eval(#[from] EvalError),

    /// An instruction-text parse error.
    #[error(transparent)]
    Parse(#[from] InstructionParseError),

    /// A VM execution error.
    #[error(transparent)]
    Vm(#[from] VmError),
}

impl PascalineError {
    /// Check if this is a compilation error.
    pub fn is_compile(&self) -> bool {
        matches!(self, PascalineError::Compile(_))
    }

    /// Check if this is an interpreter error.
    pub fn is_eval(&self) -> bool {
        matches!(self, PascalineError::Eval(_))
    }

    /// Check if this is an instruction-text parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, PascalineError::Parse(_))
    }

    /// Check if this is a VM execution error.
    pub fn is_vm(&self) -> bool {
        matches!(self, PascalineError::Vm(_))
    }
}
