//! Operator definitions shared between the AST and the instruction set.
//!
//! The same operator enums serve double duty: AST nodes carry them for
//! evaluation and pretty-printing, and `MATH`/`COMP` instructions carry them
//! as their sub-tag. Keeping one definition guarantees the interpreter and
//! the emitted code cannot disagree about what an operator means.

use std::fmt;

/// Arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/` (truncating toward zero)
    Div,
}

impl ArithOp {
    /// The source-level symbol for this operator.
    pub fn symbol(&self) -> &'static str {
        use ArithOp::*;
        match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
        }
    }

    /// The instruction-set mnemonic used as the `MATH` sub-tag.
    pub fn mnemonic(&self) -> &'static str {
        use ArithOp::*;
        match self {
            Add => "ADD",
            Sub => "SUB",
            Mul => "MULT",
            Div => "DIV",
        }
    }

    /// Parse an instruction-set mnemonic back into an operator.
    pub fn from_mnemonic(text: &str) -> Option<Self> {
        use ArithOp::*;
        Some(match text {
            "ADD" => Add,
            "SUB" => Sub,
            "MULT" => Mul,
            "DIV" => Div,
            _ => return None,
        })
    }

    /// Apply this operator to two 64-bit values.
    ///
    /// Arithmetic wraps on overflow (registers are fixed-width), division
    /// truncates toward zero. Returns `None` for division by zero; callers
    /// surface that with their own error context.
    pub fn apply(&self, left: i64, right: i64) -> Option<i64> {
        use ArithOp::*;
        match self {
            Add => Some(left.wrapping_add(right)),
            Sub => Some(left.wrapping_sub(right)),
            Mul => Some(left.wrapping_mul(right)),
            Div => {
                if right == 0 {
                    None
                } else {
                    Some(left.wrapping_div(right))
                }
            }
        }
    }
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Comparison operators.
///
/// A comparison never produces a value register; compiled code materializes
/// it only as the condition flag behind a `COMP` instruction, and the AST
/// only admits comparisons in control-flow condition position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    Gte,
    /// `<=`
    Lte,
}

impl CompareOp {
    /// The source-level symbol for this operator.
    pub fn symbol(&self) -> &'static str {
        use CompareOp::*;
        match self {
            Gt => ">",
            Lt => "<",
            Gte => ">=",
            Lte => "<=",
        }
    }

    /// The instruction-set mnemonic used as the `COMP` sub-tag.
    pub fn mnemonic(&self) -> &'static str {
        use CompareOp::*;
        match self {
            Gt => "GT",
            Lt => "LT",
            Gte => "GTE",
            Lte => "LTE",
        }
    }

    /// Parse an instruction-set mnemonic back into an operator.
    pub fn from_mnemonic(text: &str) -> Option<Self> {
        use CompareOp::*;
        Some(match text {
            "GT" => Gt,
            "LT" => Lt,
            "GTE" => Gte,
            "LTE" => Lte,
            _ => return None,
        })
    }

    /// Apply this operator to two 64-bit values.
    pub fn apply(&self, left: i64, right: i64) -> bool {
        use CompareOp::*;
        match self {
            Gt => left > right,
            Lt => left < right,
            Gte => left >= right,
            Lte => left <= right,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
