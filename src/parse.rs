//! # The Line Parser Module
//!
//! Turns one raw line of program text into an instruction. Parsing is a
//! two-step affair: the leading word of the line selects an opcode, and
//! the rest of the line must fit that opcode's operand grammar:
//!
//! | form                         | opcodes                             |
//! |------------------------------|-------------------------------------|
//! | `OP R, X` (strings allowed)  | `mov`, `add`                        |
//! | `OP R, X` (numeric/register) | `sub`, `mul`, `div`                 |
//! | `OP X` (strings allowed)     | `push`, `print`                     |
//! | `OP R`                       | `pop`                               |
//!
//! where `R` is a register name and `X` is a register name, an integer
//! literal, a float literal (plain or scientific), or a double-quoted
//! string. Two-operand forms separate their operands with exactly `", "`;
//! a quoted string keeps its quotes and may itself contain the separator.
//!
//! The two ways a line can fail are kept distinct: a leading word that
//! names no opcode is an [`Error::UnknownCommand`], while a recognized
//! opcode whose operands don't fit is an [`Error::InvalidArguments`].
//! An empty line parses to no instruction at all.

use core::fmt;
use std::str::FromStr;

use crate::vm::value::{classify, is_quoted_string};
use crate::vm::{Kind, Op, Opcode, Operand, Register, Value};

/// A syntax error for a single line.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// The leading token of the line names no known opcode.
    UnknownCommand(String),
    /// The opcode is recognized, but the operands don't fit its grammar.
    InvalidArguments(Opcode, String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnknownCommand(line) => write!(f, "unknown command: {}", line),
            Error::InvalidArguments(opcode, line) => {
                write!(f, "invalid argument(s) to '{}': {}", opcode, line)
            }
        }
    }
}

/// Parse one line of program text. An empty line is valid and yields no
/// instruction.
pub fn parse_line(line: &str) -> Result<Option<Op>, Error> {
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(' ') {
        Some((word, rest)) => (word, Some(rest)),
        None => (line, None),
    };
    let opcode =
        Opcode::from_str(word).map_err(|_| Error::UnknownCommand(line.to_string()))?;
    match operands(opcode, rest) {
        Some(op) => Ok(Some(op)),
        None => Err(Error::InvalidArguments(opcode, line.to_string())),
    }
}

/// Parse the operand text for a recognized opcode, or nothing if it
/// doesn't fit the opcode's grammar.
fn operands(opcode: Opcode, rest: Option<&str>) -> Option<Op> {
    let rest = rest?;
    match opcode {
        Opcode::Mov => {
            let (dst, src) = pair(rest, true)?;
            Some(Op::Mov { dst, src })
        }
        Opcode::Push => Some(Op::Push(operand(rest, true)?)),
        Opcode::Pop => Some(Op::Pop(Register::from_str(rest).ok()?)),
        Opcode::Add => {
            let (dst, src) = pair(rest, true)?;
            Some(Op::Add { dst, src })
        }
        Opcode::Sub => {
            let (dst, src) = pair(rest, false)?;
            Some(Op::Sub { dst, src })
        }
        Opcode::Mul => {
            let (dst, src) = pair(rest, false)?;
            Some(Op::Mul { dst, src })
        }
        Opcode::Div => {
            let (dst, src) = pair(rest, false)?;
            Some(Op::Div { dst, src })
        }
        Opcode::Print => Some(Op::Print(operand(rest, true)?)),
    }
}

/// Parse `R, X` operand text for the two-operand opcodes. The split is
/// on the first `", "`, so a quoted source operand containing the
/// separator stays whole.
fn pair(rest: &str, strings_allowed: bool) -> Option<(Register, Operand)> {
    let (dst, src) = rest.split_once(", ")?;
    Some((Register::from_str(dst).ok()?, operand(src, strings_allowed)?))
}

/// Parse one source operand: a register name, a numeric literal, or
/// (where the grammar allows it) a quoted string.
fn operand(token: &str, strings_allowed: bool) -> Option<Operand> {
    if let Ok(reg) = Register::from_str(token) {
        return Some(Operand::Register(reg));
    }
    match classify(token) {
        Kind::Int | Kind::Float => Some(Operand::Literal(Value::new(token))),
        Kind::Str if strings_allowed && is_quoted_string(token) => {
            Some(Operand::Literal(Value::new(token)))
        }
        Kind::Str => None,
    }
}
