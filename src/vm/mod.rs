//! # Virtual Machine Module
//!
//! This module contains all things related to the machine itself: the
//! value representation and its kind classifier, the instruction set, the
//! register file and bounded data stack, the output devices, and the
//! interpreter that drives them.
//!
//! ### What is this machine?
//!
//! A three-register machine (`ax`, `bx`, `cx`) with a bounded LIFO data
//! stack. There is no instruction pointer to speak of: programs are
//! straight-line, one instruction per source line, and the interpreter
//! executes each line as it is read.
//!
//! ### What data can it use?
//!
//! Registers and stack cells hold [`Value`]s, which are stored as literal
//! text. Whether a value behaves as an integer, a float, or a string is
//! decided by classifying its text at the moment an arithmetic
//! instruction reads it, not by a stored tag.

mod device;
pub use self::device::*;

mod interpreter;
pub use self::interpreter::*;

mod machine;
pub use self::machine::*;

mod op;
pub use self::op::*;

pub mod value;
pub use self::value::{Kind, Value};

use core::fmt;

/// An error produced while executing a single instruction.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// Arithmetic mixed a string operand with a numeric one, or applied
    /// an operation other than `add` to two strings.
    TypeMismatch {
        /// The opcode that was applied.
        op: Opcode,
        /// The destination register's value at the time.
        lhs: Value,
        /// The resolved source operand.
        rhs: Value,
    },
    /// Integer division by zero.
    DivisionByZero,
    /// A push onto a full stack.
    StackOverflow,
    /// A pop from an empty stack.
    StackUnderflow,
    /// The output device rejected a write.
    Device(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::TypeMismatch { op, lhs, rhs } => {
                write!(f, "type mismatch: can't {} {} and {}", op, lhs.kind(), rhs.kind())
            }
            Error::DivisionByZero => write!(f, "division by zero"),
            Error::StackOverflow => write!(f, "stack full, can't push"),
            Error::StackUnderflow => write!(f, "stack empty, can't pop"),
            Error::Device(e) => write!(f, "device error: {}", e),
        }
    }
}
