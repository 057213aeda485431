//! The instruction set of the machine.
//!
//! Instructions are parsed one per source line and executed immediately;
//! a program is never materialized as a whole, so there is no program
//! type here, only the single [`Op`].

use core::fmt;
use std::str::FromStr;

use serde_derive::{Deserialize, Serialize};

use super::Value;

/// One of the three named storage cells of the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Register {
    Ax,
    Bx,
    Cx,
}

impl Register {
    /// Every register, in file order.
    pub const ALL: [Register; 3] = [Register::Ax, Register::Bx, Register::Cx];

    /// The assembly name of this register.
    pub fn name(&self) -> &'static str {
        match self {
            Register::Ax => "ax",
            Register::Bx => "bx",
            Register::Cx => "cx",
        }
    }
}

impl FromStr for Register {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ax" => Ok(Register::Ax),
            "bx" => Ok(Register::Bx),
            "cx" => Ok(Register::Cx),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The keyword at the start of an instruction line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    Mov,
    Push,
    Pop,
    Add,
    Sub,
    Mul,
    Div,
    Print,
}

impl Opcode {
    /// The keyword itself, lowercase and case-sensitive.
    pub fn name(&self) -> &'static str {
        match self {
            Opcode::Mov => "mov",
            Opcode::Push => "push",
            Opcode::Pop => "pop",
            Opcode::Add => "add",
            Opcode::Sub => "sub",
            Opcode::Mul => "mul",
            Opcode::Div => "div",
            Opcode::Print => "print",
        }
    }
}

impl FromStr for Opcode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mov" => Ok(Opcode::Mov),
            "push" => Ok(Opcode::Push),
            "pop" => Ok(Opcode::Pop),
            "add" => Ok(Opcode::Add),
            "sub" => Ok(Opcode::Sub),
            "mul" => Ok(Opcode::Mul),
            "div" => Ok(Opcode::Div),
            "print" => Ok(Opcode::Print),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An instruction operand: a register name, or a literal value stored
/// verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    /// A register, to be read when the instruction runs.
    Register(Register),
    /// A literal token: an integer, a float, or a quoted string.
    Literal(Value),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operand::Register(reg) => write!(f, "{}", reg),
            Operand::Literal(value) => write!(f, "{}", value),
        }
    }
}

/// A single parsed instruction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Op {
    /// Store the resolved source operand into the destination register.
    Mov { dst: Register, src: Operand },

    /// Push the resolved source operand onto the data stack. A literal
    /// source (not a register) is also echoed to the output device.
    Push(Operand),

    /// Pop the top of the data stack into the destination register.
    Pop(Register),

    /// Add the source to the destination register. Two strings
    /// concatenate (with the doubled quotes at the seam removed); two
    /// integers stay integer; any float promotes both sides to float;
    /// a string mixed with a number is a type mismatch.
    Add { dst: Register, src: Operand },

    /// Subtract the source from the destination register, with the same
    /// coercion as `Add` except that strings never subtract.
    Sub { dst: Register, src: Operand },

    /// Multiply the destination register by the source; numeric only.
    Mul { dst: Register, src: Operand },

    /// Divide the destination register by the source; numeric only, and
    /// integer division by zero is an error.
    Div { dst: Register, src: Operand },

    /// Write the resolved source operand to the output device.
    Print(Operand),
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Op::Mov { dst, src } => write!(f, "mov {}, {}", dst, src),
            Op::Push(src) => write!(f, "push {}", src),
            Op::Pop(dst) => write!(f, "pop {}", dst),
            Op::Add { dst, src } => write!(f, "add {}, {}", dst, src),
            Op::Sub { dst, src } => write!(f, "sub {}, {}", dst, src),
            Op::Mul { dst, src } => write!(f, "mul {}, {}", dst, src),
            Op::Div { dst, src } => write!(f, "div {}, {}", dst, src),
            Op::Print(src) => write!(f, "print {}", src),
        }
    }
}
