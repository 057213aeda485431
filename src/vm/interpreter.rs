//! # The Interpreter Module
//!
//! The command processor of the machine. An [`Interpreter`] owns the
//! machine state and an output [`Device`], and executes program text one
//! line at a time: parse the line, run its instruction, move on. The
//! first failing line halts the whole run; there is no recovery or
//! skip-and-continue.
//!
//! The arithmetic engine also lives here: it resolves both operands to
//! concrete values, classifies them, and applies the coercion rules
//! (string concatenation for `add`, integer arithmetic when both sides
//! are integers, float promotion otherwise, and a type mismatch whenever
//! a string meets a number).

use core::fmt;

use log::{error, trace};

use crate::parse::{self, parse_line};

use super::{Device, Error, Kind, Machine, Op, Opcode, Operand, Register, StandardDevice, Value};

/// Why a line halted the run: it failed to parse, or its instruction
/// failed while executing.
#[derive(Clone, Debug, PartialEq)]
pub enum Cause {
    /// The line did not parse as an instruction.
    Syntax(parse::Error),
    /// The instruction failed with a domain error.
    Exec(Error),
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Cause::Syntax(e) => write!(f, "{}", e),
            Cause::Exec(e) => write!(f, "{}", e),
        }
    }
}

/// An error that halted a run, carrying the offending line.
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeError {
    /// 1-based number of the line that failed.
    pub line: usize,
    /// The text of the line that failed.
    pub text: String,
    /// What went wrong.
    pub cause: Cause,
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (line {}: {})", self.cause, self.line, self.text)
    }
}

impl Default for Interpreter<StandardDevice> {
    fn default() -> Self {
        Self::new(StandardDevice)
    }
}

/// The interpreter which runs programs against the machine.
pub struct Interpreter<T>
where
    T: Device,
{
    /// The machine state: registers and the data stack.
    machine: Machine,
    /// The interpreter's output device.
    device: T,
}

impl<T> Interpreter<T>
where
    T: Device,
{
    pub fn new(device: T) -> Self {
        Self {
            machine: Machine::new(),
            device,
        }
    }

    /// Run a whole program, one instruction per line, halting at the
    /// first line that fails. Line numbers in the error are 1-based.
    pub fn run(&mut self, source: &str) -> Result<(), RuntimeError> {
        for (number, text) in source.lines().enumerate() {
            self.step(text).map_err(|cause| {
                error!("halting at line {}: {}", number + 1, text);
                RuntimeError {
                    line: number + 1,
                    text: text.to_string(),
                    cause,
                }
            })?;
        }
        Ok(())
    }

    /// Parse and execute a single line. An empty line is a no-op.
    pub fn step(&mut self, line: &str) -> Result<(), Cause> {
        match parse_line(line).map_err(Cause::Syntax)? {
            Some(op) => {
                trace!("executing {}", op);
                self.execute(&op).map_err(Cause::Exec)
            }
            None => Ok(()),
        }
    }

    /// The machine state, for inspection.
    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    /// The output device, for inspection.
    pub fn device(&self) -> &T {
        &self.device
    }

    /// Consume the interpreter and take its device back.
    pub fn into_device(self) -> T {
        self.device
    }

    fn execute(&mut self, op: &Op) -> Result<(), Error> {
        match op {
            Op::Mov { dst, src } => {
                let value = self.resolve(src);
                self.machine.set(*dst, value);
                Ok(())
            }
            Op::Push(src) => {
                if self.machine.is_full() {
                    return Err(Error::StackOverflow);
                }
                // A literal push is echoed before the value lands on the
                // stack; a register push is silent.
                if let Operand::Literal(text) = src {
                    self.device.put(text.as_str()).map_err(Error::Device)?;
                }
                let value = self.resolve(src);
                self.machine.push(value)
            }
            Op::Pop(dst) => {
                let value = self.machine.pop()?;
                self.machine.set(*dst, value);
                Ok(())
            }
            Op::Add { dst, src } => self.arithmetic(Arith::Add, *dst, src),
            Op::Sub { dst, src } => self.arithmetic(Arith::Sub, *dst, src),
            Op::Mul { dst, src } => self.arithmetic(Arith::Mul, *dst, src),
            Op::Div { dst, src } => self.arithmetic(Arith::Div, *dst, src),
            Op::Print(src) => {
                let value = self.resolve(src);
                self.device.put(value.as_str()).map_err(Error::Device)
            }
        }
    }

    /// Resolve an operand to a concrete value: a register's current
    /// contents, or the literal itself.
    fn resolve(&self, operand: &Operand) -> Value {
        match operand {
            Operand::Register(reg) => self.machine.get(*reg).clone(),
            Operand::Literal(value) => value.clone(),
        }
    }

    fn arithmetic(&mut self, op: Arith, dst: Register, src: &Operand) -> Result<(), Error> {
        let lhs = self.machine.get(dst).clone();
        let rhs = self.resolve(src);
        let result = apply(op, &lhs, &rhs)?;
        self.machine.set(dst, result);
        Ok(())
    }
}

/// A binary arithmetic operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Arith {
    Add,
    Sub,
    Mul,
    Div,
}

impl Arith {
    fn opcode(self) -> Opcode {
        match self {
            Arith::Add => Opcode::Add,
            Arith::Sub => Opcode::Sub,
            Arith::Mul => Opcode::Mul,
            Arith::Div => Opcode::Div,
        }
    }
}

/// Apply an arithmetic operation to two values, following the coercion
/// rules. Only `add` combines two strings; a string never combines with
/// a number; two integers stay integers; everything else is carried out
/// in floating point.
fn apply(op: Arith, lhs: &Value, rhs: &Value) -> Result<Value, Error> {
    match (lhs.kind(), rhs.kind()) {
        (Kind::Str, Kind::Str) if op == Arith::Add => Ok(concat(lhs, rhs)),
        (Kind::Str, _) | (_, Kind::Str) => Err(mismatch(op, lhs, rhs)),
        (Kind::Int, Kind::Int) => {
            match (lhs.as_str().parse::<i64>(), rhs.as_str().parse::<i64>()) {
                (Ok(a), Ok(b)) => integer(op, a, b).map(Value::new),
                // An integer token too wide for 64 bits carries on in
                // floating point.
                _ => floats(op, lhs, rhs),
            }
        }
        _ => floats(op, lhs, rhs),
    }
}

/// Join two string values, removing the doubled quote characters at the
/// seam: `"foo"` plus `"bar"` is `"foobar"`, not `"foo""bar"`.
fn concat(lhs: &Value, rhs: &Value) -> Value {
    Value::new(format!("{}{}", lhs, rhs).replace("\"\"", ""))
}

fn integer(op: Arith, a: i64, b: i64) -> Result<i64, Error> {
    match op {
        Arith::Add => Ok(a.wrapping_add(b)),
        Arith::Sub => Ok(a.wrapping_sub(b)),
        Arith::Mul => Ok(a.wrapping_mul(b)),
        Arith::Div => a.checked_div(b).ok_or(Error::DivisionByZero),
    }
}

fn floats(op: Arith, lhs: &Value, rhs: &Value) -> Result<Value, Error> {
    match (lhs.as_str().parse::<f64>(), rhs.as_str().parse::<f64>()) {
        // Debug formatting keeps a `.` or an exponent on the result, so
        // it classifies as a float when read back.
        (Ok(a), Ok(b)) => Ok(Value::new(format!("{:?}", float(op, a, b)))),
        _ => Err(mismatch(op, lhs, rhs)),
    }
}

fn float(op: Arith, a: f64, b: f64) -> f64 {
    match op {
        Arith::Add => a + b,
        Arith::Sub => a - b,
        Arith::Mul => a * b,
        Arith::Div => a / b,
    }
}

fn mismatch(op: Arith, lhs: &Value, rhs: &Value) -> Error {
    Error::TypeMismatch {
        op: op.opcode(),
        lhs: lhs.clone(),
        rhs: rhs.clone(),
    }
}
