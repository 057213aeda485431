//! # The Simplified Assembler Interpreter
//!
//! This crate implements an interpreter for a small assembly-like language
//! with three registers (`ax`, `bx`, `cx`) and a bounded data stack.
//!
//! Every value the machine holds is stored as its literal text; the
//! effective kind of a value (integer, float, or string) is derived on
//! demand by a pure classifier whenever arithmetic needs it. This makes
//! `mov` and the stack operations completely untyped, while `add`, `sub`,
//! `mul`, and `div` coerce their operands at the moment they run.
//!
//! Programs are one instruction per line. There is no control flow: lines
//! run top to bottom, and the first bad line (unknown command, malformed
//! operands, or a domain error like a stack overflow) halts the run with
//! the offending line number.
//!
//! ## Index
//!
//! 1. [The Line Parser](./parse/index.html)
//! 2. [The Virtual Machine](./vm/index.html)
pub mod parse;
pub mod vm;

/// The number of values the data stack can hold. Pushing onto a stack
/// already holding this many values is a stack overflow.
pub const STACK_CAPACITY: usize = 100;
