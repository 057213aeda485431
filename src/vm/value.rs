//! Machine values and the kind classifier.
//!
//! A [`Value`] is stored as the literal text it was written with: `-42`,
//! `3.5e+10`, or `"hello"` (a quoted string keeps its surrounding
//! quotes). Nothing records what kind of value the text denotes; instead,
//! [`classify`] derives the kind from the text every time arithmetic
//! needs it. Classification is a total, pure function: any text that is
//! not one of the numeric forms is a string, including the empty text
//! that registers and stack cells start out with.

use core::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde_derive::{Deserialize, Serialize};

lazy_static! {
    /// A fractional literal, with an optional scientific-notation
    /// suffix: `3.5`, `-.5`, `1.0e+10`.
    static ref FLOAT: Regex = Regex::new(r"^-?\d*\.\d+(?:e[+-]?\d+)?$").unwrap();
    /// An integer mantissa with a negative exponent: `3e-5`. A positive
    /// exponent on an integer mantissa is NOT a float form (`3e5` is a
    /// string).
    static ref FLOAT_NEG_EXP: Regex = Regex::new(r"^-?\d+e-\d+$").unwrap();
    /// An integer literal: `42`, `-7`.
    static ref INTEGER: Regex = Regex::new(r"^-?\d+$").unwrap();
}

/// The effective type of a [`Value`], derived from its text on demand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    /// Text shaped like an integer literal.
    Int,
    /// Text shaped like a float literal, plain or scientific.
    Float,
    /// Anything else, including quoted strings and empty text.
    Str,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Kind::Int => write!(f, "integer"),
            Kind::Float => write!(f, "float"),
            Kind::Str => write!(f, "string"),
        }
    }
}

/// Decide which kind of data a token's text denotes. The float forms are
/// tried first, then the integer form; everything else is a string.
pub fn classify(text: &str) -> Kind {
    if FLOAT.is_match(text) || FLOAT_NEG_EXP.is_match(text) {
        Kind::Float
    } else if INTEGER.is_match(text) {
        Kind::Int
    } else {
        Kind::Str
    }
}

/// Is this token a quoted-string literal: non-empty text between double
/// quotes?
pub fn is_quoted_string(token: &str) -> bool {
    token.len() >= 3 && token.starts_with('"') && token.ends_with('"')
}

/// A single machine value: literal text with a lazily derived [`Kind`].
///
/// The default value is the empty text, which is what every register and
/// stack cell holds before its first write. There is no way to write an
/// empty string literal in a program, so empty text only ever means
/// "never written"; the classifier files it under [`Kind::Str`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Value(String);

impl Value {
    /// Wrap literal text as a value.
    pub fn new(text: impl ToString) -> Self {
        Self(text.to_string())
    }

    /// The literal text of this value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classify this value's text.
    pub fn kind(&self) -> Kind {
        classify(&self.0)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self(text)
    }
}
