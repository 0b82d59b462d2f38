//! Core types shared by the constant and function modules.

use core::fmt;

/// Error type for the fallible numeric functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// `min`/`max` called on an empty container or range.
    EmptyInput,
    /// Integer power requested with an exponent below zero.
    NegativeExponent,
    /// Result is not representable in the target type.
    Overflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => {
                write!(f, "empty input: at least one element is required")
            }
            Error::NegativeExponent => {
                write!(f, "negative exponent: only exponents >= 0 are supported")
            }
            Error::Overflow => {
                write!(f, "overflow: result magnitude exceeds representable range")
            }
        }
    }
}

impl core::error::Error for Error {}
