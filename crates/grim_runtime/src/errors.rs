//! Error types and message constants used throughout the runtime.
//!
//! Precondition violations inside the numeric tower are fatal and panic with
//! one of the `messages` constants. `NumericError` is the recoverable form
//! returned at the boundary (built-ins and the `numeric::checked` layer).

use grim_core::ValueType;
use thiserror::Error;

pub mod messages {
    pub const NOT_A_NUMBER: &str = "Not a number";
    pub const NOT_A_REAL: &str = "Not a real number";
    pub const NOT_AN_INTEGER: &str = "Not an integer";
    pub const NOT_A_FLOAT: &str = "Not a float";
    pub const NOT_A_RATIONAL: &str = "Not a rational";
    pub const NOT_A_COMPLEX: &str = "Not a complex number";
    pub const NOT_A_SYMBOL: &str = "Not a symbol";
    pub const ZERO_DENOMINATOR: &str = "Zero denominator";
    pub const NOT_EXTRACTABLE: &str = "Integer does not fit the native word";
    pub const INVALID_DIGIT: &str = "Invalid digit";
    pub const INVALID_FLOAT: &str = "Invalid float literal";
    pub const UNSUPPORTED_BASE: &str = "Unsupported base";
    pub const EXPONENT_TOO_LARGE: &str = "Exponent too large";
    pub const RECLAIMED_CELL: &str = "Cell was garbage collected";
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumericError {
    #[error("{op}: expected number, got {found}")]
    NotANumber { op: &'static str, found: ValueType },

    #[error("{op}: expected integer, got {found}")]
    NotAnInteger { op: &'static str, found: ValueType },

    #[error("{op}: expected real number, got complex")]
    NotAReal { op: &'static str },

    #[error("zero denominator")]
    ZeroDenominator,

    #[error("integer does not fit the native word")]
    NotExtractable,

    #[error("invalid digit in {text:?} for base {base}")]
    InvalidDigit { text: String, base: u32 },

    #[error("invalid float literal {0:?}")]
    InvalidFloat(String),

    #[error("unsupported base {0}")]
    UnsupportedBase(u32),
}

pub type NumericResult<T> = Result<T, NumericError>;
