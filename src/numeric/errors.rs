// ============================================================================
// Numeric Errors
// Error types for decimal literal validation and conversion
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a string was rejected as a decimal literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LiteralError {
    /// Input was empty
    Empty,
    /// Input was a bare `+` or `-`
    SignOnly,
    /// Character outside `+`, `-`, `.` and `0-9`
    InvalidCharacter { ch: char, index: usize },
    /// More than one decimal point
    MultiplePoints,
    /// No digit before the decimal point (or no digit at all)
    MissingIntegerDigits,
    /// Decimal point present but no digit after it
    MissingFractionDigits,
}

impl fmt::Display for LiteralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralError::Empty => write!(f, "empty input"),
            LiteralError::SignOnly => write!(f, "sign without digits"),
            LiteralError::InvalidCharacter { ch, index } => {
                write!(f, "unexpected character {:?} at position {}", ch, index)
            },
            LiteralError::MultiplePoints => write!(f, "more than one decimal point"),
            LiteralError::MissingIntegerDigits => write!(f, "missing digits before decimal point"),
            LiteralError::MissingFractionDigits => write!(f, "missing digits after decimal point"),
        }
    }
}

/// Errors that can occur at the boundaries of the decimal engine.
///
/// The arithmetic itself cannot fail: sums and differences of decimal
/// strings grow by at most one digit and never overflow.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input string is not a plain signed decimal literal
    InvalidLiteral {
        literal: String,
        reason: LiteralError,
    },
    /// Value does not fit the target representation
    Overflow,
    /// Conversion would lose significant digits
    PrecisionLoss,
}

impl NumericError {
    pub(crate) fn invalid(literal: &str, reason: LiteralError) -> Self {
        NumericError::InvalidLiteral {
            literal: literal.to_string(),
            reason,
        }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidLiteral { literal, reason } => {
                write!(f, "invalid number {:?}: {}", literal, reason)
            },
            NumericError::Overflow => {
                write!(f, "overflow: value exceeds the target representation")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
