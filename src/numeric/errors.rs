// ============================================================================
// Numeric Errors
// Error types for precision-bounded decimal arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur in the scalar layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result exceeded the decimal range
    Overflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Input string or value is invalid
    InvalidInput,
    /// Floating-point input was NaN or infinite
    NonFinite,
    /// Argument outside the function's domain (sqrt of a negative, acos beyond ±1)
    OutOfDomain,
    /// Requested significant-digit count is not supported
    InvalidPrecision,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded decimal range")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::NonFinite => write!(f, "non-finite input: NaN or infinity"),
            NumericError::OutOfDomain => write!(f, "argument outside function domain"),
            NumericError::InvalidPrecision => {
                write!(f, "precision must be between 1 and 28 significant digits")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
