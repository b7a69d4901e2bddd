// ============================================================================
// Vector Errors
// Error taxonomy for vector construction and geometric operations
// ============================================================================

use crate::numeric::NumericError;
use std::fmt;

/// Vector operation that raised an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    DotProduct,
    Cross,
    Normalize,
    Angle,
    Projection,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::DotProduct => "dot product",
            Operation::Cross => "cross product",
            Operation::Normalize => "normalize",
            Operation::Angle => "angle",
            Operation::Projection => "projection",
        };
        f.write_str(name)
    }
}

/// Errors raised by [`Vector`](super::Vector) construction and operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// Malformed or empty input, invalid configuration, or incompatible operand
    InvalidArgument(String),

    /// Operand dimensions do not fit the operation
    DimensionMismatch {
        operation: Operation,
        left: usize,
        right: usize,
    },

    /// Operation is undefined for the zero vector
    DegenerateOperation { operation: Operation },

    /// Scalar arithmetic failed
    Numeric(NumericError),
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::InvalidArgument(reason) => write!(f, "invalid argument: {}", reason),
            VectorError::DimensionMismatch {
                operation: Operation::Cross,
                left,
                right,
            } => write!(
                f,
                "vectors must be three dimensional (got {} and {})",
                left, right
            ),
            VectorError::DimensionMismatch {
                operation: Operation::Add,
                left,
                right,
            } => write!(
                f,
                "cannot add vectors of different sizes ({} and {})",
                left, right
            ),
            VectorError::DimensionMismatch {
                operation: Operation::Subtract,
                left,
                right,
            } => write!(
                f,
                "cannot subtract a vector of size {} from a vector of size {}",
                right, left
            ),
            VectorError::DimensionMismatch {
                operation,
                left,
                right,
            } => write!(
                f,
                "{}: vectors are of different sizes ({} and {})",
                operation, left, right
            ),
            VectorError::DegenerateOperation {
                operation: Operation::Normalize,
            } => write!(f, "cannot normalize zero vector"),
            VectorError::DegenerateOperation { operation } => {
                write!(f, "{} is undefined for the zero vector", operation)
            },
            VectorError::Numeric(err) => write!(f, "numeric error: {}", err),
        }
    }
}

impl std::error::Error for VectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VectorError::Numeric(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NumericError> for VectorError {
    fn from(err: NumericError) -> Self {
        VectorError::Numeric(err)
    }
}

/// Result type alias for vector operations
pub type VectorResult<T> = Result<T, VectorError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let err = VectorError::DimensionMismatch {
            operation: Operation::Add,
            left: 2,
            right: 3,
        };
        assert_eq!(err.to_string(), "cannot add vectors of different sizes (2 and 3)");

        let err = VectorError::DimensionMismatch {
            operation: Operation::Subtract,
            left: 2,
            right: 3,
        };
        assert_eq!(
            err.to_string(),
            "cannot subtract a vector of size 3 from a vector of size 2"
        );

        let err = VectorError::DimensionMismatch {
            operation: Operation::Cross,
            left: 2,
            right: 3,
        };
        assert_eq!(err.to_string(), "vectors must be three dimensional (got 2 and 3)");

        let err = VectorError::DimensionMismatch {
            operation: Operation::DotProduct,
            left: 4,
            right: 1,
        };
        assert_eq!(err.to_string(), "dot product: vectors are of different sizes (4 and 1)");
    }

    #[test]
    fn test_degenerate_display() {
        let err = VectorError::DegenerateOperation {
            operation: Operation::Normalize,
        };
        assert_eq!(err.to_string(), "cannot normalize zero vector");

        let err = VectorError::DegenerateOperation {
            operation: Operation::Projection,
        };
        assert_eq!(err.to_string(), "projection is undefined for the zero vector");
    }

    #[test]
    fn test_numeric_source() {
        let err: VectorError = NumericError::Overflow.into();
        assert_eq!(err, VectorError::Numeric(NumericError::Overflow));
        assert!(err.source().is_some());
        assert!(VectorError::InvalidArgument("x".into()).source().is_none());
    }
}
