// ============================================================================
// Decimal Vector Library
// Fixed-precision Euclidean vectors with decimal coordinates
// ============================================================================

//! # Decimal Vector
//!
//! Euclidean vector arithmetic over decimal coordinates rounded to a fixed
//! number of significant digits, instead of raw binary floating point.
//!
//! ## Features
//!
//! - **Decimal coordinates** backed by `rust_decimal`, rounded half-to-even
//! - **Explicit precision** chosen once through [`VectorConfig`](domain::VectorConfig)
//! - **Geometry**: magnitude, normalization, dot/cross products, angles
//! - **Decomposition** into components parallel and orthogonal to a basis
//! - **Typed errors** for empty input, dimension mismatches and zero vectors
//!
//! ## Example
//!
//! ```rust
//! use decimal_vector::prelude::*;
//!
//! let v = Vector::new([3.039, 1.879])?;
//! let basis = Vector::new([0.825, 2.036])?;
//!
//! let parallel = v.component_parallel_to(&basis)?;
//! let orthogonal = v.component_orthogonal_to(&basis)?;
//! println!("{} = {} + {}", v, parallel, orthogonal);
//!
//! let x = Vector::new([1, 0, 0])?;
//! let y = Vector::new([0, 1, 0])?;
//! assert_eq!(x.cross(&y)?, Vector::new([0, 0, 1])?);
//! assert_eq!(x.angle(&y, AngleUnit::Degrees)?, rust_decimal::Decimal::from(90));
//!
//! // Working precision is an explicit configuration value
//! let config = VectorConfig::new(Precision::new(12)?);
//! let fine = Vector::with_config(["1", "2"], config)?;
//! assert_eq!(fine.dimension(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod domain;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        AngleUnit, Operation, Vector, VectorConfig, VectorError, VectorResult,
    };
    pub use crate::numeric::{NumericError, Precision, ToScalar};
}
