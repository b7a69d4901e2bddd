// ============================================================================
// Vector Configuration
// Working precision and comparison tolerances shared by related vectors
// ============================================================================

use crate::numeric::Precision;
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Vector Configuration
// ============================================================================

/// Arithmetic configuration carried by every [`Vector`](super::Vector).
///
/// Chosen once by the caller and passed at construction; every vector
/// derived from an operation inherits its operand's configuration. Vectors
/// built with different precisions cannot be combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VectorConfig {
    /// Significant digits kept by coordinates and scalar results
    pub precision: Precision,

    /// Threshold for `is_zero`, `is_orthogonal` and normalization
    /// (magnitudes or dot products strictly below it count as zero)
    pub zero_tolerance: Decimal,

    /// Distance between unit directions (`|û ∓ v̂|`, about the angle in
    /// radians) below which two vectors are parallel
    pub parallel_tolerance: Decimal,
}

impl VectorConfig {
    /// Default zero tolerance: 1e-10
    pub const DEFAULT_ZERO_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 10);

    /// Create a configuration with the given precision and default tolerances.
    ///
    /// The parallel tolerance is two digits looser than the working
    /// precision: `10^-(digits - 2)`, saturating at 1.
    pub fn new(precision: Precision) -> Self {
        let scale = precision.digits().saturating_sub(2);
        Self {
            precision,
            zero_tolerance: Self::DEFAULT_ZERO_TOLERANCE,
            parallel_tolerance: Decimal::new(1, scale),
        }
    }

    /// Builder method: Set the zero tolerance
    pub fn with_zero_tolerance(mut self, tolerance: Decimal) -> Self {
        self.zero_tolerance = tolerance;
        self
    }

    /// Builder method: Set the parallel tolerance
    pub fn with_parallel_tolerance(mut self, tolerance: Decimal) -> Self {
        self.parallel_tolerance = tolerance;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.zero_tolerance.is_sign_negative() && !self.zero_tolerance.is_zero() {
            return Err("Zero tolerance cannot be negative".to_string());
        }

        if self.parallel_tolerance.is_sign_negative() && !self.parallel_tolerance.is_zero() {
            return Err("Parallel tolerance cannot be negative".to_string());
        }

        if self.parallel_tolerance > Decimal::ONE {
            return Err("Parallel tolerance cannot exceed 1".to_string());
        }

        Ok(())
    }
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self::reference()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl VectorConfig {
    /// Reference configuration
    /// - 6 significant digits
    /// - Zero tolerance 1e-10, parallel tolerance 1e-4
    pub fn reference() -> Self {
        Self::new(Precision::REFERENCE)
    }

    /// High precision configuration
    /// - 28 significant digits (full decimal mantissa)
    /// - Zero tolerance 1e-10, parallel tolerance 1e-26
    pub fn high_precision() -> Self {
        Self::new(Precision::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = VectorConfig::new(Precision::new(10).unwrap());

        assert_eq!(config.precision.digits(), 10);
        assert_eq!(config.zero_tolerance, Decimal::new(1, 10));
        assert_eq!(config.parallel_tolerance, Decimal::new(1, 8));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = VectorConfig::reference()
            .with_zero_tolerance(Decimal::new(1, 6))
            .with_parallel_tolerance(Decimal::new(1, 3));

        assert_eq!(config.zero_tolerance, Decimal::new(1, 6));
        assert_eq!(config.parallel_tolerance, Decimal::new(1, 3));
    }

    #[test]
    fn test_validation() {
        let negative = VectorConfig::reference().with_zero_tolerance(Decimal::NEGATIVE_ONE);
        assert!(negative.validate().is_err());

        let too_loose = VectorConfig::reference().with_parallel_tolerance(Decimal::TWO);
        assert!(too_loose.validate().is_err());

        let exact = VectorConfig::reference().with_zero_tolerance(Decimal::ZERO);
        assert!(exact.validate().is_ok());
    }

    #[test]
    fn test_preset_configs() {
        let reference = VectorConfig::default();
        assert_eq!(reference.precision, Precision::REFERENCE);
        assert_eq!(reference.parallel_tolerance, Decimal::new(1, 4));

        let high = VectorConfig::high_precision();
        assert_eq!(high.precision, Precision::MAX);
        assert_eq!(high.parallel_tolerance, Decimal::new(1, 26));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_invalid_precision() {
        let json = serde_json::to_string(&VectorConfig::reference()).unwrap();
        let back: VectorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, VectorConfig::reference());

        let zero = json.replace("\"precision\":6", "\"precision\":0");
        assert!(serde_json::from_str::<VectorConfig>(&zero).is_err());
    }

    #[test]
    fn test_low_precision_saturates() {
        let coarse = VectorConfig::new(Precision::new(1).unwrap());
        assert_eq!(coarse.parallel_tolerance, Decimal::ONE);
        assert!(coarse.validate().is_ok());
    }
}
