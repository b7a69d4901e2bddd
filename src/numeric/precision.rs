// ============================================================================
// Precision
// Significant-digit rounding context for decimal arithmetic
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of significant decimal digits kept by every scalar result.
///
/// Each operation computes the exact decimal result (within the 96-bit
/// mantissa of [`Decimal`]) and then rounds it half-to-even to this many
/// significant digits, so chained arithmetic never accumulates binary
/// floating-point drift.
///
/// # Example
/// ```
/// use decimal_vector::numeric::Precision;
/// use rust_decimal::Decimal;
///
/// let p = Precision::new(3)?;
/// let third = p.div(Decimal::ONE, Decimal::from(3))?;
/// assert_eq!(third, Decimal::new(333, 3));
/// # Ok::<(), decimal_vector::numeric::NumericError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
#[repr(transparent)]
pub struct Precision(u32);

impl Precision {
    /// Largest digit count the decimal mantissa can hold
    pub const MAX_DIGITS: u32 = 28;

    /// Six significant digits
    pub const REFERENCE: Self = Self(6);

    /// Full decimal mantissa
    pub const MAX: Self = Self(Self::MAX_DIGITS);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a precision of `digits` significant digits.
    ///
    /// # Errors
    /// Returns `InvalidPrecision` unless `1 <= digits <= 28`.
    pub fn new(digits: u32) -> NumericResult<Self> {
        if digits == 0 || digits > Self::MAX_DIGITS {
            return Err(NumericError::InvalidPrecision);
        }
        Ok(Self(digits))
    }

    /// Significant digits kept.
    #[inline]
    pub const fn digits(self) -> u32 {
        self.0
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Round `value` to this precision (half to even).
    #[inline]
    pub fn round(self, value: Decimal) -> NumericResult<Decimal> {
        if value.is_zero() {
            return Ok(Decimal::ZERO);
        }
        value
            .round_sf_with_strategy(self.0, RoundingStrategy::MidpointNearestEven)
            .ok_or(NumericError::Overflow)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Rounded addition.
    ///
    /// # Errors
    /// Returns `Overflow` if the exact sum is out of range.
    #[inline]
    pub fn add(self, lhs: Decimal, rhs: Decimal) -> NumericResult<Decimal> {
        let sum = lhs.checked_add(rhs).ok_or(NumericError::Overflow)?;
        self.round(sum)
    }

    /// Rounded subtraction.
    #[inline]
    pub fn sub(self, lhs: Decimal, rhs: Decimal) -> NumericResult<Decimal> {
        let difference = lhs.checked_sub(rhs).ok_or(NumericError::Overflow)?;
        self.round(difference)
    }

    /// Rounded multiplication.
    #[inline]
    pub fn mul(self, lhs: Decimal, rhs: Decimal) -> NumericResult<Decimal> {
        let product = lhs.checked_mul(rhs).ok_or(NumericError::Overflow)?;
        self.round(product)
    }

    /// Rounded division.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for a zero divisor, `Overflow` if the quotient
    /// is out of range.
    #[inline]
    pub fn div(self, lhs: Decimal, rhs: Decimal) -> NumericResult<Decimal> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        let quotient = lhs.checked_div(rhs).ok_or(NumericError::Overflow)?;
        self.round(quotient)
    }

    /// Sum of `values`, rounding after every addition.
    pub fn sum<I>(self, values: I) -> NumericResult<Decimal>
    where
        I: IntoIterator<Item = Decimal>,
    {
        values
            .into_iter()
            .try_fold(Decimal::ZERO, |acc, value| self.add(acc, value))
    }

    /// Rounded square root, computed in decimal.
    ///
    /// # Errors
    /// Returns `OutOfDomain` for negative input.
    pub fn sqrt(self, value: Decimal) -> NumericResult<Decimal> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(NumericError::OutOfDomain);
        }
        let root = value.sqrt().ok_or(NumericError::OutOfDomain)?;
        self.round(root)
    }

    /// Inverse cosine in radians, rounded to this precision.
    ///
    /// The decimal type has no inverse trigonometry, so the cosine is taken
    /// through `f64` and the angle is brought back as a decimal. Accuracy is
    /// bounded by `f64` (about 15 digits), which only matters above
    /// `Precision::new(15)`.
    ///
    /// # Errors
    /// Returns `OutOfDomain` if `cosine` is outside `[-1, 1]`.
    pub fn acos(self, cosine: Decimal) -> NumericResult<Decimal> {
        let radians = Self::acos_f64(cosine)?;
        self.from_f64(radians)
    }

    /// Inverse cosine in degrees, rounded to this precision.
    ///
    /// Converted before rounding, so a right angle comes out as exactly 90.
    pub fn acos_degrees(self, cosine: Decimal) -> NumericResult<Decimal> {
        let degrees = Self::acos_f64(cosine)?.to_degrees();
        self.from_f64(degrees)
    }

    fn acos_f64(cosine: Decimal) -> NumericResult<f64> {
        if cosine > Decimal::ONE || cosine < Decimal::NEGATIVE_ONE {
            return Err(NumericError::OutOfDomain);
        }
        Ok(cosine.to_f64().ok_or(NumericError::Overflow)?.acos())
    }

    fn from_f64(self, value: f64) -> NumericResult<Decimal> {
        let value = Decimal::from_f64(value).ok_or(NumericError::NonFinite)?;
        self.round(value)
    }
}

impl TryFrom<u32> for Precision {
    type Error = NumericError;

    fn try_from(digits: u32) -> Result<Self, Self::Error> {
        Self::new(digits)
    }
}

impl From<Precision> for u32 {
    fn from(precision: Precision) -> Self {
        precision.0
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::REFERENCE
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} significant digits", self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================
