// ============================================================================
// Scalar Conversion
// Converts numeric-like input into decimal scalars
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Conversion of numeric-like values into a [`Decimal`] scalar.
///
/// Implemented for the primitive integers, `f32`/`f64`, `Decimal` and
/// numeric text. Conversion is exact where the source allows it; rounding to
/// a working precision is left to the caller.
pub trait ToScalar {
    /// Convert into a decimal scalar.
    ///
    /// # Errors
    /// - `InvalidInput` for text that is not a decimal number
    /// - `NonFinite` for NaN or infinite floats
    /// - `Overflow` for floats beyond the decimal range
    fn to_scalar(self) -> NumericResult<Decimal>;
}

impl ToScalar for Decimal {
    #[inline]
    fn to_scalar(self) -> NumericResult<Decimal> {
        Ok(self)
    }
}

impl ToScalar for &Decimal {
    #[inline]
    fn to_scalar(self) -> NumericResult<Decimal> {
        Ok(*self)
    }
}

macro_rules! impl_to_scalar_for_int {
    ($($t:ty),*) => {
        $(
            impl ToScalar for $t {
                #[inline]
                fn to_scalar(self) -> NumericResult<Decimal> {
                    Ok(Decimal::from(self))
                }
            }
        )*
    };
}

impl_to_scalar_for_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl ToScalar for f64 {
    fn to_scalar(self) -> NumericResult<Decimal> {
        if !self.is_finite() {
            return Err(NumericError::NonFinite);
        }
        Decimal::from_f64(self).ok_or(NumericError::Overflow)
    }
}

impl ToScalar for f32 {
    fn to_scalar(self) -> NumericResult<Decimal> {
        if !self.is_finite() {
            return Err(NumericError::NonFinite);
        }
        Decimal::from_f32(self).ok_or(NumericError::Overflow)
    }
}

impl ToScalar for &str {
    /// Accepts plain (`"-1.25"`) and scientific (`"1e-3"`) notation,
    /// ignoring surrounding whitespace.
    fn to_scalar(self) -> NumericResult<Decimal> {
        let s = self.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .map_err(|_| NumericError::InvalidInput)
    }
}

impl ToScalar for String {
    #[inline]
    fn to_scalar(self) -> NumericResult<Decimal> {
        self.as_str().to_scalar()
    }
}

impl ToScalar for &String {
    #[inline]
    fn to_scalar(self) -> NumericResult<Decimal> {
        self.as_str().to_scalar()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(3i32.to_scalar().unwrap(), Decimal::from(3));
        assert_eq!((-7i64).to_scalar().unwrap(), Decimal::from(-7));
        assert_eq!(42usize.to_scalar().unwrap(), Decimal::from(42));
    }

    #[test]
    fn test_floats() {
        assert_eq!(2.5f64.to_scalar().unwrap(), Decimal::new(25, 1));
        assert_eq!(0.5f32.to_scalar().unwrap(), Decimal::new(5, 1));
        assert_eq!(f64::NAN.to_scalar(), Err(NumericError::NonFinite));
        assert_eq!(f64::INFINITY.to_scalar(), Err(NumericError::NonFinite));
        assert_eq!(f32::NEG_INFINITY.to_scalar(), Err(NumericError::NonFinite));
    }

    #[test]
    fn test_text() {
        assert_eq!("1.25".to_scalar().unwrap(), Decimal::new(125, 2));
        assert_eq!("  -4 ".to_scalar().unwrap(), Decimal::from(-4));
        assert_eq!("1e-3".to_scalar().unwrap(), Decimal::new(1, 3));
        assert_eq!(String::from("7").to_scalar().unwrap(), Decimal::from(7));
    }

    #[test]
    fn test_text_invalid() {
        assert_eq!("".to_scalar(), Err(NumericError::InvalidInput));
        assert_eq!("   ".to_scalar(), Err(NumericError::InvalidInput));
        assert_eq!("not_a_number".to_scalar(), Err(NumericError::InvalidInput));
        assert_eq!("1.2.3".to_scalar(), Err(NumericError::InvalidInput));
    }
}
