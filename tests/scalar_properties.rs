// ============================================================================
// Scalar Property Tests
// ============================================================================

use decimal_vector::numeric::{Precision, ToScalar};
use quickcheck::quickcheck;
use rust_decimal::Decimal;

fn precision_from(digits: u8) -> Precision {
    Precision::new(u32::from(digits % 28) + 1).unwrap()
}

quickcheck! {
    fn integer_scalars_are_exact(x: i64) -> bool {
        x.to_scalar() == Ok(Decimal::from(x))
    }

    fn integer_text_parses_exactly(x: i64) -> bool {
        x.to_string().as_str().to_scalar() == Ok(Decimal::from(x))
    }

    fn rounding_is_idempotent(x: i64, digits: u8) -> bool {
        let precision = precision_from(digits);
        let once = precision.round(Decimal::from(x)).unwrap();
        precision.round(once).unwrap() == once
    }

    fn rounded_addition_commutes(a: i32, b: i32, digits: u8) -> bool {
        let precision = precision_from(digits);
        let (a, b) = (Decimal::from(a), Decimal::from(b));
        precision.add(a, b) == precision.add(b, a)
    }

    fn rounded_sqrt_is_non_negative(x: u32) -> bool {
        Precision::REFERENCE.sqrt(Decimal::from(x)).unwrap() >= Decimal::ZERO
    }
}
