// ============================================================================
// Vector Property Tests
// ============================================================================

use decimal_vector::prelude::*;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Coordinates with two decimal places in [-99.99, 99.99]; sums and
/// differences of these stay within six significant digits.
fn cents(dimension: usize) -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(-9999i64..=9999, dimension)
        .prop_map(|raw| raw.into_iter().map(|c| Decimal::new(c, 2)).collect())
}

/// Small integer coordinates whose products and sums are exact.
fn small_integers(dimension: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-30i64..=30, dimension)
}

fn vector_pair() -> impl Strategy<Value = (Vector, Vector)> {
    (1usize..=5)
        .prop_flat_map(|dimension| (cents(dimension), cents(dimension)))
        .prop_map(|(a, b)| (Vector::new(a).unwrap(), Vector::new(b).unwrap()))
}

fn within(actual: Decimal, expected: Decimal, tolerance: Decimal) -> bool {
    (actual - expected).abs() < tolerance
}

proptest! {
    #[test]
    fn add_is_commutative((a, b) in vector_pair()) {
        prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
    }

    #[test]
    fn subtract_inverts_add((a, b) in vector_pair()) {
        prop_assert_eq!(a.add(&b).unwrap().subtract(&b).unwrap(), a);
    }

    #[test]
    fn dot_is_symmetric((a, b) in vector_pair()) {
        prop_assert_eq!(a.dot(&b).unwrap(), b.dot(&a).unwrap());
    }

    #[test]
    fn magnitude_is_non_negative((a, _b) in vector_pair()) {
        prop_assert!(a.magnitude().unwrap() >= Decimal::ZERO);
    }

    #[test]
    fn normalize_yields_unit_length((a, _b) in vector_pair()) {
        prop_assume!(!a.is_zero().unwrap());
        let unit = a.normalize().unwrap();
        prop_assert!(within(unit.magnitude().unwrap(), Decimal::ONE, Decimal::new(1, 4)));
    }

    #[test]
    fn components_recompose((v, basis) in vector_pair()) {
        prop_assume!(!basis.is_zero().unwrap());
        let parallel = v.component_parallel_to(&basis).unwrap();
        let orthogonal = v.component_orthogonal_to(&basis).unwrap();
        let recomposed = parallel.add(&orthogonal).unwrap();
        for (r, original) in recomposed.iter().zip(&v) {
            prop_assert!(within(*r, *original, Decimal::new(1, 2)));
        }
    }

    #[test]
    fn cross_is_orthogonal_to_operands(a in small_integers(3), b in small_integers(3)) {
        let a = Vector::new(a).unwrap();
        let b = Vector::new(b).unwrap();
        let normal = a.cross(&b).unwrap();
        prop_assert!(normal.is_orthogonal(&a).unwrap());
        prop_assert!(normal.is_orthogonal(&b).unwrap());
    }

    #[test]
    fn cross_is_anti_commutative(a in small_integers(3), b in small_integers(3)) {
        let a = Vector::new(a).unwrap();
        let b = Vector::new(b).unwrap();
        let ab = a.cross(&b).unwrap();
        let ba = b.cross(&a).unwrap();
        prop_assert_eq!(ab, ba.scale(-1).unwrap());
    }

    #[test]
    fn mismatched_dimensions_are_rejected(a in cents(2), b in cents(3)) {
        let a = Vector::new(a).unwrap();
        let b = Vector::new(b).unwrap();
        let is_dimension_mismatch = matches!(
            a.add(&b),
            Err(VectorError::DimensionMismatch { .. })
        );
        prop_assert!(is_dimension_mismatch);
        prop_assert!(a.dot(&b).is_err());
    }
}
