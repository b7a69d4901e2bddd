// ============================================================================
// Vector Domain Model
// Immutable fixed-precision Euclidean vector
// ============================================================================

use super::config::VectorConfig;
use super::errors::{Operation, VectorError, VectorResult};
use crate::numeric::{NumericError, NumericResult, Precision, ToScalar};
use rust_decimal::Decimal;
use smallvec::SmallVec;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inline storage for the common 2D-4D case
type Coordinates = SmallVec<[Decimal; 4]>;

/// Unit in which [`Vector::angle`] reports its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

/// An n-dimensional Euclidean vector with decimal coordinates.
///
/// Coordinates are rounded to the configured [`Precision`] on construction,
/// and every operation rounds each intermediate result the same way. A
/// `Vector` is never mutated: operations return new vectors that inherit
/// the left operand's [`VectorConfig`].
///
/// Equality compares coordinates only.
///
/// # Example
/// ```
/// use decimal_vector::prelude::*;
/// use rust_decimal::Decimal;
///
/// let v = Vector::new([3, 4])?;
/// let w = Vector::new(["0.5", "-1.25"])?;
///
/// assert_eq!(v.magnitude()?, Decimal::from(5));
/// assert_eq!(v.add(&w)?, Vector::new(["3.5", "2.75"])?);
/// # Ok::<(), VectorError>(())
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawVector", into = "RawVector"))]
pub struct Vector {
    coordinates: Coordinates,
    config: VectorConfig,
}

impl Vector {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a vector with the reference configuration (6 significant digits).
    ///
    /// # Errors
    /// `InvalidArgument` if `coordinates` is empty or an element is not a
    /// finite number.
    pub fn new<I>(coordinates: I) -> VectorResult<Self>
    where
        I: IntoIterator,
        I::Item: ToScalar,
    {
        Self::with_config(coordinates, VectorConfig::default())
    }

    /// Create a vector with an explicit configuration.
    ///
    /// # Errors
    /// `InvalidArgument` if the configuration does not validate, if
    /// `coordinates` is empty, or if an element is not a finite number.
    pub fn with_config<I>(coordinates: I, config: VectorConfig) -> VectorResult<Self>
    where
        I: IntoIterator,
        I::Item: ToScalar,
    {
        if let Err(reason) = config.validate() {
            tracing::debug!("Rejected vector configuration {:?}: {}", config, reason);
            return Err(VectorError::InvalidArgument(reason));
        }

        let precision = config.precision;
        let coordinates = coordinates
            .into_iter()
            .enumerate()
            .map(|(index, value)| -> VectorResult<Decimal> {
                let scalar = value.to_scalar().map_err(|err| {
                    VectorError::InvalidArgument(format!("coordinate {}: {}", index, err))
                })?;
                Ok(precision.round(scalar)?)
            })
            .collect::<VectorResult<Coordinates>>()?;

        Self::from_coordinates(coordinates, config)
    }

    /// The zero vector of the given dimension.
    pub fn zero(dimension: usize, config: VectorConfig) -> VectorResult<Self> {
        Self::with_config(std::iter::repeat(0u8).take(dimension), config)
    }

    fn from_coordinates(coordinates: Coordinates, config: VectorConfig) -> VectorResult<Self> {
        if coordinates.is_empty() {
            return Err(VectorError::InvalidArgument(
                "coordinates must be nonempty".to_string(),
            ));
        }
        Ok(Self {
            coordinates,
            config,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of coordinates (always at least 1).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    #[inline]
    pub fn coordinates(&self) -> &[Decimal] {
        &self.coordinates
    }

    #[inline]
    pub fn config(&self) -> VectorConfig {
        self.config
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Decimal> {
        self.coordinates.iter()
    }

    #[inline]
    fn precision(&self) -> Precision {
        self.config.precision
    }

    // ========================================================================
    // Operand Checks
    // ========================================================================

    fn ensure_same_precision(&self, other: &Self, operation: Operation) -> VectorResult<()> {
        if self.precision() != other.precision() {
            return Err(VectorError::InvalidArgument(format!(
                "{}: operands use different precisions ({} and {})",
                operation,
                self.precision(),
                other.precision()
            )));
        }
        Ok(())
    }

    fn ensure_compatible(&self, other: &Self, operation: Operation) -> VectorResult<()> {
        self.ensure_same_precision(other, operation)?;
        if self.dimension() != other.dimension() {
            tracing::trace!(
                "Dimension mismatch in {}: {} vs {}",
                operation,
                self.dimension(),
                other.dimension()
            );
            return Err(VectorError::DimensionMismatch {
                operation,
                left: self.dimension(),
                right: other.dimension(),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    fn zip_with<F>(&self, other: &Self, operation: Operation, f: F) -> VectorResult<Self>
    where
        F: Fn(Precision, Decimal, Decimal) -> NumericResult<Decimal>,
    {
        self.ensure_compatible(other, operation)?;
        let precision = self.precision();
        let coordinates = self
            .coordinates
            .iter()
            .zip(&other.coordinates)
            .map(|(&a, &b)| f(precision, a, b))
            .collect::<NumericResult<Coordinates>>()?;
        Self::from_coordinates(coordinates, self.config)
    }

    /// Elementwise sum.
    ///
    /// # Errors
    /// `DimensionMismatch` if the dimensions differ, `InvalidArgument` if the
    /// operands use different precisions.
    pub fn add(&self, other: &Self) -> VectorResult<Self> {
        self.zip_with(other, Operation::Add, Precision::add)
    }

    /// Elementwise difference `self - other`.
    ///
    /// # Errors
    /// Same conditions as [`add`](Self::add).
    pub fn subtract(&self, other: &Self) -> VectorResult<Self> {
        self.zip_with(other, Operation::Subtract, Precision::sub)
    }

    /// Multiply every coordinate by `factor`.
    ///
    /// # Errors
    /// `InvalidArgument` if `factor` is not a finite number.
    pub fn scale<S: ToScalar>(&self, factor: S) -> VectorResult<Self> {
        let factor = factor
            .to_scalar()
            .map_err(|err| VectorError::InvalidArgument(format!("scale factor: {}", err)))?;
        let factor = self.precision().round(factor)?;
        Ok(self.scale_by(factor)?)
    }

    fn scale_by(&self, factor: Decimal) -> NumericResult<Self> {
        let precision = self.precision();
        let coordinates = self
            .coordinates
            .iter()
            .map(|&c| precision.mul(factor, c))
            .collect::<NumericResult<Coordinates>>()?;
        Ok(Self {
            coordinates,
            config: self.config,
        })
    }

    /// Euclidean length.
    ///
    /// Coordinates are divided by the largest absolute coordinate before
    /// squaring, so the squares stay in range whenever the length itself
    /// does. Squares and partial sums are rounded to the working precision
    /// and the root is taken in decimal, so the result never passes through
    /// `f64`.
    pub fn magnitude(&self) -> VectorResult<Decimal> {
        let precision = self.precision();
        let largest = self
            .coordinates
            .iter()
            .map(|c| c.abs())
            .max()
            .unwrap_or(Decimal::ZERO);
        if largest.is_zero() {
            return Ok(Decimal::ZERO);
        }

        let squares = self
            .coordinates
            .iter()
            .map(|&c| {
                let ratio = precision.div(c, largest)?;
                precision.mul(ratio, ratio)
            })
            .collect::<NumericResult<Coordinates>>()?;
        let root = precision.sqrt(precision.sum(squares)?)?;
        Ok(precision.mul(root, largest)?)
    }

    /// Unit vector in the same direction.
    ///
    /// # Errors
    /// `DegenerateOperation` if the magnitude is below the configured zero
    /// tolerance.
    pub fn normalize(&self) -> VectorResult<Self> {
        let magnitude = self.magnitude()?;
        if magnitude < self.config.zero_tolerance {
            tracing::trace!("Cannot normalize zero vector {}", self);
            return Err(VectorError::DegenerateOperation {
                operation: Operation::Normalize,
            });
        }

        let inverse = self
            .precision()
            .div(Decimal::ONE, magnitude)
            .map_err(|err| match err {
                NumericError::DivisionByZero => VectorError::DegenerateOperation {
                    operation: Operation::Normalize,
                },
                other => other.into(),
            })?;
        Ok(self.scale_by(inverse)?)
    }

    /// Sum of elementwise products.
    ///
    /// # Errors
    /// `DimensionMismatch` if the dimensions differ.
    pub fn dot(&self, other: &Self) -> VectorResult<Decimal> {
        self.ensure_compatible(other, Operation::DotProduct)?;
        let precision = self.precision();
        let products = self
            .coordinates
            .iter()
            .zip(&other.coordinates)
            .map(|(&a, &b)| precision.mul(a, b))
            .collect::<NumericResult<Coordinates>>()?;
        Ok(precision.sum(products)?)
    }

    // ========================================================================
    // Angles
    // ========================================================================

    /// Cosine of the angle between the two directions, clamped to [-1, 1].
    fn direction_cosine(&self, other: &Self, operation: Operation) -> VectorResult<Decimal> {
        self.ensure_compatible(other, operation)?;
        let u = self.normalize().map_err(degenerate_as(operation))?;
        let v = other.normalize().map_err(degenerate_as(operation))?;
        let cosine = u.dot(&v)?;
        Ok(cosine.clamp(Decimal::NEGATIVE_ONE, Decimal::ONE))
    }

    /// Angle between `self` and `other`.
    ///
    /// Identical vectors short-circuit to zero. Otherwise the cosine of the
    /// normalized operands is clamped to [-1, 1] before the inverse cosine,
    /// so rounding drift cannot leave its domain.
    ///
    /// # Errors
    /// `DegenerateOperation` if either operand is the zero vector,
    /// `DimensionMismatch` if the dimensions differ.
    pub fn angle(&self, other: &Self, unit: AngleUnit) -> VectorResult<Decimal> {
        if self == other {
            return Ok(Decimal::ZERO);
        }
        let cosine = self.direction_cosine(other, Operation::Angle)?;
        let precision = self.precision();
        let angle = match unit {
            AngleUnit::Radians => precision.acos(cosine)?,
            AngleUnit::Degrees => precision.acos_degrees(cosine)?,
        };
        Ok(angle)
    }

    // ========================================================================
    // Predicates
    // ========================================================================

    /// `magnitude() < zero_tolerance`.
    pub fn is_zero(&self) -> VectorResult<bool> {
        self.is_zero_within(self.config.zero_tolerance)
    }

    pub fn is_zero_within(&self, tolerance: Decimal) -> VectorResult<bool> {
        Ok(self.magnitude()? < tolerance)
    }

    /// `|self · other| < zero_tolerance`.
    pub fn is_orthogonal(&self, other: &Self) -> VectorResult<bool> {
        self.is_orthogonal_within(other, self.config.zero_tolerance)
    }

    pub fn is_orthogonal_within(&self, other: &Self, tolerance: Decimal) -> VectorResult<bool> {
        Ok(self.dot(other)?.abs() < tolerance)
    }

    /// True if either vector is zero or the angle between them is 0 or π,
    /// within the configured parallel tolerance.
    pub fn is_parallel(&self, other: &Self) -> VectorResult<bool> {
        self.is_parallel_within(other, self.config.parallel_tolerance)
    }

    /// Parallelism test on the unit directions: `min(|û - v̂|, |û + v̂|) < tolerance`.
    ///
    /// `|û - v̂| = 2 sin(θ/2)`, so the tolerance reads as an angle in radians
    /// for small angles.
    pub fn is_parallel_within(&self, other: &Self, tolerance: Decimal) -> VectorResult<bool> {
        self.ensure_compatible(other, Operation::Angle)?;
        if self.is_zero()? || other.is_zero()? || self == other {
            return Ok(true);
        }
        let u = self.normalize().map_err(degenerate_as(Operation::Angle))?;
        let v = other.normalize().map_err(degenerate_as(Operation::Angle))?;
        let same = u.subtract(&v)?.magnitude()?;
        let opposite = u.add(&v)?.magnitude()?;
        Ok(same.min(opposite) < tolerance)
    }

    // ========================================================================
    // Decomposition
    // ========================================================================

    /// Projection of `self` onto the direction of `basis`.
    ///
    /// # Errors
    /// `DegenerateOperation` if `basis` is the zero vector,
    /// `DimensionMismatch` if the dimensions differ.
    pub fn component_parallel_to(&self, basis: &Self) -> VectorResult<Self> {
        self.ensure_compatible(basis, Operation::Projection)?;
        let unit = basis
            .normalize()
            .map_err(degenerate_as(Operation::Projection))?;
        let weight = self.dot(&unit)?;
        let mut projection = unit.scale_by(weight)?;
        projection.config = self.config;
        Ok(projection)
    }

    /// `self - component_parallel_to(basis)`.
    pub fn component_orthogonal_to(&self, basis: &Self) -> VectorResult<Self> {
        let projection = self.component_parallel_to(basis)?;
        self.subtract(&projection)
    }

    // ========================================================================
    // Three-Dimensional Operations
    // ========================================================================

    /// Cross product `self × other`.
    ///
    /// # Errors
    /// `DimensionMismatch` unless both operands are three dimensional.
    pub fn cross(&self, other: &Self) -> VectorResult<Self> {
        if self.dimension() != 3 || other.dimension() != 3 {
            tracing::trace!(
                "Cross product needs 3D operands, got {} and {}",
                self.dimension(),
                other.dimension()
            );
            return Err(VectorError::DimensionMismatch {
                operation: Operation::Cross,
                left: self.dimension(),
                right: other.dimension(),
            });
        }
        self.ensure_same_precision(other, Operation::Cross)?;

        let p = self.precision();
        let (a, b) = (&self.coordinates, &other.coordinates);
        let coordinates: Coordinates = smallvec::smallvec![
            p.sub(p.mul(a[1], b[2])?, p.mul(b[1], a[2])?)?,
            p.sub(p.mul(b[0], a[2])?, p.mul(a[0], b[2])?)?,
            p.sub(p.mul(a[0], b[1])?, p.mul(b[0], a[1])?)?,
        ];
        Self::from_coordinates(coordinates, self.config)
    }

    /// Area of the parallelogram spanned by `self` and `other` (3D only).
    pub fn area_of_parallelogram_with(&self, other: &Self) -> VectorResult<Decimal> {
        self.cross(other)?.magnitude()
    }

    /// Area of the triangle spanned by `self` and `other` (3D only).
    pub fn area_of_triangle_with(&self, other: &Self) -> VectorResult<Decimal> {
        let parallelogram = self.area_of_parallelogram_with(other)?;
        Ok(self.precision().div(parallelogram, Decimal::TWO)?)
    }
}

/// Relabel a degenerate-operation error raised by an inner normalization.
fn degenerate_as(operation: Operation) -> impl Fn(VectorError) -> VectorError {
    move |err| match err {
        VectorError::DegenerateOperation { .. } => VectorError::DegenerateOperation { operation },
        other => other,
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.coordinates == other.coordinates
    }
}

impl Eq for Vector {}

impl Hash for Vector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coordinates.hash(state);
    }
}

impl Index<usize> for Vector {
    type Output = Decimal;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Decimal;
    type IntoIter = std::slice::Iter<'a, Decimal>;

    fn into_iter(self) -> Self::IntoIter {
        self.coordinates.iter()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector: (")?;
        for (i, c) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c.normalize())?;
        }
        write!(f, ")")
    }
}

impl FromStr for Vector {
    type Err = VectorError;

    /// Parse comma-separated coordinates, optionally wrapped in `()` or `[]`.
    ///
    /// # Examples
    /// - "1, 2, 3"
    /// - "(1.5, -2)"
    /// - "[0, 0, 1]"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let inner = s
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .or_else(|| s.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')))
            .unwrap_or(s)
            .trim();
        let inner = inner.strip_suffix(',').unwrap_or(inner);

        if inner.trim().is_empty() {
            return Self::new(Vec::<&str>::new());
        }
        Self::new(inner.split(','))
    }
}

// ============================================================================
// Serialization
// ============================================================================

/// Unchecked wire form; deserialization re-validates through `with_config`.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawVector {
    coordinates: Coordinates,
    config: VectorConfig,
}

#[cfg(feature = "serde")]
impl TryFrom<RawVector> for Vector {
    type Error = VectorError;

    fn try_from(raw: RawVector) -> Result<Self, Self::Error> {
        Vector::with_config(raw.coordinates, raw.config)
    }
}

#[cfg(feature = "serde")]
impl From<Vector> for RawVector {
    fn from(vector: Vector) -> Self {
        RawVector {
            coordinates: vector.coordinates,
            config: vector.config,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
