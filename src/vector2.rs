use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::assertion::{assert_2d_vector, ensure, fail};
use crate::error::{Result, VectorError};
use crate::operand::{from_vector_like2, Operand, Operand2};
use crate::types::{is_2d_vector_like, is_finite_number, is_number, numeric_slot, VectorLike2};

const COMPONENTS_MESSAGE: &str = "x and y must be a number.";
const UNEXPECTED_TARGET_MESSAGE: &str =
    "Unexpected type target. Argument must be array or Vector like object.";

/// A mutable 2D vector.
///
/// Arithmetic methods modify the receiver and return it, so calls chain:
/// `v.add(1.0).multiply(2.0)`. Use [`Clone`] (or the `Copy` impl) to keep the
/// original.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// Creates a vector from two finite components.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::InvalidArgument` if either component is not finite.
    pub fn new(x: f64, y: f64) -> Result<Self> {
        Self::from_parts(Some(x), Some(y))
    }

    /// Creates a vector from optional components.
    ///
    /// Both components must be finite numbers, or both absent (giving `(0, 0)`).
    ///
    /// # Errors
    ///
    /// Returns `VectorError::InvalidArgument` for a mix of present and absent
    /// components or for non-finite values.
    pub fn from_parts(x: Option<f64>, y: Option<f64>) -> Result<Self> {
        match (x, y) {
            (Some(x), Some(y)) if is_finite_number(x) && is_finite_number(y) => Ok(Self { x, y }),
            (None, None) => Ok(Self::default()),
            _ => Err(fail(COMPONENTS_MESSAGE)),
        }
    }

    /// Builds a vector from an untyped value: a vector-like object, a
    /// positional `[x, y]` array, or a number broadcast to both components.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::InvalidArgument` for any other shape.
    pub fn from_value(target: &Value) -> Result<Self> {
        if let Some((x, y)) = target.xy().filter(|_| is_2d_vector_like(target)) {
            return Self::new(x, y);
        }
        if let Value::Array(items) = target {
            let x = numeric_slot(items.first()).map_err(|()| fail(COMPONENTS_MESSAGE))?;
            let y = numeric_slot(items.get(1)).map_err(|()| fail(COMPONENTS_MESSAGE))?;
            return Self::from_parts(x, y);
        }
        match target.as_f64() {
            Some(n) if is_number(target) => Self::new(n, n),
            _ => Err(fail(UNEXPECTED_TARGET_MESSAGE)),
        }
    }

    /// Copies the `x`, `y` fields of any 2D vector-like value.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::InvalidArgument` if `target` is not vector-like.
    pub fn from_vector<V: VectorLike2 + ?Sized>(target: &V) -> Result<Self> {
        let (x, y) = assert_2d_vector(target, None)?;
        Ok(Self { x, y })
    }

    /// Creates `(x, y)`, with `y` defaulting to `x` when absent or non-finite.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::InvalidArgument` if `x` is not finite.
    pub fn of(x: f64, y: Option<f64>) -> Result<Self> {
        ensure(is_finite_number(x), "X and Y must be a number.")?;
        let y = y.filter(|y| is_finite_number(*y)).unwrap_or(x);
        Ok(Self { x, y })
    }

    /// Replaces the components with the operand.
    pub fn set(&mut self, value: impl Into<Operand2>) -> &mut Self {
        let [x, y] = value.into().broadcast(0.0);
        self.x = x;
        self.y = y;
        self
    }

    /// Adds the operand to each component.
    ///
    /// A component operand is applied once, component-wise; no scalar pass
    /// follows it. A scalar is broadcast, with absent, zero or `NaN` scalars
    /// counting as `0`.
    pub fn add(&mut self, value: impl Into<Operand2>) -> &mut Self {
        let [x, y] = value.into().broadcast(0.0);
        self.x += x;
        self.y += y;
        self
    }

    /// Subtracts the operand from each component.
    pub fn subtract(&mut self, value: impl Into<Operand2>) -> &mut Self {
        let [x, y] = value.into().broadcast(0.0);
        self.x -= x;
        self.y -= y;
        self
    }

    /// Multiplies each component by the operand.
    pub fn multiply(&mut self, value: impl Into<Operand2>) -> &mut Self {
        let [x, y] = value.into().broadcast(0.0);
        self.x *= x;
        self.y *= y;
        self
    }

    /// Divides by the operand. An absent operand divides by `1`.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::DivideByZero` for an exact zero scalar.
    pub fn divide(&mut self, value: impl Into<Operand2>) -> Result<&mut Self> {
        let value = value.into();
        if value.is_zero_scalar() {
            tracing::debug!(vector = %self, "divide rejected a zero scalar");
            return Err(VectorError::DivideByZero);
        }
        Ok(self.divide_by(value))
    }

    fn divide_by(&mut self, value: Operand2) -> &mut Self {
        let [x, y] = value.broadcast(1.0);
        self.x /= x;
        self.y /= y;
        self
    }

    /// Angle from the positive x-axis, in `(-π, π]`.
    #[must_use]
    pub fn heading(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Points the vector at the absolute angle `radians`, keeping its magnitude.
    pub fn set_heading(&mut self, radians: f64) -> &mut Self {
        let m = self.mag();
        self.x = m * radians.cos();
        self.y = m * radians.sin();
        self
    }

    /// Rotates the vector by `radians` relative to its current heading.
    pub fn rotate(&mut self, radians: f64) -> &mut Self {
        self.set_heading(radians + self.heading())
    }

    /// Makes every component non-negative.
    pub fn abs(&mut self) -> &mut Self {
        self.x = self.x.abs();
        self.y = self.y.abs();
        self
    }

    /// Dot product with a 2D vector-like value.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::InvalidArgument` if `vector` is not vector-like.
    pub fn dot<V: VectorLike2 + ?Sized>(&self, vector: &V) -> Result<f64> {
        let (x, y) = assert_2d_vector(vector, None)?;
        Ok(self.x * x + self.y * y)
    }

    /// Scales to unit length. The zero vector is left unchanged.
    pub fn normalize(&mut self) -> &mut Self {
        let magnitude = self.mag();
        if magnitude != 0.0 {
            self.divide_by(Operand::Scalar(magnitude));
        }
        self
    }

    /// Exact component equality.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::InvalidArgument` if `vector` is not vector-like.
    #[allow(clippy::float_cmp)]
    pub fn equals<V: VectorLike2 + ?Sized>(&self, vector: &V) -> Result<bool> {
        let (x, y) = assert_2d_vector(vector, None)?;
        Ok(self.x == x && self.y == y)
    }

    /// Squared Euclidean length.
    #[must_use]
    pub fn mag_sq(&self) -> f64 {
        self.x.powi(2) + self.y.powi(2)
    }

    /// Euclidean length.
    #[must_use]
    pub fn mag(&self) -> f64 {
        self.mag_sq().sqrt()
    }

    /// Alias of [`Vector2::mag`].
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.mag()
    }

    /// Flips the sign of every component.
    pub fn negative(&mut self) -> &mut Self {
        self.multiply(-1.0)
    }

    /// Returns `true` if both components are finite.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        is_finite_number(self.x) && is_finite_number(self.y)
    }

    /// Plain `{x, y}` object form.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({ "x": self.x, "y": self.y })
    }

    /// Components in declared order.
    #[must_use]
    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Iterates over `x` then `y`.
    pub fn iter(&self) -> std::array::IntoIter<f64, 2> {
        self.to_array().into_iter()
    }

    /// The zero vector.
    #[must_use]
    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// All components set to `1`.
    #[must_use]
    pub fn one() -> Self {
        Self { x: 1.0, y: 1.0 }
    }

    /// All components set to `-1`.
    #[must_use]
    pub fn neg() -> Self {
        Self { x: -1.0, y: -1.0 }
    }

    /// Unit vector along negative x.
    #[must_use]
    pub fn left() -> Self {
        Self { x: -1.0, y: 0.0 }
    }

    /// Unit vector along negative y.
    #[must_use]
    pub fn forward() -> Self {
        Self { x: 0.0, y: -1.0 }
    }

    /// Unit vector along positive x.
    #[must_use]
    pub fn right() -> Self {
        Self { x: 1.0, y: 0.0 }
    }

    /// Unit vector along positive y.
    #[must_use]
    pub fn back() -> Self {
        Self { x: 0.0, y: 1.0 }
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Vector2 {},{}]", self.x, self.y)
    }
}

impl VectorLike2 for Vector2 {
    fn xy(&self) -> Option<(f64, f64)> {
        Some((self.x, self.y))
    }
}

impl From<&Vector2> for Operand2 {
    fn from(value: &Vector2) -> Self {
        from_vector_like2(value)
    }
}

impl From<Vector2> for Operand2 {
    fn from(value: Vector2) -> Self {
        from_vector_like2(&value)
    }
}

impl TryFrom<&Value> for Vector2 {
    type Error = VectorError;

    fn try_from(value: &Value) -> Result<Self> {
        Self::from_value(value)
    }
}

impl From<Vector2> for nalgebra::Vector2<f64> {
    fn from(v: Vector2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl IntoIterator for Vector2 {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 2>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_array().into_iter()
    }
}

impl IntoIterator for &Vector2 {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 2>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Dot product of two 2D vector-like values.
///
/// # Errors
///
/// Returns `VectorError::InvalidArgument` if either argument is not vector-like.
pub fn dot<A, B>(a: &A, b: &B) -> Result<f64>
where
    A: VectorLike2 + ?Sized,
    B: VectorLike2 + ?Sized,
{
    let (ax, ay) = assert_2d_vector(a, None)?;
    let (bx, by) = assert_2d_vector(b, None)?;
    Ok(ax * bx + ay * by)
}

/// Euclidean distance between two 2D vector-like values.
///
/// # Errors
///
/// Returns `VectorError::InvalidArgument` if either argument is not vector-like.
pub fn distance<A, B>(a: &A, b: &B) -> Result<f64>
where
    A: VectorLike2 + ?Sized,
    B: VectorLike2 + ?Sized,
{
    let (ax, ay) = assert_2d_vector(a, None)?;
    let (bx, by) = assert_2d_vector(b, None)?;
    Ok(((bx - ax).powi(2) + (by - ay).powi(2)).sqrt())
}

/// Exact component equality of two 2D vector-like values.
///
/// # Errors
///
/// Returns `VectorError::InvalidArgument` if either argument is not vector-like.
#[allow(clippy::float_cmp)]
pub fn equals<A, B>(a: &A, b: &B) -> Result<bool>
where
    A: VectorLike2 + ?Sized,
    B: VectorLike2 + ?Sized,
{
    let (ax, ay) = assert_2d_vector(a, None)?;
    let (bx, by) = assert_2d_vector(b, None)?;
    Ok(ax == bx && ay == by)
}

/// Linear interpolation `a + (b - a) * fraction`. Not clamped.
///
/// # Errors
///
/// Returns `VectorError::InvalidArgument` if either endpoint is not vector-like.
pub fn lerp<A, B>(a: &A, b: &B, fraction: f64) -> Result<Vector2>
where
    A: VectorLike2 + ?Sized,
    B: VectorLike2 + ?Sized,
{
    let a = Vector2::from_vector(a)?;
    let mut out = Vector2::from_vector(b)?;
    out.subtract(a).multiply(fraction).add(a);
    Ok(out)
}

/// Component-wise minimum of `first` and every vector in `rest`.
///
/// # Errors
///
/// Returns `VectorError::InvalidArgument` if any argument is not vector-like.
pub fn min<'a, V>(first: &V, rest: impl IntoIterator<Item = &'a V>) -> Result<Vector2>
where
    V: VectorLike2 + ?Sized + 'a,
{
    fold_extremum(first, rest, f64::min)
}

/// Component-wise maximum of `first` and every vector in `rest`.
///
/// # Errors
///
/// Returns `VectorError::InvalidArgument` if any argument is not vector-like.
pub fn max<'a, V>(first: &V, rest: impl IntoIterator<Item = &'a V>) -> Result<Vector2>
where
    V: VectorLike2 + ?Sized + 'a,
{
    fold_extremum(first, rest, f64::max)
}

fn fold_extremum<'a, V>(
    first: &V,
    rest: impl IntoIterator<Item = &'a V>,
    pick: fn(f64, f64) -> f64,
) -> Result<Vector2>
where
    V: VectorLike2 + ?Sized + 'a,
{
    let (x, y) = assert_2d_vector(first, Some("The first argument must be a Vector"))?;
    let mut out = Vector2 { x, y };
    for vector in rest {
        let (x, y) = assert_2d_vector(vector, None)?;
        out.x = pick(out.x, x);
        out.y = pick(out.y, y);
    }
    Ok(out)
}
