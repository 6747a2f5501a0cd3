use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::assertion::{assert_3d_vector, ensure, fail};
use crate::error::{Result, VectorError};
use crate::operand::{from_vector_like2, from_vector_like3, Operand, Operand2, Operand3};
use crate::types::{
    is_3d_vector_like, is_finite_number, is_number, numeric_slot, VectorLike2, VectorLike3,
};

const COMPONENTS_MESSAGE: &str = "arguments X, Y and Z must be a numbers";
const UNEXPECTED_TARGET_MESSAGE: &str =
    "Unexpected type target. Argument must be array or Vector like object.";

/// A mutable 3D vector.
///
/// Follows the same conventions as [`Vector2`](crate::Vector2): arithmetic
/// mutates the receiver and returns it for chaining.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Creates a vector from three finite components.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::InvalidArgument` if any component is not finite.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self> {
        Self::from_parts(Some(x), Some(y), Some(z))
    }

    /// Creates a vector from optional components: all finite, or all absent.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::InvalidArgument` for a partial or non-finite set.
    pub fn from_parts(x: Option<f64>, y: Option<f64>, z: Option<f64>) -> Result<Self> {
        match (x, y, z) {
            (Some(x), Some(y), Some(z))
                if is_finite_number(x) && is_finite_number(y) && is_finite_number(z) =>
            {
                Ok(Self { x, y, z })
            }
            (None, None, None) => Ok(Self::default()),
            _ => Err(fail(COMPONENTS_MESSAGE)),
        }
    }

    /// Builds a vector from a vector-like object, a positional `[x, y, z]`
    /// array, or a number broadcast to all components.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::InvalidArgument` for any other shape.
    pub fn from_value(target: &Value) -> Result<Self> {
        if let Some((x, y, z)) = target.xyz().filter(|_| is_3d_vector_like(target)) {
            return Self::new(x, y, z);
        }
        if let Value::Array(items) = target {
            let slot = |i: usize| numeric_slot(items.get(i)).map_err(|()| fail(COMPONENTS_MESSAGE));
            return Self::from_parts(slot(0)?, slot(1)?, slot(2)?);
        }
        match target.as_f64() {
            Some(n) if is_number(target) => Self::new(n, n, n),
            _ => Err(fail(UNEXPECTED_TARGET_MESSAGE)),
        }
    }

    /// Copies the fields of any 3D vector-like value.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::InvalidArgument` if `target` is not vector-like.
    pub fn from_vector<V: VectorLike3 + ?Sized>(target: &V) -> Result<Self> {
        let (x, y, z) = assert_3d_vector(target, None)?;
        Ok(Self { x, y, z })
    }

    /// Creates `(x, y, z)`; `y` and `z` default to `x` when absent or non-finite.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::InvalidArgument` if `x` is not finite.
    pub fn of(x: f64, y: Option<f64>, z: Option<f64>) -> Result<Self> {
        ensure(is_finite_number(x), "X, Y and Z must be a number.")?;
        let or_x = |c: Option<f64>| c.filter(|c| is_finite_number(*c)).unwrap_or(x);
        Ok(Self {
            x,
            y: or_x(y),
            z: or_x(z),
        })
    }

    /// Replaces the components with the operand.
    pub fn set(&mut self, value: impl Into<Operand3>) -> &mut Self {
        let [x, y, z] = value.into().broadcast(0.0);
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    /// Adds the operand to each component.
    ///
    /// A component operand is applied once, component-wise; no scalar pass
    /// follows it.
    pub fn add(&mut self, value: impl Into<Operand3>) -> &mut Self {
        let [x, y, z] = value.into().broadcast(0.0);
        self.x += x;
        self.y += y;
        self.z += z;
        self
    }

    /// Subtracts the operand from each component.
    pub fn subtract(&mut self, value: impl Into<Operand3>) -> &mut Self {
        let [x, y, z] = value.into().broadcast(0.0);
        self.x -= x;
        self.y -= y;
        self.z -= z;
        self
    }

    /// Multiplies each component by the operand.
    pub fn multiply(&mut self, value: impl Into<Operand3>) -> &mut Self {
        let [x, y, z] = value.into().broadcast(0.0);
        self.x *= x;
        self.y *= y;
        self.z *= z;
        self
    }

    /// Divides by the operand. An absent operand divides by `1`.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::DivideByZero` for an exact zero scalar.
    pub fn divide(&mut self, value: impl Into<Operand3>) -> Result<&mut Self> {
        let value = value.into();
        if value.is_zero_scalar() {
            tracing::debug!(vector = %self, "divide rejected a zero scalar");
            return Err(VectorError::DivideByZero);
        }
        Ok(self.divide_by(value))
    }

    fn divide_by(&mut self, value: Operand3) -> &mut Self {
        let [x, y, z] = value.broadcast(1.0);
        self.x /= x;
        self.y /= y;
        self.z /= z;
        self
    }

    /// Angle of the `(x, y)` projection from the positive x-axis.
    #[must_use]
    pub fn heading(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Points the `(x, y)` projection at `radians` with length equal to the
    /// full 3D magnitude. `z` is not touched.
    pub fn set_heading(&mut self, radians: f64) -> &mut Self {
        let m = self.mag();
        self.x = m * radians.cos();
        self.y = m * radians.sin();
        self
    }

    /// Makes every component non-negative.
    pub fn abs(&mut self) -> &mut Self {
        self.x = self.x.abs();
        self.y = self.y.abs();
        self.z = self.z.abs();
        self
    }

    /// Dot product with a 3D vector-like value.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::InvalidArgument` if `vector` is not vector-like.
    pub fn dot<V: VectorLike3 + ?Sized>(&self, vector: &V) -> Result<f64> {
        let (x, y, z) = assert_3d_vector(vector, None)?;
        Ok(self.x * x + self.y * y + self.z * z)
    }

    /// Replaces `self` with `self × vector`.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::InvalidArgument` if `vector` is not vector-like.
    pub fn cross<V: VectorLike3 + ?Sized>(&mut self, vector: &V) -> Result<&mut Self> {
        let (bx, by, bz) = assert_3d_vector(vector, None)?;
        // Every component reads the values from before the update.
        let Self { x, y, z } = *self;
        self.x = y * bz - z * by;
        self.y = z * bx - x * bz;
        self.z = x * by - y * bx;
        Ok(self)
    }

    /// Scales to unit length. The zero vector is left unchanged.
    pub fn normalize(&mut self) -> &mut Self {
        let magnitude = self.magnitude();
        if magnitude != 0.0 {
            self.divide_by(Operand::Scalar(magnitude));
        }
        self
    }

    /// Alias of [`Vector3::normalize`].
    pub fn norm(&mut self) -> &mut Self {
        self.normalize()
    }

    /// Exact component equality.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::InvalidArgument` if `vector` is not vector-like.
    #[allow(clippy::float_cmp)]
    pub fn equals<V: VectorLike3 + ?Sized>(&self, vector: &V) -> Result<bool> {
        let (x, y, z) = assert_3d_vector(vector, None)?;
        Ok(self.x == x && self.y == y && self.z == z)
    }

    /// Squared Euclidean length.
    #[must_use]
    pub fn mag_sq(&self) -> f64 {
        self.x.powi(2) + self.y.powi(2) + self.z.powi(2)
    }

    /// Euclidean length.
    #[must_use]
    pub fn mag(&self) -> f64 {
        self.mag_sq().sqrt()
    }

    /// Alias of [`Vector3::mag`].
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.mag()
    }

    /// Flips the sign of every component.
    pub fn negative(&mut self) -> &mut Self {
        self.multiply(-1.0)
    }

    /// Returns `true` if all components are finite.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        is_finite_number(self.x) && is_finite_number(self.y) && is_finite_number(self.z)
    }

    /// Plain `{x, y, z}` object form.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({ "x": self.x, "y": self.y, "z": self.z })
    }

    /// Components in declared order.
    #[must_use]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Iterates over `x`, `y`, then `z`.
    pub fn iter(&self) -> std::array::IntoIter<f64, 3> {
        self.to_array().into_iter()
    }

    /// The zero vector.
    #[must_use]
    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0, z: 0.0 }
    }

    /// All components set to `1`.
    #[must_use]
    pub fn one() -> Self {
        Self { x: 1.0, y: 1.0, z: 1.0 }
    }

    /// All components set to `-1`.
    #[must_use]
    pub fn neg() -> Self {
        Self { x: -1.0, y: -1.0, z: -1.0 }
    }

    /// Unit vector along negative x.
    #[must_use]
    pub fn left() -> Self {
        Self { x: -1.0, y: 0.0, z: 0.0 }
    }

    /// Unit vector along negative y.
    #[must_use]
    pub fn forward() -> Self {
        Self { x: 0.0, y: -1.0, z: 0.0 }
    }

    /// Unit vector along positive x.
    #[must_use]
    pub fn right() -> Self {
        Self { x: 1.0, y: 0.0, z: 0.0 }
    }

    /// Unit vector along positive y.
    #[must_use]
    pub fn back() -> Self {
        Self { x: 0.0, y: 1.0, z: 0.0 }
    }

    /// Unit vector along negative z.
    #[must_use]
    pub fn up() -> Self {
        Self { x: 0.0, y: 0.0, z: -1.0 }
    }

    /// Unit vector along positive z.
    #[must_use]
    pub fn down() -> Self {
        Self { x: 0.0, y: 0.0, z: 1.0 }
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Vector3 {},{},{}]", self.x, self.y, self.z)
    }
}

impl VectorLike3 for Vector3 {
    fn xyz(&self) -> Option<(f64, f64, f64)> {
        Some((self.x, self.y, self.z))
    }
}

// A 3D vector also exposes `x` and `y`.
impl VectorLike2 for Vector3 {
    fn xy(&self) -> Option<(f64, f64)> {
        Some((self.x, self.y))
    }
}

impl From<&Vector3> for Operand3 {
    fn from(value: &Vector3) -> Self {
        from_vector_like3(value)
    }
}

impl From<Vector3> for Operand3 {
    fn from(value: Vector3) -> Self {
        from_vector_like3(&value)
    }
}

impl From<&Vector3> for Operand2 {
    fn from(value: &Vector3) -> Self {
        from_vector_like2(value)
    }
}

impl TryFrom<&Value> for Vector3 {
    type Error = VectorError;

    fn try_from(value: &Value) -> Result<Self> {
        Self::from_value(value)
    }
}

impl From<Vector3> for nalgebra::Vector3<f64> {
    fn from(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl IntoIterator for Vector3 {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_array().into_iter()
    }
}

impl IntoIterator for &Vector3 {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Dot product of two 3D vector-like values.
///
/// # Errors
///
/// Returns `VectorError::InvalidArgument` if either argument is not vector-like.
pub fn dot<A, B>(a: &A, b: &B) -> Result<f64>
where
    A: VectorLike3 + ?Sized,
    B: VectorLike3 + ?Sized,
{
    let (ax, ay, az) = assert_3d_vector(a, None)?;
    let (bx, by, bz) = assert_3d_vector(b, None)?;
    Ok(ax * bx + ay * by + az * bz)
}

/// Euclidean distance between two 3D vector-like values.
///
/// # Errors
///
/// Returns `VectorError::InvalidArgument` if either argument is not vector-like.
pub fn distance<A, B>(a: &A, b: &B) -> Result<f64>
where
    A: VectorLike3 + ?Sized,
    B: VectorLike3 + ?Sized,
{
    let (ax, ay, az) = assert_3d_vector(a, None)?;
    let (bx, by, bz) = assert_3d_vector(b, None)?;
    Ok(((bx - ax).powi(2) + (by - ay).powi(2) + (bz - az).powi(2)).sqrt())
}

/// Exact component equality of two 3D vector-like values.
///
/// # Errors
///
/// Returns `VectorError::InvalidArgument` if either argument is not vector-like.
#[allow(clippy::float_cmp)]
pub fn equals<A, B>(a: &A, b: &B) -> Result<bool>
where
    A: VectorLike3 + ?Sized,
    B: VectorLike3 + ?Sized,
{
    let (ax, ay, az) = assert_3d_vector(a, None)?;
    let (bx, by, bz) = assert_3d_vector(b, None)?;
    Ok(ax == bx && ay == by && az == bz)
}

/// Linear interpolation `a + (b - a) * fraction`. Not clamped.
///
/// # Errors
///
/// Returns `VectorError::InvalidArgument` if either endpoint is not vector-like.
pub fn lerp<A, B>(a: &A, b: &B, fraction: f64) -> Result<Vector3>
where
    A: VectorLike3 + ?Sized,
    B: VectorLike3 + ?Sized,
{
    let a = Vector3::from_vector(a)?;
    let mut out = Vector3::from_vector(b)?;
    out.subtract(a).multiply(fraction).add(a);
    Ok(out)
}

/// Component-wise minimum over `vectors`, starting from the first one.
///
/// # Errors
///
/// Returns `VectorError::InvalidArgument` if `vectors` is empty or holds a
/// value that is not vector-like.
pub fn min<'a, V>(vectors: impl IntoIterator<Item = &'a V>) -> Result<Vector3>
where
    V: VectorLike3 + ?Sized + 'a,
{
    fold_extremum(vectors, f64::min)
}

/// Component-wise maximum over `vectors`, starting from the first one.
///
/// # Errors
///
/// Returns `VectorError::InvalidArgument` if `vectors` is empty or holds a
/// value that is not vector-like.
pub fn max<'a, V>(vectors: impl IntoIterator<Item = &'a V>) -> Result<Vector3>
where
    V: VectorLike3 + ?Sized + 'a,
{
    fold_extremum(vectors, f64::max)
}

fn fold_extremum<'a, V>(
    vectors: impl IntoIterator<Item = &'a V>,
    pick: fn(f64, f64) -> f64,
) -> Result<Vector3>
where
    V: VectorLike3 + ?Sized + 'a,
{
    let mut vectors = vectors.into_iter();
    let Some(first) = vectors.next() else {
        return Err(fail("The argument must be a Vector like object {x, y, z}."));
    };
    let mut out = Vector3::from_vector(first)?;
    for vector in vectors {
        let (x, y, z) = assert_3d_vector(vector, None)?;
        out.x = pick(out.x, x);
        out.y = pick(out.y, y);
        out.z = pick(out.z, z);
    }
    Ok(out)
}
