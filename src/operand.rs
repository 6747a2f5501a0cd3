//! Operands accepted by the in-place arithmetic methods.
//!
//! Every accepted input shape is converted once into an [`Operand`]; the
//! vector methods never inspect their argument's structure themselves.

use serde_json::Value;

use crate::types::{is_2d_vector_like, is_3d_vector_like, VectorLike2, VectorLike3};

/// Right-hand side of `set`, `add`, `subtract`, `multiply` and `divide`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<C> {
    /// No value; the scalar fallback applies.
    Absent,
    /// A number broadcast to every component.
    Scalar(f64),
    /// Per-component values applied component-wise.
    Components(C),
}

/// Operand for [`Vector2`](crate::Vector2) methods.
pub type Operand2 = Operand<[f64; 2]>;

/// Operand for [`Vector3`](crate::Vector3) methods.
pub type Operand3 = Operand<[f64; 3]>;

impl<const N: usize> Operand<[f64; N]> {
    /// Expands the operand to one value per component.
    ///
    /// Scalars that are zero or `NaN`, and absent operands, become `fallback`.
    /// Components are returned as-is and the scalar fallback is never applied
    /// on top of them, so a vector operand affects each component exactly once.
    #[must_use]
    pub fn broadcast(self, fallback: f64) -> [f64; N] {
        match self {
            Self::Components(c) => c,
            Self::Scalar(s) if s != 0.0 && !s.is_nan() => [s; N],
            Self::Scalar(_) | Self::Absent => [fallback; N],
        }
    }

    /// Returns `true` for a scalar that is exactly zero (either sign).
    #[must_use]
    pub fn is_zero_scalar(&self) -> bool {
        matches!(self, Self::Scalar(s) if *s == 0.0)
    }
}

impl<C> From<f64> for Operand<C> {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl<C> From<Option<f64>> for Operand<C> {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Absent, Self::Scalar)
    }
}

impl<const N: usize> From<[f64; N]> for Operand<[f64; N]> {
    fn from(value: [f64; N]) -> Self {
        Self::Components(value)
    }
}

impl From<(f64, f64)> for Operand2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::Components([x, y])
    }
}

impl From<(f64, f64, f64)> for Operand3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::Components([x, y, z])
    }
}

impl From<&Value> for Operand2 {
    fn from(value: &Value) -> Self {
        match from_vector_like2(value) {
            Self::Absent => value.as_f64().map_or(Self::Absent, Self::Scalar),
            op => op,
        }
    }
}

impl From<&Value> for Operand3 {
    fn from(value: &Value) -> Self {
        match from_vector_like3(value) {
            Self::Absent => value.as_f64().map_or(Self::Absent, Self::Scalar),
            op => op,
        }
    }
}

impl From<&nalgebra::Vector2<f64>> for Operand2 {
    fn from(value: &nalgebra::Vector2<f64>) -> Self {
        from_vector_like2(value)
    }
}

impl From<&nalgebra::Vector3<f64>> for Operand3 {
    fn from(value: &nalgebra::Vector3<f64>) -> Self {
        from_vector_like3(value)
    }
}

/// Component operand when `value` is 2D vector-like, otherwise `Absent`.
pub(crate) fn from_vector_like2<V: VectorLike2 + ?Sized>(value: &V) -> Operand2 {
    match value.xy() {
        Some((x, y)) if is_2d_vector_like(value) => Operand::Components([x, y]),
        _ => Operand::Absent,
    }
}

/// Component operand when `value` is 3D vector-like, otherwise `Absent`.
pub(crate) fn from_vector_like3<V: VectorLike3 + ?Sized>(value: &V) -> Operand3 {
    match value.xyz() {
        Some((x, y, z)) if is_3d_vector_like(value) => Operand::Components([x, y, z]),
        _ => Operand::Absent,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn scalar_broadcasts() {
        assert_eq!(Operand2::Scalar(3.0).broadcast(0.0), [3.0, 3.0]);
        assert_eq!(Operand3::Scalar(-1.0).broadcast(0.0), [-1.0, -1.0, -1.0]);
    }

    #[test]
    fn falsy_scalars_use_fallback() {
        assert_eq!(Operand2::Absent.broadcast(1.0), [1.0, 1.0]);
        assert_eq!(Operand2::Scalar(0.0).broadcast(1.0), [1.0, 1.0]);
        assert_eq!(Operand2::Scalar(f64::NAN).broadcast(0.0), [0.0, 0.0]);
    }

    #[test]
    fn components_pass_through() {
        assert_eq!(Operand2::from([1.0, 2.0]).broadcast(0.0), [1.0, 2.0]);
        assert_eq!(Operand3::from((1.0, 2.0, 3.0)).broadcast(9.0), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn zero_scalar_detection() {
        assert!(Operand2::Scalar(0.0).is_zero_scalar());
        assert!(Operand2::Scalar(-0.0).is_zero_scalar());
        assert!(!Operand2::Absent.is_zero_scalar());
        assert!(!Operand2::Components([0.0, 0.0]).is_zero_scalar());
    }

    #[test]
    fn option_maps_to_absent() {
        assert_eq!(Operand2::from(None::<f64>), Operand2::Absent);
        assert_eq!(Operand2::from(Some(2.0_f64)), Operand2::Scalar(2.0));
    }

    #[test]
    fn json_values_are_classified() {
        assert_eq!(Operand2::from(&json!({"x": 1, "y": 2})), Operand2::Components([1.0, 2.0]));
        assert_eq!(Operand2::from(&json!(4)), Operand2::Scalar(4.0));
        assert_eq!(Operand2::from(&json!("four")), Operand2::Absent);
        assert_eq!(Operand3::from(&json!({"x": 1, "y": 2})), Operand3::Absent);
        assert_eq!(
            Operand3::from(&json!({"x": 1, "y": 2, "z": 3})),
            Operand3::Components([1.0, 2.0, 3.0])
        );
    }

    #[test]
    fn nalgebra_vectors_convert() {
        let v = nalgebra::Vector2::new(1.0_f64, 2.0);
        assert_eq!(Operand2::from(&v), Operand2::Components([1.0, 2.0]));
        let bad = nalgebra::Vector3::new(1.0, f64::NAN, 2.0);
        assert_eq!(Operand3::from(&bad), Operand3::Absent);
    }
}
