//! Numeric predicates and the structural "vector-like" traits.
//!
//! Untyped host values are modelled as [`serde_json::Value`]: `Null` (or a
//! missing field) is absent, numbers are numbers, and objects exposing numeric
//! `x`, `y` (and `z`) fields are vector-like regardless of what else they carry.

use serde_json::Value;

/// Returns `true` unless the value is absent.
#[must_use]
pub fn is_defined(value: &Value) -> bool {
    !value.is_null()
}

/// Returns `true` if the value is absent.
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    value.is_null()
}

/// Returns `true` if the value is a finite number.
#[must_use]
pub fn is_number(value: &Value) -> bool {
    value.as_f64().is_some_and(is_finite_number)
}

/// Returns `true` for finite floats; rejects `NaN` and both infinities.
#[must_use]
pub fn is_finite_number(value: f64) -> bool {
    value.is_finite()
}

/// Returns `true` if the value is an array-like sequence.
#[must_use]
pub fn is_array(value: &Value) -> bool {
    value.is_array()
}

/// A value that may structurally expose `x` and `y` fields.
pub trait VectorLike2 {
    /// The raw `x`, `y` fields, or `None` when they are not both present.
    fn xy(&self) -> Option<(f64, f64)>;
}

/// A value that may structurally expose `x`, `y` and `z` fields.
pub trait VectorLike3 {
    /// The raw `x`, `y`, `z` fields, or `None` when they are not all present.
    fn xyz(&self) -> Option<(f64, f64, f64)>;
}

/// Returns `true` if `value` exposes finite `x` and `y` fields.
#[must_use]
pub fn is_2d_vector_like<V: VectorLike2 + ?Sized>(value: &V) -> bool {
    value
        .xy()
        .is_some_and(|(x, y)| is_finite_number(x) && is_finite_number(y))
}

/// Returns `true` if `value` exposes finite `x`, `y` and `z` fields.
#[must_use]
pub fn is_3d_vector_like<V: VectorLike3 + ?Sized>(value: &V) -> bool {
    value.xyz().is_some_and(|(x, y, z)| {
        is_finite_number(x) && is_finite_number(y) && is_finite_number(z)
    })
}

impl VectorLike2 for Value {
    fn xy(&self) -> Option<(f64, f64)> {
        Some((self["x"].as_f64()?, self["y"].as_f64()?))
    }
}

impl VectorLike3 for Value {
    fn xyz(&self) -> Option<(f64, f64, f64)> {
        Some((self["x"].as_f64()?, self["y"].as_f64()?, self["z"].as_f64()?))
    }
}

impl VectorLike2 for nalgebra::Vector2<f64> {
    fn xy(&self) -> Option<(f64, f64)> {
        Some((self.x, self.y))
    }
}

impl VectorLike3 for nalgebra::Vector3<f64> {
    fn xyz(&self) -> Option<(f64, f64, f64)> {
        Some((self.x, self.y, self.z))
    }
}

impl<V: VectorLike2 + ?Sized> VectorLike2 for &V {
    fn xy(&self) -> Option<(f64, f64)> {
        (**self).xy()
    }
}

impl<V: VectorLike3 + ?Sized> VectorLike3 for &V {
    fn xyz(&self) -> Option<(f64, f64, f64)> {
        (**self).xyz()
    }
}

/// Reads an optional numeric slot: absent is `Ok(None)`, a number is
/// `Ok(Some(_))`, anything else is `Err(())`.
pub(crate) fn numeric_slot(value: Option<&Value>) -> Result<Option<f64>, ()> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v.as_f64().map(Some).ok_or(()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn defined_and_empty_are_complements() {
        for v in [json!(null), json!(0), json!("a"), json!([]), json!({})] {
            assert_ne!(is_defined(&v), is_empty(&v), "v={v}");
        }
        assert!(is_empty(&json!(null)));
        assert!(is_defined(&json!(0)));
    }

    #[test]
    fn number_rejects_non_finite_and_non_numbers() {
        assert!(is_number(&json!(1.5)));
        assert!(is_number(&json!(-3)));
        assert!(!is_number(&json!("1")));
        assert!(!is_number(&json!(null)));
        assert!(!is_finite_number(f64::NAN));
        assert!(!is_finite_number(f64::INFINITY));
        assert!(!is_finite_number(f64::NEG_INFINITY));
    }

    #[test]
    fn array_detection() {
        assert!(is_array(&json!([1, 2])));
        assert!(!is_array(&json!({"x": 1, "y": 2})));
    }

    #[test]
    fn vector_like_is_structural() {
        assert!(is_2d_vector_like(&json!({"x": 1, "y": 2})));
        assert!(is_2d_vector_like(&json!({"x": 1, "y": 2, "name": "extra"})));
        assert!(is_2d_vector_like(&json!({"x": 1, "y": 2, "z": 3})));
        assert!(!is_2d_vector_like(&json!({"x": 1})));
        assert!(!is_2d_vector_like(&json!({"x": "1", "y": 2})));
        assert!(!is_2d_vector_like(&json!([1, 2])));
        assert!(!is_2d_vector_like(&json!(null)));

        assert!(is_3d_vector_like(&json!({"x": 1, "y": 2, "z": 3})));
        assert!(!is_3d_vector_like(&json!({"x": 1, "y": 2})));
    }

    #[test]
    fn vector_like_requires_finite_fields() {
        let v = nalgebra::Vector2::new(f64::NAN, 1.0);
        assert!(!is_2d_vector_like(&v));
        let v = nalgebra::Vector3::new(1.0_f64, 2.0, 3.0);
        assert!(is_3d_vector_like(&v));
    }

    #[test]
    fn numeric_slot_classifies() {
        assert_eq!(numeric_slot(None), Ok(None));
        assert_eq!(numeric_slot(Some(&json!(null))), Ok(None));
        assert_eq!(numeric_slot(Some(&json!(2))), Ok(Some(2.0)));
        assert_eq!(numeric_slot(Some(&json!("2"))), Err(()));
    }
}
