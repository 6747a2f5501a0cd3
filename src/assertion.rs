use crate::error::{Result, VectorError};
use crate::types::{is_2d_vector_like, is_3d_vector_like, VectorLike2, VectorLike3};

const DEFAULT_2D_MESSAGE: &str = "The argument must be a Vector like object {x, y}.";
const DEFAULT_3D_MESSAGE: &str = "The argument must be a Vector like object {x, y, z}.";

/// Passes when `condition` holds, otherwise fails with `InvalidArgument`.
///
/// # Errors
///
/// Returns `VectorError::InvalidArgument` carrying `message` if `condition` is false.
pub fn ensure(condition: bool, message: &str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(fail(message))
    }
}

/// Builds an `InvalidArgument` failure.
#[must_use]
pub fn fail(message: &str) -> VectorError {
    tracing::debug!(reason = message, "rejected argument");
    VectorError::invalid(message)
}

/// Checks that `value` is 2D vector-like and returns its `x`, `y` fields.
///
/// # Errors
///
/// Returns `VectorError::InvalidArgument` with `message` (or a default) otherwise.
pub fn assert_2d_vector<V: VectorLike2 + ?Sized>(
    value: &V,
    message: Option<&str>,
) -> Result<(f64, f64)> {
    match value.xy() {
        Some(xy) if is_2d_vector_like(value) => Ok(xy),
        _ => Err(fail(message.unwrap_or(DEFAULT_2D_MESSAGE))),
    }
}

/// Checks that `value` is 3D vector-like and returns its `x`, `y`, `z` fields.
///
/// # Errors
///
/// Returns `VectorError::InvalidArgument` with `message` (or a default) otherwise.
pub fn assert_3d_vector<V: VectorLike3 + ?Sized>(
    value: &V,
    message: Option<&str>,
) -> Result<(f64, f64, f64)> {
    match value.xyz() {
        Some(xyz) if is_3d_vector_like(value) => Ok(xyz),
        _ => Err(fail(message.unwrap_or(DEFAULT_3D_MESSAGE))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn ensure_passes_and_fails() {
        assert!(ensure(true, "unused").is_ok());
        assert_eq!(
            ensure(false, "boom"),
            Err(VectorError::InvalidArgument("boom".into()))
        );
    }

    #[test]
    fn assert_2d_returns_fields() {
        assert_eq!(assert_2d_vector(&json!({"x": 3, "y": 4}), None), Ok((3.0, 4.0)));
    }

    #[test]
    fn assert_2d_uses_default_message() {
        let err = assert_2d_vector(&json!({"x": 3}), None).unwrap_err();
        assert_eq!(err, VectorError::InvalidArgument(DEFAULT_2D_MESSAGE.into()));
    }

    #[test]
    fn assert_3d_uses_caller_message() {
        let err = assert_3d_vector(&json!({"x": 1, "y": 2}), Some("need z")).unwrap_err();
        assert_eq!(err, VectorError::InvalidArgument("need z".into()));
    }

    #[test]
    fn assert_rejects_non_finite_fields() {
        let v = nalgebra::Vector3::new(1.0, f64::INFINITY, 0.0);
        assert!(assert_3d_vector(&v, None).is_err());
    }
}
