//! Mutable 2D and 3D vectors with lenient operand coercion.
//!
//! Arithmetic methods take anything convertible into an [`Operand`]: a bare
//! number (broadcast to every component), another vector or vector-like value
//! (applied component-wise), or nothing at all.

pub mod assertion;
pub mod error;
pub mod operand;
pub mod types;
pub mod vector2;
pub mod vector3;

pub use assertion::{assert_2d_vector, assert_3d_vector};
pub use error::{Result, VectorError};
pub use operand::{Operand, Operand2, Operand3};
pub use types::{is_2d_vector_like, is_3d_vector_like, VectorLike2, VectorLike3};
pub use vector2::Vector2;
pub use vector3::Vector3;
