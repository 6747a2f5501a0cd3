use thiserror::Error;

/// Errors raised by vector construction and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    /// A constructor argument or operand did not have the required shape.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// `divide` was called with an exact zero scalar.
    #[error("Vector.divide(); Argument is a `zero` value")]
    DivideByZero,
}

impl VectorError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Convenience type alias for results using [`VectorError`].
pub type Result<T> = std::result::Result<T, VectorError>;
