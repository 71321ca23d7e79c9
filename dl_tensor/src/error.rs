//! Error types for tensor operations.

use thiserror::Error;

use crate::shape::Shape;

/// Result type alias using this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tensor operations.
///
/// Every failure is detected at the point of violation and surfaces
/// immediately; no operation produces a partial result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Element-wise operation invoked on operands of differing shape.
    #[error("tensors must be of the same shape for element-wise operations: {lhs} vs {rhs}")]
    ShapeMismatch {
        /// Left-hand operand shape.
        lhs: Shape,
        /// Right-hand operand shape.
        rhs: Shape,
    },

    /// A zero divisor was encountered in element-wise or scalar division.
    #[error("division by zero encountered")]
    DivideByZero,

    /// Mean requested on a tensor with no leaf elements.
    #[error("cannot compute the mean of an empty tensor")]
    EmptyTensor,

    /// Standard deviation requested with fewer than 2 sub-tensors.
    #[error("cannot compute standard deviation with fewer than 2 sub-tensors (got {children})")]
    InsufficientData {
        /// Number of sub-tensors available.
        children: usize,
    },
}
