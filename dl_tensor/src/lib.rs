//! # dl_tensor - Dense Tensors for Learning Algorithms
//!
//! This crate provides the foundational data type for the `dl` workspace: a
//! dense, dynamically-sized tensor of `f64` scalars with element-wise
//! arithmetic, scalar arithmetic, and statistical reductions.
//!
//! ## Overview
//!
//! The core abstractions are:
//! - [`Shape`] and [`Strides`] - Tensor shape and memory layout
//! - [`Tensor`] - Flat row-major storage with arithmetic and reductions
//! - [`Error`] - The failure taxonomy of fallible operations
//!
//! The nested rank-N semantics (a rank-N tensor as an ordered sequence of
//! rank-(N-1) tensors) are realized on a single contiguous buffer; "children"
//! are slices along the first dimension. Every operation is pure and
//! fail-fast: shape mismatches, zero divisors, and empty-tensor reductions
//! surface as [`Error`] values with no partial results.
//!
//! ## Example
//!
//! ```
//! use dl_tensor::prelude::*;
//!
//! let row = Tensor::from(vec![10.0, 11.0]);
//! assert_eq!(row.sum(), 21.0);
//! assert_eq!(row.mean().unwrap(), 10.5);
//!
//! let mut grid = Tensor::empty(2);
//! grid.push_sub(&row).unwrap();
//! grid.push_sub(&row).unwrap();
//!
//! let doubled = grid.add(&grid).unwrap().mul_scalar(2.0);
//! assert_eq!(doubled.as_slice(), &[40.0, 44.0, 40.0, 44.0]);
//! ```

pub mod error;
pub mod shape;
pub mod tensor;

pub use error::{Error, Result};
pub use shape::{Shape, Strides};
pub use tensor::Tensor;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::shape::{Shape, Strides};
    pub use crate::tensor::Tensor;
}
