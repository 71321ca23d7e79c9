//! # dl_nn - Learning-Algorithm Building Blocks for dl_tensor
//!
//! This crate hosts the collaborators that consume the tensor core without
//! being part of it. For now that is the loss capability:
//!
//! - **[`Loss`]**: the abstract single-method contract,
//!   `compute_loss(sequence of scalars) -> scalar`
//! - **[`MeanSquaredError`]**: a reference implementor
//! - **[`mse_loss`]**: MSE between two tensors, built from the core's own
//!   arithmetic
//!
//! ## Example
//!
//! ```
//! use dl_nn::{Loss, MeanSquaredError};
//! use dl_tensor::prelude::*;
//!
//! let pred = Tensor::from(vec![0.0, 0.0]);
//! let loss = MeanSquaredError::new(vec![1.0, 1.0]);
//! assert!((loss.compute_loss(pred.as_slice()) - 1.0).abs() < 1e-12);
//! ```

pub mod loss;

// Re-exports for convenience
pub use loss::{mse_loss, Loss, MeanSquaredError};
