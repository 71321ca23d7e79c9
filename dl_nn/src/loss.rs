//! Loss functions.

use dl_tensor::prelude::*;

/// A scalar loss computed from a flat sequence of leaf values.
///
/// Implementors consume the leaves a tensor exposes through
/// [`Tensor::as_slice`] and reduce them to a single scalar; the tensor core
/// itself carries no loss computation.
pub trait Loss {
    fn compute_loss(&self, values: &[f64]) -> f64;
}

/// Mean Squared Error against a fixed target sequence:
/// mean((value - target)^2)
pub struct MeanSquaredError {
    target: Vec<f64>,
}

impl MeanSquaredError {
    /// Create an MSE loss for the given target sequence.
    pub fn new(target: Vec<f64>) -> Self {
        MeanSquaredError { target }
    }
}

impl Loss for MeanSquaredError {
    fn compute_loss(&self, values: &[f64]) -> f64 {
        assert_eq!(
            values.len(),
            self.target.len(),
            "loss input length {} doesn't match target length {}",
            values.len(),
            self.target.len()
        );
        let sum: f64 = values
            .iter()
            .zip(self.target.iter())
            .map(|(v, t)| (v - t) * (v - t))
            .sum();
        sum / values.len() as f64
    }
}

/// Mean Squared Error between two tensors: mean((pred - target)^2)
pub fn mse_loss(pred: &Tensor, target: &Tensor) -> Result<f64> {
    let diff = pred.sub(target)?;
    let sq = diff.mul(&diff)?;
    sq.mean()
}
