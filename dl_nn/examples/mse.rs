//! Mean-squared-error example.
//!
//! Feeds a tensor's leaf values to the loss collaborator, both through the
//! abstract trait and through the tensor-level helper.

use dl_nn::{mse_loss, Loss, MeanSquaredError};
use dl_tensor::prelude::*;

fn main() -> Result<()> {
    let pred = Tensor::from(vec![1.0, 2.0, 3.0]);
    let target = Tensor::from(vec![1.5, 2.0, 2.5]);

    println!("predictions: {}", pred.to_string().trim_end());
    println!("targets:     {}", target.to_string().trim_end());

    let loss = MeanSquaredError::new(target.as_slice().to_vec());
    println!("loss over leaves: {:.6}", loss.compute_loss(pred.as_slice()));
    println!("mse_loss:         {:.6}", mse_loss(&pred, &target)?);

    Ok(())
}
