//! CLI demo for the tensor core.
//!
//! Demonstrates constructing tensors, element-wise and scalar arithmetic,
//! statistical reductions, and the loss collaborator.

use dl_nn::{Loss, MeanSquaredError};
use dl_tensor::prelude::*;

fn main() -> Result<()> {
    println!("=== Tensor Demo ===\n");

    // Rank-1 tensor built by appending scalars
    let mut row = Tensor::empty(1);
    row.push(10.0);
    row.push(11.0);

    println!("rank-1 tensor:");
    print!("{}", row);
    println!("sum     = {}", row.sum());
    println!("average = {}\n", row.mean()?);

    // Rank-2 tensor of two identical rows
    let mut grid = Tensor::empty(2);
    grid.push_sub(&row)?;
    grid.push_sub(&row)?;

    println!("rank-2 tensor:");
    print!("{}", grid);
    println!("sum = {}\n", grid.sum());

    // Element-wise doubling, then scalar scaling
    let grid = grid.add(&grid)?;
    println!("after t = t + t:");
    print!("{}", grid);

    let grid = grid.mul_scalar(2.0);
    println!("after t = t * 2:");
    print!("{}", grid);
    println!();

    // Hierarchical statistics over a tensor with distinct child means
    let mut stats = Tensor::empty(2);
    stats.push_sub(&Tensor::from(vec![2.0, 4.0]))?;
    stats.push_sub(&Tensor::from(vec![6.0, 8.0]))?;

    println!("statistics over child means:");
    print!("{}", stats);
    println!("mean    = {}", stats.mean()?);
    println!(
        "std dev = {:.6} (expected: sqrt(8) = {:.6})\n",
        stats.std_dev()?,
        8.0_f64.sqrt()
    );

    // Loss collaborator consuming the tensor's leaves
    let target = vec![36.0, 40.0, 36.0, 40.0];
    let loss = MeanSquaredError::new(target);
    println!(
        "mse against shifted target = {}",
        loss.compute_loss(grid.as_slice())
    );

    Ok(())
}
