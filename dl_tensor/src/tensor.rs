//! Dense tensor storage and its arithmetic and reductions.

use std::fmt;

use crate::error::{Error, Result};
use crate::shape::{Shape, Strides};

/// A dense tensor of `f64` scalars in row-major order.
///
/// The nested rank-N structure is stored as a single flat buffer plus an
/// explicit shape; a "child" of a rank-N tensor is its slice along the
/// first dimension, and a leaf row is an innermost-dimension slice.
/// All arithmetic is pure: operands are never mutated and every operation
/// returns a newly constructed tensor.
#[derive(Clone, Debug, PartialEq)]
pub struct Tensor {
    data: Vec<f64>,
    shape: Shape,
    strides: Strides,
}

impl Tensor {
    /// Create a new tensor from data and shape.
    pub fn new(data: Vec<f64>, shape: Shape) -> Self {
        assert!(shape.ndim() >= 1, "tensors have rank >= 1");
        assert_eq!(
            data.len(),
            shape.numel(),
            "Data length {} doesn't match shape {} (numel={})",
            data.len(),
            shape,
            shape.numel()
        );
        let strides = shape.contiguous_strides();
        Tensor { data, shape, strides }
    }

    /// Create an empty tensor of the given rank (all dimensions zero).
    pub fn empty(rank: usize) -> Self {
        Self::new(Vec::new(), Shape::new(vec![0; rank]))
    }

    /// Create a tensor of zeros with the given shape.
    pub fn zeros(shape: &Shape) -> Self {
        Self::new(vec![0.0; shape.numel()], shape.clone())
    }

    /// Create a tensor filled with a constant value.
    pub fn full(shape: &Shape, value: f64) -> Self {
        Self::new(vec![value; shape.numel()], shape.clone())
    }

    /// Create a tensor from a flat data vector and shape.
    pub fn from_vec(data: Vec<f64>, shape: Shape) -> Self {
        Self::new(data, shape)
    }

    // === Accessors ===

    /// Get the shape of this tensor.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Get the strides of this tensor.
    pub fn strides(&self) -> &Strides {
        &self.strides
    }

    /// Number of dimensions (the tensor rank).
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Length at the outermost nesting level: the element count of a rank-1
    /// tensor, or the number of children of a rank-N tensor.
    pub fn len(&self) -> usize {
        self.shape.dim(0)
    }

    /// Check if the outermost level holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of leaf scalars.
    pub fn numel(&self) -> usize {
        self.shape.numel()
    }

    /// Get the leaf values as a contiguous slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Get the leaf values as a mutable contiguous slice.
    pub fn as_slice_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Iterate over all leaf values in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.data.iter()
    }

    /// Get the leaf value at the given multi-dimensional indices.
    pub fn get(&self, indices: &[usize]) -> Option<f64> {
        if indices.len() != self.ndim() {
            return None;
        }
        if indices.iter().zip(self.shape.dims()).any(|(&i, &d)| i >= d) {
            return None;
        }
        Some(self.data[self.strides.index(indices)])
    }

    // === Appending ===

    /// Append a scalar to a rank-1 tensor.
    pub fn push(&mut self, value: f64) {
        assert_eq!(self.ndim(), 1, "push appends scalars to rank-1 tensors only");
        self.data.push(value);
        self.shape.0[0] += 1;
    }

    /// Append a rank-(N-1) child to a rank-N tensor.
    ///
    /// The first child pushed into a fully-empty tensor fixes the trailing
    /// dimensions; subsequent children must match them.
    pub fn push_sub(&mut self, sub: &Tensor) -> Result<()> {
        assert_eq!(
            sub.ndim() + 1,
            self.ndim(),
            "child rank must be one below the parent rank"
        );

        if self.shape.dims().iter().all(|&d| d == 0) {
            let mut dims = Vec::with_capacity(self.ndim());
            dims.push(1);
            dims.extend_from_slice(sub.shape.dims());
            self.data.extend_from_slice(&sub.data);
            self.shape = Shape::new(dims);
            self.strides = self.shape.contiguous_strides();
            return Ok(());
        }

        let expected = Shape::new(self.shape.dims()[1..].to_vec());
        if sub.shape != expected {
            return Err(Error::ShapeMismatch {
                lhs: expected,
                rhs: sub.shape.clone(),
            });
        }
        self.data.extend_from_slice(&sub.data);
        self.shape.0[0] += 1;
        self.strides = self.shape.contiguous_strides();
        Ok(())
    }

    // === Reductions ===

    /// Arithmetic sum of all leaf values. Returns 0.0 on an empty tensor.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Mean of all leaf values: `sum()` divided by the total leaf count.
    ///
    /// Fails with [`Error::EmptyTensor`] when the tensor holds no leaves.
    pub fn mean(&self) -> Result<f64> {
        let count = self.numel();
        if count == 0 {
            return Err(Error::EmptyTensor);
        }
        Ok(self.sum() / count as f64)
    }

    /// Sample standard deviation over the children's means.
    ///
    /// Variance is the sum of squared deviations of each child's own mean
    /// from the overall [`mean`](Self::mean), divided by `len() - 1`. This
    /// is a dispersion measure over sub-tensor means, not over the leaf
    /// values themselves.
    ///
    /// Fails with [`Error::InsufficientData`] when fewer than 2 children
    /// exist, and with [`Error::EmptyTensor`] when there are no leaves.
    pub fn std_dev(&self) -> Result<f64> {
        let children = self.len();
        if children < 2 {
            return Err(Error::InsufficientData { children });
        }
        let mean = self.mean()?;
        let child_len = self.numel() / children;

        let mut variance = 0.0;
        for child in self.data.chunks(child_len) {
            let child_mean = child.iter().sum::<f64>() / child_len as f64;
            variance += (child_mean - mean) * (child_mean - mean);
        }
        variance /= (children - 1) as f64;
        Ok(variance.sqrt())
    }

    // === Element-wise operations ===

    /// Element-wise addition: self + other.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Element-wise subtraction: self - other.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Element-wise multiplication: self * other.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a * b)
    }

    /// Element-wise division: self / other.
    ///
    /// Fails with [`Error::DivideByZero`] when any divisor element is 0.0;
    /// no partial result is produced.
    pub fn div(&self, other: &Self) -> Result<Self> {
        self.ensure_same_shape(other)?;
        let mut data = Vec::with_capacity(self.data.len());
        for (&a, &b) in self.data.iter().zip(other.data.iter()) {
            if b == 0.0 {
                return Err(Error::DivideByZero);
            }
            data.push(a / b);
        }
        Ok(Tensor::new(data, self.shape.clone()))
    }

    // === Scalar operations ===

    /// Add a scalar to every element.
    pub fn add_scalar(&self, scalar: f64) -> Self {
        self.map(|v| v + scalar)
    }

    /// Subtract a scalar from every element.
    pub fn sub_scalar(&self, scalar: f64) -> Self {
        self.map(|v| v - scalar)
    }

    /// Multiply every element by a scalar.
    pub fn mul_scalar(&self, scalar: f64) -> Self {
        self.map(|v| v * scalar)
    }

    /// Divide every element by a scalar.
    ///
    /// Fails with [`Error::DivideByZero`] when the scalar is 0.0.
    pub fn div_scalar(&self, scalar: f64) -> Result<Self> {
        if scalar == 0.0 {
            return Err(Error::DivideByZero);
        }
        Ok(self.map(|v| v / scalar))
    }

    // === Helpers ===

    fn ensure_same_shape(&self, other: &Self) -> Result<()> {
        if self.shape != other.shape {
            return Err(Error::ShapeMismatch {
                lhs: self.shape.clone(),
                rhs: other.shape.clone(),
            });
        }
        Ok(())
    }

    fn zip_with<F>(&self, other: &Self, op: F) -> Result<Self>
    where
        F: Fn(f64, f64) -> f64,
    {
        self.ensure_same_shape(other)?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| op(a, b))
            .collect();
        Ok(Tensor::new(data, self.shape.clone()))
    }

    fn map<F>(&self, op: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let data = self.data.iter().map(|&v| op(v)).collect();
        Tensor::new(data, self.shape.clone())
    }
}

impl From<Vec<f64>> for Tensor {
    fn from(data: Vec<f64>) -> Self {
        let len = data.len();
        Tensor::new(data, Shape::new(vec![len]))
    }
}

/// Renders one leaf row per line, elements space-separated in default
/// numeric formatting. No brackets or shape annotations.
impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.shape.dim(self.ndim() - 1);
        let rows: usize = self.shape.dims()[..self.ndim() - 1].iter().product();
        for row in 0..rows {
            if width > 0 {
                let start = row * width;
                for (i, v) in self.data[start..start + width].iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", v)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
