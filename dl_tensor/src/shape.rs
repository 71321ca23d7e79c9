//! Shape and stride utilities for tensors.

use std::fmt;

/// A tensor shape (per-dimension lengths).
///
/// Every tensor in this crate has rank >= 1; a rank-N shape holds N lengths.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Shape(pub Vec<usize>);

impl Shape {
    /// Create a new shape from dimensions.
    pub fn new(dims: Vec<usize>) -> Self {
        Shape(dims)
    }

    /// Number of dimensions (the tensor rank).
    pub fn ndim(&self) -> usize {
        self.0.len()
    }

    /// Get dimension at index.
    pub fn dim(&self, idx: usize) -> usize {
        self.0[idx]
    }

    /// Get dimensions as slice.
    pub fn dims(&self) -> &[usize] {
        &self.0
    }

    /// Total number of elements. Zero when any dimension is zero.
    pub fn numel(&self) -> usize {
        self.0.iter().product()
    }

    /// Compute row-major (C-contiguous) strides for this shape.
    pub fn contiguous_strides(&self) -> Strides {
        let ndim = self.0.len();
        if ndim == 0 {
            return Strides(vec![]);
        }

        let mut strides = vec![1usize; ndim];
        for i in (0..ndim - 1).rev() {
            strides[i] = strides[i + 1] * self.0[i + 1];
        }
        Strides(strides)
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape({:?})", self.0)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, d) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", d)?;
        }
        if self.0.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

impl From<Vec<usize>> for Shape {
    fn from(v: Vec<usize>) -> Self {
        Shape(v)
    }
}

impl From<&[usize]> for Shape {
    fn from(s: &[usize]) -> Self {
        Shape(s.to_vec())
    }
}

/// Tensor strides (step size in each dimension).
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Strides(pub Vec<usize>);

impl Strides {
    pub fn new(strides: Vec<usize>) -> Self {
        Strides(strides)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Compute flat index from multi-dimensional indices.
    pub fn index(&self, indices: &[usize]) -> usize {
        debug_assert_eq!(self.0.len(), indices.len());
        self.0.iter().zip(indices.iter()).map(|(s, i)| s * i).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_basics() {
        let s = Shape::new(vec![2, 3, 4]);
        assert_eq!(s.ndim(), 3);
        assert_eq!(s.dim(0), 2);
        assert_eq!(s.dim(1), 3);
        assert_eq!(s.dim(2), 4);
        assert_eq!(s.numel(), 24);
    }

    #[test]
    fn test_empty_dimension() {
        let s = Shape::new(vec![2, 0]);
        assert_eq!(s.ndim(), 2);
        assert_eq!(s.numel(), 0);
    }

    #[test]
    fn test_contiguous_strides() {
        let s = Shape::new(vec![2, 3, 4]);
        let strides = s.contiguous_strides();
        assert_eq!(strides.0, vec![12, 4, 1]);

        let s2 = Shape::new(vec![3, 4]);
        let strides2 = s2.contiguous_strides();
        assert_eq!(strides2.0, vec![4, 1]);
    }

    #[test]
    fn test_stride_index() {
        let strides = Strides::new(vec![12, 4, 1]);
        assert_eq!(strides.index(&[0, 0, 0]), 0);
        assert_eq!(strides.index(&[0, 0, 1]), 1);
        assert_eq!(strides.index(&[0, 1, 0]), 4);
        assert_eq!(strides.index(&[1, 0, 0]), 12);
        assert_eq!(strides.index(&[1, 2, 3]), 12 + 8 + 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(Shape::new(vec![2, 3]).to_string(), "(2, 3)");
        assert_eq!(Shape::new(vec![5]).to_string(), "(5,)");
    }
}
