//! Dense row-major grid
//!
//! The plain rectangular layout. Besides being a store in its own right it
//! is the backing buffer of [`BandStore`](crate::BandStore).

use alloc::vec;
use alloc::vec::Vec;

use crate::{
    norms, square_and_multiply, validation, MatrixProduct, MatrixStore, Result, Scalar, StoreError,
};

/// Flat row-major matrix with `rows * cols` elements
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "crate::serde_repr::DenseRepr<T>",
        into = "crate::serde_repr::DenseRepr<T>",
        bound(
            serialize = "T: Scalar + serde::Serialize",
            deserialize = "T: Scalar + serde::Deserialize<'de>"
        )
    )
)]
pub struct DenseGrid<T> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) data: Vec<T>,
}

impl<T> Default for DenseGrid<T> {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            data: Vec::new(),
        }
    }
}

impl<T: Scalar> DenseGrid<T> {
    /// Create a zero-filled grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Create a grid from row-major data
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(StoreError::DimensionMismatch {
                left: (rows, cols),
                right: (data.len(), 1),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major buffer
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// One row as a slice
    pub fn row(&self, row: usize) -> Result<&[T]> {
        validation::check_index(row, 0, self.rows, self.cols.max(1))?;
        let start = row * self.cols;
        Ok(&self.data[start..start + self.cols])
    }

    /// Overwrite every cell
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Change the shape, keeping the overlapping top-left block
    ///
    /// Cells outside the old shape are zero; cells outside the new shape
    /// are discarded.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<()> {
        if rows == 0 || cols == 0 {
            return Err(StoreError::ZeroDimension);
        }
        let mut data = vec![T::zero(); rows * cols];
        let keep_rows = rows.min(self.rows);
        let keep_cols = cols.min(self.cols);
        for i in 0..keep_rows {
            let src = i * self.cols;
            let dst = i * cols;
            data[dst..dst + keep_cols].copy_from_slice(&self.data[src..src + keep_cols]);
        }
        self.rows = rows;
        self.cols = cols;
        self.data = data;
        Ok(())
    }

    /// Transposed copy
    pub fn transpose(&self) -> Self {
        let mut out = Self::new(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        out
    }

    #[inline]
    fn at(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    fn zip_with(&self, other: &Self, op: impl Fn(T, T) -> T) -> Result<Self> {
        validation::check_same_shape(self.dimensions(), other.dimensions())?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| op(a, b))
            .collect();
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    fn map(&self, op: impl Fn(T) -> T) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| op(v)).collect(),
        }
    }
}

impl<T: Scalar> MatrixStore for DenseGrid<T> {
    type Element = T;

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn get(&self, row: usize, col: usize) -> Result<T> {
        validation::check_index(row, col, self.rows, self.cols)?;
        Ok(self.at(row, col))
    }

    fn set(&mut self, value: T, row: usize, col: usize) -> Result<()> {
        validation::check_index(row, col, self.rows, self.cols)?;
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    fn values(&self) -> &[T] {
        &self.data
    }

    fn try_add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    fn try_sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    fn scale(&self, scalar: T) -> Self {
        self.map(|v| v * scalar)
    }

    fn div_scalar(&self, scalar: T) -> Result<Self> {
        validation::check_divisor(scalar)?;
        Ok(self.map(|v| v / scalar))
    }

    fn first_norm(&self) -> T {
        norms::max_sum(
            (0..self.cols).map(|j| norms::abs_sum((0..self.rows).map(|i| self.at(i, j)))),
        )
    }

    fn infinity_norm(&self) -> T {
        norms::max_sum(
            self.data
                .chunks(self.cols.max(1))
                .map(|row| norms::abs_sum(row.iter().copied())),
        )
    }

    fn find_all(&self, value: &T) -> Vec<(usize, usize)> {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, v)| *v == value)
            .map(|(idx, _)| (idx / self.cols, idx % self.cols))
            .collect()
    }

    fn apply<F: FnMut(&mut T)>(&mut self, f: F) {
        self.data.iter_mut().for_each(f);
    }
}

impl<T: Scalar> MatrixProduct for DenseGrid<T> {
    fn try_mul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(StoreError::DimensionMismatch {
                left: self.dimensions(),
                right: other.dimensions(),
            });
        }
        let mut out = Self::new(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = T::zero();
                for k in 0..self.cols {
                    sum = sum + self.at(i, k) * other.at(k, j);
                }
                out.data[i * other.cols + j] = sum;
            }
        }
        Ok(out)
    }

    fn identity_like(&self) -> Self {
        let mut out = Self::new(self.rows, self.rows);
        for i in 0..self.rows {
            out.data[i * self.rows + i] = T::one();
        }
        out
    }

    /// Powers are only defined for square grids
    fn power(&self, exponent: i64) -> Result<Self> {
        if self.rows != self.cols {
            return Err(StoreError::DimensionMismatch {
                left: self.dimensions(),
                right: (self.cols, self.rows),
            });
        }
        square_and_multiply(self, exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use num_traits::Float;

    fn grid(rows: usize, cols: usize, data: &[i64]) -> DenseGrid<i64> {
        DenseGrid::from_vec(rows, cols, data.to_vec()).unwrap()
    }

    #[test]
    fn test_get_set_bounds() {
        let mut g = DenseGrid::<f64>::new(2, 3);
        g.set(4.5, 1, 2).unwrap();
        assert_eq!(g.get(1, 2), Ok(4.5));
        assert_eq!(g.get(0, 0), Ok(0.0));
        assert!(matches!(
            g.set(1.0, 2, 0),
            Err(StoreError::IndexOutOfBounds { row: 2, .. })
        ));
        assert!(g.get(0, 3).is_err());
    }

    #[test]
    fn test_from_vec_length_checked() {
        assert!(DenseGrid::from_vec(2, 2, alloc::vec![1, 2, 3]).is_err());
        // the product wraps to 0 without a checked multiply
        let huge = 1usize << (usize::BITS / 2);
        assert!(DenseGrid::<i32>::from_vec(huge, huge, alloc::vec![]).is_err());
    }

    #[test]
    fn test_fill() {
        let mut g = DenseGrid::<i32>::new(2, 2);
        g.fill(7);
        assert_eq!(g.values(), &[7, 7, 7, 7]);
    }

    #[test]
    fn test_resize_keeps_overlap() {
        let mut g = grid(2, 3, &[1, 2, 3, 4, 5, 6]);
        g.resize(3, 2).unwrap();
        assert_eq!(g.values(), &[1, 2, 4, 5, 0, 0]);
        g.resize(1, 4).unwrap();
        assert_eq!(g.values(), &[1, 2, 0, 0]);
        assert_eq!(g.resize(0, 4), Err(StoreError::ZeroDimension));
        assert_eq!(g.dimensions(), (1, 4));
    }

    #[test]
    fn test_elementwise_algebra() {
        let a = grid(2, 2, &[1, 2, 3, 4]);
        let b = grid(2, 2, &[10, 20, 30, 40]);
        assert_eq!(a.try_add(&b).unwrap().values(), &[11, 22, 33, 44]);
        assert_eq!(b.try_sub(&a).unwrap().values(), &[9, 18, 27, 36]);
        assert_eq!(a.scale(3).values(), &[3, 6, 9, 12]);
        assert_eq!(b.div_scalar(10).unwrap(), grid(2, 2, &[1, 2, 3, 4]));
        assert_eq!(a.div_scalar(0), Err(StoreError::DivideByZero));

        let c = grid(1, 4, &[1, 2, 3, 4]);
        assert!(matches!(
            a.try_add(&c),
            Err(StoreError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_product_and_power() {
        let a = grid(2, 2, &[1, 2, 3, 4]);
        let b = grid(2, 2, &[5, 6, 7, 8]);
        assert_eq!(a.try_mul(&b).unwrap(), grid(2, 2, &[19, 22, 43, 50]));

        let fib = grid(2, 2, &[1, 1, 1, 0]);
        assert_eq!(fib.power(10).unwrap(), grid(2, 2, &[89, 55, 55, 34]));
        assert_eq!(fib.power(0).unwrap(), grid(2, 2, &[1, 0, 0, 1]));
        assert_eq!(fib.power(1).unwrap(), fib);
        assert_eq!(fib.power(-1), Err(StoreError::NegativeExponent(-1)));

        let wide = grid(1, 2, &[1, 2]);
        assert!(wide.power(2).is_err());
        assert_eq!(wide.try_mul(&grid(2, 1, &[3, 4])).unwrap(), grid(1, 1, &[11]));
    }

    #[test]
    fn test_norms() {
        let g = grid(2, 2, &[1, -2, -3, 4]);
        assert_eq!(g.first_norm(), 6);
        assert_eq!(g.infinity_norm(), 7);
        assert_relative_eq!(g.second_norm(), Float::sqrt(30.0), epsilon = 1e-12);
    }

    #[test]
    fn test_search_and_apply() {
        let mut g = grid(2, 3, &[1, 0, 1, 2, 1, 0]);
        assert_eq!(g.count_occurrences(&1), 3);
        assert_eq!(g.find_all(&0), alloc::vec![(0, 1), (1, 2)]);
        g.apply(|v| *v *= 10);
        assert_eq!(g.get(1, 0), Ok(20));
    }

    #[test]
    fn test_transpose() {
        let g = grid(2, 3, &[1, 2, 3, 4, 5, 6]);
        assert_eq!(g.transpose(), grid(3, 2, &[1, 4, 2, 5, 3, 6]));
    }
}
