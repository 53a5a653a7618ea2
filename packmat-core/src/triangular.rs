//! Packed lower-triangular store
//!
//! Only cells with `col <= row` exist. They are packed row after row into
//! one buffer of `offset(size)` slots, where `offset` comes from a shared
//! [`RowOffsets`] table. The upper triangle is implicitly zero: reading it
//! yields zero, writing it is rejected.

use alloc::rc::Rc;
use alloc::vec;
use alloc::vec::Vec;

use crate::{
    norms, validation, MatrixProduct, MatrixStore, Result, RowOffsets, Scalar, StoreError,
};

/// Lower-triangular matrix in packed row-major storage
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "crate::serde_repr::TriangularRepr<T>",
        into = "crate::serde_repr::TriangularRepr<T>",
        bound(
            serialize = "T: Scalar + serde::Serialize",
            deserialize = "T: Scalar + serde::Deserialize<'de>"
        )
    )
)]
pub struct TriangularStore<T> {
    pub(crate) size: usize,
    pub(crate) data: Vec<T>,
    offsets: Rc<RowOffsets>,
}

impl<T> Default for TriangularStore<T> {
    fn default() -> Self {
        Self {
            size: 0,
            data: Vec::new(),
            offsets: Rc::default(),
        }
    }
}

impl<T: PartialEq> PartialEq for TriangularStore<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.data == other.data
    }
}

impl<T: Scalar> TriangularStore<T> {
    /// Create a zero triangle with a private offset table
    pub fn new(size: usize) -> Self {
        Self::with_offsets(size, Rc::new(RowOffsets::new()))
    }

    /// Create a zero triangle that looks offsets up in a shared table
    pub fn with_offsets(size: usize, offsets: Rc<RowOffsets>) -> Self {
        let len = offsets.offset(size);
        Self {
            size,
            data: vec![T::zero(); len],
            offsets,
        }
    }

    /// Adopt an already packed buffer of `offset(size)` slots
    ///
    /// The length is checked before the offset table is consulted, so a
    /// bogus size never grows the table.
    pub fn from_packed(size: usize, data: Vec<T>, offsets: Rc<RowOffsets>) -> Result<Self> {
        if RowOffsets::packed_len(size) != Some(data.len()) {
            return Err(StoreError::DimensionMismatch {
                left: (size, size),
                right: (data.len(), 1),
            });
        }
        Ok(Self {
            size,
            data,
            offsets,
        })
    }

    /// Matrix dimension
    pub fn size(&self) -> usize {
        self.size
    }

    /// Offset table this store indexes through
    pub fn offsets(&self) -> &Rc<RowOffsets> {
        &self.offsets
    }

    /// Packed buffer, row after row
    pub fn as_packed(&self) -> &[T] {
        &self.data
    }

    /// Stored part of one row: columns `0..=row`
    pub fn row(&self, row: usize) -> Result<&[T]> {
        validation::check_index(row, 0, self.size, self.size)?;
        let start = self.offsets.offset(row);
        Ok(&self.data[start..start + row + 1])
    }

    #[inline]
    fn slot(&self, row: usize, col: usize) -> usize {
        self.offsets.offset(row) + col
    }

    fn check_same_size(&self, other: &Self) -> Result<()> {
        validation::check_same_shape(self.dimensions(), other.dimensions())
    }

    fn with_data(&self, data: Vec<T>) -> Self {
        Self {
            size: self.size,
            data,
            offsets: Rc::clone(&self.offsets),
        }
    }

    fn zip_with(&self, other: &Self, op: impl Fn(T, T) -> T) -> Result<Self> {
        self.check_same_size(other)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| op(a, b))
            .collect();
        Ok(self.with_data(data))
    }
}

impl<T: Scalar> MatrixStore for TriangularStore<T> {
    type Element = T;

    fn dimensions(&self) -> (usize, usize) {
        (self.size, self.size)
    }

    fn get(&self, row: usize, col: usize) -> Result<T> {
        validation::check_index(row, col, self.size, self.size)?;
        if col > row {
            return Ok(T::zero());
        }
        Ok(self.data[self.slot(row, col)])
    }

    fn set(&mut self, value: T, row: usize, col: usize) -> Result<()> {
        validation::check_index(row, col, self.size, self.size)?;
        if col > row {
            return Err(StoreError::AboveDiagonal { row, col });
        }
        let slot = self.slot(row, col);
        self.data[slot] = value;
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
        self.with_data(self.data.iter().map(|&v| v * scalar).collect())
    }

    fn div_scalar(&self, scalar: T) -> Result<Self> {
        validation::check_divisor(scalar)?;
        Ok(self.with_data(self.data.iter().map(|&v| v / scalar).collect()))
    }

    fn first_norm(&self) -> T {
        norms::max_sum((0..self.size).map(|j| {
            norms::abs_sum((j..self.size).map(|i| self.data[self.slot(i, j)]))
        }))
    }

    fn infinity_norm(&self) -> T {
        norms::max_sum((0..self.size).map(|i| {
            let start = self.offsets.offset(i);
            norms::abs_sum(self.data[start..=start + i].iter().copied())
        }))
    }

    fn find_all(&self, value: &T) -> Vec<(usize, usize)> {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, v)| *v == value)
            .map(|(idx, _)| self.offsets.locate(idx))
            .collect()
    }

    fn apply<F: FnMut(&mut T)>(&mut self, f: F) {
        self.data.iter_mut().for_each(f);
    }
}

impl<T: Scalar> MatrixProduct for TriangularStore<T> {
    /// Product of two lower triangles; C(i,j) = Σ_{k=j..=i} A(i,k)·B(k,j)
    fn try_mul(&self, other: &Self) -> Result<Self> {
        self.check_same_size(other)?;
        let mut out = self.with_data(vec![T::zero(); self.data.len()]);
        for i in 0..self.size {
            for j in 0..=i {
                let mut sum = T::zero();
                for k in j..=i {
                    sum = sum + self.data[self.slot(i, k)] * other.data[other.slot(k, j)];
                }
                let slot = out.slot(i, j);
                out.data[slot] = sum;
            }
        }
        Ok(out)
    }

    fn identity_like(&self) -> Self {
        let mut out = self.with_data(vec![T::zero(); self.data.len()]);
        for i in 0..self.size {
            let slot = out.slot(i, i);
            out.data[slot] = T::one();
        }
        out
    }
}
