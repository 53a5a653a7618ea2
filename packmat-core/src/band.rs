//! Fixed-width band store
//!
//! An N x N matrix whose materialized cells are folded into an N x W
//! [`DenseGrid`]. Cell (i, j) maps to grid column `j - i` when `j >= i` and
//! to `W - 1 + i - j` otherwise; only cells whose folded column is below W
//! exist. Everything else reads as zero and silently ignores writes.

use alloc::vec::Vec;

use crate::{norms, validation, DenseGrid, MatrixStore, Result, Scalar, StoreError};

/// Square band matrix backed by a dimension x band-width grid
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "crate::serde_repr::BandRepr<T>",
        into = "crate::serde_repr::BandRepr<T>",
        bound(
            serialize = "T: Scalar + serde::Serialize",
            deserialize = "T: Scalar + serde::Deserialize<'de>"
        )
    )
)]
pub struct BandStore<T> {
    pub(crate) dimension: usize,
    pub(crate) band_width: usize,
    pub(crate) grid: DenseGrid<T>,
}

impl<T: Scalar> BandStore<T> {
    /// Create a zero band; the width may not exceed the dimension
    pub fn new(dimension: usize, band_width: usize) -> Result<Self> {
        if band_width > dimension {
            return Err(StoreError::BandTooWide {
                band_width,
                dimension,
            });
        }
        Ok(Self {
            dimension,
            band_width,
            grid: DenseGrid::new(dimension, band_width),
        })
    }

    /// Adopt a folded grid; its rows give the dimension, its columns the width
    ///
    /// Padding cells past the matrix edge are cleared.
    pub fn from_grid(grid: DenseGrid<T>) -> Result<Self> {
        let mut band = Self::new(grid.rows(), grid.cols())?;
        band.grid = grid;
        band.clear_padding();
        Ok(band)
    }

    /// Matrix dimension N
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Band width W
    pub fn band_width(&self) -> usize {
        self.band_width
    }

    /// Folded backing grid
    pub fn grid(&self) -> &DenseGrid<T> {
        &self.grid
    }

    /// Folded grid column of logical cell (row, col), if the band holds it
    pub fn band_col(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.dimension || col >= self.dimension {
            return None;
        }
        let folded = if col >= row {
            col - row
        } else {
            (self.band_width + row - col).checked_sub(1)?
        };
        (folded < self.band_width).then_some(folded)
    }

    fn cell(&self, row: usize, band_col: usize) -> T {
        self.grid.data[row * self.band_width + band_col]
    }

    fn clear_padding(&mut self) {
        for i in 0..self.dimension {
            for c in (self.dimension - i)..self.band_width {
                self.grid.data[i * self.band_width + c] = T::zero();
            }
        }
    }

    fn with_grid(&self, grid: DenseGrid<T>) -> Self {
        Self {
            dimension: self.dimension,
            band_width: grid.cols(),
            grid,
        }
    }

    /// Sum or difference of two bands of one dimension
    ///
    /// The result takes the wider band. The narrower operand is laid down
    /// first, then the wider one is folded on top with the operand order
    /// of the difference kept.
    fn combine(&self, other: &Self, subtract: bool) -> Result<Self> {
        validation::check_same_shape(self.dimensions(), other.dimensions())?;
        if self.band_width == other.band_width {
            let grid = if subtract {
                self.grid.try_sub(&other.grid)?
            } else {
                self.grid.try_add(&other.grid)?
            };
            return Ok(self.with_grid(grid));
        }

        let self_wider = self.band_width > other.band_width;
        let (wide, narrow) = if self_wider { (self, other) } else { (other, self) };
        let mut grid = DenseGrid::new(self.dimension, wide.band_width);
        for i in 0..self.dimension {
            for c in 0..narrow.band_width {
                grid.data[i * wide.band_width + c] = narrow.cell(i, c);
            }
        }

        for (slot, &w) in grid.data.iter_mut().zip(wide.grid.as_slice()) {
            *slot = match (subtract, self_wider) {
                (false, _) => *slot + w,
                (true, true) => w - *slot,
                (true, false) => *slot - w,
            };
        }
        Ok(self.with_grid(grid))
    }
}

impl<T: Scalar> MatrixStore for BandStore<T> {
    type Element = T;

    fn dimensions(&self) -> (usize, usize) {
        (self.dimension, self.dimension)
    }

    fn get(&self, row: usize, col: usize) -> Result<T> {
        Ok(match self.band_col(row, col) {
            Some(c) => self.cell(row, c),
            None => T::zero(),
        })
    }

    fn set(&mut self, value: T, row: usize, col: usize) -> Result<()> {
        match self.band_col(row, col) {
            Some(c) => self.grid.data[row * self.band_width + c] = value,
            None => log::trace!(
                "dropping write to ({row}, {col}) outside band of width {}",
                self.band_width
            ),
        }
        Ok(())
    }

    fn values(&self) -> &[T] {
        self.grid.as_slice()
    }

    fn try_add(&self, other: &Self) -> Result<Self> {
        self.combine(other, false)
    }

    fn try_sub(&self, other: &Self) -> Result<Self> {
        self.combine(other, true)
    }

    fn scale(&self, scalar: T) -> Self {
        self.with_grid(self.grid.scale(scalar))
    }

    fn div_scalar(&self, scalar: T) -> Result<Self> {
        Ok(self.with_grid(self.grid.div_scalar(scalar)?))
    }

    fn first_norm(&self) -> T {
        norms::max_sum((0..self.dimension).map(|j| {
            norms::abs_sum(
                (0..self.dimension)
                    .filter_map(|i| self.band_col(i, j).map(|c| self.cell(i, c))),
            )
        }))
    }

    fn infinity_norm(&self) -> T {
        self.grid.infinity_norm()
    }

    fn find_all(&self, value: &T) -> Vec<(usize, usize)> {
        let mut found = Vec::new();
        for i in 0..self.dimension {
            for c in 0..self.band_width.min(self.dimension - i) {
                if self.cell(i, c) == *value {
                    found.push((i, i + c));
                }
            }
        }
        found
    }

    /// Counts stored band cells only; padding past the edge is excluded
    fn count_occurrences(&self, value: &T) -> usize {
        self.find_all(value).len()
    }

    fn apply<F: FnMut(&mut T)>(&mut self, f: F) {
        self.grid.apply(f);
        self.clear_padding();
    }
}
