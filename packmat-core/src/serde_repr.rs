//! Serialized shapes of the stores
//!
//! Stores serialize through these plain records and deserialize back
//! through the checked constructors, so a hand-edited document cannot
//! break buffer lengths or the sparse key invariants.

use alloc::rc::Rc;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::{
    BandStore, DenseGrid, MatrixStore, RowOffsets, Scalar, SparseStore, StoreError, TriangularStore,
};

#[derive(Serialize, Deserialize)]
pub struct DenseRepr<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Scalar> TryFrom<DenseRepr<T>> for DenseGrid<T> {
    type Error = StoreError;

    fn try_from(repr: DenseRepr<T>) -> Result<Self, Self::Error> {
        DenseGrid::from_vec(repr.rows, repr.cols, repr.data)
    }
}

impl<T> From<DenseGrid<T>> for DenseRepr<T> {
    fn from(grid: DenseGrid<T>) -> Self {
        Self {
            rows: grid.rows,
            cols: grid.cols,
            data: grid.data,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct BandRepr<T> {
    dimension: usize,
    band_width: usize,
    grid: Vec<T>,
}

impl<T: Scalar> TryFrom<BandRepr<T>> for BandStore<T> {
    type Error = StoreError;

    fn try_from(repr: BandRepr<T>) -> Result<Self, Self::Error> {
        let grid = DenseGrid::from_vec(repr.dimension, repr.band_width, repr.grid)?;
        BandStore::from_grid(grid)
    }
}

impl<T> From<BandStore<T>> for BandRepr<T> {
    fn from(band: BandStore<T>) -> Self {
        Self {
            dimension: band.dimension,
            band_width: band.band_width,
            grid: band.grid.data,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct TriangularRepr<T> {
    size: usize,
    packed: Vec<T>,
}

impl<T: Scalar> TryFrom<TriangularRepr<T>> for TriangularStore<T> {
    type Error = StoreError;

    fn try_from(repr: TriangularRepr<T>) -> Result<Self, Self::Error> {
        TriangularStore::from_packed(repr.size, repr.packed, Rc::new(RowOffsets::new()))
    }
}

impl<T> From<TriangularStore<T>> for TriangularRepr<T> {
    fn from(store: TriangularStore<T>) -> Self {
        Self {
            size: store.size,
            packed: store.data,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct SparseRepr<T> {
    dimension: usize,
    capacity: usize,
    entries: Vec<(usize, usize, T)>,
}

/// Entries are replayed through `set`: out-of-range keys fail, zeros are
/// skipped and a repeated key keeps its last value.
impl<T: Scalar> TryFrom<SparseRepr<T>> for SparseStore<T> {
    type Error = StoreError;

    fn try_from(repr: SparseRepr<T>) -> Result<Self, Self::Error> {
        let reserve = repr.entries.len();
        let mut store = SparseStore::with_reserved(repr.dimension, repr.capacity, reserve);
        for (row, col, value) in repr.entries {
            store.set(value, row, col)?;
        }
        Ok(store)
    }
}

impl<T: Scalar> From<SparseStore<T>> for SparseRepr<T> {
    fn from(store: SparseStore<T>) -> Self {
        Self {
            dimension: store.dimension,
            capacity: store.capacity,
            entries: store.entries().collect(),
        }
    }
}
