//! Coordinate-list sparse store
//!
//! Live entries are kept in three parallel arrays (value, row, col) in
//! insertion order. No two live entries share a key and no live value is
//! zero; absent keys read as zero.

use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};

use crate::{norms, validation, MatrixProduct, MatrixStore, Result, Scalar};

/// Capacity used when none is given
pub const DEFAULT_CAPACITY: usize = 10;

/// Construction parameters for [`SparseStore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SparseConfig {
    /// Entry slots reserved up front
    pub initial_capacity: usize,
}

impl Default for SparseConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl SparseConfig {
    /// Set the initial capacity
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }
}

/// Square sparse matrix in coordinate-list form
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "crate::serde_repr::SparseRepr<T>",
        into = "crate::serde_repr::SparseRepr<T>",
        bound(
            serialize = "T: Scalar + serde::Serialize",
            deserialize = "T: Scalar + serde::Deserialize<'de>"
        )
    )
)]
pub struct SparseStore<T> {
    pub(crate) dimension: usize,
    pub(crate) capacity: usize,
    values: Vec<T>,
    rows: Vec<usize>,
    cols: Vec<usize>,
}

impl<T> Default for SparseStore<T> {
    fn default() -> Self {
        Self {
            dimension: 0,
            capacity: 0,
            values: Vec::new(),
            rows: Vec::new(),
            cols: Vec::new(),
        }
    }
}

impl<T: Scalar> SparseStore<T> {
    /// Create an empty store with the default capacity
    pub fn new(dimension: usize) -> Self {
        Self::with_config(dimension, SparseConfig::default())
    }

    /// Create an empty store reserving `capacity` entries
    pub fn with_capacity(dimension: usize, capacity: usize) -> Self {
        Self {
            dimension,
            capacity,
            values: Vec::with_capacity(capacity),
            rows: Vec::with_capacity(capacity),
            cols: Vec::with_capacity(capacity),
        }
    }

    /// Logical `capacity` with only `reserve` slots allocated up front
    pub(crate) fn with_reserved(dimension: usize, capacity: usize, reserve: usize) -> Self {
        let mut store = Self::with_capacity(dimension, reserve.min(capacity));
        store.capacity = capacity;
        store
    }

    /// Create an empty store from explicit parameters
    pub fn with_config(dimension: usize, config: SparseConfig) -> Self {
        Self::with_capacity(dimension, config.initial_capacity)
    }

    /// Build a store by `set`ting each (row, col, value) in turn
    pub fn from_entries<I>(dimension: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut store = Self::new(dimension);
        for (row, col, value) in entries {
            store.set(value, row, col)?;
        }
        Ok(store)
    }

    /// Matrix dimension
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of live entries
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Entry slots available before the next growth step
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Live entries as (row, col, value), in storage order
    pub fn entries(&self) -> impl ExactSizeIterator<Item = (usize, usize, T)> + '_ {
        self.rows
            .iter()
            .zip(&self.cols)
            .zip(&self.values)
            .map(|((&r, &c), &v)| (r, c, v))
    }

    fn position(&self, row: usize, col: usize) -> Option<usize> {
        self.rows
            .iter()
            .zip(&self.cols)
            .position(|(&r, &c)| r == row && c == col)
    }

    /// Remove entry `idx`, shifting later entries down to keep their order
    fn remove_element(&mut self, idx: usize) {
        self.values.remove(idx);
        self.rows.remove(idx);
        self.cols.remove(idx);
    }

    fn grow(&mut self) {
        let size = self.size();
        let step = size.checked_ilog2().unwrap_or(0) as usize + 1;
        log::trace!("growing sparse store from {} to {} slots", self.capacity, size + step);
        self.capacity = size + step;
        let extra = self.capacity - size;
        self.values.reserve(extra);
        self.rows.reserve(extra);
        self.cols.reserve(extra);
    }

    /// Append a key known to be absent and non-zero
    fn append_unchecked(&mut self, value: T, row: usize, col: usize) {
        if self.size() >= self.capacity {
            self.grow();
        }
        self.values.push(value);
        self.rows.push(row);
        self.cols.push(col);
    }

    fn purge_zeros(&mut self) {
        let mut idx = 0;
        while idx < self.values.len() {
            if self.values[idx].is_zero() {
                self.remove_element(idx);
            } else {
                idx += 1;
            }
        }
    }

    fn map(&self, op: impl Fn(T) -> T) -> Self {
        let mut out = self.clone();
        out.values.iter_mut().for_each(|v| *v = op(*v));
        out.purge_zeros();
        out
    }

    fn check_same_dimension(&self, other: &Self) -> Result<()> {
        validation::check_same_shape(self.dimensions(), other.dimensions())
    }
}

impl<T: Scalar> PartialEq for SparseStore<T> {
    fn eq(&self, other: &Self) -> bool {
        self.dimension == other.dimension
            && self.size() == other.size()
            && self
                .entries()
                .all(|(r, c, v)| other.position(r, c).map(|idx| other.values[idx]) == Some(v))
    }
}

impl<T: Scalar> MatrixStore for SparseStore<T> {
    type Element = T;

    fn dimensions(&self) -> (usize, usize) {
        (self.dimension, self.dimension)
    }

    /// Absent keys read as zero, including keys past the dimension
    fn get(&self, row: usize, col: usize) -> Result<T> {
        Ok(self
            .position(row, col)
            .map_or_else(T::zero, |idx| self.values[idx]))
    }

    fn set(&mut self, value: T, row: usize, col: usize) -> Result<()> {
        validation::check_index(row, col, self.dimension, self.dimension)?;
        match self.position(row, col) {
            Some(idx) if value.is_zero() => self.remove_element(idx),
            Some(idx) => self.values[idx] = value,
            None if value.is_zero() => {}
            None => self.append_unchecked(value, row, col),
        }
        Ok(())
    }

    fn values(&self) -> &[T] {
        &self.values
    }

    fn try_add(&self, other: &Self) -> Result<Self> {
        self.check_same_dimension(other)?;
        let mut out = Self::with_reserved(
            self.dimension,
            self.capacity.saturating_add(other.capacity),
            self.size() + other.size(),
        );
        for (r, c, v) in self.entries() {
            out.append_unchecked(v, r, c);
        }
        for (r, c, v) in other.entries() {
            let sum = out.get(r, c)? + v;
            out.set(sum, r, c)?;
        }
        Ok(out)
    }

    /// One pass over the merged key set; left keys first, then right-only keys
    fn try_sub(&self, other: &Self) -> Result<Self> {
        self.check_same_dimension(other)?;
        let right: HashMap<(usize, usize), T> =
            other.entries().map(|(r, c, v)| ((r, c), v)).collect();
        let left: HashSet<(usize, usize)> = self.entries().map(|(r, c, _)| (r, c)).collect();

        let mut out = Self::with_reserved(
            self.dimension,
            self.capacity.saturating_add(other.capacity),
            self.size() + other.size(),
        );
        for (r, c, v) in self.entries() {
            let diff = v - right.get(&(r, c)).copied().unwrap_or_else(T::zero);
            if !diff.is_zero() {
                out.append_unchecked(diff, r, c);
            }
        }
        for (r, c, v) in other.entries() {
            if !left.contains(&(r, c)) {
                out.append_unchecked(T::zero() - v, r, c);
            }
        }
        Ok(out)
    }

    fn scale(&self, scalar: T) -> Self {
        self.map(|v| v * scalar)
    }

    fn div_scalar(&self, scalar: T) -> Result<Self> {
        validation::check_divisor(scalar)?;
        Ok(self.map(|v| v / scalar))
    }

    fn first_norm(&self) -> T {
        let mut sums = alloc::vec![T::zero(); self.dimension];
        for (_, c, v) in self.entries() {
            sums[c] = sums[c] + v.abs();
        }
        norms::max_sum(sums)
    }

    fn infinity_norm(&self) -> T {
        let mut sums = alloc::vec![T::zero(); self.dimension];
        for (r, _, v) in self.entries() {
            sums[r] = sums[r] + v.abs();
        }
        norms::max_sum(sums)
    }

    /// Only live entries are searched, so zero is never found
    fn find_all(&self, value: &T) -> Vec<(usize, usize)> {
        self.entries()
            .filter(|(_, _, v)| v == value)
            .map(|(r, c, _)| (r, c))
            .collect()
    }

    fn apply<F: FnMut(&mut T)>(&mut self, f: F) {
        self.values.iter_mut().for_each(f);
        self.purge_zeros();
    }
}

impl<T: Scalar> MatrixProduct for SparseStore<T> {
    fn try_mul(&self, other: &Self) -> Result<Self> {
        self.check_same_dimension(other)?;
        let mut out = Self::new(self.dimension);
        for (i, k, a) in self.entries() {
            for (_, j, b) in other.entries().filter(|&(row, _, _)| row == k) {
                let sum = out.get(i, j)? + a * b;
                out.set(sum, i, j)?;
            }
        }
        Ok(out)
    }

    fn identity_like(&self) -> Self {
        let mut out = Self::with_capacity(self.dimension, self.dimension);
        for i in 0..self.dimension {
            out.append_unchecked(T::one(), i, i);
        }
        out
    }
}
