//! The algebra contract shared by every matrix store
//!
//! Each store picks its own layout but answers the same questions: element
//! access, element-wise algebra, scalar rescaling, norms, search and
//! in-place lambda application. Stores that support a matrix product also
//! implement [`MatrixProduct`], which supplies exponentiation.

use alloc::vec::Vec;

use super::element::Scalar;
use crate::{norms, validation, Cursor, Result};

/// Core matrix store trait for layout-agnostic access and algebra
pub trait MatrixStore: Sized + Clone + PartialEq {
    /// The element type stored in this matrix
    type Element: Scalar;

    /// Logical matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Read the element at (row, col)
    ///
    /// Cells the layout does not materialize read as zero. Whether an
    /// index outside the dimensions is an error depends on the store.
    fn get(&self, row: usize, col: usize) -> Result<Self::Element>;

    /// Write the element at (row, col)
    fn set(&mut self, value: Self::Element, row: usize, col: usize) -> Result<()>;

    /// Every stored slot, in storage order
    ///
    /// Slots the layout keeps but which are not reachable through `set`
    /// (band padding) are always zero.
    fn values(&self) -> &[Self::Element];

    /// Element-wise sum producing a store of the same variant
    fn try_add(&self, other: &Self) -> Result<Self>;

    /// Element-wise difference producing a store of the same variant
    fn try_sub(&self, other: &Self) -> Result<Self>;

    /// Multiply every element by a scalar
    fn scale(&self, scalar: Self::Element) -> Self;

    /// Divide every element by a non-zero scalar
    fn div_scalar(&self, scalar: Self::Element) -> Result<Self>;

    /// Maximum absolute column sum
    fn first_norm(&self) -> Self::Element;

    /// Maximum absolute row sum
    fn infinity_norm(&self) -> Self::Element;

    /// Logical coordinates of every stored element equal to `value`
    fn find_all(&self, value: &Self::Element) -> Vec<(usize, usize)>;

    /// Apply a function to every stored element in place
    fn apply<F: FnMut(&mut Self::Element)>(&mut self, f: F);

    /// Euclidean norm over the stored elements
    fn second_norm(&self) -> f64 {
        norms::euclidean(self.values())
    }

    /// Hölder p-norm over the stored elements; p must be at least 1
    fn holder_norm(&self, p: f64) -> Result<f64> {
        norms::holder(self.values(), p)
    }

    /// Number of stored elements equal to `value`
    fn count_occurrences(&self, value: &Self::Element) -> usize {
        self.values().iter().filter(|v| *v == value).count()
    }

    /// Cursor over the stored elements
    fn cursor(&self) -> Cursor<'_, Self::Element> {
        Cursor::new(self.values())
    }
}

/// Stores closed under matrix multiplication
pub trait MatrixProduct: MatrixStore {
    /// Matrix product `self * other`
    fn try_mul(&self, other: &Self) -> Result<Self>;

    /// Identity store with the same dimension and layout parameters
    fn identity_like(&self) -> Self;

    /// Raise to a non-negative integer power
    ///
    /// Exponent 0 yields the identity, 1 a copy.
    fn power(&self, exponent: i64) -> Result<Self> {
        square_and_multiply(self, exponent)
    }
}

/// Binary exponentiation through repeated `try_mul`
///
/// Keeps `result * base^n == self^exponent` while `n` shrinks to zero.
pub fn square_and_multiply<M: MatrixProduct>(matrix: &M, exponent: i64) -> Result<M> {
    validation::check_exponent(exponent)?;
    if exponent == 0 {
        return Ok(matrix.identity_like());
    }

    let mut result = matrix.clone();
    let mut base = matrix.clone();
    let mut n = exponent - 1;
    while n > 0 {
        if n % 2 == 1 {
            result = result.try_mul(&base)?;
            n -= 1;
        } else {
            base = base.try_mul(&base)?;
            n /= 2;
        }
    }
    Ok(result)
}
