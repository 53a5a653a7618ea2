//! Norm kernels shared by every store
//!
//! The Euclidean and Hölder norms are computed over a store's stored slots;
//! absent or padding slots are zero and contribute nothing. The column-sum
//! and row-sum norms depend on the layout and are implemented per store on
//! top of [`abs_sum`] and [`max_sum`].

use num_traits::Float;

use crate::{validation, Result, Scalar};

/// Euclidean norm: sqrt(Σ x²)
pub fn euclidean<T: Scalar>(values: &[T]) -> f64 {
    let sum: f64 = values
        .iter()
        .map(|v| {
            let x = v.to_f64();
            x * x
        })
        .sum();
    Float::sqrt(sum)
}

/// Hölder p-norm: (Σ |x|^p)^(1/p), defined for p >= 1
pub fn holder<T: Scalar>(values: &[T], p: f64) -> Result<f64> {
    validation::check_norm_order(p)?;
    let sum: f64 = values
        .iter()
        .map(|v| Float::powf(Float::abs(v.to_f64()), p))
        .sum();
    Ok(Float::powf(sum, 1.0 / p))
}

/// Σ |x| over an iterator of elements
pub fn abs_sum<T: Scalar>(values: impl IntoIterator<Item = T>) -> T {
    values.into_iter().fold(T::zero(), |acc, v| acc + v.abs())
}

/// Largest of a sequence of sums, zero for an empty sequence
pub fn max_sum<T: Scalar>(sums: impl IntoIterator<Item = T>) -> T {
    sums.into_iter()
        .fold(T::zero(), |max, s| if s > max { s } else { max })
}
