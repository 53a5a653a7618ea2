//! Argument validation shared by the stores
//!
//! Pure checks on indices, shapes and scalar arguments. Each returns the
//! error the calling operation should surface.

use crate::{Scalar, StoreError};

/// Validate that (row, col) lies inside a rows x cols store
pub const fn check_index(
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
) -> Result<(), StoreError> {
    if row >= rows || col >= cols {
        return Err(StoreError::IndexOutOfBounds {
            row,
            col,
            rows,
            cols,
        });
    }
    Ok(())
}

/// Validate that two operands share one shape
pub const fn check_same_shape(
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(), StoreError> {
    if left.0 != right.0 || left.1 != right.1 {
        return Err(StoreError::DimensionMismatch { left, right });
    }
    Ok(())
}

/// Validate a scalar divisor
pub fn check_divisor<T: Scalar>(divisor: T) -> Result<(), StoreError> {
    if divisor.is_zero() {
        return Err(StoreError::DivideByZero);
    }
    Ok(())
}

/// Validate a Hölder norm order; NaN is rejected along with p < 1
pub fn check_norm_order(p: f64) -> Result<(), StoreError> {
    if p.is_nan() || p < 1.0 {
        return Err(StoreError::InvalidNormOrder);
    }
    Ok(())
}

/// Validate a matrix power exponent
pub const fn check_exponent(exponent: i64) -> Result<(), StoreError> {
    if exponent < 0 {
        return Err(StoreError::NegativeExponent(exponent));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_index() {
        assert_eq!(check_index(0, 0, 1, 1), Ok(()));
        assert_eq!(check_index(2, 1, 3, 2), Ok(()));
        assert_eq!(
            check_index(3, 0, 3, 3),
            Err(StoreError::IndexOutOfBounds {
                row: 3,
                col: 0,
                rows: 3,
                cols: 3
            })
        );
        assert!(check_index(0, 2, 3, 2).is_err());
        assert!(check_index(0, 0, 0, 0).is_err());
    }

    #[test]
    fn test_check_same_shape() {
        assert_eq!(check_same_shape((2, 3), (2, 3)), Ok(()));
        assert_eq!(
            check_same_shape((2, 3), (3, 2)),
            Err(StoreError::DimensionMismatch {
                left: (2, 3),
                right: (3, 2)
            })
        );
    }

    #[test]
    fn test_scalar_arguments() {
        assert_eq!(check_divisor(0.0f64), Err(StoreError::DivideByZero));
        assert_eq!(check_divisor(2i32), Ok(()));
        assert_eq!(check_norm_order(1.0), Ok(()));
        assert_eq!(check_norm_order(0.5), Err(StoreError::InvalidNormOrder));
        assert_eq!(check_norm_order(f64::NAN), Err(StoreError::InvalidNormOrder));
        assert_eq!(check_exponent(0), Ok(()));
        assert_eq!(check_exponent(-2), Err(StoreError::NegativeExponent(-2)));
    }
}
