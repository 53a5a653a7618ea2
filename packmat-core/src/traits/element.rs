//! Element type constraints for matrix stores
//!
//! Every store is generic over one scalar type. The stores only ever need
//! field-like arithmetic, equality, an ordering to pick maximal sums, an
//! absolute value and a canonical zero.

use core::fmt::{Debug, Display};
use core::str::FromStr;

use num_traits::Num;

/// Trait for types that can be stored as matrix elements
///
/// `Num` supplies `+ - * /`, `zero()` and `one()`. `Display` and `FromStr`
/// back the text layout, so every element survives a save/load cycle.
pub trait Scalar: Num + Copy + PartialOrd + Debug + Display + FromStr + 'static {
    /// Absolute value (identity for unsigned types)
    fn abs(self) -> Self;

    /// Convert to f64 for the Euclidean and Hölder norms
    fn to_f64(self) -> f64;

    /// Convert from f64 for generic construction
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_signed_scalar {
    ($($ty:ty),*) => {
        $(
            impl Scalar for $ty {
                fn abs(self) -> Self {
                    <$ty>::abs(self)
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn from_f64(value: f64) -> Self {
                    value as $ty
                }
            }
        )*
    };
}

macro_rules! impl_unsigned_scalar {
    ($($ty:ty),*) => {
        $(
            impl Scalar for $ty {
                fn abs(self) -> Self {
                    self
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn from_f64(value: f64) -> Self {
                    value as $ty
                }
            }
        )*
    };
}

impl Scalar for f32 {
    fn abs(self) -> Self {
        num_traits::Float::abs(self)
    }

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Scalar for f64 {
    fn abs(self) -> Self {
        num_traits::Float::abs(self)
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn from_f64(value: f64) -> Self {
        value
    }
}

impl_signed_scalar!(i32, i64);
impl_unsigned_scalar!(u32, u64);
