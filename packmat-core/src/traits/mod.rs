//! Abstract interfaces for matrix stores
//!
//! Traits describe what every store offers; the concrete layouts live in
//! their own modules.

pub mod element;
pub mod matrix;

pub use element::Scalar;
pub use matrix::{square_and_multiply, MatrixProduct, MatrixStore};
