#![no_std]

//! packmat core - Matrix Storage Layouts and Algebra
//!
//! This crate provides four interchangeable matrix stores (dense, band,
//! packed lower-triangular and coordinate-list sparse) behind one algebra
//! contract, plus their plain-text layout. It performs no I/O.

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod band;
pub mod cursor;
pub mod dense;
pub mod error;
pub mod norms;
pub mod offsets;
#[cfg(feature = "serde")]
mod serde_repr;
pub mod sparse;
pub mod text;
pub mod traits;
pub mod triangular;
pub mod validation;

pub use band::BandStore;
pub use cursor::Cursor;
pub use dense::DenseGrid;
pub use error::*;
pub use offsets::RowOffsets;
pub use sparse::{SparseConfig, SparseStore, DEFAULT_CAPACITY};
pub use text::TextLayout;
pub use traits::*;
pub use triangular::TriangularStore;
