//! packmat - Structured Matrix Stores
//!
//! Dense, band, packed lower-triangular and coordinate-list sparse matrices
//! sharing one algebra contract, with file, console and JSON persistence.
//!
//! ## Architecture
//!
//! - **packmat-core**: storage layouts, algebra, norms and the text layout (no I/O)
//! - **packmat**: persistence, console interaction and logging on top of it
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use packmat::{persist, MatrixProduct, MatrixStore, SparseStore};
//!
//! fn example() -> Result<(), packmat::PersistError> {
//!     let a: SparseStore<f64> = persist::load("a.txt")?;
//!     let squared = a.power(2)?;
//!     println!("|A^2|_1 = {}", squared.first_norm());
//!     persist::save(&squared, "a2.txt")
//! }
//! ```
//!
//! ## Features
//!
//! - **serde** (default): JSON persistence in [`json`]
//! - **cli**: the `inspect` demo binary

pub use packmat_core::{
    // Stores
    BandStore, DenseGrid, SparseConfig, SparseStore, TriangularStore,
    // Shared contract
    square_and_multiply, Cursor, MatrixProduct, MatrixStore, RowOffsets, Scalar, TextLayout,
    // Error handling
    ErrorCategory, FormatError, StoreError,
};

pub mod console;
pub mod error;
#[cfg(feature = "serde")]
pub mod json;
pub mod persist;

pub use error::PersistError;
