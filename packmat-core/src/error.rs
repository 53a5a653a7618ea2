//! Error types for matrix store operations

/// Broad classes of failure, independent of the store that raised them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Operand shapes disagree for an algebraic operation
    DimensionMismatch,
    /// An index lies outside the declared dimension
    OutOfRange,
    /// An argument is outside the domain of the operation
    InvalidArgument,
    /// Division by the scalar zero
    DivideByZero,
    /// Text content does not follow the store's layout
    Format,
}

/// Ways a text layout can be malformed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// Fewer tokens than the header declared
    MissingToken,
    /// A token could not be parsed as the expected number
    InvalidToken,
    /// A declared dimension is zero
    ZeroDimension,
    /// Declared band width exceeds the declared dimension
    BandTooWide,
    /// A sparse entry lies outside the declared dimension
    EntryOutOfRange,
}

impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            FormatError::MissingToken => "fewer values than declared",
            FormatError::InvalidToken => "unparsable value",
            FormatError::ZeroDimension => "declared dimension must be positive",
            FormatError::BandTooWide => "band width exceeds dimension",
            FormatError::EntryOutOfRange => "entry index outside the declared dimension",
        };
        write!(f, "{msg}")
    }
}

/// Errors that can occur during store operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// Operand shapes disagree, as (rows, cols) pairs
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Index outside the store's (rows, cols)
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// Write above the main diagonal of a triangular store
    AboveDiagonal { row: usize, col: usize },
    /// Matrix power with a negative exponent
    NegativeExponent(i64),
    /// Hölder norm order below 1 (or NaN)
    InvalidNormOrder,
    /// Resize to a zero extent
    ZeroDimension,
    /// Band width larger than the matrix dimension
    BandTooWide { band_width: usize, dimension: usize },
    /// Division by the scalar zero
    DivideByZero,
    /// Cursor dereferenced outside `[begin, end)`
    CursorExhausted { position: usize, len: usize },
    /// Malformed text layout
    Format(FormatError),
}

impl StoreError {
    /// Classify this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            StoreError::DimensionMismatch { .. } => ErrorCategory::DimensionMismatch,
            StoreError::IndexOutOfBounds { .. } | StoreError::CursorExhausted { .. } => {
                ErrorCategory::OutOfRange
            }
            StoreError::AboveDiagonal { .. }
            | StoreError::NegativeExponent(_)
            | StoreError::InvalidNormOrder
            | StoreError::ZeroDimension
            | StoreError::BandTooWide { .. } => ErrorCategory::InvalidArgument,
            StoreError::DivideByZero => ErrorCategory::DivideByZero,
            StoreError::Format(_) => ErrorCategory::Format,
        }
    }
}

impl core::fmt::Display for StoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StoreError::DimensionMismatch { left, right } => write!(
                f,
                "dimension mismatch: {}x{} vs {}x{}",
                left.0, left.1, right.0, right.1
            ),
            StoreError::IndexOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(f, "index ({row}, {col}) out of range for {rows}x{cols}"),
            StoreError::AboveDiagonal { row, col } => {
                write!(f, "cannot set ({row}, {col}) above the main diagonal")
            }
            StoreError::NegativeExponent(e) => write!(f, "exponent {e} is negative"),
            StoreError::InvalidNormOrder => write!(f, "norm order p must be >= 1"),
            StoreError::ZeroDimension => write!(f, "dimensions must be positive"),
            StoreError::BandTooWide {
                band_width,
                dimension,
            } => write!(f, "band width {band_width} exceeds dimension {dimension}"),
            StoreError::DivideByZero => write!(f, "division by zero"),
            StoreError::CursorExhausted { position, len } => {
                write!(f, "cursor at {position} is past the end of {len} slots")
            }
            StoreError::Format(e) => write!(f, "malformed layout: {e}"),
        }
    }
}

impl core::error::Error for StoreError {}

impl From<FormatError> for StoreError {
    fn from(e: FormatError) -> Self {
        StoreError::Format(e)
    }
}

/// Result type for store operations
pub type Result<T> = core::result::Result<T, StoreError>;
