//! Plain-text layout shared by files and the console
//!
//! Every store prints as a header of dimensions followed by its stored
//! cells, whitespace separated. Parsing consumes the same token sequence,
//! so the reader does not care whether tokens come from a file or a prompt.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::{
    BandStore, DenseGrid, FormatError, MatrixStore, Result, RowOffsets, Scalar, SparseStore,
    StoreError, TriangularStore,
};

/// Text rendering and token parsing for a store layout
pub trait TextLayout: Sized + fmt::Display {
    /// Human readable description of the expected token order
    const LAYOUT: &'static str;

    /// Write the header and the stored cells
    fn write_text<W: fmt::Write>(&self, out: &mut W) -> fmt::Result;

    /// Parse a store from a token stream
    ///
    /// Tokens after the last expected one are left unread.
    fn parse_tokens<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>;

    /// Parse a store from whitespace separated text
    fn parse_text(text: &str) -> Result<Self> {
        Self::parse_tokens(text.split_whitespace())
    }
}

struct Tokens<I> {
    inner: I,
}

impl<I, S> Tokens<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    fn new(tokens: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            inner: tokens.into_iter(),
        }
    }

    fn value<V: FromStr>(&mut self) -> Result<V> {
        let token = self.inner.next().ok_or(FormatError::MissingToken)?;
        token
            .as_ref()
            .parse()
            .map_err(|_| StoreError::Format(FormatError::InvalidToken))
    }

    /// A declared dimension; must be positive
    fn dimension(&mut self) -> Result<usize> {
        let declared: i64 = self.value()?;
        if declared <= 0 {
            return Err(FormatError::ZeroDimension.into());
        }
        usize::try_from(declared).map_err(|_| StoreError::Format(FormatError::InvalidToken))
    }

    /// Read `count` values; the buffer grows with the tokens actually present
    fn values<T: Scalar>(&mut self, count: usize) -> Result<Vec<T>> {
        let mut values = Vec::new();
        for _ in 0..count {
            values.push(self.value()?);
        }
        Ok(values)
    }
}

/// Cell count declared by a header, rejected when it overflows `usize`
fn declared_cells(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols).ok_or(StoreError::Format(FormatError::InvalidToken))
}

fn write_rows<W: fmt::Write, T: Scalar>(
    out: &mut W,
    rows: impl Iterator<Item = impl AsRef<[T]>>,
) -> fmt::Result {
    for row in rows {
        let mut first = true;
        for value in row.as_ref() {
            if !first {
                out.write_char(' ')?;
            }
            write!(out, "{value}")?;
            first = false;
        }
        out.write_char('\n')?;
    }
    Ok(())
}

impl<T: Scalar> TextLayout for DenseGrid<T> {
    const LAYOUT: &'static str = "rows cols, then rows x cols values in row-major order";

    fn write_text<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "{} {}", self.rows, self.cols)?;
        write_rows(out, self.data.chunks(self.cols.max(1)).take(self.rows))
    }

    fn parse_tokens<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens = Tokens::new(tokens);
        let rows = tokens.dimension()?;
        let cols = tokens.dimension()?;
        let data = tokens.values(declared_cells(rows, cols)?)?;
        DenseGrid::from_vec(rows, cols, data)
    }
}

impl<T: Scalar> TextLayout for BandStore<T> {
    const LAYOUT: &'static str =
        "dimension band_width, then dimension rows of band_width values starting at the diagonal";

    fn write_text<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "{} {}", self.dimension, self.band_width)?;
        let width = self.band_width;
        write_rows(
            out,
            (0..self.dimension).map(|i| &self.grid.data[i * width..(i + 1) * width]),
        )
    }

    fn parse_tokens<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens = Tokens::new(tokens);
        let dimension = tokens.dimension()?;
        let band_width: usize = tokens.value()?;
        if band_width > dimension {
            return Err(FormatError::BandTooWide.into());
        }
        let data = tokens.values(declared_cells(dimension, band_width)?)?;
        BandStore::from_grid(DenseGrid::from_vec(dimension, band_width, data)?)
    }
}

impl<T: Scalar> TextLayout for TriangularStore<T> {
    const LAYOUT: &'static str = "size, then row i holding its i + 1 values up to the diagonal";

    fn write_text<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "{}", self.size)?;
        let offsets = self.offsets();
        write_rows(
            out,
            (0..self.size).map(|i| {
                let start = offsets.offset(i);
                &self.data[start..=start + i]
            }),
        )
    }

    fn parse_tokens<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens = Tokens::new(tokens);
        let size = tokens.dimension()?;
        let len =
            RowOffsets::packed_len(size).ok_or(StoreError::Format(FormatError::InvalidToken))?;
        let data = tokens.values(len)?;
        TriangularStore::from_packed(size, data, Rc::new(RowOffsets::new()))
    }
}

impl<T: Scalar> TextLayout for SparseStore<T> {
    const LAYOUT: &'static str =
        "dimension, entry count, then one 'row col value' triple per entry";

    fn write_text<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "{}", self.dimension)?;
        writeln!(out, "{}", self.size())?;
        for (row, col, value) in self.entries() {
            writeln!(out, "{row} {col} {value}")?;
        }
        Ok(())
    }

    fn parse_tokens<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens = Tokens::new(tokens);
        let dimension = tokens.dimension()?;
        let count: usize = tokens.value()?;
        let mut entries = Vec::new();
        for _ in 0..count {
            let row: usize = tokens.value()?;
            let col: usize = tokens.value()?;
            let value: T = tokens.value()?;
            if row >= dimension || col >= dimension {
                return Err(FormatError::EntryOutOfRange.into());
            }
            entries.push((row, col, value));
        }

        // capacity is only reserved once every declared entry was read
        let mut store = SparseStore::with_capacity(dimension, count);
        for (row, col, value) in entries {
            store.set(value, row, col)?;
        }
        Ok(store)
    }
}

macro_rules! display_via_layout {
    ($($store:ident),*) => {
        $(
            impl<T: Scalar> fmt::Display for $store<T> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    self.write_text(f)
                }
            }
        )*
    };
}

display_via_layout!(DenseGrid, BandStore, TriangularStore, SparseStore);

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_dense_text() {
        let g = DenseGrid::from_vec(2, 3, alloc::vec![1, 2, 3, 4, 5, 6]).unwrap();
        let text = g.to_string();
        assert_eq!(text, "2 3\n1 2 3\n4 5 6\n");
        assert_eq!(DenseGrid::<i32>::parse_text(&text).unwrap(), g);
    }

    #[test]
    fn test_band_text() {
        let mut band = BandStore::<f64>::new(3, 2).unwrap();
        band.set(1.5, 0, 0).unwrap();
        band.set(-2.0, 1, 2).unwrap();
        let text = band.to_string();
        assert_eq!(text, "3 2\n1.5 0\n0 -2\n0 0\n");
        assert_eq!(BandStore::<f64>::parse_text(&text).unwrap(), band);
    }

    #[test]
    fn test_triangular_text() {
        let mut t = TriangularStore::<i64>::new(3);
        t.set(4, 2, 0).unwrap();
        t.set(9, 1, 1).unwrap();
        let text = t.to_string();
        assert_eq!(text, "3\n0\n0 9\n4 0 0\n");
        assert_eq!(TriangularStore::<i64>::parse_text(&text).unwrap(), t);
    }

    #[test]
    fn test_sparse_text() {
        let s = SparseStore::from_entries(4, [(3, 1, 2.5), (0, 0, -1.0)]).unwrap();
        let text = s.to_string();
        assert_eq!(text, "4\n2\n3 1 2.5\n0 0 -1\n");
        let parsed = SparseStore::<f64>::parse_text(&text).unwrap();
        assert_eq!(parsed, s);
        assert_eq!(parsed.capacity(), 2);
    }

    #[test]
    fn test_tokens_ignore_line_breaks() {
        let g = DenseGrid::<i32>::parse_tokens(["2", "2", "1", "2", "3", "4"]).unwrap();
        assert_eq!(g.get(1, 0), Ok(3));
        let g = DenseGrid::<i32>::parse_text("2 2 1\n2\n\n3 4 99").unwrap();
        assert_eq!(g.get(1, 1), Ok(4));
    }

    fn err<T>(e: FormatError) -> Result<T> {
        Err(StoreError::Format(e))
    }

    #[test]
    fn test_malformed_input() {
        assert_eq!(DenseGrid::<i32>::parse_text("2 2 1 2 3"), err(FormatError::MissingToken));
        assert_eq!(DenseGrid::<i32>::parse_text("2 x"), err(FormatError::InvalidToken));
        assert_eq!(DenseGrid::<i32>::parse_text("0 3"), err(FormatError::ZeroDimension));
        assert_eq!(TriangularStore::<i32>::parse_text("-2"), err(FormatError::ZeroDimension));
        assert_eq!(BandStore::<i32>::parse_text("2 3"), err(FormatError::BandTooWide));
        assert_eq!(
            SparseStore::<i32>::parse_text("2 1 2 0 5"),
            err(FormatError::EntryOutOfRange)
        );
        assert_eq!(SparseStore::<i32>::parse_text("2 1 0 0"), err(FormatError::MissingToken));
        assert_eq!(DenseGrid::<i32>::parse_text(""), err(FormatError::MissingToken));
    }

    #[test]
    fn test_oversized_headers_fail_cleanly() {
        let huge = 1u64 << (usize::BITS / 2);
        let header = alloc::format!("{huge} {huge}");
        assert_eq!(DenseGrid::<f64>::parse_text(&header), err(FormatError::InvalidToken));
        assert_eq!(
            DenseGrid::<f64>::parse_text("100000 100000 1 2"),
            err(FormatError::MissingToken)
        );
        let header = alloc::format!("{huge} {huge}");
        assert_eq!(BandStore::<f64>::parse_text(&header), err(FormatError::InvalidToken));

        assert_eq!(
            TriangularStore::<f64>::parse_text("10000000000000000"),
            err(FormatError::InvalidToken)
        );
        assert_eq!(
            TriangularStore::<f64>::parse_text("100000000 1 2 3"),
            err(FormatError::MissingToken)
        );

        assert_eq!(
            SparseStore::<f64>::parse_text("1\n1000000000000000\n"),
            err(FormatError::MissingToken)
        );
        assert_eq!(
            SparseStore::<f64>::parse_text("2\n1000000000000000\n0 0 1.5\n"),
            err(FormatError::MissingToken)
        );
    }
}
