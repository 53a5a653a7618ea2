//! Row-offset table for packed lower-triangular storage
//!
//! Row `r` of a packed lower triangle occupies `r + 1` slots, so it starts
//! at the triangular number `r(r+1)/2`. The table memoizes those starts and
//! only ever grows. It is an ordinary value: share one between stores with
//! `Rc` when many triangular matrices are built in the same scope.

use alloc::vec::Vec;
use core::cell::RefCell;

/// Growth-only memo of packed row starts: 0, 1, 3, 6, 10, ...
#[derive(Debug, Clone, Default)]
pub struct RowOffsets {
    starts: RefCell<Vec<usize>>,
}

impl RowOffsets {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Packed offset of `row`; also the slot count of a triangle with `row` rows
    pub fn offset(&self, row: usize) -> usize {
        self.ensure(row);
        self.starts.borrow()[row]
    }

    /// Slot count of a packed triangle with `size` rows, `None` on overflow
    ///
    /// Pure arithmetic; the table is left untouched.
    pub fn packed_len(size: usize) -> Option<usize> {
        let next = size.checked_add(1)?;
        if size % 2 == 0 {
            (size / 2).checked_mul(next)
        } else {
            size.checked_mul(next / 2)
        }
    }

    /// Map a packed index back to its (row, col) cell
    pub fn locate(&self, index: usize) -> (usize, usize) {
        let mut row = 0;
        while self.offset(row + 1) <= index {
            row += 1;
        }
        (row, index - self.offset(row))
    }

    /// Number of rows memoized so far
    pub fn cached_rows(&self) -> usize {
        self.starts.borrow().len()
    }

    fn ensure(&self, row: usize) {
        let mut starts = self.starts.borrow_mut();
        if starts.len() > row {
            return;
        }
        log::trace!("extending row offsets from {} to {} rows", starts.len(), row + 1);
        while starts.len() <= row {
            let next = match starts.last() {
                Some(&last) => last + starts.len(),
                None => 0,
            };
            starts.push(next);
        }
    }
}
