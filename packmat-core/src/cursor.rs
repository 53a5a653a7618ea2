//! Bounds-aware cursor over a store's stored slots

use crate::StoreError;

/// Forward cursor over a borrowed slot buffer
///
/// The cursor may sit anywhere in `[0, len]`; `current` only succeeds
/// strictly inside `[begin, end)`. Holding a cursor borrows the store, so
/// the buffer cannot be reallocated underneath it.
#[derive(Debug, Clone)]
pub struct Cursor<'a, T> {
    slots: &'a [T],
    position: usize,
}

impl<'a, T> Cursor<'a, T> {
    /// Create a cursor at the first slot
    pub fn new(slots: &'a [T]) -> Self {
        Self { slots, position: 0 }
    }

    /// Slot under the cursor
    pub fn current(&self) -> Result<&'a T, StoreError> {
        self.slots
            .get(self.position)
            .ok_or(StoreError::CursorExhausted {
                position: self.position,
                len: self.slots.len(),
            })
    }

    /// Step to the next slot; stepping at the end is a no-op
    pub fn advance(&mut self) -> &mut Self {
        if self.position < self.slots.len() {
            self.position += 1;
        }
        self
    }

    /// Current position
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether the cursor has reached the end
    pub fn is_end(&self) -> bool {
        self.position >= self.slots.len()
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.slots.get(self.position)?;
        self.position += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.slots.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<'a, T> ExactSizeIterator for Cursor<'a, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_walk_and_exhaust() {
        let data = [1, 2, 3];
        let mut cursor = Cursor::new(&data);
        assert_eq!(cursor.current(), Ok(&1));
        cursor.advance().advance();
        assert_eq!(cursor.current(), Ok(&3));
        cursor.advance();
        assert!(cursor.is_end());
        assert_eq!(
            cursor.current(),
            Err(StoreError::CursorExhausted { position: 3, len: 3 })
        );
        // stepping past the end stays at the end
        cursor.advance();
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_empty_buffer() {
        let data: [f64; 0] = [];
        let cursor = Cursor::new(&data);
        assert!(cursor.is_end());
        assert!(cursor.current().is_err());
    }

    #[test]
    fn test_iterator() {
        let data = [4, 5, 6];
        let mut cursor = Cursor::new(&data);
        cursor.advance();
        assert_eq!(cursor.len(), 2);
        let rest: Vec<_> = cursor.copied().collect();
        assert_eq!(rest, [5, 6]);
    }
}
