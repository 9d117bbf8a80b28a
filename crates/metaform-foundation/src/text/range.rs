//! Cursor position and selection within a text buffer.

/// A range of byte offsets into the text.
///
/// `start == end` is a cursor. `start` may exceed `end` for a selection made
/// right to left; use [`min`](Self::min) and [`max`](Self::max) for ordered
/// access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn cursor(position: usize) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    pub const fn zero() -> Self {
        Self::cursor(0)
    }

    /// Covers a whole text of `length` bytes.
    pub const fn all(length: usize) -> Self {
        Self {
            start: 0,
            end: length,
        }
    }

    pub const fn collapsed(&self) -> bool {
        self.start == self.end
    }

    pub fn length(&self) -> usize {
        self.end.abs_diff(self.start)
    }

    pub fn min(&self) -> usize {
        self.start.min(self.end)
    }

    pub fn max(&self) -> usize {
        self.start.max(self.end)
    }

    /// Clamps both ends to `[0, max]`.
    pub fn coerce_in(&self, max: usize) -> Self {
        Self {
            start: self.start.min(max),
            end: self.end.min(max),
        }
    }
}
