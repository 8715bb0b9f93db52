//! Modular cursor arithmetic for ring indexing.

/// Position of one slot within a ring of fixed capacity.
///
/// All wraparound lives here. Every cursor produced by this module satisfies
/// `index < capacity`, and both `step` and `offset` wrap by comparison
/// instead of `%`, so there is no overflow edge for any capacity up to
/// `usize::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub(crate) struct Cursor(usize);

impl Cursor {
    /// Cursor at slot zero.
    #[inline]
    pub(crate) const fn zero() -> Self {
        Self(0)
    }

    /// Slot index this cursor points at.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0
    }

    /// Advance one slot, wrapping at `capacity`.
    #[inline]
    pub(crate) fn step(self, capacity: usize) -> Self {
        debug_assert!(self.0 < capacity);
        let next = self.0 + 1;
        Self(if next == capacity { 0 } else { next })
    }

    /// Cursor `n` slots forward, wrapping at `capacity`.
    ///
    /// Callers never offset past one full revolution (`n <= capacity`), so a
    /// single conditional subtraction wraps correctly and `self.0 + n` is
    /// only ever computed when it stays below `capacity`.
    #[inline]
    pub(crate) fn offset(self, n: usize, capacity: usize) -> Self {
        debug_assert!(self.0 < capacity && n <= capacity);
        let wrap = capacity - n;
        Self(if self.0 >= wrap {
            self.0 - wrap
        } else {
            self.0 + n
        })
    }
}
