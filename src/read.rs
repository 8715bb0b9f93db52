//! Read accessors for `BoundedRing`.
//!
//! All accessors take `&self` and cannot observe a partially-updated ring:
//! mutation requires `&mut self`, which the borrow checker excludes while
//! any of these borrows is live.

use crate::iter::BoundedRingIter;
use crate::ring::BoundedRing;

impl<T> BoundedRing<T> {
    /// Reference to the oldest element, or `None` if the ring is empty.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.get(0)
    }

    /// Reference to the newest element, or `None` if the ring is empty.
    #[inline]
    #[must_use]
    pub fn peek_back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    /// Reference to the element `index` positions after the oldest
    /// (0 = oldest). `None` when `index >= len`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        let slot = self.head.offset(index, self.capacity());
        // SAFETY: index < len, so the slot at head + index is within the
        // live window and initialized.
        Some(unsafe { self.storage[slot.index()].assume_init_ref() })
    }

    /// Iterate the live elements, oldest to newest.
    #[inline]
    pub fn iter(&self) -> BoundedRingIter<'_, T> {
        BoundedRingIter::new(self)
    }
}
