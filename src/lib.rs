//! A fixed-capacity ring buffer that overwrites its oldest element when full.
//!
//! [`BoundedRing`] stores up to `capacity` elements in slots reused
//! cyclically. [`insert`](BoundedRing::insert) never fails: once the ring is
//! full, each insert drops the oldest element and takes its slot. Removal is
//! FIFO and fails on an empty ring with [`EmptyContainerError`] rather than
//! returning a sentinel value.
//!
//! The ring has no internal synchronization; all mutation goes through
//! `&mut self`. Callers that share a ring across threads wrap it in a lock
//! of their choosing.
//!
//! # Example
//!
//! ```
//! use bounded_ring::BoundedRing;
//!
//! let mut ring = BoundedRing::new(3)?;
//! ring.insert(1);
//! ring.insert(2);
//! ring.insert(3);
//! ring.insert(4); // full: 1 is dropped silently
//!
//! assert_eq!(ring.remove(), Ok(2));
//! assert_eq!(ring.remove(), Ok(3));
//! assert_eq!(ring.remove(), Ok(4));
//! assert!(ring.remove().is_err());
//! # Ok::<(), bounded_ring::InvalidCapacityError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod error;
mod index;
mod iter;
mod read;
mod ring;


pub use error::{EmptyContainerError, InvalidCapacityError};
pub use iter::{BoundedRingIter, BoundedRingIterMut};
pub use ring::{BoundedRing, Drain};
