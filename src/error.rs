//! Error types for `bounded_ring`.

use snafu::Snafu;

/// Construction was given a capacity of zero.
///
/// Fatal to construction: no ring is produced. Retry with a positive
/// capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Snafu)]
#[snafu(display("ring capacity must be greater than zero"))]
pub struct InvalidCapacityError;

/// [`remove`](crate::BoundedRing::remove) was called on an empty ring.
///
/// Recoverable: a later [`insert`](crate::BoundedRing::insert) makes
/// `remove` succeed again. An empty ring fails rather than returning a
/// default, so no stored value is ever ambiguous with "nothing there".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Snafu)]
#[snafu(display("remove from empty ring"))]
pub struct EmptyContainerError;
