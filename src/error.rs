//! Error types for the ringdeque crate.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors that can occur while operating on a ring buffer.
///
/// Every failing operation leaves the buffer exactly as it was before the
/// call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    /// Backing storage could not be grown to the requested capacity.
    #[error("failed to allocate storage for {requested} elements")]
    AllocationFailure {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
    /// Pop on a buffer that holds no elements.
    #[error("ring buffer is empty")]
    Empty,
    /// Copy or clone asked for more elements than the storage holds.
    #[error("requested {requested} elements but capacity is {capacity}")]
    CapacityExceeded { requested: usize, capacity: usize },
    /// Rejected configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
