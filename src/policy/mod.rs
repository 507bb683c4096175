//! Capacity policies.
//!
//! The policy is chosen by type parameter at construction, so a buffer's
//! full-buffer behavior is fixed for its lifetime:
//!
//! - [`Growable`]: push on a full buffer grows storage by 1.5x.
//! - [`Fixed`]: push on a full buffer overwrites the element at the far end.

pub mod fixed;
pub mod growable;

mod sealed {
    pub trait Sealed {}
}

/// Marker trait implemented by the capacity policies.
pub trait CapacityPolicy: sealed::Sealed {
    /// Short name used in log events.
    const NAME: &'static str;
}

/// Capacity grows on demand; pushes never evict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Growable;

/// Capacity is set once at construction; pushes on a full buffer evict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fixed;

impl sealed::Sealed for Growable {}
impl sealed::Sealed for Fixed {}

impl CapacityPolicy for Growable {
    const NAME: &'static str = "growable";
}

impl CapacityPolicy for Fixed {
    const NAME: &'static str = "fixed";
}
