#![forbid(unsafe_code)]
//! Double-ended circular buffer with two capacity policies.
//!
//! `ringdeque` stores `Copy` elements in one contiguous allocation indexed by
//! a `head` and a `tail` cursor. Push and pop are O(1) at both ends, and
//! iteration walks the storage in logical order without copying.
//!
//! The capacity policy is a type parameter:
//!
//! - [`GrowableRing`] grows storage by 1.5x when a push finds it full, moving
//!   a wrapped run back to the front of storage so order is preserved.
//! - [`FixedRing`] never reallocates; a push on a full ring overwrites the
//!   element at the opposite end (a sliding window / bounded log).
//!
//! # Quick Start
//!
//! ```
//! use ringdeque::GrowableRing;
//!
//! let mut ring = GrowableRing::new();
//! for i in 0..10 {
//!     ring.push(i).unwrap();
//! }
//! assert_eq!(ring.capacity(), 12);
//! assert_eq!(ring.pop_front(), Some(0));
//! assert_eq!(ring.pop(), Some(9));
//! assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
//! ```
//!
//! # Sliding Window
//!
//! ```
//! use ringdeque::FixedRing;
//!
//! let mut window = FixedRing::with_capacity(3);
//! for sample in [1.0, 2.0, 3.0, 4.0] {
//!     window.push(sample);
//! }
//! let mean: f64 = window.iter().sum::<f64>() / window.len() as f64;
//! assert_eq!(mean, 3.0);
//! ```

pub mod core;
pub mod error;
pub mod policy;

pub use crate::core::config::{RingConfig, DEFAULT_CAPACITY};
pub use crate::core::iter::Iter;
pub use crate::core::ring_buffer::{CleanupHook, FixedRing, GrowableRing, RingBuffer};
pub use error::RingError;
pub use policy::{CapacityPolicy, Fixed, Growable};
