//! Storage, index arithmetic, rotation, and iteration shared by both policies.

pub mod config;
pub mod iter;
pub mod ring_buffer;
pub mod rotate;

pub use config::{grown_capacity, RingConfig, DEFAULT_CAPACITY};
pub use iter::Iter;
pub use ring_buffer::{CleanupHook, FixedRing, GrowableRing, RingBuffer};
