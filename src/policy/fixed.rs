//! Fixed policy: capacity never changes; a push on a full ring overwrites.

use tracing::trace;

use crate::core::ring_buffer::RingBuffer;
use crate::error::RingError;
use crate::policy::{CapacityPolicy, Fixed};

impl<T> RingBuffer<T, Fixed>
where
    T: Copy + Default,
{
    /// Appends `value` after the logical-last element.
    ///
    /// On a full ring the logical-first element is overwritten and returned;
    /// `len` stays at `capacity`. A zero-capacity ring stores nothing and
    /// hands `value` straight back.
    pub fn push(&mut self, value: T) -> Option<T> {
        if self.capacity() == 0 {
            return Some(value);
        }
        let tail = self.tail;
        let evicted = self.is_full().then(|| self.data[tail]);
        self.data[tail] = value;
        self.tail = self.next_index(tail);
        if evicted.is_some() {
            self.head = self.tail;
            trace!(policy = Fixed::NAME, head = self.head, "overwrote oldest element");
        } else {
            self.len += 1;
        }
        evicted
    }

    /// Prepends `value` before the logical-first element.
    ///
    /// On a full ring the logical-last element is overwritten and returned.
    pub fn push_front(&mut self, value: T) -> Option<T> {
        if self.capacity() == 0 {
            return Some(value);
        }
        self.head = self.prev_index(self.head);
        let evicted = self.is_full().then(|| self.data[self.head]);
        self.data[self.head] = value;
        if evicted.is_some() {
            self.tail = self.head;
            trace!(policy = Fixed::NAME, tail = self.tail, "overwrote newest element");
        } else {
            self.len += 1;
        }
        evicted
    }

    /// Flat copy of the first `n` physical slots of `src`.
    ///
    /// Capacity is unchanged; afterwards `len == n` and `head == 0`.
    ///
    /// # Errors
    /// Returns [`RingError::CapacityExceeded`] if `n` exceeds the capacity of
    /// either ring. Nothing is modified in that case.
    pub fn copy_from(&mut self, src: &Self, n: usize) -> Result<(), RingError> {
        let limit = self.capacity().min(src.capacity());
        if n > limit {
            return Err(RingError::CapacityExceeded {
                requested: n,
                capacity: limit,
            });
        }
        self.load_prefix(&src.data[..n]);
        Ok(())
    }

    /// New ring of capacity `n` holding a flat copy of the first `n` physical
    /// slots.
    ///
    /// # Errors
    /// Returns [`RingError::CapacityExceeded`] if `n` exceeds this ring's
    /// capacity, or [`RingError::AllocationFailure`] if storage cannot be
    /// reserved.
    pub fn clone_prefix(&self, n: usize) -> Result<Self, RingError> {
        if n > self.capacity() {
            return Err(RingError::CapacityExceeded {
                requested: n,
                capacity: self.capacity(),
            });
        }
        let mut copy = Self::try_allocate(n, self.default_capacity)?;
        copy.copy_from(self, n)?;
        Ok(copy)
    }
}
