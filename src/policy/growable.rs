//! Growable policy: storage expands by 1.5x whenever a push finds it full.

use tracing::{debug, warn};

use crate::core::config::grown_capacity;
use crate::core::ring_buffer::RingBuffer;
use crate::error::RingError;
use crate::policy::{CapacityPolicy, Growable};

impl<T> RingBuffer<T, Growable>
where
    T: Copy + Default,
{
    /// Registers a hook run once per stored element when the ring is
    /// destroyed or dropped.
    pub fn with_cleanup<F>(mut self, hook: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        self.cleanup = Some(Box::new(hook));
        self
    }

    /// Grows storage to `new_capacity`, keeping logical order.
    ///
    /// Does nothing if `new_capacity` does not exceed the current capacity.
    /// A run that wraps past the end of storage (`tail <= head` while
    /// non-empty) is moved to the front, leaving `head == 0` and
    /// `tail == len`; an unwrapped run keeps its `head` and `tail`.
    ///
    /// # Errors
    /// Returns [`RingError::AllocationFailure`] if storage cannot be grown; the
    /// ring is left untouched.
    pub fn resize(&mut self, new_capacity: usize) -> Result<(), RingError> {
        let old_capacity = self.capacity();
        if new_capacity <= old_capacity {
            return Ok(());
        }
        if let Err(source) = self.data.try_reserve_exact(new_capacity - old_capacity) {
            warn!(
                policy = Growable::NAME,
                old_capacity,
                new_capacity,
                "ring buffer growth failed"
            );
            return Err(RingError::AllocationFailure {
                requested: new_capacity,
                source,
            });
        }

        let wrapped = self.len > 0 && self.tail <= self.head;
        if wrapped {
            self.make_contiguous();
        }
        self.data.resize(new_capacity, T::default());
        if wrapped {
            self.tail = self.len;
        }

        debug!(
            policy = Growable::NAME,
            old_capacity,
            new_capacity,
            len = self.len,
            "grew ring buffer"
        );
        Ok(())
    }

    /// Grows storage if every slot is occupied, so the next push has room.
    ///
    /// # Errors
    /// Returns [`RingError::AllocationFailure`] if storage cannot be grown.
    pub fn resize_if_full(&mut self) -> Result<(), RingError> {
        if self.len < self.capacity() {
            return Ok(());
        }
        self.resize(grown_capacity(self.capacity(), self.default_capacity))
    }

    /// Appends `value` after the logical-last element.
    ///
    /// # Errors
    /// Returns [`RingError::AllocationFailure`] if the ring was full and could
    /// not grow.
    pub fn push(&mut self, value: T) -> Result<(), RingError> {
        self.resize_if_full()?;
        let tail = self.tail;
        self.data[tail] = value;
        self.tail = self.next_index(tail);
        self.len += 1;
        Ok(())
    }

    /// Prepends `value` before the logical-first element.
    ///
    /// # Errors
    /// Returns [`RingError::AllocationFailure`] if the ring was full and could
    /// not grow.
    pub fn push_front(&mut self, value: T) -> Result<(), RingError> {
        self.resize_if_full()?;
        self.head = self.prev_index(self.head);
        self.data[self.head] = value;
        self.len += 1;
        Ok(())
    }

    /// Appends every value in order.
    ///
    /// Capacity grows by `values.len()` up front when the values do not fit.
    ///
    /// # Errors
    /// Returns [`RingError::AllocationFailure`] if storage cannot be grown;
    /// nothing is pushed in that case.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<(), RingError> {
        self.reserve_for(values.len())?;
        for &value in values {
            self.push(value)?;
        }
        Ok(())
    }

    /// Prepends every value one at a time, so the last input ends up at the
    /// front and the first input ends up deepest.
    ///
    /// # Errors
    /// Returns [`RingError::AllocationFailure`] if storage cannot be grown;
    /// nothing is pushed in that case.
    pub fn extend_front_from_slice(&mut self, values: &[T]) -> Result<(), RingError> {
        self.reserve_for(values.len())?;
        for &value in values {
            self.push_front(value)?;
        }
        Ok(())
    }

    fn reserve_for(&mut self, count: usize) -> Result<(), RingError> {
        if count == 0 || self.len.saturating_add(count) <= self.capacity() {
            return Ok(());
        }
        self.resize(self.capacity().saturating_add(count))
    }

    /// Flat copy of the first `n` physical slots of `src`.
    ///
    /// Afterwards `capacity == len == n` and `head == 0`. The copy is physical:
    /// call [`make_contiguous`](RingBuffer::make_contiguous) on `src` first if
    /// its logical run may be wrapped or offset.
    ///
    /// # Errors
    /// Returns [`RingError::CapacityExceeded`] if `n` exceeds the capacity of
    /// `src`, or [`RingError::AllocationFailure`] if `self` cannot grow.
    pub fn copy_from(&mut self, src: &Self, n: usize) -> Result<(), RingError> {
        if n > src.capacity() {
            return Err(RingError::CapacityExceeded {
                requested: n,
                capacity: src.capacity(),
            });
        }
        self.resize(n)?;
        self.data.truncate(n);
        self.load_prefix(&src.data[..n]);
        Ok(())
    }

    /// New ring holding a flat copy of the first `n` physical slots.
    ///
    /// The cleanup hook is not carried over.
    ///
    /// # Errors
    /// Same as [`copy_from`](Self::copy_from).
    pub fn clone_prefix(&self, n: usize) -> Result<Self, RingError> {
        let mut copy = Self::try_allocate(n, self.default_capacity)?;
        copy.copy_from(self, n)?;
        Ok(copy)
    }

    /// Legacy clear: empties the ring and reports zero capacity while keeping
    /// the allocation. The next push grows back to the default capacity.
    pub fn reset_capacity(&mut self) {
        self.data.clear();
        self.clear();
    }
}
