//! Ring engine shared by both capacity policies.

use std::fmt;
use std::marker::PhantomData;

use tracing::{trace, warn};

use crate::core::config::{RingConfig, DEFAULT_CAPACITY};
use crate::core::iter::Iter;
use crate::core::rotate::rotate_to_front;
use crate::error::RingError;
use crate::policy::{CapacityPolicy, Fixed, Growable};

/// Hook run on each stored element when a buffer is destroyed.
pub type CleanupHook<T> = Box<dyn FnMut(T) + Send>;

/// Double-ended circular buffer over a single contiguous allocation.
///
/// The logical sequence is `data[head], data[(head + 1) % capacity], ...` for
/// `len` elements. `tail` is the next write position for a back push, so
/// `tail == (head + len) % capacity` holds after every operation. Empty and
/// full both have `head == tail`; only `len` tells them apart.
///
/// Every physical slot is default-initialized at allocation, so the storage
/// never holds uninitialized values.
///
/// A growable ring may own a boxed cleanup hook and so is not `Clone`; copy
/// one with `clone_prefix` (after [`make_contiguous`](Self::make_contiguous)
/// for a logical copy). [`FixedRing`] never holds a hook and implements
/// `Clone`.
pub struct RingBuffer<T, P = Growable>
where
    T: Copy + Default,
    P: CapacityPolicy,
{
    pub(crate) data: Vec<T>,
    pub(crate) head: usize,
    pub(crate) tail: usize,
    pub(crate) len: usize,
    pub(crate) default_capacity: usize,
    pub(crate) cleanup: Option<CleanupHook<T>>,
    policy: PhantomData<P>,
}

/// Ring that grows by 1.5x when a push finds it full.
pub type GrowableRing<T> = RingBuffer<T, Growable>;

/// Ring with immutable capacity that overwrites on a full push.
pub type FixedRing<T> = RingBuffer<T, Fixed>;

impl<T, P> RingBuffer<T, P>
where
    T: Copy + Default,
    P: CapacityPolicy,
{
    /// Creates a ring with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a ring with `capacity` slots.
    ///
    /// A capacity of zero is allowed; a growable ring allocates on first push.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_storage(vec![T::default(); capacity], DEFAULT_CAPACITY)
    }

    /// Like [`with_capacity`](Self::with_capacity) but reports allocation
    /// failure instead of aborting.
    ///
    /// # Errors
    /// Returns [`RingError::AllocationFailure`] if storage cannot be reserved.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, RingError> {
        Self::try_allocate(capacity, DEFAULT_CAPACITY)
    }

    /// Creates a ring from a validated [`RingConfig`].
    ///
    /// # Errors
    /// Returns [`RingError::InvalidConfig`] for a rejected config, or
    /// [`RingError::AllocationFailure`] if storage cannot be reserved.
    pub fn from_config(config: &RingConfig) -> Result<Self, RingError> {
        config.validate()?;
        Self::try_allocate(config.capacity, config.default_capacity)
    }

    pub(crate) fn try_allocate(
        capacity: usize,
        default_capacity: usize,
    ) -> Result<Self, RingError> {
        let mut data = Vec::new();
        if let Err(source) = data.try_reserve_exact(capacity) {
            warn!(
                policy = P::NAME,
                requested = capacity,
                "ring buffer allocation failed"
            );
            return Err(RingError::AllocationFailure {
                requested: capacity,
                source,
            });
        }
        data.resize(capacity, T::default());
        Ok(Self::from_storage(data, default_capacity))
    }

    fn from_storage(data: Vec<T>, default_capacity: usize) -> Self {
        Self {
            data,
            head: 0,
            tail: 0,
            len: 0,
            default_capacity,
            cleanup: None,
            policy: PhantomData,
        }
    }

    /// Returns the number of elements currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the size of the backing storage.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns true when no elements are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true when every slot holds an element.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Returns the number of free slots.
    #[inline]
    pub fn available(&self) -> usize {
        self.capacity() - self.len
    }

    /// Physical index of the logical-first element.
    #[inline]
    pub fn head(&self) -> usize {
        self.head
    }

    /// Physical index one past the logical-last element.
    #[inline]
    pub fn tail(&self) -> usize {
        self.tail
    }

    /// Growth floor this ring was configured with.
    #[inline]
    pub fn default_capacity(&self) -> usize {
        self.default_capacity
    }

    /// Removes all elements. Capacity and storage are unchanged.
    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }

    /// Returns the element at `logical` offset from the head.
    pub fn get(&self, logical: usize) -> Option<&T> {
        if logical >= self.len {
            return None;
        }
        Some(&self.data[self.physical_index(logical)])
    }

    /// Returns the logical-first element.
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns the logical-last element.
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    /// Removes and returns the logical-last element.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.tail = self.prev_index(self.tail);
        self.len -= 1;
        Some(self.data[self.tail])
    }

    /// Removes and returns the logical-first element.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.data[self.head];
        self.head = self.next_index(self.head);
        self.len -= 1;
        Some(value)
    }

    /// [`pop`](Self::pop) that reports an empty buffer as an error.
    ///
    /// # Errors
    /// Returns [`RingError::Empty`] when no elements are stored.
    pub fn try_pop(&mut self) -> Result<T, RingError> {
        self.pop().ok_or(RingError::Empty)
    }

    /// [`pop_front`](Self::pop_front) that reports an empty buffer as an error.
    ///
    /// # Errors
    /// Returns [`RingError::Empty`] when no elements are stored.
    pub fn try_pop_front(&mut self) -> Result<T, RingError> {
        self.pop_front().ok_or(RingError::Empty)
    }

    /// Iterates the logical elements from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.data, self.head, self.len)
    }

    /// All `capacity` physical slots, including ones outside the logical run.
    pub fn as_physical_slice(&self) -> &[T] {
        &self.data
    }

    /// The logical run as two slices; the second is empty unless it wraps.
    pub fn as_slices(&self) -> (&[T], &[T]) {
        if self.len == 0 {
            return (&[], &[]);
        }
        let first = self.len.min(self.capacity() - self.head);
        (
            &self.data[self.head..self.head + first],
            &self.data[..self.len - first],
        )
    }

    /// Moves the logical run to the start of storage so `head == 0`, and
    /// returns it as one slice.
    pub fn make_contiguous(&mut self) -> &[T] {
        let capacity = self.capacity();
        if capacity == 0 {
            return &[];
        }
        if self.head != 0 {
            rotate_to_front(&mut self.data, self.head);
            self.head = 0;
            self.tail = self.len % capacity;
        }
        &self.data[..self.len]
    }

    /// Releases the buffer, running the cleanup hook on each stored element.
    pub fn destroy(self) {
        trace!(policy = P::NAME, len = self.len, "destroying ring buffer");
        drop(self);
    }

    #[inline]
    pub(crate) fn physical_index(&self, logical: usize) -> usize {
        (self.head + logical) % self.capacity()
    }

    #[inline]
    pub(crate) fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.capacity()
    }

    #[inline]
    pub(crate) fn prev_index(&self, index: usize) -> usize {
        if index == 0 {
            self.capacity() - 1
        } else {
            index - 1
        }
    }

    /// Flat copy of `src` into the first physical slots, making them the whole
    /// logical run. Callers guarantee `src.len() <= capacity`.
    pub(crate) fn load_prefix(&mut self, src: &[T]) {
        let n = src.len();
        self.data[..n].copy_from_slice(src);
        self.head = 0;
        self.len = n;
        self.tail = if self.capacity() == 0 {
            0
        } else {
            n % self.capacity()
        };
    }
}

impl<T, P> Drop for RingBuffer<T, P>
where
    T: Copy + Default,
    P: CapacityPolicy,
{
    fn drop(&mut self) {
        let Some(mut hook) = self.cleanup.take() else {
            return;
        };
        for logical in 0..self.len {
            hook(self.data[self.physical_index(logical)]);
        }
    }
}

impl<T> Clone for RingBuffer<T, Fixed>
where
    T: Copy + Default,
{
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            head: self.head,
            tail: self.tail,
            len: self.len,
            default_capacity: self.default_capacity,
            cleanup: None,
            policy: PhantomData,
        }
    }
}

impl<T, P> Default for RingBuffer<T, P>
where
    T: Copy + Default,
    P: CapacityPolicy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> fmt::Debug for RingBuffer<T, P>
where
    T: Copy + Default + fmt::Debug,
    P: CapacityPolicy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("policy", &P::NAME)
            .field("capacity", &self.capacity())
            .field("len", &self.len)
            .field("head", &self.head)
            .field("tail", &self.tail)
            .field("elements", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<T, P> PartialEq for RingBuffer<T, P>
where
    T: Copy + Default + PartialEq,
    P: CapacityPolicy,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<'a, T, P> IntoIterator for &'a RingBuffer<T, P>
where
    T: Copy + Default,
    P: CapacityPolicy,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
