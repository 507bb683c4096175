#![allow(dead_code)]

use ringdeque::{CapacityPolicy, RingBuffer};

/// Logical contents, head to tail.
pub fn logical<P: CapacityPolicy>(ring: &RingBuffer<i32, P>) -> Vec<i32> {
    ring.iter().copied().collect()
}

/// Checks the bookkeeping invariants every reachable state must satisfy.
pub fn assert_invariants<T, P>(ring: &RingBuffer<T, P>)
where
    T: Copy + Default,
    P: CapacityPolicy,
{
    let capacity = ring.capacity();
    assert!(
        ring.len() <= capacity,
        "len {} exceeds capacity {}",
        ring.len(),
        capacity
    );
    if capacity > 0 {
        assert!(ring.head() < capacity, "head {} out of range", ring.head());
        assert!(ring.tail() < capacity, "tail {} out of range", ring.tail());
        assert_eq!(
            ring.tail(),
            (ring.head() + ring.len()) % capacity,
            "tail does not follow head + len"
        );
    }
    assert_eq!(ring.iter().len(), ring.len());
}
