//! In-place re-linearization of a wrapped ring.

/// Reverses `slice[start..=end]` in place. Empty when `start >= end`.
#[inline]
pub fn reverse_range<T>(slice: &mut [T], start: usize, end: usize) {
    if start < end {
        slice[start..=end].reverse();
    }
}

/// Rotates `slice` left by `head` using three reversals, so the element at
/// physical `head` ends up at index 0 and circular order is preserved.
///
/// No-op when `head == 0` or the slice is empty. O(n) swaps, O(1) extra space.
pub fn rotate_to_front<T>(slice: &mut [T], head: usize) {
    let size = slice.len();
    if head == 0 || size == 0 {
        return;
    }
    debug_assert!(head < size, "head {} out of range for {}", head, size);
    reverse_range(slice, head, size - 1);
    reverse_range(slice, 0, head - 1);
    reverse_range(slice, 0, size - 1);
}
