//! Logical-order iteration over ring storage.

use std::iter::FusedIterator;

/// Iterator over the logical elements of a ring, head to tail.
///
/// Walks physical index `(head + k) % capacity` for `k` in `[0, len)`.
pub struct Iter<'a, T> {
    data: &'a [T],
    head: usize,
    front: usize,
    back: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(data: &'a [T], head: usize, len: usize) -> Self {
        Self {
            data,
            head,
            front: 0,
            back: len,
        }
    }

    #[inline]
    fn slot(&self, logical: usize) -> &'a T {
        &self.data[(self.head + logical) % self.data.len()]
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data,
            head: self.head,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        let item = self.slot(self.front);
        self.front += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.slot(self.back))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
