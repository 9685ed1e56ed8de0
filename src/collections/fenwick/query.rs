//! Read paths: prefix and range sums, point values, bulk extraction.

use super::{ascend, descend_count, range_start, Element, FenwickTree};

impl<T: Element> FenwickTree<T> {
    /// Sum of the values in `[0, index]`.
    ///
    /// `index` is clamped to the last position; an empty tree sums to zero.
    pub fn prefix_sum(&self, index: usize) -> T {
        self.sum_first(index.saturating_add(1))
    }

    /// Sum of the first `count` values (clamped to the tree length).
    #[inline]
    pub(crate) fn sum_first(&self, count: usize) -> T {
        let mut k = count.min(self.partials.len());
        let mut sum = T::zero();
        while k > 0 {
            sum += self.partials[k - 1];
            k = descend_count(k);
        }
        sum
    }

    /// Sum of the values in `[start, end)`, intersected with the tree.
    ///
    /// Returns zero when the range is empty or inverted. The two prefix walks
    /// are interleaved so that their shared tail cancels without being read.
    pub fn range_sum(&self, start: usize, end: usize) -> T {
        let mut hi = end.min(self.partials.len());
        let mut lo = start;
        if hi <= lo {
            return T::zero();
        }

        let mut sum = T::zero();
        while hi != lo {
            if hi > lo {
                sum += self.partials[hi - 1];
                hi = descend_count(hi);
            } else {
                sum -= self.partials[lo - 1];
                lo = descend_count(lo);
            }
        }
        sum
    }

    /// Sum of every value in the tree.
    pub fn total(&self) -> T {
        self.sum_first(self.partials.len())
    }

    /// The logical value at `index`, or zero when out of bounds.
    pub fn value(&self, index: usize) -> T {
        self.get(index).unwrap_or_else(T::zero)
    }

    /// The logical value at `index`, or `None` when out of bounds.
    ///
    /// Subtracts the children of partial `index` from it: the partials reached
    /// by descending from `index - 1` down to the range start.
    pub fn get(&self, index: usize) -> Option<T> {
        let mut value = *self.partials.get(index)?;
        let start = range_start(index);
        let mut k = index;
        while k > start {
            value -= self.partials[k - 1];
            k = descend_count(k);
        }
        Some(value)
    }

    /// Fills `buffer` with the logical values at positions `0..buffer.len()`.
    ///
    /// Runs the inverse of the build pass over a copy of the partials, so the
    /// whole extraction is O(n). Positions past the end of the tree are left
    /// untouched. Returns the number of values written.
    pub fn bulk_values(&self, buffer: &mut [T]) -> usize {
        let count = buffer.len().min(self.partials.len());
        let out = &mut buffer[..count];
        out.copy_from_slice(&self.partials[..count]);
        unwind(out);
        count
    }

    /// Returns all logical values.
    pub fn values(&self) -> Vec<T> {
        let mut out = self.partials.clone();
        unwind(&mut out);
        out
    }

    /// Consumes the tree and returns its logical values, reusing the storage.
    pub fn into_values(self) -> Vec<T> {
        let mut out = self.partials;
        unwind(&mut out);
        out
    }

    /// Fills `buffer` with the values at `start, start + 1, ...`, stopping at
    /// the end of the tree or of the buffer. Returns the number written.
    pub fn range_values(&self, start: usize, buffer: &mut [T]) -> usize {
        let available = self.partials.len().saturating_sub(start);
        let count = buffer.len().min(available);
        for (offset, slot) in buffer[..count].iter_mut().enumerate() {
            *slot = self.value(start + offset);
        }
        count
    }

    /// Fills `buffer[k]` with `prefix_sum(k)`, stopping at the end of the
    /// tree. Returns the number of sums computed.
    #[cfg(not(feature = "parallel"))]
    pub fn bulk_prefix_sums(&self, buffer: &mut [T]) -> usize {
        let count = buffer.len().min(self.partials.len());
        for (k, slot) in buffer[..count].iter_mut().enumerate() {
            *slot = self.sum_first(k + 1);
        }
        count
    }

    /// Fills `buffer[k]` with `prefix_sum(k)`, stopping at the end of the
    /// tree. Returns the number of sums computed.
    ///
    /// Each prefix walk is independent and runs on the rayon pool.
    #[cfg(feature = "parallel")]
    pub fn bulk_prefix_sums(&self, buffer: &mut [T]) -> usize
    where
        T: Send + Sync,
    {
        use rayon::prelude::*;

        let count = buffer.len().min(self.partials.len());
        buffer[..count]
            .par_iter_mut()
            .enumerate()
            .for_each(|(k, slot)| *slot = self.sum_first(k + 1));
        trace_event!(trace, count, "parallel prefix sums");
        count
    }
}

/// Inverse of the build pass: turns a valid partial array back into values.
///
/// Walks right to left so each partial is still intact when it is subtracted
/// from its ascend target.
fn unwind<T: Element>(partials: &mut [T]) {
    let n = partials.len();
    for i in (0..n).rev() {
        let j = ascend(i);
        if j < n {
            let child = partials[i];
            partials[j] -= child;
        }
    }
}
