//! Construction, growth and replication.
//!
//! The O(n) build is the closed form of n point-adds: a single left-to-right
//! pass hands every partial to its ascend target once. Appends reuse the
//! same pass restricted to the slots that changed.

use super::{ascend, descend_count, highest_power_of_two_leq, range_start, Element, FenwickTree};

impl<T: Element> FenwickTree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self { partials: Vec::new() }
    }

    /// Creates an empty tree able to hold `capacity` values without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            partials: Vec::with_capacity(capacity),
        }
    }

    /// Creates a tree of `len` zeros.
    pub fn zeroed(len: usize) -> Self {
        Self {
            partials: vec![T::zero(); len],
        }
    }

    /// Builds a tree from `values`, adopting the vector as backing storage.
    ///
    /// The vector is rewritten in place into partial sums, so no allocation
    /// takes place. O(n).
    pub fn from_vec(values: Vec<T>) -> Self {
        let mut partials = values;
        propagate(&mut partials, 0, 0);
        trace_event!(debug, len = partials.len(), "fenwick tree built");
        Self { partials }
    }

    /// Builds a tree from a copy of `values`. O(n).
    pub fn from_slice(values: &[T]) -> Self {
        Self::from_vec(values.to_vec())
    }

    /// Truncates the tree to zero length, keeping the allocation for reuse.
    pub fn reset(&mut self) {
        trace_event!(debug, len = self.partials.len(), "fenwick tree reset");
        self.partials.clear();
    }

    /// Appends one value at the end. O(log n).
    ///
    /// The new slot is the sum of its children (the partials reached by
    /// descending from the previous last index down to the new slot's
    /// range start) plus `value`.
    pub fn push(&mut self, value: T) {
        let n = self.partials.len();
        let start = range_start(n);
        let mut partial = value;
        let mut k = n;
        while k > start {
            partial += self.partials[k - 1];
            k = descend_count(k);
        }
        self.partials.push(partial);
    }

    /// Appends `values` at the end.
    ///
    /// Only slots at or after the last power-of-two boundary below the old
    /// length are revisited, and only new slots receive contributions.
    pub fn extend_from_slice(&mut self, values: &[T]) {
        match values {
            [] => {}
            [value] => self.push(*value),
            _ => {
                let old_len = self.partials.len();
                self.partials.extend_from_slice(values);
                let imin = highest_power_of_two_leq(old_len).saturating_sub(1);
                propagate(&mut self.partials, imin, old_len);
                trace_event!(
                    trace,
                    old_len,
                    new_len = self.partials.len(),
                    "fenwick tree extended"
                );
            }
        }
    }

    /// Copies `source` into this tree, keeping this tree's length.
    ///
    /// The first `min(self.len(), source.len())` partials are copied verbatim.
    /// When this tree is longer, its tail is recomputed as if `source` were
    /// followed by zeros: each tail slot becomes the sum of its children.
    ///
    /// Returns the length of this tree.
    pub fn copy_from(&mut self, source: &FenwickTree<T>) -> usize {
        let dest_len = self.partials.len();
        let shared = dest_len.min(source.partials.len());
        self.partials[..shared].copy_from_slice(&source.partials[..shared]);

        for i in shared..dest_len {
            let start = range_start(i);
            let mut partial = T::zero();
            let mut k = i;
            while k > start {
                partial += self.partials[k - 1];
                k = descend_count(k);
            }
            self.partials[i] = partial;
        }

        trace_event!(
            debug,
            copied = shared,
            recomputed = dest_len - shared,
            "fenwick tree copied"
        );
        dest_len
    }
}

/// One-pass build over `partials[from..]`.
///
/// Each partial `i` is added into its ascend target `j` when `j` is in bounds
/// and `j >= fresh`; slots below `fresh` already hold final sums.
fn propagate<T: Element>(partials: &mut [T], from: usize, fresh: usize) {
    let n = partials.len();
    for i in from..n {
        let j = ascend(i);
        if j < n && j >= fresh {
            let child = partials[i];
            partials[j] += child;
        }
    }
}

impl<T: Element> From<Vec<T>> for FenwickTree<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T: Element> From<&[T]> for FenwickTree<T> {
    fn from(values: &[T]) -> Self {
        Self::from_slice(values)
    }
}

/// Construction from iterator.
/// This performs an O(n) build of the Fenwick Tree.
impl<T: Element> FromIterator<T> for FenwickTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Element> Extend<T> for FenwickTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let values: Vec<T> = iter.into_iter().collect();
        self.extend_from_slice(&values);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NUMBERS: [i32; 16] = [1, 0, 2, 1, 1, 3, 0, 4, 2, 5, 2, 2, 3, 1, 0, 2];
    const PARTIALS: [i32; 16] = [1, 1, 2, 4, 1, 4, 0, 12, 2, 7, 2, 11, 3, 4, 0, 29];

    #[test]
    fn test_from_slice_partials() {
        let ft = FenwickTree::from_slice(&NUMBERS);
        assert_eq!(ft.as_partials(), &PARTIALS);
    }

    #[test]
    fn test_from_vec_reuses_storage() {
        let values = NUMBERS.to_vec();
        let ptr = values.as_ptr();
        let ft = FenwickTree::from_vec(values);
        assert_eq!(ft.as_partials().as_ptr(), ptr);
        assert_eq!(ft.as_partials(), &PARTIALS);
    }

    #[test]
    fn test_single_and_empty() {
        let ft = FenwickTree::<i32>::from_slice(&[]);
        assert!(ft.is_empty());
        let ft = FenwickTree::from_slice(&[-10i32]);
        assert_eq!(ft.as_partials(), &[-10]);
    }

    #[test]
    fn test_zeroed_and_capacity() {
        let ft = FenwickTree::<i64>::zeroed(7);
        assert_eq!(ft.len(), 7);
        assert!(ft.as_partials().iter().all(|&p| p == 0));

        let ft = FenwickTree::<i64>::with_capacity(32);
        assert!(ft.is_empty());
        assert!(ft.capacity() >= 32);
    }

    #[test]
    fn test_push_matches_build() {
        let mut ft = FenwickTree::new();
        for &v in &NUMBERS {
            ft.push(v);
        }
        assert_eq!(ft.as_partials(), &PARTIALS);
    }

    #[test]
    fn test_extend_matches_build_at_every_split() {
        for k in 0..=NUMBERS.len() {
            let mut ft = FenwickTree::from_slice(&NUMBERS[..k]);
            ft.extend_from_slice(&NUMBERS[k..]);
            assert_eq!(ft.as_partials(), &PARTIALS, "split at {k}");
        }
    }

    #[test]
    fn test_extend_trait() {
        let mut ft: FenwickTree<i32> = NUMBERS[..5].iter().copied().collect();
        ft.extend(NUMBERS[5..].iter().copied());
        assert_eq!(ft.as_partials(), &PARTIALS);
    }

    #[test]
    fn test_reset_keeps_capacity() {
        let mut ft = FenwickTree::from_slice(&NUMBERS);
        let cap = ft.capacity();
        ft.reset();
        assert!(ft.is_empty());
        assert_eq!(ft.capacity(), cap);
        ft.extend_from_slice(&NUMBERS);
        assert_eq!(ft.as_partials(), &PARTIALS);
    }

    #[test]
    fn test_copy_into_longer_tree_pads_with_zeros() {
        let source = FenwickTree::from_slice(&NUMBERS[..5]);
        let mut dest = FenwickTree::from_slice(&[9i32; 12]);
        assert_eq!(dest.copy_from(&source), 12);

        let mut expected = NUMBERS[..5].to_vec();
        expected.resize(12, 0);
        assert_eq!(dest, FenwickTree::from_slice(&expected));
    }

    #[test]
    fn test_copy_into_shorter_tree_truncates() {
        let source = FenwickTree::from_slice(&NUMBERS);
        let mut dest = FenwickTree::<i32>::zeroed(6);
        assert_eq!(dest.copy_from(&source), 6);
        assert_eq!(dest, FenwickTree::from_slice(&NUMBERS[..6]));
    }

    #[test]
    fn test_copy_into_empty_tree() {
        let source = FenwickTree::from_slice(&NUMBERS);
        let mut dest = FenwickTree::<i32>::new();
        assert_eq!(dest.copy_from(&source), 0);
        assert!(dest.is_empty());
    }
}
