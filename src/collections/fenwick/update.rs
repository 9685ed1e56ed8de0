//! Write paths: point and range updates.
//!
//! Every update keeps the partial-sum invariant. Out-of-bounds positions are
//! skipped silently; ranges are intersected with the tree.

use super::{ascend, range_start, width, Element, FenwickTree};
use num_traits::NumCast;

impl<T: Element> FenwickTree<T> {
    /// Adds `delta` to the value at `index`. No-op when out of bounds.
    pub fn add_value(&mut self, index: usize, delta: T) {
        let n = self.partials.len();
        let mut i = index;
        while i < n {
            self.partials[i] += delta;
            i = ascend(i);
        }
    }

    /// Sets the value at `index`. No-op when out of bounds.
    pub fn set_value(&mut self, index: usize, value: T) {
        if let Some(current) = self.get(index) {
            self.add_value(index, value - current);
        }
    }

    /// Multiplies the value at `index` by `factor` and returns the new value.
    ///
    /// Returns zero and leaves the tree untouched when out of bounds.
    pub fn multiply_value(&mut self, index: usize, factor: T) -> T {
        match self.get(index) {
            Some(current) => {
                let scaled = current * factor;
                self.add_value(index, scaled - current);
                scaled
            }
            None => T::zero(),
        }
    }

    /// Adds `delta` to every value. O(n).
    ///
    /// Partial `i` covers `2^trailing_zeros(i + 1)` values, so it grows by
    /// that many deltas.
    pub fn shift_all(&mut self, delta: T) {
        if delta.is_zero() {
            return;
        }
        for (i, partial) in self.partials.iter_mut().enumerate() {
            *partial += delta << (i + 1).trailing_zeros() as usize;
        }
    }

    /// Multiplies every value by `factor`. O(n).
    pub fn scale_all(&mut self, factor: T) {
        for partial in &mut self.partials {
            *partial *= factor;
        }
    }

    /// Adds `deltas[k]` to the value at `start + k`, for positions in the tree.
    pub fn range_add(&mut self, start: usize, deltas: &[T]) {
        for (index, &delta) in positions(self.len(), start, deltas) {
            self.add_value(index, delta);
        }
    }

    /// Multiplies the value at `start + k` by `factors[k]`, for positions in the tree.
    pub fn range_multiply(&mut self, start: usize, factors: &[T]) {
        for (index, &factor) in positions(self.len(), start, factors) {
            self.multiply_value(index, factor);
        }
    }

    /// Sets the value at `start + k` to `values[k]`, for positions in the tree.
    pub fn range_set(&mut self, start: usize, values: &[T]) {
        for (index, &value) in positions(self.len(), start, values) {
            self.set_value(index, value);
        }
        trace_event!(trace, start, count = values.len(), "fenwick range set");
    }

    /// Adds `delta` to every value in `[start, end)`, intersected with the tree.
    ///
    /// Each partial `j` inside the range grows by `delta` times the number of
    /// range positions it covers: the cumulative count `j + 1 - start`,
    /// capped by the partial's width. Partials above the range that still
    /// cover position `end - 1` lie on its ascend chain and grow by the part
    /// of the range that falls inside their own responsibility range.
    ///
    /// O((end - start) + log n).
    ///
    /// # Panics
    ///
    /// Panics if a covered-position count does not fit in `T` while `delta`
    /// is non-zero, since the adjusted partial would overflow.
    pub fn range_shift(&mut self, start: usize, end: usize, delta: T) {
        let n = self.partials.len();
        let end = end.min(n);
        if end <= start || delta.is_zero() {
            return;
        }

        for j in start..end {
            let covered = (j + 1 - start).min(width(j));
            self.partials[j] += times(delta, covered);
        }

        let span = end - start;
        let mut j = ascend(end - 1);
        while j < n {
            let covered = span.min(end - range_start(j));
            self.partials[j] += times(delta, covered);
            j = ascend(j);
        }
    }

    /// Multiplies every value in `[start, end)` by `factor`, intersected with
    /// the tree. O((end - start) log n).
    pub fn range_scale(&mut self, start: usize, end: usize, factor: T) {
        let end = end.min(self.partials.len());
        for index in start..end {
            self.multiply_value(index, factor);
        }
    }
}

/// Pairs `items` with their target positions, dropping those past `len`.
fn positions<U>(len: usize, start: usize, items: &[U]) -> impl Iterator<Item = (usize, &U)> {
    let available = len.saturating_sub(start);
    items[..items.len().min(available)]
        .iter()
        .enumerate()
        .map(move |(offset, item)| (start + offset, item))
}

/// `delta * count` for a position count.
fn times<T: Element>(delta: T, count: usize) -> T {
    match <T as NumCast>::from(count) {
        Some(count) => delta * count,
        None => panic!("{count} covered positions do not fit the element type"),
    }
}
