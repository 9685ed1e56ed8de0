//! Order-statistics search over non-decreasing prefix sums.

use super::{highest_power_of_two_leq, Element, FenwickTree};

impl<T: Element> FenwickTree<T> {
    /// Finds the largest index whose prefix sum is `<= target`.
    ///
    /// Returns the index (or `None` when even the first prefix exceeds
    /// `target`, or the tree is empty) together with the prefix sum reached
    /// at that index, which may be below `target` when `target` is not an
    /// attainable prefix sum.
    ///
    /// Prefix sums must be non-decreasing (e.g. all values non-negative);
    /// otherwise the result is unspecified. Binary lifting, O(log n).
    pub fn search_sum(&self, target: T) -> (Option<usize>, T) {
        let n = self.partials.len();
        let mut remaining = target;
        let mut pos = 0;
        let mut step = highest_power_of_two_leq(n);

        while step > 0 {
            let next = pos + step;
            if next <= n && self.partials[next - 1] <= remaining {
                remaining -= self.partials[next - 1];
                pos = next;
            }
            step >>= 1;
        }

        (pos.checked_sub(1), target - remaining)
    }
}
