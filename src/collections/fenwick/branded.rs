//! `BrandedFenwickTree` — a token-gated Fenwick tree.
//!
//! The tree lives in a [`GhostCell`], so it can be shared by reference while
//! the brand's [`GhostToken`] decides who may read and who may write:
//! - reads take `&GhostToken<'brand>` (any number at once),
//! - writes take `&mut GhostToken<'brand>` (exclusive).
//!
//! This is how callers layer single-writer discipline over a tree without a
//! lock. The tree itself stays unsynchronized.

use super::{Element, FenwickTree};
use crate::{GhostCell, GhostToken};

/// A branded Fenwick tree.
pub struct BrandedFenwickTree<'brand, T = i64> {
    inner: GhostCell<'brand, FenwickTree<T>>,
}

impl<'brand, T: Element> BrandedFenwickTree<'brand, T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::from_tree(FenwickTree::new())
    }

    /// Creates an empty tree with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_tree(FenwickTree::with_capacity(capacity))
    }

    /// Builds a tree from a copy of `values`. O(n).
    pub fn from_slice(values: &[T]) -> Self {
        Self::from_tree(FenwickTree::from_slice(values))
    }

    /// Builds a tree adopting `values` as backing storage. O(n).
    pub fn from_vec(values: Vec<T>) -> Self {
        Self::from_tree(FenwickTree::from_vec(values))
    }

    /// Brands an existing tree.
    pub fn from_tree(tree: FenwickTree<T>) -> Self {
        Self {
            inner: GhostCell::new(tree),
        }
    }

    /// Unwraps the tree, dropping the brand.
    pub fn into_inner(self) -> FenwickTree<T> {
        self.inner.into_inner()
    }

    /// Shared access to the underlying tree.
    #[inline]
    pub fn borrow<'a>(&'a self, token: &'a GhostToken<'brand>) -> &'a FenwickTree<T> {
        self.inner.borrow(token)
    }

    /// Exclusive access to the underlying tree.
    #[inline]
    pub fn borrow_mut<'a>(&'a self, token: &'a mut GhostToken<'brand>) -> &'a mut FenwickTree<T> {
        self.inner.borrow_mut(token)
    }

    /// Exclusive access through ownership; no token needed.
    #[inline]
    pub fn get_mut(&mut self) -> &mut FenwickTree<T> {
        self.inner.get_mut()
    }

    /// Returns the number of values.
    pub fn len(&self, token: &GhostToken<'brand>) -> usize {
        self.borrow(token).len()
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self, token: &GhostToken<'brand>) -> bool {
        self.borrow(token).is_empty()
    }

    /// Sum of the values in `[0, index]` (clamped).
    pub fn prefix_sum(&self, token: &GhostToken<'brand>, index: usize) -> T {
        self.borrow(token).prefix_sum(index)
    }

    /// Sum of the values in `[start, end)` (clamped).
    pub fn range_sum(&self, token: &GhostToken<'brand>, start: usize, end: usize) -> T {
        self.borrow(token).range_sum(start, end)
    }

    /// Sum of every value.
    pub fn total(&self, token: &GhostToken<'brand>) -> T {
        self.borrow(token).total()
    }

    /// The value at `index`, zero when out of bounds.
    pub fn value(&self, token: &GhostToken<'brand>, index: usize) -> T {
        self.borrow(token).value(index)
    }

    /// Fills `buffer` with values from position 0. Returns the count written.
    pub fn bulk_values(&self, token: &GhostToken<'brand>, buffer: &mut [T]) -> usize {
        self.borrow(token).bulk_values(buffer)
    }

    /// Fills `buffer` with values from `start`. Returns the count written.
    pub fn range_values(&self, token: &GhostToken<'brand>, start: usize, buffer: &mut [T]) -> usize {
        self.borrow(token).range_values(start, buffer)
    }

    /// Largest index whose prefix sum is `<= target`, with that prefix sum.
    pub fn search_sum(&self, token: &GhostToken<'brand>, target: T) -> (Option<usize>, T) {
        self.borrow(token).search_sum(target)
    }

    /// Adds `delta` to the value at `index`.
    pub fn add_value(&self, token: &mut GhostToken<'brand>, index: usize, delta: T) {
        self.borrow_mut(token).add_value(index, delta);
    }

    /// Sets the value at `index`.
    pub fn set_value(&self, token: &mut GhostToken<'brand>, index: usize, value: T) {
        self.borrow_mut(token).set_value(index, value);
    }

    /// Multiplies the value at `index`, returning the new value.
    pub fn multiply_value(&self, token: &mut GhostToken<'brand>, index: usize, factor: T) -> T {
        self.borrow_mut(token).multiply_value(index, factor)
    }

    /// Adds `deltas[k]` to the value at `start + k`.
    pub fn range_add(&self, token: &mut GhostToken<'brand>, start: usize, deltas: &[T]) {
        self.borrow_mut(token).range_add(start, deltas);
    }

    /// Multiplies the value at `start + k` by `factors[k]`.
    pub fn range_multiply(&self, token: &mut GhostToken<'brand>, start: usize, factors: &[T]) {
        self.borrow_mut(token).range_multiply(start, factors);
    }

    /// Sets the value at `start + k` to `values[k]`.
    pub fn range_set(&self, token: &mut GhostToken<'brand>, start: usize, values: &[T]) {
        self.borrow_mut(token).range_set(start, values);
    }

    /// Adds `delta` to every value in `[start, end)`.
    pub fn range_shift(&self, token: &mut GhostToken<'brand>, start: usize, end: usize, delta: T) {
        self.borrow_mut(token).range_shift(start, end, delta);
    }

    /// Multiplies every value in `[start, end)` by `factor`.
    pub fn range_scale(&self, token: &mut GhostToken<'brand>, start: usize, end: usize, factor: T) {
        self.borrow_mut(token).range_scale(start, end, factor);
    }

    /// Adds `delta` to every value.
    pub fn shift_all(&self, token: &mut GhostToken<'brand>, delta: T) {
        self.borrow_mut(token).shift_all(delta);
    }

    /// Multiplies every value by `factor`.
    pub fn scale_all(&self, token: &mut GhostToken<'brand>, factor: T) {
        self.borrow_mut(token).scale_all(factor);
    }

    /// Appends one value.
    pub fn push(&self, token: &mut GhostToken<'brand>, value: T) {
        self.borrow_mut(token).push(value);
    }

    /// Appends several values.
    pub fn extend_from_slice(&self, token: &mut GhostToken<'brand>, values: &[T]) {
        self.borrow_mut(token).extend_from_slice(values);
    }

    /// Truncates to zero length, keeping the allocation.
    pub fn reset(&self, token: &mut GhostToken<'brand>) {
        self.borrow_mut(token).reset();
    }

    /// Copies `source` into this tree, keeping this tree's length.
    pub fn copy_from(&self, token: &mut GhostToken<'brand>, source: &FenwickTree<T>) -> usize {
        self.borrow_mut(token).copy_from(source)
    }
}

impl<'brand, T: Element> Default for BrandedFenwickTree<'brand, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'brand, T: Element> From<FenwickTree<T>> for BrandedFenwickTree<'brand, T> {
    fn from(tree: FenwickTree<T>) -> Self {
        Self::from_tree(tree)
    }
}

impl<'brand, T: Element> FromIterator<T> for BrandedFenwickTree<'brand, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_tree(iter.into_iter().collect())
    }
}
