//! Active handle for `BrandedFenwickTree`.
//!
//! Bundles the tree with a mutable token borrow so call sites read like the
//! plain tree API.

use super::{BrandedFenwickTree, Element, FenwickTree};
use crate::GhostToken;

/// A wrapper around a reference to a `BrandedFenwickTree` and a mutable reference to a `GhostToken`.
pub struct ActiveFenwickTree<'a, 'brand, T> {
    tree: &'a BrandedFenwickTree<'brand, T>,
    token: &'a mut GhostToken<'brand>,
}

impl<'a, 'brand, T: Element> ActiveFenwickTree<'a, 'brand, T> {
    /// Creates a new active tree handle.
    pub fn new(tree: &'a BrandedFenwickTree<'brand, T>, token: &'a mut GhostToken<'brand>) -> Self {
        Self { tree, token }
    }

    /// Returns the number of values.
    pub fn len(&self) -> usize {
        self.tree.len(self.token)
    }

    /// Returns `true` if empty.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty(self.token)
    }

    /// Shared view of the underlying tree.
    pub fn tree(&self) -> &FenwickTree<T> {
        self.tree.borrow(self.token)
    }

    /// Exclusive view of the underlying tree.
    pub fn tree_mut(&mut self) -> &mut FenwickTree<T> {
        self.tree.borrow_mut(self.token)
    }

    /// Sum of the values in `[0, index]`.
    pub fn prefix_sum(&self, index: usize) -> T {
        self.tree.prefix_sum(self.token, index)
    }

    /// Sum of the values in `[start, end)`.
    pub fn range_sum(&self, start: usize, end: usize) -> T {
        self.tree.range_sum(self.token, start, end)
    }

    /// The value at `index`.
    pub fn value(&self, index: usize) -> T {
        self.tree.value(self.token, index)
    }

    /// Largest index whose prefix sum is `<= target`, with that prefix sum.
    pub fn search_sum(&self, target: T) -> (Option<usize>, T) {
        self.tree.search_sum(self.token, target)
    }

    /// Adds `delta` to the value at `index`.
    pub fn add_value(&mut self, index: usize, delta: T) {
        self.tree.add_value(self.token, index, delta);
    }

    /// Sets the value at `index`.
    pub fn set_value(&mut self, index: usize, value: T) {
        self.tree.set_value(self.token, index, value);
    }

    /// Multiplies the value at `index`, returning the new value.
    pub fn multiply_value(&mut self, index: usize, factor: T) -> T {
        self.tree.multiply_value(self.token, index, factor)
    }

    /// Adds `delta` to every value in `[start, end)`.
    pub fn range_shift(&mut self, start: usize, end: usize, delta: T) {
        self.tree.range_shift(self.token, start, end, delta);
    }

    /// Appends one value.
    pub fn push(&mut self, value: T) {
        self.tree.push(self.token, value);
    }

    /// Truncates to zero length, keeping the allocation.
    pub fn reset(&mut self) {
        self.tree.reset(self.token);
    }
}

/// Extension trait to easily create an `ActiveFenwickTree` from a `BrandedFenwickTree`.
pub trait ActivateFenwickTree<'brand, T> {
    /// Bundles the tree with `token`.
    fn activate<'a>(&'a self, token: &'a mut GhostToken<'brand>) -> ActiveFenwickTree<'a, 'brand, T>;
}

impl<'brand, T: Element> ActivateFenwickTree<'brand, T> for BrandedFenwickTree<'brand, T> {
    fn activate<'a>(&'a self, token: &'a mut GhostToken<'brand>) -> ActiveFenwickTree<'a, 'brand, T> {
        ActiveFenwickTree::new(self, token)
    }
}
