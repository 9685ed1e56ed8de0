//! `FenwickTree` — a Binary Indexed Tree over fixed-width signed integers.
//!
//! The tree stores one partial sum per position in a flat, 0-indexed `Vec`.
//! Partial `i` aggregates the logical values in the inclusive range
//! `[i & (i + 1), i]` (its *responsibility range*). Logical values are never
//! stored; they are reconstructed on demand.
//!
//! Two index transitions drive every traversal:
//! - **ascend** `i -> i | (i + 1)`: the next partial that also covers `i`.
//! - **descend** `i -> (i & (i + 1)) - 1`: the next partial needed to
//!   decompose a prefix sum.
//!
//! Most walks below run on "one past" counts (`k = i + 1`) so that the
//! descend step becomes `k -> (k - 1) & k` and never underflows a `usize`.
//!
//! Time Complexity:
//! - Point update / point value / prefix sum / range sum / search: O(log n)
//! - Build, bulk extraction, shift-all, scale-all: O(n)
//! - Range shift: O((hi - lo) + log n)
//!
//! Operations are split by concern into sibling modules:
//! [`build`] (construction and resizing), [`query`], [`update`], [`search`]
//! and [`checked`]. Token-gated access lives in [`branded`] and [`active`].

pub mod active;
pub mod branded;
pub mod build;
pub mod checked;
pub mod query;
pub mod search;
pub mod update;

pub use active::{ActivateFenwickTree, ActiveFenwickTree};
pub use branded::BrandedFenwickTree;

use core::fmt::Debug;
use core::ops::{AddAssign, MulAssign, SubAssign};
use num_traits::{PrimInt, Signed};

/// Element types a [`FenwickTree`] can aggregate: fixed-width signed integers.
///
/// Blanket-implemented for every type satisfying the bounds
/// (`i8`, `i16`, `i32`, `i64`, `i128`, `isize`).
pub trait Element: PrimInt + Signed + AddAssign + SubAssign + MulAssign + Debug {}

impl<T> Element for T where T: PrimInt + Signed + AddAssign + SubAssign + MulAssign + Debug {}

/// A Fenwick tree of running sums.
///
/// Out-of-bounds reads yield zero and out-of-bounds writes are ignored, so
/// range operations may freely straddle the tree boundaries. See
/// [`checked`] for the strict variants.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FenwickTree<T = i64> {
    /// `partials[i]` is the sum over `[i & (i + 1), i]`.
    partials: Vec<T>,
}

impl<T: Element> FenwickTree<T> {
    /// Returns the number of logical values in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.partials.len()
    }

    /// Returns `true` if the tree holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.partials.is_empty()
    }

    /// Returns the capacity of the backing storage.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.partials.capacity()
    }

    /// Reserves room for at least `additional` more values.
    pub fn reserve(&mut self, additional: usize) {
        self.partials.reserve(additional);
    }

    /// The raw partial sums, in storage order.
    #[inline]
    pub fn as_partials(&self) -> &[T] {
        &self.partials
    }
}

impl<T: Element> Default for FenwickTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> Debug for FenwickTree<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FenwickTree")
            .field("values", &self.values())
            .finish()
    }
}

/// The ascend step: next partial whose range also covers `i`.
#[inline(always)]
pub(crate) const fn ascend(i: usize) -> usize {
    i | (i + 1)
}

/// First position of the responsibility range of partial `i`.
#[inline(always)]
pub(crate) const fn range_start(i: usize) -> usize {
    i & (i + 1)
}

/// The descend step on one-past counts: `k = i + 1` maps to `(i & (i + 1))`,
/// the one-past count of the next partial in a prefix decomposition.
#[inline(always)]
pub(crate) const fn descend_count(k: usize) -> usize {
    (k - 1) & k
}

/// Number of logical positions covered by partial `i`.
#[inline(always)]
pub(crate) const fn width(i: usize) -> usize {
    1 << (i + 1).trailing_zeros()
}

/// Largest power of two that is `<= n`, or 0 for `n == 0`.
#[inline]
pub(crate) const fn highest_power_of_two_leq(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        1 << (usize::BITS - 1 - n.leading_zeros())
    }
}
