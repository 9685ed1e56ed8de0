//! `GhostToken` — the permission controller for token-gated trees.
//!
//! A token is a zero-sized capability branded with an invariant lifetime.
//! Cells and trees created under that brand can only be read with
//! `&GhostToken<'brand>` and only be written with `&mut GhostToken<'brand>`,
//! so the borrow checker enforces the single-writer / many-reader discipline
//! at compile time, with no lock and no runtime flag.
//!
//! ## Core invariant (linearity)
//!
//! `GhostToken<'brand>` is **not** `Copy`/`Clone`. Any safe API that hands out
//! `&mut T` requires `&mut GhostToken<'brand>`, and Rust guarantees there is at
//! most one live mutable borrow of a token.

use core::marker::PhantomData;

/// Brand marker, invariant in `'id` so two scopes can never be unified by
/// subtyping one brand into another.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct InvariantLifetime<'id>(PhantomData<fn(&'id ()) -> &'id ()>);

impl<'id> InvariantLifetime<'id> {
    /// Creates a new marker.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

/// A zero-sized token that controls access to branded data.
#[derive(Debug)]
pub struct GhostToken<'brand>(InvariantLifetime<'brand>);

impl<'brand> GhostToken<'brand> {
    /// Creates a fresh brand and runs `f` with its token.
    ///
    /// The closure must accept a token of *any* brand, so the brand cannot
    /// escape or unify with another scope.
    ///
    /// # Example
    ///
    /// ```rust
    /// use partial_sums::{BrandedFenwickTree, GhostToken};
    ///
    /// let total = GhostToken::new(|mut token| {
    ///     let tree = BrandedFenwickTree::from_slice(&[1i64, 2, 3]);
    ///     tree.add_value(&mut token, 0, 10);
    ///     tree.prefix_sum(&token, 2)
    /// });
    /// assert_eq!(total, 16);
    /// ```
    pub fn new<F, R>(f: F) -> R
    where
        F: for<'new_brand> FnOnce(GhostToken<'new_brand>) -> R,
    {
        f(GhostToken(InvariantLifetime::new()))
    }

    /// Opens a nested brand, independent of this one.
    ///
    /// Equivalent to [`GhostToken::new`]; reads better when a temporary tree
    /// should not share the outer brand.
    #[inline(always)]
    pub fn with_scoped<F, R>(&self, f: F) -> R
    where
        F: for<'sub> FnOnce(GhostToken<'sub>) -> R,
    {
        Self::new(f)
    }
}

// SAFETY: the token carries no data. Sharing `&GhostToken` across threads only
// unlocks token-gated reads, which are themselves bounded by `T: Sync` on the
// cells; exclusive access still requires `&mut GhostToken`.
unsafe impl<'brand> Sync for GhostToken<'brand> {}
