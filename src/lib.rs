//! # `partial-sums` - Indexed aggregate trees
//!
//! A Fenwick (binary indexed) tree over fixed-width signed integers that keeps
//! running sums of a mutable sequence. Point and range reads and writes run in
//! logarithmic time without recomputing the aggregate.
//!
//! ## Operation groups
//!
//! - **Build & resize**: O(n) construction (optionally adopting the caller's
//!   `Vec`), amortized O(log n) append, bulk append that only revisits the
//!   changed suffix, and copying between trees of different lengths.
//! - **Queries**: prefix sums, range sums, point values, O(n) bulk extraction.
//! - **Updates**: point set/add/multiply, shift/scale of every value, ranged
//!   writes, and a range shift that touches each covered partial once.
//! - **Search**: binary lifting to the last index whose prefix sum does not
//!   exceed a target.
//!
//! Reads outside the tree return zero and writes outside it are ignored, so
//! ranges may straddle the tree bounds. The `try_*` accessors report those
//! cases as [`FenwickError`] instead.
//!
//! ## Token-gated access
//!
//! [`FenwickTree`] is a plain owned value with no internal synchronization.
//! [`BrandedFenwickTree`] puts it behind a [`GhostCell`] so a linear
//! [`GhostToken`] decides, at compile time, who may read (`&token`) and who may
//! write (`&mut token`), while the tree itself is shared by reference.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for structural operations.
//! - `parallel`: compute `bulk_prefix_sums` on the rayon pool.
//!
//! ## Example
//!
//! ```rust
//! use partial_sums::FenwickTree;
//!
//! let mut tree = FenwickTree::from_slice(&[1i64, 0, 2, 1, 1, 3, 0, 4]);
//! assert_eq!(tree.prefix_sum(3), 4);
//! assert_eq!(tree.range_sum(4, 8), 8);
//!
//! tree.add_value(1, 5);
//! assert_eq!(tree.value(1), 5);
//! assert_eq!(tree.search_sum(9), (Some(3), 9));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod trace;

pub mod cell;
pub mod collections;
pub mod error;
pub mod token;

pub use cell::GhostCell;
pub use collections::{
    ActivateFenwickTree, ActiveFenwickTree, BrandedFenwickTree, Element, FenwickTree,
};
pub use error::{FenwickError, Result};
pub use token::GhostToken;

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Tokens are ZSTs.
    assert!(mem::size_of::<GhostToken<'static>>() == 0);

    // A tree is exactly its backing vector; branding adds nothing.
    assert!(mem::size_of::<FenwickTree<i64>>() == mem::size_of::<Vec<i64>>());
    assert!(mem::size_of::<BrandedFenwickTree<'static, i64>>() == mem::size_of::<Vec<i64>>());
};
