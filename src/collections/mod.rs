//! Collections optimized for Ghost-style usage.
//!
//! - `fenwick`: the Fenwick tree of running sums, plain and token-gated.

pub mod fenwick;

pub use fenwick::{
    ActivateFenwickTree, ActiveFenwickTree, BrandedFenwickTree, Element, FenwickTree,
};
