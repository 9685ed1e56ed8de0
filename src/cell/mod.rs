//! Token-gated interior mutability.
//!
//! [`GhostCell`] pairs a value with a brand; access goes through the
//! matching [`GhostToken`](crate::GhostToken).

pub mod ghost_cell;

pub use ghost_cell::GhostCell;
