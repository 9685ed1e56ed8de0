//! `GhostCell` — safe interior mutability via branded tokens.
//!
//! The cell is a thin wrapper over `UnsafeCell`; the token arguments carry
//! no data and optimize away.

use core::cell::UnsafeCell;
use core::mem;

use crate::token::InvariantLifetime;
use crate::GhostToken;

/// A branded cell that can only be accessed using a token of the same brand.
#[repr(transparent)]
pub struct GhostCell<'brand, T: ?Sized> {
    _brand: InvariantLifetime<'brand>,
    value: UnsafeCell<T>,
}

impl<'brand, T> GhostCell<'brand, T> {
    /// Creates a new `GhostCell`.
    pub const fn new(value: T) -> Self {
        Self {
            _brand: InvariantLifetime::new(),
            value: UnsafeCell::new(value),
        }
    }

    /// Consumes the cell, returning the value.
    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }

    /// Replaces the contained value, returning the old one.
    pub fn replace(&self, token: &mut GhostToken<'brand>, value: T) -> T {
        mem::replace(self.borrow_mut(token), value)
    }
}

impl<'brand, T: ?Sized> GhostCell<'brand, T> {
    /// Borrows the cell immutably.
    #[inline(always)]
    pub fn borrow<'a>(&'a self, _token: &'a GhostToken<'brand>) -> &'a T {
        // SAFETY: a shared token borrow rules out any live `&mut T` obtained
        // through `borrow_mut`, which needs the token mutably.
        unsafe { &*self.value.get() }
    }

    /// Borrows the cell mutably.
    #[inline(always)]
    #[allow(clippy::mut_from_ref)]
    pub fn borrow_mut<'a>(&'a self, _token: &'a mut GhostToken<'brand>) -> &'a mut T {
        // SAFETY: the token is linear and mutably borrowed for `'a`, so no
        // other borrow of any cell of this brand can coexist.
        unsafe { &mut *self.value.get() }
    }

    /// Mutable access through exclusive ownership; no token needed.
    #[inline(always)]
    pub fn get_mut(&mut self) -> &mut T {
        self.value.get_mut()
    }
}

impl<'brand, T: Default> Default for GhostCell<'brand, T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<'brand, T> From<T> for GhostCell<'brand, T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

// SAFETY: all access is token-gated; sending the cell sends the value.
unsafe impl<'brand, T: ?Sized + Send> Send for GhostCell<'brand, T> {}
// SAFETY: shared access across threads yields `&T` (needs `T: Sync`) or, with
// the unique `&mut GhostToken`, `&mut T` on one thread at a time (needs `T: Send`).
unsafe impl<'brand, T: ?Sized + Send + Sync> Sync for GhostCell<'brand, T> {}
