//! Strict variants of the point and range accessors.
//!
//! These mirror the lenient operations but surface out-of-bounds positions
//! and malformed ranges as [`FenwickError`] instead of clamping.

use super::{Element, FenwickTree};
use crate::error::{FenwickError, Result};

impl<T: Element> FenwickTree<T> {
    /// The value at `index`.
    ///
    /// # Errors
    /// Returns [`FenwickError::IndexOutOfBounds`] if `index >= len`.
    pub fn try_value(&self, index: usize) -> Result<T> {
        self.get(index).ok_or_else(|| self.out_of_bounds(index))
    }

    /// Sets the value at `index`, returning the previous value.
    ///
    /// # Errors
    /// Returns [`FenwickError::IndexOutOfBounds`] if `index >= len`.
    pub fn try_set_value(&mut self, index: usize, value: T) -> Result<T> {
        let previous = self.try_value(index)?;
        self.add_value(index, value - previous);
        Ok(previous)
    }

    /// Adds `delta` to the value at `index`.
    ///
    /// # Errors
    /// Returns [`FenwickError::IndexOutOfBounds`] if `index >= len`.
    pub fn try_add_value(&mut self, index: usize, delta: T) -> Result<()> {
        if index >= self.len() {
            return Err(self.out_of_bounds(index));
        }
        self.add_value(index, delta);
        Ok(())
    }

    /// Multiplies the value at `index` by `factor`, returning the new value.
    ///
    /// # Errors
    /// Returns [`FenwickError::IndexOutOfBounds`] if `index >= len`.
    pub fn try_multiply_value(&mut self, index: usize, factor: T) -> Result<T> {
        if index >= self.len() {
            return Err(self.out_of_bounds(index));
        }
        Ok(self.multiply_value(index, factor))
    }

    /// Sum of the values in `[start, end)`.
    ///
    /// # Errors
    /// Returns [`FenwickError::InvalidRange`] if `start > end` or `end > len`.
    pub fn try_range_sum(&self, start: usize, end: usize) -> Result<T> {
        let len = self.len();
        if start > end || end > len {
            return Err(FenwickError::InvalidRange { start, end, len });
        }
        Ok(self.range_sum(start, end))
    }

    fn out_of_bounds(&self, index: usize) -> FenwickError {
        FenwickError::IndexOutOfBounds {
            index,
            len: self.len(),
        }
    }
}
