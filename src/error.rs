//! Error type for the checked tree accessors.
//!
//! The primary API never fails: reads outside the tree yield zero and writes
//! outside it are ignored. The `try_*` methods report those cases instead.

use core::fmt;

/// The error type for checked tree operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenwickError {
    /// A position at or past the end of the tree.
    IndexOutOfBounds {
        /// The offending position.
        index: usize,
        /// The tree length at the time of the call.
        len: usize,
    },
    /// A half-open range that is inverted or extends past the tree.
    InvalidRange {
        /// Inclusive start.
        start: usize,
        /// Exclusive end.
        end: usize,
        /// The tree length at the time of the call.
        len: usize,
    },
}

impl fmt::Display for FenwickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for tree of length {len}")
            }
            Self::InvalidRange { start, end, len } => {
                write!(f, "invalid range {start}..{end} for tree of length {len}")
            }
        }
    }
}

impl std::error::Error for FenwickError {}

/// Result alias for checked tree operations.
pub type Result<T, E = FenwickError> = core::result::Result<T, E>;
