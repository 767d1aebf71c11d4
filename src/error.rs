//! Error type for array operations

use thiserror::Error;

use crate::value::ValueType;

/// Error type for jsarray
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// An index, after normalization, does not address the backing storage.
    /// Removing from an empty array reports the index it tried to remove.
    #[error("index {index} out of bounds for array of length {len}")]
    OutOfBounds {
        /// The offending index, after negative offsets were resolved
        index: i64,
        /// Length of the array at the time of the access
        len: usize,
    },
    /// A value was read as a type it does not hold
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        /// The type the caller asked for
        expected: ValueType,
        /// The type actually stored
        found: ValueType,
    },
}
