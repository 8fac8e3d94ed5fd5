//! Error types.
//!
//! Only configuration problems surface as errors. Degenerate numerical
//! states reached during a run (zero selection weight, unreachable edges,
//! zero-length tours) are absorbed by the engine and never reported here.

use thiserror::Error;

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, AcoError>;

/// Configuration error raised before any optimization work starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcoError {
    /// The distance matrix has no rows.
    #[error("distance matrix must not be empty")]
    EmptyMatrix,

    /// A row length differs from the number of rows.
    #[error("distance matrix must be square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Number of rows (the required row length).
        expected: usize,
    },

    /// A flat buffer does not hold `size * size` entries.
    #[error("distance buffer has {len} entries, expected {expected}")]
    BufferLength {
        /// Actual buffer length.
        len: usize,
        /// Required length (`size * size`).
        expected: usize,
    },

    /// A distance entry is NaN or negative.
    #[error("invalid distance {value} at ({from}, {to}): must be >= 0 or +inf")]
    InvalidDistance {
        /// Row index.
        from: usize,
        /// Column index.
        to: usize,
        /// The rejected value.
        value: f64,
    },

    /// A run parameter is out of range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name as it appears in [`AcoConfig`](crate::aco::AcoConfig).
        name: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// No coordinates were supplied to the distance supplier.
    #[error("coordinate list must not be empty")]
    EmptyCoordinates,
}

impl AcoError {
    pub(crate) fn parameter(name: &'static str, reason: impl Into<String>) -> Self {
        AcoError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
