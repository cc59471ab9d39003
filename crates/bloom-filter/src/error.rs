//! Error types for the Bloom filter

use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, FilterError>;

/// Errors that can occur while building or using a filter
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// Construction-time: the bit array must hold at least one bit
    #[error("Invalid capacity: {capacity} (must be at least 1 bit)")]
    InvalidCapacity { capacity: usize },

    /// Construction-time: zero hashes, or a count the strategy cannot produce
    #[error("Invalid hash count: {hash_count} ({reason})")]
    InvalidHashCount {
        hash_count: usize,
        reason: &'static str,
    },

    /// A bit position outside the store. Raised after construction this
    /// means the index strategy and bit store disagree on the modulus.
    #[error("Bit index out of range: {index} >= {capacity}")]
    IndexOutOfRange { index: usize, capacity: usize },

    /// The strategy cannot interpret the value it was given
    #[error("Unsupported input for {strategy} strategy: {reason}")]
    UnsupportedInputType {
        strategy: &'static str,
        reason: &'static str,
    },

    #[error("Invalid false positive rate: {fpr} (must be between 0 and 1, exclusive)")]
    InvalidFpr { fpr: f64 },

    #[error("Invalid filter parameters: {0}")]
    InvalidParameters(String),
}
