//! # Bloom Filter
//!
//! Fixed-capacity probabilistic set membership.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): pure data structure logic, no I/O
//!   - `BitStore`: fixed-length bit array, bits only ever go 0 -> 1
//!   - `IndexStrategy`: maps a value to k bit positions
//!     - `DigestDoubleHash`: SHA-256 / SHA-224 double hashing, any k
//!     - `BitSlice`: parity bit slicing of non-negative integers, k = 2
//!   - `BloomFilter`: composes the two behind `add` / `query`
//!   - `BloomConfig` / `BloomConfigBuilder`: validated construction parameters
//!   - `parameters`: FPR estimate and optimal sizing
//!
//! - **Metrics** (`metrics`): `FilterStats` size and saturation report
//!
//! ## Invariants
//!
//! - FPR estimate = (1 - e^(-kn/m))^k, a function of (k, m, n) only
//! - No false negatives: if added, `query()` MUST return true
//!
//! ## Concurrency
//!
//! A filter is single-threaded plain data. Hosts that share one across
//! threads protect the whole filter with one lock (bits and insertion count
//! together); `add` and `query` touch several non-contiguous bits and there
//! is no per-bit locking.
//!
//! ## Usage Example
//!
//! ```
//! use bloom_filter::{BloomFilter, StrategyKind};
//!
//! let mut filter = BloomFilter::new(512, 13, StrategyKind::DigestDoubleHash)?;
//! filter.add("Alabama")?;
//!
//! assert!(filter.query("Alabama")?);
//! assert!(!filter.query("Ruritania")?);
//! # Ok::<(), bloom_filter::FilterError>(())
//! ```

pub mod domain;
pub mod error;
pub mod metrics;

// Re-exports for convenience
pub use domain::{
    BitSlice, BitStore, BloomConfig, BloomConfigBuilder, BloomFilter, DigestDoubleHash,
    Element, IndexStrategy, Strategy, StrategyKind,
};
pub use error::{FilterError, Result};
pub use metrics::FilterStats;
