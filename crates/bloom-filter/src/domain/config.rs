//! Filter configuration and validation
//!
//! # Example
//!
//! ```
//! use bloom_filter::{BloomConfigBuilder, StrategyKind};
//!
//! let config = BloomConfigBuilder::new()
//!     .capacity(512)
//!     .hash_count(13)
//!     .strategy(StrategyKind::DigestDoubleHash)
//!     .build()
//!     .expect("valid config");
//! assert_eq!(config.capacity, 512);
//! ```

use serde::{Deserialize, Serialize};

use super::index_strategy::{BitSlice, StrategyKind};
use super::parameters::calculate_optimal_parameters;
use crate::error::{FilterError, Result};

/// Default size of a digest double hash filter, in bits
pub const DEFAULT_DIGEST_CAPACITY: usize = 48;
/// Default hash count of a digest double hash filter
pub const DEFAULT_DIGEST_HASH_COUNT: usize = 9;
/// Default size of a bit-slice filter, in bits
pub const DEFAULT_BIT_SLICE_CAPACITY: usize = 256;

/// Everything needed to construct a filter
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloomConfig {
    /// Number of bits (m)
    pub capacity: usize,
    /// Number of positions per element (k)
    pub hash_count: usize,
    /// Index derivation scheme
    #[serde(default)]
    pub strategy: StrategyKind,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self::defaults_for(StrategyKind::default())
    }
}

impl BloomConfig {
    /// Create a new configuration with validation
    pub fn new(capacity: usize, hash_count: usize, strategy: StrategyKind) -> Result<Self> {
        let config = Self {
            capacity,
            hash_count,
            strategy,
        };
        config.validate()?;
        Ok(config)
    }

    /// Default sizing for a given strategy
    pub fn defaults_for(strategy: StrategyKind) -> Self {
        match strategy {
            StrategyKind::DigestDoubleHash => Self {
                capacity: DEFAULT_DIGEST_CAPACITY,
                hash_count: DEFAULT_DIGEST_HASH_COUNT,
                strategy,
            },
            StrategyKind::BitSlice => Self {
                capacity: DEFAULT_BIT_SLICE_CAPACITY,
                hash_count: BitSlice::HASH_COUNT,
                strategy,
            },
        }
    }

    /// Check sizing against the chosen strategy
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(FilterError::InvalidCapacity {
                capacity: self.capacity,
            });
        }

        if self.hash_count == 0 {
            return Err(FilterError::InvalidHashCount {
                hash_count: self.hash_count,
                reason: "at least one hash function is required",
            });
        }

        if self.strategy == StrategyKind::BitSlice && self.hash_count != BitSlice::HASH_COUNT {
            return Err(FilterError::InvalidHashCount {
                hash_count: self.hash_count,
                reason: "the bit-slice strategy always uses exactly 2 positions",
            });
        }

        Ok(())
    }
}

/// Fluent builder for `BloomConfig`
///
/// Unset fields fall back to the defaults of the selected strategy.
#[derive(Default)]
pub struct BloomConfigBuilder {
    capacity: Option<usize>,
    hash_count: Option<usize>,
    strategy: Option<StrategyKind>,
}

impl BloomConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Size a digest filter for `expected_elements` at `target_fpr`
    ///
    /// Capacity and hash count come from the optimal-parameter formulas.
    pub fn for_expected_elements(expected_elements: usize, target_fpr: f64) -> Result<Self> {
        let params = calculate_optimal_parameters(expected_elements, target_fpr)?;
        Ok(Self::new()
            .strategy(StrategyKind::DigestDoubleHash)
            .capacity(params.size_bits)
            .hash_count(params.hash_count))
    }

    /// Set the size in bits
    pub fn capacity(mut self, bits: usize) -> Self {
        self.capacity = Some(bits);
        self
    }

    /// Set the number of positions per element
    pub fn hash_count(mut self, k: usize) -> Self {
        self.hash_count = Some(k);
        self
    }

    /// Set the index strategy
    pub fn strategy(mut self, kind: StrategyKind) -> Self {
        self.strategy = Some(kind);
        self
    }

    /// Build the config, validating all parameters
    pub fn build(self) -> Result<BloomConfig> {
        let defaults = BloomConfig::defaults_for(self.strategy.unwrap_or_default());

        let config = BloomConfig {
            capacity: self.capacity.unwrap_or(defaults.capacity),
            hash_count: self.hash_count.unwrap_or(defaults.hash_count),
            strategy: defaults.strategy,
        };

        config.validate()?;
        Ok(config)
    }
}
