//! Size and saturation reporting for a filter
//!
//! ## Usage
//!
//! ```
//! use bloom_filter::{BloomFilter, StrategyKind};
//!
//! let mut filter = BloomFilter::new(512, 13, StrategyKind::DigestDoubleHash)?;
//! filter.add("Alabama")?;
//!
//! let stats = filter.stats();
//! assert_eq!(stats.size_bytes, 64);
//! assert_eq!(stats.insertion_count, 1);
//! # Ok::<(), bloom_filter::FilterError>(())
//! ```

use serde::Serialize;

use crate::domain::{BloomFilter, StrategyKind};

/// Point-in-time report on a single filter
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FilterStats {
    /// Filter size in bits (m)
    pub size_bits: usize,
    /// Bytes of bit storage
    pub size_bytes: usize,
    /// Positions per element (k)
    pub hash_count: usize,
    pub strategy: StrategyKind,
    /// Successful adds (n)
    pub insertion_count: usize,
    /// Bits currently set
    pub bits_set: usize,
    /// bits_set / size_bits
    pub fill_ratio: f64,
    /// (1 - e^(-kn/m))^k
    pub estimated_fpr: f64,
}

impl FilterStats {
    pub fn from_filter(filter: &BloomFilter) -> Self {
        let size_bits = filter.size_in_bits();
        let bits_set = filter.bits_set();

        Self {
            size_bits,
            size_bytes: filter.size_in_bytes(),
            hash_count: filter.hash_count(),
            strategy: filter.strategy_kind(),
            insertion_count: filter.insertion_count(),
            bits_set,
            fill_ratio: bits_set as f64 / size_bits as f64,
            estimated_fpr: filter.estimate_false_positive_probability(),
        }
    }

    /// Fraction of set bits raised to k
    ///
    /// The empirical counterpart to `estimated_fpr`: the chance that k
    /// uniformly random positions all land on set bits.
    pub fn observed_fpr(&self) -> f64 {
        self.fill_ratio.powf(self.hash_count as f64)
    }

    /// True once every bit is set and every query answers true
    pub fn is_saturated(&self) -> bool {
        self.bits_set == self.size_bits
    }
}
