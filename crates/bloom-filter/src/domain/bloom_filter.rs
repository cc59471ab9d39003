//! Core Bloom filter
//!
//! INVARIANTS:
//! - No false negatives: once `add(x)` succeeds, `query(x)` is true forever
//! - Bits are never cleared; there is no removal
//! - The estimated FPR depends only on (k, m, n)

use tracing::{debug, trace};

use super::bit_store::BitStore;
use super::config::BloomConfig;
use super::element::Element;
use super::index_strategy::{IndexStrategy, Strategy, StrategyKind};
use super::parameters::calculate_fpr;
use crate::error::Result;
use crate::metrics::FilterStats;

/// Bloom filter for probabilistic membership testing
///
/// `query` answering `false` is certain; `true` may be a false positive.
///
/// The filter is a plain owned value with no interior locking. `add` takes
/// `&mut self`, so sharing one filter across threads means wrapping the whole
/// thing in a single lock (`Mutex<BloomFilter>` or `RwLock<BloomFilter>`).
#[derive(Clone, Debug)]
pub struct BloomFilter {
    bits: BitStore,
    strategy: Strategy,
    /// Number of successful adds (n)
    inserted: usize,
}

impl BloomFilter {
    /// Create a filter of `capacity` bits using `hash_count` positions per
    /// element, derived by the `kind` strategy
    ///
    /// Fails with `InvalidCapacity` / `InvalidHashCount` on zero sizes, and
    /// `InvalidHashCount` for a bit-slice filter with k != 2.
    pub fn new(capacity: usize, hash_count: usize, kind: StrategyKind) -> Result<Self> {
        let bits = BitStore::new(capacity)?;
        let strategy = Strategy::new(kind, hash_count, bits.size_in_bits())?;

        debug!(
            capacity = capacity,
            hash_count = hash_count,
            strategy = %kind,
            "Bloom filter created"
        );

        Ok(Self {
            bits,
            strategy,
            inserted: 0,
        })
    }

    /// Create a filter from a validated configuration
    pub fn from_config(config: &BloomConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.capacity, config.hash_count, config.strategy)
    }

    /// Add an element
    ///
    /// Every position is bounds-checked before any bit is set, so a failure
    /// leaves the filter untouched. `UnsupportedInputType` comes from the
    /// bit-slice strategy; `IndexOutOfRange` would mean the strategy and
    /// store disagree on the modulus and is never expected.
    pub fn add<E: Element + ?Sized>(&mut self, value: &E) -> Result<()> {
        let positions = self.strategy.indices_for(value)?;
        for &pos in &positions {
            self.bits.check_bounds(pos)?;
        }
        for &pos in &positions {
            self.bits.set(pos)?;
        }
        self.inserted += 1;

        trace!(positions = ?positions, inserted = self.inserted, "Element added");
        Ok(())
    }

    /// Test whether an element might have been added
    ///
    /// Stops at the first unset bit.
    pub fn query<E: Element + ?Sized>(&self, value: &E) -> Result<bool> {
        let positions = self.strategy.indices_for(value)?;
        for &pos in &positions {
            if !self.bits.get(pos)? {
                trace!(position = pos, "Query miss");
                return Ok(false);
            }
        }
        trace!(positions = ?positions, "Query hit");
        Ok(true)
    }

    /// Estimated false positive probability: (1 - e^(-kn/m))^k
    ///
    /// Assumes ideal uniform hashing; advisory only.
    pub fn estimate_false_positive_probability(&self) -> f64 {
        calculate_fpr(self.size_in_bits(), self.inserted, self.hash_count())
    }

    /// Number of successful adds, duplicates included
    pub fn insertion_count(&self) -> usize {
        self.inserted
    }

    /// Filter size in bits (m)
    pub fn size_in_bits(&self) -> usize {
        self.bits.size_in_bits()
    }

    /// Bytes of bit storage
    pub fn size_in_bytes(&self) -> usize {
        self.bits.size_in_bytes()
    }

    /// Number of hash positions per element (k)
    pub fn hash_count(&self) -> usize {
        self.strategy.hash_count()
    }

    pub fn strategy_kind(&self) -> StrategyKind {
        self.strategy.kind()
    }

    /// Number of bits currently set
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Read a single bit
    pub fn bit(&self, index: usize) -> Result<bool> {
        self.bits.get(index)
    }

    /// Point-in-time size and saturation report
    pub fn stats(&self) -> FilterStats {
        FilterStats::from_filter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilterError;

    #[test]
    fn test_new_creates_empty_filter() {
        let filter = BloomFilter::new(1000, 7, StrategyKind::DigestDoubleHash).unwrap();

        assert_eq!(filter.size_in_bits(), 1000);
        assert_eq!(filter.hash_count(), 7);
        assert_eq!(filter.insertion_count(), 0);
        assert_eq!(filter.bits_set(), 0);
        assert_eq!(filter.estimate_false_positive_probability(), 0.0);
    }

    #[test]
    fn test_new_rejects_zero_sizes() {
        assert!(matches!(
            BloomFilter::new(0, 7, StrategyKind::DigestDoubleHash),
            Err(FilterError::InvalidCapacity { capacity: 0 })
        ));
        assert!(matches!(
            BloomFilter::new(100, 0, StrategyKind::DigestDoubleHash),
            Err(FilterError::InvalidHashCount { hash_count: 0, .. })
        ));
        assert!(matches!(
            BloomFilter::new(0, 2, StrategyKind::BitSlice),
            Err(FilterError::InvalidCapacity { .. })
        ));
    }

    #[test]
    fn test_add_sets_at_most_k_bits() {
        let mut filter = BloomFilter::new(1000, 7, StrategyKind::DigestDoubleHash).unwrap();
        filter.add(b"test_element_0xABCD1234").unwrap();

        assert!(filter.bits_set() > 0);
        assert!(filter.bits_set() <= 7);
        assert_eq!(filter.insertion_count(), 1);
    }

    #[test]
    fn test_duplicate_add_counts_but_sets_nothing_new() {
        let mut filter = BloomFilter::new(1000, 7, StrategyKind::DigestDoubleHash).unwrap();
        filter.add("same").unwrap();
        let bits_before = filter.bits_set();
        filter.add("same").unwrap();

        assert_eq!(filter.bits_set(), bits_before);
        assert_eq!(filter.insertion_count(), 2);
    }

    #[test]
    fn test_query_after_add() {
        let mut filter = BloomFilter::new(1000, 7, StrategyKind::DigestDoubleHash).unwrap();
        filter.add("0xABCD1234567890ABCDEF").unwrap();

        assert!(filter.query("0xABCD1234567890ABCDEF").unwrap());
    }

    #[test]
    fn test_query_empty_filter_is_false() {
        let filter = BloomFilter::new(64, 3, StrategyKind::DigestDoubleHash).unwrap();
        assert!(!filter.query("anything").unwrap());
    }

    #[test]
    fn test_no_false_negatives_bulk() {
        let mut filter = BloomFilter::new(10_000, 7, StrategyKind::DigestDoubleHash).unwrap();
        let elements: Vec<String> = (0..1000).map(|i| format!("address_{:04x}", i)).collect();

        for elem in &elements {
            filter.add(elem).unwrap();
        }
        for elem in &elements {
            assert!(filter.query(elem).unwrap(), "False negative for {}", elem);
        }
    }

    #[test]
    fn test_bit_slice_rejects_strings_without_mutation() {
        let mut filter = BloomFilter::new(256, 2, StrategyKind::BitSlice).unwrap();

        let err = filter.add("12000").unwrap_err();
        assert!(matches!(err, FilterError::UnsupportedInputType { .. }));
        assert_eq!(filter.insertion_count(), 0);
        assert_eq!(filter.bits_set(), 0);

        assert!(filter.query(&-3i64).is_err());
    }

    #[test]
    fn test_bit_slice_known_positions() {
        let mut filter = BloomFilter::new(256, 2, StrategyKind::BitSlice).unwrap();
        filter.add(&12000).unwrap();

        assert!(filter.bit(124).unwrap());
        assert!(filter.bit(40).unwrap());
        assert_eq!(filter.bits_set(), 2);
    }

    #[test]
    fn test_from_config() {
        let config = BloomConfig::defaults_for(StrategyKind::BitSlice);
        let filter = BloomFilter::from_config(&config).unwrap();

        assert_eq!(filter.size_in_bits(), 256);
        assert_eq!(filter.hash_count(), 2);
        assert_eq!(filter.strategy_kind(), StrategyKind::BitSlice);
    }

    #[test]
    fn test_from_config_revalidates() {
        let config = BloomConfig {
            capacity: 256,
            hash_count: 5,
            strategy: StrategyKind::BitSlice,
        };
        assert!(BloomFilter::from_config(&config).is_err());
    }

    #[test]
    fn test_fpr_grows_with_inserts() {
        let mut filter = BloomFilter::new(512, 13, StrategyKind::DigestDoubleHash).unwrap();
        let mut previous = filter.estimate_false_positive_probability();

        for i in 0..100 {
            filter.add(&i).unwrap();
            let current = filter.estimate_false_positive_probability();
            assert!(current > previous, "FPR must increase at n={}", i + 1);
            previous = current;
        }
    }

    #[test]
    fn test_size_in_bytes() {
        let filter = BloomFilter::new(512, 13, StrategyKind::DigestDoubleHash).unwrap();
        assert_eq!(filter.size_in_bytes(), 64);
    }
}
