//! Fixed-length bit storage backing a Bloom filter
//!
//! INVARIANTS:
//! - Length is fixed at construction
//! - Bits only move 0 -> 1; there is no clear operation
//! - Out-of-range access fails before anything is mutated

use bitvec::prelude::*;

use crate::error::{FilterError, Result};

/// Array of 1-bit flags, all cleared on construction
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitStore {
    bits: BitVec<u8, Lsb0>,
}

impl BitStore {
    /// Allocate `capacity` cleared bits
    ///
    /// Fails with `InvalidCapacity` when `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(FilterError::InvalidCapacity { capacity });
        }
        Ok(Self {
            bits: bitvec![u8, Lsb0; 0; capacity],
        })
    }

    /// Set the bit at `index`. Setting an already-set bit is a no-op.
    pub fn set(&mut self, index: usize) -> Result<()> {
        self.check_bounds(index)?;
        self.bits.set(index, true);
        Ok(())
    }

    /// Read the bit at `index`
    pub fn get(&self, index: usize) -> Result<bool> {
        self.check_bounds(index)?;
        Ok(self.bits[index])
    }

    /// Verify `index` lies in `[0, capacity)`
    pub fn check_bounds(&self, index: usize) -> Result<()> {
        if index >= self.bits.len() {
            return Err(FilterError::IndexOutOfRange {
                index,
                capacity: self.bits.len(),
            });
        }
        Ok(())
    }

    /// Number of bits (the capacity)
    pub fn size_in_bits(&self) -> usize {
        self.bits.len()
    }

    /// Bytes of backing storage
    pub fn size_in_bytes(&self) -> usize {
        self.bits.as_raw_slice().len()
    }

    /// Number of bits currently set
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_cleared() {
        let store = BitStore::new(100).unwrap();

        assert_eq!(store.size_in_bits(), 100);
        assert_eq!(store.count_ones(), 0);
        for i in 0..100 {
            assert!(!store.get(i).unwrap(), "bit {} should start cleared", i);
        }
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(
            BitStore::new(0),
            Err(FilterError::InvalidCapacity { capacity: 0 })
        );
    }

    #[test]
    fn test_set_then_get() {
        let mut store = BitStore::new(16).unwrap();
        store.set(3).unwrap();

        assert!(store.get(3).unwrap());
        assert!(!store.get(4).unwrap());
        assert_eq!(store.count_ones(), 1);
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut store = BitStore::new(16).unwrap();
        store.set(7).unwrap();
        let snapshot = store.clone();
        store.set(7).unwrap();

        assert_eq!(store, snapshot);
        assert_eq!(store.count_ones(), 1);
    }

    #[test]
    fn test_out_of_range_fails_without_mutation() {
        let mut store = BitStore::new(8).unwrap();
        store.set(0).unwrap();
        let snapshot = store.clone();

        assert_eq!(
            store.set(8),
            Err(FilterError::IndexOutOfRange {
                index: 8,
                capacity: 8
            })
        );
        assert!(matches!(
            store.get(usize::MAX),
            Err(FilterError::IndexOutOfRange { .. })
        ));
        assert_eq!(store, snapshot, "failed access must not touch the bits");
    }

    #[test]
    fn test_size_in_bytes_rounds_up() {
        assert_eq!(BitStore::new(1).unwrap().size_in_bytes(), 1);
        assert_eq!(BitStore::new(8).unwrap().size_in_bytes(), 1);
        assert_eq!(BitStore::new(9).unwrap().size_in_bytes(), 2);
        assert_eq!(BitStore::new(512).unwrap().size_in_bytes(), 64);
    }
}
