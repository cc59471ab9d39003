//! Index strategies: mapping a value to k bit positions
//!
//! Two interchangeable schemes sit behind the `IndexStrategy` trait:
//!
//! - `DigestDoubleHash`: SHA-256 and SHA-224 base hashes combined as
//!   `(h1 + i * h2) mod m`. Works for any `Element` and any k >= 1.
//! - `BitSlice`: splits a non-negative integer's binary form into its even-
//!   and odd-position bits and uses each half as one position. Fast and
//!   allocation-light, but its distribution is far weaker than a digest's.
//!   It only produces two positions, so k is fixed at 2.
//!
//! Both are pure: the same value always yields the same positions in the
//! same order, which is what lets `query` find what `add` set.

use serde::{Deserialize, Serialize};

use super::element::Element;
use super::hash_functions::{
    double_hash_positions, interleaved_bit_slices, sha224_mod, sha256_mod,
};
use crate::error::{FilterError, Result};

/// Maps a value to an ordered sequence of `hash_count()` indices in
/// `[0, modulus())`
pub trait IndexStrategy {
    /// Number of positions produced per value (k)
    fn hash_count(&self) -> usize;

    /// Exclusive upper bound of every position (m)
    fn modulus(&self) -> usize;

    /// Positions for `value`; deterministic and side-effect free
    fn indices_for<E: Element + ?Sized>(&self, value: &E) -> Result<Vec<usize>>;
}

/// Which index strategy a filter is built with
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    #[default]
    DigestDoubleHash,
    BitSlice,
}

impl StrategyKind {
    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::DigestDoubleHash => "digest_double_hash",
            StrategyKind::BitSlice => "bit_slice",
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Double hashing over two independent digests
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigestDoubleHash {
    k: usize,
    m: usize,
}

impl DigestDoubleHash {
    pub fn new(hash_count: usize, modulus: usize) -> Result<Self> {
        if modulus == 0 {
            return Err(FilterError::InvalidCapacity { capacity: modulus });
        }
        if hash_count == 0 {
            return Err(FilterError::InvalidHashCount {
                hash_count,
                reason: "at least one hash function is required",
            });
        }
        Ok(Self {
            k: hash_count,
            m: modulus,
        })
    }
}

impl IndexStrategy for DigestDoubleHash {
    fn hash_count(&self) -> usize {
        self.k
    }

    fn modulus(&self) -> usize {
        self.m
    }

    fn indices_for<E: Element + ?Sized>(&self, value: &E) -> Result<Vec<usize>> {
        let bytes = value.canonical_bytes();
        let h1 = sha256_mod(&bytes, self.m);
        let h2 = sha224_mod(&bytes, self.m);
        Ok(double_hash_positions(h1, h2, self.k, self.m))
    }
}

/// Parity bit slicing of non-negative integers (k = 2)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitSlice {
    m: usize,
}

impl BitSlice {
    /// The only hash count this strategy can produce
    pub const HASH_COUNT: usize = 2;

    pub fn new(modulus: usize) -> Result<Self> {
        if modulus == 0 {
            return Err(FilterError::InvalidCapacity { capacity: modulus });
        }
        Ok(Self { m: modulus })
    }
}

impl IndexStrategy for BitSlice {
    fn hash_count(&self) -> usize {
        Self::HASH_COUNT
    }

    fn modulus(&self) -> usize {
        self.m
    }

    fn indices_for<E: Element + ?Sized>(&self, value: &E) -> Result<Vec<usize>> {
        let value = value
            .as_unsigned()
            .ok_or_else(|| FilterError::UnsupportedInputType {
                strategy: StrategyKind::BitSlice.name(),
                reason: "only non-negative integers can be bit-sliced",
            })?;

        let (even, odd) = interleaved_bit_slices(value);
        let m = self.m as u128;
        Ok(vec![(even % m) as usize, (odd % m) as usize])
    }
}

/// The strategy a filter owns, chosen at construction time
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    DigestDoubleHash(DigestDoubleHash),
    BitSlice(BitSlice),
}

impl Strategy {
    /// Build the strategy selected by `kind`
    ///
    /// `BitSlice` rejects any `hash_count` other than 2.
    pub fn new(kind: StrategyKind, hash_count: usize, modulus: usize) -> Result<Self> {
        match kind {
            StrategyKind::DigestDoubleHash => {
                DigestDoubleHash::new(hash_count, modulus).map(Strategy::DigestDoubleHash)
            }
            StrategyKind::BitSlice => {
                if hash_count != BitSlice::HASH_COUNT {
                    return Err(FilterError::InvalidHashCount {
                        hash_count,
                        reason: "the bit-slice strategy always uses exactly 2 positions",
                    });
                }
                BitSlice::new(modulus).map(Strategy::BitSlice)
            }
        }
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::DigestDoubleHash(_) => StrategyKind::DigestDoubleHash,
            Strategy::BitSlice(_) => StrategyKind::BitSlice,
        }
    }
}

impl IndexStrategy for Strategy {
    fn hash_count(&self) -> usize {
        match self {
            Strategy::DigestDoubleHash(s) => s.hash_count(),
            Strategy::BitSlice(s) => s.hash_count(),
        }
    }

    fn modulus(&self) -> usize {
        match self {
            Strategy::DigestDoubleHash(s) => s.modulus(),
            Strategy::BitSlice(s) => s.modulus(),
        }
    }

    fn indices_for<E: Element + ?Sized>(&self, value: &E) -> Result<Vec<usize>> {
        match self {
            Strategy::DigestDoubleHash(s) => s.indices_for(value),
            Strategy::BitSlice(s) => s.indices_for(value),
        }
    }
}
