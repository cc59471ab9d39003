//! Hash primitives for index derivation
//!
//! Two independent digests (SHA-256 and SHA-224) supply the base hashes for
//! double hashing. Digests are reduced modulo the filter size as full-width
//! big-endian integers, so positions match the arbitrary-precision formula
//! `(h1 + i * h2) mod m` exactly.

use sha2::{Digest, Sha224, Sha256};

/// Reduce a big-endian unsigned integer modulo `modulus`
///
/// `modulus` must be non-zero.
pub fn reduce_be_bytes(bytes: &[u8], modulus: usize) -> usize {
    let m = modulus as u128;
    // acc < m <= 2^64, so acc * 256 + 255 stays well inside u128
    bytes
        .iter()
        .fold(0u128, |acc, &byte| (acc * 256 + u128::from(byte)) % m) as usize
}

/// First base hash: SHA-256 of `bytes`, reduced modulo `modulus`
pub fn sha256_mod(bytes: &[u8], modulus: usize) -> usize {
    reduce_be_bytes(&Sha256::digest(bytes), modulus)
}

/// Second base hash: SHA-224 of `bytes`, reduced modulo `modulus`
pub fn sha224_mod(bytes: &[u8], modulus: usize) -> usize {
    reduce_be_bytes(&Sha224::digest(bytes), modulus)
}

/// Compute k positions by double hashing: h(i) = (h1 + i * h2) mod m
///
/// `h1` and `h2` must already be reduced modulo `m`. When `h2 == 0` every
/// position equals `h1`; that collapse is inherent to double hashing.
pub fn double_hash_positions(h1: usize, h2: usize, k: usize, m: usize) -> Vec<usize> {
    let m = m as u128;
    let (h1, h2) = (h1 as u128, h2 as u128);

    (0..k)
        .map(|i| {
            let step = ((i as u128 % m) * h2) % m;
            ((h1 + step) % m) as usize
        })
        .collect()
}

/// Split the binary form of `value` into its even- and odd-position bits
///
/// Positions count from the most significant bit of the shortest binary
/// representation (zero is "0"). Each group is read back, in order, as a
/// binary number. An empty group reads as 0.
pub fn interleaved_bit_slices(value: u128) -> (u128, u128) {
    let len = (u128::BITS - value.leading_zeros()).max(1);

    let mut even = 0u128;
    let mut odd = 0u128;
    for i in 0..len {
        let bit = (value >> (len - 1 - i)) & 1;
        if i % 2 == 0 {
            even = (even << 1) | bit;
        } else {
            odd = (odd << 1) | bit;
        }
    }
    (even, odd)
}
