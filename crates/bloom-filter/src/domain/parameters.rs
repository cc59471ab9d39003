//! Bloom filter sizing and false positive estimation
//!
//! Formulas:
//! - FPR = (1 - e^(-kn/m))^k          -- estimate after n inserts
//! - m = -n*ln(fpr) / (ln(2)^2)       -- optimal bits
//! - k = (m/n) * ln(2)                -- optimal hash functions

use std::f64::consts::LN_2;

use crate::error::{FilterError, Result};

/// Upper bound applied to the optimal hash count
pub const MAX_OPTIMAL_HASH_COUNT: usize = 32;

/// Sizing derived from an expected element count and target rate
#[derive(Clone, Debug, PartialEq)]
pub struct BloomFilterParams {
    /// Number of bits in the filter (m)
    pub size_bits: usize,
    /// Number of hash functions (k)
    pub hash_count: usize,
    /// False positive rate expected once all elements are inserted
    pub expected_fpr: f64,
}

/// Calculate optimal parameters for `num_elements` at `target_fpr`
///
/// Fails with `InvalidParameters` when `num_elements` is 0 and with
/// `InvalidFpr` unless `0 < target_fpr < 1`.
pub fn calculate_optimal_parameters(
    num_elements: usize,
    target_fpr: f64,
) -> Result<BloomFilterParams> {
    if num_elements == 0 {
        return Err(FilterError::InvalidParameters(
            "expected element count must be at least 1".to_string(),
        ));
    }
    if !(target_fpr > 0.0 && target_fpr < 1.0) {
        return Err(FilterError::InvalidFpr { fpr: target_fpr });
    }

    let m = minimum_bits(num_elements, target_fpr).max(1);
    let k = optimal_k(m, num_elements).clamp(1, MAX_OPTIMAL_HASH_COUNT);

    Ok(BloomFilterParams {
        size_bits: m,
        hash_count: k,
        expected_fpr: calculate_fpr(m, num_elements, k),
    })
}

/// Estimated false positive rate: (1 - e^(-kn/m))^k
///
/// Always in `[0, 1]`. A zero-bit filter is treated as saturated.
pub fn calculate_fpr(m: usize, n: usize, k: usize) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powf(k as f64).clamp(0.0, 1.0)
}

/// Optimal k for given m and n
pub fn optimal_k(m: usize, n: usize) -> usize {
    if n == 0 {
        return 1;
    }
    ((m as f64 / n as f64) * LN_2).round() as usize
}

/// Minimum m for given n and target FPR
pub fn minimum_bits(n: usize, target_fpr: f64) -> usize {
    let ln2_squared = LN_2 * LN_2;
    (-(n as f64) * target_fpr.ln() / ln2_squared).ceil() as usize
}
