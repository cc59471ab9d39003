//! Domain Layer - Pure data structure logic
//!
//! This layer contains:
//! - Bit storage
//! - Element canonicalization
//! - Hash primitives and index strategies
//! - The Bloom filter itself
//! - Parameter calculations
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - No shared or global state

pub mod bit_store;
pub mod bloom_filter;
pub mod config;
pub mod element;
pub mod hash_functions;
pub mod index_strategy;
pub mod parameters;

pub use bit_store::BitStore;
pub use bloom_filter::BloomFilter;
pub use config::{BloomConfig, BloomConfigBuilder};
pub use element::Element;
pub use index_strategy::{BitSlice, DigestDoubleHash, IndexStrategy, Strategy, StrategyKind};
pub use parameters::{calculate_fpr, calculate_optimal_parameters, BloomFilterParams};
