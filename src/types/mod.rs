//! Shared error types and constants.

pub mod error;

pub use error::{AlgoError, AlgoResult};

/// Number of buckets (chaining) or slots (linear probing) in a hash table.
pub const HASH_SIZE: usize = 1000;

/// Multiplier of the multiplicative hash.
pub const HASH_CONST: i64 = 31;

/// Side length of the demo matrix printed by the slice driver.
pub const DEFAULT_SLICE_SIZE: usize = 100;

/// Largest demo matrix side the slice driver will build.
pub const MAX_SLICE_SIZE: usize = 4096;
