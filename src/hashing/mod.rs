//! Fixed-size integer hash tables with a multiplicative hash.

pub mod chaining;
pub mod linear_probing;
pub mod session;

pub use chaining::ChainedHashTable;
pub use linear_probing::LinearProbingTable;
pub use session::{run_session, QueryResult};

use crate::types::{AlgoError, AlgoResult, HASH_CONST, HASH_SIZE};

/// Table geometry and hash multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashParams {
    buckets: usize,
    multiplier: i64,
}

impl HashParams {
    /// Custom parameters. `buckets` must be non-zero.
    pub fn new(buckets: usize, multiplier: i64) -> AlgoResult<Self> {
        if buckets == 0 {
            return Err(AlgoError::InvalidInput(
                "hash table needs at least one bucket".to_string(),
            ));
        }
        Ok(Self {
            buckets,
            multiplier,
        })
    }

    pub fn buckets(&self) -> usize {
        self.buckets
    }

    pub fn multiplier(&self) -> i64 {
        self.multiplier
    }

    /// `(value * multiplier) mod buckets`, always in `0..buckets`.
    ///
    /// Computed in 64 bits with a Euclidean remainder, so negative values
    /// land in range and the product cannot overflow.
    pub fn bucket_of(&self, value: i32) -> usize {
        let product = i64::from(value).wrapping_mul(self.multiplier);
        // buckets fits in i64 for any realistic table size.
        product.rem_euclid(self.buckets as i64) as usize
    }
}

impl Default for HashParams {
    fn default() -> Self {
        Self {
            buckets: HASH_SIZE,
            multiplier: HASH_CONST,
        }
    }
}

/// `(value * 31) mod 1000` with the default parameters.
pub fn hash(value: i32) -> usize {
    HashParams::default().bucket_of(value)
}

/// Operations shared by both collision strategies.
pub trait IntTable {
    /// Store a value. Repeated inserts store repeated entries.
    fn insert(&mut self, value: i32) -> AlgoResult<()>;

    /// Whether the value was inserted.
    fn search(&self, value: i32) -> bool;

    /// Number of stored entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries per bucket or slot.
    fn load_factor(&self) -> f64;
}
