//! Separate chaining: one growable chain per bucket.

use crate::types::AlgoResult;

use super::{HashParams, IntTable};

/// Fixed bucket count; each bucket keeps its values in insertion order.
#[derive(Debug, Clone)]
pub struct ChainedHashTable {
    params: HashParams,
    buckets: Vec<Vec<i32>>,
    len: usize,
}

impl ChainedHashTable {
    /// 1000 buckets, multiplier 31.
    pub fn new() -> Self {
        Self::with_params(HashParams::default())
    }

    pub fn with_params(params: HashParams) -> Self {
        Self {
            params,
            buckets: vec![Vec::new(); params.buckets()],
            len: 0,
        }
    }

    /// Append to the tail of the value's chain.
    pub fn insert(&mut self, value: i32) {
        let bucket = self.params.bucket_of(value);
        self.buckets[bucket].push(value);
        self.len += 1;
    }

    /// Linear scan of the value's chain.
    pub fn search(&self, value: i32) -> bool {
        self.chain(self.params.bucket_of(value)).contains(&value)
    }

    /// Bucket a value hashes to.
    pub fn bucket_of(&self, value: i32) -> usize {
        self.params.bucket_of(value)
    }

    /// Chain stored in a bucket, empty past the end of the table.
    pub fn chain(&self, bucket: usize) -> &[i32] {
        self.buckets.get(bucket).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn bucket_len(&self, bucket: usize) -> usize {
        self.chain(bucket).len()
    }

    /// Length of the longest chain.
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Number of buckets holding at least one value.
    pub fn occupied_buckets(&self) -> usize {
        self.buckets.iter().filter(|b| !b.is_empty()).count()
    }

    pub fn params(&self) -> HashParams {
        self.params
    }
}

impl Default for ChainedHashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl IntTable for ChainedHashTable {
    fn insert(&mut self, value: i32) -> AlgoResult<()> {
        ChainedHashTable::insert(self, value);
        Ok(())
    }

    fn search(&self, value: i32) -> bool {
        ChainedHashTable::search(self, value)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn load_factor(&self) -> f64 {
        self.len as f64 / self.params.buckets() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_then_search() {
        let mut table = ChainedHashTable::new();
        for v in [31, 1, 1000] {
            table.insert(v);
        }
        assert!(table.search(31));
        assert!(table.search(1000));
        assert!(!table.search(5));
        assert_eq!(IntTable::len(&table), 3);
    }

    #[test]
    fn test_colliding_values_share_chain_in_order() {
        let mut table = ChainedHashTable::new();
        // 0, 1000 and -1000 all land in bucket 0.
        for v in [1000, 0, -1000, 0] {
            table.insert(v);
        }
        assert_eq!(table.chain(0), &[1000, 0, -1000, 0]);
        assert_eq!(table.longest_chain(), 4);
        assert_eq!(table.occupied_buckets(), 1);
        assert!(!table.search(2000));
    }
}
