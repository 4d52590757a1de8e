//! Open addressing with linear probing.

use crate::types::{AlgoError, AlgoResult};

use super::{HashParams, IntTable};

/// One value per slot; collisions advance to the next slot with wrap-around.
#[derive(Debug, Clone)]
pub struct LinearProbingTable {
    params: HashParams,
    slots: Vec<Option<i32>>,
    len: usize,
}

impl LinearProbingTable {
    /// 1000 slots, multiplier 31.
    pub fn new() -> Self {
        Self::with_params(HashParams::default())
    }

    pub fn with_params(params: HashParams) -> Self {
        Self {
            params,
            slots: vec![None; params.buckets()],
            len: 0,
        }
    }

    /// Slot index probed at `step` for a value.
    fn probe(&self, value: i32, step: usize) -> usize {
        (self.params.bucket_of(value) + step) % self.slots.len()
    }

    /// Store in the first free slot starting at the value's hash.
    pub fn insert(&mut self, value: i32) -> AlgoResult<usize> {
        for step in 0..self.slots.len() {
            let slot = self.probe(value, step);
            if self.slots[slot].is_none() {
                self.slots[slot] = Some(value);
                self.len += 1;
                if self.len == self.slots.len() {
                    log::warn!("Linear probing table is now full ({} slots)", self.len);
                }
                return Ok(slot);
            }
        }
        Err(AlgoError::TableFull(self.slots.len()))
    }

    /// Probe until the value, an empty slot, or a full cycle.
    pub fn search(&self, value: i32) -> bool {
        self.find_slot(value).is_some()
    }

    /// Slot currently holding the value.
    pub fn find_slot(&self, value: i32) -> Option<usize> {
        for step in 0..self.slots.len() {
            let slot = self.probe(value, step);
            match self.slots[slot] {
                Some(v) if v == value => return Some(slot),
                Some(_) => continue,
                None => return None,
            }
        }
        None
    }

    pub fn slot(&self, index: usize) -> Option<i32> {
        self.slots.get(index).copied().flatten()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn params(&self) -> HashParams {
        self.params
    }
}

impl Default for LinearProbingTable {
    fn default() -> Self {
        Self::new()
    }
}

impl IntTable for LinearProbingTable {
    fn insert(&mut self, value: i32) -> AlgoResult<()> {
        LinearProbingTable::insert(self, value).map(|_| ())
    }

    fn search(&self, value: i32) -> bool {
        LinearProbingTable::search(self, value)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn load_factor(&self) -> f64 {
        self.len as f64 / self.slots.len() as f64
    }
}
