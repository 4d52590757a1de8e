//! Directed graph stored as a dense `V x V` matrix.

use crate::input::TokenReader;
use crate::types::{AlgoError, AlgoResult};

use super::traversal::Adjacency;
use super::AdjacencyList;

/// Dense adjacency matrix holding the raw input integers.
///
/// Any non-zero `cells[from * size + to]` is an edge for traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    size: usize,
    cells: Vec<i64>,
}

impl AdjacencyMatrix {
    /// Build from square rows of integers.
    pub fn from_rows(rows: &[Vec<i64>]) -> AlgoResult<Self> {
        let size = rows.len();
        // Grown row by row: a ragged input is rejected before it is sized.
        let mut cells = Vec::new();
        for row in rows {
            if row.len() != size {
                return Err(AlgoError::DimensionMismatch {
                    expected: size,
                    got: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self { size, cells })
    }

    /// Parse `V`, then `V * V` integers row by row.
    pub fn parse(reader: &mut TokenReader) -> AlgoResult<Self> {
        let size = reader.square_size("matrix size", 1)?;
        let mut rows = Vec::with_capacity(size);
        for row in 0..size {
            rows.push(reader.values::<i64>(size, &format!("entry of row {}", row))?);
        }
        Self::from_rows(&rows)
    }

    /// Raw cell value.
    pub fn get(&self, from: usize, to: usize) -> Option<i64> {
        if from < self.size && to < self.size {
            Some(self.cells[from * self.size + to])
        } else {
            None
        }
    }

    /// Adjacency lists of the columns equal to 1, in ascending order.
    ///
    /// Stricter than [`has_edge`](Adjacency::has_edge): the list format
    /// is produced only from 0/1 matrices, other values are skipped.
    pub fn to_adjacency_list(&self) -> AdjacencyList {
        let lists = (0..self.size)
            .map(|from| {
                (0..self.size)
                    .filter(|&to| self.get(from, to) == Some(1))
                    .collect()
            })
            .collect();
        AdjacencyList::from_lists_unchecked(lists)
    }
}

impl Adjacency for AdjacencyMatrix {
    fn node_count(&self) -> usize {
        self.size
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get(from, to).map(|cell| cell != 0).unwrap_or(false)
    }
}
