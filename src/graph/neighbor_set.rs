//! Set-backed adjacency for constant-time edge tests.

use std::collections::HashSet;

use super::traversal::Adjacency;
use super::AdjacencyList;

/// Same relation as an [`AdjacencyList`], with each neighbor sequence
/// collapsed into a hash set.
#[derive(Debug, Clone)]
pub struct NeighborSetGraph {
    neighbors: Vec<HashSet<usize>>,
}

impl NeighborSetGraph {
    /// Index an adjacency list. Duplicate entries collapse.
    pub fn from_list(list: &AdjacencyList) -> Self {
        let neighbors = (0..list.node_count())
            .map(|node| list.neighbors(node).iter().copied().collect())
            .collect();
        Self { neighbors }
    }

    /// Distinct out-degree of a node.
    pub fn degree(&self, node: usize) -> usize {
        self.neighbors.get(node).map(HashSet::len).unwrap_or(0)
    }
}

impl From<&AdjacencyList> for NeighborSetGraph {
    fn from(list: &AdjacencyList) -> Self {
        Self::from_list(list)
    }
}

impl Adjacency for NeighborSetGraph {
    fn node_count(&self) -> usize {
        self.neighbors.len()
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.neighbors
            .get(from)
            .map(|set| set.contains(&to))
            .unwrap_or(false)
    }
}
