//! Directed graph stored as one neighbor sequence per node.

use crate::input::TokenReader;
use crate::types::{AlgoError, AlgoResult};

use super::traversal::Adjacency;

/// Adjacency-list graph over nodes `0..V`.
///
/// Neighbor sequences keep input order and may hold duplicates. Adjacency
/// tests scan the sequence linearly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyList {
    neighbors: Vec<Vec<usize>>,
}

impl AdjacencyList {
    /// Graph with `node_count` nodes and no edges.
    pub fn new(node_count: usize) -> Self {
        Self {
            neighbors: vec![Vec::new(); node_count],
        }
    }

    /// Build from per-node neighbor lists, rejecting out-of-range targets.
    pub fn from_lists(lists: Vec<Vec<usize>>) -> AlgoResult<Self> {
        let count = lists.len();
        for (node, list) in lists.iter().enumerate() {
            if let Some(&bad) = list.iter().find(|&&n| n >= count) {
                return Err(AlgoError::InvalidInput(format!(
                    "node {} lists neighbor {} outside 0..{}",
                    node, bad, count
                )));
            }
        }
        Ok(Self { neighbors: lists })
    }

    /// Caller guarantees every neighbor is below `lists.len()`.
    pub(crate) fn from_lists_unchecked(lists: Vec<Vec<usize>>) -> Self {
        Self { neighbors: lists }
    }

    /// Parse `V`, then `V` records of `k n1 .. nk`.
    pub fn parse(reader: &mut TokenReader) -> AlgoResult<Self> {
        // Every node record carries at least its adjacency count.
        let count = reader.record_count("node count", 1)?;
        let mut graph = Self::new(count);
        for node in 0..count {
            let degree = reader.record_count(&format!("adjacency count of node {}", node), 1)?;
            for _ in 0..degree {
                let raw: i64 = reader.value(&format!("neighbor of node {}", node))?;
                let neighbor = usize::try_from(raw)
                    .ok()
                    .filter(|&n| n < count)
                    .ok_or_else(|| {
                        AlgoError::InvalidInput(format!(
                            "node {} lists neighbor {} outside 0..{}",
                            node, raw, count
                        ))
                    })?;
                graph.neighbors[node].push(neighbor);
            }
        }
        log::debug!(
            "Parsed adjacency list: {} nodes, {} edges",
            count,
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Neighbor sequence of a node, empty for unknown nodes.
    pub fn neighbors(&self, node: usize) -> &[usize] {
        self.neighbors.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of stored edge entries, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum()
    }

    /// Render in the `V` / `k n1 .. nk` text format accepted by [`parse`](Self::parse).
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n", self.node_count());
        for list in &self.neighbors {
            out.push_str(&list.len().to_string());
            for n in list {
                out.push(' ');
                out.push_str(&n.to_string());
            }
            out.push('\n');
        }
        out
    }
}

impl Adjacency for AdjacencyList {
    fn node_count(&self) -> usize {
        self.neighbors.len()
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.neighbors(from).iter().any(|&n| n == to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_read_values() {
        let mut r = TokenReader::from_text("3\n2 2 1\n0\n1 0\n");
        let g = AdjacencyList::parse(&mut r).unwrap();
        assert_eq!(g.neighbors(0), &[2, 1]);
        assert!(g.neighbors(1).is_empty());
        assert_eq!(g.neighbors(2), &[0]);
        assert!(g.has_edge(2, 0));
        assert!(!g.has_edge(0, 0));
    }

    #[test]
    fn test_parse_rejects_out_of_range_neighbor() {
        let mut r = TokenReader::from_text("2\n1 2\n0");
        assert!(matches!(
            AdjacencyList::parse(&mut r),
            Err(AlgoError::InvalidInput(_))
        ));
        let mut r = TokenReader::from_text("2\n1 -1\n0");
        assert!(AdjacencyList::parse(&mut r).is_err());
    }

    #[test]
    fn test_parse_rejects_count_without_records() {
        let mut r = TokenReader::from_text("1000000000000000000");
        assert!(matches!(
            AdjacencyList::parse(&mut r),
            Err(AlgoError::InvalidInput(_))
        ));
        let mut r = TokenReader::from_text("1\n4000000000000000000 0");
        assert!(AdjacencyList::parse(&mut r).is_err());
    }

    #[test]
    fn test_text_roundtrip() {
        let g = AdjacencyList::from_lists(vec![vec![1, 1], vec![], vec![0]]).unwrap();
        let mut r = TokenReader::from_text(&g.to_text());
        assert_eq!(AdjacencyList::parse(&mut r).unwrap(), g);
        assert_eq!(g.edge_count(), 3);
    }
}
