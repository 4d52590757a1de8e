//! Graph traversal algorithms (BFS forest, DFS reachability).

use serde::Serialize;

use crate::types::{AlgoError, AlgoResult};

use super::BoundedQueue;

/// Edge test shared by every graph representation.
pub trait Adjacency {
    /// Number of nodes; valid indices are `0..node_count()`.
    fn node_count(&self) -> usize;

    /// Whether the directed edge `from -> to` exists.
    fn has_edge(&self, from: usize, to: usize) -> bool;
}

/// Result of a BFS run covering every component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BfsForest {
    /// Nodes in the order they were dequeued.
    pub order: Vec<usize>,
    /// One entry per BFS tree, rooted at its first element.
    pub components: Vec<Vec<usize>>,
}

impl BfsForest {
    /// Number of BFS trees (searches started from an unvisited node).
    pub fn component_count(&self) -> usize {
        self.components.len()
    }
}

/// BFS from every unvisited node in ascending index order.
///
/// Each node appears exactly once in `order`. For a dequeued node,
/// candidate neighbors are tested in ascending index order, so the result
/// does not depend on how a representation stores its edges.
pub fn bfs_forest<G: Adjacency + ?Sized>(graph: &G) -> AlgoResult<BfsForest> {
    let count = graph.node_count();
    let mut visited = vec![false; count];
    let mut order = Vec::with_capacity(count);
    let mut components = Vec::new();

    for start in 0..count {
        if visited[start] {
            continue;
        }
        let before = order.len();
        bfs_component(graph, start, &mut visited, &mut order)?;
        log::debug!(
            "BFS component {} from node {}: {} nodes",
            components.len(),
            start,
            order.len() - before
        );
        components.push(order[before..].to_vec());
    }

    Ok(BfsForest { order, components })
}

/// BFS visitation order of the nodes reachable from `start`.
pub fn bfs_from<G: Adjacency + ?Sized>(graph: &G, start: usize) -> AlgoResult<Vec<usize>> {
    let count = graph.node_count();
    if start >= count {
        return Err(AlgoError::NodeOutOfRange { node: start, count });
    }
    let mut visited = vec![false; count];
    let mut order = Vec::new();
    bfs_component(graph, start, &mut visited, &mut order)?;
    Ok(order)
}

fn bfs_component<G: Adjacency + ?Sized>(
    graph: &G,
    start: usize,
    visited: &mut [bool],
    order: &mut Vec<usize>,
) -> AlgoResult<()> {
    let count = graph.node_count();
    // Nodes are marked when queued, so no node is queued twice and
    // capacity `count` is never exceeded.
    let mut queue = BoundedQueue::new(count);
    visited[start] = true;
    queue.push(start)?;

    while !queue.is_empty() {
        let node = queue.pop()?;
        order.push(node);
        for candidate in 0..count {
            if candidate == node || visited[candidate] {
                continue;
            }
            if graph.has_edge(node, candidate) {
                visited[candidate] = true;
                queue.push(candidate)?;
            }
        }
    }
    Ok(())
}

/// Nodes reachable from `start` by iterative DFS, sorted ascending.
///
/// Used as an oracle for BFS reachability.
pub fn dfs_reachable<G: Adjacency + ?Sized>(graph: &G, start: usize) -> AlgoResult<Vec<usize>> {
    let count = graph.node_count();
    if start >= count {
        return Err(AlgoError::NodeOutOfRange { node: start, count });
    }
    let mut visited = vec![false; count];
    let mut stack = vec![start];
    visited[start] = true;

    while let Some(node) = stack.pop() {
        for candidate in (0..count).rev() {
            if !visited[candidate] && graph.has_edge(node, candidate) {
                visited[candidate] = true;
                stack.push(candidate);
            }
        }
    }

    Ok((0..count).filter(|&n| visited[n]).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyList;

    #[test]
    fn test_chain_order() {
        let g = AdjacencyList::from_lists(vec![vec![1], vec![2], vec![]]).unwrap();
        assert_eq!(bfs_from(&g, 0).unwrap(), vec![0, 1, 2]);
        let forest = bfs_forest(&g).unwrap();
        assert_eq!(forest.order, vec![0, 1, 2]);
        assert_eq!(forest.component_count(), 1);
    }

    #[test]
    fn test_diamond_visits_once() {
        // 0 -> 1, 0 -> 2, 1 -> 2: node 2 is reachable twice.
        let g = AdjacencyList::from_lists(vec![vec![2, 1], vec![2], vec![]]).unwrap();
        assert_eq!(bfs_from(&g, 0).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_start_out_of_range() {
        let g = AdjacencyList::new(2);
        assert!(matches!(
            bfs_from(&g, 2),
            Err(AlgoError::NodeOutOfRange { node: 2, count: 2 })
        ));
        assert!(dfs_reachable(&g, 5).is_err());
    }

    #[test]
    fn test_empty_graph() {
        let forest = bfs_forest(&AdjacencyList::new(0)).unwrap();
        assert!(forest.order.is_empty());
        assert_eq!(forest.component_count(), 0);
    }
}
