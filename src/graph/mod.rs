//! Graph representations and traversal.

pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod neighbor_set;
pub mod queue;
pub mod traversal;

pub use adjacency_list::AdjacencyList;
pub use adjacency_matrix::AdjacencyMatrix;
pub use neighbor_set::NeighborSetGraph;
pub use queue::BoundedQueue;
pub use traversal::{bfs_forest, bfs_from, dfs_reachable, Adjacency, BfsForest};
