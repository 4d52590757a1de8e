//! Classic algorithms — small, independent stdin/stdout programs.
//!
//! Graph BFS over adjacency lists and matrices, integer hash tables with
//! separate chaining and linear probing, dense matrix multiplication in
//! three loop orders, a parametric matrix slicer and a sort driver.

pub mod cli;
pub mod graph;
pub mod hashing;
pub mod input;
pub mod matrix;
pub mod sorting;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    bfs_forest, bfs_from, dfs_reachable, Adjacency, AdjacencyList, AdjacencyMatrix, BfsForest,
    BoundedQueue, NeighborSetGraph,
};
pub use hashing::{
    hash, run_session, ChainedHashTable, HashParams, IntTable, LinearProbingTable, QueryResult,
};
pub use input::TokenReader;
pub use matrix::{demo_matrix, multiply, slice, LoopOrder, Matrix, SliceDirection};
pub use sorting::{run_sort_driver, sort_with};
pub use types::{AlgoError, AlgoResult, DEFAULT_SLICE_SIZE, HASH_CONST, HASH_SIZE};
