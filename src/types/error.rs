//! Error types for the classic-algorithms library.

use thiserror::Error;

/// All errors that can occur in the classic-algorithms library.
#[derive(Error, Debug)]
pub enum AlgoError {
    /// Malformed input: non-numeric token, missing values, negative size, bad index.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Pop from a queue with no elements.
    #[error("Pop from an empty queue")]
    EmptyQueue,

    /// Push into a queue already holding its fixed capacity.
    #[error("Queue is full (capacity {0})")]
    QueueFull(usize),

    /// Node index outside the graph.
    #[error("Node {node} out of range for graph with {count} nodes")]
    NodeOutOfRange { node: usize, count: usize },

    /// Every slot of an open-addressing table is occupied.
    #[error("Hash table is full ({0} slots)")]
    TableFull(usize),

    /// Matrix shapes do not line up.
    #[error("Matrix dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for classic-algorithms operations.
pub type AlgoResult<T> = Result<T, AlgoError>;
