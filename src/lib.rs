//! Adaptable SSSP - priority queue backends driving Dijkstra's algorithm
//!
//! This library pairs an undirected, arena-backed labelled graph with three
//! interchangeable priority queues:
//!
//! - [`AdaptablePriorityQueue`]: binary min-heap with an identity index and
//!   lazy deletion, supporting `remove` and `update_priority`.
//! - [`UnsortedPriorityQueue`]: the same contract over an unsorted list,
//!   scanned linearly on every `pop`/`peek`.
//! - [`SimplePriorityQueue`]: insert-only heap; decrease-key is simulated by
//!   inserting duplicates.
//!
//! [`Dijkstra`] runs single-source shortest paths over any of them and
//! optionally stops as soon as the destination is finalized.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

// Re-export main types for convenient use
pub use algorithm::{
    dijkstra::{Dijkstra, QueueBackend},
    PathReport, ShortestPath, ShortestPathAlgorithm, ShortestPathResult,
};
pub use data_structures::{
    AdaptablePriorityQueue, AdaptableQueue, PriorityEntry, SimplePriorityQueue,
    UnsortedPriorityQueue,
};
pub use graph::{Edge, EdgeId, Graph, UndirectedGraph, VertexId};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Task not found in priority queue")]
    TaskNotFound,

    #[error("{0} from an empty priority queue")]
    EmptyQueue(&'static str),

    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("No edge between {0} and {1}")]
    EdgeNotFound(usize, usize),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
