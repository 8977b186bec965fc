pub mod traits;
pub mod dijkstra;

pub use traits::{PathReport, ShortestPath, ShortestPathAlgorithm, ShortestPathResult};
