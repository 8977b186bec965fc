use std::fmt::Debug;
use num_traits::Float;

use crate::graph::VertexId;

/// Trait representing a weighted graph as seen by shortest-path algorithms
///
/// Vertex handles are dense: every vertex of a graph with `vertex_count() == n`
/// has an index in `0..n`.
pub trait Graph<W>: Debug
where
    W: Float + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns true if the vertex belongs to the graph
    fn has_vertex(&self, vertex: VertexId) -> bool;

    /// Returns an iterator over all vertices in insertion order
    fn vertex_ids(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;

    /// Returns an iterator over `(neighbor, weight)` for every edge incident to a vertex
    fn incident_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_>;

    /// Gets the weight of the edge between two vertices if it exists
    fn edge_weight(&self, from: VertexId, to: VertexId) -> Option<W>;
}
