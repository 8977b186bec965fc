use std::fmt::{self, Debug, Display};
use num_traits::Float;
use log::warn;

use crate::graph::{EdgeId, Graph, UndirectedGraph, VertexId};
use crate::{Error, Result};

/// Result of a shortest path algorithm execution
///
/// When the run stopped early at a destination, only that destination's
/// distance (and the distances of vertices finalized before it) are final.
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Debug + Copy,
{
    /// Tentative distance from source to each vertex, `+inf` if never reached
    pub distances: Vec<W>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<VertexId>>,

    /// Source vertex
    pub source: VertexId,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Debug + Copy,
{
    /// Distance to `vertex`, `None` if the vertex is outside the graph
    pub fn distance(&self, vertex: VertexId) -> Option<W> {
        self.distances.get(vertex.index()).copied()
    }

    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors.get(vertex.index()).copied().flatten()
    }

    /// Vertices from source to `target`, empty if `target` was not reached
    pub fn path_to(&self, target: VertexId) -> Vec<VertexId> {
        if target.index() >= self.predecessors.len() {
            return Vec::new();
        }
        if target != self.source && self.predecessors[target.index()].is_none() {
            return Vec::new();
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            match self.predecessors[current.index()] {
                Some(pred) => {
                    path.push(pred);
                    current = pred;
                }
                None => {
                    warn!("predecessor chain for {} broke at {}", target, current);
                    return Vec::new();
                }
            }
            if path.len() > self.predecessors.len() {
                warn!("cycle detected reconstructing path to {}", target);
                return Vec::new();
            }
        }

        path.reverse();
        path
    }

    /// Extracts the path and distance to `target`
    pub fn shortest_path(&self, target: VertexId) -> ShortestPath<W> {
        let vertices = self.path_to(target);
        let distance = if vertices.is_empty() {
            W::infinity()
        } else {
            self.distances[target.index()]
        };
        ShortestPath { vertices, distance }
    }
}

/// A single source-to-destination path
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath<W> {
    /// Vertices from source to destination, empty if unreachable
    pub vertices: Vec<VertexId>,

    /// Total weight of the path, `+inf` if unreachable
    pub distance: W,
}

impl<W> ShortestPath<W>
where
    W: Float + Debug + Copy,
{
    pub fn is_reachable(&self) -> bool {
        !self.vertices.is_empty()
    }

    /// The edges traversed along the path, in order
    pub fn edges<V>(&self, graph: &UndirectedGraph<V, W>) -> Result<Vec<EdgeId>> {
        self.vertices
            .windows(2)
            .map(|pair| graph.get_edge(pair[0], pair[1]))
            .collect()
    }

    /// Human-readable hop-by-hop description of the path
    pub fn report<'a, V>(&'a self, graph: &'a UndirectedGraph<V, W>) -> PathReport<'a, V, W> {
        PathReport { path: self, graph }
    }
}

/// Display adapter printing a path with the weight of every hop
pub struct PathReport<'a, V, W> {
    path: &'a ShortestPath<W>,
    graph: &'a UndirectedGraph<V, W>,
}

impl<V, W> PathReport<'_, V, W> {
    fn label(&self, vertex: VertexId) -> std::result::Result<&V, fmt::Error> {
        self.graph.vertex_label(vertex).ok_or(fmt::Error)
    }
}

impl<V, W> Display for PathReport<'_, V, W>
where
    V: Display,
    W: Float + Debug + Display + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vertices = &self.path.vertices;
        let (Some(&first), Some(&last)) = (vertices.first(), vertices.last()) else {
            return writeln!(f, "No path found");
        };

        write!(f, "Shortest path from {} to {}: ", self.label(first)?, self.label(last)?)?;
        for (i, &vertex) in vertices.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", self.label(vertex)?)?;
        }
        writeln!(f)?;
        writeln!(f, "Total distance: {}", self.path.distance)?;

        for pair in vertices.windows(2) {
            let edge = self.graph.get_edge(pair[0], pair[1]).map_err(|_| fmt::Error)?;
            let weight = self.graph.edge(edge).ok_or(fmt::Error)?.element();
            writeln!(
                f,
                "{} to {} (weight: {})",
                self.label(pair[0])?,
                self.label(pair[1])?,
                weight
            )?;
        }
        Ok(())
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from `source`
    ///
    /// `destination` lets implementations stop as soon as that vertex is
    /// finalized; it does not change the returned distance to it.
    fn compute_shortest_paths(
        &self,
        graph: &G,
        source: VertexId,
        destination: Option<VertexId>,
    ) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from `source` to `destination` and its length
    fn shortest_path(
        &self,
        graph: &G,
        source: VertexId,
        destination: VertexId,
    ) -> Result<ShortestPath<W>> {
        if !graph.has_vertex(destination) {
            return Err(Error::InvalidVertex(destination.index()));
        }
        let result = self.compute_shortest_paths(graph, source, Some(destination))?;
        Ok(result.shortest_path(destination))
    }
}
