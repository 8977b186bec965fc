use crate::graph::traits::Graph;
use crate::{Error, Result};
use num_traits::Float;
use std::fmt::{self, Debug, Display};

/// Stable handle to a vertex of an [`UndirectedGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    /// Position of the vertex in its graph's arena
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Stable handle to an edge of an [`UndirectedGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// An undirected edge between two vertices carrying an element (weight or label)
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<E> {
    u: VertexId,
    v: VertexId,
    element: E,
}

impl<E> Edge<E> {
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Both endpoints in the order they were given to `add_edge`
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.u, self.v)
    }

    /// Returns the endpoint that is not `x`, or `None` if `x` is not an endpoint
    pub fn opposite(&self, x: VertexId) -> Option<VertexId> {
        if x == self.u {
            Some(self.v)
        } else if x == self.v {
            Some(self.u)
        } else {
            None
        }
    }
}

/// An undirected graph stored as an arena of vertices with per-vertex adjacency lists
///
/// Each vertex keeps `(neighbor, edge)` pairs in insertion order. An edge is
/// installed in both endpoints' lists, so `get_edge(u, v)` and `get_edge(v, u)`
/// resolve to the same [`EdgeId`].
///
/// Adding a second edge between the same pair replaces the first in place
/// (last write wins); the replaced edge is no longer reachable from either
/// endpoint.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<V, E> {
    /// Vertex labels, indexed by `VertexId`
    labels: Vec<V>,

    /// Incident edges for each vertex: vertex -> [(neighbor, edge)]
    adjacency: Vec<Vec<(VertexId, EdgeId)>>,

    /// Edge arena, indexed by `EdgeId`
    edges: Vec<Edge<E>>,
}

impl<V, E> UndirectedGraph<V, E> {
    /// Creates a new empty graph
    pub fn new() -> Self {
        UndirectedGraph {
            labels: Vec::new(),
            adjacency: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Creates a new empty graph with room for the given number of vertices and edges
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        UndirectedGraph {
            labels: Vec::with_capacity(vertices),
            adjacency: Vec::with_capacity(vertices),
            edges: Vec::with_capacity(edges),
        }
    }

    /// Adds a vertex with the given label and returns its handle
    pub fn add_vertex(&mut self, label: V) -> VertexId {
        let id = VertexId(self.labels.len());
        self.labels.push(label);
        self.adjacency.push(Vec::new());
        id
    }

    /// Adds an undirected edge between `u` and `v`, replacing any existing edge between them
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, element: E) -> Result<EdgeId> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        let id = EdgeId(self.edges.len());
        self.edges.push(Edge { u, v, element });
        self.install(u, v, id);
        self.install(v, u, id);
        Ok(id)
    }

    fn install(&mut self, from: VertexId, to: VertexId, edge: EdgeId) {
        let neighbors = &mut self.adjacency[from.0];
        match neighbors.iter_mut().find(|(neighbor, _)| *neighbor == to) {
            Some(slot) => slot.1 = edge,
            None => neighbors.push((to, edge)),
        }
    }

    fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex.0 < self.labels.len() {
            Ok(())
        } else {
            Err(Error::InvalidVertex(vertex.0))
        }
    }

    /// Returns true if the vertex belongs to the graph
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex.0 < self.labels.len()
    }

    pub fn num_vertices(&self) -> usize {
        self.labels.len()
    }

    /// Number of distinct live edges, each undirected edge counted once
    pub fn num_edges(&self) -> usize {
        self.edges().count()
    }

    /// Returns an iterator over all vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.labels.len()).map(VertexId)
    }

    /// Returns an iterator over every live edge, each reported once
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge<E>)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(vertex, neighbors)| {
                neighbors
                    .iter()
                    .filter(move |(neighbor, _)| vertex <= neighbor.0)
                    .map(|&(_, edge)| edge)
            })
            .map(|edge| (edge, &self.edges[edge.0]))
    }

    pub fn vertex_label(&self, vertex: VertexId) -> Option<&V> {
        self.labels.get(vertex.0)
    }

    pub fn edge(&self, edge: EdgeId) -> Option<&Edge<E>> {
        self.edges.get(edge.0)
    }

    /// Number of edges incident to a vertex
    pub fn degree(&self, vertex: VertexId) -> Result<usize> {
        self.incident(vertex).map(|neighbors| neighbors.len())
    }

    /// Returns the `(neighbor, edge)` pairs of a vertex in insertion order
    pub fn incident(&self, vertex: VertexId) -> Result<&[(VertexId, EdgeId)]> {
        self.adjacency
            .get(vertex.0)
            .map(Vec::as_slice)
            .ok_or(Error::InvalidVertex(vertex.0))
    }

    /// Returns the edges incident to a vertex in insertion order
    pub fn get_edges(&self, vertex: VertexId) -> Result<impl Iterator<Item = (EdgeId, &Edge<E>)> + '_> {
        let neighbors = self.incident(vertex)?;
        Ok(neighbors
            .iter()
            .map(move |&(_, edge)| (edge, &self.edges[edge.0])))
    }

    /// Looks up the edge connecting `u` and `v`
    pub fn get_edge(&self, u: VertexId, v: VertexId) -> Result<EdgeId> {
        self.incident(u)?
            .iter()
            .find(|(neighbor, _)| *neighbor == v)
            .map(|&(_, edge)| edge)
            .ok_or(Error::EdgeNotFound(u.0, v.0))
    }
}

impl<V, E> Default for UndirectedGraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> Graph<W> for UndirectedGraph<V, W>
where
    V: Debug,
    W: Float + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    fn has_vertex(&self, vertex: VertexId) -> bool {
        self.contains_vertex(vertex)
    }

    fn vertex_ids(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.vertices())
    }

    fn incident_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_> {
        match self.adjacency.get(vertex.0) {
            Some(neighbors) => Box::new(
                neighbors
                    .iter()
                    .map(move |&(neighbor, edge)| (neighbor, self.edges[edge.0].element)),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    fn edge_weight(&self, from: VertexId, to: VertexId) -> Option<W> {
        self.get_edge(from, to)
            .ok()
            .map(|edge| self.edges[edge.0].element)
    }
}

impl<V, E> Display for UndirectedGraph<V, E>
where
    V: Display,
    E: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph:")?;
        for (vertex, neighbors) in self.adjacency.iter().enumerate() {
            write!(f, "  Vertex: {} connected to: ", self.labels[vertex])?;
            for (i, (neighbor, edge)) in neighbors.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(
                    f,
                    "Vertex: {} (via {})",
                    self.labels[neighbor.0], self.edges[edge.0].element
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
