use std::collections::{HashMap, VecDeque};

use log::debug;

use crate::graph::{EdgeId, UndirectedGraph, VertexId};
use crate::Result;

/// Outcome of a breadth-first search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsResult {
    /// Every reached vertex mapped to its discovering edge and hop level.
    /// The source maps to `None`.
    pub discovered: HashMap<VertexId, Option<(EdgeId, usize)>>,

    /// Largest discovery level, i.e. the source's eccentricity in hops
    pub max_level: usize,
}

impl BfsResult {
    /// Hop level at which a vertex was discovered, 0 for the source
    pub fn level(&self, vertex: VertexId) -> Option<usize> {
        self.discovered
            .get(&vertex)
            .map(|discovery| discovery.map_or(0, |(_, level)| level))
    }
}

/// Breadth-first search from `source`, expanding one level at a time
pub fn bfs<V, E>(graph: &UndirectedGraph<V, E>, source: VertexId) -> Result<BfsResult> {
    graph.incident(source)?;

    let mut discovered = HashMap::new();
    discovered.insert(source, None);
    let mut queue = VecDeque::from([source]);
    let mut level = 0;
    let mut max_level = 0;

    while !queue.is_empty() {
        level += 1;
        for _ in 0..queue.len() {
            let Some(current) = queue.pop_front() else {
                break;
            };
            for &(neighbor, edge) in graph.incident(current)? {
                if discovered.contains_key(&neighbor) {
                    continue;
                }
                discovered.insert(neighbor, Some((edge, level)));
                max_level = level;
                queue.push_back(neighbor);
            }
        }
    }

    Ok(BfsResult {
        discovered,
        max_level,
    })
}

/// Depth-first search from `source`, mapping each reached vertex to its discovering edge
///
/// Uses an explicit stack of adjacency cursors, so vertices are discovered in
/// the same order a recursive search would visit them.
pub fn dfs<V, E>(
    graph: &UndirectedGraph<V, E>,
    source: VertexId,
) -> Result<HashMap<VertexId, Option<EdgeId>>> {
    graph.incident(source)?;

    let mut marked = HashMap::new();
    marked.insert(source, None);
    let mut stack = vec![(source, 0usize)];

    while let Some((vertex, cursor)) = stack.pop() {
        let neighbors = graph.incident(vertex)?;
        let Some(&(neighbor, edge)) = neighbors.get(cursor) else {
            continue;
        };
        stack.push((vertex, cursor + 1));
        if !marked.contains_key(&neighbor) {
            marked.insert(neighbor, Some(edge));
            stack.push((neighbor, 0));
        }
    }

    Ok(marked)
}

/// Finds the vertex whose BFS eccentricity is smallest
///
/// Ties go to the vertex added first. Returns `None` for an empty graph.
pub fn most_central_vertex<V, E>(graph: &UndirectedGraph<V, E>) -> Result<Option<(VertexId, usize)>> {
    let mut best: Option<(VertexId, usize)> = None;
    for vertex in graph.vertices() {
        let max_level = bfs(graph, vertex)?.max_level;
        if best.map_or(true, |(_, level)| max_level < level) {
            best = Some((vertex, max_level));
        }
    }
    debug!("most central vertex: {:?}", best);
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph(n: usize) -> (UndirectedGraph<usize, ()>, Vec<VertexId>) {
        let mut graph = UndirectedGraph::new();
        let vertices: Vec<_> = (0..n).map(|i| graph.add_vertex(i)).collect();
        for pair in vertices.windows(2) {
            graph.add_edge(pair[0], pair[1], ()).unwrap();
        }
        (graph, vertices)
    }

    #[test]
    fn test_bfs_levels_on_path() {
        let (graph, vertices) = path_graph(4);
        let result = bfs(&graph, vertices[0]).unwrap();
        assert_eq!(result.max_level, 3);
        assert_eq!(result.level(vertices[0]), Some(0));
        assert_eq!(result.level(vertices[2]), Some(2));
        assert_eq!(
            result.discovered[&vertices[1]],
            Some((graph.get_edge(vertices[0], vertices[1]).unwrap(), 1))
        );
    }

    #[test]
    fn test_dfs_goes_deep_first() {
        // 0 - 1 - 2 and 0 - 3, with 1 added before 3
        let mut graph = UndirectedGraph::new();
        let v: Vec<_> = (0..4).map(|i| graph.add_vertex(i)).collect();
        let e01 = graph.add_edge(v[0], v[1], ()).unwrap();
        graph.add_edge(v[0], v[3], ()).unwrap();
        let e12 = graph.add_edge(v[1], v[2], ()).unwrap();
        let e23 = graph.add_edge(v[2], v[3], ()).unwrap();

        let marked = dfs(&graph, v[0]).unwrap();
        assert_eq!(marked.len(), 4);
        assert_eq!(marked[&v[0]], None);
        assert_eq!(marked[&v[1]], Some(e01));
        assert_eq!(marked[&v[2]], Some(e12));
        // Reached through 2 before 0's second edge is considered
        assert_eq!(marked[&v[3]], Some(e23));
    }

    #[test]
    fn test_most_central_vertex_on_path() {
        let (graph, vertices) = path_graph(5);
        assert_eq!(most_central_vertex(&graph).unwrap(), Some((vertices[2], 2)));

        let empty: UndirectedGraph<(), ()> = UndirectedGraph::new();
        assert_eq!(most_central_vertex(&empty).unwrap(), None);
    }
}
