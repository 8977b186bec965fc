use crate::graph::{UndirectedGraph, VertexId};
use crate::{Error, Result};
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Grid graph together with its row-major vertex matrix
pub type Grid = (UndirectedGraph<String, OrderedFloat<f64>>, Vec<Vec<VertexId>>);

/// Generates a `rows` x `cols` 4-connected grid with random integer weights
///
/// Weights are drawn uniformly from `1..=max(rows, cols) / 2` (at least 1).
/// Vertices are labelled `v{i}_{j}`.
pub fn generate_grid(rows: usize, cols: usize) -> Result<Grid> {
    generate_grid_with_rng(rows, cols, &mut rand::thread_rng())
}

/// Same as [`generate_grid`] with a caller-supplied random source
pub fn generate_grid_with_rng<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Result<Grid> {
    if rows == 0 || cols == 0 {
        return Err(Error::InvalidArgument(format!(
            "grid dimensions must be positive, got {}x{}",
            rows, cols
        )));
    }

    let max_weight = (rows.max(cols) / 2).max(1) as u32;
    let mut graph = UndirectedGraph::with_capacity(rows * cols, 2 * rows * cols);

    let matrix: Vec<Vec<VertexId>> = (0..rows)
        .map(|i| {
            (0..cols)
                .map(|j| graph.add_vertex(format!("v{}_{}", i, j)))
                .collect()
        })
        .collect();

    for i in 0..rows {
        for j in 0..cols {
            if i + 1 < rows {
                let weight = OrderedFloat(rng.gen_range(1..=max_weight) as f64);
                graph.add_edge(matrix[i][j], matrix[i + 1][j], weight)?;
            }
            if j + 1 < cols {
                let weight = OrderedFloat(rng.gen_range(1..=max_weight) as f64);
                graph.add_edge(matrix[i][j], matrix[i][j + 1], weight)?;
            }
        }
    }

    Ok((graph, matrix))
}

/// Builds a small road network between five US cities, weighted in miles
///
/// Returns the graph and the New York vertex.
pub fn generate_city_network() -> Result<(UndirectedGraph<&'static str, OrderedFloat<f64>>, VertexId)> {
    let mut graph = UndirectedGraph::with_capacity(5, 6);

    let nyc = graph.add_vertex("New York");
    let bos = graph.add_vertex("Boston");
    let phi = graph.add_vertex("Philadelphia");
    let dc = graph.add_vertex("Washington DC");
    let chi = graph.add_vertex("Chicago");

    graph.add_edge(nyc, bos, OrderedFloat(215.0))?;
    graph.add_edge(nyc, phi, OrderedFloat(95.0))?;
    graph.add_edge(phi, dc, OrderedFloat(140.0))?;
    graph.add_edge(nyc, dc, OrderedFloat(225.0))?;
    graph.add_edge(nyc, chi, OrderedFloat(790.0))?;
    graph.add_edge(bos, chi, OrderedFloat(980.0))?;

    Ok((graph, nyc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    #[test]
    fn test_grid_shape_and_weights() {
        let mut rng = StdRng::seed_from_u64(7);
        let (graph, matrix) = generate_grid_with_rng(4, 6, &mut rng).unwrap();

        assert_eq!(graph.num_vertices(), 24);
        // rows * (cols - 1) + (rows - 1) * cols
        assert_eq!(graph.num_edges(), 4 * 5 + 3 * 6);
        assert_eq!(graph.vertex_label(matrix[2][3]).map(String::as_str), Some("v2_3"));
        assert_eq!(graph.degree(matrix[0][0]), Ok(2));
        assert_eq!(graph.degree(matrix[1][1]), Ok(4));

        for (_, edge) in graph.edges() {
            let w = edge.element().into_inner();
            assert!((1.0..=3.0).contains(&w));
        }
    }

    #[test]
    fn test_grid_rejects_empty_dimensions() {
        assert!(matches!(generate_grid(0, 3), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_city_network() {
        let (graph, nyc) = generate_city_network().unwrap();
        assert_eq!(graph.num_vertices(), 5);
        assert_eq!(graph.num_edges(), 6);
        assert_eq!(graph.degree(nyc), Ok(4));
    }
}
