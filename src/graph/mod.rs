pub mod generators;
pub mod traits;
pub mod traversal;
pub mod undirected;

pub use generators::{generate_city_network, generate_grid, generate_grid_with_rng};
pub use traits::Graph;
pub use traversal::{bfs, dfs, most_central_vertex, BfsResult};
pub use undirected::{Edge, EdgeId, UndirectedGraph, VertexId};
