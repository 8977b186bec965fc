use adaptable_sssp::graph::{bfs, dfs, generate_city_network, most_central_vertex};
use adaptable_sssp::{Dijkstra, ShortestPath, ShortestPathAlgorithm};
use colored::*;
use ordered_float::OrderedFloat;

fn main() -> adaptable_sssp::Result<()> {
    env_logger::init();

    let (graph, new_york) = generate_city_network()?;

    println!("{}", "🏙️  City road network".bright_green());
    println!("Number of cities: {}", graph.num_vertices());
    println!("Number of roads: {}", graph.num_edges());

    println!("\nCities in the graph:");
    for city in graph.vertices() {
        if let Some(name) = graph.vertex_label(city) {
            println!("- {}", name);
        }
    }

    println!("\nRoads in the graph:");
    for (_, road) in graph.edges() {
        let (u, v) = road.endpoints();
        if let (Some(a), Some(b)) = (graph.vertex_label(u), graph.vertex_label(v)) {
            println!("- ({} - {}) ({} miles)", a, b, road.element());
        }
    }

    println!("\n{}", "📊 Breadth-first levels from New York".bright_yellow());
    let levels = bfs(&graph, new_york)?;
    for city in graph.vertices() {
        if let (Some(name), Some(level)) = (graph.vertex_label(city), levels.level(city)) {
            println!("  {:<15} level {}", name, level);
        }
    }
    println!("Max level: {}", levels.max_level);

    let reached = dfs(&graph, new_york)?;
    println!("Depth-first search reached {} cities", reached.len());

    if let Some((center, max_level)) = most_central_vertex(&graph)? {
        let name = graph.vertex_label(center).copied().unwrap_or("?");
        println!("\n🎯 Most central city: {} (every city within {} hops)", name, max_level);
    }

    let chicago = graph.vertices().last().unwrap_or(new_york);
    let dijkstra = Dijkstra::adaptable();
    let path: ShortestPath<OrderedFloat<f64>> = dijkstra.shortest_path(&graph, new_york, chicago)?;
    println!("\n{}", "🚗 Shortest drive".bright_yellow());
    print!("{}", path.report(&graph));

    Ok(())
}
