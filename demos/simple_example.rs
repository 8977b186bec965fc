use adaptable_sssp::{Dijkstra, QueueBackend, ShortestPath, ShortestPathAlgorithm, UndirectedGraph};
use colored::*;
use ordered_float::OrderedFloat;

fn main() -> adaptable_sssp::Result<()> {
    env_logger::init();

    // Create a simple undirected graph
    let mut graph = UndirectedGraph::new();

    // Add vertices (Node 1 - Node 5)
    let nodes: Vec<_> = (1..=5).map(|i| graph.add_vertex(format!("Node {}", i))).collect();

    // Add edges with weights
    graph.add_edge(nodes[0], nodes[1], OrderedFloat(3.0))?;
    graph.add_edge(nodes[0], nodes[2], OrderedFloat(8.0))?;
    graph.add_edge(nodes[0], nodes[4], OrderedFloat(5.0))?;
    graph.add_edge(nodes[1], nodes[2], OrderedFloat(4.0))?;
    graph.add_edge(nodes[2], nodes[3], OrderedFloat(1.0))?;
    graph.add_edge(nodes[2], nodes[4], OrderedFloat(6.0))?;
    graph.add_edge(nodes[3], nodes[4], OrderedFloat(4.0))?;

    println!("--- Testing on a simple graph ---");
    println!("Graph has {} vertices and {} edges", graph.num_vertices(), graph.num_edges());
    println!("{}", graph);

    let (source, destination) = (nodes[0], nodes[3]);

    for backend in QueueBackend::ALL {
        let dijkstra = Dijkstra::new(backend);
        let path: ShortestPath<OrderedFloat<f64>> = dijkstra.shortest_path(&graph, source, destination)?;

        println!(
            "{}",
            <Dijkstra as ShortestPathAlgorithm<OrderedFloat<f64>, UndirectedGraph<String, OrderedFloat<f64>>>>::name(&dijkstra)
                .bright_yellow()
        );
        print!("{}", path.report(&graph));
        println!();
    }

    Ok(())
}
