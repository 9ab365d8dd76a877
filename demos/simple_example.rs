use colored::*;
use relax_sssp::graph::{Graph, MutableGraph};
use relax_sssp::{BellmanFord, Dijkstra, DirectedGraph, ShortestPathAlgorithm};

fn main() {
    // Create a simple directed graph on vertices 0-4
    let mut graph: DirectedGraph<usize, i64> = DirectedGraph::with_vertices(0..5);

    // Add edges with weights
    graph.add_edge(0, 1, 10);
    graph.add_edge(0, 2, 5);
    graph.add_edge(1, 3, 1);
    graph.add_edge(2, 1, 3);
    graph.add_edge(2, 3, 9);
    graph.add_edge(2, 4, 2);
    graph.add_edge(3, 4, 4);
    graph.add_edge(4, 0, 7);
    graph.add_edge(4, 3, 6);

    let source = 0;

    println!("{}", "--- Testing on a simple graph ---".bright_cyan().bold());
    println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

    let bellman_ford = BellmanFord::new();
    let bounded = bellman_ford.compute_shortest_paths(&graph, source).unwrap();

    let name = ShortestPathAlgorithm::<usize, i64, DirectedGraph<usize, i64>>::name(&bellman_ford);
    println!("\n{} algorithm results:", name.bright_yellow());
    for target in graph.vertices() {
        match bounded.distance_to(target) {
            None => println!("  No path to {}", target.to_string().red()),
            Some(dist) => println!("  Distance to {}: {}", target, dist.to_string().green()),
        }
    }

    let dijkstra = Dijkstra::new();
    let name = ShortestPathAlgorithm::<usize, i64, DirectedGraph<usize, i64>>::name(&dijkstra);
    println!("\n{} algorithm results:", name.bright_yellow());
    for target in graph.vertices() {
        match dijkstra.shortest_path(&graph, source, target).unwrap() {
            Some(path) => {
                let agrees = bounded.distance_to(target) == Some(path.distance);
                let marker = if agrees { "✓".green() } else { "✗".red() };
                println!(
                    "Vertex {}: distance = {}, path = {:?} {}",
                    target, path.distance, path.vertices, marker
                );
            }
            None => println!("Vertex {}: {}", target, "unreachable".red()),
        }
    }

    // Turn 4 -> 0 into a negative cycle 0 -> 2 -> 4 -> 0
    graph.update_edge_weight(4, 0, -10);
    println!("\n{}", "--- After making 4 -> 0 negative ---".bright_cyan().bold());
    match bellman_ford.compute_shortest_paths(&graph, source) {
        Ok(_) => println!("No negative cycle found"),
        Err(err) => println!("{} {}", "[Error]".red().bold(), err),
    }
    if let Ok(Some(cycle)) = bellman_ford.find_negative_cycle(&graph, source) {
        println!("Cycle: {:?}", cycle);
    }
}
