use relax_sssp::graph::{DirectedGraph, Graph, MutableGraph};
use relax_sssp::{relax_frontier, BellmanFord, Dijkstra, ShortestPathAlgorithm};
use ordered_float::OrderedFloat;
use std::collections::HashMap;

// Test helper function to create a grid with 8-way moves, skipping blocked cells
fn create_test_grid(
    width: usize,
    height: usize,
    blocked: &[(usize, usize)],
) -> DirectedGraph<usize, OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_vertices(0..width * height);

    for y in 0..height {
        for x in 0..width {
            if blocked.contains(&(x, y)) {
                continue;
            }
            let vertex = y * width + x;

            let directions = [
                // Cardinal directions (N, E, S, W)
                (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
                // Diagonal directions (NE, SE, SW, NW)
                (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
            ];

            for (dx, dy, cost) in directions {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i32 && ny < height as i32 {
                    let (nx, ny) = (nx as usize, ny as usize);
                    if !blocked.contains(&(nx, ny)) {
                        graph.add_edge(vertex, ny * width + nx, OrderedFloat(cost));
                    }
                }
            }
        }
    }

    graph
}

fn path_weight(graph: &DirectedGraph<usize, OrderedFloat<f64>>, path: &[usize]) -> f64 {
    path.windows(2)
        .map(|pair| {
            graph
                .get_edge_weight(pair[0], pair[1])
                .expect("path should only use existing edges")
                .0
        })
        .sum()
}

#[test]
fn test_path_finding_simple_grid() {
    let graph = create_test_grid(10, 10, &[]);
    let source = 0; // Top-left corner (0,0)
    let target = 99; // Bottom-right corner (9,9)

    let path = Dijkstra::new()
        .shortest_path(&graph, source, target)
        .unwrap()
        .expect("Dijkstra should find a path");

    assert_eq!(path.source(), Some(source), "Path should start at source");
    assert_eq!(path.target(), Some(target), "Path should end at target");
    // Nine diagonal steps
    assert!((path.distance.0 - 12.6).abs() < 1e-9);
    assert!((path_weight(&graph, &path.vertices) - path.distance.0).abs() < 1e-9);
}

#[test]
fn test_path_finding_with_obstacles() {
    // A wall in column 5 with a gap at the bottom
    let wall: Vec<(usize, usize)> = (0..8).map(|y| (5, y)).collect();
    let graph = create_test_grid(10, 10, &wall);
    let source = 0;
    let target = 9; // Top-right corner, behind the wall

    let dijkstra = Dijkstra::new()
        .shortest_path(&graph, source, target)
        .unwrap()
        .expect("Dijkstra should find a path around obstacles");
    let bellman_ford = BellmanFord::new()
        .shortest_path(&graph, source, target)
        .unwrap()
        .expect("Bellman-Ford should find a path around obstacles");

    // Equal-cost paths may sum in a different order
    assert!((dijkstra.distance.0 - bellman_ford.distance.0).abs() < 1e-9);
    for path in [&dijkstra.vertices, &bellman_ford.vertices] {
        assert_eq!(path[0], source);
        assert_eq!(path[path.len() - 1], target);
        assert!(path.iter().all(|v| v % 10 != 5 || v / 10 >= 8), "Path should avoid the wall");
    }
}

#[test]
fn test_fully_walled_target_is_unreachable() {
    let wall: Vec<(usize, usize)> = (0..10).map(|y| (5, y)).collect();
    let graph = create_test_grid(10, 10, &wall);

    assert_eq!(relax_frontier(&graph, 0, 9), Ok(None));

    let result = BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.distance_to(9), None);
    assert_eq!(result.predecessor_of(9), None);
    assert_eq!(result.path_to(9), Ok(None));
}

// Test the city pathfinding scenario between named locations
#[test]
fn test_city_pathfinding() {
    let (width, height) = (25, 18);
    let mut buildings = Vec::new();
    for &(x0, y0) in &[(3, 3), (10, 10)] {
        for dy in 0..3 {
            for dx in 0..3 {
                buildings.push((x0 + dx, y0 + dy));
            }
        }
    }
    let graph = create_test_grid(width, height, &buildings);

    let locations = HashMap::from([
        ("home", (0, 0)),
        ("work", (20, 15)),
        ("gym", (15, 8)),
        ("park", (8, 12)),
    ]);

    let dijkstra = Dijkstra::new();
    for (from_name, &(fx, fy)) in &locations {
        let source = fy * width + fx;
        let all = dijkstra.compute_shortest_paths(&graph, source).unwrap();

        for (to_name, &(tx, ty)) in &locations {
            let target = ty * width + tx;
            let path = dijkstra
                .shortest_path(&graph, source, target)
                .unwrap()
                .unwrap_or_else(|| panic!("Should find a path from {} to {}", from_name, to_name));

            assert_eq!(path.vertices[0], source, "Path should start at source");
            assert_eq!(*path.vertices.last().unwrap(), target, "Path should end at target");
            assert_eq!(Some(path.distance), all.distance_to(target));
            for pair in path.vertices.windows(2) {
                assert!(graph.has_edge(pair[0], pair[1]), "Path should only use existing edges");
            }
        }
    }
}
