use crate::graph::{DirectedGraph, MutableGraph};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Shape of a random graph built by [`generate_random`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomGraphConfig {
    pub vertex_count: usize,
    #[serde(default = "default_edges_per_vertex")]
    pub edges_per_vertex: usize,
    pub min_weight: i64,
    pub max_weight: i64,
}

fn default_edges_per_vertex() -> usize {
    3
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            vertex_count: 10,
            edges_per_vertex: default_edges_per_vertex(),
            min_weight: 1,
            max_weight: 20,
        }
    }
}

impl RandomGraphConfig {
    /// Sparse graph with weights in `-20..=0`, likely to contain a negative cycle
    pub fn negative() -> Self {
        Self {
            vertex_count: 10,
            edges_per_vertex: 1,
            min_weight: -20,
            max_weight: 0,
        }
    }

    pub fn with_vertex_count(mut self, vertex_count: usize) -> Self {
        self.vertex_count = vertex_count;
        self
    }

    /// True when the weight range is non-empty
    pub fn is_valid(&self) -> bool {
        self.min_weight <= self.max_weight
    }
}

/// Generates a random directed graph on vertices `0..n`
///
/// Every vertex `i` gets `edges_per_vertex` outgoing edges to `(i + r) % n` with
/// `r` drawn from `1..n`, so no edge is a self-loop. Weights are drawn uniformly
/// from `min_weight..=max_weight`.
///
/// # Panics
///
/// Panics if `min_weight > max_weight`; check [`RandomGraphConfig::is_valid`]
/// first for configs that come from outside the program.
pub fn generate_random<R: Rng + ?Sized>(
    config: &RandomGraphConfig,
    rng: &mut R,
) -> DirectedGraph<usize, i64> {
    assert!(config.min_weight <= config.max_weight, "min_weight must not exceed max_weight");

    let n = config.vertex_count;
    let mut graph = DirectedGraph::with_vertices(0..n);

    // A single vertex has nowhere to go without a self-loop
    if n < 2 {
        return graph;
    }

    for i in 0..n {
        for _ in 0..config.edges_per_vertex {
            let dest = (i + rng.gen_range(1..n)) % n;
            let weight = rng.gen_range(config.min_weight..=config.max_weight);
            graph.add_edge(i, dest, weight);
        }
    }

    graph
}

/// Generates a `width` x `height` grid with 4-connectivity and uniform weights
///
/// Vertex `(x, y)` has id `y * width + x`; each neighbour pair is joined in both directions.
pub fn generate_grid(width: usize, height: usize, weight: i64) -> DirectedGraph<usize, i64> {
    let mut graph = DirectedGraph::with_vertices(0..width * height);

    let get_index = |x: usize, y: usize| -> usize { y * width + x };

    for y in 0..height {
        for x in 0..width {
            let current = get_index(x, y);

            if x > 0 {
                graph.add_edge(current, get_index(x - 1, y), weight);
            }
            if x + 1 < width {
                graph.add_edge(current, get_index(x + 1, y), weight);
            }
            if y > 0 {
                graph.add_edge(current, get_index(x, y - 1), weight);
            }
            if y + 1 < height {
                graph.add_edge(current, get_index(x, y + 1), weight);
            }
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_graph_shape() {
        let config = RandomGraphConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let graph = generate_random(&config, &mut rng);

        assert_eq!(graph.vertex_count(), 10);
        assert_eq!(graph.edge_count(), 30);
        for edge in graph.edges() {
            assert_ne!(edge.source, edge.dest);
            assert!((1..=20).contains(&edge.weight));
        }
    }

    #[test]
    fn test_random_graph_single_vertex_has_no_edges() {
        let config = RandomGraphConfig::default().with_vertex_count(1);
        let mut rng = StdRng::seed_from_u64(1);
        let graph = generate_random(&config, &mut rng);

        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_grid_edge_count() {
        let graph = generate_grid(3, 2, 1);
        assert_eq!(graph.vertex_count(), 6);
        // 2 rows * 2 horizontal pairs + 3 columns * 1 vertical pair, both directions
        assert_eq!(graph.edge_count(), 2 * (2 * 2 + 3));
        assert!(graph.has_edge(0, 1));
        assert!(graph.has_edge(4, 1));
        assert!(!graph.has_edge(0, 4));
    }

    #[test]
    #[should_panic(expected = "min_weight must not exceed max_weight")]
    fn test_inverted_weight_range_panics() {
        let config = RandomGraphConfig {
            min_weight: 5,
            max_weight: -5,
            ..RandomGraphConfig::default()
        };
        assert!(!config.is_valid());
        generate_random(&config, &mut StdRng::seed_from_u64(3));
    }

    #[test]
    fn test_config_deserializes_with_default_edges() {
        let json = r#"{"vertex_count": 5, "min_weight": -3, "max_weight": 3}"#;
        let config: RandomGraphConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.edges_per_vertex, 3);
        assert_eq!(config.vertex_count, 5);
        assert!(config.is_valid());
    }
}
