use rayon::prelude::*;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, VertexId, Weight};
use crate::Result;

/// Runs one independent search per source in parallel over a shared graph
///
/// The graph is only read; each search owns its own maps and frontier.
/// Results come back in the order of `sources`.
pub fn shortest_paths_from_sources<A, V, W, G>(
    algorithm: &A,
    graph: &G,
    sources: &[V],
) -> Vec<Result<ShortestPathResult<V, W>, V>>
where
    A: ShortestPathAlgorithm<V, W, G> + Sync,
    V: VertexId + Send + Sync,
    W: Weight + Send + Sync,
    G: Graph<V, W> + Sync,
{
    sources
        .par_iter()
        .map(|&source| algorithm.compute_shortest_paths(graph, source))
        .collect()
}
