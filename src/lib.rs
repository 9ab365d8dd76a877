//! Relax SSSP - shortest paths by edge relaxation
//!
//! Two complementary single-source shortest path searches over a shared
//! directed graph model:
//!
//! * [`BellmanFord`] relaxes every edge `|V| - 1` times, accepts negative
//!   weights and rejects graphs with a negative cycle reachable from the source.
//! * [`Dijkstra`] grows a priority-ordered frontier over non-negative weights
//!   and stops as soon as the target is settled.
//!
//! Predecessor maps produced by either search are turned into concrete
//! source-to-target paths by [`reconstruct`].

pub mod algorithm;
pub mod data_structures;
pub mod graph;

use std::fmt::Debug;

pub use algorithm::{
    bellman_ford::BellmanFord, dijkstra::Dijkstra, reconstruct::reconstruct, DistanceMap,
    PredecessorMap, RelaxationStats, ShortestPath, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{DirectedGraph, Edge, Graph, MutableGraph, VertexId, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error<V: Debug> {
    #[error("Negative-weight cycle reachable from source, witnessed by edge {from:?} -> {to:?}")]
    NegativeCycle { from: V, to: V },

    #[error("Negative edge weight on {from:?} -> {to:?}")]
    NegativeWeight { from: V, to: V },

    #[error("Unknown vertex: {0:?}")]
    UnknownVertex(V),

    #[error("Predecessor chain from {target:?} does not lead back to {start:?}")]
    BrokenPredecessorChain { start: V, target: V },
}

/// Result type for the library
pub type Result<T, V> = std::result::Result<T, Error<V>>;

/// Bounded relaxation (Bellman-Ford) from `source` with the default configuration.
///
/// Returns the distance and predecessor maps, or [`Error::NegativeCycle`] when a
/// negative-weight cycle is reachable from `source`.
pub fn relax_bounded<V, W, G>(
    graph: &G,
    source: V,
) -> Result<(DistanceMap<V, W>, PredecessorMap<V>), V>
where
    V: VertexId,
    W: Weight,
    G: Graph<V, W>,
{
    let result = BellmanFord::new().compute_shortest_paths(graph, source)?;
    Ok(result.into_parts())
}

/// Frontier relaxation (Dijkstra) from `source`, stopping once `target` is settled.
///
/// `Ok(None)` means `target` is unreachable from `source`.
pub fn relax_frontier<V, W, G>(
    graph: &G,
    source: V,
    target: V,
) -> Result<Option<ShortestPath<V, W>>, V>
where
    V: VertexId,
    W: Weight + Ord,
    G: Graph<V, W>,
{
    Dijkstra::new().shortest_path(graph, source, target)
}
