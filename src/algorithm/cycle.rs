//! Negative cycle detection for bounded relaxation.

use std::collections::HashMap;

use crate::algorithm::relax::improved_distance;
use crate::algorithm::{DistanceMap, PredecessorMap};
use crate::graph::{Graph, VertexId, Weight};

/// Scans every edge once and returns the first one that still admits improvement.
///
/// Run on converged distances, any such edge witnesses a negative-weight cycle
/// reachable from the source. Cycles the source cannot reach are never reported
/// because their vertices stay unreached.
pub fn find_relaxable_edge<V, W, G>(graph: &G, distances: &DistanceMap<V, W>) -> Option<(V, V)>
where
    V: VertexId,
    W: Weight,
    G: Graph<V, W>,
{
    graph
        .edges()
        .find(|edge| improved_distance(distances, edge.source, edge.dest, edge.weight).is_some())
        .map(|edge| (edge.source, edge.dest))
}

/// Follows predecessors from `start` until a vertex repeats and returns that cycle
/// in edge order; the last vertex links back to the first.
///
/// Returns `None` if the walk runs off the tree (a vertex with no predecessor).
pub(crate) fn trace_cycle<V: VertexId>(
    predecessors: &PredecessorMap<V>,
    start: V,
) -> Option<Vec<V>> {
    let mut walk = Vec::new();
    let mut seen: HashMap<V, usize> = HashMap::new();
    let mut current = start;

    while !seen.contains_key(&current) {
        seen.insert(current, walk.len());
        walk.push(current);
        current = predecessors.get(&current).copied().flatten()?;
    }

    // `walk` follows predecessor links backwards; flip it into edge order
    let mut cycle = walk.split_off(seen[&current]);
    cycle.reverse();
    Some(cycle)
}
