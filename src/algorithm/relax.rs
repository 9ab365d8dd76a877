//! The relax-and-record step shared by both searches.

use crate::algorithm::{DistanceMap, PredecessorMap};
use crate::graph::{Graph, VertexId, Weight};

/// Fresh maps for a search from `source`: every declared vertex unreached
/// with no predecessor, except the source at distance zero.
pub(crate) fn initial_maps<V, W, G>(
    graph: &G,
    source: V,
) -> (DistanceMap<V, W>, PredecessorMap<V>)
where
    V: VertexId,
    W: Weight,
    G: Graph<V, W>,
{
    let mut distances = DistanceMap::with_capacity(graph.vertex_count());
    let mut predecessors = PredecessorMap::with_capacity(graph.vertex_count());

    for v in graph.vertices() {
        distances.insert(v, None);
        predecessors.insert(v, None);
    }
    distances.insert(source, Some(W::zero()));

    (distances, predecessors)
}

/// Distance `v` would get through `u -> v`, if that is an improvement.
///
/// Unreached or undeclared tails never improve anything, and undeclared heads
/// have no slot to improve. A sum that overflows the weight type is not an
/// improvement.
pub(crate) fn improved_distance<V, W>(
    distances: &DistanceMap<V, W>,
    u: V,
    v: V,
    weight: W,
) -> Option<W>
where
    V: VertexId,
    W: Weight,
{
    let dist_u = (*distances.get(&u)?)?;
    let candidate = dist_u.checked_sum(weight)?;

    match *distances.get(&v)? {
        Some(current) if !(candidate < current) => None,
        _ => Some(candidate),
    }
}

/// Relaxes `u -> v`, recording the new distance and predecessor together.
/// Returns the new distance of `v` when it improved.
pub(crate) fn relax<V, W>(
    distances: &mut DistanceMap<V, W>,
    predecessors: &mut PredecessorMap<V>,
    u: V,
    v: V,
    weight: W,
) -> Option<W>
where
    V: VertexId,
    W: Weight,
{
    let candidate = improved_distance(distances, u, v, weight)?;
    distances.insert(v, Some(candidate));
    predecessors.insert(v, Some(u));
    Some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DirectedGraph, MutableGraph};

    fn maps() -> (DistanceMap<u32, i64>, PredecessorMap<u32>) {
        let mut graph: DirectedGraph<u32, i64> = DirectedGraph::with_vertices(0..3);
        graph.add_edge(0, 1, 4);
        initial_maps(&graph, 0)
    }

    #[test]
    fn test_initial_maps() {
        let (distances, predecessors) = maps();
        assert_eq!(distances.get(&0), Some(&Some(0)));
        assert_eq!(distances.get(&2), Some(&None));
        assert!(predecessors.values().all(|p| p.is_none()));
        assert_eq!(distances.len(), 3);
    }

    #[test]
    fn test_relax_records_distance_and_predecessor() {
        let (mut distances, mut predecessors) = maps();

        assert_eq!(relax(&mut distances, &mut predecessors, 0, 1, 4), Some(4));
        assert_eq!(predecessors[&1], Some(0));

        // Equal cost is not an improvement
        assert_eq!(relax(&mut distances, &mut predecessors, 0, 1, 4), None);
        assert_eq!(relax(&mut distances, &mut predecessors, 0, 1, 3), Some(3));
        assert_eq!(distances[&1], Some(3));
    }

    #[test]
    fn test_unreached_tail_and_undeclared_vertices_never_relax() {
        let (mut distances, mut predecessors) = maps();

        assert_eq!(relax(&mut distances, &mut predecessors, 2, 1, -10), None);
        assert_eq!(relax(&mut distances, &mut predecessors, 0, 9, 1), None);
        assert_eq!(relax(&mut distances, &mut predecessors, 9, 1, 1), None);
        assert!(!distances.contains_key(&9));
        assert_eq!(predecessors[&1], None);
    }

    #[test]
    fn test_overflowing_sum_is_not_an_improvement() {
        let mut graph: DirectedGraph<u32, i64> = DirectedGraph::with_vertices(0..3);
        graph.add_edge(0, 1, i64::MAX);
        let (mut distances, mut predecessors) = initial_maps(&graph, 0);

        let max = i64::MAX;
        assert_eq!(relax(&mut distances, &mut predecessors, 0, 1, max), Some(max));
        assert_eq!(relax(&mut distances, &mut predecessors, 1, 2, 1), None);
        assert_eq!(distances[&2], None);
        assert_eq!(predecessors[&2], None);
    }
}
