use log::{debug, trace, warn};

use crate::algorithm::cycle::{find_relaxable_edge, trace_cycle};
use crate::algorithm::relax::{initial_maps, relax};
use crate::algorithm::{
    DistanceMap, PredecessorMap, RelaxationStats, ShortestPathAlgorithm, ShortestPathResult,
};
use crate::graph::{Graph, VertexId, Weight};
use crate::{Error, Result};

/// Bounded relaxation (Bellman-Ford)
///
/// Runs `|V| - 1` passes over every edge, then one verification scan that
/// rejects the result if any edge can still be relaxed. Works with negative
/// weights; a negative cycle the source cannot reach goes undetected and its
/// vertices simply stay unreached.
#[derive(Debug, Clone)]
pub struct BellmanFord {
    /// Stop as soon as a pass relaxes nothing
    early_exit: bool,
}

impl BellmanFord {
    /// Creates a new Bellman-Ford instance with early exit enabled
    pub fn new() -> Self {
        BellmanFord { early_exit: true }
    }

    /// Enable or disable stopping after a pass without improvements.
    /// Results are identical either way.
    pub fn with_early_exit(mut self, enabled: bool) -> Self {
        self.early_exit = enabled;
        self
    }

    fn relax_passes<V, W, G>(
        &self,
        graph: &G,
        source: V,
    ) -> Result<(DistanceMap<V, W>, PredecessorMap<V>, RelaxationStats), V>
    where
        V: VertexId,
        W: Weight,
        G: Graph<V, W>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::UnknownVertex(source));
        }

        let (mut distances, mut predecessors) = initial_maps(graph, source);
        let mut stats = RelaxationStats::default();

        for pass in 1..graph.vertex_count() {
            let (updated, _) =
                relax_all_edges(graph, &mut distances, &mut predecessors, &mut stats);
            stats.passes = pass;

            trace!("Bellman-Ford pass {}: {} relaxations", pass, updated);
            if updated == 0 && self.early_exit {
                break;
            }
        }

        Ok((distances, predecessors, stats))
    }

    /// Finds a negative-weight cycle reachable from `source`
    ///
    /// Returns the cycle's vertices in edge order (the last one links back to
    /// the first), or `None` when no reachable negative cycle exists.
    pub fn find_negative_cycle<V, W, G>(&self, graph: &G, source: V) -> Result<Option<Vec<V>>, V>
    where
        V: VertexId,
        W: Weight,
        G: Graph<V, W>,
    {
        let (mut distances, mut predecessors, mut stats) = self.relax_passes(graph, source)?;

        let (from, to) = match find_relaxable_edge(graph, &distances) {
            Some(witness) => witness,
            None => return Ok(None),
        };

        // Keep relaxing; once a reachable negative cycle exists the predecessor
        // graph closes into a cycle, normally within the first extra pass.
        for _ in 0..graph.vertex_count().max(1) {
            let (_, last_updated) =
                relax_all_edges(graph, &mut distances, &mut predecessors, &mut stats);
            let last_updated = match last_updated {
                Some(vertex) => vertex,
                None => break,
            };

            if let Some(cycle) = trace_cycle(&predecessors, last_updated) {
                warn!("Negative cycle of {} vertices reachable from {:?}", cycle.len(), source);
                return Ok(Some(cycle));
            }
        }

        Err(Error::NegativeCycle { from, to })
    }
}

impl Default for BellmanFord {
    fn default() -> Self {
        BellmanFord::new()
    }
}

/// One full pass over every edge; returns how many edges relaxed and the last vertex improved
fn relax_all_edges<V, W, G>(
    graph: &G,
    distances: &mut DistanceMap<V, W>,
    predecessors: &mut PredecessorMap<V>,
    stats: &mut RelaxationStats,
) -> (usize, Option<V>)
where
    V: VertexId,
    W: Weight,
    G: Graph<V, W>,
{
    let mut updated = 0;
    let mut last_updated = None;

    for edge in graph.edges() {
        stats.edges_scanned += 1;
        if relax(distances, predecessors, edge.source, edge.dest, edge.weight).is_some() {
            updated += 1;
            last_updated = Some(edge.dest);
        }
    }

    stats.relaxations += updated;
    (updated, last_updated)
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for BellmanFord
where
    V: VertexId,
    W: Weight,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &G, source: V) -> Result<ShortestPathResult<V, W>, V> {
        let (distances, predecessors, mut stats) = self.relax_passes(graph, source)?;

        stats.edges_scanned += graph.edge_count();
        if let Some((from, to)) = find_relaxable_edge(graph, &distances) {
            warn!(
                "Negative cycle reachable from {:?}: edge {:?} -> {:?} still relaxes",
                source, from, to
            );
            return Err(Error::NegativeCycle { from, to });
        }

        debug!(
            "Bellman-Ford from {:?}: {} passes, {} relaxations over {} edges",
            source, stats.passes, stats.relaxations, graph.edge_count()
        );

        Ok(ShortestPathResult {
            source,
            distances,
            predecessors,
            stats,
        })
    }
}
