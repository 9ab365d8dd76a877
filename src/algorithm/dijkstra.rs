use std::collections::HashSet;
use log::debug;

use crate::algorithm::reconstruct::reconstruct;
use crate::algorithm::relax::{initial_maps, relax};
use crate::algorithm::{RelaxationStats, ShortestPath, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::Frontier;
use crate::graph::{Graph, VertexId, Weight};
use crate::{Error, Result};

/// Frontier relaxation (Dijkstra) for non-negative edge weights
///
/// A vertex whose tentative distance improves is pushed again rather than
/// decreased in place; popping it settles it, and settled vertices are never
/// relaxed again. A single-pair search stops the moment the target is settled.
#[derive(Debug, Clone)]
pub struct Dijkstra {
    /// Reject graphs with negative weights before searching
    check_weights: bool,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance that rejects negative weights
    pub fn new() -> Self {
        Dijkstra { check_weights: true }
    }

    /// Enable or disable the up-front negative weight check.
    ///
    /// With the check disabled, non-negative weights become the caller's
    /// responsibility and distances over negative edges are unspecified.
    pub fn with_weight_check(mut self, enabled: bool) -> Self {
        self.check_weights = enabled;
        self
    }

    /// Runs the search, stopping early when `target` is settled.
    /// Returns the result and whether `target` was reached.
    fn search<V, W, G>(
        &self,
        graph: &G,
        source: V,
        target: Option<V>,
    ) -> Result<(ShortestPathResult<V, W>, bool), V>
    where
        V: VertexId,
        W: Weight + Ord,
        G: Graph<V, W>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::UnknownVertex(source));
        }
        if let Some(target) = target {
            if !graph.has_vertex(target) {
                return Err(Error::UnknownVertex(target));
            }
        }
        if self.check_weights {
            if let Some((from, to)) = graph.validate_non_negative() {
                return Err(Error::NegativeWeight { from, to });
            }
        }

        let (mut distances, mut predecessors) = initial_maps(graph, source);
        let mut stats = RelaxationStats::default();
        let mut settled = HashSet::with_capacity(graph.vertex_count());
        let mut frontier = Frontier::seeded(source, W::zero());
        let mut reached = false;

        while let Some((u, _)) = frontier.pop() {
            stats.frontier_pops += 1;

            // Stale copy of an already settled vertex
            if !settled.insert(u) {
                continue;
            }

            if target == Some(u) {
                reached = true;
                break;
            }

            for (v, weight) in graph.outgoing_edges(u) {
                stats.edges_scanned += 1;
                if settled.contains(&v) {
                    continue;
                }
                if let Some(new_dist) = relax(&mut distances, &mut predecessors, u, v, weight) {
                    stats.relaxations += 1;
                    frontier.push(v, new_dist);
                }
            }
        }

        stats.peak_frontier = frontier.peak_len();
        debug!(
            "Dijkstra from {:?}: settled {} vertices, {} relaxations, peak frontier {}",
            source, settled.len(), stats.relaxations, stats.peak_frontier
        );

        let result = ShortestPathResult {
            source,
            distances,
            predecessors,
            stats,
        };
        Ok((result, reached))
    }
}

impl Default for Dijkstra {
    fn default() -> Self {
        Dijkstra::new()
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for Dijkstra
where
    V: VertexId,
    W: Weight + Ord,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: V) -> Result<ShortestPathResult<V, W>, V> {
        let (result, _) = self.search(graph, source, None)?;
        Ok(result)
    }

    fn shortest_path(
        &self,
        graph: &G,
        source: V,
        target: V,
    ) -> Result<Option<ShortestPath<V, W>>, V> {
        let (result, reached) = self.search(graph, source, Some(target))?;
        if !reached {
            return Ok(None);
        }

        let distance = match result.distance_to(target) {
            Some(distance) => distance,
            None => return Err(Error::BrokenPredecessorChain { start: source, target }),
        };
        let vertices = reconstruct(&result.predecessors, source, target)?;

        Ok(Some(ShortestPath { vertices, distance }))
    }
}
