use std::collections::HashMap;
use serde::Serialize;

use crate::algorithm::reconstruct::reconstruct;
use crate::graph::{Graph, VertexId, Weight};
use crate::{Error, Result};

/// Distance from the source per declared vertex; `None` means unreached
pub type DistanceMap<V, W> = HashMap<V, Option<W>>;

/// Best-known predecessor per declared vertex; `None` for the source and unreached vertices
pub type PredecessorMap<V> = HashMap<V, Option<V>>;

/// Counters collected during a single search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RelaxationStats {
    /// Full edge passes (Bellman-Ford only)
    pub passes: usize,
    /// Edges examined, including the cycle check scan
    pub edges_scanned: usize,
    /// Edges that improved a distance
    pub relaxations: usize,
    /// Entries removed from the frontier (Dijkstra only)
    pub frontier_pops: usize,
    /// Largest frontier size (Dijkstra only)
    pub peak_frontier: usize,
}

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<V, W>
where
    V: VertexId,
    W: Weight,
{
    /// Source vertex ID
    pub source: V,

    /// Distances from source to each declared vertex
    pub distances: DistanceMap<V, W>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: PredecessorMap<V>,

    pub stats: RelaxationStats,
}

impl<V, W> ShortestPathResult<V, W>
where
    V: VertexId,
    W: Weight,
{
    /// Distance to `vertex`, `None` if unreached or undeclared
    pub fn distance_to(&self, vertex: V) -> Option<W> {
        self.distances.get(&vertex).copied().flatten()
    }

    pub fn predecessor_of(&self, vertex: V) -> Option<V> {
        self.predecessors.get(&vertex).copied().flatten()
    }

    /// Number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_some()).count()
    }

    /// Shortest path from the source to `target`, `Ok(None)` if `target` was never reached
    pub fn path_to(&self, target: V) -> Result<Option<ShortestPath<V, W>>, V> {
        let distance = match self.distances.get(&target) {
            None => return Err(Error::UnknownVertex(target)),
            Some(None) => return Ok(None),
            Some(Some(distance)) => *distance,
        };

        let vertices = reconstruct(&self.predecessors, self.source, target)?;
        Ok(Some(ShortestPath { vertices, distance }))
    }

    /// Splits the result into its distance and predecessor maps
    pub fn into_parts(self) -> (DistanceMap<V, W>, PredecessorMap<V>) {
        (self.distances, self.predecessors)
    }
}

/// A concrete path ordered from source to target together with its total weight
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath<V, W> {
    pub vertices: Vec<V>,
    pub distance: W,
}

impl<V: Copy, W> ShortestPath<V, W> {
    pub fn source(&self) -> Option<V> {
        self.vertices.first().copied()
    }

    pub fn target(&self) -> Option<V> {
        self.vertices.last().copied()
    }

    /// Number of edges along the path
    pub fn hop_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<V, W, G>
where
    V: VertexId,
    W: Weight,
    G: Graph<V, W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: V) -> Result<ShortestPathResult<V, W>, V>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target
    ///
    /// The default runs the full single-source search and reconstructs the path.
    fn shortest_path(
        &self,
        graph: &G,
        source: V,
        target: V,
    ) -> Result<Option<ShortestPath<V, W>>, V> {
        if !graph.has_vertex(target) {
            return Err(Error::UnknownVertex(target));
        }

        self.compute_shortest_paths(graph, source)?.path_to(target)
    }
}
