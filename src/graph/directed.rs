use crate::graph::traits::{Edge, Graph, MutableGraph, VertexId, Weight};
use std::collections::{HashMap, HashSet};

/// A directed graph keeping both the edge list and per-vertex adjacency lists
#[derive(Debug, Clone)]
pub struct DirectedGraph<V, W>
where
    V: VertexId,
    W: Weight,
{
    /// Declared vertices in declaration order
    vertices: Vec<V>,

    /// Membership index over `vertices`
    declared: HashSet<V>,

    /// All edges in insertion order
    edges: Vec<Edge<V, W>>,

    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: HashMap<V, Vec<(V, W)>>,
}

impl<V, W> DirectedGraph<V, W>
where
    V: VertexId,
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            vertices: Vec::new(),
            declared: HashSet::new(),
            edges: Vec::new(),
            outgoing_edges: HashMap::new(),
        }
    }

    /// Creates a directed graph with the given vertices declared and no edges
    pub fn with_vertices<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let mut graph = DirectedGraph::new();
        for v in vertices {
            graph.add_vertex(v);
        }
        graph
    }

    /// Smallest edge weight, or `None` for an edgeless graph
    pub fn min_weight(&self) -> Option<W> {
        self.edges.iter().map(|edge| edge.weight).fold(None, |min, w| match min {
            Some(m) if m <= w => Some(m),
            _ => Some(w),
        })
    }
}

impl<V, W> Default for DirectedGraph<V, W>
where
    V: VertexId,
    W: Weight,
{
    fn default() -> Self {
        DirectedGraph::new()
    }
}

impl<V, W> Graph<V, W> for DirectedGraph<V, W>
where
    V: VertexId,
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = V> + '_> {
        Box::new(self.vertices.iter().copied())
    }

    fn edges(&self) -> Box<dyn Iterator<Item = Edge<V, W>> + '_> {
        Box::new(self.edges.iter().copied())
    }

    fn outgoing_edges(&self, vertex: V) -> Box<dyn Iterator<Item = (V, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(&vertex) {
            Box::new(edges.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: V) -> bool {
        self.declared.contains(&vertex)
    }
}

impl<V, W> MutableGraph<V, W> for DirectedGraph<V, W>
where
    V: VertexId,
    W: Weight,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        if !self.declared.insert(vertex) {
            return false;
        }
        self.vertices.push(vertex);
        true
    }

    fn add_edge(&mut self, from: V, to: V, weight: W) {
        self.edges.push(Edge::new(from, to, weight));
        self.outgoing_edges.entry(from).or_default().push((to, weight));
    }

    fn update_edge_weight(&mut self, from: V, to: V, weight: W) -> usize {
        let mut updated = 0;

        for edge in self.edges.iter_mut() {
            if edge.source == from && edge.dest == to {
                edge.weight = weight;
                updated += 1;
            }
        }

        // Keep the adjacency view in step with the edge list
        if let Some(outgoing) = self.outgoing_edges.get_mut(&from) {
            for edge in outgoing.iter_mut() {
                if edge.0 == to {
                    edge.1 = weight;
                }
            }
        }

        updated
    }
}
