use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{CheckedAdd, Zero};
use ordered_float::OrderedFloat;

/// Opaque vertex identifier
///
/// `Ord` is only used to break ties between equal priorities in the frontier.
pub trait VertexId: Copy + Eq + Hash + Ord + Debug {}

impl<T> VertexId for T where T: Copy + Eq + Hash + Ord + Debug {}

/// Edge weight; signed weights are allowed
pub trait Weight: Copy + Debug + PartialOrd + Zero {
    /// `self + other`, or `None` when the sum does not fit in the type
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

// Floats saturate to infinity instead of overflowing
macro_rules! float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    Some(self + other)
                }
            }
        )*
    };
}

integer_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_weight!(f32, f64, OrderedFloat<f32>, OrderedFloat<f64>);

/// A directed weighted edge `(source, dest, weight)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<V, W> {
    pub source: V,
    pub dest: V,
    pub weight: W,
}

impl<V, W> Edge<V, W> {
    pub fn new(source: V, dest: V, weight: W) -> Self {
        Edge { source, dest, weight }
    }
}

/// Trait representing a weighted directed graph
pub trait Graph<V, W>: Debug
where
    V: VertexId,
    W: Weight,
{
    /// Returns the number of declared vertices
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges, counting parallel edges separately
    fn edge_count(&self) -> usize;

    /// Returns the declared vertices in declaration order
    fn vertices(&self) -> Box<dyn Iterator<Item = V> + '_>;

    /// Returns every edge in insertion order
    fn edges(&self) -> Box<dyn Iterator<Item = Edge<V, W>> + '_>;

    /// Returns an iterator over the outgoing edges from a vertex as `(dest, weight)`
    fn outgoing_edges(&self, vertex: V) -> Box<dyn Iterator<Item = (V, W)> + '_>;

    /// Returns true if the vertex was declared
    fn has_vertex(&self, vertex: V) -> bool;

    /// Returns true if there's at least one edge between the two vertices
    fn has_edge(&self, from: V, to: V) -> bool {
        self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    /// Gets the weight of the first edge between the two vertices
    fn get_edge_weight(&self, from: V, to: V) -> Option<W> {
        self.outgoing_edges(from)
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
    }

    /// Returns the first edge with a negative weight, if any
    fn validate_non_negative(&self) -> Option<(V, V)> {
        self.edges()
            .find(|edge| edge.weight < W::zero())
            .map(|edge| (edge.source, edge.dest))
    }
}

/// Trait for building a graph
pub trait MutableGraph<V, W>: Graph<V, W>
where
    V: VertexId,
    W: Weight,
{
    /// Declares a vertex; returns false if it was already declared
    fn add_vertex(&mut self, vertex: V) -> bool;

    /// Adds a directed edge. Never fails: endpoints need not be declared and
    /// duplicates, parallel edges and self-loops are all kept.
    fn add_edge(&mut self, from: V, to: V, weight: W);

    /// Rewrites the weight of every `from -> to` edge; returns how many changed
    fn update_edge_weight(&mut self, from: V, to: V, weight: W) -> usize;
}
