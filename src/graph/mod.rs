pub mod traits;
pub mod directed;
pub mod generators;

pub use traits::{Edge, Graph, MutableGraph, VertexId, Weight};
pub use directed::DirectedGraph;
pub use generators::{generate_grid, generate_random, RandomGraphConfig};
