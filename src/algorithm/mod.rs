pub mod traits;
pub mod bellman_ford;
pub mod dijkstra;
pub mod cycle;
pub mod reconstruct;
pub mod batch;
mod relax;

pub use traits::{
    DistanceMap, PredecessorMap, RelaxationStats, ShortestPath, ShortestPathAlgorithm,
    ShortestPathResult,
};
pub use batch::shortest_paths_from_sources;
