//! Graph representation and shortest-path algorithms
//!
//! - `adjacency`: the immutable adjacency-list [`Graph`]
//! - `algos`: breadth relaxation, Bellman-Ford and DAG-ordered relaxation
//! - `path`: parent-pointer walk back to the source

pub mod adjacency;
pub mod algos;
pub mod path;
pub mod types;

pub use adjacency::Graph;
pub use algos::{
    bellman_ford, breadth_relaxation, dag_shortest_paths, topological_order, Algorithm,
    ShortestPaths,
};
pub use path::{format_path, reconstruct_path};
pub use types::{Distance, Edge, VertexId, Weight, WeightedEdge};
