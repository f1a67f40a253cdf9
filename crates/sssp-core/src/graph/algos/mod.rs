//! Shortest-path algorithm implementations
//!
//! Each algorithm takes the graph and a source and returns a fresh
//! [`ShortestPaths`]; they share no state and only read the graph.
//! - `bfs`: FIFO-ordered relaxation with re-enqueue on improvement
//! - `bellman_ford`: `N - 1` dense passes, tolerates negative edges
//! - `dag`: topological-order relaxation for acyclic graphs
//! - `shared`: the distance/parent result and the relaxation step

pub mod bellman_ford;
pub mod bfs;
pub mod dag;
pub mod shared;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::SsspError;
use crate::graph::{Graph, VertexId};

pub use bellman_ford::bellman_ford;
pub use bfs::breadth_relaxation;
pub use dag::{dag_shortest_paths, topological_order};
pub use shared::ShortestPaths;

/// Which relaxation strategy to run. The caller picks the one whose
/// assumptions hold for its graph; nothing here inspects the graph to choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Breadth-first relaxation. Loops forever on a reachable negative cycle.
    #[serde(rename = "bfs")]
    Breadth,
    /// Bellman-Ford. Understates distances on a reachable negative cycle.
    BellmanFord,
    /// DAG shortest path. Meaningless distances on cyclic input.
    Dag,
}

impl Algorithm {
    /// Every algorithm, in the order the driver reports them.
    pub const ALL: [Algorithm; 3] = [Algorithm::Breadth, Algorithm::BellmanFord, Algorithm::Dag];

    /// Run this algorithm from `source`.
    pub fn run(self, graph: &Graph, source: VertexId) -> ShortestPaths {
        match self {
            Algorithm::Breadth => breadth_relaxation(graph, source),
            Algorithm::BellmanFord => bellman_ford(graph, source),
            Algorithm::Dag => dag_shortest_paths(graph, source),
        }
    }

    /// Heading used in human output.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Breadth => "Breadth First Search (BFS)",
            Algorithm::BellmanFord => "Bellman-Ford",
            Algorithm::Dag => "Directed Acyclic Graph (DAG)",
        }
    }

    /// Short name used in the parents line of human output.
    pub fn short_label(self) -> &'static str {
        match self {
            Algorithm::Breadth => "BFS",
            Algorithm::BellmanFord => "Bellman-Ford",
            Algorithm::Dag => "DAG",
        }
    }
}

impl FromStr for Algorithm {
    type Err = SsspError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" | "breadth" => Ok(Algorithm::Breadth),
            "bellman-ford" | "bellman_ford" => Ok(Algorithm::BellmanFord),
            "dag" => Ok(Algorithm::Dag),
            other => Err(SsspError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Breadth => write!(f, "bfs"),
            Algorithm::BellmanFord => write!(f, "bellman-ford"),
            Algorithm::Dag => write!(f, "dag"),
        }
    }
}
