//! Graph definition files for sssp
//!
//! A graph is described by its vertex count, an edge list and an optional
//! default source. Files ending in `.json` are read as JSON, everything else
//! as TOML.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{Result, SsspError};
use crate::graph::{Graph, VertexId, WeightedEdge};

pub use types::GraphConfig;

/// Edge list of the built-in example graph.
const EXAMPLE_EDGES: [WeightedEdge; 11] = [
    (0, 6, 2),
    (1, 2, -4),
    (1, 4, 1),
    (1, 6, 8),
    (3, 0, 3),
    (3, 4, 5),
    (5, 1, 2),
    (7, 0, 6),
    (7, 1, -1),
    (7, 3, 4),
    (7, 5, -4),
];

impl GraphConfig {
    /// The built-in eight-vertex example: acyclic, with negative edges,
    /// queried from vertex 7.
    pub fn example() -> Self {
        Self {
            vertex_count: 8,
            source: Some(7),
            edges: EXAMPLE_EDGES.to_vec(),
        }
    }

    /// Load a graph definition from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config: GraphConfig = if is_json {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };

        tracing::debug!(
            path = %path.display(),
            vertex_count = config.vertex_count,
            edges = config.edges.len(),
            "load_graph_config"
        );
        Ok(config)
    }

    /// Serialize as a TOML graph definition
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Build the graph, rejecting out-of-range vertex ids
    pub fn build(&self) -> Result<Graph> {
        Graph::try_from_edges(self.edges.iter().copied(), self.vertex_count)
    }

    /// Pick the source: explicit override, then the file's default, then 0.
    /// The result is bounds-checked against `vertex_count`.
    pub fn resolve_source(&self, explicit: Option<VertexId>) -> Result<VertexId> {
        let source = explicit.or(self.source).unwrap_or(0);
        SsspError::check_vertex(source, self.vertex_count)?;
        Ok(source)
    }
}
