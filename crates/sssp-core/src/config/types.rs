use serde::{Deserialize, Serialize};

use crate::graph::{VertexId, WeightedEdge};

/// A graph definition as read from a TOML or JSON file.
///
/// ```toml
/// vertex_count = 3
/// source = 0
/// edges = [[0, 1, 4], [1, 2, -2]]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Number of vertices; ids run `0..vertex_count`
    pub vertex_count: usize,

    /// Default source vertex when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<VertexId>,

    /// Directed edges as `[from, to, weight]`
    #[serde(default)]
    pub edges: Vec<WeightedEdge>,
}
