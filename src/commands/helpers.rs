//! Helper functions shared across commands

use sssp_core::config::GraphConfig;
use sssp_core::error::Result;
use sssp_core::graph::{format_path, Graph, ShortestPaths, VertexId, Weight};

use crate::cli::GraphArgs;

/// A graph ready to query, with the source already resolved
pub struct LoadedGraph {
    pub graph: Graph,
    pub source: VertexId,
}

/// Load the graph named by `--graph` (or the built-in example) and resolve
/// the source vertex.
pub fn load_graph(args: &GraphArgs) -> Result<LoadedGraph> {
    let config = match &args.graph {
        Some(path) => GraphConfig::load(path)?,
        None => GraphConfig::example(),
    };

    let graph = config.build()?;
    let source = config.resolve_source(args.source)?;

    tracing::debug!(
        vertex_count = graph.vertex_count(),
        edge_count = graph.edge_count(),
        negative_edges = graph.negative_edge_count(),
        source,
        "load_graph"
    );

    Ok(LoadedGraph { graph, source })
}

/// `dist(s, v) = d (s -> ... -> v)`
pub fn format_distance_line(
    source: VertexId,
    vertex: VertexId,
    distance: Weight,
    path: &[VertexId],
) -> String {
    format!(
        "dist({}, {}) = {} ({})",
        source,
        vertex,
        distance,
        format_path(path)
    )
}

/// `[7, 5, 1, -]` with `-` for a missing parent
pub fn format_parents(result: &ShortestPaths) -> String {
    let entries: Vec<String> = result
        .parent
        .iter()
        .map(|p| p.map_or_else(|| "-".to_string(), |u| u.to_string()))
        .collect();
    format!("[{}]", entries.join(", "))
}
