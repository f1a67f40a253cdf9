use crate::graph::algos::{Algorithm, ShortestPaths};
use crate::graph::{Graph, VertexId};

/// Bellman-Ford single-source shortest paths.
///
/// Runs exactly `vertex_count - 1` passes. Each pass scans vertices
/// `0..vertex_count` in order (reachable or not) and relaxes every outgoing
/// edge of each reached vertex. Exact for any edge signs as long as no
/// negative cycle is reachable from `source`.
///
/// There is no extra detection pass: with a reachable negative cycle the
/// returned distances are silently understated and the parent pointers may
/// form a cycle.
///
/// # Panics
///
/// Panics if `source` or any edge destination is out of range.
#[tracing::instrument(skip(graph), fields(vertex_count = graph.vertex_count()))]
pub fn bellman_ford(graph: &Graph, source: VertexId) -> ShortestPaths {
    let vertex_count = graph.vertex_count();
    let mut result = ShortestPaths::init(Algorithm::BellmanFord, vertex_count, source);

    for pass in 1..vertex_count {
        let before = result.relaxations;
        for u in 0..vertex_count {
            for edge in graph.neighbors_out(u) {
                result.relax(u, edge);
            }
        }
        tracing::trace!(pass, updated = result.relaxations - before, "bellman_ford_pass");
    }

    tracing::debug!(
        relaxations = result.relaxations,
        reachable = result.reachable_count(),
        "bellman_ford"
    );
    result
}
