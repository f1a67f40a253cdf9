use std::collections::VecDeque;

use crate::graph::algos::{Algorithm, ShortestPaths};
use crate::graph::{Graph, VertexId};

/// Breadth-first relaxation from `source`.
///
/// Vertices are expanded in FIFO order. Whenever an edge improves its
/// target's distance, the target is recorded with its new parent and queued
/// again, even if it was expanded before; there is no visited set. The run
/// ends when the queue drains.
///
/// This is not Dijkstra: expansion order ignores distances, so a vertex may
/// be expanded several times and equally short paths are broken by queue
/// order. It does not terminate if a negative cycle is reachable from
/// `source`; callers must not use it on such graphs.
///
/// # Panics
///
/// Panics if `source` or any edge destination is out of range.
#[tracing::instrument(skip(graph), fields(vertex_count = graph.vertex_count()))]
pub fn breadth_relaxation(graph: &Graph, source: VertexId) -> ShortestPaths {
    let mut result = ShortestPaths::init(Algorithm::Breadth, graph.vertex_count(), source);
    let mut queue = VecDeque::from([source]);
    let mut expansions = 0usize;

    while let Some(u) = queue.pop_front() {
        expansions += 1;
        for edge in graph.neighbors_out(u) {
            if result.relax(u, edge) {
                queue.push_back(edge.target);
            }
        }
    }

    tracing::debug!(
        relaxations = result.relaxations,
        expansions,
        reachable = result.reachable_count(),
        "breadth_relaxation"
    );
    result
}

#[cfg(test)]
mod tests;
