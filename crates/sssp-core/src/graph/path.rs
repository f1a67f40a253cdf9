//! Path reconstruction from parent pointers

use crate::graph::types::VertexId;

/// Walk `parent` back from `dst` until a vertex without a recorded parent,
/// then return the walk in source-to-destination order.
///
/// The caller must only ask for vertices with a finite distance: an unreached
/// `dst` has no parent and comes back as the one-element path `[dst]`, which
/// is indistinguishable from the source's own path. [`super::ShortestPaths::path_to`]
/// does that filtering.
///
/// A simple path visits each vertex at most once, so the walk stops after
/// `parent.len()` vertices. Only a parent cycle (left behind by Bellman-Ford
/// on a graph with a reachable negative cycle) can hit that bound.
pub fn reconstruct_path(parent: &[Option<VertexId>], dst: VertexId) -> Vec<VertexId> {
    let mut path = vec![dst];
    let mut current = dst;

    while let Some(prev) = parent[current] {
        if path.len() == parent.len() {
            tracing::warn!(dst, "parent chain does not reach a root, truncating path");
            break;
        }
        path.push(prev);
        current = prev;
    }

    path.reverse();
    path
}

/// Render a path as `a -> b -> c`.
pub fn format_path(path: &[VertexId]) -> String {
    path.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
