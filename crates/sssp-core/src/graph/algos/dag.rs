use crate::graph::algos::{Algorithm, ShortestPaths};
use crate::graph::{Graph, VertexId};

/// Depth-first post-order over all vertices.
///
/// Roots are tried in ascending order; from each unvisited root the search
/// follows out-edges in insertion order and appends a vertex once all of
/// its neighbours are finished. Popping from the end of the returned vector
/// yields a topological order when the graph is acyclic. On cyclic input
/// every vertex still appears exactly once, in no meaningful order.
///
/// Iterative: the explicit stack holds `(vertex, next out-edge index)` so
/// deep graphs cannot overflow the call stack.
pub fn topological_order(graph: &Graph) -> Vec<VertexId> {
    let vertex_count = graph.vertex_count();
    let mut visited = vec![false; vertex_count];
    let mut order = Vec::with_capacity(vertex_count);
    let mut stack: Vec<(VertexId, usize)> = Vec::new();

    for root in 0..vertex_count {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (v, next) = *frame;
            match graph.neighbors_out(v).get(next) {
                Some(edge) => {
                    frame.1 += 1;
                    let u = edge.target;
                    if !visited[u] {
                        visited[u] = true;
                        stack.push((u, 0));
                    }
                }
                None => {
                    order.push(v);
                    stack.pop();
                }
            }
        }
    }

    order
}

/// Shortest paths on a directed acyclic graph in `O(V + E)`.
///
/// Vertices are taken in topological order and each reached vertex relaxes
/// its out-edges once. Exact for any edge signs, because every predecessor
/// of a vertex is final before the vertex is processed.
///
/// The graph must be acyclic. This is not checked: on cyclic input the
/// ordering is arbitrary on the cyclic part and distances there may be
/// wrong or missing.
///
/// # Panics
///
/// Panics if `source` or any edge destination is out of range.
#[tracing::instrument(skip(graph), fields(vertex_count = graph.vertex_count()))]
pub fn dag_shortest_paths(graph: &Graph, source: VertexId) -> ShortestPaths {
    let mut order = topological_order(graph);
    let mut result = ShortestPaths::init(Algorithm::Dag, graph.vertex_count(), source);

    while let Some(u) = order.pop() {
        if result.distance(u).is_none() {
            continue;
        }
        for edge in graph.neighbors_out(u) {
            result.relax(u, edge);
        }
    }

    tracing::debug!(
        relaxations = result.relaxations,
        reachable = result.reachable_count(),
        "dag_shortest_paths"
    );
    result
}

#[cfg(test)]
mod tests;
