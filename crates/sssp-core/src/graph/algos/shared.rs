use serde::Serialize;

use crate::graph::path::reconstruct_path;
use crate::graph::types::{improves, Distance, Edge, VertexId, Weight};

use super::Algorithm;

/// Distance/parent pair produced by one algorithm run.
///
/// Both vectors always have one entry per vertex. Unreached vertices keep
/// `None` in both; the source has distance `Some(0)` and no parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    pub algorithm: Algorithm,
    pub source: VertexId,
    pub distance: Vec<Distance>,
    pub parent: Vec<Option<VertexId>>,
    /// Successful distance updates performed during the run
    pub relaxations: usize,
}

impl ShortestPaths {
    /// Fresh state: every vertex unreached except `source` at distance 0.
    ///
    /// # Panics
    ///
    /// Panics if `source >= vertex_count`.
    pub(crate) fn init(algorithm: Algorithm, vertex_count: usize, source: VertexId) -> Self {
        let mut distance = vec![None; vertex_count];
        distance[source] = Some(0);
        Self {
            algorithm,
            source,
            distance,
            parent: vec![None; vertex_count],
            relaxations: 0,
        }
    }

    /// Relax `u -> edge.target`. Returns true when the target's distance
    /// improved and `u` was recorded as its parent.
    pub(crate) fn relax(&mut self, u: VertexId, edge: &Edge) -> bool {
        let Some(du) = self.distance[u] else {
            return false;
        };

        match improves(du, edge.weight, self.distance[edge.target]) {
            Some(candidate) => {
                self.distance[edge.target] = Some(candidate);
                self.parent[edge.target] = Some(u);
                self.relaxations += 1;
                true
            }
            None => false,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.distance.len()
    }

    pub fn distance(&self, v: VertexId) -> Distance {
        self.distance[v]
    }

    pub fn parent(&self, v: VertexId) -> Option<VertexId> {
        self.parent[v]
    }

    pub fn is_reachable(&self, v: VertexId) -> bool {
        self.distance[v].is_some()
    }

    /// Reached vertices with their distances, in ascending vertex order.
    pub fn reachable(&self) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        self.distance
            .iter()
            .enumerate()
            .filter_map(|(v, d)| d.map(|d| (v, d)))
    }

    pub fn reachable_count(&self) -> usize {
        self.distance.iter().filter(|d| d.is_some()).count()
    }

    /// Source-to-`v` vertex sequence, or `None` if `v` was never reached.
    pub fn path_to(&self, v: VertexId) -> Option<Vec<VertexId>> {
        self.distance[v].map(|_| reconstruct_path(&self.parent, v))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::graph::{Graph, ShortestPaths, VertexId, WeightedEdge};

    pub const EXAMPLE_EDGES: [WeightedEdge; 11] = [
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
    pub const EXAMPLE_VERTICES: usize = 8;
    pub const EXAMPLE_SOURCE: VertexId = 7;

    /// Exact distances from vertex 7 on the example graph.
    pub const EXAMPLE_DISTANCES: [Option<i64>; 8] = [
        Some(6),
        Some(-2),
        Some(-6),
        Some(4),
        Some(-1),
        Some(-4),
        Some(6),
        Some(0),
    ];
    pub const EXAMPLE_PARENTS: [Option<VertexId>; 8] = [
        Some(7),
        Some(5),
        Some(1),
        Some(7),
        Some(1),
        Some(7),
        Some(1),
        None,
    ];

    pub fn example_graph() -> Graph {
        Graph::from_edges(EXAMPLE_EDGES, EXAMPLE_VERTICES)
    }

    /// Two equally short routes to 2 (via 3 and via 1); FIFO order reaches
    /// 2 through 3 first, the dense vertex scan through 1.
    pub fn tie_graph() -> Graph {
        Graph::from_edges(vec![(0, 3, 1), (0, 1, 1), (1, 2, 1), (3, 2, 1)], 4)
    }

    /// 0 -> 1 is reachable, the 2 -> 3 component is not.
    pub fn split_graph() -> Graph {
        Graph::from_edges(vec![(0, 1, 5), (2, 3, 1)], 4)
    }

    /// Assert the structural guarantees every algorithm provides on a graph
    /// without a reachable negative cycle.
    pub fn assert_shortest_path_properties(graph: &Graph, result: &ShortestPaths) {
        let source = result.source;
        assert_eq!(result.distance.len(), graph.vertex_count());
        assert_eq!(result.parent.len(), graph.vertex_count());
        assert_eq!(result.distance(source), Some(0));
        assert_eq!(result.parent(source), None);

        for (v, dv) in result.reachable() {
            if v == source {
                continue;
            }
            let u = result
                .parent(v)
                .unwrap_or_else(|| panic!("reached vertex {v} has no parent"));
            let du = result.distance(u).expect("parent must be reached");
            assert!(
                graph.edge_weights(u, v).any(|w| du + w == dv),
                "no edge {u} -> {v} explains distance {dv}"
            );

            let path = result.path_to(v).expect("reached vertex has a path");
            assert_eq!(path.first(), Some(&source));
            assert_eq!(path.last(), Some(&v));
            for pair in path.windows(2) {
                assert!(graph.has_edge(pair[0], pair[1]));
            }
        }

        for v in 0..graph.vertex_count() {
            if !result.is_reachable(v) {
                assert_eq!(result.parent(v), None);
                assert_eq!(result.path_to(v), None);
            }
        }
    }
}
