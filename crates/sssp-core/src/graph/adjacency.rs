use crate::error::{Result, SsspError};
use crate::graph::types::{Edge, VertexId, Weight, WeightedEdge};

/// Immutable adjacency-list digraph over vertices `0..vertex_count`.
///
/// Each source keeps its outgoing edges in input order. Parallel edges are
/// all retained; nothing is deduplicated or collapsed to a minimum weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    outgoing: Vec<Vec<Edge>>,
}

impl Graph {
    /// Build from an edge list without validating vertex ids.
    ///
    /// # Panics
    ///
    /// Panics if an edge's source is `>= vertex_count`. An out-of-range
    /// destination is stored as given and panics later, when an algorithm
    /// indexes its distance entry. Use [`Graph::try_from_edges`] for input
    /// that has not been checked.
    pub fn from_edges<I>(edges: I, vertex_count: usize) -> Self
    where
        I: IntoIterator<Item = WeightedEdge>,
    {
        let mut outgoing = vec![Vec::new(); vertex_count];
        for (from, to, weight) in edges {
            outgoing[from].push(Edge { target: to, weight });
        }
        Self { outgoing }
    }

    /// Build from an edge list, rejecting any endpoint outside `[0, vertex_count)`.
    ///
    /// The absolute weights must also sum to at most `i64::MAX`, which bounds
    /// the length of every simple path in the graph.
    pub fn try_from_edges<I>(edges: I, vertex_count: usize) -> Result<Self>
    where
        I: IntoIterator<Item = WeightedEdge>,
    {
        if vertex_count == 0 {
            crate::bail_invalid!("vertex_count must be at least 1");
        }

        let mut outgoing = vec![Vec::new(); vertex_count];
        let mut weight_span: Weight = 0;
        for (from, to, weight) in edges {
            SsspError::check_vertex(from, vertex_count)?;
            SsspError::check_vertex(to, vertex_count)?;
            weight_span = match weight.checked_abs().and_then(|w| weight_span.checked_add(w)) {
                Some(span) => span,
                None => crate::bail_invalid!(format!(
                    "edge {from} -> {to} with weight {weight} overflows the total weight range"
                )),
            };
            outgoing[from].push(Edge { target: to, weight });
        }
        Ok(Self { outgoing })
    }

    pub fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    pub fn edge_count(&self) -> usize {
        self.outgoing.iter().map(|edges| edges.len()).sum()
    }

    /// Outgoing edges of `u`, in insertion order.
    pub fn neighbors_out(&self, u: VertexId) -> &[Edge] {
        &self.outgoing[u]
    }

    /// All edges as `(source, destination, weight)`, grouped by source in
    /// ascending order and in insertion order within a source.
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.outgoing
            .iter()
            .enumerate()
            .flat_map(|(from, edges)| edges.iter().map(move |e| (from, e.target, e.weight)))
    }

    /// Weights of every parallel edge `u -> v`.
    pub fn edge_weights(&self, u: VertexId, v: VertexId) -> impl Iterator<Item = Weight> + '_ {
        self.outgoing[u]
            .iter()
            .filter(move |e| e.target == v)
            .map(|e| e.weight)
    }

    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.edge_weights(u, v).next().is_some()
    }

    /// Number of edges carrying a negative weight.
    pub fn negative_edge_count(&self) -> usize {
        self.outgoing
            .iter()
            .flatten()
            .filter(|e| e.weight < 0)
            .count()
    }
}
