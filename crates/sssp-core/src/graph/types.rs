use serde::{Deserialize, Serialize};

/// Dense vertex identifier in `[0, vertex_count)`.
pub type VertexId = usize;

/// Signed edge weight. Negative weights are allowed everywhere the
/// algorithm in use tolerates them.
pub type Weight = i64;

/// Accumulated distance from the source; `None` means unreached.
pub type Distance = Option<Weight>;

/// Input edge triple: `(source, destination, weight)`.
pub type WeightedEdge = (VertexId, VertexId, Weight);

/// A directed edge as stored in its source's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub target: VertexId,
    pub weight: Weight,
}

/// Candidate distance for `v` when relaxing `u -> v` with `du = distance[u]`,
/// or `None` if it does not improve on `dv`. A sum outside the `i64` range
/// never improves.
pub(crate) fn improves(du: Weight, weight: Weight, dv: Distance) -> Option<Weight> {
    let candidate = du.checked_add(weight)?;
    match dv {
        Some(current) if current <= candidate => None,
        _ => Some(candidate),
    }
}
