//! Partition quality metrics.
//!
//! Functions for evaluating a two-way split of a graph: per-vertex neighbour
//! counts on each side, the edge cut, and the satisfaction margin. They read an
//! already certified partition; [`SatisfactoryPartition::certify`] applies the
//! same same-versus-cross count to the raw side assignment.

use super::{SatisfactoryPartition, Side};
use crate::graph::{Graph, VertexId};

/// Neighbours of `v` on its own side and across the cut, as `(same, cross)`.
///
/// # Panics
/// Panics if `v` is not a vertex of the partition.
pub fn side_counts(g: &Graph, p: &SatisfactoryPartition, v: VertexId) -> (usize, usize) {
    let own = p.side_of(v).expect("vertex not found in partition");
    g.neighbors(v)
        .iter()
        .fold((0, 0), |(same, cross), &w| match p.side_of(w) {
            Some(side) if side == own => (same + 1, cross),
            _ => (same, cross + 1),
        })
}

/// Number of edges crossing between the two sides (O(E)).
pub fn edge_cut(g: &Graph, p: &SatisfactoryPartition) -> usize {
    g.edges()
        .filter(|&(u, v)| p.side_of(u) != p.side_of(v))
        .count()
}

/// Smallest `same - cross` over all vertices; never negative for a valid
/// partition. `None` when the graph has no vertices.
pub fn satisfaction_margin(g: &Graph, p: &SatisfactoryPartition) -> Option<isize> {
    g.vertices()
        .map(|v| {
            let (same, cross) = side_counts(g, p, v);
            same as isize - cross as isize
        })
        .min()
}

/// Vertex counts of the two sides.
pub fn side_sizes(p: &SatisfactoryPartition) -> (usize, usize) {
    (p.side(Side::First).len(), p.side(Side::Second).len())
}
