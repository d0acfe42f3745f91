//! Trees: stars have no partition, every other tree does.

use crate::classify::TreeShape;
use crate::classify::tree::leaves;
use crate::graph::{Graph, VertexId};
use crate::partition::{NoneReason, SatisfactoryPartition, UnresolvedReason, Verdict};
use std::collections::VecDeque;

/// Partition a tree of the given shape.
///
/// For a non-star tree, take the smallest leaf and its neighbour `p`; the
/// first part is `p` with all leaves hanging off it. If `p` has more non-leaf
/// than leaf neighbours that cluster leaves `p` outnumbered, and the tree is
/// cut on the edge from `p` to its first non-leaf neighbour instead.
pub fn partition(g: &Graph, shape: TreeShape) -> Verdict {
    match shape {
        TreeShape::Star => Verdict::ProvablyNone(NoneReason::Star),
        TreeShape::NonStarTree => non_star(g),
        TreeShape::NotATree => Verdict::Unresolved(UnresolvedReason::CertificationFailed),
    }
}

fn non_star(g: &Graph) -> Verdict {
    let Some(leaf) = leaves(g).next() else {
        return Verdict::Unresolved(UnresolvedReason::CertificationFailed);
    };
    let p = g.neighbors(leaf)[0];
    let (leafy, inner): (Vec<VertexId>, Vec<VertexId>) =
        g.neighbors(p).iter().copied().partition(|&w| g.degree(w) == 1);
    log::trace!(
        "leaf {leaf} hangs off {p}: {} leaf and {} inner neighbours",
        leafy.len(),
        inner.len()
    );

    let first: Vec<VertexId> = if leafy.len() >= inner.len() {
        std::iter::once(p).chain(leafy).collect()
    } else {
        // p has an inner neighbour, otherwise the tree would be a star
        side_of_edge(g, p, inner[0])
    };
    match SatisfactoryPartition::certify(g, first) {
        Ok(part) => Verdict::PartitionFound(part),
        Err(e) => {
            log::warn!("tree split rejected: {e}");
            Verdict::Unresolved(UnresolvedReason::CertificationFailed)
        }
    }
}

/// Vertices reachable from `root` without crossing the edge `{root, cut}`.
fn side_of_edge(g: &Graph, root: VertexId, cut: VertexId) -> Vec<VertexId> {
    let mut seen = vec![false; g.vertex_count()];
    seen[root] = true;
    seen[cut] = true;
    let mut out = vec![root];
    let mut queue = VecDeque::from([root]);
    while let Some(x) = queue.pop_front() {
        for &y in g.neighbors(x) {
            if !seen[y] {
                seen[y] = true;
                out.push(y);
                queue.push_back(y);
            }
        }
    }
    out
}
