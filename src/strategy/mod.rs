//! Partition strategies.
//!
//! One module per structural class the solver dispatches on. Every strategy
//! returns a [`Verdict`](crate::partition::Verdict) and produces partitions
//! only through [`SatisfactoryPartition::certify`]; a construction that fails
//! validation is treated as "no result from this attempt".
//!
//! The regular and bounded-degree strategies share [`absorption_closure`]:
//! starting from a self-satisfied seed, outside vertices with a strict majority
//! of their neighbours inside are pulled in until nothing moves. The grown set
//! stays satisfied, every vertex left outside has at most half its neighbours
//! inside, and a self-satisfied set disjoint from the seed is never touched.

pub mod bazgan;
pub mod disconnected;
pub mod disjoint_cycles;
pub mod long_cycle;
pub mod tree;

use crate::graph::{Graph, VertexId};
use crate::partition::SatisfactoryPartition;
use std::collections::BTreeSet;

/// Neighbours of `v` that lie in `set`.
#[inline]
pub(crate) fn inside_count(g: &Graph, v: VertexId, set: &[bool]) -> usize {
    g.neighbors(v).iter().filter(|&&w| set[w]).count()
}

/// Membership mask over the vertices of `g`. Ids outside the graph are ignored.
pub(crate) fn mask<I>(g: &Graph, vertices: I) -> Vec<bool>
where
    I: IntoIterator<Item = VertexId>,
{
    let mut m = vec![false; g.vertex_count()];
    for v in vertices {
        if let Some(slot) = m.get_mut(v) {
            *slot = true;
        }
    }
    m
}

/// `true` when every member of `set` has at least `⌈deg/2⌉` neighbours in it.
pub fn is_self_satisfied<I>(g: &Graph, set: I) -> bool
where
    I: IntoIterator<Item = VertexId>,
{
    let members: BTreeSet<VertexId> = set.into_iter().collect();
    if members.iter().any(|&v| !g.contains(v)) {
        return false;
    }
    let m = mask(g, members.iter().copied());
    members
        .iter()
        .all(|&v| 2 * inside_count(g, v, &m) >= g.degree(v))
}

/// Grow `seed` by repeatedly absorbing every outside vertex with more than half
/// of its neighbours inside. Returns the fixed point, sorted.
///
/// The seed is expected to be self-satisfied; the result is then satisfied as
/// well, and each vertex outside it has `2 * inside ≤ deg`.
pub fn absorption_closure<I>(g: &Graph, seed: I) -> Vec<VertexId>
where
    I: IntoIterator<Item = VertexId>,
{
    let mut inside = mask(g, seed);
    let mut count: Vec<usize> = g.vertices().map(|v| inside_count(g, v, &inside)).collect();
    let mut frontier: Vec<VertexId> = g
        .vertices()
        .filter(|&v| !inside[v] && 2 * count[v] > g.degree(v))
        .collect();
    let mut rounds = 0usize;
    while !frontier.is_empty() {
        rounds += 1;
        let mut next = Vec::new();
        for v in frontier {
            if inside[v] {
                continue;
            }
            inside[v] = true;
            for &w in g.neighbors(v) {
                count[w] += 1;
                if !inside[w] && 2 * count[w] > g.degree(w) {
                    next.push(w);
                }
            }
        }
        log::trace!("absorption round {rounds}: {} candidates queued", next.len());
        frontier = next;
    }
    g.vertices().filter(|&v| inside[v]).collect()
}

/// Close `seed` under absorption and certify the result against its complement.
/// `None` when the closure swallows the whole graph or fails validation.
pub(crate) fn closure_partition<I>(g: &Graph, seed: I) -> Option<SatisfactoryPartition>
where
    I: IntoIterator<Item = VertexId>,
{
    let first = absorption_closure(g, seed);
    match SatisfactoryPartition::certify(g, first) {
        Ok(p) => Some(p),
        Err(e) => {
            log::trace!("closure rejected: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_triangles_bridged() -> Graph {
        // triangles 0-1-2 and 3-4-5 joined by 2-3
        Graph::from_edges(6, [(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5), (2, 3)]).unwrap()
    }

    #[test]
    fn self_satisfied_sets() {
        let g = two_triangles_bridged();
        assert!(is_self_satisfied(&g, [0, 1, 2]));
        assert!(is_self_satisfied(&g, [3, 4, 5]));
        assert!(!is_self_satisfied(&g, [2, 3]));
        assert!(!is_self_satisfied(&g, [0, 9]));
    }

    #[test]
    fn closure_stops_at_the_bridge() {
        let g = two_triangles_bridged();
        assert_eq!(absorption_closure(&g, [0, 1, 2]), vec![0, 1, 2]);
        let p = closure_partition(&g, [0, 1, 2]).unwrap();
        assert_eq!(p.second(), &[3, 4, 5]);
    }

    #[test]
    fn closure_absorbs_pendant_majorities() {
        // triangle 0-1-2 with pendant 3 on 0 and a path 3-4
        let g = Graph::from_edges(5, [(0, 1), (1, 2), (0, 2), (0, 3), (3, 4)]).unwrap();
        // 3 has one of two neighbours inside: not a strict majority
        assert_eq!(absorption_closure(&g, [0, 1, 2]), vec![0, 1, 2]);
        let h = Graph::from_edges(4, [(0, 1), (1, 2), (0, 2), (0, 3)]).unwrap();
        assert_eq!(absorption_closure(&h, [0, 1, 2]), vec![0, 1, 2, 3]);
        assert!(closure_partition(&h, [0, 1, 2]).is_none());
    }
}
