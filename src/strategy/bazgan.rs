//! Construction for 3- and 4-regular graphs.
//!
//! Seed the first part with a girth cycle shorter than `|V| / 2` and absorb
//! every outside vertex with at least `d - 1` neighbours inside until nothing
//! moves. On a cycle of a `d`-regular graph with `d ∈ {3, 4}` every member has
//! two neighbours inside, which is `⌈d/2⌉`, so the seed is self-satisfied and
//! [`absorption_closure`](super::absorption_closure) applies: `≥ d - 1` is
//! exactly a strict majority for these degrees.
//!
//! A girth cycle is induced, so a seed of length `L` starts with `(d - 2)·L`
//! edges leaving it, and every absorbed vertex removes at least `d - 2` of
//! them. At most `L` vertices are absorbed, and a seed with `2L < |V|` never
//! closes over the whole graph: the girth cycle is the only seed needed.

use super::closure_partition;
use crate::classify::shortest_cycle;
use crate::graph::Graph;
use crate::partition::{UnresolvedReason, Verdict};

pub fn partition(g: &Graph, degree: usize) -> Verdict {
    let n = g.vertex_count();
    let Some(seed) = shortest_cycle(g).filter(|c| 2 * c.len() < n) else {
        log::debug!("{degree}-regular graph on {n} vertices has no cycle shorter than half");
        return Verdict::Unresolved(UnresolvedReason::NoShortSeedCycle);
    };
    log::trace!("{degree}-regular seed: girth cycle {:?}", seed.vertices());
    match closure_partition(g, seed.vertices().iter().copied()) {
        Some(p) => Verdict::PartitionFound(p),
        None => {
            log::warn!(
                "closure of girth cycle {:?} left no second part",
                seed.vertices()
            );
            Verdict::Unresolved(UnresolvedReason::CertificationFailed)
        }
    }
}
