//! A graph that is one long cycle.

use crate::classify::Cycle;
use crate::graph::Graph;
use crate::partition::{SatisfactoryPartition, UnresolvedReason, Verdict};

/// Two consecutive cycle vertices against the rest.
///
/// Each of the two keeps one neighbour on its side and loses one; with five or
/// more vertices the remaining path has at least three, so its ends do the same.
pub fn partition(g: &Graph, cycle: &Cycle) -> Verdict {
    let first = cycle.vertices().iter().copied().take(2);
    match SatisfactoryPartition::certify(g, first) {
        Ok(p) => Verdict::PartitionFound(p),
        Err(e) => {
            log::warn!("cycle split rejected: {e}");
            Verdict::Unresolved(UnresolvedReason::CertificationFailed)
        }
    }
}
