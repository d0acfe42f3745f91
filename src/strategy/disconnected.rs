//! Split a disconnected graph along its components.

use crate::graph::{Graph, VertexId};
use crate::partition::{NoneReason, SatisfactoryPartition, UnresolvedReason, Verdict};

/// First component (the one holding the smallest vertex) against the rest.
///
/// No edge crosses between components, so every vertex keeps all of its
/// neighbours on its own side.
pub fn partition(g: &Graph, components: &[Vec<VertexId>]) -> Verdict {
    let Some(first) = components.first() else {
        return Verdict::ProvablyNone(NoneReason::TooFewVertices);
    };
    log::trace!(
        "splitting {} components; first has {} vertices",
        components.len(),
        first.len()
    );
    match SatisfactoryPartition::certify(g, first.iter().copied()) {
        Ok(p) => Verdict::PartitionFound(p),
        Err(e) => {
            log::warn!("component split rejected: {e}");
            Verdict::Unresolved(UnresolvedReason::CertificationFailed)
        }
    }
}
