//! Partition validation errors

use crate::graph::VertexId;
use thiserror::Error;

/// Reasons a proposed split is not a satisfactory partition.
///
/// Strategies treat these as "this construction failed"; they never reach a
/// caller as a verdict.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PartitionError {
    /// One of the two parts has no vertex.
    #[error("partition has an empty side")]
    EmptySide,
    /// A vertex was placed on both sides.
    #[error("vertex {0} appears on both sides")]
    Overlap(VertexId),
    /// A vertex of the split is not in the graph, or a graph vertex is on neither side.
    #[error("vertex {0} is missing from the graph or from both sides")]
    VertexNotFound(VertexId),
    /// A vertex has more neighbours across the cut than on its own side.
    #[error("vertex {vertex} has {same} neighbours on its side but {cross} across")]
    Unsatisfied {
        vertex: VertexId,
        same: usize,
        cross: usize,
    },
}
