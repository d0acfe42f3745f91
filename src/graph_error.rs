//! GraphError: Unified error type for sat-partition public APIs
//!
//! Raised when a graph description cannot be turned into a [`Graph`](crate::graph::Graph)
//! or when a query names a vertex the graph does not hold. Search outcomes such as
//! "no partition exists" are *not* errors; they are [`Verdict`](crate::partition::Verdict)s.

use crate::graph::VertexId;
use thiserror::Error;

/// Unified error type for graph construction and queries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Malformed graph description or inconsistent construction request.
    ///
    /// `line` is 1-based for text input and 0 when the input was not line oriented.
    #[error("invalid input at line {line}: {reason}")]
    InvalidInput { line: usize, reason: String },
    /// A query or mutation referenced a vertex id outside the vertex set.
    #[error("vertex {0} is not present in the graph")]
    InvalidVertex(VertexId),
    /// Underlying reader or writer failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl GraphError {
    /// Shorthand for an [`GraphError::InvalidInput`] not tied to a source line.
    pub fn invalid(reason: impl Into<String>) -> Self {
        GraphError::InvalidInput {
            line: 0,
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for GraphError {
    fn from(e: std::io::Error) -> Self {
        GraphError::Io(e.to_string())
    }
}
