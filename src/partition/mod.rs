//! Partition model and result surface.
//!
//! [`SatisfactoryPartition`] can only be obtained through
//! [`SatisfactoryPartition::certify`], which checks the split against the
//! graph; holding one means every vertex has at least as many neighbours on its
//! own side as across the cut. [`Verdict`] and [`Resolution`] are what the
//! [`Solver`](crate::solver::Solver) returns.

pub mod error;
pub mod metrics;

pub use error::PartitionError;
pub use metrics::{edge_cut, satisfaction_margin, side_counts, side_sizes};

use crate::classify::Classification;
use crate::graph::{Graph, VertexId};
use crate::oracle::ReferenceGraph;
use serde::Serialize;
use std::fmt;

/// The part a vertex belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// A validated two-way satisfactory partition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SatisfactoryPartition {
    first: Vec<VertexId>,
    second: Vec<VertexId>,
    #[serde(skip)]
    side: Vec<Side>,
}

impl SatisfactoryPartition {
    /// Split `g` into `first` and its complement, and check the result.
    ///
    /// Repeated ids in `first` are ignored. Fails when either side is empty,
    /// an id is not a vertex of `g`, or some vertex is outnumbered across the cut.
    pub fn certify<I>(g: &Graph, first: I) -> Result<Self, PartitionError>
    where
        I: IntoIterator<Item = VertexId>,
    {
        let mut side = vec![Side::Second; g.vertex_count()];
        for v in first {
            *side.get_mut(v).ok_or(PartitionError::VertexNotFound(v))? = Side::First;
        }
        Self::from_sides(g, side)
    }

    /// Check an explicit pair of sides.
    ///
    /// Unlike [`certify`](Self::certify) both parts are given, so overlap and
    /// coverage are checked as well.
    pub fn certify_pair<A, B>(g: &Graph, first: A, second: B) -> Result<Self, PartitionError>
    where
        A: IntoIterator<Item = VertexId>,
        B: IntoIterator<Item = VertexId>,
    {
        let mut side: Vec<Option<Side>> = vec![None; g.vertex_count()];
        for (part, ids) in [
            (Side::First, first.into_iter().collect::<Vec<_>>()),
            (Side::Second, second.into_iter().collect()),
        ] {
            for v in ids {
                let slot = side.get_mut(v).ok_or(PartitionError::VertexNotFound(v))?;
                match *slot {
                    Some(s) if s != part => return Err(PartitionError::Overlap(v)),
                    _ => *slot = Some(part),
                }
            }
        }
        let side = side
            .into_iter()
            .enumerate()
            .map(|(v, s)| s.ok_or(PartitionError::VertexNotFound(v)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_sides(g, side)
    }

    fn from_sides(g: &Graph, side: Vec<Side>) -> Result<Self, PartitionError> {
        let (first, second): (Vec<VertexId>, Vec<VertexId>) =
            g.vertices().partition(|&v| side[v] == Side::First);
        if first.is_empty() || second.is_empty() {
            return Err(PartitionError::EmptySide);
        }
        for v in g.vertices() {
            let same = g
                .neighbors(v)
                .iter()
                .filter(|&&w| side[w] == side[v])
                .count();
            let cross = g.degree(v) - same;
            if same < cross {
                return Err(PartitionError::Unsatisfied {
                    vertex: v,
                    same,
                    cross,
                });
            }
        }
        Ok(Self {
            first,
            second,
            side,
        })
    }

    /// Sorted vertices of the first part.
    pub fn first(&self) -> &[VertexId] {
        &self.first
    }

    /// Sorted vertices of the second part.
    pub fn second(&self) -> &[VertexId] {
        &self.second
    }

    pub fn side(&self, side: Side) -> &[VertexId] {
        match side {
            Side::First => &self.first,
            Side::Second => &self.second,
        }
    }

    /// Which part `v` is in; `None` if `v` is not a vertex of the graph.
    #[inline]
    pub fn side_of(&self, v: VertexId) -> Option<Side> {
        self.side.get(v).copied()
    }

    /// Total number of vertices covered.
    pub fn vertex_count(&self) -> usize {
        self.side.len()
    }

    pub fn into_parts(self) -> (Vec<VertexId>, Vec<VertexId>) {
        (self.first, self.second)
    }
}

/// Why a graph provably has no satisfactory partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NoneReason {
    /// Fewer than two vertices.
    TooFewVertices,
    Complete,
    Star,
    Exceptional(ReferenceGraph),
    /// Min degree ≥ 3, max degree ≤ 4, and no two vertex-disjoint cycles.
    NoDisjointCycles,
    /// The edge-augmentation search was exhausted.
    NoAugmentedDisjointCycles,
}

/// Why no answer could be given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnresolvedReason {
    /// Outside every handled class.
    MaxDegreeAbove4 { max_degree: usize },
    /// The regular construction found no usable seed cycle.
    NoShortSeedCycle,
    /// A bounded search hit its cap before finishing.
    SearchTruncated,
    /// A direct construction did not validate against the graph.
    CertificationFailed,
}

/// Outcome of a solve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Verdict {
    PartitionFound(SatisfactoryPartition),
    ProvablyNone(NoneReason),
    Unresolved(UnresolvedReason),
    /// The graph has no vertices.
    Vacuous,
}

impl Verdict {
    pub fn partition(&self) -> Option<&SatisfactoryPartition> {
        match self {
            Verdict::PartitionFound(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Verdict::PartitionFound(_))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Verdict::ProvablyNone(_))
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, Verdict::Unresolved(_))
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::PartitionFound(p) => write!(
                f,
                "partition found ({} | {})",
                p.first().len(),
                p.second().len()
            ),
            Verdict::ProvablyNone(r) => write!(f, "no partition: {r:?}"),
            Verdict::Unresolved(r) => write!(f, "unresolved: {r:?}"),
            Verdict::Vacuous => f.write_str("vacuous"),
        }
    }
}

/// Classification tag plus verdict for one graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub classification: Classification,
    pub verdict: Verdict,
}
