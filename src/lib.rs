//! # sat-partition
//!
//! sat-partition decides whether a simple undirected graph admits a
//! *satisfactory partition*: a split of the vertices into two non-empty parts
//! where every vertex has at least as many neighbours in its own part as in the
//! other one. When a known structural construction applies it returns the
//! partition itself.
//!
//! ## Features
//! - Structural classification (connectivity, completeness, trees, single
//!   cycles, regularity, K4/K3,3/K5 recognition) computed in one pass
//! - One strategy per class: component split, tree cluster, cycle split,
//!   regular-graph cycle absorption and a bounded-degree disjoint-cycle search
//! - Every returned partition is validated against the graph before it leaves
//!   the crate
//! - Line-based edge-list reader and writer
//!
//! ## Outcomes
//!
//! A solve returns a [`Resolution`](partition::Resolution): the class the graph
//! was dispatched on and a [`Verdict`](partition::Verdict), one of
//! `PartitionFound`, `ProvablyNone`, `Unresolved` or `Vacuous` (empty graph).
//! `Unresolved` is an answer, not an error; it is returned for graphs outside
//! the handled classes and when a bounded search hits its cap.
//!
//! ## Determinism
//!
//! Adjacency lists are sorted and no search depends on hash order, so solving
//! the same graph twice yields the same classification and the same partition.
//!
//! ## Usage
//!
//! ```
//! use sat_partition::prelude::*;
//!
//! let g = Graph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]).unwrap();
//! let r = solve(&g);
//! assert_eq!(r.classification, Classification::LongCycle);
//! let p = r.verdict.partition().unwrap();
//! assert_eq!((p.first().len(), p.second().len()), (2, 3));
//! ```

pub mod classify;
pub mod debug_invariants;
pub mod graph;
pub mod graph_error;
pub mod io;
pub mod oracle;
pub mod partition;
pub mod solver;
pub mod strategy;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::classify::{Classification, GraphFacts, classify};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::graph::{Graph, MultiGraph, UndirectedGraph, VertexId};
    pub use crate::graph_error::GraphError;
    pub use crate::io::{GraphReader, GraphWriter, parse_edge_list, write_edge_list};
    pub use crate::oracle::ReferenceGraph;
    pub use crate::partition::{
        NoneReason, PartitionError, Resolution, SatisfactoryPartition, Side, UnresolvedReason,
        Verdict,
    };
    pub use crate::solver::{Solver, SolverConfig, solve};
}
