//! Structural classification of graphs.
//!
//! Pure queries over a [`Graph`]: connectivity, completeness, tree shape,
//! degree bounds and regularity, cycle discovery and isomorphism. The
//! [`GraphFacts`] snapshot gathers everything the solver's rule table needs in
//! one pass, so no predicate is evaluated twice for the same graph.

pub mod connectivity;
pub mod cycles;
pub mod degree;
pub mod isomorphism;
pub mod tree;

pub use connectivity::{connected_components, disconnected_components, is_connected, is_forest};
pub use cycles::{
    Cycle, CycleSearch, CycleWalk, SearchLimits, cycle_basis, find_cycle,
    find_induced_cycle_if_whole_graph, shortest_cycle, simple_cycles_bounded, simple_cycles_up_to,
    walk_simple_cycles,
};
pub use degree::{
    DegreeBounds, degree_bounds, is_complete, is_regular_degree, max_degree, min_degree,
    regular_degree,
};
pub use isomorphism::{find_isomorphism, is_isomorphic};
pub use tree::{TreeShape, classify_tree};

use crate::graph::{Graph, VertexId};
use crate::oracle::{ReferenceGraph, exceptional_match};
use serde::Serialize;
use std::fmt;

/// Structural class a graph was dispatched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Classification {
    /// No vertices.
    Empty,
    SingleVertex,
    Disconnected,
    Complete,
    Star,
    NonStarTree,
    /// One spanning cycle longer than four.
    LongCycle,
    /// Isomorphic to K4, K3,3 or K5.
    Exceptional(ReferenceGraph),
    /// 3-regular, not exceptional, large enough for the regular construction.
    Regular3,
    /// 4-regular, not exceptional, large enough for the regular construction.
    Regular4,
    /// Maximum degree at most four.
    BoundedDegree,
    Unclassified,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Empty => f.write_str("empty"),
            Classification::SingleVertex => f.write_str("single vertex"),
            Classification::Disconnected => f.write_str("disconnected"),
            Classification::Complete => f.write_str("complete"),
            Classification::Star => f.write_str("star"),
            Classification::NonStarTree => f.write_str("non-star tree"),
            Classification::LongCycle => f.write_str("long cycle"),
            Classification::Exceptional(r) => write!(f, "exceptional ({r})"),
            Classification::Regular3 => f.write_str("3-regular"),
            Classification::Regular4 => f.write_str("4-regular"),
            Classification::BoundedDegree => f.write_str("max degree <= 4"),
            Classification::Unclassified => f.write_str("unclassified"),
        }
    }
}

/// Structural facts about one graph snapshot.
///
/// Computed fresh for every query; never reused after the graph changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphFacts {
    pub vertex_count: usize,
    pub edge_count: usize,
    /// `None` for the empty graph.
    pub degrees: Option<DegreeBounds>,
    /// Connected components, ordered by smallest vertex.
    pub components: Vec<Vec<VertexId>>,
    pub complete: bool,
    pub tree: TreeShape,
    /// Set when the graph is exactly one spanning simple cycle.
    pub spanning_cycle: Option<Cycle>,
    pub regular_degree: Option<usize>,
    pub exceptional: Option<ReferenceGraph>,
}

impl GraphFacts {
    pub fn compute(g: &Graph) -> Self {
        let components = connected_components(g);
        let connected = components.len() <= 1;
        let degrees = degree_bounds(g);
        let regular = degrees.and_then(|b| (b.min == b.max).then_some(b.min));
        // every reference graph is 3- or 4-regular
        let exceptional = match regular {
            Some(3 | 4) => exceptional_match(g),
            _ => None,
        };
        Self {
            vertex_count: g.vertex_count(),
            edge_count: g.edge_count(),
            degrees,
            complete: is_complete(g),
            tree: tree::tree_shape(g, connected),
            spanning_cycle: if connected {
                find_induced_cycle_if_whole_graph(g)
            } else {
                None
            },
            regular_degree: regular,
            exceptional,
            components,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.components.len() <= 1
    }

    pub fn max_degree(&self) -> usize {
        self.degrees.map_or(0, |b| b.max)
    }

    pub fn min_degree(&self) -> usize {
        self.degrees.map_or(0, |b| b.min)
    }
}

/// Classify `g` with the default solver configuration.
///
/// This is the tag the [`Solver`](crate::solver::Solver) dispatches on.
pub fn classify(g: &Graph) -> Classification {
    crate::solver::Solver::default().classify(g)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facts_of_a_five_cycle() {
        let g = Graph::from_edges(5, (0..5).map(|i| (i, (i + 1) % 5))).unwrap();
        let facts = GraphFacts::compute(&g);
        assert!(facts.is_connected());
        assert_eq!(facts.regular_degree, Some(2));
        assert_eq!(facts.tree, TreeShape::NotATree);
        assert_eq!(facts.spanning_cycle.as_ref().map(Cycle::len), Some(5));
        assert_eq!(facts.exceptional, None);
        assert!(!facts.complete);
    }

    #[test]
    fn facts_of_the_empty_graph() {
        let facts = GraphFacts::compute(&Graph::new(0));
        assert_eq!(facts.degrees, None);
        assert_eq!(facts.max_degree(), 0);
        assert!(facts.components.is_empty());
        assert_eq!(facts.tree, TreeShape::NotATree);
    }

    #[test]
    fn display_names() {
        assert_eq!(
            Classification::Exceptional(ReferenceGraph::K33).to_string(),
            "exceptional (K3,3)"
        );
        assert_eq!(Classification::BoundedDegree.to_string(), "max degree <= 4");
    }
}
