//! Exceptional-graph oracle.
//!
//! K4 and K3,3 (3-regular) and K5 (4-regular) admit no satisfactory partition
//! and are excluded from the regular-graph construction. They are stored as
//! static edge lists in the same text format the [`io`](crate::io) reader
//! accepts and parsed once per process.

use crate::classify::isomorphism::is_isomorphic;
use crate::graph::{Graph, UndirectedGraph};
use crate::io::parse_edge_list;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

const K4: &str = "4
0 1
0 2
0 3
1 2
1 3
2 3
";

const K33: &str = "6
0 3
0 4
0 5
1 3
1 4
1 5
2 3
2 4
2 5
";

const K5: &str = "5
0 1
0 2
0 3
0 4
1 2
1 3
1 4
2 3
2 4
3 4
";

fn load(name: &str, text: &str) -> Graph {
    parse_edge_list(text)
        .unwrap_or_else(|e| panic!("built-in reference graph {name} is malformed: {e}"))
}

static K4_GRAPH: Lazy<Graph> = Lazy::new(|| load("K4", K4));
static K33_GRAPH: Lazy<Graph> = Lazy::new(|| load("K3,3", K33));
static K5_GRAPH: Lazy<Graph> = Lazy::new(|| load("K5", K5));

/// The small regular graphs with no satisfactory partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceGraph {
    K4,
    K33,
    K5,
}

impl ReferenceGraph {
    pub const ALL: [ReferenceGraph; 3] = [ReferenceGraph::K4, ReferenceGraph::K33, ReferenceGraph::K5];

    /// The canonical instance of this reference graph.
    pub fn graph(self) -> &'static Graph {
        match self {
            ReferenceGraph::K4 => &*K4_GRAPH,
            ReferenceGraph::K33 => &*K33_GRAPH,
            ReferenceGraph::K5 => &*K5_GRAPH,
        }
    }

    /// Common degree of the reference graph.
    pub fn degree(self) -> usize {
        match self {
            ReferenceGraph::K4 | ReferenceGraph::K33 => 3,
            ReferenceGraph::K5 => 4,
        }
    }
}

impl fmt::Display for ReferenceGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReferenceGraph::K4 => "K4",
            ReferenceGraph::K33 => "K3,3",
            ReferenceGraph::K5 => "K5",
        })
    }
}

/// `true` when `g` is isomorphic to `reference`.
pub fn is_isomorphic_to_reference<G: UndirectedGraph>(g: &G, reference: ReferenceGraph) -> bool {
    is_isomorphic(g, reference.graph())
}

pub fn is_k4<G: UndirectedGraph>(g: &G) -> bool {
    is_isomorphic_to_reference(g, ReferenceGraph::K4)
}

pub fn is_k33<G: UndirectedGraph>(g: &G) -> bool {
    is_isomorphic_to_reference(g, ReferenceGraph::K33)
}

pub fn is_k5<G: UndirectedGraph>(g: &G) -> bool {
    is_isomorphic_to_reference(g, ReferenceGraph::K5)
}

/// The reference graph `g` is isomorphic to, if any.
pub fn exceptional_match<G: UndirectedGraph>(g: &G) -> Option<ReferenceGraph> {
    ReferenceGraph::ALL
        .into_iter()
        .find(|&r| is_isomorphic_to_reference(g, r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::degree::is_regular_degree;

    #[test]
    fn references_have_expected_shape() {
        for r in ReferenceGraph::ALL {
            assert!(is_regular_degree(r.graph(), r.degree()), "{r} is not regular");
        }
        assert_eq!(ReferenceGraph::K33.graph().edge_count(), 9);
        assert_eq!(ReferenceGraph::K5.to_string(), "K5");
    }

    #[test]
    fn relabelled_k4_matches() {
        let g = Graph::from_edges(4, [(3, 2), (3, 1), (3, 0), (2, 1), (2, 0), (1, 0)]).unwrap();
        assert!(is_k4(&g));
        assert!(!is_k5(&g));
        assert_eq!(exceptional_match(&g), Some(ReferenceGraph::K4));
    }

    #[test]
    fn cube_is_not_exceptional() {
        // 3-cube: 3-regular on 8 vertices
        let edges = (0..8usize).flat_map(|u| {
            (0..3)
                .map(move |b| (u, u ^ (1 << b)))
                .filter(|&(a, c)| a < c)
        });
        let cube = Graph::from_edges(8, edges).unwrap();
        assert_eq!(exceptional_match(&cube), None);
        assert!(!is_k33(&cube));
    }
}
