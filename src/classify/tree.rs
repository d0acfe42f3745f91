//! Tree and star recognition.

use super::connectivity::is_connected;
use crate::graph::{Graph, VertexId};
use serde::Serialize;

/// Result of [`classify_tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TreeShape {
    NotATree,
    /// A tree with one vertex adjacent to all others.
    Star,
    NonStarTree,
}

/// Classify `g` as a star, a non-star tree or not a tree at all.
pub fn classify_tree(g: &Graph) -> TreeShape {
    tree_shape(g, is_connected(g))
}

/// [`classify_tree`] with connectivity already known.
pub(crate) fn tree_shape(g: &Graph, connected: bool) -> TreeShape {
    let n = g.vertex_count();
    if n == 0 || !connected || g.edge_count() != n - 1 {
        return TreeShape::NotATree;
    }
    if g.vertices().any(|v| g.degree(v) == n - 1) {
        TreeShape::Star
    } else {
        TreeShape::NonStarTree
    }
}

/// Degree-1 vertices in increasing order.
pub fn leaves(g: &Graph) -> impl Iterator<Item = VertexId> + '_ {
    g.vertices().filter(move |&v| g.degree(v) == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_and_path() {
        let star = Graph::from_edges(4, [(0, 3), (1, 3), (2, 3)]).unwrap();
        assert_eq!(classify_tree(&star), TreeShape::Star);
        let path = Graph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
        assert_eq!(classify_tree(&path), TreeShape::NonStarTree);
        assert_eq!(leaves(&path).collect::<Vec<_>>(), vec![0, 4]);
    }

    #[test]
    fn cycles_and_forests_are_not_trees() {
        let triangle = Graph::from_edges(3, [(0, 1), (1, 2), (0, 2)]).unwrap();
        assert_eq!(classify_tree(&triangle), TreeShape::NotATree);
        // |E| = |V| - 1 but disconnected: a triangle plus an isolated vertex.
        let split = Graph::from_edges(4, [(0, 1), (1, 2), (0, 2)]).unwrap();
        assert_eq!(classify_tree(&split), TreeShape::NotATree);
        assert_eq!(classify_tree(&Graph::new(0)), TreeShape::NotATree);
    }
}
