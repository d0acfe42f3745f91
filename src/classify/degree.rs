//! Degree-based predicates.

use crate::graph::Graph;
use serde::Serialize;

/// Smallest and largest vertex degree of a non-empty graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DegreeBounds {
    pub min: usize,
    pub max: usize,
}

/// Degree bounds, or `None` for the empty graph.
pub fn degree_bounds(g: &Graph) -> Option<DegreeBounds> {
    let mut degrees = g.vertices().map(|v| g.degree(v));
    let first = degrees.next()?;
    Some(degrees.fold(DegreeBounds { min: first, max: first }, |b, d| DegreeBounds {
        min: b.min.min(d),
        max: b.max.max(d),
    }))
}

/// Largest vertex degree (0 for the empty graph).
pub fn max_degree(g: &Graph) -> usize {
    degree_bounds(g).map_or(0, |b| b.max)
}

/// Smallest vertex degree (0 for the empty graph).
pub fn min_degree(g: &Graph) -> usize {
    degree_bounds(g).map_or(0, |b| b.min)
}

/// `true` iff `g` is non-empty and every vertex has degree exactly `d`.
pub fn is_regular_degree(g: &Graph, d: usize) -> bool {
    regular_degree(g) == Some(d)
}

/// The common degree of a regular, non-empty graph.
pub fn regular_degree(g: &Graph) -> Option<usize> {
    degree_bounds(g).and_then(|b| (b.min == b.max).then_some(b.min))
}

/// `true` iff every pair of distinct vertices is adjacent (and `g` is non-empty).
pub fn is_complete(g: &Graph) -> bool {
    let n = g.vertex_count();
    n > 0 && g.edge_count() == n * (n - 1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn k(n: usize) -> Graph {
        let edges = (0..n).flat_map(|u| (u + 1..n).map(move |v| (u, v)));
        Graph::from_edges(n, edges).unwrap()
    }

    #[test]
    fn complete_graphs() {
        assert!(is_complete(&k(1)));
        assert!(is_complete(&k(5)));
        assert!(!is_complete(&Graph::new(0)));
        assert!(!is_complete(&Graph::from_edges(3, [(0, 1), (1, 2)]).unwrap()));
    }

    #[test]
    fn regularity() {
        assert!(is_regular_degree(&k(4), 3));
        assert!(!is_regular_degree(&k(4), 4));
        assert!(!is_regular_degree(&Graph::new(0), 0));
        assert_eq!(regular_degree(&Graph::new(3)), Some(0));
    }

    #[test]
    fn bounds_of_a_path() {
        let g = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap();
        assert_eq!(degree_bounds(&g), Some(DegreeBounds { min: 1, max: 2 }));
        assert_eq!(max_degree(&g), 2);
        assert_eq!(min_degree(&g), 1);
        assert_eq!(max_degree(&Graph::new(0)), 0);
    }
}
