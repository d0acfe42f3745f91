//! In-memory graph model.
//!
//! [`Graph`] is the simple undirected graph every query runs against: vertices
//! are the dense ids `0..n`, edges are unordered pairs without self-loops or
//! parallel copies. Adjacency lists are kept sorted, so every traversal built on
//! top of it is deterministic.
//!
//! [`MultiGraph`] is the working copy the augmentation search mutates; it may
//! carry parallel edges and removed vertices and is never handed back to callers.

pub mod multigraph;
pub mod traits;

pub use multigraph::MultiGraph;
pub use traits::UndirectedGraph;

use crate::debug_invariants::DebugInvariants;
use crate::graph_error::GraphError;
use std::ops::Range;

/// Vertex identifier.
pub type VertexId = usize;

/// Simple undirected graph over the vertex ids `0..n`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adj: Vec<Vec<VertexId>>,
    edge_count: usize,
}

impl Graph {
    /// Graph with `n` isolated vertices.
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![Vec::new(); n],
            edge_count: 0,
        }
    }

    /// Build a graph on `n` vertices from an edge list.
    ///
    /// Fails with [`GraphError::InvalidInput`] on an endpoint outside `0..n`,
    /// a self-loop or a repeated edge; the list is never silently repaired.
    pub fn from_edges<I>(n: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (VertexId, VertexId)>,
    {
        let mut g = Graph::new(n);
        for (i, (u, v)) in edges.into_iter().enumerate() {
            if u >= n || v >= n {
                return Err(GraphError::invalid(format!(
                    "edge #{i} ({u}, {v}) references a vertex outside 0..{n}"
                )));
            }
            if !g.add_edge(u, v)? {
                return Err(GraphError::invalid(format!(
                    "edge #{i} ({u}, {v}) is listed twice"
                )));
            }
        }
        g.debug_assert_invariants();
        Ok(g)
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of undirected edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// `true` when the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// All vertex ids.
    #[inline]
    pub fn vertices(&self) -> Range<VertexId> {
        0..self.adj.len()
    }

    #[inline]
    pub fn contains(&self, v: VertexId) -> bool {
        v < self.adj.len()
    }

    /// Sorted neighbours of `v`.
    ///
    /// # Panics
    /// Panics if `v` is not a vertex; use [`Graph::try_neighbors`] for a checked lookup.
    #[inline]
    pub fn neighbors(&self, v: VertexId) -> &[VertexId] {
        &self.adj[v]
    }

    /// Sorted neighbours of `v`, or [`GraphError::InvalidVertex`].
    pub fn try_neighbors(&self, v: VertexId) -> Result<&[VertexId], GraphError> {
        self.adj
            .get(v)
            .map(Vec::as_slice)
            .ok_or(GraphError::InvalidVertex(v))
    }

    /// Degree of `v`.
    ///
    /// # Panics
    /// Panics if `v` is not a vertex.
    #[inline]
    pub fn degree(&self, v: VertexId) -> usize {
        self.adj[v].len()
    }

    pub fn try_degree(&self, v: VertexId) -> Result<usize, GraphError> {
        self.try_neighbors(v).map(<[VertexId]>::len)
    }

    /// Whether `u` and `v` are adjacent. Absent vertices are never adjacent.
    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.adj
            .get(u)
            .is_some_and(|ns| ns.binary_search(&v).is_ok())
    }

    /// Insert the edge `{u, v}`. Returns `false` if it was already present.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<bool, GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(GraphError::invalid(format!("self-loop on vertex {u}")));
        }
        let pos_u = match self.adj[u].binary_search(&v) {
            Ok(_) => return Ok(false),
            Err(pos) => pos,
        };
        self.adj[u].insert(pos_u, v);
        let pos_v = self.adj[v].binary_search(&u).unwrap_or_else(|p| p);
        self.adj[v].insert(pos_v, u);
        self.edge_count += 1;
        Ok(true)
    }

    /// Remove the edge `{u, v}`. Returns `false` if it was not present.
    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) -> Result<bool, GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        let Ok(pos_u) = self.adj[u].binary_search(&v) else {
            return Ok(false);
        };
        self.adj[u].remove(pos_u);
        if let Ok(pos_v) = self.adj[v].binary_search(&u) {
            self.adj[v].remove(pos_v);
        }
        self.edge_count -= 1;
        Ok(true)
    }

    /// Each undirected edge once, as `(u, v)` with `u < v`, in lexicographic order.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.adj.iter().enumerate().flat_map(|(u, ns)| {
            ns.iter()
                .copied()
                .filter(move |&v| u < v)
                .map(move |v| (u, v))
        })
    }

    /// Degree of every vertex, indexed by vertex id.
    pub fn degrees(&self) -> Vec<usize> {
        self.adj.iter().map(Vec::len).collect()
    }

    /// Connected components, ordered by their smallest vertex, each sorted.
    pub fn connected_components(&self) -> Vec<Vec<VertexId>> {
        crate::classify::connectivity::connected_components(self)
    }

    /// Private multigraph copy of this graph with `removed` vertices dropped.
    pub fn induced_without<I>(&self, removed: I) -> MultiGraph
    where
        I: IntoIterator<Item = VertexId>,
    {
        let mut h = MultiGraph::from(self);
        for v in removed {
            // ids come from this graph, so removal cannot fail
            let _ = h.remove_vertex(v);
        }
        h.debug_assert_invariants();
        h
    }

    fn check_vertex(&self, v: VertexId) -> Result<(), GraphError> {
        if self.contains(v) {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex(v))
        }
    }
}

impl UndirectedGraph for Graph {
    fn vertex_bound(&self) -> usize {
        self.adj.len()
    }
    fn contains_vertex(&self, v: VertexId) -> bool {
        self.contains(v)
    }
    fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        0..self.adj.len()
    }
    fn neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.adj[v].iter().copied()
    }
    fn degree(&self, v: VertexId) -> usize {
        self.adj[v].len()
    }
    fn vertex_count(&self) -> usize {
        self.adj.len()
    }
    fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl DebugInvariants for Graph {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Graph");
    }

    fn validate_invariants(&self) -> Result<(), GraphError> {
        let mut ends = 0usize;
        for (u, ns) in self.adj.iter().enumerate() {
            for w in ns.windows(2) {
                if w[0] >= w[1] {
                    return Err(GraphError::invalid(format!(
                        "adjacency of {u} is unsorted or repeats {}",
                        w[1]
                    )));
                }
            }
            for &v in ns {
                if v == u {
                    return Err(GraphError::invalid(format!("self-loop on vertex {u}")));
                }
                if v >= self.adj.len() {
                    return Err(GraphError::InvalidVertex(v));
                }
                if self.adj[v].binary_search(&u).is_err() {
                    return Err(GraphError::invalid(format!(
                        "edge ({u}, {v}) is missing its reverse entry"
                    )));
                }
            }
            ends += ns.len();
        }
        if ends != 2 * self.edge_count {
            return Err(GraphError::invalid(format!(
                "edge count {} disagrees with {ends} adjacency entries",
                self.edge_count
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_edges_sorts_adjacency() {
        let g = Graph::from_edges(4, [(2, 0), (0, 1), (3, 0)]).unwrap();
        assert_eq!(g.neighbors(0), &[1, 2, 3]);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.edges().collect::<Vec<_>>(), vec![(0, 1), (0, 2), (0, 3)]);
        assert!(g.validate_invariants().is_ok());
    }

    #[test]
    fn from_edges_rejects_bad_lists() {
        assert!(matches!(
            Graph::from_edges(3, [(0, 3)]),
            Err(GraphError::InvalidInput { .. })
        ));
        assert!(matches!(
            Graph::from_edges(3, [(1, 1)]),
            Err(GraphError::InvalidInput { .. })
        ));
        assert!(matches!(
            Graph::from_edges(3, [(0, 1), (1, 0)]),
            Err(GraphError::InvalidInput { .. })
        ));
    }

    #[test]
    fn absent_vertex_queries_fail() {
        let g = Graph::new(2);
        assert_eq!(g.try_neighbors(2), Err(GraphError::InvalidVertex(2)));
        assert_eq!(g.try_degree(5), Err(GraphError::InvalidVertex(5)));
        assert!(!g.has_edge(0, 7));
    }

    #[test]
    fn add_and_remove_edge() {
        let mut g = Graph::new(3);
        assert_eq!(g.add_edge(0, 2), Ok(true));
        assert_eq!(g.add_edge(2, 0), Ok(false));
        assert!(g.has_edge(2, 0));
        assert_eq!(g.degree(2), 1);
        assert_eq!(g.remove_edge(0, 2), Ok(true));
        assert_eq!(g.remove_edge(0, 2), Ok(false));
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.add_edge(0, 9), Err(GraphError::InvalidVertex(9)));
    }

    #[test]
    fn long_edge_list_builds_quickly() {
        let n = 100_000;
        let start = std::time::Instant::now();
        let g = Graph::from_edges(n, (1..n).map(|i| (i - 1, i))).unwrap();
        assert!(start.elapsed() < std::time::Duration::from_secs(5));
        assert_eq!(g.edge_count(), n - 1);
        assert!(g.validate_invariants().is_ok());
    }

    #[test]
    fn components_are_ordered() {
        let g = Graph::from_edges(6, [(4, 5), (0, 3), (1, 2)]).unwrap();
        assert_eq!(
            g.connected_components(),
            vec![vec![0, 3], vec![1, 2], vec![4, 5]]
        );
    }

    #[test]
    fn induced_copy_leaves_original_untouched() {
        let g = Graph::from_edges(3, [(0, 1), (1, 2), (0, 2)]).unwrap();
        let h = g.induced_without([1]);
        assert_eq!(UndirectedGraph::edge_count(&h), 1);
        assert_eq!(g.edge_count(), 3);
    }
}
