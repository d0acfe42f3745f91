// Graph trait abstraction for classification and cycle search
use super::VertexId;

/// Read-only view of an undirected graph.
///
/// Implemented by the simple [`Graph`](super::Graph) and by the transient
/// [`MultiGraph`](super::MultiGraph) used during edge augmentation, so that
/// connectivity, cycle search and isomorphism are written once.
///
/// Vertex ids are dense in `0..vertex_bound()`, but a [`MultiGraph`](super::MultiGraph)
/// may have removed some of them; `vertices()` only yields the present ones.
/// Every iterator is deterministic: same graph, same order.
pub trait UndirectedGraph {
    /// Exclusive upper bound on vertex ids.
    fn vertex_bound(&self) -> usize;

    /// Whether `v` is a present vertex.
    fn contains_vertex(&self, v: VertexId) -> bool;

    /// Iterator over all present vertices in increasing order.
    fn vertices(&self) -> impl Iterator<Item = VertexId> + '_;

    /// Iterator over the neighbours of `v`, in increasing order.
    ///
    /// A neighbour joined by `k` parallel edges is yielded `k` times.
    fn neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_;

    /// Degree of a vertex (number of incident edge ends).
    fn degree(&self, v: VertexId) -> usize;

    /// Number of present vertices.
    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }

    /// Iterator over all undirected edges (u, v) with u < v.
    ///
    /// Parallel edges are yielded once per copy.
    fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.vertices().flat_map(move |u| {
            self.neighbors(u)
                .filter(move |&v| u < v)
                .map(move |v| (u, v))
        })
    }

    /// Number of undirected edges, counting parallel copies.
    fn edge_count(&self) -> usize {
        self.edges().count()
    }
}
