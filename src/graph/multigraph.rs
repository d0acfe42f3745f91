//! Transient multigraph used by the edge-augmentation search.
//!
//! A `MultiGraph` is always a private copy of a [`Graph`]: the search inserts
//! trial edges (possibly parallel to existing ones), removes vertices of a
//! seed cycle, and drops the whole copy when it returns.

use super::{Graph, UndirectedGraph, VertexId};
use crate::debug_invariants::DebugInvariants;
use crate::graph_error::GraphError;

/// Undirected multigraph with removable vertices. Self-loops are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiGraph {
    adj: Vec<Vec<VertexId>>,
    present: Vec<bool>,
    edge_count: usize,
}

impl From<&Graph> for MultiGraph {
    fn from(g: &Graph) -> Self {
        Self {
            adj: g.vertices().map(|v| g.neighbors(v).to_vec()).collect(),
            present: vec![true; g.vertex_count()],
            edge_count: g.edge_count(),
        }
    }
}

impl MultiGraph {
    /// Insert one more copy of the edge `{u, v}`.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<(), GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(GraphError::invalid(format!("self-loop on vertex {u}")));
        }
        let pos = self.adj[u].partition_point(|&x| x <= v);
        self.adj[u].insert(pos, v);
        let pos = self.adj[v].partition_point(|&x| x <= u);
        self.adj[v].insert(pos, u);
        self.edge_count += 1;
        Ok(())
    }

    /// Remove one copy of `{u, v}`. Returns `false` if no copy was present.
    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) -> bool {
        if !self.contains_vertex(u) || !self.contains_vertex(v) {
            return false;
        }
        let Ok(pos_u) = self.adj[u].binary_search(&v) else {
            return false;
        };
        self.adj[u].remove(pos_u);
        if let Ok(pos_v) = self.adj[v].binary_search(&u) {
            self.adj[v].remove(pos_v);
        }
        self.edge_count -= 1;
        true
    }

    /// Remove `v` together with all incident edges.
    pub fn remove_vertex(&mut self, v: VertexId) -> Result<(), GraphError> {
        self.check_vertex(v)?;
        let incident = std::mem::take(&mut self.adj[v]);
        for &w in &incident {
            if let Ok(pos) = self.adj[w].binary_search(&v) {
                self.adj[w].remove(pos);
            }
        }
        self.edge_count -= incident.len();
        self.present[v] = false;
        Ok(())
    }

    /// Number of parallel copies of `{u, v}`.
    pub fn multiplicity(&self, u: VertexId, v: VertexId) -> usize {
        if !self.contains_vertex(u) {
            return 0;
        }
        self.adj[u].iter().filter(|&&x| x == v).count()
    }

    fn check_vertex(&self, v: VertexId) -> Result<(), GraphError> {
        if self.contains_vertex(v) {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex(v))
        }
    }
}

impl UndirectedGraph for MultiGraph {
    fn vertex_bound(&self) -> usize {
        self.adj.len()
    }
    fn contains_vertex(&self, v: VertexId) -> bool {
        self.present.get(v).copied().unwrap_or(false)
    }
    fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.present
            .iter()
            .enumerate()
            .filter_map(|(v, &alive)| alive.then_some(v))
    }
    fn neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.adj[v].iter().copied()
    }
    fn degree(&self, v: VertexId) -> usize {
        self.adj[v].len()
    }
    fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl DebugInvariants for MultiGraph {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "MultiGraph");
    }

    fn validate_invariants(&self) -> Result<(), GraphError> {
        let mut ends = 0usize;
        for (u, ns) in self.adj.iter().enumerate() {
            if !self.present[u] && !ns.is_empty() {
                return Err(GraphError::invalid(format!(
                    "removed vertex {u} still has incident edges"
                )));
            }
            for &v in ns {
                if v == u || !self.contains_vertex(v) {
                    return Err(GraphError::InvalidVertex(v));
                }
                if self.multiplicity(u, v) != self.multiplicity(v, u) {
                    return Err(GraphError::invalid(format!(
                        "multiplicity of ({u}, {v}) is not symmetric"
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
