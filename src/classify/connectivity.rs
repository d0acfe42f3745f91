//! Connectivity queries: components, disconnection, forests.

use crate::graph::{Graph, UndirectedGraph, VertexId};
use std::collections::VecDeque;

/// Connected components of `g`, ordered by their smallest vertex, each sorted.
pub fn connected_components<G: UndirectedGraph>(g: &G) -> Vec<Vec<VertexId>> {
    let mut seen = vec![false; g.vertex_bound()];
    let mut components = Vec::new();
    let mut queue = VecDeque::new();
    for root in g.vertices() {
        if seen[root] {
            continue;
        }
        seen[root] = true;
        queue.push_back(root);
        let mut component = Vec::new();
        while let Some(u) = queue.pop_front() {
            component.push(u);
            for w in g.neighbors(u) {
                if !seen[w] {
                    seen[w] = true;
                    queue.push_back(w);
                }
            }
        }
        component.sort_unstable();
        components.push(component);
    }
    components
}

/// `true` when `g` has at most one component.
pub fn is_connected<G: UndirectedGraph>(g: &G) -> bool {
    connected_components(g).len() <= 1
}

/// All components of `g` when there are at least two, `None` when `g` is connected.
pub fn disconnected_components(g: &Graph) -> Option<Vec<Vec<VertexId>>> {
    let components = connected_components(g);
    (components.len() >= 2).then_some(components)
}

/// `true` when `g` has no cycle (parallel edges count as a cycle).
pub fn is_forest<G: UndirectedGraph>(g: &G) -> bool {
    g.edge_count() + connected_components(g).len() == g.vertex_count()
}
