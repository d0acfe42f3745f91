//! Backtracking graph isomorphism.
//!
//! Two graphs are first compared by vertex count, edge count and sorted degree
//! sequence; only then does a vertex-by-vertex search run, assigning the
//! highest-degree vertices first and checking that every assigned pair
//! preserves edge multiplicity. The search is exponential in the worst case, so
//! it is meant for the small reference graphs of the
//! [`oracle`](crate::oracle); the cheap rejections keep calls with any large
//! graph constant-time in practice.

use crate::graph::{UndirectedGraph, VertexId};
use hashbrown::HashMap;

/// Dense copy of a graph: vertex list plus multiplicity matrix.
struct Dense {
    order: Vec<VertexId>,
    degree: Vec<usize>,
    adj: Vec<Vec<u32>>,
}

impl Dense {
    fn new<G: UndirectedGraph>(g: &G) -> Self {
        let order: Vec<VertexId> = g.vertices().collect();
        let index: HashMap<VertexId, usize> =
            order.iter().enumerate().map(|(i, &v)| (v, i)).collect();
        let n = order.len();
        let mut adj = vec![vec![0u32; n]; n];
        for (i, &v) in order.iter().enumerate() {
            for w in g.neighbors(v) {
                if let Some(&j) = index.get(&w) {
                    adj[i][j] += 1;
                }
            }
        }
        let degree = order.iter().map(|&v| g.degree(v)).collect();
        Self { order, degree, adj }
    }

    fn degree_sequence(&self) -> Vec<usize> {
        let mut seq = self.degree.clone();
        seq.sort_unstable_by(|a, b| b.cmp(a));
        seq
    }
}

/// `true` when `a` and `b` are isomorphic.
pub fn is_isomorphic<A, B>(a: &A, b: &B) -> bool
where
    A: UndirectedGraph,
    B: UndirectedGraph,
{
    find_isomorphism(a, b).is_some()
}

/// A vertex bijection `a → b` preserving adjacency, as `(a_vertex, b_vertex)`
/// pairs sorted by `a_vertex`, or `None` when the graphs are not isomorphic.
pub fn find_isomorphism<A, B>(a: &A, b: &B) -> Option<Vec<(VertexId, VertexId)>>
where
    A: UndirectedGraph,
    B: UndirectedGraph,
{
    if a.vertex_count() != b.vertex_count() || a.edge_count() != b.edge_count() {
        return None;
    }
    let da = Dense::new(a);
    let db = Dense::new(b);
    if da.degree_sequence() != db.degree_sequence() {
        return None;
    }

    let n = da.order.len();
    let mut visit: Vec<usize> = (0..n).collect();
    visit.sort_by(|&x, &y| da.degree[y].cmp(&da.degree[x]).then(x.cmp(&y)));

    let mut image = vec![usize::MAX; n];
    let mut used = vec![false; n];
    if !extend(&da, &db, &visit, 0, &mut image, &mut used) {
        return None;
    }
    let mut mapping: Vec<(VertexId, VertexId)> = (0..n)
        .map(|i| (da.order[i], db.order[image[i]]))
        .collect();
    mapping.sort_unstable();
    Some(mapping)
}

fn extend(
    a: &Dense,
    b: &Dense,
    visit: &[usize],
    k: usize,
    image: &mut [usize],
    used: &mut [bool],
) -> bool {
    let Some(&i) = visit.get(k) else {
        return true;
    };
    for j in 0..b.order.len() {
        if used[j] || a.degree[i] != b.degree[j] {
            continue;
        }
        let consistent = visit[..k]
            .iter()
            .all(|&p| a.adj[i][p] == b.adj[j][image[p]])
            && a.adj[i][i] == b.adj[j][j];
        if !consistent {
            continue;
        }
        image[i] = j;
        used[j] = true;
        if extend(a, b, visit, k + 1, image, used) {
            return true;
        }
        used[j] = false;
        image[i] = usize::MAX;
    }
    false
}
