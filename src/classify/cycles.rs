//! Cycle discovery.
//!
//! - [`shortest_cycle`]: BFS from every vertex; a non-tree edge `(x, y)` closes a
//!   cycle through the lowest common ancestor of `x` and `y` in the BFS tree. The
//!   shortest such cycle over all sources is a girth cycle, returned with its
//!   vertex sequence.
//! - [`simple_cycles_up_to`] / [`simple_cycles_bounded`] / [`walk_simple_cycles`]:
//!   DFS enumeration of every simple cycle up to a length bound, each reported
//!   once. Exponential in the worst case; callers pass a length bound and
//!   [`SearchLimits`] on cycles and DFS steps.
//! - [`cycle_basis`]: fundamental cycles of a BFS spanning forest.
//! - [`find_cycle`]: any cycle of a graph or multigraph (DFS back edge).
//! - [`find_induced_cycle_if_whole_graph`]: the spanning cycle of a graph that
//!   is one simple cycle.

use crate::graph::{Graph, UndirectedGraph, VertexId};
use serde::Serialize;
use std::collections::{BTreeSet, VecDeque};
use std::ops::ControlFlow;

const UNSET: usize = usize::MAX;

/// Simple cycle `v0 … vk-1` of a graph, `k ≥ 3`.
///
/// Stored in canonical form: rotated to start at its smallest vertex and
/// oriented so that `v1 < vk-1`. Two cycles over the same edges compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cycle(Vec<VertexId>);

impl Cycle {
    /// Canonicalize a closed vertex sequence. The caller guarantees it is a cycle.
    pub(crate) fn from_sequence(mut seq: Vec<VertexId>) -> Self {
        if let Some(start) = seq
            .iter()
            .enumerate()
            .min_by_key(|&(_, v)| *v)
            .map(|(i, _)| i)
        {
            seq.rotate_left(start);
        }
        if seq.len() >= 3 && seq[1] > seq[seq.len() - 1] {
            seq[1..].reverse();
        }
        Cycle(seq)
    }

    /// Check that `seq` is a simple cycle of `g` and canonicalize it.
    pub fn new(g: &Graph, seq: Vec<VertexId>) -> Option<Self> {
        let k = seq.len();
        if k < 3 || seq.iter().any(|&v| !g.contains(v)) {
            return None;
        }
        let distinct: BTreeSet<_> = seq.iter().copied().collect();
        if distinct.len() != k {
            return None;
        }
        let closed = (0..k).all(|i| g.has_edge(seq[i], seq[(i + 1) % k]));
        closed.then(|| Cycle::from_sequence(seq))
    }

    /// Number of vertices (and edges) on the cycle.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.0
    }

    pub fn vertex_set(&self) -> BTreeSet<VertexId> {
        self.0.iter().copied().collect()
    }

    pub fn contains(&self, v: VertexId) -> bool {
        self.0.contains(&v)
    }

    /// `true` when the two cycles share no vertex.
    pub fn is_disjoint(&self, other: &Cycle) -> bool {
        self.0.iter().all(|v| !other.contains(*v))
    }
}

/// Caps on a simple-cycle enumeration; `None` leaves a dimension unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Cycles handed out before the search stops.
    pub max_cycles: Option<usize>,
    /// Path extensions (DFS steps) before the search stops.
    pub max_steps: Option<usize>,
}

/// Outcome of a capped cycle enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleSearch {
    pub cycles: Vec<Cycle>,
    /// A limit was reached; cycles beyond it were not explored.
    pub truncated: bool,
}

/// Outcome of [`walk_simple_cycles`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleWalk<B> {
    /// What the visitor stopped the walk with.
    pub found: Option<B>,
    /// Cycles handed to the visitor.
    pub visited: usize,
    /// A limit was reached before the search space was exhausted.
    pub truncated: bool,
}

/// Path from `x` and from `y` up to their common ancestor, joined into a cycle.
fn tree_cycle(parent: &[usize], depth: &[usize], x: VertexId, y: VertexId) -> Vec<VertexId> {
    let (mut a, mut b) = (x, y);
    let mut left = vec![a];
    let mut right = vec![b];
    while depth[a] > depth[b] {
        a = parent[a];
        left.push(a);
    }
    while depth[b] > depth[a] {
        b = parent[b];
        right.push(b);
    }
    while a != b {
        a = parent[a];
        left.push(a);
        b = parent[b];
        right.push(b);
    }
    // both halves end at the common ancestor
    right.pop();
    right.reverse();
    left.extend(right);
    left
}

/// A shortest cycle of `g` with its vertex sequence, or `None` if `g` is acyclic.
///
/// Ties are broken by discovery order (sources in increasing vertex order),
/// so the result is deterministic.
pub fn shortest_cycle(g: &Graph) -> Option<Cycle> {
    let n = g.vertex_count();
    let mut best: Option<Vec<VertexId>> = None;
    let mut depth = vec![UNSET; n];
    let mut parent = vec![UNSET; n];
    let mut queue = VecDeque::new();

    for s in g.vertices() {
        if best.as_ref().is_some_and(|c| c.len() == 3) {
            break;
        }
        depth.fill(UNSET);
        parent.fill(UNSET);
        depth[s] = 0;
        queue.clear();
        queue.push_back(s);
        while let Some(x) = queue.pop_front() {
            for &y in g.neighbors(x) {
                if depth[y] == UNSET {
                    depth[y] = depth[x] + 1;
                    parent[y] = x;
                    queue.push_back(y);
                } else if parent[x] != y && parent[y] != x {
                    let bound = depth[x] + depth[y] + 1;
                    if best.as_ref().is_some_and(|c| c.len() <= bound) {
                        continue;
                    }
                    let cycle = tree_cycle(&parent, &depth, x, y);
                    if best.as_ref().is_none_or(|c| cycle.len() < c.len()) {
                        best = Some(cycle);
                    }
                }
            }
        }
    }
    best.map(Cycle::from_sequence)
}

/// Every simple cycle of length `3..=bound`, each once, in canonical form.
///
/// Worst-case exponential; keep `bound` small (at most `|V| / 2` in the solver).
pub fn simple_cycles_up_to(g: &Graph, bound: usize) -> Vec<Cycle> {
    simple_cycles_bounded(g, bound, SearchLimits::default()).cycles
}

/// [`simple_cycles_up_to`] under explicit [`SearchLimits`].
pub fn simple_cycles_bounded(g: &Graph, bound: usize, limits: SearchLimits) -> CycleSearch {
    let mut cycles = Vec::new();
    let walk = walk_simple_cycles(g, bound, limits, |c| {
        cycles.push(c.clone());
        ControlFlow::<()>::Continue(())
    });
    CycleSearch {
        cycles,
        truncated: walk.truncated,
    }
}

/// Hand every simple cycle of length `3..=bound` to `visit`, in enumeration
/// order, until `visit` breaks or a limit is hit.
///
/// Cycles are produced lazily: nothing beyond the cycle `visit` stops on is
/// explored.
pub fn walk_simple_cycles<B, F>(
    g: &Graph,
    bound: usize,
    limits: SearchLimits,
    visit: F,
) -> CycleWalk<B>
where
    F: FnMut(&Cycle) -> ControlFlow<B>,
{
    let mut walk = CycleWalk {
        found: None,
        visited: 0,
        truncated: false,
    };
    if bound < 3 {
        return walk;
    }
    let mut walker = Walker {
        g,
        bound,
        limits,
        root: 0,
        path: Vec::with_capacity(bound),
        on_path: vec![false; g.vertex_count()],
        visited: 0,
        steps: 0,
        visit,
    };
    for s in g.vertices() {
        walker.root = s;
        walker.path.push(s);
        walker.on_path[s] = true;
        let flow = walker.extend();
        walker.on_path[s] = false;
        walker.path.clear();
        match flow {
            ControlFlow::Continue(()) => {}
            ControlFlow::Break(Stop::Visitor(b)) => {
                walk.found = Some(b);
                break;
            }
            ControlFlow::Break(Stop::Limit) => {
                walk.truncated = true;
                log::warn!(
                    "cycle enumeration stopped after {} cycles and {} steps (bound {bound})",
                    walker.visited,
                    walker.steps
                );
                break;
            }
        }
    }
    walk.visited = walker.visited;
    walk
}

enum Stop<B> {
    Visitor(B),
    Limit,
}

/// DFS state for [`walk_simple_cycles`]. Paths are rooted at their smallest
/// vertex and only grow through larger ones.
struct Walker<'a, F> {
    g: &'a Graph,
    bound: usize,
    limits: SearchLimits,
    root: VertexId,
    path: Vec<VertexId>,
    on_path: Vec<bool>,
    visited: usize,
    steps: usize,
    visit: F,
}

impl<F> Walker<'_, F> {
    fn extend<B>(&mut self) -> ControlFlow<Stop<B>>
    where
        F: FnMut(&Cycle) -> ControlFlow<B>,
    {
        let g = self.g;
        let last = self.path[self.path.len() - 1];
        for &w in g.neighbors(last) {
            if w == self.root {
                // orient each cycle once: second vertex smaller than the last
                if self.path.len() >= 3 && self.path[1] < last {
                    if self.limits.max_cycles.is_some_and(|l| self.visited >= l) {
                        return ControlFlow::Break(Stop::Limit);
                    }
                    self.visited += 1;
                    if let ControlFlow::Break(b) = (self.visit)(&Cycle(self.path.clone())) {
                        return ControlFlow::Break(Stop::Visitor(b));
                    }
                }
            } else if w > self.root && !self.on_path[w] && self.path.len() < self.bound {
                if self.limits.max_steps.is_some_and(|l| self.steps >= l) {
                    return ControlFlow::Break(Stop::Limit);
                }
                self.steps += 1;
                self.path.push(w);
                self.on_path[w] = true;
                let flow = self.extend();
                self.on_path[w] = false;
                self.path.pop();
                if flow.is_break() {
                    return flow;
                }
            }
        }
        ControlFlow::Continue(())
    }
}

/// Fundamental cycles of a BFS spanning forest, one per non-tree edge.
pub fn cycle_basis(g: &Graph) -> Vec<Cycle> {
    let n = g.vertex_count();
    let mut depth = vec![UNSET; n];
    let mut parent = vec![UNSET; n];
    let mut queue = VecDeque::new();
    for root in g.vertices() {
        if depth[root] != UNSET {
            continue;
        }
        depth[root] = 0;
        queue.push_back(root);
        while let Some(x) = queue.pop_front() {
            for &y in g.neighbors(x) {
                if depth[y] == UNSET {
                    depth[y] = depth[x] + 1;
                    parent[y] = x;
                    queue.push_back(y);
                }
            }
        }
    }
    g.edges()
        .filter(|&(u, v)| parent[u] != v && parent[v] != u)
        .map(|(u, v)| Cycle::from_sequence(tree_cycle(&parent, &depth, u, v)))
        .collect()
}

struct Frame {
    vertex: VertexId,
    neighbors: Vec<VertexId>,
    next: usize,
    skipped_parent: bool,
}

/// Any cycle of `g` as a vertex sequence, or `None` if `g` is a forest.
///
/// On a multigraph two parallel edges form a cycle of length 2.
pub fn find_cycle<G: UndirectedGraph>(g: &G) -> Option<Vec<VertexId>> {
    const UNSEEN: u8 = 0;
    const ACTIVE: u8 = 1;
    const DONE: u8 = 2;
    let bound = g.vertex_bound();
    let mut state = vec![UNSEEN; bound];
    let mut parent = vec![UNSET; bound];
    let mut stack: Vec<Frame> = Vec::new();

    for root in g.vertices() {
        if state[root] != UNSEEN {
            continue;
        }
        state[root] = ACTIVE;
        stack.push(Frame {
            vertex: root,
            neighbors: g.neighbors(root).collect(),
            next: 0,
            skipped_parent: false,
        });
        while let Some(frame) = stack.last_mut() {
            let x = frame.vertex;
            if frame.next == frame.neighbors.len() {
                state[x] = DONE;
                stack.pop();
                continue;
            }
            let y = frame.neighbors[frame.next];
            frame.next += 1;
            // the tree edge back to the parent is skipped once; a second copy is parallel
            if y == parent[x] && !frame.skipped_parent {
                frame.skipped_parent = true;
                continue;
            }
            match state[y] {
                UNSEEN => {
                    state[y] = ACTIVE;
                    parent[y] = x;
                    stack.push(Frame {
                        vertex: y,
                        neighbors: g.neighbors(y).collect(),
                        next: 0,
                        skipped_parent: false,
                    });
                }
                ACTIVE => {
                    let mut cycle = vec![y];
                    let mut c = x;
                    while c != y {
                        cycle.push(c);
                        c = parent[c];
                    }
                    return Some(cycle);
                }
                _ => {}
            }
        }
    }
    None
}

/// The spanning cycle of `g` when `g` is exactly one simple cycle through every
/// vertex (`|V| = |E|`, connected, 2-regular); otherwise `None`.
pub fn find_induced_cycle_if_whole_graph(g: &Graph) -> Option<Cycle> {
    let n = g.vertex_count();
    if n < 3 || g.edge_count() != n || g.vertices().any(|v| g.degree(v) != 2) {
        return None;
    }
    let mut seq = Vec::with_capacity(n);
    let (mut prev, mut cur) = (UNSET, 0);
    loop {
        seq.push(cur);
        let next = g.neighbors(cur).iter().copied().find(|&w| w != prev)?;
        prev = cur;
        cur = next;
        if cur == 0 {
            break;
        }
        if seq.len() == n {
            return None;
        }
    }
    (seq.len() == n).then(|| Cycle::from_sequence(seq))
}
