#![allow(dead_code)]
use sat_partition::prelude::*;
use std::path::PathBuf;

pub fn fixture(name: &str) -> Graph {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "tests", "fixtures", name]
        .iter()
        .collect();
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    parse_edge_list(&text).unwrap_or_else(|e| panic!("{name}: {e}"))
}

pub fn cycle(n: usize) -> Graph {
    Graph::from_edges(n, (0..n).map(|i| (i, (i + 1) % n))).unwrap()
}

pub fn path(n: usize) -> Graph {
    Graph::from_edges(n, (1..n).map(|i| (i - 1, i))).unwrap()
}

/// Centre 0 joined to `n - 1` leaves.
pub fn star(n: usize) -> Graph {
    Graph::from_edges(n, (1..n).map(|i| (0, i))).unwrap()
}

pub fn complete(n: usize) -> Graph {
    Graph::from_edges(n, (0..n).flat_map(|u| (u + 1..n).map(move |v| (u, v)))).unwrap()
}

/// Circulant graph on `n` vertices joining each `i` to `i ± s` for every step `s`.
pub fn circulant(n: usize, steps: &[usize]) -> Graph {
    let mut g = Graph::new(n);
    for i in 0..n {
        for &s in steps {
            g.add_edge(i, (i + s) % n).unwrap();
        }
    }
    g
}

/// Independent check of the satisfactory property, not relying on `certify`.
pub fn assert_satisfactory(g: &Graph, p: &SatisfactoryPartition) {
    let (a, b) = (p.first(), p.second());
    assert!(!a.is_empty() && !b.is_empty(), "empty side: {a:?} | {b:?}");
    let mut all: Vec<_> = a.iter().chain(b).copied().collect();
    all.sort_unstable();
    assert_eq!(all, g.vertices().collect::<Vec<_>>(), "sides do not partition V");
    for v in g.vertices() {
        let mine = if a.contains(&v) { a } else { b };
        let same = g.neighbors(v).iter().filter(|w| mine.contains(*w)).count();
        let cross = g.degree(v) - same;
        assert!(same >= cross, "vertex {v}: {same} same vs {cross} cross");
    }
}
