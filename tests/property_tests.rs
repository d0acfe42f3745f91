mod util;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::time::{Duration, Instant};
use sat_partition::prelude::*;
use util::assert_satisfactory;

/// Simple graph from arbitrary pairs; self-loops and repeats are dropped.
fn build(n: usize, pairs: &[(usize, usize)]) -> Graph {
    let mut g = Graph::new(n);
    for &(u, v) in pairs {
        if u != v {
            let _ = g.add_edge(u % n, v % n);
        }
    }
    g
}

fn arb_graph() -> impl Strategy<Value = Graph> {
    (1usize..=12).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n), 0..(2 * n)).prop_map(move |pairs| build(n, &pairs))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn found_partitions_are_satisfactory(g in arb_graph()) {
        let r = solve(&g);
        if let Some(p) = r.verdict.partition() {
            assert_satisfactory(&g, p);
            prop_assert_eq!(p.vertex_count(), g.vertex_count());
        }
    }

    #[test]
    fn solving_is_deterministic(g in arb_graph()) {
        let a = solve(&g);
        let b = solve(&g);
        prop_assert_eq!(a.classification, classify(&g));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn disconnected_graphs_always_split(g in arb_graph()) {
        if g.connected_components().len() >= 2 {
            let r = solve(&g);
            prop_assert_eq!(r.classification, Classification::Disconnected);
            prop_assert!(r.verdict.is_found());
        }
    }
}

/// Random cubic graph by the pairing model, retried until simple and connected.
fn random_cubic(n: usize, rng: &mut SmallRng) -> Graph {
    loop {
        let mut points: Vec<usize> = (0..n).flat_map(|v| [v, v, v]).collect();
        points.shuffle(rng);
        let mut g = Graph::new(n);
        let simple = points
            .chunks(2)
            .all(|pair| pair[0] != pair[1] && g.add_edge(pair[0], pair[1]) == Ok(true));
        if simple && g.connected_components().len() == 1 {
            return g;
        }
    }
}

#[test]
fn random_cubic_graphs() {
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..20 {
        let g = random_cubic(14, &mut rng);
        let r = solve(&g);
        match r.classification {
            // girth is at most 6 on 14 vertices, so a short seed always exists
            Classification::Regular3 => assert!(r.verdict.is_found(), "{:?}", r.verdict),
            Classification::Disconnected => assert!(r.verdict.is_found()),
            other => panic!("unexpected class {other:?}"),
        }
        if let Some(p) = r.verdict.partition() {
            assert_satisfactory(&g, p);
        }
    }
}

#[test]
fn triangle_beside_a_large_cubic_graph_is_fast() {
    // triangle 0-1-2 bridged by 2-3 into a random cubic graph on 3..73
    let mut rng = SmallRng::seed_from_u64(7);
    let cubic = random_cubic(70, &mut rng);
    let edges = cubic
        .edges()
        .map(|(u, v)| (u + 3, v + 3))
        .chain([(0, 1), (1, 2), (0, 2), (2, 3)]);
    let g = Graph::from_edges(73, edges).unwrap();

    let start = Instant::now();
    let r = solve(&g);
    assert!(start.elapsed() < Duration::from_secs(10), "{:?}", start.elapsed());
    assert_eq!(r.classification, Classification::BoundedDegree);
    let p = r.verdict.partition().unwrap();
    assert_eq!(p.first(), &[0, 1, 2]);
    assert_satisfactory(&g, p);
}
