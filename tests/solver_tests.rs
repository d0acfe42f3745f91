mod util;

use sat_partition::prelude::*;
use util::*;

fn found(g: &Graph) -> SatisfactoryPartition {
    let r = solve(g);
    match r.verdict {
        Verdict::PartitionFound(p) => {
            assert_satisfactory(g, &p);
            p
        }
        other => panic!("expected a partition for {:?}, got {other:?}", r.classification),
    }
}

#[test]
fn five_cycle_splits_two_and_three() {
    let g = fixture("c5.txt");
    assert_eq!(classify(&g), Classification::LongCycle);
    let p = found(&g);
    let mut sizes = [p.first().len(), p.second().len()];
    sizes.sort_unstable();
    assert_eq!(sizes, [2, 3]);
}

#[test]
fn short_cycles_fall_through() {
    assert_ne!(classify(&cycle(3)), Classification::LongCycle);
    assert_ne!(classify(&cycle(4)), Classification::LongCycle);
    // C4 still has the split {0,1} | {2,3}
    let p = found(&cycle(4));
    assert_eq!(p.first().len(), 2);
}

#[test]
fn long_cycles_split() {
    for n in 5..12 {
        let g = cycle(n);
        assert_eq!(classify(&g), Classification::LongCycle);
        found(&g);
    }
}

#[test]
fn stars_have_none() {
    for n in 3..8 {
        let r = solve(&star(n));
        assert_eq!(r.classification, Classification::Star);
        assert_eq!(r.verdict, Verdict::ProvablyNone(NoneReason::Star));
    }
    let r = solve(&fixture("star5.txt"));
    assert_eq!(r.verdict, Verdict::ProvablyNone(NoneReason::Star));
}

#[test]
fn paths_split() {
    let g = path(5);
    assert_eq!(classify(&g), Classification::NonStarTree);
    found(&g);
    for n in 4..10 {
        found(&path(n));
    }
}

#[test]
fn small_complete_graphs_have_none() {
    for n in 2..7 {
        let r = solve(&complete(n));
        assert!(r.verdict.is_none(), "K{n}: {:?}", r.verdict);
    }
}

#[test]
fn exceptional_graphs_have_none() {
    assert!(solve(&complete(4)).verdict.is_none());
    assert!(solve(&complete(5)).verdict.is_none());
    let r = solve(&fixture("k33.txt"));
    assert_eq!(
        r.verdict,
        Verdict::ProvablyNone(NoneReason::Exceptional(ReferenceGraph::K33))
    );
}

#[test]
fn cubic_graph_on_twelve_vertices_uses_the_regular_construction() {
    let g = fixture("prism12.txt");
    assert_eq!(classify(&g), Classification::Regular3);
    found(&g);
}

#[test]
fn quartic_circulant_uses_the_regular_construction() {
    let g = circulant(11, &[1, 2]);
    assert_eq!(classify(&g), Classification::Regular4);
    found(&g);
}

#[test]
fn small_cubic_graph_takes_the_disjoint_cycle_path() {
    let g = fixture("petersen.txt");
    assert_eq!(classify(&g), Classification::BoundedDegree);
    let p = found(&g);
    assert_eq!(p.first(), &[0, 1, 2, 3, 4]);
}

#[test]
fn disconnected_graph_splits_on_components() {
    let g = fixture("two_triangles.txt");
    assert_eq!(classify(&g), Classification::Disconnected);
    let p = found(&g);
    assert_eq!(p.first(), &[0, 1, 2]);
    assert_eq!(p.second(), &[3, 4, 5]);
}

#[test]
fn paw_has_none() {
    let r = solve(&fixture("paw.txt"));
    assert_eq!(r.classification, Classification::BoundedDegree);
    assert_eq!(
        r.verdict,
        Verdict::ProvablyNone(NoneReason::NoAugmentedDisjointCycles)
    );
}

#[test]
fn solving_twice_is_identical() {
    for name in ["c5.txt", "petersen.txt", "prism12.txt", "paw.txt", "two_triangles.txt"] {
        let g = fixture(name);
        assert_eq!(solve(&g), solve(&g), "{name}");
    }
}

#[test]
fn custom_config_is_honoured() {
    let solver = Solver::new(SolverConfig {
        long_cycle_min_len: 8,
        ..SolverConfig::default()
    })
    .unwrap();
    let r = solver.solve(&cycle(6));
    assert_eq!(r.classification, Classification::BoundedDegree);
    assert!(r.verdict.is_found());
}

#[test]
fn petersen_has_no_short_seed_for_the_regular_construction() {
    let solver = Solver::new(SolverConfig {
        bazgan_min_vertices: 10,
        ..SolverConfig::default()
    })
    .unwrap();
    let r = solver.solve(&fixture("petersen.txt"));
    assert_eq!(r.classification, Classification::Regular3);
    assert_eq!(
        r.verdict,
        Verdict::Unresolved(UnresolvedReason::NoShortSeedCycle)
    );
}
