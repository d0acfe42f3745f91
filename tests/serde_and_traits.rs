mod util;

use sat_partition::prelude::*;
use static_assertions::assert_impl_all;
use util::*;

assert_impl_all!(Graph: Send, Sync, Clone);
assert_impl_all!(MultiGraph: Send, Sync);
assert_impl_all!(Solver: Send, Sync, Default);
assert_impl_all!(SolverConfig: Send, Sync, Default);
assert_impl_all!(Resolution: Send, Sync);
assert_impl_all!(SatisfactoryPartition: Send, Sync);
assert_impl_all!(GraphError: Send, Sync, std::error::Error);
assert_impl_all!(PartitionError: Send, Sync, std::error::Error);

#[test]
fn partial_config_json_uses_defaults() {
    let cfg: SolverConfig = serde_json::from_str(r#"{ "max_seed_cycles": 8 }"#).unwrap();
    assert_eq!(cfg.max_seed_cycles, 8);
    assert_eq!(cfg.bazgan_min_vertices, 11);
    assert_eq!(cfg.max_augment_candidates, 16);
    assert!(Solver::new(cfg).is_ok());
}

#[test]
fn config_round_trips() {
    let cfg = SolverConfig {
        long_cycle_min_len: 6,
        ..SolverConfig::default()
    };
    let text = serde_json::to_string(&cfg).unwrap();
    let back: SolverConfig = serde_json::from_str(&text).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn resolution_serializes() {
    let r = solve(&fixture("c5.txt"));
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["classification"], "LongCycle");
    let parts = &json["verdict"]["PartitionFound"];
    assert_eq!(parts["first"], serde_json::json!([0, 1]));
    assert_eq!(parts["second"], serde_json::json!([2, 3, 4]));

    let r = solve(&fixture("k33.txt"));
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(
        json["verdict"],
        serde_json::json!({ "ProvablyNone": { "Exceptional": "K33" } })
    );
    let json = serde_json::to_value(solve(&Graph::new(0))).unwrap();
    assert_eq!(json["verdict"], "Vacuous");
}
