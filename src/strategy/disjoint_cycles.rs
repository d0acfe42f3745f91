//! Bounded-degree graphs (maximum degree at most four).
//!
//! Two vertex-disjoint cycles give a partition: close the first under
//! absorption and the second stays on the other side. The search runs in
//! three steps.
//!
//! 1. Walk the cycles `C1` of length up to `|V| / 2` and stop at the first one
//!    with any cycle left in `G - V(C1)`. The walk is capped in cycles and in
//!    DFS steps.
//! 2. With minimum degree three or more, failing step 1 settles it: there is
//!    no partition.
//! 3. Otherwise try edge augmentation. Each seed (a basis cycle, or an edge
//!    between two vertices of degree one or two) is removed from a private
//!    [`MultiGraph`] copy; up to two trial edges between low-degree vertices are
//!    inserted, and any cycle that appears is accepted when it is
//!    self-satisfied in the input graph.
//!
//! Step 3 is a heuristic: exhausting it is reported as "no partition", but it
//! does not certify a minimal witness.

use super::{closure_partition, is_self_satisfied, mask};
use crate::classify::{Cycle, SearchLimits, cycle_basis, find_cycle, walk_simple_cycles};
use crate::graph::{Graph, MultiGraph, VertexId};
use crate::partition::{NoneReason, SatisfactoryPartition, UnresolvedReason, Verdict};
use crate::solver::SolverConfig;
use itertools::Itertools;
use std::ops::ControlFlow;

pub fn partition(g: &Graph, min_degree: usize, config: &SolverConfig) -> Verdict {
    let bound = g.vertex_count() / 2;
    let limits = SearchLimits {
        max_cycles: Some(config.max_enumerated_cycles),
        max_steps: Some(config.max_search_steps),
    };
    let search = walk_simple_cycles(g, bound, limits, |c1| match disjoint_partner(g, c1) {
        Some(p) => ControlFlow::Break(p),
        None => ControlFlow::Continue(()),
    });
    log::trace!("{} candidate cycles up to length {bound}", search.visited);
    if let Some(p) = search.found {
        return Verdict::PartitionFound(p);
    }

    if min_degree >= 3 {
        return if search.truncated {
            Verdict::Unresolved(UnresolvedReason::SearchTruncated)
        } else {
            Verdict::ProvablyNone(NoneReason::NoDisjointCycles)
        };
    }

    let outcome = augment(g, config);
    match outcome.partition {
        Some(p) => Verdict::PartitionFound(p),
        None if outcome.truncated || search.truncated => {
            Verdict::Unresolved(UnresolvedReason::SearchTruncated)
        }
        None => Verdict::ProvablyNone(NoneReason::NoAugmentedDisjointCycles),
    }
}

/// Closure of `c1` when its removal leaves another cycle behind.
fn disjoint_partner(g: &Graph, c1: &Cycle) -> Option<SatisfactoryPartition> {
    let rest = g.induced_without(c1.vertices().iter().copied());
    let c2 = find_cycle(&rest)?;
    log::trace!("disjoint cycles {:?} and {:?}", c1.vertices(), c2);
    closure_partition(g, c1.vertices().iter().copied())
}

#[derive(Debug, Default)]
struct Augmentation {
    partition: Option<SatisfactoryPartition>,
    truncated: bool,
}

fn augment(g: &Graph, config: &SolverConfig) -> Augmentation {
    let low = |v: VertexId| matches!(g.degree(v), 1 | 2);
    let mut out = Augmentation::default();

    let basis = cycle_basis(g);
    let edge_seeds: Vec<Vec<VertexId>> = g
        .edges()
        .filter(|&(u, v)| low(u) && low(v))
        .map(|(u, v)| vec![u, v])
        .collect();
    if basis.len() > config.max_seed_cycles || edge_seeds.len() > config.max_seed_cycles {
        log::warn!(
            "augmentation seeds capped at {} ({} basis cycles, {} edges)",
            config.max_seed_cycles,
            basis.len(),
            edge_seeds.len()
        );
        out.truncated = true;
    }
    let seeds = basis
        .iter()
        .take(config.max_seed_cycles)
        .map(|c| c.vertices().to_vec())
        .chain(edge_seeds.into_iter().take(config.max_seed_cycles));

    for seed in seeds {
        let in_seed = mask(g, seed.iter().copied());
        let all: Vec<VertexId> = g.vertices().filter(|&v| !in_seed[v] && low(v)).collect();
        if all.len() > config.max_augment_candidates {
            log::warn!(
                "seed {seed:?}: {} augmentation candidates, keeping {}",
                all.len(),
                config.max_augment_candidates
            );
            out.truncated = true;
        }
        let candidates = &all[..all.len().min(config.max_augment_candidates)];
        let mut work = g.induced_without(seed.iter().copied());
        if let Some(p) = try_insertions(g, &mut work, &seed, candidates) {
            out.partition = Some(p);
            return out;
        }
    }
    out
}

/// Insert one trial edge, then a second one disjoint from it, checking for a
/// usable cycle after every insertion. `work` is restored before returning.
fn try_insertions(
    g: &Graph,
    work: &mut MultiGraph,
    seed: &[VertexId],
    candidates: &[VertexId],
) -> Option<SatisfactoryPartition> {
    let pairs: Vec<(VertexId, VertexId)> = candidates.iter().copied().tuple_combinations().collect();
    for (i, &(u, v)) in pairs.iter().enumerate() {
        if work.add_edge(u, v).is_err() {
            continue;
        }
        let mut found = accept(g, work, seed);
        for &(x, y) in &pairs[i + 1..] {
            if found.is_some() {
                break;
            }
            if [x, y].iter().any(|w| *w == u || *w == v) || work.add_edge(x, y).is_err() {
                continue;
            }
            found = accept(g, work, seed);
            work.remove_edge(x, y);
        }
        work.remove_edge(u, v);
        if found.is_some() {
            return found;
        }
    }
    None
}

fn accept(g: &Graph, work: &MultiGraph, seed: &[VertexId]) -> Option<SatisfactoryPartition> {
    let w = find_cycle(work)?;
    if !is_self_satisfied(g, w.iter().copied()) {
        log::trace!("augmented cycle {w:?} is not self-satisfied");
        return None;
    }
    log::trace!("seed {seed:?} with augmented cycle {w:?}");
    closure_partition(g, seed.iter().copied())
}
