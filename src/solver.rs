//! Dispatcher: classify a graph and run the matching strategy.
//!
//! Dispatch is an ordered table of rules over a [`GraphFacts`] snapshot; the
//! first rule whose predicate matches decides both the [`Classification`] tag
//! and the strategy. Facts are computed once per call and never outlive it.

use crate::classify::{Classification, GraphFacts, TreeShape};
use crate::graph::Graph;
use crate::graph_error::GraphError;
use crate::partition::{NoneReason, Resolution, UnresolvedReason, Verdict};
use crate::strategy::{bazgan, disconnected, disjoint_cycles, long_cycle, tree};
use serde::{Deserialize, Serialize};

/// Tunables for dispatch thresholds and search caps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Regular graphs need at least this many vertices for the regular construction.
    pub bazgan_min_vertices: usize,
    /// Spanning cycles shorter than this are not split directly.
    pub long_cycle_min_len: usize,
    /// Largest maximum degree handled by the disjoint-cycle search.
    pub max_bounded_degree: usize,
    pub max_enumerated_cycles: usize,
    /// DFS steps the disjoint-cycle enumeration may take.
    pub max_search_steps: usize,
    /// Seeds tried by edge augmentation, per seed kind.
    pub max_seed_cycles: usize,
    pub max_augment_candidates: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            bazgan_min_vertices: 11,
            long_cycle_min_len: 5,
            max_bounded_degree: 4,
            max_enumerated_cycles: 20_000,
            max_search_steps: 1_000_000,
            max_seed_cycles: 64,
            max_augment_candidates: 16,
        }
    }
}

impl SolverConfig {
    /// Reject settings under which a verdict would be meaningless.
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.long_cycle_min_len < 4 {
            return Err(GraphError::invalid(format!(
                "long_cycle_min_len must be at least 4, got {}",
                self.long_cycle_min_len
            )));
        }
        if !(2..=4).contains(&self.max_bounded_degree) {
            return Err(GraphError::invalid(format!(
                "max_bounded_degree must lie in 2..=4, got {}",
                self.max_bounded_degree
            )));
        }
        if self.bazgan_min_vertices == 0 {
            return Err(GraphError::invalid("bazgan_min_vertices must be positive"));
        }
        if self.max_enumerated_cycles == 0
            || self.max_search_steps == 0
            || self.max_seed_cycles == 0
        {
            return Err(GraphError::invalid("search caps must be positive"));
        }
        if self.max_augment_candidates < 2 {
            return Err(GraphError::invalid(
                "max_augment_candidates must allow at least one trial edge",
            ));
        }
        Ok(())
    }
}

type Matcher = fn(&GraphFacts, &SolverConfig) -> Option<Classification>;
type Runner = fn(&Graph, &GraphFacts, &SolverConfig) -> Verdict;

struct Rule {
    matches: Matcher,
    run: Runner,
}

/// Evaluated top-down; the last rule always matches.
const RULES: &[Rule] = &[
    Rule {
        matches: match_empty,
        run: |_, _, _| Verdict::Vacuous,
    },
    Rule {
        matches: match_single,
        run: |_, _, _| Verdict::ProvablyNone(NoneReason::TooFewVertices),
    },
    Rule {
        matches: match_disconnected,
        run: |g, f, _| disconnected::partition(g, &f.components),
    },
    Rule {
        matches: match_complete,
        run: |_, _, _| Verdict::ProvablyNone(NoneReason::Complete),
    },
    Rule {
        matches: match_tree,
        run: |g, f, _| tree::partition(g, f.tree),
    },
    Rule {
        matches: match_long_cycle,
        run: run_long_cycle,
    },
    Rule {
        matches: match_exceptional,
        run: run_exceptional,
    },
    Rule {
        matches: match_regular,
        run: run_regular,
    },
    Rule {
        matches: match_bounded,
        run: |g, f, c| disjoint_cycles::partition(g, f.min_degree(), c),
    },
    Rule {
        matches: |_, _| Some(Classification::Unclassified),
        run: |_, f, _| {
            Verdict::Unresolved(UnresolvedReason::MaxDegreeAbove4 {
                max_degree: f.max_degree(),
            })
        },
    },
];

fn match_empty(f: &GraphFacts, _: &SolverConfig) -> Option<Classification> {
    (f.vertex_count == 0).then_some(Classification::Empty)
}

fn match_single(f: &GraphFacts, _: &SolverConfig) -> Option<Classification> {
    (f.vertex_count == 1).then_some(Classification::SingleVertex)
}

fn match_disconnected(f: &GraphFacts, _: &SolverConfig) -> Option<Classification> {
    (!f.is_connected()).then_some(Classification::Disconnected)
}

fn match_complete(f: &GraphFacts, _: &SolverConfig) -> Option<Classification> {
    f.complete.then_some(Classification::Complete)
}

fn match_tree(f: &GraphFacts, _: &SolverConfig) -> Option<Classification> {
    match f.tree {
        TreeShape::Star => Some(Classification::Star),
        TreeShape::NonStarTree => Some(Classification::NonStarTree),
        TreeShape::NotATree => None,
    }
}

fn match_long_cycle(f: &GraphFacts, c: &SolverConfig) -> Option<Classification> {
    f.spanning_cycle
        .as_ref()
        .filter(|cycle| cycle.len() >= c.long_cycle_min_len)
        .map(|_| Classification::LongCycle)
}

fn run_long_cycle(g: &Graph, f: &GraphFacts, _: &SolverConfig) -> Verdict {
    match &f.spanning_cycle {
        Some(cycle) => long_cycle::partition(g, cycle),
        None => Verdict::Unresolved(UnresolvedReason::CertificationFailed),
    }
}

fn match_exceptional(f: &GraphFacts, _: &SolverConfig) -> Option<Classification> {
    f.exceptional.map(Classification::Exceptional)
}

fn run_exceptional(_: &Graph, f: &GraphFacts, _: &SolverConfig) -> Verdict {
    match f.exceptional {
        Some(r) => Verdict::ProvablyNone(NoneReason::Exceptional(r)),
        None => Verdict::Unresolved(UnresolvedReason::CertificationFailed),
    }
}

fn match_regular(f: &GraphFacts, c: &SolverConfig) -> Option<Classification> {
    if f.vertex_count < c.bazgan_min_vertices {
        return None;
    }
    match f.regular_degree {
        Some(3) => Some(Classification::Regular3),
        Some(4) => Some(Classification::Regular4),
        _ => None,
    }
}

fn run_regular(g: &Graph, f: &GraphFacts, _: &SolverConfig) -> Verdict {
    bazgan::partition(g, f.max_degree())
}

fn match_bounded(f: &GraphFacts, c: &SolverConfig) -> Option<Classification> {
    (f.max_degree() <= c.max_bounded_degree).then_some(Classification::BoundedDegree)
}

/// Classifies graphs and resolves their satisfactory-partition question.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Solver with a validated configuration.
    pub fn new(config: SolverConfig) -> Result<Self, GraphError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// The classification tag `g` is dispatched on.
    pub fn classify(&self, g: &Graph) -> Classification {
        let facts = GraphFacts::compute(g);
        self.select(&facts).0
    }

    /// Classify `g` and run the strategy for its class.
    pub fn solve(&self, g: &Graph) -> Resolution {
        let facts = GraphFacts::compute(g);
        let (classification, rule) = self.select(&facts);
        log::debug!(
            "graph with {} vertices and {} edges classified as {classification}",
            facts.vertex_count,
            facts.edge_count
        );
        let verdict = (rule.run)(g, &facts, &self.config);
        log::debug!("{classification}: {verdict}");
        Resolution {
            classification,
            verdict,
        }
    }

    fn select(&self, facts: &GraphFacts) -> (Classification, &'static Rule) {
        for rule in RULES {
            if let Some(class) = (rule.matches)(facts, &self.config) {
                return (class, rule);
            }
        }
        // the last rule matches everything
        (Classification::Unclassified, &RULES[RULES.len() - 1])
    }
}

/// Solve `g` with the default configuration.
pub fn solve(g: &Graph) -> Resolution {
    Solver::default().solve(g)
}
