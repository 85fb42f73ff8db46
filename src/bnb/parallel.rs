//! Parallel root split over the carriers of the first job.
//!
//! Every root branch runs the sequential search with its own working buffer.
//! The incumbent is the only shared state: replacements happen under a mutex,
//! and its cost is republished through an atomic so that bound checks never
//! take the lock. A stale bound is never lower than the true one, so reading
//! it late costs pruning, not correctness.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use rayon::prelude::*;

use super::search::{BranchAndBound, Incumbent, IncumbentStore, PartialAssignment, Replacement};
use super::{SearchStats, TieBreak};
use crate::distance::PickupMatrix;

struct SharedIncumbent {
    best: Mutex<Incumbent>,
    bound: AtomicU64,
}

impl SharedIncumbent {
    fn new(seed: Incumbent) -> Self {
        Self {
            bound: AtomicU64::new(seed.cost().to_bits()),
            best: Mutex::new(seed),
        }
    }

    fn into_inner(self) -> Incumbent {
        self.best.into_inner()
    }
}

impl IncumbentStore for &SharedIncumbent {
    fn bound(&self) -> f64 {
        f64::from_bits(self.bound.load(Ordering::Acquire))
    }

    fn offer(&mut self, candidate: &PartialAssignment, tie_break: TieBreak) -> Replacement {
        let mut best = self.best.lock();
        let outcome = best.consider(candidate, tie_break);
        if outcome != Replacement::Rejected {
            self.bound.store(best.cost().to_bits(), Ordering::Release);
        }
        outcome
    }
}

pub(crate) fn search_parallel(
    matrix: &PickupMatrix,
    priorities: &[u32],
    tie_break: TieBreak,
    seed: Incumbent,
) -> (Incumbent, SearchStats) {
    let shared = SharedIncumbent::new(seed);
    let root = PartialAssignment::new(matrix.num_jobs(), matrix.num_carriers());

    let mut root_search = BranchAndBound::new(matrix, priorities, tie_break);
    let expand = root_search.enter_node(&root, &&shared);
    let mut stats = root_search.into_stats();

    if expand {
        let branches = (0..matrix.num_carriers())
            .into_par_iter()
            .map(|carrier| {
                let mut search = BranchAndBound::new(matrix, priorities, tie_break);
                let mut partial = root.clone();
                let mut store = &shared;
                search.branch(&mut partial, carrier, &mut store);
                search.into_stats()
            })
            .reduce(SearchStats::default, |mut a, b| {
                a.merge(&b);
                a
            });
        stats.merge(&branches);
    }

    (shared.into_inner(), stats)
}
