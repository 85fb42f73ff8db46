//! Depth-first branch-and-bound over partial assignments.
//!
//! Jobs are decided in index order, one per level. Each level tries the
//! carriers in index order and is cut by two tests:
//!
//! - node bound: cost so far plus the per-job minima of the undecided jobs
//!   (carrier reuse ignored, so it never overestimates)
//! - edge bound: cost so far plus the single candidate edge
//!
//! # Complexity
//!
//! Worst case O(M!/(M-N)!) leaves; the greedy seed and both bounds cut most
//! of them in practice.

use super::{SearchStats, TieBreak};
use crate::distance::PickupMatrix;

/// Best complete assignment seen so far.
#[derive(Debug, Clone)]
pub(crate) struct Incumbent {
    cost: f64,
    priority: u64,
    carriers: Vec<usize>,
}

impl Incumbent {
    pub(crate) fn new(cost: f64, priority: u64, carriers: Vec<usize>) -> Self {
        Self {
            cost,
            priority,
            carriers,
        }
    }

    pub(crate) fn cost(&self) -> f64 {
        self.cost
    }

    pub(crate) fn into_carriers(self) -> Vec<usize> {
        self.carriers
    }

    /// Replaces the incumbent if `candidate` is strictly cheaper, or equally
    /// cheap and preferred by `tie_break`.
    pub(super) fn consider(
        &mut self,
        candidate: &PartialAssignment,
        tie_break: TieBreak,
    ) -> Replacement {
        let cost = candidate.cost();
        let outcome = if cost < self.cost {
            Replacement::Improved
        } else if cost == self.cost && tie_break.prefers(candidate.priority(), self.priority) {
            Replacement::TieBroken
        } else {
            return Replacement::Rejected;
        };
        self.cost = cost;
        self.priority = candidate.priority();
        self.carriers.clear();
        self.carriers.extend(candidate.slots.iter().flatten());
        outcome
    }
}

/// What an offered complete assignment did to the incumbent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Replacement {
    Rejected,
    /// Strictly cheaper than the incumbent.
    Improved,
    /// Same cost, preferred by the tie-break rule.
    TieBroken,
}

/// Where the search reads its bound from and reports complete assignments to.
pub(crate) trait IncumbentStore {
    /// Cost of the current incumbent.
    fn bound(&self) -> f64;

    /// Offers a complete assignment for replacing the incumbent.
    fn offer(&mut self, candidate: &PartialAssignment, tie_break: TieBreak) -> Replacement;
}

impl IncumbentStore for Incumbent {
    fn bound(&self) -> f64 {
        self.cost
    }

    fn offer(&mut self, candidate: &PartialAssignment, tie_break: TieBreak) -> Replacement {
        self.consider(candidate, tie_break)
    }
}

/// Working buffer of one search: the decision per job plus prefix sums.
///
/// `costs[d]` and `priorities[d]` hold the totals over jobs `0..d`, so
/// backtracking only resets the slot; no floating-point subtraction drifts
/// the accumulated cost.
#[derive(Debug, Clone)]
pub(crate) struct PartialAssignment {
    slots: Vec<Option<usize>>,
    used: Vec<bool>,
    costs: Vec<f64>,
    priorities: Vec<u64>,
    depth: usize,
}

impl PartialAssignment {
    /// An empty assignment of `num_jobs` jobs over `num_carriers` carriers.
    pub(crate) fn new(num_jobs: usize, num_carriers: usize) -> Self {
        Self {
            slots: vec![None; num_jobs],
            used: vec![false; num_carriers],
            costs: vec![0.0; num_jobs + 1],
            priorities: vec![0; num_jobs + 1],
            depth: 0,
        }
    }

    /// Accumulated pickup cost of the decided jobs.
    pub(crate) fn cost(&self) -> f64 {
        self.costs[self.depth]
    }

    /// Priority sum of the carriers used so far.
    pub(crate) fn priority(&self) -> u64 {
        self.priorities[self.depth]
    }

    pub(crate) fn is_used(&self, carrier: usize) -> bool {
        self.used[carrier]
    }

    fn assign(&mut self, carrier: usize, distance: f64, priority: u32) {
        let d = self.depth;
        self.slots[d] = Some(carrier);
        self.used[carrier] = true;
        self.costs[d + 1] = self.costs[d] + distance;
        self.priorities[d + 1] = self.priorities[d] + u64::from(priority);
        self.depth += 1;
    }

    fn unassign(&mut self) {
        self.depth -= 1;
        if let Some(carrier) = self.slots[self.depth].take() {
            self.used[carrier] = false;
        }
    }
}

/// One branch-and-bound run over a fixed matrix.
pub(crate) struct BranchAndBound<'a> {
    matrix: &'a PickupMatrix,
    priorities: &'a [u32],
    tie_break: TieBreak,
    stats: SearchStats,
}

impl<'a> BranchAndBound<'a> {
    /// `priorities` must have one entry per carrier.
    pub(crate) fn new(
        matrix: &'a PickupMatrix,
        priorities: &'a [u32],
        tie_break: TieBreak,
    ) -> Self {
        debug_assert_eq!(priorities.len(), matrix.num_carriers());
        Self {
            matrix,
            priorities,
            tie_break,
            stats: SearchStats::default(),
        }
    }

    pub(crate) fn into_stats(self) -> SearchStats {
        self.stats
    }

    /// Explores every completion of `partial`, improving `best` in place.
    pub(crate) fn search<S: IncumbentStore>(
        &mut self,
        partial: &mut PartialAssignment,
        best: &mut S,
    ) {
        let job = partial.depth;
        if job == self.matrix.num_jobs() {
            match best.offer(partial, self.tie_break) {
                Replacement::Improved => self.stats.improvements += 1,
                Replacement::TieBroken => self.stats.tie_replacements += 1,
                Replacement::Rejected => {}
            }
            return;
        }

        if !self.enter_node(partial, &*best) {
            return;
        }

        for carrier in 0..self.matrix.num_carriers() {
            self.branch(partial, carrier, &mut *best);
        }
    }

    /// Counts the node and applies the relaxation bound.
    ///
    /// Returns `false` if the subtree below `partial` is pruned.
    pub(crate) fn enter_node<S: IncumbentStore>(
        &mut self,
        partial: &PartialAssignment,
        best: &S,
    ) -> bool {
        self.stats.nodes += 1;
        let lower_bound = self
            .matrix
            .completion_bound(partial.cost(), partial.depth);
        if self.tie_break.cannot_improve(lower_bound, best.bound()) {
            self.stats.node_prunes += 1;
            return false;
        }
        true
    }

    /// Tries `carrier` for the next undecided job, recursing if the edge passes.
    pub(crate) fn branch<S: IncumbentStore>(
        &mut self,
        partial: &mut PartialAssignment,
        carrier: usize,
        best: &mut S,
    ) {
        if partial.is_used(carrier) {
            return;
        }
        let distance = self.matrix.get(carrier, partial.depth);
        if self
            .tie_break
            .cannot_improve(partial.cost() + distance, best.bound())
        {
            self.stats.edge_prunes += 1;
            return;
        }

        partial.assign(carrier, distance, self.priorities[carrier]);
        self.search(partial, &mut *best);
        partial.unassign();
    }
}
