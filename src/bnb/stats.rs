//! Search statistics.

use serde::{Deserialize, Serialize};

/// Counters collected during one branch-and-bound run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Interior nodes reached (one per partial assignment that got a bound test).
    pub nodes: u64,
    /// Subtrees cut by the relaxation bound.
    pub node_prunes: u64,
    /// Carrier candidates skipped because the single edge already exceeded the incumbent.
    pub edge_prunes: u64,
    /// Times a strictly cheaper complete assignment replaced the incumbent.
    pub improvements: u64,
    /// Times an equal-cost complete assignment replaced the incumbent on the
    /// tie-break rule.
    pub tie_replacements: u64,
    /// Pickup cost of the greedy seed.
    pub greedy_cost: f64,
}

impl SearchStats {
    /// `true` if no complete assignment was cheaper than the greedy seed.
    ///
    /// Equal-cost replacements made by a priority tie-break don't count.
    pub fn greedy_was_optimal(&self) -> bool {
        self.improvements == 0
    }

    /// Adds the counters of `other` into `self`. `greedy_cost` is kept.
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.node_prunes += other.node_prunes;
        self.edge_prunes += other.edge_prunes;
        self.improvements += other.improvements;
        self.tie_replacements += other.tie_replacements;
    }
}
