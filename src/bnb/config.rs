//! Branch-and-bound configuration.

use serde::{Deserialize, Serialize};

/// How to choose between two complete assignments of equal cost.
///
/// Only exact cost equality counts as a tie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Keep whichever optimal assignment was found first.
    ///
    /// Equal-cost branches are pruned, so this is also the fastest rule.
    #[default]
    FirstFound,

    /// Prefer the assignment whose carriers have the larger priority sum.
    HighestPriority,

    /// Prefer the assignment whose carriers have the smaller priority sum.
    LowestPriority,
}

impl TieBreak {
    /// Returns `true` if an equal-cost `candidate` priority sum should replace
    /// the `incumbent` one.
    pub fn prefers(self, candidate: u64, incumbent: u64) -> bool {
        match self {
            TieBreak::FirstFound => false,
            TieBreak::HighestPriority => candidate > incumbent,
            TieBreak::LowestPriority => candidate < incumbent,
        }
    }

    /// Whether a (partial) cost `bound` rules out beating an incumbent of cost `best`.
    ///
    /// Rules that compare priorities must still reach equal-cost leaves, so
    /// for them only a strictly larger bound prunes.
    pub(crate) fn cannot_improve(self, bound: f64, best: f64) -> bool {
        match self {
            TieBreak::FirstFound => bound >= best,
            TieBreak::HighestPriority | TieBreak::LowestPriority => bound > best,
        }
    }
}

/// Configuration for [`solve`](super::solve) and [`optimize`](super::optimize).
///
/// # Examples
///
/// ```
/// use u_assign::bnb::{BnbConfig, TieBreak};
///
/// let config = BnbConfig::default().with_tie_break(TieBreak::HighestPriority);
/// assert_eq!(config.tie_break, TieBreak::HighestPriority);
/// assert!(!config.parallel);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BnbConfig {
    /// Rule applied to equal-cost complete assignments.
    pub tie_break: TieBreak,

    /// Split the root level across a rayon thread pool.
    ///
    /// Requires the `parallel` feature; without it the search runs
    /// sequentially.
    pub parallel: bool,
}

impl BnbConfig {
    /// Sets the tie-break rule.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Enables or disables the parallel root split.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
