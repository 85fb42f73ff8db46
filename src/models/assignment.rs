//! The solved assignment.

use serde::Serialize;

use crate::bnb::SearchStats;

/// An optimal one-to-one assignment of jobs to carriers.
///
/// Job `j` is served by carrier `carriers()[j]`. Distances are in kilometers.
#[derive(Debug, Clone, Serialize)]
pub struct Assignment {
    carriers: Vec<usize>,
    pickup_distances: Vec<f64>,
    pickup_distance: f64,
    fixed_distance: f64,
    stats: SearchStats,
}

impl Assignment {
    pub(crate) fn new(
        carriers: Vec<usize>,
        pickup_distances: Vec<f64>,
        pickup_distance: f64,
        fixed_distance: f64,
        stats: SearchStats,
    ) -> Self {
        Self {
            carriers,
            pickup_distances,
            pickup_distance,
            fixed_distance,
            stats,
        }
    }

    /// Carrier index per job.
    pub fn carriers(&self) -> &[usize] {
        &self.carriers
    }

    /// Carrier serving `job`, or `None` if there is no such job.
    pub fn carrier_for(&self, job: usize) -> Option<usize> {
        self.carriers.get(job).copied()
    }

    /// `(job, carrier)` pairs in job order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.carriers.iter().copied().enumerate()
    }

    /// Number of jobs assigned.
    pub fn num_jobs(&self) -> usize {
        self.carriers.len()
    }

    /// Distance from the serving carrier's home to the origin of `job`.
    pub fn pickup_distance_for(&self, job: usize) -> Option<f64> {
        self.pickup_distances.get(job).copied()
    }

    /// Sum of carrier-to-pickup distances.
    pub fn pickup_distance(&self) -> f64 {
        self.pickup_distance
    }

    /// Sum of every job's origin-to-destination leg (independent of the assignment).
    pub fn fixed_distance(&self) -> f64 {
        self.fixed_distance
    }

    /// Total travel: pickup plus fixed legs.
    pub fn total_distance(&self) -> f64 {
        self.pickup_distance + self.fixed_distance
    }

    /// Counters from the search that produced this assignment.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}
