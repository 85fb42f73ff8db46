//! Greedy nearest-free-carrier seeding.
//!
//! Jobs are taken in index order; each takes the closest carrier that no
//! earlier job has taken. The result is feasible whenever there are at least
//! as many carriers as jobs, but can be far from optimal because early jobs
//! grab carriers that later jobs needed more.
//!
//! # Complexity
//!
//! O(N·M) for N jobs and M carriers.

use crate::distance::PickupMatrix;

/// A complete assignment produced by [`greedy_seed`].
#[derive(Debug, Clone, PartialEq)]
pub struct GreedySeed {
    carriers: Vec<usize>,
    cost: f64,
}

impl GreedySeed {
    /// Carrier index per job.
    pub fn carriers(&self) -> &[usize] {
        &self.carriers
    }

    /// Sum of the chosen pickup distances.
    pub fn cost(&self) -> f64 {
        self.cost
    }
}

/// Builds a first feasible assignment greedily.
///
/// Returns `None` if carriers run out before every job is served.
///
/// # Examples
///
/// ```
/// use u_assign::distance::PickupMatrix;
/// use u_assign::constructive::greedy_seed;
///
/// // rows: carriers, columns: jobs
/// let m = PickupMatrix::from_data(2, 2, vec![1.0, 1.0, 2.0, 10.0]).unwrap();
/// let seed = greedy_seed(&m).unwrap();
/// assert_eq!(seed.carriers(), &[0, 1]);
/// assert_eq!(seed.cost(), 11.0);
/// ```
pub fn greedy_seed(distances: &PickupMatrix) -> Option<GreedySeed> {
    let mut used = vec![false; distances.num_carriers()];
    let mut carriers = Vec::with_capacity(distances.num_jobs());
    let mut cost = 0.0;

    for job in 0..distances.num_jobs() {
        let carrier = distances.nearest_free_carrier(job, &used)?;
        used[carrier] = true;
        carriers.push(carrier);
        cost += distances.get(carrier, job);
    }

    Some(GreedySeed { carriers, cost })
}
