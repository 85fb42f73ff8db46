//! Dense carrier-to-pickup distance matrix.

use crate::models::{Carrier, Job};

/// A dense `carriers × jobs` matrix of pickup distances, stored in row-major order.
///
/// Row `i` belongs to carrier `i`, column `j` to job `j`. Alongside the matrix
/// it keeps, for every job, the smallest pickup distance over all carriers;
/// summed over the undecided jobs these form the relaxation bound of the
/// branch-and-bound search.
///
/// # Examples
///
/// ```
/// use u_assign::models::{Carrier, Job, Position};
/// use u_assign::distance::PickupMatrix;
///
/// let carriers = vec![
///     Carrier::new("near", Position::new(0.0, 0.0, "A")),
///     Carrier::new("far", Position::new(0.0, 2.0, "B")),
/// ];
/// let jobs = vec![Job::new(
///     "boxes",
///     Position::new(0.0, 1.0, "C"),
///     Position::new(1.0, 1.0, "D"),
/// )];
/// let pm = PickupMatrix::build(&carriers, &jobs);
/// assert_eq!(pm.num_carriers(), 2);
/// assert_eq!(pm.num_jobs(), 1);
/// assert_eq!(pm.min_for_job(0), pm.get(0, 0).min(pm.get(1, 0)));
/// ```
#[derive(Debug, Clone)]
pub struct PickupMatrix {
    data: Vec<f64>,
    num_carriers: usize,
    num_jobs: usize,
    min_per_job: Vec<f64>,
}

impl PickupMatrix {
    /// Computes haversine pickup distances from every carrier home to every job origin.
    pub fn build(carriers: &[Carrier], jobs: &[Job]) -> Self {
        let mut data = Vec::with_capacity(carriers.len() * jobs.len());
        for carrier in carriers {
            for job in jobs {
                data.push(carrier.home().distance_to(job.origin()));
            }
        }
        Self::from_parts(carriers.len(), jobs.len(), data)
    }

    /// Creates a matrix from explicit row-major distances.
    ///
    /// Returns `None` if the data length doesn't match `num_carriers * num_jobs`
    /// or any entry is negative or non-finite.
    pub fn from_data(num_carriers: usize, num_jobs: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != num_carriers * num_jobs {
            return None;
        }
        if data.iter().any(|d| !d.is_finite() || *d < 0.0) {
            return None;
        }
        Some(Self::from_parts(num_carriers, num_jobs, data))
    }

    fn from_parts(num_carriers: usize, num_jobs: usize, data: Vec<f64>) -> Self {
        let mut min_per_job = vec![f64::INFINITY; num_jobs];
        for row in data.chunks(num_jobs.max(1)).take(num_carriers) {
            for (min, &d) in min_per_job.iter_mut().zip(row) {
                if d < *min {
                    *min = d;
                }
            }
        }

        Self {
            data,
            num_carriers,
            num_jobs,
            min_per_job,
        }
    }

    /// Pickup distance from carrier `carrier` to the origin of job `job`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, carrier: usize, job: usize) -> f64 {
        assert!(job < self.num_jobs, "job index out of bounds");
        self.data[carrier * self.num_jobs + job]
    }

    /// Number of carriers (rows).
    pub fn num_carriers(&self) -> usize {
        self.num_carriers
    }

    /// Number of jobs (columns).
    pub fn num_jobs(&self) -> usize {
        self.num_jobs
    }

    /// Smallest pickup distance to job `job` over all carriers.
    ///
    /// `f64::INFINITY` when there are no carriers.
    pub fn min_for_job(&self, job: usize) -> f64 {
        self.min_per_job[job]
    }

    /// Per-job minima, indexed by job.
    pub fn job_minima(&self) -> &[f64] {
        &self.min_per_job
    }

    /// `cost` plus the per-job minima of jobs `from..num_jobs`, added one job
    /// at a time in index order.
    ///
    /// The additions run in the same order as a search accumulates a
    /// completion, so the result is never above the accumulated cost of any
    /// completion of a partial assignment costing `cost`, not even by one ulp.
    pub fn completion_bound(&self, cost: f64, from: usize) -> f64 {
        self.min_per_job[from..]
            .iter()
            .fold(cost, |bound, &min| bound + min)
    }

    /// Cheapest carrier for `job` among those not flagged in `used`.
    ///
    /// Strict comparison: the lowest carrier index wins ties.
    /// Returns `None` if every carrier is used.
    pub fn nearest_free_carrier(&self, job: usize, used: &[bool]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (carrier, &taken) in used.iter().enumerate().take(self.num_carriers) {
            if taken {
                continue;
            }
            let d = self.get(carrier, job);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((carrier, d)),
            }
        }
        best.map(|(carrier, _)| carrier)
    }
}
