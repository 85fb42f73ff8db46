//! Assignment evaluator: pickup costs and feasibility.

use crate::distance::PickupMatrix;

/// A reason an assignment vector is not a valid one-to-one assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The vector does not have one entry per job.
    LengthMismatch {
        /// Number of jobs in the matrix.
        expected: usize,
        /// Length of the vector.
        found: usize,
    },
    /// A job names a carrier that does not exist.
    CarrierOutOfRange {
        /// Job index.
        job: usize,
        /// The offending carrier index.
        carrier: usize,
    },
    /// A carrier serves more than one job.
    CarrierReused {
        /// Carrier index.
        carrier: usize,
        /// First job served by the carrier.
        first_job: usize,
        /// Later job that reuses it.
        job: usize,
    },
}

/// Evaluates assignment vectors (carrier index per job) against a pickup matrix.
///
/// # Examples
///
/// ```
/// use u_assign::distance::PickupMatrix;
/// use u_assign::evaluation::{AssignmentEvaluator, Violation};
///
/// let m = PickupMatrix::from_data(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// let evaluator = AssignmentEvaluator::new(&m);
/// assert_eq!(evaluator.pickup_cost(&[1, 0]), 5.0);
/// assert!(evaluator.is_feasible(&[1, 0]));
/// assert_eq!(
///     evaluator.violations(&[0, 0]),
///     vec![Violation::CarrierReused { carrier: 0, first_job: 0, job: 1 }]
/// );
/// ```
pub struct AssignmentEvaluator<'a> {
    distances: &'a PickupMatrix,
}

impl<'a> AssignmentEvaluator<'a> {
    /// Creates an evaluator over the given matrix.
    pub fn new(distances: &'a PickupMatrix) -> Self {
        Self { distances }
    }

    /// Pickup distance of each job under `carriers`.
    ///
    /// # Panics
    ///
    /// Panics if a carrier or job index is out of bounds.
    pub fn pickup_distances(&self, carriers: &[usize]) -> Vec<f64> {
        carriers
            .iter()
            .enumerate()
            .map(|(job, &carrier)| self.distances.get(carrier, job))
            .collect()
    }

    /// Sum of the pickup distances, accumulated in job order.
    ///
    /// # Panics
    ///
    /// Panics if a carrier or job index is out of bounds.
    pub fn pickup_cost(&self, carriers: &[usize]) -> f64 {
        let mut cost = 0.0;
        for (job, &carrier) in carriers.iter().enumerate() {
            cost += self.distances.get(carrier, job);
        }
        cost
    }

    /// All violations of the one-to-one assignment constraints.
    pub fn violations(&self, carriers: &[usize]) -> Vec<Violation> {
        let mut violations = Vec::new();
        if carriers.len() != self.distances.num_jobs() {
            violations.push(Violation::LengthMismatch {
                expected: self.distances.num_jobs(),
                found: carriers.len(),
            });
        }

        let mut served_by: Vec<Option<usize>> = vec![None; self.distances.num_carriers()];
        for (job, &carrier) in carriers.iter().enumerate() {
            match served_by.get_mut(carrier) {
                None => violations.push(Violation::CarrierOutOfRange { job, carrier }),
                Some(Some(first_job)) => violations.push(Violation::CarrierReused {
                    carrier,
                    first_job: *first_job,
                    job,
                }),
                Some(slot) => *slot = Some(job),
            }
        }
        violations
    }

    /// `true` if `carriers` has no violations.
    pub fn is_feasible(&self, carriers: &[usize]) -> bool {
        self.violations(carriers).is_empty()
    }
}
