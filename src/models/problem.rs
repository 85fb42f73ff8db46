//! The assignment problem: registered carriers and jobs.

use super::{Assignment, Carrier, Job};
use crate::bnb::{self, BnbConfig};
use crate::error::SolveError;

/// Carriers and jobs to be matched one-to-one.
///
/// Registration does no validation; [`solve`](Self::solve) checks that
/// there is at least one job, at least one carrier, and no more jobs than
/// carriers.
///
/// # Examples
///
/// ```
/// use u_assign::models::{AssignmentProblem, Carrier, Job, Position};
///
/// let mut problem = AssignmentProblem::new();
/// problem.add_carrier(Carrier::new(
///     "Hartford Plastics Incartford",
///     Position::new(34.79981, -87.677251, "Florence").with_region("AL"),
/// ));
/// problem.add_job(Job::new(
///     "Light bulbs",
///     Position::new(36.876719, -89.5878579, "Sikeston").with_region("MO"),
///     Position::new(32.9342919, -97.0780654, "Grapevine").with_region("TX"),
/// ));
///
/// let assignment = problem.solve().unwrap();
/// assert_eq!(assignment.carriers(), &[0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AssignmentProblem {
    carriers: Vec<Carrier>,
    jobs: Vec<Job>,
}

impl AssignmentProblem {
    /// Creates an empty problem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a problem from existing carriers and jobs.
    pub fn with_entities(carriers: Vec<Carrier>, jobs: Vec<Job>) -> Self {
        Self { carriers, jobs }
    }

    pub fn add_carrier(&mut self, carrier: Carrier) {
        self.carriers.push(carrier);
    }

    pub fn add_job(&mut self, job: Job) {
        self.jobs.push(job);
    }

    /// Removes all carriers.
    pub fn clear_carriers(&mut self) {
        self.carriers.clear();
    }

    /// Removes all jobs.
    pub fn clear_jobs(&mut self) {
        self.jobs.clear();
    }

    pub fn carriers(&self) -> &[Carrier] {
        &self.carriers
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn carrier_count(&self) -> usize {
        self.carriers.len()
    }

    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Solves with the default configuration.
    ///
    /// # Errors
    ///
    /// See [`bnb::solve`].
    pub fn solve(&self) -> Result<Assignment, SolveError> {
        self.solve_with(&BnbConfig::default())
    }

    /// Solves with an explicit configuration.
    ///
    /// # Errors
    ///
    /// See [`bnb::solve`].
    pub fn solve_with(&self, config: &BnbConfig) -> Result<Assignment, SolveError> {
        bnb::solve(&self.carriers, &self.jobs, config)
    }
}
