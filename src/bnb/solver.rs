//! Solve orchestration: validate, build the matrix, seed, search.

use serde::Serialize;
use tracing::debug;

use super::search::{BranchAndBound, Incumbent, PartialAssignment};
use super::{BnbConfig, SearchStats};
use crate::constructive::greedy_seed;
use crate::distance::PickupMatrix;
use crate::error::SolveError;
use crate::evaluation::AssignmentEvaluator;
use crate::models::{Assignment, Carrier, Job};

/// Optimal pickup assignment over an explicit matrix.
#[derive(Debug, Clone, Serialize)]
pub struct Optimum {
    /// Carrier index per job.
    pub carriers: Vec<usize>,
    /// Sum of the chosen pickup distances.
    pub pickup_cost: f64,
    pub stats: SearchStats,
}

fn check_dimensions(num_jobs: usize, num_carriers: usize) -> Result<(), SolveError> {
    if num_jobs == 0 {
        return Err(SolveError::NoJobs);
    }
    if num_carriers == 0 {
        return Err(SolveError::NoCarriers);
    }
    if num_jobs > num_carriers {
        return Err(SolveError::Infeasible {
            jobs: num_jobs,
            carriers: num_carriers,
        });
    }
    Ok(())
}

/// Finds a minimum-cost one-to-one assignment of jobs to carriers.
///
/// `priorities[i]` is carrier `i`'s tie-break priority. An empty slice gives
/// every carrier priority 0; otherwise it needs one entry per carrier.
///
/// # Errors
///
/// [`SolveError::NoJobs`], [`SolveError::NoCarriers`] or
/// [`SolveError::Infeasible`] when the matrix has no columns, no rows, or
/// more columns than rows. [`SolveError::PriorityCount`] when `priorities`
/// is neither empty nor one per carrier.
///
/// # Examples
///
/// ```
/// use u_assign::bnb::{optimize, BnbConfig};
/// use u_assign::distance::PickupMatrix;
///
/// // Greedy gives job 0 carrier 0 (cost 1), leaving job 1 with carrier 1 (cost 10).
/// let m = PickupMatrix::from_data(2, 2, vec![1.0, 1.0, 2.0, 10.0]).unwrap();
/// let best = optimize(&m, &[], &BnbConfig::default()).unwrap();
/// assert_eq!(best.carriers, vec![1, 0]);
/// assert_eq!(best.pickup_cost, 3.0);
/// assert_eq!(best.stats.greedy_cost, 11.0);
/// ```
pub fn optimize(
    matrix: &PickupMatrix,
    priorities: &[u32],
    config: &BnbConfig,
) -> Result<Optimum, SolveError> {
    check_dimensions(matrix.num_jobs(), matrix.num_carriers())?;

    let priorities = match priorities.len() {
        0 => vec![0; matrix.num_carriers()],
        n if n == matrix.num_carriers() => priorities.to_vec(),
        n => {
            return Err(SolveError::PriorityCount {
                carriers: matrix.num_carriers(),
                priorities: n,
            })
        }
    };

    let seed = greedy_seed(matrix).ok_or(SolveError::Infeasible {
        jobs: matrix.num_jobs(),
        carriers: matrix.num_carriers(),
    })?;
    let seed_priority = seed
        .carriers()
        .iter()
        .map(|&c| u64::from(priorities[c]))
        .sum();
    debug!(cost = seed.cost(), "greedy seed");

    let incumbent = Incumbent::new(seed.cost(), seed_priority, seed.carriers().to_vec());
    let (best, mut stats) = run_search(matrix, &priorities, config, incumbent);
    stats.greedy_cost = seed.cost();

    debug!(
        cost = best.cost(),
        nodes = stats.nodes,
        node_prunes = stats.node_prunes,
        edge_prunes = stats.edge_prunes,
        improvements = stats.improvements,
        tie_replacements = stats.tie_replacements,
        "branch-and-bound finished"
    );

    Ok(Optimum {
        pickup_cost: best.cost(),
        carriers: best.into_carriers(),
        stats,
    })
}

fn run_search(
    matrix: &PickupMatrix,
    priorities: &[u32],
    config: &BnbConfig,
    incumbent: Incumbent,
) -> (Incumbent, SearchStats) {
    #[cfg(feature = "parallel")]
    if config.parallel {
        return super::parallel::search_parallel(matrix, priorities, config.tie_break, incumbent);
    }
    #[cfg(not(feature = "parallel"))]
    if config.parallel {
        tracing::warn!("built without the `parallel` feature; searching sequentially");
    }

    let mut best = incumbent;
    let mut partial = PartialAssignment::new(matrix.num_jobs(), matrix.num_carriers());
    let mut search = BranchAndBound::new(matrix, priorities, config.tie_break);
    search.search(&mut partial, &mut best);
    (best, search.into_stats())
}

/// Assigns every job to a distinct carrier, minimizing total travel.
///
/// Total travel is the pickup distance (carrier home to job origin) of each
/// assigned pair plus every job's fixed origin-to-destination leg. The
/// pickup matrix is rebuilt on every call.
///
/// # Errors
///
/// Checked in this order: [`SolveError::NoJobs`], [`SolveError::NoCarriers`],
/// [`SolveError::Infeasible`] (more jobs than carriers).
pub fn solve(
    carriers: &[Carrier],
    jobs: &[Job],
    config: &BnbConfig,
) -> Result<Assignment, SolveError> {
    check_dimensions(jobs.len(), carriers.len())?;

    let matrix = PickupMatrix::build(carriers, jobs);
    let priorities: Vec<u32> = carriers.iter().map(Carrier::priority).collect();
    let optimum = optimize(&matrix, &priorities, config)?;

    let evaluator = AssignmentEvaluator::new(&matrix);
    debug_assert!(evaluator.is_feasible(&optimum.carriers));
    let pickup_distances = evaluator.pickup_distances(&optimum.carriers);
    let fixed_distance = jobs.iter().map(Job::fixed_distance).sum();

    Ok(Assignment::new(
        optimum.carriers,
        pickup_distances,
        optimum.pickup_cost,
        fixed_distance,
        optimum.stats,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bnb::TieBreak;

    #[test]
    fn test_dimension_errors() {
        assert_eq!(check_dimensions(0, 0), Err(SolveError::NoJobs));
        assert_eq!(check_dimensions(1, 0), Err(SolveError::NoCarriers));
        assert_eq!(
            check_dimensions(3, 2),
            Err(SolveError::Infeasible {
                jobs: 3,
                carriers: 2
            })
        );
        assert_eq!(check_dimensions(2, 2), Ok(()));
    }

    #[test]
    fn test_optimize_empty_matrix() {
        let m = PickupMatrix::from_data(2, 0, vec![]).expect("valid");
        let err = optimize(&m, &[], &BnbConfig::default()).unwrap_err();
        assert_eq!(err, SolveError::NoJobs);
    }

    #[test]
    fn test_optimize_improves_on_greedy() {
        let m = PickupMatrix::from_data(2, 2, vec![1.0, 1.0, 2.0, 10.0]).expect("valid");
        let best = optimize(&m, &[], &BnbConfig::default()).expect("feasible");
        assert_eq!(best.carriers, vec![1, 0]);
        assert_eq!(best.pickup_cost, 3.0);
        assert_eq!(best.stats.greedy_cost, 11.0);
        assert!(!best.stats.greedy_was_optimal());
    }

    #[test]
    fn test_optimize_greedy_already_optimal() {
        let m = PickupMatrix::from_data(2, 2, vec![1.0, 5.0, 5.0, 1.0]).expect("valid");
        let best = optimize(&m, &[], &BnbConfig::default()).expect("feasible");
        assert_eq!(best.carriers, vec![0, 1]);
        assert!(best.stats.greedy_was_optimal());
    }

    #[test]
    fn test_optimize_tie_break_by_priority() {
        // carriers 0 and 1 are interchangeable for the single job
        let m = PickupMatrix::from_data(3, 1, vec![4.0, 4.0, 9.0]).expect("valid");
        let high = BnbConfig::default().with_tie_break(TieBreak::HighestPriority);
        let low = BnbConfig::default().with_tie_break(TieBreak::LowestPriority);
        assert_eq!(optimize(&m, &[2, 5, 9], &high).expect("ok").carriers, vec![1]);
        assert_eq!(optimize(&m, &[2, 5, 9], &low).expect("ok").carriers, vec![0]);
        assert_eq!(
            optimize(&m, &[2, 5, 9], &BnbConfig::default())
                .expect("ok")
                .carriers,
            vec![0]
        );
    }

    #[test]
    fn test_priority_count_checked() {
        let m = PickupMatrix::from_data(3, 1, vec![4.0, 4.0, 9.0]).expect("valid");
        let err = optimize(&m, &[1, 2], &BnbConfig::default()).unwrap_err();
        assert_eq!(
            err,
            SolveError::PriorityCount {
                carriers: 3,
                priorities: 2
            }
        );
        assert!(optimize(&m, &[], &BnbConfig::default()).is_ok());
        assert!(optimize(&m, &[1, 2, 3], &BnbConfig::default()).is_ok());
    }

    #[test]
    fn test_tie_break_keeps_greedy_optimal() {
        let m = PickupMatrix::from_data(2, 1, vec![5.0, 5.0]).expect("valid");
        let high = BnbConfig::default().with_tie_break(TieBreak::HighestPriority);
        let best = optimize(&m, &[1, 3], &high).expect("feasible");
        assert_eq!(best.carriers, vec![1]);
        assert_eq!(best.pickup_cost, best.stats.greedy_cost);
        assert_eq!(best.stats.improvements, 0);
        assert_eq!(best.stats.tie_replacements, 1);
        assert!(best.stats.greedy_was_optimal());
    }

    #[test]
    fn test_tie_break_sees_optima_equal_only_in_floating_point() {
        // optimal cost 0.7 + 0.1 + 0.3 = 1.0999999999999999; the per-job
        // minima summed right to left would overshoot it by one ulp
        let data = vec![
            0.7, 0.6, 0.6, //
            1.1, 0.3, 0.3, //
            0.7, 0.1, 0.6, //
            1.1, 0.2, 0.3,
        ];
        let m = PickupMatrix::from_data(4, 3, data).expect("valid");
        let priorities = [1, 0, 4, 3];
        let high = BnbConfig::default().with_tie_break(TieBreak::HighestPriority);
        let best = optimize(&m, &priorities, &high).expect("feasible");
        assert_eq!(best.pickup_cost, 0.7 + 0.1 + 0.3);
        let priority: u32 = best.carriers.iter().map(|&c| priorities[c]).sum();
        assert_eq!(priority, 8);
        assert_eq!(best.carriers, vec![0, 2, 3]);
    }

    #[test]
    fn test_parallel_flag_same_cost() {
        let m = PickupMatrix::from_data(3, 2, vec![3.0, 1.0, 1.0, 4.0, 2.0, 2.0]).expect("valid");
        let seq = optimize(&m, &[], &BnbConfig::default()).expect("ok");
        let par = optimize(&m, &[], &BnbConfig::default().with_parallel(true)).expect("ok");
        assert_eq!(seq.pickup_cost, par.pickup_cost);
        assert_eq!(seq.pickup_cost, 2.0);
    }
}
