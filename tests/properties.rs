//! Randomized checks of the solver against exhaustive enumeration.

use proptest::prelude::*;

use u_assign::bnb::{optimize, BnbConfig, TieBreak};
use u_assign::constructive::greedy_seed;
use u_assign::distance::PickupMatrix;
use u_assign::evaluation::AssignmentEvaluator;
use u_assign::models::{AssignmentProblem, Carrier, Job, Position};

const EPS: f64 = 1e-9;

/// Cheapest cost over every repeat-free assignment.
fn brute_force(m: &PickupMatrix) -> f64 {
    fn go(m: &PickupMatrix, job: usize, used: &mut [bool], cost: f64, best: &mut f64) {
        if job == m.num_jobs() {
            *best = best.min(cost);
            return;
        }
        for c in 0..m.num_carriers() {
            if !used[c] {
                used[c] = true;
                go(m, job + 1, used, cost + m.get(c, job), best);
                used[c] = false;
            }
        }
    }
    let mut best = f64::INFINITY;
    go(m, 0, &mut vec![false; m.num_carriers()], 0.0, &mut best);
    best
}

/// Cheapest cost over every repeat-free assignment, with the highest and
/// lowest carrier priority sum among the assignments reaching it exactly.
///
/// Costs are accumulated job by job from zero, the order the solver uses.
fn exhaustive_with_priorities(m: &PickupMatrix, priorities: &[u32]) -> (f64, u32, u32) {
    struct Best {
        cost: f64,
        highest: u32,
        lowest: u32,
    }
    fn go(
        m: &PickupMatrix,
        priorities: &[u32],
        job: usize,
        used: &mut [bool],
        (cost, priority): (f64, u32),
        best: &mut Best,
    ) {
        if job == m.num_jobs() {
            if cost < best.cost {
                *best = Best {
                    cost,
                    highest: priority,
                    lowest: priority,
                };
            } else if cost == best.cost {
                best.highest = best.highest.max(priority);
                best.lowest = best.lowest.min(priority);
            }
            return;
        }
        for c in 0..m.num_carriers() {
            if !used[c] {
                used[c] = true;
                let next = (cost + m.get(c, job), priority + priorities[c]);
                go(m, priorities, job + 1, used, next, best);
                used[c] = false;
            }
        }
    }
    let mut best = Best {
        cost: f64::INFINITY,
        highest: 0,
        lowest: u32::MAX,
    };
    let mut used = vec![false; m.num_carriers()];
    go(m, priorities, 0, &mut used, (0.0, 0), &mut best);
    (best.cost, best.highest, best.lowest)
}

fn priority_sum(carriers: &[usize], priorities: &[u32]) -> u32 {
    carriers.iter().map(|&c| priorities[c]).sum()
}

/// (carriers, jobs, row-major distances) with 1 <= jobs <= carriers <= 6.
fn instance() -> impl Strategy<Value = (usize, usize, Vec<f64>)> {
    (1usize..=6)
        .prop_flat_map(|m| (Just(m), 1..=m))
        .prop_flat_map(|(m, n)| {
            (
                Just(m),
                Just(n),
                prop::collection::vec(0.0f64..1000.0, m * n),
            )
        })
}

/// Like [`instance`], but distances come from a few short decimals so that
/// equal-cost optima are common, plus one priority per carrier.
fn tied_instance() -> impl Strategy<Value = (usize, usize, Vec<f64>, Vec<u32>)> {
    (1usize..=5)
        .prop_flat_map(|m| (Just(m), 1..=m))
        .prop_flat_map(|(m, n)| {
            let distance = prop::sample::select(vec![0.1, 0.2, 0.3, 0.6, 0.7, 1.1]);
            (
                Just(m),
                Just(n),
                prop::collection::vec(distance, m * n),
                prop::collection::vec(0u32..6, m),
            )
        })
}

fn position() -> impl Strategy<Value = Position> {
    (-60.0f64..60.0, -170.0f64..170.0).prop_map(|(lat, lon)| Position::new(lat, lon, "p"))
}

proptest! {
    #[test]
    fn returns_feasible_assignment((m, n, data) in instance()) {
        let matrix = PickupMatrix::from_data(m, n, data).unwrap();
        let best = optimize(&matrix, &[], &BnbConfig::default()).unwrap();
        let evaluator = AssignmentEvaluator::new(&matrix);
        prop_assert_eq!(best.carriers.len(), n);
        prop_assert!(evaluator.is_feasible(&best.carriers));
        prop_assert!((evaluator.pickup_cost(&best.carriers) - best.pickup_cost).abs() < EPS);
    }

    #[test]
    fn matches_exhaustive_optimum((m, n, data) in instance()) {
        let matrix = PickupMatrix::from_data(m, n, data).unwrap();
        let best = optimize(&matrix, &[], &BnbConfig::default()).unwrap();
        prop_assert!((best.pickup_cost - brute_force(&matrix)).abs() < EPS);
    }

    #[test]
    fn never_worse_than_greedy((m, n, data) in instance()) {
        let matrix = PickupMatrix::from_data(m, n, data).unwrap();
        let greedy = greedy_seed(&matrix).unwrap();
        let best = optimize(&matrix, &[], &BnbConfig::default()).unwrap();
        prop_assert!(best.pickup_cost <= greedy.cost() + EPS);
        prop_assert_eq!(best.stats.greedy_cost, greedy.cost());
    }

    #[test]
    fn tie_break_rules_agree_on_cost(
        (m, n, data) in instance(),
        priorities in prop::collection::vec(0u32..6, 6),
    ) {
        let matrix = PickupMatrix::from_data(m, n, data).unwrap();
        let priorities = &priorities[..m];
        let base = optimize(&matrix, priorities, &BnbConfig::default()).unwrap();
        for rule in [TieBreak::HighestPriority, TieBreak::LowestPriority] {
            let config = BnbConfig::default().with_tie_break(rule);
            let other = optimize(&matrix, priorities, &config).unwrap();
            prop_assert!((other.pickup_cost - base.pickup_cost).abs() < EPS);
        }
    }

    #[test]
    fn tie_break_rules_pick_extreme_priority((m, n, data, priorities) in tied_instance()) {
        let matrix = PickupMatrix::from_data(m, n, data).unwrap();
        let (cost, highest, lowest) = exhaustive_with_priorities(&matrix, &priorities);

        let first = optimize(&matrix, &priorities, &BnbConfig::default()).unwrap();
        prop_assert_eq!(first.pickup_cost, cost);

        let config = BnbConfig::default().with_tie_break(TieBreak::HighestPriority);
        let high = optimize(&matrix, &priorities, &config).unwrap();
        prop_assert_eq!(high.pickup_cost, cost);
        prop_assert_eq!(priority_sum(&high.carriers, &priorities), highest);

        let config = BnbConfig::default().with_tie_break(TieBreak::LowestPriority);
        let low = optimize(&matrix, &priorities, &config).unwrap();
        prop_assert_eq!(low.pickup_cost, cost);
        prop_assert_eq!(priority_sum(&low.carriers, &priorities), lowest);
    }

    #[test]
    fn greedy_optimal_iff_cost_unchanged((m, n, data, priorities) in tied_instance()) {
        let matrix = PickupMatrix::from_data(m, n, data).unwrap();
        for rule in [TieBreak::FirstFound, TieBreak::HighestPriority, TieBreak::LowestPriority] {
            let config = BnbConfig::default().with_tie_break(rule);
            let best = optimize(&matrix, &priorities, &config).unwrap();
            prop_assert_eq!(
                best.stats.greedy_was_optimal(),
                best.pickup_cost == best.stats.greedy_cost
            );
        }
    }

    #[test]
    fn extra_carrier_never_hurts(
        (m, n, data) in instance(),
        extra in prop::collection::vec(0.0f64..1000.0, 6),
    ) {
        let before = PickupMatrix::from_data(m, n, data.clone()).unwrap();
        let mut grown = data;
        grown.extend_from_slice(&extra[..n]);
        let after = PickupMatrix::from_data(m + 1, n, grown).unwrap();

        let config = BnbConfig::default();
        let cost_before = optimize(&before, &[], &config).unwrap().pickup_cost;
        let cost_after = optimize(&after, &[], &config).unwrap().pickup_cost;
        prop_assert!(cost_after <= cost_before + EPS);
    }

    #[test]
    fn total_is_pickup_plus_fixed(
        homes in prop::collection::vec(position(), 1..5),
        legs in prop::collection::vec((position(), position()), 1..5),
    ) {
        prop_assume!(legs.len() <= homes.len());
        let carriers: Vec<Carrier> = homes
            .into_iter()
            .enumerate()
            .map(|(i, p)| Carrier::new(format!("truck {i}"), p))
            .collect();
        let jobs: Vec<Job> = legs
            .into_iter()
            .enumerate()
            .map(|(j, (o, d))| Job::new(format!("cargo {j}"), o, d))
            .collect();
        let problem = AssignmentProblem::with_entities(carriers, jobs);
        let sol = problem.solve().unwrap();

        let mut expected = 0.0;
        for (job, carrier) in sol.pairs() {
            let j = &problem.jobs()[job];
            let pickup = problem.carriers()[carrier].home().distance_to(j.origin());
            expected += pickup + j.fixed_distance();
        }
        prop_assert!((sol.total_distance() - expected).abs() < 1e-6);
    }
}

#[cfg(feature = "parallel")]
proptest! {
    #[test]
    fn parallel_matches_sequential((m, n, data, priorities) in tied_instance()) {
        let matrix = PickupMatrix::from_data(m, n, data).unwrap();
        for rule in [TieBreak::FirstFound, TieBreak::HighestPriority, TieBreak::LowestPriority] {
            let config = BnbConfig::default().with_tie_break(rule);
            let seq = optimize(&matrix, &priorities, &config).unwrap();
            let par = optimize(&matrix, &priorities, &config.with_parallel(true)).unwrap();
            prop_assert_eq!(par.pickup_cost, seq.pickup_cost);
            prop_assert!(AssignmentEvaluator::new(&matrix).is_feasible(&par.carriers));
            if rule != TieBreak::FirstFound {
                prop_assert_eq!(
                    priority_sum(&par.carriers, &priorities),
                    priority_sum(&seq.carriers, &priorities)
                );
            }
        }
    }
}
