//! Cost and feasibility checks for assignment vectors.

mod evaluator;

pub use evaluator::{AssignmentEvaluator, Violation};
