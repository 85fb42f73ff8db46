//! Error types.

use thiserror::Error;

/// Why a problem could not be solved.
///
/// All variants are detected before the search starts and describe the
/// input, so retrying without changing the problem gives the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("there are no cargoes in the problem")]
    NoJobs,

    #[error("there are no trucks in the problem")]
    NoCarriers,

    #[error("infeasible: {jobs} cargoes must not exceed {carriers} trucks")]
    Infeasible { jobs: usize, carriers: usize },

    #[error("{priorities} priorities given for {carriers} trucks")]
    PriorityCount { carriers: usize, priorities: usize },
}

/// A malformed line in a truck or cargo file.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: invalid {field} {value:?}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("failed to read records: {0}")]
    Io(#[from] std::io::Error),
}
