//! Exact branch-and-bound assignment of jobs to carriers.
//!
//! - [`solve`] — full pipeline over carrier and job entities
//! - [`optimize`] — the search over an explicit [`PickupMatrix`](crate::distance::PickupMatrix)
//! - [`BnbConfig`] / [`TieBreak`] — search options
//! - [`SearchStats`] — node and pruning counters

mod config;
#[cfg(feature = "parallel")]
mod parallel;
mod search;
mod solver;
mod stats;

pub use config::{BnbConfig, TieBreak};
pub use solver::{optimize, solve, Optimum};
pub use stats::SearchStats;
