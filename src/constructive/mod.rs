//! Constructive heuristics for the initial incumbent.
//!
//! - [`greedy_seed`] — nearest free carrier per job in job order, O(N·M)

mod greedy;

pub use greedy::{greedy_seed, GreedySeed};
