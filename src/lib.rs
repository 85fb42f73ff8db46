//! # u-assign
//!
//! Exact one-to-one assignment of cargoes to trucks minimizing total travel
//! distance. Each truck carries at most one cargo; each cargo is carried by
//! exactly one truck. Travel is the great-circle distance from the truck to
//! the pickup plus the fixed pickup-to-dropoff leg.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Position, Carrier, Job, AssignmentProblem, Assignment)
//! - [`distance`] — Haversine distance and the carrier × job pickup matrix
//! - [`constructive`] — Greedy seeding of the initial incumbent
//! - [`bnb`] — Branch-and-bound search, configuration, statistics
//! - [`evaluation`] — Assignment cost and feasibility checks
//! - [`priority`] — Injectable carrier priority sources
//! - [`records`] — Truck and cargo file loading
//! - [`report`] — Text and JSON rendering of a solved assignment

pub mod bnb;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod priority;
pub mod records;
pub mod report;

pub use error::{RecordError, SolveError};
