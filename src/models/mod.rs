//! Domain model types for the truck-to-cargo assignment problem.
//!
//! Positions carry geographic coordinates, carriers sit at a home position,
//! jobs move cargo from an origin to a destination, and an
//! [`AssignmentProblem`] collects both sides and solves the matching.

mod assignment;
mod carrier;
mod job;
mod position;
mod problem;

pub use assignment::Assignment;
pub use carrier::Carrier;
pub use job::Job;
pub use position::Position;
pub use problem::AssignmentProblem;
