//! Job (cargo) type.

use serde::Serialize;

use super::Position;

/// A transport job: pick up at `origin`, deliver to `destination`.
///
/// The origin-to-destination leg is the same whichever carrier serves the
/// job, so its length is computed once at construction.
///
/// # Examples
///
/// ```
/// use u_assign::models::{Job, Position};
///
/// let job = Job::new(
///     "Light bulbs",
///     Position::new(36.876719, -89.5878579, "Sikeston"),
///     Position::new(32.9342919, -97.0780654, "Grapevine"),
/// );
/// assert!((job.fixed_distance() - 811.2).abs() < 0.05);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Job {
    name: String,
    origin: Position,
    destination: Position,
    fixed_distance: f64,
}

impl Job {
    /// Creates a job and computes its fixed leg distance.
    pub fn new(name: impl Into<String>, origin: Position, destination: Position) -> Self {
        let fixed_distance = origin.distance_to(&destination);
        Self {
            name: name.into(),
            origin,
            destination,
            fixed_distance,
        }
    }

    /// Product or job label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pickup position.
    pub fn origin(&self) -> &Position {
        &self.origin
    }

    /// Drop-off position.
    pub fn destination(&self) -> &Position {
        &self.destination
    }

    /// Origin-to-destination distance in kilometers.
    pub fn fixed_distance(&self) -> f64 {
        self.fixed_distance
    }
}
