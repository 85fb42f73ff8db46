//! Distances between positions and the carrier-to-pickup cost matrix.
//!
//! - [`haversine_km`] — great-circle distance in kilometers
//! - [`PickupMatrix`] — dense carrier × job matrix with per-job minima

mod haversine;
mod matrix;

pub use haversine::{haversine_km, EARTH_RADIUS_KM};
pub use matrix::PickupMatrix;
