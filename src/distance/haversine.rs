//! Great-circle distance on a spherical Earth.

use crate::models::Position;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometers between two positions.
///
/// Non-negative and symmetric; zero when the positions coincide.
///
/// # Examples
///
/// ```
/// use u_assign::models::Position;
/// use u_assign::distance::haversine_km;
///
/// let munich = Position::new(48.1372, 11.5756, "Munich");
/// let berlin = Position::new(52.5186, 13.4083, "Berlin");
/// let d = haversine_km(&munich, &berlin);
/// assert!((d - 504.2).abs() < 0.05);
/// ```
pub fn haversine_km(a: &Position, b: &Position) -> f64 {
    let d_lat = (b.latitude() - a.latitude()).to_radians();
    let d_lon = (b.longitude() - a.longitude()).to_radians();
    let lat_a = a.latitude().to_radians();
    let lat_b = b.latitude().to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}
