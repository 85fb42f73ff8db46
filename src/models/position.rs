//! Geographic position with a display label.

use serde::{Deserialize, Serialize};

use crate::distance::haversine_km;

/// A point on the Earth's surface given in degrees, labelled with a city and
/// an optional region (state, province, ...).
///
/// # Examples
///
/// ```
/// use u_assign::models::Position;
///
/// let p = Position::new(36.876719, -89.5878579, "Sikeston").with_region("MO");
/// assert_eq!(p.label(), "Sikeston, MO");
/// assert_eq!(p.latitude(), 36.876719);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    latitude: f64,
    longitude: f64,
    city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    region: Option<String>,
}

impl Position {
    /// Creates a position from latitude and longitude in degrees.
    pub fn new(latitude: f64, longitude: f64, city: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            city: city.into(),
            region: None,
        }
    }

    /// Sets the region label.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// `"City, Region"`, or just the city when no region is set.
    pub fn label(&self) -> String {
        match &self.region {
            Some(region) => format!("{}, {}", self.city, region),
            None => self.city.clone(),
        }
    }

    /// Great-circle distance in kilometers to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        haversine_km(self, other)
    }
}
