//! Geospatial utilities for Roadwatch.
//!
//! This crate provides:
//! - Haversine distance calculations
//! - Radius-based proximity filtering
//! - Coordinate parsing for CLI input
//!
//! # Example
//!
//! ```
//! use roadwatch_geo::{haversine_distance_meters, Coordinate};
//!
//! let coord1 = Coordinate::new(52.5200, 13.4050); // Berlin
//! let coord2 = Coordinate::new(48.8566, 2.3522);  // Paris
//!
//! let distance_m = haversine_distance_meters(&coord1, &coord2);
//! assert!((distance_m - 878_000.0).abs() < 10_000.0); // ~878 km
//! ```

mod haversine;
mod proximity;
mod error;

pub use haversine::{haversine_distance, haversine_distance_meters, EARTH_RADIUS_KM, EARTH_RADIUS_M};
pub use proximity::{within_radius, Located};
pub use error::{GeoError, Result};

use std::str::FromStr;

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees (-90 to 90)
    /// * `longitude` - Longitude in degrees (-180 to 180)
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Returns true if the coordinate has valid values.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl FromStr for Coordinate {
    type Err = GeoError;

    /// Parses a `"lat,lng"` pair, e.g. `"52.52,13.405"`.
    fn from_str(s: &str) -> Result<Self> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| GeoError::InvalidCoordinate(format!("expected \"lat,lng\", got {s:?}")))?;

        let latitude: f64 = lat
            .trim()
            .parse()
            .map_err(|_| GeoError::InvalidCoordinate(format!("latitude is not a number: {lat:?}")))?;
        let longitude: f64 = lng
            .trim()
            .parse()
            .map_err(|_| GeoError::InvalidCoordinate(format!("longitude is not a number: {lng:?}")))?;

        let coord = Self::new(latitude, longitude);
        if !coord.is_valid() {
            return Err(GeoError::InvalidCoordinate(format!(
                "out of range: latitude must be in [-90, 90], longitude in [-180, 180], got ({latitude}, {longitude})"
            )));
        }
        Ok(coord)
    }
}
