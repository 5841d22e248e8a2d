//! Geographic coordinates.
//!
//! Positions are plain WGS84 latitude/longitude pairs in degrees. The
//! routing service and the map surface both speak this format, so no
//! range validation is applied at construction.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mean radius of Earth, in meters.
const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// A latitude/longitude position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    /// Latitude in degrees, north positive.
    pub lat: f64,
    /// Longitude in degrees, east positive.
    pub lon: f64,
}

impl LatLon {
    /// Create a position from latitude and longitude in degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to another position, in meters.
    ///
    /// Uses the haversine formula with the mean Earth radius. This is
    /// the straight-line figure the fallback estimator works from; it
    /// ignores the road network entirely.
    pub fn haversine_distance_m(&self, other: &LatLon) -> f64 {
        let lat1 = self.lat.to_radians();
        let lon1 = self.lon.to_radians();
        let lat2 = other.lat.to_radians();
        let lon2 = other.lon.to_radians();

        let sin_dlat_half = ((lat2 - lat1) * 0.5).sin();
        let sin_dlon_half = ((lon2 - lon1) * 0.5).sin();

        let h = sin_dlat_half * sin_dlat_half
            + lat1.cos() * lat2.cos() * sin_dlon_half * sin_dlon_half;

        2.0 * EARTH_RADIUS_M * h.sqrt().asin()
    }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lon)
    }
}
