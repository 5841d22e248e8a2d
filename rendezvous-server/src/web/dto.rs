//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{LatLon, RouteSource, TravelMode, Zone};
use crate::presenter::{RouteStyle, StepRow};

/// Request to report the device's position.
///
/// Both fields absent means the device could not resolve a position;
/// the server substitutes the fixed default.
#[derive(Debug, Deserialize)]
pub struct LocateRequest {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Request to switch travel mode.
#[derive(Debug, Deserialize)]
pub struct ModeRequest {
    pub mode: TravelMode,
}

/// Request to select a destination zone.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Zone name, as listed by `/api/zones`.
    pub zone: String,
}

/// The zone catalog.
#[derive(Debug, Serialize)]
pub struct ZonesResponse {
    pub zones: Vec<Zone>,
}

/// A route rendered for the map surface and directions panel.
#[derive(Debug, Serialize)]
pub struct RouteView {
    /// Total duration in seconds.
    pub duration_secs: f64,

    /// Total distance in meters.
    pub distance_m: f64,

    /// Real route or straight-line estimate.
    pub source: RouteSource,

    /// Drawing parameters for the map polyline.
    pub style: RouteStyle,

    /// Polyline vertices.
    pub geometry: Vec<LatLon>,

    /// Rendered instruction rows.
    pub steps: Vec<StepRow>,
}

/// Full session snapshot returned by every mutating endpoint.
///
/// The frontend redraws from this rather than diffing.
#[derive(Debug, Serialize)]
pub struct SessionView {
    /// Status line to display.
    pub status: String,

    /// Current travel mode.
    pub mode: TravelMode,

    /// Resolved position, if any.
    pub position: Option<LatLon>,

    /// Whether the position is the fixed fallback.
    pub fallback_located: bool,

    /// Selected zone name, if any.
    pub destination: Option<String>,

    /// Formatted arrival estimate, if known.
    pub eta: Option<String>,

    /// Current route, if any.
    pub route: Option<RouteView>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
