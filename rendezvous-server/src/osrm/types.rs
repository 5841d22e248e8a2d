//! Wire-format types for the OSRM route service.
//!
//! These mirror the JSON shape of the OSRM v5 `/route` endpoint with
//! `steps=true&geometries=geojson`. Conversion into domain types
//! happens in [`super::convert`].

use serde::Deserialize;

/// Top-level response from `/route/v1/{profile}/...`.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteResponse {
    /// "Ok" on success; "NoRoute", "InvalidQuery", etc. on failure.
    pub code: String,

    /// Human-readable error message, present on failure.
    #[serde(default)]
    pub message: Option<String>,

    /// Candidate routes, best first.
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

/// A single route alternative.
#[derive(Debug, Clone, Deserialize)]
pub struct OsrmRoute {
    /// Total duration in seconds.
    pub duration: f64,

    /// Total distance in meters.
    pub distance: f64,

    /// GeoJSON line geometry of the whole route.
    #[serde(default)]
    pub geometry: Option<Geometry>,

    /// One leg per waypoint pair.
    #[serde(default)]
    pub legs: Vec<OsrmLeg>,
}

/// GeoJSON LineString geometry.
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    /// Vertices as [lon, lat] pairs (GeoJSON axis order).
    #[serde(default)]
    pub coordinates: Vec<[f64; 2]>,
}

/// A leg between two consecutive waypoints.
#[derive(Debug, Clone, Deserialize)]
pub struct OsrmLeg {
    #[serde(default)]
    pub steps: Vec<OsrmStep>,
}

/// One turn-by-turn step.
#[derive(Debug, Clone, Deserialize)]
pub struct OsrmStep {
    /// Road name, may be empty.
    #[serde(default)]
    pub name: String,

    /// Step distance in meters.
    pub distance: f64,

    /// Step duration in seconds.
    pub duration: f64,

    pub maneuver: OsrmManeuver,
}

/// Maneuver metadata for a step.
#[derive(Debug, Clone, Deserialize)]
pub struct OsrmManeuver {
    /// Maneuver type: "depart", "turn", "arrive", "roundabout", ...
    #[serde(rename = "type")]
    pub maneuver_type: String,

    /// Direction modifier: "left", "slight right", "uturn", ...
    #[serde(default)]
    pub modifier: Option<String>,
}
