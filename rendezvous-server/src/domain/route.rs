//! Route summaries and turn-by-turn steps.

use serde::Serialize;

use super::LatLon;

/// The kind of maneuver a step represents.
///
/// The routing service tags each instruction with a maneuver type and
/// modifier string; those are folded into this closed set so the
/// presenter's glyph table is checked exhaustively at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    Depart,
    Continue,
    SlightRight,
    Right,
    SharpRight,
    UTurn,
    SharpLeft,
    Left,
    SlightLeft,
    Roundabout,
    Arrive,
    /// Anything the routing service emits that we don't recognize.
    Other,
}

impl StepKind {
    /// The directional glyph shown next to the instruction text.
    pub fn glyph(&self) -> &'static str {
        match self {
            StepKind::Depart => "\u{2B06}",      // ⬆
            StepKind::Continue => "\u{2B06}",    // ⬆
            StepKind::SlightRight => "\u{2197}", // ↗
            StepKind::Right => "\u{27A1}",       // ➡
            StepKind::SharpRight => "\u{2198}",  // ↘
            StepKind::UTurn => "\u{21A9}",       // ↩
            StepKind::SharpLeft => "\u{2199}",   // ↙
            StepKind::Left => "\u{2B05}",        // ⬅
            StepKind::SlightLeft => "\u{2196}",  // ↖
            StepKind::Roundabout => "\u{27F3}",  // ⟳
            StepKind::Arrive => "\u{2691}",      // ⚑
            StepKind::Other => "\u{2022}",       // •
        }
    }
}

/// One turn-by-turn instruction.
#[derive(Debug, Clone, Serialize)]
pub struct Step {
    pub kind: StepKind,
    /// Free-text instruction, e.g. "Turn right onto 9 Ave SE".
    pub text: String,
    /// Length of this segment, in meters.
    pub distance_m: f64,
    /// Duration of this segment, in seconds.
    pub duration_secs: f64,
}

impl Step {
    pub fn new(
        kind: StepKind,
        text: impl Into<String>,
        distance_m: f64,
        duration_secs: f64,
    ) -> Self {
        Self {
            kind,
            text: text.into(),
            distance_m,
            duration_secs,
        }
    }
}

/// Where a route summary came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteSource {
    /// Produced by the routing service over the real road network.
    Routed,
    /// Straight-line fallback estimate.
    Estimated,
}

/// A complete route between two points.
///
/// Produced fresh per request; a new summary replaces any prior one.
#[derive(Debug, Clone, Serialize)]
pub struct RouteSummary {
    /// Total travel time, in seconds.
    pub duration_secs: f64,
    /// Total distance, in meters.
    pub distance_m: f64,
    /// Ordered instructions from departure to arrival.
    pub steps: Vec<Step>,
    /// Real route or fallback estimate.
    pub source: RouteSource,
    /// Polyline for the map surface to draw, as lat/lon vertices.
    pub geometry: Vec<LatLon>,
}

impl RouteSummary {
    /// Total duration rounded to whole minutes.
    pub fn duration_mins(&self) -> i64 {
        (self.duration_secs / 60.0).round() as i64
    }

    /// Total distance in kilometers.
    pub fn distance_km(&self) -> f64 {
        self.distance_m / 1000.0
    }
}
