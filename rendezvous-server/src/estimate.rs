//! Straight-line fallback route estimation.
//!
//! When the routing service fails or finds no route, the demo still
//! needs something to show. This module synthesizes a minimal route
//! from the great-circle distance and a fixed assumed speed per travel
//! mode. It is a one-shot deterministic substitute; the failed request
//! is never retried.

use crate::domain::{LatLon, RouteSource, RouteSummary, Step, StepKind, TravelMode};

/// Build an estimated route from `start` to `end`.
///
/// Duration is `distance / assumed_speed(mode)`. The step list is the
/// minimal depart/traverse/arrive shape, with the traverse step
/// carrying the whole distance and duration.
pub fn fallback_route(start: LatLon, end: LatLon, mode: TravelMode) -> RouteSummary {
    let distance_m = start.haversine_distance_m(&end);
    let speed_m_per_s = mode.assumed_speed_kmh() * 1000.0 / 3600.0;
    let duration_secs = distance_m / speed_m_per_s;

    let traverse_text = match mode {
        TravelMode::Driving => "Drive toward the destination (straight-line estimate)",
        TravelMode::Walking => "Walk toward the destination (straight-line estimate)",
    };

    RouteSummary {
        duration_secs,
        distance_m,
        steps: vec![
            Step::new(StepKind::Depart, "Head out", 0.0, 0.0),
            Step::new(StepKind::Continue, traverse_text, distance_m, duration_secs),
            Step::new(StepKind::Arrive, "Arrive at your destination", 0.0, 0.0),
        ],
        source: RouteSource::Estimated,
        geometry: vec![start, end],
    }
}
