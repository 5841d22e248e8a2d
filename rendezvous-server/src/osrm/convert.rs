//! Conversion from OSRM wire types to domain types.

use crate::domain::{LatLon, RouteSource, RouteSummary, Step, StepKind};

use super::error::RoutingError;
use super::types::{OsrmRoute, OsrmStep, RouteResponse};

/// Fold an OSRM maneuver (type + modifier) into a [`StepKind`].
///
/// The type string wins for depart/arrive/roundabout; everything else
/// is classified by the direction modifier. Unknown combinations fall
/// through to `Other` rather than failing the whole route.
pub fn step_kind(maneuver_type: &str, modifier: Option<&str>) -> StepKind {
    match maneuver_type {
        "depart" => return StepKind::Depart,
        "arrive" => return StepKind::Arrive,
        "roundabout" | "rotary" | "roundabout turn" | "exit roundabout" | "exit rotary" => {
            return StepKind::Roundabout;
        }
        _ => {}
    }

    match modifier {
        Some("uturn") => StepKind::UTurn,
        Some("sharp right") => StepKind::SharpRight,
        Some("right") => StepKind::Right,
        Some("slight right") => StepKind::SlightRight,
        Some("straight") => StepKind::Continue,
        Some("slight left") => StepKind::SlightLeft,
        Some("left") => StepKind::Left,
        Some("sharp left") => StepKind::SharpLeft,
        Some(_) => StepKind::Other,
        None if maneuver_type == "continue" || maneuver_type == "new name" => StepKind::Continue,
        None => StepKind::Other,
    }
}

/// Synthesize instruction text for a step.
///
/// OSRM's JSON does not carry rendered text, only the maneuver tags
/// and road name, so we build a short English phrase from those.
fn instruction_text(kind: StepKind, road: &str) -> String {
    let phrase = match kind {
        StepKind::Depart => "Head out",
        StepKind::Continue => "Continue",
        StepKind::SlightRight => "Bear right",
        StepKind::Right => "Turn right",
        StepKind::SharpRight => "Turn sharply right",
        StepKind::UTurn => "Make a U-turn",
        StepKind::SharpLeft => "Turn sharply left",
        StepKind::Left => "Turn left",
        StepKind::SlightLeft => "Bear left",
        StepKind::Roundabout => "Take the roundabout",
        StepKind::Arrive => return "Arrive at your destination".to_string(),
        StepKind::Other => "Continue",
    };

    if road.is_empty() {
        phrase.to_string()
    } else {
        format!("{phrase} onto {road}")
    }
}

fn convert_step(step: &OsrmStep) -> Step {
    let kind = step_kind(&step.maneuver.maneuver_type, step.maneuver.modifier.as_deref());
    Step::new(
        kind,
        instruction_text(kind, &step.name),
        step.distance,
        step.duration,
    )
}

fn convert_route(route: &OsrmRoute) -> RouteSummary {
    let steps = route
        .legs
        .iter()
        .flat_map(|leg| leg.steps.iter())
        .map(convert_step)
        .collect();

    // GeoJSON is [lon, lat]; the map surface wants lat/lon.
    let geometry = route
        .geometry
        .as_ref()
        .map(|g| {
            g.coordinates
                .iter()
                .map(|&[lon, lat]| LatLon::new(lat, lon))
                .collect()
        })
        .unwrap_or_default();

    RouteSummary {
        duration_secs: route.duration,
        distance_m: route.distance,
        steps,
        source: RouteSource::Routed,
        geometry,
    }
}

/// Convert a full route response into the best route's summary.
///
/// A non-"Ok" code or an empty route list maps to [`RoutingError::NoRoute`];
/// the caller falls back to the straight-line estimate either way.
pub fn convert_response(response: &RouteResponse) -> Result<RouteSummary, RoutingError> {
    if response.code != "Ok" {
        return Err(RoutingError::NoRoute);
    }

    response
        .routes
        .first()
        .map(convert_route)
        .ok_or(RoutingError::NoRoute)
}
