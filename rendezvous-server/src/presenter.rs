//! Projection of session state into user-facing text and map styling.
//!
//! Everything here is a pure function of the session (or a route
//! summary), so the display layer stays trivially testable.

use serde::Serialize;

use crate::domain::{RouteSource, RouteSummary, TravelMode};
use crate::session::Session;

/// Derive the status line from session state.
///
/// Priority: no location yet, then no destination, then the
/// mode-specific message with or without an ETA. A fallback-resolved
/// location and an estimated route each add an explanatory clause.
pub fn status_message(session: &Session) -> String {
    if session.location().is_none() {
        return "Finding your location...".to_string();
    }

    let fallback_note = if session.located_by_fallback() {
        "Couldn't access your location, so you've been placed downtown. "
    } else {
        ""
    };

    let Some(zone) = session.destination() else {
        return format!("{fallback_note}Select a parking zone to meet at.");
    };

    let verb = match session.mode() {
        TravelMode::Driving => "Drive",
        TravelMode::Walking => "Walk",
    };

    match session.eta() {
        Some(eta) => {
            let estimate_note = match session.route().map(|r| r.source) {
                Some(RouteSource::Estimated) => " Times are a straight-line estimate.",
                _ => "",
            };
            format!(
                "{fallback_note}{verb} to {}. You should arrive around {eta}.{estimate_note}",
                zone.name
            )
        }
        None => format!(
            "{fallback_note}Getting {} directions to {}...",
            session.mode(),
            zone.name
        ),
    }
}

/// One rendered instruction row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRow {
    pub glyph: &'static str,
    pub text: String,
    /// "X.XX km • Y min"
    pub detail: String,
}

/// Render a route's steps as display rows.
pub fn step_rows(summary: &RouteSummary) -> Vec<StepRow> {
    summary
        .steps
        .iter()
        .map(|step| StepRow {
            glyph: step.kind.glyph(),
            text: step.text.clone(),
            detail: format!(
                "{:.2} km \u{2022} {} min",
                step.distance_m / 1000.0,
                (step.duration_secs / 60.0).round() as i64,
            ),
        })
        .collect()
}

/// Styling parameters the map surface uses to draw a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteStyle {
    pub color: &'static str,
    pub weight: u32,
    pub opacity: f64,
    /// Dash pattern; only estimated routes are dashed.
    pub dash_array: Option<&'static str>,
}

impl RouteStyle {
    /// The style for a route of the given provenance.
    pub fn for_source(source: RouteSource) -> Self {
        match source {
            RouteSource::Routed => Self {
                color: "#2b6ee8",
                weight: 5,
                opacity: 0.85,
                dash_array: None,
            },
            RouteSource::Estimated => Self {
                color: "#888888",
                weight: 4,
                opacity: 0.7,
                dash_array: Some("8 8"),
            },
        }
    }
}
