//! Mock routing client for testing without network access.
//!
//! Serves programmed responses as if they were live OSRM replies, so
//! orchestration and web-layer code can be exercised offline,
//! including the failure path that triggers the fallback estimate.

use std::collections::HashMap;

use crate::domain::{LatLon, RouteSource, RouteSummary, Step, StepKind, TravelMode};

use super::error::RoutingError;

/// Mock OSRM client serving canned responses.
///
/// Mimics the `OsrmClient::route` interface. Responses are keyed by
/// travel mode; a mode without a programmed response yields
/// [`RoutingError::NoRoute`], which is exactly the failure the caller
/// must recover from.
#[derive(Debug, Clone, Default)]
pub struct MockOsrmClient {
    responses: HashMap<TravelMode, RouteSummary>,
    always_fail: bool,
}

impl MockOsrmClient {
    /// A mock with no programmed responses: every request fails with
    /// `NoRoute`.
    pub fn failing() -> Self {
        Self {
            responses: HashMap::new(),
            always_fail: true,
        }
    }

    /// A mock serving a fixed Calgary driving route (7 min, 3 km).
    /// Useful for offline development of the web frontend.
    pub fn canned() -> Self {
        let summary = RouteSummary {
            duration_secs: 420.0,
            distance_m: 3000.0,
            steps: vec![
                Step::new(StepKind::Depart, "Head out onto 1 St SE", 400.0, 60.0),
                Step::new(StepKind::Right, "Turn right onto 9 Ave SE", 2400.0, 330.0),
                Step::new(StepKind::Arrive, "Arrive at your destination", 200.0, 30.0),
            ],
            source: RouteSource::Routed,
            geometry: vec![
                LatLon::new(51.0526, -114.0731),
                LatLon::new(51.0453, -114.0585),
            ],
        };
        Self::default().with_response(TravelMode::Driving, summary)
    }

    /// Program a response for a travel mode.
    pub fn with_response(mut self, mode: TravelMode, summary: RouteSummary) -> Self {
        self.responses.insert(mode, summary);
        self
    }

    /// Request a route. Mimics `OsrmClient::route`; the coordinates
    /// are ignored, mock data is static.
    pub async fn route(
        &self,
        _start: LatLon,
        _end: LatLon,
        mode: TravelMode,
    ) -> Result<RouteSummary, RoutingError> {
        if self.always_fail {
            return Err(RoutingError::NoRoute);
        }
        self.responses
            .get(&mode)
            .cloned()
            .ok_or(RoutingError::NoRoute)
    }
}
