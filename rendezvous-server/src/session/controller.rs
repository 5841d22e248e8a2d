//! Session state and route-request orchestration.
//!
//! One `Session` holds the whole mutable state of a demo session: the
//! travel mode, the resolved location, the chosen zone, and the most
//! recent route and ETA. All mutation goes through the transition
//! methods here, which also enforce the staleness guard: every issued
//! request carries a sequence number, and a response whose sequence is
//! not the latest is discarded without touching state.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::domain::{Eta, LatLon, RouteSummary, TravelMode, Zone, ZoneCatalog};
use crate::estimate::fallback_route;
use crate::osrm::RoutingError;

use super::locate::ResolvedLocation;

/// Sequence number identifying one route request.
pub type RequestSeq = u64;

/// Where the session is in the route-request lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePhase {
    /// No destination chosen, or the previous route was discarded.
    NoRoute,
    /// A request with this sequence number is in flight.
    AwaitingResponse(RequestSeq),
    /// The routing service answered and the summary is current.
    RouteReady,
    /// The routing service failed; the current summary is the
    /// straight-line estimate. Terminal for that request.
    FallbackReady,
}

/// Everything a caller needs to perform one routing request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteTicket {
    pub seq: RequestSeq,
    pub start: LatLon,
    pub end: LatLon,
    pub mode: TravelMode,
}

/// Errors from session transitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// A destination was selected before the location resolved.
    #[error("current location is not resolved yet")]
    LocationUnknown,

    /// The requested zone is not in the catalog.
    #[error("unknown zone: {0}")]
    UnknownZone(String),
}

/// Mutable per-session application state.
#[derive(Debug, Clone)]
pub struct Session {
    mode: TravelMode,
    location: Option<LatLon>,
    located_by_fallback: bool,
    destination: Option<Zone>,
    route: Option<RouteSummary>,
    eta: Option<Eta>,
    phase: RoutePhase,
    last_seq: RequestSeq,
}

impl Session {
    /// A fresh session: driving mode, nothing resolved or chosen.
    pub fn new() -> Self {
        Self {
            mode: TravelMode::Driving,
            location: None,
            located_by_fallback: false,
            destination: None,
            route: None,
            eta: None,
            phase: RoutePhase::NoRoute,
            last_seq: 0,
        }
    }

    pub fn mode(&self) -> TravelMode {
        self.mode
    }

    pub fn location(&self) -> Option<LatLon> {
        self.location
    }

    /// Whether the current location came from the fixed fallback.
    pub fn located_by_fallback(&self) -> bool {
        self.located_by_fallback
    }

    pub fn destination(&self) -> Option<&Zone> {
        self.destination.as_ref()
    }

    pub fn route(&self) -> Option<&RouteSummary> {
        self.route.as_ref()
    }

    pub fn eta(&self) -> Option<Eta> {
        self.eta
    }

    pub fn phase(&self) -> RoutePhase {
        self.phase
    }

    /// Record a resolved location.
    ///
    /// If a destination is already chosen, the current route is
    /// discarded and a fresh request is issued from the new position.
    pub fn set_location(&mut self, resolved: ResolvedLocation) -> Option<RouteTicket> {
        self.location = Some(resolved.position);
        self.located_by_fallback = resolved.is_fallback;

        if self.destination.is_some() {
            Some(self.issue_request())
        } else {
            None
        }
    }

    /// Switch travel mode.
    ///
    /// Selecting the mode already active is a no-op. Otherwise the
    /// current route and ETA are discarded; if a destination is
    /// chosen, a fresh request is issued for the new mode. Any
    /// response still in flight for the old mode becomes stale.
    pub fn set_mode(&mut self, mode: TravelMode) -> Option<RouteTicket> {
        if mode == self.mode {
            return None;
        }

        self.mode = mode;
        self.discard_route();

        if self.location.is_some() && self.destination.is_some() {
            Some(self.issue_request())
        } else {
            None
        }
    }

    /// Choose a destination zone by name.
    ///
    /// Discards any current route and issues a fresh request.
    /// Selecting the same zone twice in a row behaves exactly like
    /// selecting it once: the old route is discarded and one new
    /// request is issued.
    pub fn select_zone(
        &mut self,
        catalog: &ZoneCatalog,
        name: &str,
    ) -> Result<RouteTicket, SessionError> {
        if self.location.is_none() {
            return Err(SessionError::LocationUnknown);
        }

        let zone = catalog
            .find(name)
            .ok_or_else(|| SessionError::UnknownZone(name.to_string()))?;

        self.destination = Some(zone.clone());
        Ok(self.issue_request())
    }

    /// Apply the outcome of a routing request.
    ///
    /// Returns `false` when the sequence number is stale (a newer
    /// request was issued, or the route was discarded); stale results
    /// leave the session untouched. On success the summary and ETA
    /// become current; on failure the straight-line estimate is
    /// computed and becomes current, with no retry.
    pub fn apply_route_result(
        &mut self,
        seq: RequestSeq,
        result: Result<RouteSummary, RoutingError>,
        now: NaiveDateTime,
    ) -> bool {
        match self.phase {
            RoutePhase::AwaitingResponse(current) if current == seq => {}
            _ => {
                debug!(seq, "discarding stale route response");
                return false;
            }
        }

        let summary = match result {
            Ok(summary) => {
                self.phase = RoutePhase::RouteReady;
                summary
            }
            Err(err) => {
                debug!(%err, "routing failed, using straight-line estimate");
                // Both are guaranteed set while a request is in flight.
                let (Some(start), Some(zone)) = (self.location, self.destination.as_ref()) else {
                    self.phase = RoutePhase::NoRoute;
                    return false;
                };
                self.phase = RoutePhase::FallbackReady;
                fallback_route(start, zone.position, self.mode)
            }
        };

        self.eta = Some(Eta::from_duration(now, summary.duration_secs));
        self.route = Some(summary);
        true
    }

    fn issue_request(&mut self) -> RouteTicket {
        self.discard_route();
        self.last_seq += 1;
        self.phase = RoutePhase::AwaitingResponse(self.last_seq);

        RouteTicket {
            seq: self.last_seq,
            start: self.location.expect("checked by callers"),
            end: self
                .destination
                .as_ref()
                .expect("checked by callers")
                .position,
            mode: self.mode,
        }
    }

    fn discard_route(&mut self) {
        self.route = None;
        self.eta = None;
        self.phase = RoutePhase::NoRoute;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RouteSource, calgary_zones};
    use crate::session::locate::resolve;
    use chrono::{NaiveDate, NaiveTime};

    const CITY_HALL: &str = "City Hall Parkade";

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(9, 5, 0).unwrap())
    }

    fn located_session() -> Session {
        let mut session = Session::new();
        session.set_location(resolve(Some(LatLon::new(51.0526, -114.0731))));
        session
    }

    fn routed_summary() -> RouteSummary {
        RouteSummary {
            duration_secs: 420.0,
            distance_m: 3000.0,
            steps: vec![],
            source: RouteSource::Routed,
            geometry: vec![],
        }
    }

    #[test]
    fn fresh_session_has_nothing() {
        let session = Session::new();
        assert_eq!(session.mode(), TravelMode::Driving);
        assert!(session.location().is_none());
        assert!(session.destination().is_none());
        assert!(session.eta().is_none());
        assert_eq!(session.phase(), RoutePhase::NoRoute);
    }

    #[test]
    fn select_zone_requires_location() {
        let mut session = Session::new();
        let err = session.select_zone(&calgary_zones(), CITY_HALL).unwrap_err();
        assert_eq!(err, SessionError::LocationUnknown);
    }

    #[test]
    fn select_unknown_zone_fails() {
        let mut session = located_session();
        let err = session
            .select_zone(&calgary_zones(), "Nonexistent Parkade")
            .unwrap_err();
        assert!(matches!(err, SessionError::UnknownZone(_)));
    }

    #[test]
    fn select_zone_issues_request() {
        let mut session = located_session();
        let ticket = session.select_zone(&calgary_zones(), CITY_HALL).unwrap();

        assert_eq!(ticket.seq, 1);
        assert_eq!(ticket.end, LatLon::new(51.0453, -114.0585));
        assert_eq!(ticket.mode, TravelMode::Driving);
        assert_eq!(session.phase(), RoutePhase::AwaitingResponse(1));
    }

    #[test]
    fn successful_response_becomes_current() {
        let mut session = located_session();
        let ticket = session.select_zone(&calgary_zones(), CITY_HALL).unwrap();

        let applied = session.apply_route_result(ticket.seq, Ok(routed_summary()), now());

        assert!(applied);
        assert_eq!(session.phase(), RoutePhase::RouteReady);
        assert_eq!(session.route().unwrap().duration_secs, 420.0);
        assert_eq!(session.eta().unwrap().to_string(), "9:12 AM (7 min)");
    }

    #[test]
    fn failed_response_triggers_fallback() {
        let mut session = located_session();
        let ticket = session.select_zone(&calgary_zones(), CITY_HALL).unwrap();

        let applied = session.apply_route_result(ticket.seq, Err(RoutingError::NoRoute), now());

        assert!(applied);
        assert_eq!(session.phase(), RoutePhase::FallbackReady);

        let route = session.route().unwrap();
        assert_eq!(route.source, RouteSource::Estimated);
        assert_eq!(route.steps.len(), 3);
        // ~1.31 km at 30 km/h rounds to 3 minutes.
        assert_eq!(session.eta().unwrap().minutes(), 3);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut session = located_session();
        let first = session.select_zone(&calgary_zones(), CITY_HALL).unwrap();
        let second = session
            .select_zone(&calgary_zones(), "Centennial Parkade")
            .unwrap();
        assert!(second.seq > first.seq);

        // The superseded response arrives late.
        let applied = session.apply_route_result(first.seq, Ok(routed_summary()), now());

        assert!(!applied);
        assert_eq!(session.phase(), RoutePhase::AwaitingResponse(second.seq));
        assert!(session.route().is_none());
        assert!(session.eta().is_none());
    }

    #[test]
    fn reselecting_same_zone_reissues_once() {
        let mut session = located_session();
        let first = session.select_zone(&calgary_zones(), CITY_HALL).unwrap();
        session.apply_route_result(first.seq, Ok(routed_summary()), now());

        let second = session.select_zone(&calgary_zones(), CITY_HALL).unwrap();

        // Old route and ETA discarded, exactly one fresh request out.
        assert_eq!(session.phase(), RoutePhase::AwaitingResponse(second.seq));
        assert!(session.route().is_none());
        assert!(session.eta().is_none());
        assert_eq!(second.seq, first.seq + 1);
        assert_eq!(second.start, first.start);
        assert_eq!(second.end, first.end);
    }

    #[test]
    fn mode_switch_discards_route_and_reissues() {
        let mut session = located_session();
        let first = session.select_zone(&calgary_zones(), CITY_HALL).unwrap();
        session.apply_route_result(first.seq, Ok(routed_summary()), now());

        let ticket = session.set_mode(TravelMode::Walking).unwrap();

        assert_eq!(session.mode(), TravelMode::Walking);
        assert_eq!(ticket.mode, TravelMode::Walking);
        assert!(session.route().is_none());
        assert!(session.eta().is_none());
        assert_eq!(session.phase(), RoutePhase::AwaitingResponse(ticket.seq));
    }

    #[test]
    fn mode_switch_invalidates_in_flight_request() {
        let mut session = located_session();
        let first = session.select_zone(&calgary_zones(), CITY_HALL).unwrap();
        let second = session.set_mode(TravelMode::Walking).unwrap();

        // The driving response lands after the switch: stale.
        assert!(!session.apply_route_result(first.seq, Ok(routed_summary()), now()));

        // The walking response is current.
        assert!(session.apply_route_result(second.seq, Err(RoutingError::NoRoute), now()));
        assert_eq!(session.phase(), RoutePhase::FallbackReady);
    }

    #[test]
    fn setting_same_mode_is_a_noop() {
        let mut session = located_session();
        let ticket = session.select_zone(&calgary_zones(), CITY_HALL).unwrap();

        assert!(session.set_mode(TravelMode::Driving).is_none());
        // The in-flight request is still valid.
        assert!(session.apply_route_result(ticket.seq, Ok(routed_summary()), now()));
    }

    #[test]
    fn mode_switch_without_destination_stays_no_route() {
        let mut session = located_session();
        assert!(session.set_mode(TravelMode::Walking).is_none());
        assert_eq!(session.phase(), RoutePhase::NoRoute);
    }

    #[test]
    fn relocation_reissues_when_destination_chosen() {
        let mut session = located_session();
        let first = session.select_zone(&calgary_zones(), CITY_HALL).unwrap();

        let moved = LatLon::new(51.0480, -114.0700);
        let ticket = session.set_location(resolve(Some(moved))).unwrap();

        assert_eq!(ticket.start, moved);
        assert!(ticket.seq > first.seq);
    }

    #[test]
    fn fallback_location_is_flagged() {
        let mut session = Session::new();
        assert!(session.set_location(resolve(None)).is_none());
        assert!(session.located_by_fallback());
        assert!(session.location().is_some());
    }
}
