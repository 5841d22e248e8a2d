//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::cache::CachedOsrmClient;
use crate::domain::{LatLon, RouteSummary, TravelMode, ZoneCatalog};
use crate::osrm::{MockOsrmClient, RoutingError};
use crate::session::{LocationConfig, Session};

/// Routing backend: the live cached client, or the offline mock.
///
/// The mock keeps the web layer testable (and demoable) without
/// network access, mirroring the live client's interface.
pub enum RouteBackend {
    Live(CachedOsrmClient),
    Mock(MockOsrmClient),
}

impl RouteBackend {
    /// Request a route from whichever backend is configured.
    pub async fn route(
        &self,
        start: LatLon,
        end: LatLon,
        mode: TravelMode,
    ) -> Result<RouteSummary, RoutingError> {
        match self {
            RouteBackend::Live(client) => client.route(start, end, mode).await,
            RouteBackend::Mock(mock) => mock.route(start, end, mode).await,
        }
    }
}

/// Shared application state.
///
/// The session is the single mutable piece; everything else is
/// read-only after startup. The session mutex is held only for state
/// transitions, never across the routing request itself.
#[derive(Clone)]
pub struct AppState {
    /// Routing backend (live OSRM or mock)
    pub router: Arc<RouteBackend>,

    /// Zone catalog, fixed at startup
    pub zones: Arc<ZoneCatalog>,

    /// Geolocation options handed to the browser
    pub location: LocationConfig,

    /// The demo session
    pub session: Arc<Mutex<Session>>,
}

impl AppState {
    /// Create a new app state with a fresh session.
    pub fn new(router: RouteBackend, zones: ZoneCatalog, location: LocationConfig) -> Self {
        Self {
            router: Arc::new(router),
            zones: Arc::new(zones),
            location,
            session: Arc::new(Mutex::new(Session::new())),
        }
    }
}
