//! Domain types for the parking rendezvous demo.
//!
//! These are the validated core types everything else works in terms
//! of: positions, travel modes, the zone catalog, route summaries, and
//! arrival estimates. Wire formats live in `crate::osrm::types`;
//! conversion into these types happens at the boundary.

mod coordinate;
mod eta;
mod mode;
mod route;
mod zone;

pub use coordinate::LatLon;
pub use eta::Eta;
pub use mode::{InvalidTravelMode, TravelMode};
pub use route::{RouteSource, RouteSummary, Step, StepKind};
pub use zone::{Zone, ZoneCatalog, calgary_zones};
