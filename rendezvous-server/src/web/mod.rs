//! Web layer for the parking rendezvous demo.
//!
//! Serves the Leaflet map page and the small JSON API the page drives
//! the session through.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, RouteBackend};
pub use templates::*;
