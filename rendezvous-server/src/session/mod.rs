//! Session state, location resolution, and request orchestration.
//!
//! A session is the single mutable state container for one demo
//! session: one user, one map. The controller methods on [`Session`]
//! are the only way state changes, which keeps the
//! request-supersedes-request rule in one place.

mod controller;
mod locate;

pub use controller::{RequestSeq, RoutePhase, RouteTicket, Session, SessionError};
pub use locate::{DEFAULT_LOCATION, LocationConfig, ResolvedLocation, resolve};
