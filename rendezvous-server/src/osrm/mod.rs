//! OSRM routing service integration.
//!
//! The route computation itself is entirely delegated to an external
//! OSRM backend; this module owns the HTTP client, the wire types, and
//! the conversion into domain route summaries.

mod client;
mod convert;
mod error;
mod mock;
pub mod types;

pub use client::{OsrmClient, OsrmConfig};
pub use convert::{convert_response, step_kind};
pub use error::RoutingError;
pub use mock::MockOsrmClient;
