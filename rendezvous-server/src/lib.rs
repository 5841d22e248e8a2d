//! Parking rendezvous map demo server.
//!
//! A tutorial-grade web application: a map with a driver and a
//! passenger marker, a catalog of downtown parking zones, and a route
//! between your position and the zone you pick. Route computation is
//! delegated entirely to an external OSRM backend; when it fails, a
//! straight-line estimate keeps the demo usable.

pub mod cache;
pub mod domain;
pub mod estimate;
pub mod osrm;
pub mod presenter;
pub mod session;
pub mod web;
