//! Parking zone catalog.
//!
//! Zones are candidate rendezvous destinations: named parking
//! facilities with a fixed position, a capacity, and a display-only
//! hourly rate. The catalog is defined at startup and read-only
//! thereafter.

use serde::Serialize;

use super::LatLon;

/// A candidate rendezvous destination.
#[derive(Debug, Clone, Serialize)]
pub struct Zone {
    /// Display name, also the lookup key.
    pub name: String,
    /// Position of the zone entrance.
    pub position: LatLon,
    /// Number of stalls.
    pub capacity: u32,
    /// Display-only rate string, e.g. "$2.00 / hr".
    pub hourly_rate: String,
}

impl Zone {
    /// Create a new zone.
    pub fn new(
        name: impl Into<String>,
        position: LatLon,
        capacity: u32,
        hourly_rate: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            position,
            capacity,
            hourly_rate: hourly_rate.into(),
        }
    }
}

/// Immutable collection of zones, defined at startup.
#[derive(Debug, Clone, Default)]
pub struct ZoneCatalog {
    zones: Vec<Zone>,
}

impl ZoneCatalog {
    /// Create a catalog from a list of zones.
    pub fn new(zones: Vec<Zone>) -> Self {
        Self { zones }
    }

    /// Look up a zone by its exact name.
    pub fn find(&self, name: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.name == name)
    }

    /// All zones, in catalog order.
    pub fn all(&self) -> &[Zone] {
        &self.zones
    }

    /// Number of zones in the catalog.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

/// The default catalog: downtown Calgary parkades.
pub fn calgary_zones() -> ZoneCatalog {
    ZoneCatalog::new(vec![
        Zone::new(
            "City Hall Parkade",
            LatLon::new(51.0453, -114.0585),
            950,
            "$2.00 / hr",
        ),
        Zone::new(
            "James Short Parkade",
            LatLon::new(51.0466, -114.0617),
            410,
            "$2.25 / hr",
        ),
        Zone::new(
            "Centennial Parkade",
            LatLon::new(51.0443, -114.0659),
            820,
            "$2.50 / hr",
        ),
        Zone::new(
            "Convention Centre Parkade",
            LatLon::new(51.0448, -114.0624),
            580,
            "$3.00 / hr",
        ),
        Zone::new(
            "McDougall Parkade",
            LatLon::new(51.0477, -114.0577),
            300,
            "$1.75 / hr",
        ),
    ])
}
