//! Askama templates for the web frontend.

use askama::Template;
use serde::Serialize;

use crate::domain::{LatLon, Zone};
use crate::session::{DEFAULT_LOCATION, LocationConfig};

use super::state::AppState;

/// Map page.
///
/// The page itself is the rendering collaborator: Leaflet draws the
/// tiles, markers, and polylines. The server only hands it this
/// configuration blob and the `/api` endpoints.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// JSON-serialized [`PageConfig`], embedded into a script tag.
    pub config_json: String,
}

/// About page.
#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate;

/// Startup configuration embedded into the map page.
#[derive(Debug, Serialize)]
pub struct PageConfig {
    /// Zone catalog for the marker layer and picker.
    pub zones: Vec<Zone>,

    /// Map center before a position is resolved.
    pub default_center: LatLon,

    /// Browser geolocation options.
    pub location: LocationConfig,
}

impl PageConfig {
    pub fn new(state: &AppState) -> Self {
        Self {
            zones: state.zones.all().to_vec(),
            default_center: DEFAULT_LOCATION,
            location: state.location,
        }
    }
}
