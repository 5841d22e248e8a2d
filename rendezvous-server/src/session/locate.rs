//! Location resolution.
//!
//! The actual device geolocation happens in the browser; the server
//! hands the page its geolocation options and accepts whatever
//! coordinate comes back. When the device cannot resolve a position
//! (permission denied, timeout, no hardware) the demo substitutes a
//! fixed downtown coordinate so the rest of the flow still works.

use serde::Serialize;

use crate::domain::LatLon;

/// Fixed fallback position: downtown Calgary.
pub const DEFAULT_LOCATION: LatLon = LatLon {
    lat: 51.0526,
    lon: -114.0731,
};

/// Options handed to the browser's geolocation call.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LocationConfig {
    /// Request high-accuracy positioning.
    pub high_accuracy: bool,
    /// Give up after this many milliseconds.
    pub timeout_ms: u32,
    /// Maximum acceptable age of a cached position; 0 means no cached
    /// result is accepted.
    pub maximum_age_ms: u32,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout_ms: 5000,
            maximum_age_ms: 0,
        }
    }
}

/// Outcome of a location attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedLocation {
    pub position: LatLon,
    /// True when the device failed and the fixed default was used.
    pub is_fallback: bool,
}

/// Resolve a reported device position, substituting the default when
/// the device produced nothing.
pub fn resolve(reported: Option<LatLon>) -> ResolvedLocation {
    match reported {
        Some(position) => ResolvedLocation {
            position,
            is_fallback: false,
        },
        None => ResolvedLocation {
            position: DEFAULT_LOCATION,
            is_fallback: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reported_position_is_used_as_is() {
        let pos = LatLon::new(51.1, -114.2);
        let resolved = resolve(Some(pos));
        assert_eq!(resolved.position, pos);
        assert!(!resolved.is_fallback);
    }

    #[test]
    fn missing_position_falls_back_to_downtown() {
        let resolved = resolve(None);
        assert_eq!(resolved.position, DEFAULT_LOCATION);
        assert!(resolved.is_fallback);
    }

    #[test]
    fn default_options_match_the_demo() {
        let config = LocationConfig::default();
        assert!(config.high_accuracy);
        assert_eq!(config.timeout_ms, 5000);
        assert_eq!(config.maximum_age_ms, 0);
    }
}
