//! Travel mode selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown travel mode string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown travel mode: {0}")]
pub struct InvalidTravelMode(pub String);

/// How the user intends to travel to the rendezvous point.
///
/// The mode selects both the routing profile sent to the routing
/// service and the assumed speed used by the fallback estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Driving,
    Walking,
}

impl TravelMode {
    /// The OSRM routing profile string for this mode.
    pub fn profile(&self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Walking => "foot",
        }
    }

    /// Assumed straight-line travel speed, in km/h.
    ///
    /// Used only by the fallback estimator when the routing service
    /// cannot produce a real route.
    pub fn assumed_speed_kmh(&self) -> f64 {
        match self {
            TravelMode::Driving => 30.0,
            TravelMode::Walking => 5.0,
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TravelMode::Driving => write!(f, "driving"),
            TravelMode::Walking => write!(f, "walking"),
        }
    }
}

impl FromStr for TravelMode {
    type Err = InvalidTravelMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "driving" => Ok(TravelMode::Driving),
            "walking" | "foot" => Ok(TravelMode::Walking),
            other => Err(InvalidTravelMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles() {
        assert_eq!(TravelMode::Driving.profile(), "driving");
        assert_eq!(TravelMode::Walking.profile(), "foot");
    }

    #[test]
    fn assumed_speeds() {
        assert_eq!(TravelMode::Driving.assumed_speed_kmh(), 30.0);
        assert_eq!(TravelMode::Walking.assumed_speed_kmh(), 5.0);
    }

    #[test]
    fn parse() {
        assert_eq!("driving".parse::<TravelMode>(), Ok(TravelMode::Driving));
        assert_eq!("Walking".parse::<TravelMode>(), Ok(TravelMode::Walking));
        assert_eq!("foot".parse::<TravelMode>(), Ok(TravelMode::Walking));
        assert!("cycling".parse::<TravelMode>().is_err());
    }

    #[test]
    fn serde_lowercase() {
        let json = serde_json::to_string(&TravelMode::Driving).unwrap();
        assert_eq!(json, "\"driving\"");
        let back: TravelMode = serde_json::from_str("\"walking\"").unwrap();
        assert_eq!(back, TravelMode::Walking);
    }
}
