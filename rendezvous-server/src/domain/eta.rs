//! Estimated time of arrival.
//!
//! An ETA is a derived value: the current wall-clock time plus a route
//! duration. It is recomputed whenever a new route summary is produced
//! and has no independent lifecycle.

use std::fmt;

use chrono::{Duration, NaiveDateTime, Timelike};

/// A formatted arrival estimate.
///
/// Pure function of (now, duration): construction does not read the
/// clock, so callers pass "now" explicitly and tests stay
/// deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eta {
    /// Arrival instant (now + duration).
    arrival: NaiveDateTime,
    /// Duration rounded to the nearest whole minute.
    minutes: i64,
}

impl Eta {
    /// Compute the ETA for a route of `duration_secs` starting at `now`.
    pub fn from_duration(now: NaiveDateTime, duration_secs: f64) -> Self {
        let minutes = (duration_secs / 60.0).round() as i64;
        let arrival = now + Duration::milliseconds((duration_secs * 1000.0) as i64);
        Self { arrival, minutes }
    }

    /// The arrival instant.
    pub fn arrival(&self) -> NaiveDateTime {
        self.arrival
    }

    /// The elapsed-minute count shown in parentheses.
    pub fn minutes(&self) -> i64 {
        self.minutes
    }
}

impl fmt::Display for Eta {
    /// Renders "H:MM AM (N min)" in 12-hour form.
    ///
    /// Hour 0 and hour 12 both render as "12" (midnight and noon).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour24 = self.arrival.hour();
        let minute = self.arrival.minute();

        let hour12 = match hour24 % 12 {
            0 => 12,
            h => h,
        };
        let suffix = if hour24 < 12 { "AM" } else { "PM" };

        write!(f, "{hour12}:{minute:02} {suffix} ({} min)", self.minutes)
    }
}
