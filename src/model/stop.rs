//! Map-significant stop markers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of map marker a stop represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopType {
    Start,
    Pickup,
    Dropoff,
    Fuel,
    Rest,
}

impl fmt::Display for StopType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Start => "start",
            Self::Pickup => "pickup",
            Self::Dropoff => "dropoff",
            Self::Fuel => "fuel",
            Self::Rest => "rest",
        };
        write!(f, "{s}")
    }
}

/// A point of interest along the trip, rendered as a map marker.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Stop {
    #[serde(rename = "type")]
    pub stop_type: StopType,
    pub location: String,
    pub lat: f64,
    pub lng: f64,
    /// Formatted `H:MM AM|PM` clock time.
    pub time: String,
    /// 1-based day number.
    pub day: u32,
    /// Planned duration of the stop, in hours, when applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_hrs: Option<f64>,
}
