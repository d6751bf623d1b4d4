//! Named waypoints and route legs.

use serde::{Deserialize, Serialize};

/// A named, geocoded waypoint.
///
/// Geocoding itself is out of scope for this engine; callers supply
/// already-resolved coordinates.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Location {
    /// Display name (e.g. `"Los Angeles, CA"`).
    pub name: String,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
}

/// The three named locations a trip is planned between.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Locations {
    /// The driver's current position at trip start.
    pub current: Location,
    /// The pickup location (leg 0's destination).
    pub pickup: Location,
    /// The dropoff location (leg 1's destination).
    pub dropoff: Location,
}

/// A single routed leg between two waypoints.
///
/// Distance and duration are pre-computed by a routing provider; the
/// engine never calls one itself.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Leg {
    /// Distance of this leg in miles.
    pub distance_miles: f64,
    /// Expected driving duration for this leg, in hours.
    pub duration_hours: f64,
}
