//! Shared test fixtures for integration tests.

use chrono::NaiveDate;

use hos_trip_planner::model::{Leg, Location, Locations};

/// Default trip start date used across integration tests.
pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).expect("valid date")
}

/// Default three-location set: Los Angeles → Phoenix → Denver.
pub fn default_locations() -> Locations {
    Locations {
        current: Location { name: "Los Angeles, CA".to_string(), lat: 34.0522, lng: -118.2437 },
        pickup: Location { name: "Phoenix, AZ".to_string(), lat: 33.4484, lng: -112.0740 },
        dropoff: Location { name: "Denver, CO".to_string(), lat: 39.7392, lng: -104.9903 },
    }
}

/// A short pair of legs that needs no interruptions.
pub fn short_legs() -> Vec<Leg> {
    vec![
        Leg { distance_miles: 100.0, duration_hours: 1.54 },
        Leg { distance_miles: 80.0, duration_hours: 1.23 },
    ]
}

/// A pair of legs long enough to require at least one 30-minute break per leg.
pub fn break_triggering_legs() -> Vec<Leg> {
    vec![
        Leg { distance_miles: 585.0, duration_hours: 9.0 },
        Leg { distance_miles: 65.0, duration_hours: 1.0 },
    ]
}

/// A pair of legs long enough to require a 10-hour rest mid-leg.
pub fn rest_triggering_legs() -> Vec<Leg> {
    vec![
        Leg { distance_miles: 1015.0, duration_hours: 15.62 },
        Leg { distance_miles: 605.0, duration_hours: 9.31 },
    ]
}

/// A pair of legs whose combined distance crosses the 1000-mile fuel interval.
pub fn fuel_triggering_legs() -> Vec<Leg> {
    vec![
        Leg { distance_miles: 700.0, duration_hours: 10.77 },
        Leg { distance_miles: 500.0, duration_hours: 7.69 },
    ]
}
