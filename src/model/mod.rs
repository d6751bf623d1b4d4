//! Data model: duty-status segments, stops, locations, and trip results.

pub mod location;
pub mod result;
pub mod segment;
pub mod stop;

pub use location::{Leg, Location, Locations};
pub use result::{CycleSummary, TripResult};
pub use segment::{DailyLog, DutyStatus, HoursSummary, Segment};
pub use stop::{Stop, StopType};
