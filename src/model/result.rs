//! The engine's single output value.

use serde::{Deserialize, Serialize};

use super::segment::DailyLog;
use super::stop::Stop;

/// Post-trip accounting against the 70-hour/8-day cycle.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct CycleSummary {
    /// Cycle hours already used before this trip started.
    pub cycle_before: f64,
    /// On-duty hours this trip charged to the cycle.
    pub on_duty_this_trip: f64,
    /// Cycle hours used after this trip (0 if a 34-hour restart occurred last).
    pub cycle_after: f64,
    /// Remaining cycle hours (`limit - cycle_after`).
    pub remaining: f64,
    /// The regulatory cycle limit, always 70.0.
    pub limit: f64,
}

/// The complete output of a single `plan` call.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TripResult {
    pub total_miles: f64,
    pub total_driving_hours: f64,
    pub total_days: u32,
    pub stops: Vec<Stop>,
    pub daily_logs: Vec<DailyLog>,
    pub cycle_summary: CycleSummary,
}
