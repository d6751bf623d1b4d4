//! Owned simulation state for a single `plan` call.

use chrono::NaiveDate;

use crate::model::{DailyLog, Segment, Stop};

/// All mutable state for one trip simulation.
///
/// Owned exclusively by the trip driver for the duration of a single
/// [`crate::engine::plan`] call — no sharing, no concurrent access.
#[derive(Debug, Clone)]
pub struct SimState {
    /// Hours since midnight of the current day, in `[0.0, 24.0]`.
    pub current_time: f64,
    /// 1-based day counter; day 1 is `start_date`.
    pub current_day: u32,
    /// Driving hours accumulated since the last 10-hour rest (max 11).
    pub shift_driving: f64,
    /// Total elapsed hours since shift start (max 14).
    pub shift_duty: f64,
    /// Consecutive driving hours since the last qualifying break (max 8).
    pub driving_since_break: f64,
    /// On-duty hours charged against the 70-hour/8-day cycle.
    pub cycle_hours: f64,
    /// Distance since last fuel stop.
    pub miles_since_fuel: f64,
    /// Trip-total miles driven.
    pub total_miles_driven: f64,
    /// Trip-total driving hours.
    pub total_driving_hours: f64,
    /// The current day's segment buffer, flushed to `daily_logs` at day save.
    pub segments: Vec<Segment>,
    /// Completed days.
    pub daily_logs: Vec<DailyLog>,
    /// Map-significant events in chronological order.
    pub stops: Vec<Stop>,
    /// The trip's calendar start date; day N covers `start_date + (N-1)` days.
    pub start_date: NaiveDate,
    /// Whether the opening pre-trip inspection has begun.
    pub shift_started: bool,
}

impl SimState {
    /// Creates initial state for a trip starting with `cycle_used` hours
    /// already charged to the cycle.
    pub fn new(cycle_used: f64, start_date: NaiveDate) -> Self {
        Self {
            current_time: 0.0,
            current_day: 1,
            shift_driving: 0.0,
            shift_duty: 0.0,
            driving_since_break: 0.0,
            cycle_hours: cycle_used,
            miles_since_fuel: 0.0,
            total_miles_driven: 0.0,
            total_driving_hours: 0.0,
            segments: Vec::new(),
            daily_logs: Vec::new(),
            stops: Vec::new(),
            start_date,
            shift_started: false,
        }
    }

    /// The calendar date of the current day.
    pub fn current_date(&self) -> NaiveDate {
        self.start_date + chrono::Duration::days(i64::from(self.current_day) - 1)
    }
}
