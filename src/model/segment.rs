//! Duty-status segments and per-day logs.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The four duty statuses an ELD logsheet tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DutyStatus {
    OffDuty,
    Sleeper,
    Driving,
    OnDuty,
}

impl DutyStatus {
    /// Whether time recorded under this status counts against the 70-hour cycle.
    ///
    /// `Driving` and `OnDuty` charge the cycle; `OffDuty` and `Sleeper` never do.
    pub fn charges_cycle(self) -> bool {
        matches!(self, DutyStatus::Driving | DutyStatus::OnDuty)
    }
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DutyStatus::OffDuty => "off_duty",
            DutyStatus::Sleeper => "sleeper",
            DutyStatus::Driving => "driving",
            DutyStatus::OnDuty => "on_duty",
        };
        write!(f, "{s}")
    }
}

/// One contiguous duty-status interval within a single day, `[start, end]`
/// in hours since midnight.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Segment {
    pub status: DutyStatus,
    pub start: f64,
    pub end: f64,
    pub note: String,
}

impl Segment {
    /// Duration of this segment in hours.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Hour totals per duty status for one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct HoursSummary {
    pub off_duty: f64,
    pub sleeper: f64,
    pub driving: f64,
    pub on_duty: f64,
}

/// One completed ELD logsheet day.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DailyLog {
    /// 1-based day number; day 1 is the trip's start date.
    pub day: u32,
    /// Calendar date this log covers.
    pub date: NaiveDate,
    /// Segments in chronological order, covering `[0.0, 24.0]` with no gaps.
    pub segments: Vec<Segment>,
    /// Per-status hour totals, rounded to 1 decimal.
    pub hours_summary: HoursSummary,
    /// Total miles driven on this day, rounded to 1 decimal.
    pub total_miles: f64,
}
