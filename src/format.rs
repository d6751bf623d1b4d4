//! Clock-time formatting for hours-since-midnight values.
//!
//! # Examples
//!
//! ```
//! use hos_trip_planner::format::format_clock;
//!
//! assert_eq!(format_clock(0.0), "12:00 AM");
//! assert_eq!(format_clock(13.5), "1:30 PM");
//! ```

/// Formats hours-since-midnight (e.g. `13.5`) as `H:MM AM|PM` (e.g. `"1:30 PM"`).
///
/// Hours wrap modulo 24; minutes are truncated (not rounded) to match the
/// grid rendering a paper logsheet expects.
pub fn format_clock(hours_since_midnight: f64) -> String {
    let h = (hours_since_midnight as i64).rem_euclid(24);
    let m = ((hours_since_midnight.rem_euclid(1.0)) * 60.0) as i64;
    let period = if h < 12 { "AM" } else { "PM" };
    let display_h = match h % 12 {
        0 => 12,
        other => other,
    };
    format!("{display_h}:{m:02} {period}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midnight_is_twelve_am() {
        assert_eq!(format_clock(0.0), "12:00 AM");
    }

    #[test]
    fn noon_is_twelve_pm() {
        assert_eq!(format_clock(12.0), "12:00 PM");
    }

    #[test]
    fn afternoon_with_minutes() {
        assert_eq!(format_clock(13.5), "1:30 PM");
    }

    #[test]
    fn late_evening_with_minutes() {
        assert_eq!(format_clock(23.75), "11:45 PM");
    }

    #[test]
    fn early_morning() {
        assert_eq!(format_clock(6.0), "6:00 AM");
    }

    #[test]
    fn wraps_past_24_hours() {
        assert_eq!(format_clock(25.0), format_clock(1.0));
    }
}
