//! Cross-cutting properties that must hold for every trip, regardless of
//! which interruptions it requires.

mod common;

use hos_trip_planner::engine::{plan, MAX_CYCLE_HOURS};
use hos_trip_planner::format::format_clock;

const EPSILON: f64 = 0.02;

fn all_scenarios() -> Vec<(&'static str, Vec<hos_trip_planner::model::Leg>, f64)> {
    vec![
        ("short", common::short_legs(), 0.0),
        ("break", common::break_triggering_legs(), 0.0),
        ("rest", common::rest_triggering_legs(), 0.0),
        ("fuel", common::fuel_triggering_legs(), 0.0),
        ("near_cycle_limit", common::short_legs(), 69.5),
    ]
}

#[test]
fn every_day_covers_exactly_24_hours() {
    for (name, legs, cycle_used) in all_scenarios() {
        let result = plan(&legs, cycle_used, &common::default_locations(), common::default_start_date())
            .unwrap_or_else(|e| panic!("scenario {name} failed to plan: {e}"));

        for log in &result.daily_logs {
            let total: f64 = log.segments.iter().map(|s| s.duration()).sum();
            assert!(
                (total - 24.0).abs() < EPSILON,
                "scenario {name} day {} covers {total} hours, expected 24.0",
                log.day
            );
            assert_eq!(log.segments.first().expect("non-empty day").start, 0.0);
            assert_eq!(log.segments.last().expect("non-empty day").end, 24.0);
        }
    }
}

#[test]
fn stops_begin_with_start_and_keep_pickup_before_dropoff() {
    use hos_trip_planner::model::StopType;

    for (name, legs, cycle_used) in all_scenarios() {
        let result = plan(&legs, cycle_used, &common::default_locations(), common::default_start_date())
            .unwrap_or_else(|e| panic!("scenario {name} failed to plan: {e}"));

        assert_eq!(result.stops.first().expect("has stops").stop_type, StopType::Start);
        let pickup_idx = result.stops.iter().position(|s| s.stop_type == StopType::Pickup);
        let dropoff_idx = result.stops.iter().position(|s| s.stop_type == StopType::Dropoff);
        assert!(pickup_idx.is_some() && dropoff_idx.is_some(), "scenario {name} missing pickup/dropoff");
        assert!(pickup_idx < dropoff_idx, "scenario {name} dropoff must follow pickup");
    }
}

#[test]
fn running_the_same_trip_twice_produces_identical_output() {
    for (name, legs, cycle_used) in all_scenarios() {
        let a = plan(&legs, cycle_used, &common::default_locations(), common::default_start_date())
            .unwrap_or_else(|e| panic!("scenario {name} failed to plan: {e}"));
        let b = plan(&legs, cycle_used, &common::default_locations(), common::default_start_date())
            .unwrap_or_else(|e| panic!("scenario {name} failed to plan: {e}"));

        assert_eq!(format!("{a:?}"), format!("{b:?}"), "scenario {name} is not deterministic");
    }
}

#[test]
fn cycle_accounting_is_additive_and_bounded() {
    for (name, legs, cycle_used) in all_scenarios() {
        let result = plan(&legs, cycle_used, &common::default_locations(), common::default_start_date())
            .unwrap_or_else(|e| panic!("scenario {name} failed to plan: {e}"));

        let cs = result.cycle_summary;
        assert!(
            cs.cycle_after <= MAX_CYCLE_HOURS + EPSILON,
            "scenario {name} ended with {} cycle hours, exceeding the limit",
            cs.cycle_after
        );
        assert!(cs.cycle_after >= 0.0);
    }
}

#[test]
fn total_driving_hours_matches_sum_of_daily_driving() {
    for (name, legs, cycle_used) in all_scenarios() {
        let result = plan(&legs, cycle_used, &common::default_locations(), common::default_start_date())
            .unwrap_or_else(|e| panic!("scenario {name} failed to plan: {e}"));

        let summed: f64 = result.daily_logs.iter().map(|d| d.hours_summary.driving).sum();
        assert!(
            (summed - result.total_driving_hours).abs() < 0.2,
            "scenario {name}: summed daily driving {summed} vs reported total {}",
            result.total_driving_hours
        );
    }
}

#[test]
fn formatted_clock_times_are_well_formed() {
    for hour in 0..24 {
        for minute in [0, 15, 30, 45] {
            let hours = f64::from(hour) + f64::from(minute) / 60.0;
            let formatted = format_clock(hours);
            assert!(formatted.ends_with("AM") || formatted.ends_with("PM"));
            assert!(formatted.contains(':'));
            let hour_part: &str = formatted.split(':').next().expect("has a colon");
            let hour_num: u32 = hour_part.parse().expect("hour part is numeric");
            assert!((1..=12).contains(&hour_num));
        }
    }
}

#[test]
fn break_never_drives_more_than_eight_hours_without_one() {
    let result = plan(
        &common::break_triggering_legs(),
        0.0,
        &common::default_locations(),
        common::default_start_date(),
    )
    .expect("plans successfully");

    let mut consecutive_driving = 0.0_f64;
    for log in &result.daily_logs {
        for seg in &log.segments {
            if seg.status == hos_trip_planner::model::DutyStatus::Driving {
                consecutive_driving += seg.duration();
                assert!(
                    consecutive_driving <= 8.0 + EPSILON,
                    "drove {consecutive_driving} hours without a break"
                );
            } else if seg.note == "30-min break" {
                consecutive_driving = 0.0;
            }
        }
    }
}
