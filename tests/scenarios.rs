//! The six literal end-to-end scenarios a complete HOS trip planner must
//! handle correctly, each naming the mandatory interruption it exercises.

mod common;

use hos_trip_planner::config::TripScenario;
use hos_trip_planner::engine::plan;
use hos_trip_planner::model::{DutyStatus, Leg, StopType};
use chrono::NaiveDate;

fn legs(a: (f64, f64), b: (f64, f64)) -> Vec<Leg> {
    vec![
        Leg { distance_miles: a.0, duration_hours: a.1 },
        Leg { distance_miles: b.0, duration_hours: b.1 },
    ]
}

#[test]
fn scenario_1_short_trip_no_break_needed() {
    let result = plan(
        &legs((100.0, 1.54), (80.0, 1.23)),
        0.0,
        &common::default_locations(),
        common::default_start_date(),
    )
    .expect("short trip plans successfully");

    assert_eq!(result.total_days, 1);
    assert!(result.stops.iter().all(|s| s.stop_type != StopType::Fuel && s.stop_type != StopType::Rest));
    assert!(
        (result.cycle_summary.on_duty_this_trip - 5.27).abs() < 0.1,
        "on_duty_this_trip was {}",
        result.cycle_summary.on_duty_this_trip
    );
}

#[test]
fn scenario_2_single_30_minute_break() {
    let result = plan(
        &legs((400.0, 6.15), (200.0, 3.08)),
        0.0,
        &common::default_locations(),
        common::default_start_date(),
    )
    .expect("break scenario plans successfully");

    let break_count = result
        .daily_logs
        .iter()
        .flat_map(|d| &d.segments)
        .filter(|s| s.note == "30-min break")
        .count();
    assert_eq!(break_count, 1, "exactly one break should be inserted after 8 cumulative driving hours");
    assert_eq!(result.total_days, 1);
}

#[test]
fn scenario_3_one_10_hour_rest_required() {
    let result = plan(
        &legs((700.0, 10.77), (100.0, 1.54)),
        0.0,
        &common::default_locations(),
        common::default_start_date(),
    )
    .expect("rest scenario plans successfully");

    assert!(result.total_days >= 2);
    let rest_stops: Vec<_> = result.stops.iter().filter(|s| s.stop_type == StopType::Rest).collect();
    assert_eq!(rest_stops.len(), 1, "exactly one rest stop expected");
    assert_eq!(rest_stops[0].duration_hrs, Some(10.0));
}

#[test]
fn scenario_4_fuel_stop() {
    let result = plan(
        &legs((1100.0, 16.92), (50.0, 0.77)),
        0.0,
        &common::default_locations(),
        common::default_start_date(),
    )
    .expect("fuel scenario plans successfully");

    let fuel_stops: Vec<_> = result.stops.iter().filter(|s| s.stop_type == StopType::Fuel).collect();
    assert!(!fuel_stops.is_empty(), "a fuel stop must be inserted before mile 1001 of cumulative driving");

    let rest_count = result.stops.iter().filter(|s| s.stop_type == StopType::Rest).count();
    assert!(rest_count >= 1, "leg 1 alone exceeds the 11-hour shift cap and needs at least one rest");
}

#[test]
fn scenario_5_34_hour_restart_forced() {
    let result = plan(
        &legs((2000.0, 30.77), (500.0, 7.69)),
        65.0,
        &common::default_locations(),
        common::default_start_date(),
    )
    .expect("restart scenario plans successfully");

    assert!(result.cycle_summary.cycle_after <= 70.0 + 0.02);
    let restart_stops: Vec<_> = result
        .stops
        .iter()
        .filter(|s| s.stop_type == StopType::Rest && s.location.contains("34hr restart"))
        .collect();
    assert_eq!(restart_stops.len(), 1, "exactly one 34-hour restart stop expected");
}

#[test]
fn scenario_6_midnight_crossover() {
    let start_date = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date");
    let result = plan(&legs((700.0, 10.77), (100.0, 1.54)), 0.0, &common::default_locations(), start_date)
        .expect("midnight crossover scenario plans successfully");

    assert!(result.daily_logs.len() >= 2);
    assert_eq!(result.daily_logs[0].date, start_date);
    assert_eq!(result.daily_logs[0].segments.last().expect("non-empty day").end, 24.0);

    assert_eq!(result.daily_logs[1].date, start_date.succ_opt().expect("valid date"));
    assert_eq!(result.daily_logs[1].segments.first().expect("non-empty day").start, 0.0);
}

#[test]
fn cycle_exhausted_preset_forces_restart() {
    let scenario = TripScenario::cycle_exhausted();
    let start_date = scenario.start_date.unwrap_or(common::default_start_date());
    let result = plan(&scenario.legs, scenario.cycle_used, &scenario.locations, start_date)
        .expect("preset plans successfully");

    let has_restart = result
        .daily_logs
        .iter()
        .flat_map(|d| &d.segments)
        .any(|s| s.status == DutyStatus::Sleeper && (s.duration() - 34.0).abs() < 0.02);
    assert!(has_restart);
}
