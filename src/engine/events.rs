//! Mandatory interruption routines: break, fuel stop, 10-hour rest, and
//! 34-hour cycle restart.

use crate::format::format_clock;
use crate::model::{DutyStatus, Stop, StopType};

use super::recorder::{add_break, add_on_duty, record, save_day};
use super::state::SimState;
use super::{
    CYCLE_RESTART_DURATION, EPSILON, FUEL_STOP_DURATION, MAX_CYCLE_HOURS, MAX_DUTY_WINDOW,
    PRETRIP_INSPECTION_DURATION, REST_DURATION,
};

/// Takes a 30-minute off-duty break. Resets `driving_since_break`; charges
/// `shift_duty` but never `cycle_hours`.
pub fn take_break(state: &mut SimState) {
    tracing::info!(day = state.current_day, "30-min break");
    add_break(state, "30-min break");
}

/// Takes a 30-minute fuel stop near `destination`, then resets
/// `miles_since_fuel`.
pub fn take_fuel_stop(state: &mut SimState, destination: &str) {
    let note = if destination.is_empty() {
        "Fuel stop".to_string()
    } else {
        format!("Fuel stop near {destination}")
    };

    state.stops.push(Stop {
        stop_type: StopType::Fuel,
        location: if destination.is_empty() {
            "En route".to_string()
        } else {
            destination.to_string()
        },
        lat: 0.0,
        lng: 0.0,
        time: format_clock(state.current_time),
        day: state.current_day,
        duration_hrs: Some(FUEL_STOP_DURATION),
    });

    tracing::info!(day = state.current_day, miles_since_fuel = state.miles_since_fuel, "fuel stop");
    add_on_duty(state, FUEL_STOP_DURATION, &note);
    state.miles_since_fuel = 0.0;
}

/// Takes the 10-hour consolidated rest. Resets all three shift counters and
/// immediately records the following pre-trip inspection.
pub fn take_10hr_rest(state: &mut SimState, near_location: &str) {
    tracing::info!(day = state.current_day, "10-hour rest");

    if !near_location.is_empty() {
        state.stops.push(Stop {
            stop_type: StopType::Rest,
            location: near_location.to_string(),
            lat: 0.0,
            lng: 0.0,
            time: format_clock(state.current_time),
            day: state.current_day,
            duration_hrs: Some(REST_DURATION),
        });
    }

    let note = if near_location.is_empty() {
        "Sleeper Berth".to_string()
    } else {
        format!("Sleeper Berth, {near_location}")
    };
    record(state, DutyStatus::Sleeper, REST_DURATION, &note);

    state.shift_driving = 0.0;
    state.shift_duty = 0.0;
    state.driving_since_break = 0.0;

    add_on_duty(state, PRETRIP_INSPECTION_DURATION, "Pre-trip inspection");
}

/// Takes the 34-hour cycle restart. Resets every counter including
/// `cycle_hours`, then records the following pre-trip inspection.
pub fn take_34hr_restart(state: &mut SimState) {
    tracing::info!(day = state.current_day, "34-hour restart");

    state.stops.push(Stop {
        stop_type: StopType::Rest,
        location: "En route (34hr restart)".to_string(),
        lat: 0.0,
        lng: 0.0,
        time: format_clock(state.current_time),
        day: state.current_day,
        duration_hrs: Some(CYCLE_RESTART_DURATION),
    });

    record(state, DutyStatus::Sleeper, CYCLE_RESTART_DURATION, "34-hour restart");

    state.shift_driving = 0.0;
    state.shift_duty = 0.0;
    state.driving_since_break = 0.0;
    state.cycle_hours = 0.0;

    add_on_duty(state, PRETRIP_INSPECTION_DURATION, "Pre-trip inspection");
}

/// Ensures `duration` hours of on-duty work can be done right now, taking a
/// restart or rest first if the cycle or window can't absorb it. Cycle has
/// priority: only one corrective action is taken per call.
pub fn ensure_can_work(state: &mut SimState, duration: f64) {
    let available_window = MAX_DUTY_WINDOW - state.shift_duty;
    let available_cycle = MAX_CYCLE_HOURS - state.cycle_hours;

    if available_cycle < duration {
        take_34hr_restart(state);
    } else if available_window < duration {
        take_10hr_rest(state, "");
    }
}

/// Pads the trip's final day with off-duty time through midnight, then
/// saves it. Called once, after the last leg is driven.
pub fn finish_trip(state: &mut SimState) {
    let remaining = 24.0 - state.current_time;
    if remaining > EPSILON {
        record(state, DutyStatus::OffDuty, remaining, "Off Duty — Trip Complete");
    }
    save_day(state);
}
