//! Top-level trip planning entry point and per-leg driving loop.

use chrono::NaiveDate;

use crate::error::EngineError;
use crate::format::format_clock;
use crate::model::{CycleSummary, DutyStatus, Leg, Locations, Stop, StopType, TripResult};

use super::events::{ensure_can_work, finish_trip, take_10hr_rest, take_34hr_restart, take_break, take_fuel_stop};
use super::limits::{Allowances, BindingRule};
use super::recorder::{add_on_duty, record};
use super::state::SimState;
use super::{
    EPSILON, FUEL_INTERVAL_MILES, MAX_CYCLE_HOURS, MAX_ITERATIONS, PICKUP_DROPOFF_DURATION,
    PRETRIP_INSPECTION_DURATION, SHIFT_START_HOUR,
};

/// Plans a two-leg trip under FMCSA Hours-of-Service rules.
///
/// `legs[0]` is origin→pickup, `legs[1]` is pickup→dropoff. Returns the
/// full day-by-day log, map stops, and post-trip cycle accounting.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if `legs` is not length 2, any leg
/// has a negative distance or duration, or `cycle_used` is outside
/// `[0, 70]`. Returns [`EngineError::Bounded`] if the driving loop exceeds
/// its iteration budget without completing.
pub fn plan(
    legs: &[Leg],
    cycle_used: f64,
    locations: &Locations,
    start_date: NaiveDate,
) -> Result<TripResult, EngineError> {
    validate_input(legs, cycle_used)?;

    let span = tracing::info_span!("plan", cycle_used, legs = legs.len());
    let _guard = span.enter();
    tracing::info!("trip start");

    let mut state = SimState::new(cycle_used, start_date);

    record(&mut state, DutyStatus::OffDuty, SHIFT_START_HOUR, "Off Duty");

    state.stops.push(Stop {
        stop_type: StopType::Start,
        location: locations.current.name.clone(),
        lat: locations.current.lat,
        lng: locations.current.lng,
        time: format_clock(SHIFT_START_HOUR),
        day: 1,
        duration_hrs: None,
    });

    state.shift_started = true;
    add_on_duty(
        &mut state,
        PRETRIP_INSPECTION_DURATION,
        &format!("Pre-trip inspection, {}", locations.current.name),
    );

    let destinations = [&locations.pickup, &locations.dropoff];
    let stop_types = [StopType::Pickup, StopType::Dropoff];

    for (i, leg) in legs.iter().enumerate() {
        let dest = destinations[i];
        tracing::info!(leg = i + 1, miles = leg.distance_miles, hours = leg.duration_hours, destination = %dest.name, "driving leg");

        drive_leg(&mut state, leg.distance_miles, leg.duration_hours, &dest.name)?;

        let stop_type = stop_types[i];
        state.stops.push(Stop {
            stop_type,
            location: dest.name.clone(),
            lat: dest.lat,
            lng: dest.lng,
            time: format_clock(state.current_time),
            day: state.current_day,
            duration_hrs: Some(PICKUP_DROPOFF_DURATION),
        });

        let verb = if stop_type == StopType::Pickup { "Pickup" } else { "Dropoff" };
        ensure_can_work(&mut state, PICKUP_DROPOFF_DURATION);
        add_on_duty(
            &mut state,
            PICKUP_DROPOFF_DURATION,
            &format!("{verb}, {}", dest.name),
        );
    }

    finish_trip(&mut state);

    let total_days = u32::try_from(state.daily_logs.len()).unwrap_or(u32::MAX);
    let cycle_after = round1(state.cycle_hours);
    let on_duty_this_trip = round1(state.cycle_hours - cycle_used);

    tracing::info!(total_days, total_miles = state.total_miles_driven, "trip done");

    Ok(TripResult {
        total_miles: round1(state.total_miles_driven),
        total_driving_hours: round1(state.total_driving_hours),
        total_days,
        stops: state.stops,
        daily_logs: state.daily_logs,
        cycle_summary: CycleSummary {
            cycle_before: cycle_used,
            on_duty_this_trip,
            cycle_after,
            remaining: round1(MAX_CYCLE_HOURS - cycle_after),
            limit: MAX_CYCLE_HOURS,
        },
    })
}

/// Drives a single leg, inserting breaks/rests/fuel stops as the limit
/// evaluator requires.
fn drive_leg(
    state: &mut SimState,
    leg_miles: f64,
    leg_hours: f64,
    destination: &str,
) -> Result<(), EngineError> {
    let mut remaining_miles = leg_miles;
    let mut remaining_hours = leg_hours;
    let mut iterations = 0usize;

    while remaining_hours > EPSILON {
        iterations += 1;
        if iterations > MAX_ITERATIONS {
            return Err(EngineError::Bounded {
                iterations,
            });
        }

        let allowances = Allowances::compute(state);
        let max_drive = allowances.max_drive(remaining_hours);

        if max_drive <= EPSILON {
            match allowances.binding_rule() {
                Some(BindingRule::Cycle) => take_34hr_restart(state),
                Some(BindingRule::Shift) => take_10hr_rest(state, destination),
                Some(BindingRule::Break) => take_break(state),
                Some(BindingRule::Fuel) => take_fuel_stop(state, destination),
                Some(BindingRule::Midnight) => {
                    super::recorder::save_day(state);
                    super::recorder::start_new_day(state);
                }
                None => {
                    return Err(EngineError::InternalInconsistency {
                        reason: "max_drive near zero but no binding rule identified".to_string(),
                    });
                }
            }
            continue;
        }

        let drive_miles = round1(remaining_miles * (max_drive / remaining_hours));
        record(state, DutyStatus::Driving, max_drive, &format!("Driving to {destination}"));

        state.shift_driving += max_drive;
        state.driving_since_break += max_drive;
        state.total_driving_hours += max_drive;
        state.miles_since_fuel += drive_miles;
        state.total_miles_driven += drive_miles;

        remaining_hours -= max_drive;
        remaining_miles -= drive_miles;

        tracing::info!(
            drove_hours = max_drive,
            drove_miles = drive_miles,
            shift_driving = state.shift_driving,
            window = state.shift_duty,
            since_break = state.driving_since_break,
            "drive chunk"
        );

        if state.miles_since_fuel >= FUEL_INTERVAL_MILES - 0.1 && remaining_hours > EPSILON {
            take_fuel_stop(state, destination);
        }
    }

    Ok(())
}

fn validate_input(legs: &[Leg], cycle_used: f64) -> Result<(), EngineError> {
    if legs.len() != 2 {
        return Err(EngineError::InvalidInput {
            reason: format!("expected exactly 2 legs, got {}", legs.len()),
        });
    }
    for (i, leg) in legs.iter().enumerate() {
        if leg.distance_miles < 0.0 || leg.duration_hours < 0.0 {
            return Err(EngineError::InvalidInput {
                reason: format!("leg {i} has a negative distance or duration"),
            });
        }
    }
    if !(0.0..=70.0).contains(&cycle_used) {
        return Err(EngineError::InvalidInput {
            reason: format!("cycle_used must be in [0, 70], got {cycle_used}"),
        });
    }
    Ok(())
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
