//! Segment recording: the single midnight-aware primitive every multi-hour
//! interruption and on-duty addition shares.

use crate::model::{DailyLog, DutyStatus, HoursSummary, Segment};

use super::state::SimState;
use super::{BREAK_DURATION, EPSILON};

/// Appends a segment that fits entirely within the current day, clamping
/// `end` to 24.0 and advancing `current_time`.
///
/// Does not itself handle midnight overflow — callers needing that use
/// [`record`].
fn add_segment(state: &mut SimState, status: DutyStatus, duration: f64, note: &str) {
    let start = round2(state.current_time);
    let end = round2((start + duration).min(24.0));
    state.segments.push(Segment {
        status,
        start,
        end,
        note: note.to_string(),
    });
    state.current_time = end;
}

/// Records `duration` hours of `status`, splitting across midnight as many
/// times as needed, saving and starting new days along the way.
///
/// For `Driving` and `OnDuty` statuses, each recorded chunk also charges
/// `shift_duty` and `cycle_hours`; `OffDuty` and `Sleeper` chunks never
/// touch those counters — including the 30-minute break, whose
/// `shift_duty` charge is applied once, after the fact, by
/// [`super::events::take_break`].
pub fn record(state: &mut SimState, status: DutyStatus, duration: f64, note: &str) {
    let mut remaining = duration;
    while remaining > EPSILON {
        let time_until_midnight = 24.0 - state.current_time;
        let chunk = remaining.min(time_until_midnight);

        if chunk <= EPSILON {
            save_day(state);
            start_new_day(state);
            continue;
        }

        add_segment(state, status, chunk, note);
        if status.charges_cycle() {
            state.shift_duty += chunk;
            state.cycle_hours += chunk;
        }
        remaining -= chunk;

        if state.current_time >= 24.0 - EPSILON && remaining > EPSILON {
            save_day(state);
            start_new_day(state);
        }
    }
}

/// Records `duration` hours of on-duty (non-driving) work.
pub fn add_on_duty(state: &mut SimState, duration: f64, note: &str) {
    record(state, DutyStatus::OnDuty, duration, note);
}

/// Records the 30-minute break as off-duty, then applies its `shift_duty`
/// charge once as a post-adjustment (it never charges the cycle).
pub fn add_break(state: &mut SimState, note: &str) {
    record(state, DutyStatus::OffDuty, BREAK_DURATION, note);
    state.driving_since_break = 0.0;
    state.shift_duty += BREAK_DURATION;
}

/// Flushes the current day's segments into `daily_logs`.
pub fn save_day(state: &mut SimState) {
    let day_num = state.current_day;
    let day_date = state.current_date();

    let mut hours = HoursSummary::default();
    let mut total_day_miles = 0.0;
    for seg in &state.segments {
        let dur = round2(seg.duration());
        match seg.status {
            DutyStatus::OffDuty => hours.off_duty += dur,
            DutyStatus::Sleeper => hours.sleeper += dur,
            DutyStatus::Driving => {
                hours.driving += dur;
                total_day_miles += dur * super::AVG_SPEED_MPH;
            }
            DutyStatus::OnDuty => hours.on_duty += dur,
        }
    }
    hours.off_duty = round1(hours.off_duty);
    hours.sleeper = round1(hours.sleeper);
    hours.driving = round1(hours.driving);
    hours.on_duty = round1(hours.on_duty);

    tracing::info!(
        day = day_num,
        driving = hours.driving,
        on_duty = hours.on_duty,
        off_duty = hours.off_duty,
        sleeper = hours.sleeper,
        "day saved"
    );

    state.daily_logs.push(DailyLog {
        day: day_num,
        date: day_date,
        segments: std::mem::take(&mut state.segments),
        hours_summary: hours,
        total_miles: round1(total_day_miles),
    });
}

/// Starts a new day with an empty segment buffer.
pub fn start_new_day(state: &mut SimState) {
    state.current_day += 1;
    state.current_time = 0.0;
    state.segments.clear();
    tracing::info!(day = state.current_day, "new day started");
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
