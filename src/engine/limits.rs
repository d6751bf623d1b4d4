//! Driving-limit computation and binding-rule selection.

use super::state::SimState;
use super::{
    AVG_SPEED_MPH, DRIVING_BEFORE_BREAK, EPSILON, FUEL_INTERVAL_MILES, MAX_CYCLE_HOURS,
    MAX_DRIVING_PER_SHIFT, MAX_DUTY_WINDOW,
};

/// Which rule is currently binding the driver from continuing to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingRule {
    /// The 70-hour cycle is exhausted; a 34-hour restart is required.
    Cycle,
    /// The 11-hour driving or 14-hour window limit is exhausted.
    Shift,
    /// 8 hours of driving have accumulated since the last break.
    Break,
    /// 1000 miles have accumulated since the last fuel stop.
    Fuel,
    /// The current day has run out (midnight reached).
    Midnight,
}

/// The per-axis allowances computed at one point in the simulation.
#[derive(Debug, Clone, Copy)]
pub struct Allowances {
    pub max_by_driving: f64,
    pub max_by_window: f64,
    pub max_by_break: f64,
    pub max_by_cycle: f64,
    pub max_by_fuel: f64,
    pub time_until_midnight: f64,
}

impl Allowances {
    /// Computes all six per-axis allowances from current state.
    pub fn compute(state: &SimState) -> Self {
        let max_by_fuel = if state.miles_since_fuel < FUEL_INTERVAL_MILES {
            (FUEL_INTERVAL_MILES - state.miles_since_fuel) / AVG_SPEED_MPH
        } else {
            0.0
        };

        Self {
            max_by_driving: MAX_DRIVING_PER_SHIFT - state.shift_driving,
            max_by_window: MAX_DUTY_WINDOW - state.shift_duty,
            max_by_break: DRIVING_BEFORE_BREAK - state.driving_since_break,
            max_by_cycle: MAX_CYCLE_HOURS - state.cycle_hours,
            max_by_fuel,
            time_until_midnight: 24.0 - state.current_time,
        }
    }

    /// The maximum hours drivable right now, bounded by every axis and by
    /// `remaining_hours` still owed on the current leg.
    pub fn max_drive(&self, remaining_hours: f64) -> f64 {
        let mut max_drive = self
            .max_by_driving
            .min(self.max_by_window)
            .min(self.max_by_break)
            .min(self.max_by_cycle)
            .min(self.max_by_fuel)
            .min(remaining_hours);

        if max_drive > self.time_until_midnight && self.time_until_midnight > 0.0 {
            max_drive = self.time_until_midnight;
        }
        max_drive
    }

    /// Which rule is binding, in fixed priority order, when `max_drive` is
    /// effectively zero. Returns `None` if nothing is actually binding.
    pub fn binding_rule(&self) -> Option<BindingRule> {
        if self.max_by_cycle <= EPSILON {
            Some(BindingRule::Cycle)
        } else if self.max_by_driving <= EPSILON || self.max_by_window <= EPSILON {
            Some(BindingRule::Shift)
        } else if self.max_by_break <= EPSILON {
            Some(BindingRule::Break)
        } else if self.max_by_fuel <= EPSILON {
            Some(BindingRule::Fuel)
        } else if self.time_until_midnight <= EPSILON {
            Some(BindingRule::Midnight)
        } else {
            None
        }
    }
}
